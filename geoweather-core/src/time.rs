use crate::format::clock;

/// Local wall-clock time at the queried place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReading {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeReading {
    pub fn clock(&self) -> String {
        clock(self.hours, self.minutes)
    }
}

/// Shifts a UTC hour/minute by a timezone offset in seconds.
///
/// The offset is added as fractional hours. Only a fractional part of exactly
/// one half is turned into thirty minutes; any other fraction (e.g. +5:45) is
/// dropped. Hours wrap into 0..24.
pub fn local_time(utc_hour: u32, utc_minute: u32, offset_seconds: i64) -> TimeReading {
    let mut hours = f64::from(utc_hour) + offset_seconds as f64 / 3600.0;
    let mut minutes = utc_minute;

    if hours.rem_euclid(1.0) == 0.5 {
        hours -= 0.5;
        minutes += 30;
        if minutes >= 60 {
            hours += 1.0;
            minutes %= 60;
        }
    }

    let hours = (hours.floor() as i64).rem_euclid(24) as u32;
    TimeReading { hours, minutes }
}

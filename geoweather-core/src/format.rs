//! Pure display formatting for weather and time values.

/// Text shown in the wind-direction slot; the upstream payload carries no direction.
pub const WIND_DIRECTION_TEXT: &str = "Wind";

/// Place label used when the payload has no settlement name.
pub const UNKNOWN_PLACE: &str = "Outside a populated area";

/// Rounds ties toward positive infinity, matching browser `Math.round`.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    // `round` sends negative ties away from zero; pull them back up.
    if value - rounded == 0.5 { rounded + 1.0 } else { rounded }
}

/// Kelvin to whole degrees Celsius. Uses 273, not 273.15.
pub fn celsius_from_kelvin(kelvin: f64) -> i64 {
    round_half_up(kelvin - 273.0) as i64
}

/// Metres per second to km/h with one decimal place.
pub fn wind_kmh(speed_mps: f64) -> f64 {
    round_half_up(speed_mps * 36.0) / 10.0
}

/// Renders a coordinate as `INT'FF`.
///
/// The integer part is the floor of the value and `FF` is the remaining
/// fraction scaled to two digits, so `-55.75` becomes `-56'25`.
pub fn format_coordinate(value: f64) -> String {
    let mut integer = value.floor();
    let mut decimal = round_half_up((value - integer) * 100.0) as i64;
    if decimal >= 100 {
        integer += 1.0;
        decimal -= 100;
    }
    format!("{}'{:02}", integer as i64, decimal)
}

/// Zero-padded `HH:MM`.
pub fn clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

pub fn temperature_text(celsius: i64) -> String {
    format!("{celsius}°C")
}

pub fn pressure_text(hpa: f64) -> String {
    format!("{hpa} hPa")
}

pub fn humidity_text(pct: f64) -> String {
    format!("{pct}%")
}

pub fn wind_text(kmh: f64) -> String {
    format!("{kmh} km/h")
}

/// Icon image location for an OpenWeather icon code, e.g. `10d`.
pub fn icon_url(base: &str, code: &str) -> String {
    format!("{}/{code}.png", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_uses_273_offset() {
        assert_eq!(celsius_from_kelvin(273.0), 0);
        assert_eq!(celsius_from_kelvin(293.4), 20);
        assert_eq!(celsius_from_kelvin(293.5), 21);
        assert_eq!(celsius_from_kelvin(273.15), 0);
    }

    #[test]
    fn negative_ties_round_up() {
        assert_eq!(celsius_from_kelvin(270.5), -2);
        assert_eq!(celsius_from_kelvin(270.4), -3);
    }

    #[test]
    fn round_half_up_matches_browser_rounding() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn wind_speed_converts_to_kmh() {
        assert_eq!(wind_kmh(0.0), 0.0);
        assert_eq!(wind_kmh(1.0), 3.6);
        assert_eq!(wind_kmh(5.0), 18.0);
        assert_eq!(wind_kmh(4.12), 14.8);
    }

    #[test]
    fn coordinate_splits_integer_and_fraction() {
        assert_eq!(format_coordinate(55.75), "55'75");
        assert_eq!(format_coordinate(37.6), "37'60");
        assert_eq!(format_coordinate(10.0), "10'00");
        assert_eq!(format_coordinate(10.05), "10'05");
        assert_eq!(format_coordinate(-55.75), "-56'25");
    }

    #[test]
    fn coordinate_fraction_carries_on_rounding() {
        assert_eq!(format_coordinate(55.999), "56'00");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(clock(5, 7), "05:07");
        assert_eq!(clock(23, 59), "23:59");
    }

    #[test]
    fn display_texts() {
        assert_eq!(temperature_text(celsius_from_kelvin(300.0)), "27°C");
        assert_eq!(pressure_text(1013.0), "1013 hPa");
        assert_eq!(humidity_text(64.0), "64%");
        assert_eq!(wind_text(wind_kmh(5.0)), "18 km/h");
        assert_eq!(wind_text(3.6), "3.6 km/h");
        assert_eq!(
            icon_url("https://openweathermap.org/img/wn/", "10d"),
            "https://openweathermap.org/img/wn/10d.png"
        );
    }
}

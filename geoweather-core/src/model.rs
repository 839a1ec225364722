use crate::validate::parse_float;

/// Decimal-degree coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parses raw input text; unparseable components become NaN.
    pub fn parse(latitude: &str, longitude: &str) -> Self {
        Self::new(parse_float(latitude), parse_float(longitude))
    }
}

/// Current conditions, already converted to display units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub pressure_hpa: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    /// `None` when the point lies outside any named settlement.
    pub place: Option<String>,
    /// Shift from UTC in seconds.
    pub timezone_offset_s: i64,
    pub icon: String,
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    format::{celsius_from_kelvin, wind_kmh},
    model::{Coordinate, WeatherReading},
    provider::read_body,
};

use super::WeatherSource;

const SOURCE: &str = "OpenWeather";

/// Current-weather client. Requests are sent without `units`, so
/// temperatures arrive in kelvin.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            url,
            api_key,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    timezone: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_reading(self) -> Result<WeatherReading, FetchError> {
        let icon = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.icon)
            .ok_or(FetchError::MissingField { source_name: SOURCE, field: "weather[0]" })?;

        Ok(WeatherReading {
            temperature_c: celsius_from_kelvin(self.main.temp),
            feels_like_c: celsius_from_kelvin(self.main.feels_like),
            pressure_hpa: self.main.pressure,
            humidity_pct: self.main.humidity,
            wind_speed_kmh: wind_kmh(self.wind.speed),
            place: self.name.filter(|n| !n.is_empty()),
            timezone_offset_s: self.timezone,
            icon,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, coordinate: &Coordinate) -> Result<WeatherReading, FetchError> {
        tracing::debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "requesting current weather"
        );

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|error| FetchError::Transport { source_name: SOURCE, error })?;

        let body = read_body(SOURCE, res).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|error| FetchError::Payload { source_name: SOURCE, error })?;

        parsed.into_reading()
    }
}

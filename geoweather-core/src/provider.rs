use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Response;
use std::fmt::Debug;

use crate::{
    Config, Coordinate, WeatherReading,
    error::FetchError,
    provider::{openweather::OpenWeatherClient, worldtime::WorldTimeClient},
};

pub mod openweather;
pub mod worldtime;

/// Source of current conditions for a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, coordinate: &Coordinate) -> Result<WeatherReading, FetchError>;
}

/// Source of the current UTC time.
#[async_trait]
pub trait TimeSource: Send + Sync + Debug {
    async fn utc_now(&self) -> Result<DateTime<Utc>, FetchError>;
}

/// Construct the weather client from config.
pub fn weather_source_from_config(config: &Config) -> anyhow::Result<OpenWeatherClient> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|_| config.is_configured())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No OpenWeather API key configured.\n\
                     Hint: run `geoweather configure` and enter your API key."
            )
        })?;

    Ok(OpenWeatherClient::new(config.weather_url.clone(), api_key.to_owned()))
}

pub fn time_source_from_config(config: &Config) -> WorldTimeClient {
    WorldTimeClient::new(config.time_url.clone())
}

/// Reads the body of a response, turning a non-success status into an error.
pub(crate) async fn read_body(
    source_name: &'static str,
    res: Response,
) -> Result<String, FetchError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|error| FetchError::Transport { source_name, error })?;

    if !status.is_success() {
        return Err(FetchError::Status { source_name, status, body: truncate_body(&body) });
    }

    Ok(body)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_source_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = weather_source_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn weather_source_errors_when_api_key_is_empty() {
        let mut cfg = Config::default();
        cfg.set_api_key(String::new());

        let err = weather_source_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn weather_source_works_when_configured() {
        let mut cfg = Config::default();
        cfg.api_key = Some("KEY".to_string());

        assert!(weather_source_from_config(&cfg).is_ok());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "я".repeat(150);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);
        assert_eq!(truncate_body("short"), "short");
    }
}

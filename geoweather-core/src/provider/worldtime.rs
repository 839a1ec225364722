use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{error::FetchError, provider::read_body};

use super::TimeSource;

const SOURCE: &str = "WorldTime";

/// Reads the current UTC instant from a `utc_datetime` JSON field.
#[derive(Debug, Clone)]
pub struct WorldTimeClient {
    url: String,
    http: Client,
}

impl WorldTimeClient {
    pub fn new(url: String) -> Self {
        Self { url, http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct WtResponse {
    utc_datetime: String,
}

fn parse_utc(raw: &str) -> Result<DateTime<Utc>, FetchError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FetchError::InvalidField {
            source_name: SOURCE,
            field: "utc_datetime",
            reason: e.to_string(),
        })
}

#[async_trait]
impl TimeSource for WorldTimeClient {
    async fn utc_now(&self) -> Result<DateTime<Utc>, FetchError> {
        let res = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|error| FetchError::Transport { source_name: SOURCE, error })?;

        let body = read_body(SOURCE, res).await?;

        let parsed: WtResponse = serde_json::from_str(&body)
            .map_err(|error| FetchError::Payload { source_name: SOURCE, error })?;

        parse_utc(&parsed.utc_datetime)
    }
}

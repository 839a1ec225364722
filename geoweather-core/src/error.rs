use reqwest::StatusCode;

/// Failure of a single outbound fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{source_name} request could not be sent: {error}")]
    Transport {
        source_name: &'static str,
        #[source]
        error: reqwest::Error,
    },

    #[error("{source_name} request failed with status {status}: {body}")]
    Status {
        source_name: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("failed to parse {source_name} payload: {error}")]
    Payload {
        source_name: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("{source_name} payload is missing `{field}`")]
    MissingField {
        source_name: &'static str,
        field: &'static str,
    },

    #[error("{source_name} payload has an invalid `{field}`: {reason}")]
    InvalidField {
        source_name: &'static str,
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("map library never signalled ready: {0}")]
    NotReady(String),

    #[error("failed to create map in `{container}`: {reason}")]
    Create { container: String, reason: String },
}

/// Error escaping a whole lookup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to show weather")]
    ShowWeather(#[source] MapError),
}

use thiserror::Error;

/// Connectivity failure reported by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors produced anywhere along the fetch pipeline.
///
/// Layers above the API client never wrap or enrich these; they reach the
/// presentation layer exactly as they were raised.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The server answered with anything other than `200 OK`.
    #[error("bad server response: HTTP status {status}")]
    BadStatus { status: u16 },

    /// The body was not JSON or lacked `current_weather.temperature` / `weathercode`.
    #[error("cannot parse weather response: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WeatherError {
    pub fn is_bad_status(&self) -> bool {
        matches!(self, WeatherError::BadStatus { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, WeatherError::Parse { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, WeatherError::Network(_))
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(source: serde_json::Error) -> Self {
        WeatherError::Parse { source }
    }
}

//! Client for the Open-Meteo current weather endpoint.

use std::fmt::Debug;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{RawWeatherEnvelope, WeatherResponseRecord},
    transport::Transport,
};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_LATITUDE: f64 = 43.7;
pub const DEFAULT_LONGITUDE: f64 = -79.42;

#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    /// Fetches current weather. `city` is accepted for the caller's benefit but
    /// does not select the location: the endpoint coordinates are fixed.
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponseRecord, WeatherError>;
}

/// Fixed location the client always queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl Endpoint {
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(anyhow!("Latitude {} is out of range [-90, 90]", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(anyhow!("Longitude {} is out of range [-180, 180]", self.longitude));
        }
        Url::parse(&self.base_url)
            .with_context(|| format!("Invalid weather API base URL: {}", self.base_url))?;
        Ok(())
    }

    /// Full request URL with `current_weather=true`.
    pub fn url(&self) -> Result<Url> {
        self.validate()?;

        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ],
        )?;

        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient<T> {
    transport: T,
    url: Url,
}

impl<T: Transport> OpenMeteoClient<T> {
    pub fn new(transport: T, endpoint: &Endpoint) -> Result<Self> {
        Ok(Self {
            transport,
            url: endpoint.url()?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<T: Transport> WeatherApi for OpenMeteoClient<T> {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponseRecord, WeatherError> {
        debug!(city, url = %self.url, "requesting current weather");

        let res = self.transport.fetch(&self.url).await?;

        if res.status != 200 {
            warn!(status = res.status, "weather provider returned a non-200 status");
            return Err(WeatherError::BadStatus { status: res.status });
        }

        let envelope: RawWeatherEnvelope = serde_json::from_slice(&res.body)?;
        Ok(envelope.current_weather.into())
    }
}

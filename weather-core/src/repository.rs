use std::fmt::Debug;

use async_trait::async_trait;

use crate::{api::WeatherApi, error::WeatherError, mapper::map_to_domain, model::Weather};

#[async_trait]
pub trait WeatherRepository: Send + Sync + Debug {
    async fn get_weather(&self, city: &str) -> Result<Weather, WeatherError>;
}

/// Repository backed by a [`WeatherApi`]; errors pass through untouched.
#[derive(Debug, Clone)]
pub struct ApiWeatherRepository<A> {
    api: A,
}

impl<A: WeatherApi> ApiWeatherRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: WeatherApi> WeatherRepository for ApiWeatherRepository<A> {
    async fn get_weather(&self, city: &str) -> Result<Weather, WeatherError> {
        let record = self.api.fetch_weather(city).await?;
        Ok(map_to_domain(&record))
    }
}

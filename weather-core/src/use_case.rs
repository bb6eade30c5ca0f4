use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::WeatherError, model::Weather, repository::WeatherRepository};

/// Seam between the presentation layer and the repository.
#[async_trait]
pub trait FetchWeather: Send + Sync + Debug {
    async fn execute(&self, city: &str) -> Result<Weather, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct FetchWeatherUseCase<R> {
    repository: R,
}

impl<R: WeatherRepository> FetchWeatherUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: WeatherRepository> FetchWeather for FetchWeatherUseCase<R> {
    async fn execute(&self, city: &str) -> Result<Weather, WeatherError> {
        self.repository.get_weather(city).await
    }
}

//! Core library for the `weather` CLI.
//!
//! This crate defines the current-weather lookup pipeline:
//! - A transport seam and the Open-Meteo API client
//! - Mapping from wire records to domain values and display strings
//! - Repository and use-case seams
//! - The presentation state holder driven by the UI
//! - Configuration and the composition root wiring it all together
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod config;
pub mod doubles;
pub mod error;
pub mod mapper;
pub mod model;
pub mod presentation;
pub mod repository;
pub mod telemetry;
pub mod transport;
pub mod use_case;
pub mod wiring;

pub use api::{Endpoint, OpenMeteoClient, WeatherApi};
pub use config::Config;
pub use error::{TransportError, WeatherError};
pub use model::{PresentationState, Weather, WeatherResponseRecord, WeatherViewData};
pub use presentation::{FetchOutcome, WeatherViewModel};
pub use repository::{ApiWeatherRepository, WeatherRepository};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use use_case::{FetchWeather, FetchWeatherUseCase};

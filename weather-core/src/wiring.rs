//! Composition root: the only place concrete collaborators are chosen.

use anyhow::{Context, Result};

use crate::{
    api::{OpenMeteoClient, WeatherApi},
    config::Config,
    doubles::FakeWeatherApi,
    presentation::WeatherViewModel,
    repository::ApiWeatherRepository,
    telemetry::{TracingAnalyticsTracker, TracingLogSink},
    transport::ReqwestTransport,
    use_case::FetchWeatherUseCase,
};

/// View model talking to the configured weather API over HTTP.
pub fn build_view_model(config: &Config) -> Result<WeatherViewModel> {
    config.validate()?;

    let transport =
        ReqwestTransport::new(config.timeout()).context("Failed to build HTTP client")?;
    let api = OpenMeteoClient::new(transport, &config.endpoint)?;

    Ok(view_model_with_api(api, config))
}

/// View model backed by [`FakeWeatherApi`]; never touches the network.
pub fn build_offline_view_model(config: &Config) -> WeatherViewModel {
    view_model_with_api(FakeWeatherApi, config)
}

fn view_model_with_api(api: impl WeatherApi + 'static, config: &Config) -> WeatherViewModel {
    let use_case = FetchWeatherUseCase::new(ApiWeatherRepository::new(api));
    let view_model = WeatherViewModel::new(use_case, TracingAnalyticsTracker, TracingLogSink);
    view_model.set_city(config.default_city.as_str());
    view_model
}

//! State holder behind the weather screen.
//!
//! State lives in a [`watch`] channel so a renderer can observe every
//! transition, including `is_loading` flipping on while a fetch is in flight.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::{
    mapper::map_to_view_data,
    model::PresentationState,
    telemetry::{AnalyticsTracker, LogSink},
    use_case::FetchWeather,
};

/// Shown to the user for every failure; details only go to the log sink.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch weather.";

pub const WEATHER_FETCHED_EVENT: &str = "WeatherFetched";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Failed,
    /// Another fetch was still running, so this trigger did nothing.
    AlreadyLoading,
}

#[derive(Debug)]
pub struct WeatherViewModel {
    use_case: Arc<dyn FetchWeather>,
    analytics: Arc<dyn AnalyticsTracker>,
    logger: Arc<dyn LogSink>,
    state: watch::Sender<PresentationState>,
}

impl WeatherViewModel {
    pub fn new(
        use_case: impl FetchWeather + 'static,
        analytics: impl AnalyticsTracker + 'static,
        logger: impl LogSink + 'static,
    ) -> Self {
        let (state, _) = watch::channel(PresentationState::default());

        Self {
            use_case: Arc::new(use_case),
            analytics: Arc::new(analytics),
            logger: Arc::new(logger),
            state,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PresentationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.state.subscribe()
    }

    pub fn set_city(&self, city: impl Into<String>) {
        let city = city.into();
        self.state.send_if_modified(|state| {
            if state.city == city {
                return false;
            }
            state.city = city;
            true
        });
    }

    /// Runs the pipeline for the city entered at call time.
    ///
    /// Triggers arriving while a fetch is in flight are ignored. Editing the
    /// city mid-flight does not affect the running fetch.
    pub async fn fetch_weather(&self) -> FetchOutcome {
        let mut requested_city = None;
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.is_loading = true;
            state.error_message = None;
            requested_city = Some(state.city.clone());
            true
        });

        let Some(city) = requested_city else {
            debug!("weather fetch already in flight; ignoring trigger");
            return FetchOutcome::AlreadyLoading;
        };

        let _loading = LoadingGuard { state: &self.state };

        match self.use_case.execute(&city).await {
            Ok(weather) => {
                let view_data = map_to_view_data(&weather);
                self.state.send_modify(|state| {
                    state.weather_view_data = Some(view_data);
                    state.is_loading = false;
                });
                self.analytics.track(WEATHER_FETCHED_EVENT);
                FetchOutcome::Loaded
            }
            Err(err) => {
                self.state.send_modify(|state| {
                    state.weather_view_data = None;
                    state.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
                    state.is_loading = false;
                });
                self.logger.log(&format!("Error: {err}"));
                FetchOutcome::Failed
            }
        }
    }
}

/// Clears `is_loading` if a fetch future is dropped before it settles.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<PresentationState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| std::mem::replace(&mut state.is_loading, false));
    }
}

//! Alternate implementations of the pipeline's collaborators.
//!
//! These are plain types picked through constructor injection: stubs answer
//! with configured values, the fake always returns the same record, dummies
//! do nothing, and spies record what they were called with.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use reqwest::Url;

use crate::{
    api::WeatherApi,
    error::{TransportError, WeatherError},
    model::WeatherResponseRecord,
    telemetry::{AnalyticsTracker, LogSink},
    transport::{Transport, TransportResponse},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Transport answering every request with the same response (or failure),
/// recording the URLs it was asked for. Clones share the recording.
#[derive(Debug, Clone)]
pub struct StubTransport {
    response: Result<TransportResponse, TransportError>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl StubTransport {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            response: Ok(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            requests: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(TransportError::new(message)),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        lock(&self.requests).push(url.clone());
        self.response.clone()
    }
}

type ErrorFactory = Arc<dyn Fn() -> WeatherError + Send + Sync>;

#[derive(Clone)]
enum StubOutcome {
    Record(WeatherResponseRecord),
    Error(ErrorFactory),
}

/// API client returning a configurable record or error.
#[derive(Clone)]
pub struct StubWeatherApi {
    outcome: StubOutcome,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubWeatherApi {
    pub fn returning(record: WeatherResponseRecord) -> Self {
        Self {
            outcome: StubOutcome::Record(record),
            calls: Arc::default(),
        }
    }

    /// `make_error` runs once per call, since [`WeatherError`] is not `Clone`.
    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> WeatherError + Send + Sync + 'static,
    {
        Self {
            outcome: StubOutcome::Error(Arc::new(make_error)),
            calls: Arc::default(),
        }
    }

    /// Cities passed to `fetch_weather`, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

impl Default for StubWeatherApi {
    fn default() -> Self {
        Self::returning(WeatherResponseRecord {
            temperature: 25.0,
            condition: "Sunny".to_string(),
        })
    }
}

impl fmt::Debug for StubWeatherApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match &self.outcome {
            StubOutcome::Record(record) => format!("{record:?}"),
            StubOutcome::Error(_) => "<error>".to_string(),
        };
        f.debug_struct("StubWeatherApi")
            .field("outcome", &outcome)
            .field("calls", &self.calls())
            .finish()
    }
}

#[async_trait]
impl WeatherApi for StubWeatherApi {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponseRecord, WeatherError> {
        lock(&self.calls).push(city.to_string());
        match &self.outcome {
            StubOutcome::Record(record) => Ok(record.clone()),
            StubOutcome::Error(make_error) => Err(make_error()),
        }
    }
}

/// API client that always reports the same weather; used for offline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeWeatherApi;

impl FakeWeatherApi {
    pub const TEMPERATURE: f64 = 19.5;
    pub const CONDITION: &'static str = "Fake Cloudy";
}

#[async_trait]
impl WeatherApi for FakeWeatherApi {
    async fn fetch_weather(&self, _city: &str) -> Result<WeatherResponseRecord, WeatherError> {
        Ok(WeatherResponseRecord {
            temperature: Self::TEMPERATURE,
            condition: Self::CONDITION.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyAnalyticsTracker;

impl AnalyticsTracker for DummyAnalyticsTracker {
    fn track(&self, _event: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyLogSink;

impl LogSink for DummyLogSink {
    fn log(&self, _message: &str) {}
}

/// Records tracked events. Clones share the recording.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsTrackerSpy {
    events: Arc<Mutex<Vec<String>>>,
}

impl AnalyticsTrackerSpy {
    pub fn events(&self) -> Vec<String> {
        lock(&self.events).clone()
    }

    pub fn track_calls_count(&self) -> usize {
        lock(&self.events).len()
    }
}

impl AnalyticsTracker for AnalyticsTrackerSpy {
    fn track(&self, event: &str) {
        lock(&self.events).push(event.to_string());
    }
}

/// Records logged messages. Clones share the recording.
#[derive(Debug, Clone, Default)]
pub struct LogSinkSpy {
    messages: Arc<Mutex<Vec<String>>>,
}

impl LogSinkSpy {
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }

    pub fn log_calls_count(&self) -> usize {
        lock(&self.messages).len()
    }
}

impl LogSink for LogSinkSpy {
    fn log(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

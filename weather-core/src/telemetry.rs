//! Fire-and-forget side channels used by the presentation layer.

use std::fmt::Debug;

use tracing::{error, info};

pub trait AnalyticsTracker: Send + Sync + Debug {
    fn track(&self, event: &str);
}

pub trait LogSink: Send + Sync + Debug {
    fn log(&self, message: &str);
}

/// Reports analytics events as `tracing` events on the `analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsTracker;

impl AnalyticsTracker for TracingAnalyticsTracker {
    fn track(&self, event: &str) {
        info!(target: "analytics", event, "analytics event");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, message: &str) {
        error!("{message}");
    }
}

use crate::event::AnalyticsEvent;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{Level, event};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("analytics backend unavailable: {0}")]
    Unavailable(String),
    #[error("analytics event rejected: {0}")]
    Rejected(String),
}

/// Receiver for content-interaction events. Implementations must not block
/// for long; delivery is best effort.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// Emits each event as a structured `tracing` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, analytics: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let payload = analytics.payload();
        event!(
            target: "showcase::analytics",
            Level::INFO,
            name = payload.name.as_str(),
            content_type = payload.content_type.as_str(),
            content_id = payload.content_id.as_str(),
            category = payload.category.as_deref().unwrap_or(""),
            "analytics event"
        );
        Ok(())
    }
}

/// Keeps the most recent events in memory.
#[derive(Debug)]
pub struct RecordingSink {
    retention: usize,
    records: RwLock<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    pub fn new(retention: usize) -> Self {
        Self {
            retention: retention.max(1),
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Vec<AnalyticsEvent> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new(256)
    }
}

impl AnalyticsSink for RecordingSink {
    fn record(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let mut records = self.records.write();
        records.push(event.clone());
        if records.len() > self.retention {
            let overflow = records.len() - self.retention;
            records.drain(0..overflow);
        }
        Ok(())
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for Arc<S> {
    fn record(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        (**self).record(event)
    }
}

/// Fire-and-forget front for a sink: failures are logged and swallowed.
pub struct Notifier {
    sink: Box<dyn AnalyticsSink>,
}

impl Notifier {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    pub fn disabled() -> Self {
        Self::new(NullSink)
    }

    /// Returns whether the sink accepted the event.
    pub fn notify(&self, analytics: &AnalyticsEvent) -> bool {
        match self.sink.record(analytics) {
            Ok(()) => true,
            Err(err) => {
                event!(
                    Level::WARN,
                    content_type = analytics.content_type().as_str(),
                    content_id = analytics.content_id(),
                    error = %err,
                    "analytics notification dropped"
                );
                false
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}

pub mod event;
pub mod sink;

pub use event::{AnalyticsEvent, ContentType, EventPayload};
pub use sink::{AnalyticsError, AnalyticsSink, Notifier, NullSink, RecordingSink, TracingSink};

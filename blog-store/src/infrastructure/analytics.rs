//! Fire-and-forget usage events, emitted as structured log records.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

pub fn track_event(event: &str, payload: Option<Value>) -> AnalyticsEvent {
    let record = AnalyticsEvent {
        event: event.to_string(),
        payload,
        timestamp: Utc::now().timestamp_millis(),
    };

    match serde_json::to_string(&record) {
        Ok(json) => info!(
            target: "analytics",
            event = %record.event,
            data = %json,
            "analytics event"
        ),
        Err(e) => info!(
            target: "analytics",
            event = %record.event,
            error = %e,
            "analytics event"
        ),
    }

    record
}

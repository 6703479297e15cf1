use serde_json::Value;

pub const EVENT_ANALYSIS_STARTED: &str = "seo_analysis_started";
pub const EVENT_ANALYSIS_COMPLETED: &str = "seo_analysis_completed";
pub const EVENT_ANALYSIS_FAILED: &str = "seo_analysis_failed";

/// Best-effort analytics channel. Implementations must not block the
/// analysis and must swallow their own failures; nothing recorded here may
/// ever surface to the caller.
pub trait Telemetry: Send + Sync {
    fn record(&self, event: &str, properties: Value);
}

/// Default sink: events land in the tracing stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn record(&self, event: &str, properties: Value) {
        tracing::info!(target: "telemetry", %event, %properties);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn record(&self, _event: &str, _properties: Value) {}
}

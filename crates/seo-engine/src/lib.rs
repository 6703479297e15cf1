pub mod analyzer;
pub mod fetcher;
mod html;
pub mod result;
pub mod telemetry;

pub use analyzer::{AnalyzeError, SeoAnalyzer};
pub use fetcher::{FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use result::{AnalysisResult, Metrics, TechnicalDetails};
pub use telemetry::{NoopTelemetry, Telemetry, TracingTelemetry};

pub use seo_checks::{FixedSignals, Issue, Page, PageMetadata, SignalSource, SimulatedSignals, Suggestion};

/// Analyzes one URL with the default stack: HTTP fetcher, simulated signals,
/// tracing telemetry.
pub async fn analyze_url(url: &str) -> Result<AnalysisResult, AnalyzeError> {
    SeoAnalyzer::new().analyze(url).await
}

use chrono::Utc;
use seo_checks::checks::{
    content, headings, images, links, local_seo, meta_tags, mobile, schema, security,
};
use seo_checks::{Page, SignalSource, SimulatedSignals};
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::fetcher::{FetchError, HttpFetcher, PageFetcher};
use crate::result::{
    round_mean, AccessibilityDetails, AnalysisResult, Metrics, PerformanceDetails,
    TechnicalDetails,
};
use crate::telemetry::{
    Telemetry, TracingTelemetry, EVENT_ANALYSIS_COMPLETED, EVENT_ANALYSIS_FAILED,
    EVENT_ANALYSIS_STARTED,
};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Failed to parse URL: {0}")]
    UrlParse(String),
    #[error("Failed to analyze website: {0}")]
    AnalysisFailed(#[from] FetchError),
}

/// Runs the full category suite over one fetched page and folds the results
/// into a single scored report. Stateless between calls; concurrent analyses
/// need no coordination.
pub struct SeoAnalyzer {
    fetcher: Box<dyn PageFetcher>,
    signals: Box<dyn SignalSource>,
    telemetry: Box<dyn Telemetry>,
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self {
            fetcher: Box::new(HttpFetcher::new()),
            signals: Box::new(SimulatedSignals),
            telemetry: Box::new(TracingTelemetry),
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl PageFetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn with_signals(mut self, signals: impl SignalSource + 'static) -> Self {
        self.signals = Box::new(signals);
        self
    }

    pub fn with_telemetry(mut self, telemetry: impl Telemetry + 'static) -> Self {
        self.telemetry = Box::new(telemetry);
        self
    }

    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalyzeError> {
        let (normalized, url) = normalize_url(url)?;

        self.telemetry.record(
            EVENT_ANALYSIS_STARTED,
            json!({ "url": normalized, "timestamp": Utc::now().to_rfc3339() }),
        );
        info!(url = %normalized, "starting analysis");

        let fetched = match self.fetcher.fetch(&url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                self.telemetry.record(
                    EVENT_ANALYSIS_FAILED,
                    json!({
                        "url": normalized,
                        "error": e.to_string(),
                        "timestamp": Utc::now().to_rfc3339(),
                    }),
                );
                warn!(url = %normalized, error = %e, "analysis failed");
                return Err(AnalyzeError::AnalysisFailed(e));
            }
        };

        let page = Page::new(url, fetched.content, fetched.metadata);
        let result = self.run_checks(normalized, &page).await;

        self.telemetry.record(
            EVENT_ANALYSIS_COMPLETED,
            json!({
                "url": result.url,
                "score": result.score,
                "timestamp": Utc::now().to_rfc3339(),
            }),
        );
        info!(url = %result.url, score = result.score, "analysis complete");
        Ok(result)
    }

    async fn run_checks(&self, normalized: String, page: &Page) -> AnalysisResult {
        let (meta, heading, image, link, body) = tokio::join!(
            async { meta_tags::analyze(page) },
            async { headings::analyze(page) },
            async { images::analyze(page) },
            async { links::analyze(page, page.host()) },
            async { content::analyze(page) },
        );

        let signals = self.signals.as_ref();
        let schema_audit = schema::analyze(signals);
        let mobile_audit = mobile::analyze(signals);
        let local_audit = local_seo::analyze(page, signals);
        let security_audit = security::analyze(page, signals);

        let vitals = signals.core_web_vitals();
        let competitors = signals.competitors(page.host());
        let accessibility_score = signals.accessibility_score();
        let weight = signals.page_weight();

        let mut performance = 100i32;
        if vitals.lcp > 2.5 {
            performance -= 20;
        }
        if vitals.fid > 100.0 {
            performance -= 20;
        }
        if vitals.cls > 0.1 {
            performance -= 20;
        }

        let metrics = Metrics {
            on_page: round_mean(&[meta.score, heading.score]),
            technical: round_mean(&[image.score, link.score]),
            content: body.score,
            performance: performance as u8,
            accessibility: accessibility_score,
            best_practices: signals.best_practices_score(),
            mobile: mobile_audit.score,
            security: security_audit.score,
            local_seo: local_audit.score,
            schema: schema_audit.score,
        };

        let technical_details = TechnicalDetails {
            meta_tags: meta.details,
            headings: heading.details,
            images: image.details,
            links: link.details,
            performance: PerformanceDetails {
                load_time: vitals.lcp,
                page_size: weight.page_size_kb,
                requests: weight.requests,
            },
            accessibility: AccessibilityDetails {
                score: accessibility_score,
                issues: if accessibility_score < 90 {
                    vec![
                        "Color contrast issues".to_string(),
                        "Missing ARIA labels".to_string(),
                    ]
                } else {
                    Vec::new()
                },
            },
            schema: schema_audit.details,
            mobile: mobile_audit.details,
            local_seo: local_audit.details,
            security: security_audit.details,
        };

        let issues = [
            meta.issues,
            heading.issues,
            image.issues,
            link.issues,
            body.issues,
            schema_audit.issues,
            mobile_audit.issues,
            local_audit.issues,
            security_audit.issues,
        ]
        .concat();

        let suggestions = [
            meta.suggestions,
            heading.suggestions,
            image.suggestions,
            link.suggestions,
            body.suggestions,
            schema_audit.suggestions,
            mobile_audit.suggestions,
            local_audit.suggestions,
            security_audit.suggestions,
        ]
        .concat();

        AnalysisResult {
            url: normalized,
            score: metrics.overall(),
            timestamp: Utc::now(),
            metrics,
            issues,
            suggestions,
            technical_details,
            core_web_vitals: Some(vitals),
            competitors: Some(competitors),
        }
    }
}

fn normalize_url(input: &str) -> Result<(String, Url), AnalyzeError> {
    let trimmed = input.trim();
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&normalized).map_err(|e| AnalyzeError::UrlParse(e.to_string()))?;
    Ok((normalized, url))
}

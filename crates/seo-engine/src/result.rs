use chrono::{DateTime, Utc};
use seo_checks::checks::headings::HeadingEntry;
use seo_checks::checks::images::ImageDetails;
use seo_checks::checks::links::LinkDetails;
use seo_checks::checks::local_seo::LocalSeoDetails;
use seo_checks::checks::schema::SchemaDetails;
use seo_checks::checks::security::SecurityDetails;
use seo_checks::utils::signals::{CompetitorProfile, CoreWebVitals, MobileSignals};
use seo_checks::{Issue, PageMetadata, Suggestion};
use serde::{Deserialize, Serialize};

/// The ten always-present category scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub on_page: u8,
    pub technical: u8,
    pub content: u8,
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub mobile: u8,
    pub security: u8,
    #[serde(rename = "localSEO")]
    pub local_seo: u8,
    pub schema: u8,
}

impl Metrics {
    /// Unweighted integer-rounded mean of the ten category scores.
    pub fn overall(&self) -> u8 {
        round_mean(&[
            self.on_page,
            self.technical,
            self.content,
            self.performance,
            self.accessibility,
            self.best_practices,
            self.mobile,
            self.security,
            self.local_seo,
            self.schema,
        ])
    }
}

pub(crate) fn round_mean(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&score| score as u32).sum();
    (sum as f64 / scores.len() as f64).round() as u8
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDetails {
    pub load_time: f64,
    pub page_size: u32,
    pub requests: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilityDetails {
    pub score: u8,
    pub issues: Vec<String>,
}

/// Per-category detail records echoed alongside the scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub meta_tags: PageMetadata,
    pub headings: Vec<HeadingEntry>,
    pub images: ImageDetails,
    pub links: LinkDetails,
    pub performance: PerformanceDetails,
    pub accessibility: AccessibilityDetails,
    pub schema: SchemaDetails,
    pub mobile: MobileSignals,
    #[serde(rename = "localSEO")]
    pub local_seo: LocalSeoDetails,
    pub security: SecurityDetails,
}

/// The complete outcome of one analysis run. Immutable once produced; a new
/// run always builds a fresh instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
    pub metrics: Metrics,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub technical_details: TechnicalDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_web_vitals: Option<CoreWebVitals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<CompetitorProfile>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_mean() {
        assert_eq!(round_mean(&[]), 0);
        assert_eq!(round_mean(&[80]), 80);
        assert_eq!(round_mean(&[80, 90]), 85);
        // .5 rounds up
        assert_eq!(round_mean(&[80, 85]), 83);
        assert_eq!(round_mean(&[0, 100]), 50);
    }

    #[test]
    fn test_overall_is_mean_of_all_ten() {
        let metrics = Metrics {
            on_page: 90,
            technical: 85,
            content: 80,
            performance: 60,
            accessibility: 95,
            best_practices: 88,
            mobile: 70,
            security: 100,
            local_seo: 75,
            schema: 97,
        };
        assert_eq!(metrics.overall(), 84);
    }

    #[test]
    fn test_metrics_serialize_with_dashboard_keys() {
        let metrics = Metrics {
            on_page: 1,
            technical: 2,
            content: 3,
            performance: 4,
            accessibility: 5,
            best_practices: 6,
            mobile: 7,
            security: 8,
            local_seo: 9,
            schema: 10,
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["onPage"], 1);
        assert_eq!(json["bestPractices"], 6);
        assert_eq!(json["localSEO"], 9);
    }
}

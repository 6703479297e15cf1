use serde::{Deserialize, Serialize};

use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};
use crate::utils::signals::SignalSource;

const CATEGORY: &str = "Schema Markup";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDetails {
    pub has_structured_data: bool,
    pub types: Vec<String>,
    pub errors: Vec<String>,
}

/// Structured-data detection is a signal, not an inspection of the page.
pub fn analyze(signals: &dyn SignalSource) -> Audit<SchemaDetails> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let has_structured_data = signals.schema_signals().has_structured_data;
    let types: Vec<String> = if has_structured_data {
        vec!["Organization".to_string(), "WebPage".to_string()]
    } else {
        Vec::new()
    };

    if !has_structured_data {
        issues.push(
            Issue::new(
                IssueType::Warning,
                CATEGORY,
                "No structured data detected",
                Impact::Medium,
            )
            .with_element("<script type=\"application/ld+json\">"),
        );
        score -= 20;

        suggestions.push(Suggestion::new(
            CATEGORY,
            "Add structured data markup for better search engine understanding",
            Priority::High,
            "Enhanced search result appearance",
        ));
    } else {
        if !types.iter().any(|t| t == "Organization") {
            suggestions.push(Suggestion::new(
                CATEGORY,
                "Add Organization schema for better brand recognition",
                Priority::Medium,
                "Better brand visibility in search results",
            ));
            score -= 5;
        }

        if !types.iter().any(|t| t == "BreadcrumbList") {
            suggestions.push(Suggestion::new(
                CATEGORY,
                "Add BreadcrumbList schema for better navigation",
                Priority::Low,
                "Enhanced search result navigation",
            ));
            score -= 3;
        }
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: SchemaDetails {
            has_structured_data,
            types,
            errors: Vec::new(),
        },
    }
}

use crate::utils::page::{Page, PageMetadata};
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};

const CATEGORY: &str = "Meta Tags";

/// Scores the fetcher-reported metadata fields and echoes them as details.
pub fn analyze(page: &Page) -> Audit<PageMetadata> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;
    let meta = page.metadata().clone();

    if meta.title.is_empty() {
        issues.push(
            Issue::new(IssueType::Error, CATEGORY, "Missing page title", Impact::High)
                .with_element("<title>"),
        );
        score -= 20;
    } else {
        let length = meta.title.chars().count();
        if !(30..=60).contains(&length) {
            issues.push(
                Issue::new(
                    IssueType::Warning,
                    CATEGORY,
                    format!("Title length ({length}) should be 30-60 characters"),
                    Impact::Medium,
                )
                .with_element("<title>"),
            );
            score -= 10;
        }
    }

    if meta.description.is_empty() {
        issues.push(
            Issue::new(
                IssueType::Error,
                CATEGORY,
                "Missing meta description",
                Impact::High,
            )
            .with_element("<meta name=\"description\">"),
        );
        score -= 15;
    } else {
        let length = meta.description.chars().count();
        if !(120..=160).contains(&length) {
            issues.push(
                Issue::new(
                    IssueType::Warning,
                    CATEGORY,
                    format!("Meta description length ({length}) should be 120-160 characters"),
                    Impact::Medium,
                )
                .with_element("<meta name=\"description\">"),
            );
            score -= 8;
        }
    }

    if meta.og_title.is_empty() {
        suggestions.push(Suggestion::new(
            "Social Media",
            "Add Open Graph title for better social media sharing",
            Priority::Medium,
            "Improves social media appearance",
        ));
        score -= 5;
    }

    if meta.og_description.is_empty() {
        suggestions.push(Suggestion::new(
            "Social Media",
            "Add Open Graph description for better social media sharing",
            Priority::Medium,
            "Improves social media appearance",
        ));
        score -= 5;
    }

    if meta.og_image.is_empty() {
        suggestions.push(Suggestion::new(
            "Social Media",
            "Add Open Graph image for better social media sharing",
            Priority::Medium,
            "Improves social media appearance",
        ));
        score -= 5;
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: meta,
    }
}

use markdown_parser::Node;
use serde::{Deserialize, Serialize};

use crate::utils::page::Page;
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};

const CATEGORY: &str = "Images";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    pub total: u32,
    pub with_alt: u32,
    pub without_alt: u32,
    pub oversized: u32,
}

pub fn analyze(page: &Page) -> Audit<ImageDetails> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let mut total = 0u32;
    let mut with_alt = 0u32;
    for node in page.nodes() {
        if let Node::Image { alt, .. } = node {
            total += 1;
            if !alt.is_empty() {
                with_alt += 1;
            }
        }
    }
    let without_alt = total - with_alt;
    // not a real size check: flags a tenth of the images
    let oversized = total / 10;

    if without_alt > 0 {
        issues.push(
            Issue::new(
                IssueType::Error,
                CATEGORY,
                format!("{without_alt} images missing alt attributes"),
                Impact::High,
            )
            .with_element("<img>"),
        );
        score -= (without_alt * 5).min(30) as i32;
    }

    if oversized > 0 {
        issues.push(
            Issue::new(
                IssueType::Warning,
                CATEGORY,
                format!("{oversized} images may be oversized"),
                Impact::Medium,
            )
            .with_element("<img>"),
        );
        score -= (oversized * 3) as i32;
    }

    if total > 0 {
        suggestions.push(Suggestion::new(
            "Performance",
            "Consider using WebP format for better compression",
            Priority::Low,
            "Faster page loading",
        ));
        suggestions.push(Suggestion::new(
            "Performance",
            "Implement lazy loading for images below the fold",
            Priority::Medium,
            "Improved initial page load",
        ));
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: ImageDetails {
            total,
            with_alt,
            without_alt,
            oversized,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::page::PageMetadata;

    fn page(content: &str) -> Page {
        Page::from_parts("https://example.com", content, PageMetadata::default()).unwrap()
    }

    #[test]
    fn test_no_images() {
        let audit = analyze(&page("no images here"));
        assert_eq!(audit.score, 100);
        assert!(audit.issues.is_empty());
        assert!(audit.suggestions.is_empty());
        assert_eq!(audit.details.total, 0);
    }

    #[test]
    fn test_two_of_three_missing_alt() {
        let audit = analyze(&page("![](/a.png) ![](/b.png) ![ok](/c.png)"));
        assert_eq!(audit.details.without_alt, 2);
        assert_eq!(audit.details.with_alt, 1);
        // -10 for two missing alts
        assert_eq!(audit.score, 90);
        assert!(audit.score <= 90);
        assert_eq!(audit.issues[0].kind, IssueType::Error);
    }

    #[test]
    fn test_missing_alt_penalty_caps_at_30() {
        let content = (0..8).map(|n| format!("![](/i{n}.png)")).collect::<Vec<_>>().join(" ");
        let audit = analyze(&page(&content));
        assert_eq!(audit.details.without_alt, 8);
        // capped at -30 rather than -40
        assert_eq!(audit.score, 70);
    }

    #[test]
    fn test_oversized_placeholder_fraction() {
        let content = (0..10)
            .map(|n| format!("![img {n}](/i{n}.png)"))
            .collect::<Vec<_>>()
            .join(" ");
        let audit = analyze(&page(&content));
        assert_eq!(audit.details.oversized, 1);
        assert_eq!(audit.score, 97);
        assert!(audit.issues[0].message.contains("oversized"));
    }

    #[test]
    fn test_suggestions_present_whenever_images_exist() {
        let audit = analyze(&page("![logo](/logo.png)"));
        assert_eq!(audit.suggestions.len(), 2);
        assert!(audit.suggestions[0].message.contains("WebP"));
        assert!(audit.suggestions[1].message.contains("lazy loading"));
        assert_eq!(audit.score, 100);
    }
}

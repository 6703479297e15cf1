use serde::{Deserialize, Serialize};

use crate::utils::page::Page;
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};
use crate::utils::signals::SignalSource;

const CATEGORY: &str = "Local SEO";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoDetails {
    #[serde(rename = "hasNAP")]
    pub has_nap: bool,
    pub has_google_my_business: bool,
    pub has_local_schema: bool,
    pub local_keywords: u8,
}

/// NAP presence is a genuine content check; the remaining flags are signals.
pub fn analyze(page: &Page, signals: &dyn SignalSource) -> Audit<LocalSeoDetails> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let content = page.content().to_lowercase();
    let has_nap = content.contains("address") || content.contains("phone");
    let local = signals.local_seo_signals();

    if !has_nap {
        issues.push(Issue::new(
            IssueType::Warning,
            CATEGORY,
            "NAP (Name, Address, Phone) information not clearly visible",
            Impact::Medium,
        ));
        score -= 15;
    }

    if !local.has_google_my_business {
        suggestions.push(Suggestion::new(
            CATEGORY,
            "Claim and optimize Google My Business listing",
            Priority::High,
            "Better local search visibility",
        ));
        score -= 20;
    }

    if !local.has_local_schema {
        suggestions.push(Suggestion::new(
            CATEGORY,
            "Add LocalBusiness schema markup",
            Priority::Medium,
            "Enhanced local search results",
        ));
        score -= 10;
    }

    if local.local_keywords < 3 {
        suggestions.push(Suggestion::new(
            CATEGORY,
            "Include more location-based keywords in content",
            Priority::Medium,
            "Better local search rankings",
        ));
        score -= 10;
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: LocalSeoDetails {
            has_nap,
            has_google_my_business: local.has_google_my_business,
            has_local_schema: local.has_local_schema,
            local_keywords: local.local_keywords,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::page::PageMetadata;
    use crate::utils::signals::FixedSignals;

    fn page(content: &str) -> Page {
        Page::from_parts("https://example.com", content, PageMetadata::default()).unwrap()
    }

    #[test]
    fn test_nap_found_case_insensitively() {
        let audit = analyze(&page("Visit our office. ADDRESS: 1 Main St"), &FixedSignals::default());
        assert!(audit.details.has_nap);
        assert_eq!(audit.score, 100);
        assert!(audit.issues.is_empty());
    }

    #[test]
    fn test_phone_also_counts_as_nap() {
        let audit = analyze(&page("Phone: 555-0100"), &FixedSignals::default());
        assert!(audit.details.has_nap);
    }

    #[test]
    fn test_missing_nap_warns() {
        let audit = analyze(&page("nothing local here"), &FixedSignals::default());
        assert!(!audit.details.has_nap);
        assert_eq!(audit.score, 85);
        assert_eq!(audit.issues[0].kind, IssueType::Warning);
    }

    #[test]
    fn test_every_local_signal_missing() {
        let mut signals = FixedSignals::default();
        signals.local_seo.has_google_my_business = false;
        signals.local_seo.has_local_schema = false;
        signals.local_seo.local_keywords = 1;
        let audit = analyze(&page("no locality markers"), &signals);
        // -15 NAP, -20 GMB, -10 schema, -10 keywords
        assert_eq!(audit.score, 45);
        assert_eq!(audit.suggestions.len(), 3);
    }

    #[test]
    fn test_details_serialize_has_nap_verbatim() {
        let audit = analyze(&page("address"), &FixedSignals::default());
        let json = serde_json::to_value(&audit.details).unwrap();
        assert_eq!(json["hasNAP"], true);
        assert_eq!(json["hasGoogleMyBusiness"], true);
    }
}

use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};
use crate::utils::signals::{MobileSignals, SignalSource};

const CATEGORY: &str = "Mobile";

pub fn analyze(signals: &dyn SignalSource) -> Audit<MobileSignals> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let mobile = signals.mobile_signals();

    if !mobile.has_viewport_meta {
        issues.push(
            Issue::new(
                IssueType::Error,
                CATEGORY,
                "Missing viewport meta tag",
                Impact::High,
            )
            .with_element("<meta name=\"viewport\">"),
        );
        score -= 25;
    }

    if !mobile.is_responsive {
        issues.push(Issue::new(
            IssueType::Error,
            CATEGORY,
            "Website is not mobile responsive",
            Impact::High,
        ));
        score -= 30;
    }

    if !mobile.touch_friendly {
        issues.push(Issue::new(
            IssueType::Warning,
            CATEGORY,
            "Touch targets may be too small",
            Impact::Medium,
        ));
        score -= 15;
    }

    if mobile.mobile_speed < 70 {
        issues.push(Issue::new(
            IssueType::Warning,
            CATEGORY,
            "Mobile page speed needs improvement",
            Impact::High,
        ));
        score -= 20;
    }

    suggestions.push(Suggestion::new(
        CATEGORY,
        "Test website on various mobile devices",
        Priority::Medium,
        "Better mobile user experience",
    ));

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: mobile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::signals::FixedSignals;

    #[test]
    fn test_healthy_mobile_signals() {
        let audit = analyze(&FixedSignals::default());
        assert_eq!(audit.score, 100);
        assert!(audit.issues.is_empty());
        // the device-testing suggestion is unconditional
        assert_eq!(audit.suggestions.len(), 1);
    }

    #[test]
    fn test_all_mobile_signals_bad() {
        let mut signals = FixedSignals::default();
        signals.mobile = MobileSignals {
            has_viewport_meta: false,
            is_responsive: false,
            touch_friendly: false,
            mobile_speed: 50,
        };
        let audit = analyze(&signals);
        // -25 -30 -15 -20
        assert_eq!(audit.score, 10);
        assert_eq!(audit.issues.len(), 4);
    }

    #[test]
    fn test_slow_mobile_speed_only() {
        let mut signals = FixedSignals::default();
        signals.mobile.mobile_speed = 69;
        let audit = analyze(&signals);
        assert_eq!(audit.score, 80);
        assert!(audit.issues[0].message.contains("speed"));
        assert_eq!(audit.issues[0].impact, Impact::High);
    }
}

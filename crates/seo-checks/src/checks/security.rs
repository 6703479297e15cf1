use serde::{Deserialize, Serialize};

use crate::utils::page::Page;
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType};
use crate::utils::signals::SignalSource;

const CATEGORY: &str = "Security";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDetails {
    #[serde(rename = "hasHTTPS")]
    pub has_https: bool,
    pub has_security_headers: bool,
    pub mixed_content: bool,
    pub certificate_valid: bool,
}

/// The scheme check is genuine; headers, mixed content, and certificate
/// state come from the signal source.
pub fn analyze(page: &Page, signals: &dyn SignalSource) -> Audit<SecurityDetails> {
    let mut issues = Vec::new();
    let mut score = 100i32;

    let has_https = page.url().scheme() == "https";
    let security = signals.security_signals(has_https);

    if !has_https {
        issues.push(Issue::new(
            IssueType::Error,
            CATEGORY,
            "Website not using HTTPS",
            Impact::High,
        ));
        score -= 30;
    }

    if !security.has_security_headers {
        issues.push(Issue::new(
            IssueType::Warning,
            CATEGORY,
            "Missing important security headers",
            Impact::Medium,
        ));
        score -= 15;
    }

    if security.mixed_content {
        issues.push(Issue::new(
            IssueType::Warning,
            CATEGORY,
            "Mixed content detected (HTTP resources on HTTPS page)",
            Impact::Medium,
        ));
        score -= 20;
    }

    if !security.certificate_valid {
        issues.push(Issue::new(
            IssueType::Error,
            CATEGORY,
            "SSL certificate issues detected",
            Impact::High,
        ));
        score -= 25;
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions: Vec::new(),
        details: SecurityDetails {
            has_https,
            has_security_headers: security.has_security_headers,
            mixed_content: security.mixed_content,
            certificate_valid: security.certificate_valid,
        },
    }
}

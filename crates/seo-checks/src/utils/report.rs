use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A detected problem: severity, owning category, and business impact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueType,
    pub category: String,
    pub message: String,
    pub impact: Impact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Issue {
    pub fn new(
        kind: IssueType,
        category: &str,
        message: impl Into<String>,
        impact: Impact,
    ) -> Self {
        Self {
            kind,
            category: category.to_string(),
            message: message.into(),
            impact,
            element: None,
        }
    }

    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }
}

/// A recommended improvement with priority and a descriptive impact line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub category: String,
    pub message: String,
    pub priority: Priority,
    pub impact: String,
}

impl Suggestion {
    pub fn new(category: &str, message: impl Into<String>, priority: Priority, impact: &str) -> Self {
        Self {
            category: category.to_string(),
            message: message.into(),
            priority,
            impact: impact.to_string(),
        }
    }
}

/// Result of one category check. Scores start at 100 and subtract a fixed
/// penalty per detected condition, floored at 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Audit<D> {
    pub score: u8,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub details: D,
}

pub(crate) fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-40), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(73), 73);
        assert_eq!(clamp_score(100), 100);
    }

    #[test]
    fn test_issue_serializes_with_lowercase_tags() {
        let issue = Issue::new(IssueType::Error, "Meta Tags", "Missing page title", Impact::High)
            .with_element("<title>");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["impact"], "high");
        assert_eq!(json["element"], "<title>");
    }

    #[test]
    fn test_issue_element_omitted_when_absent() {
        let issue = Issue::new(IssueType::Info, "Content", "note", Impact::Low);
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("element").is_none());
    }
}

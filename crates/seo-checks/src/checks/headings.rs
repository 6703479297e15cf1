use markdown_parser::Node;
use serde::{Deserialize, Serialize};

use crate::utils::page::Page;
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};

const CATEGORY: &str = "Headings";

/// One entry per distinct heading level, in first-seen order. `text` is the
/// first heading encountered at that level, `count` the total at that level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingEntry {
    pub level: u8,
    pub text: String,
    pub count: u32,
}

pub fn analyze(page: &Page) -> Audit<Vec<HeadingEntry>> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let mut entries: Vec<HeadingEntry> = Vec::new();
    let mut counts = [0u32; 7];
    for node in page.nodes() {
        if let Node::Heading { level, text } = node {
            counts[level as usize] += 1;
            if !entries.iter().any(|entry| entry.level == level) {
                entries.push(HeadingEntry {
                    level,
                    text,
                    count: 0,
                });
            }
        }
    }
    for entry in entries.iter_mut() {
        entry.count = counts[entry.level as usize];
    }

    let h1_count = counts[1];
    if h1_count == 0 {
        issues.push(
            Issue::new(IssueType::Error, CATEGORY, "Missing H1 tag", Impact::High)
                .with_element("<h1>"),
        );
        score -= 25;
    } else if h1_count > 1 {
        issues.push(
            Issue::new(
                IssueType::Warning,
                CATEGORY,
                format!("Multiple H1 tags found ({h1_count}). Use only one H1 per page"),
                Impact::Medium,
            )
            .with_element("<h1>"),
        );
        score -= 15;
    }

    let levels: Vec<u8> = (1u8..=6).filter(|&level| counts[level as usize] > 0).collect();
    for pair in levels.windows(2) {
        if pair[1] - pair[0] > 1 {
            issues.push(
                Issue::new(
                    IssueType::Warning,
                    CATEGORY,
                    format!("Heading hierarchy skip detected (H{} to H{})", pair[0], pair[1]),
                    Impact::Low,
                )
                .with_element(format!("<h{}>", pair[1]).as_str()),
            );
            score -= 5;
        }
    }

    if entries.len() < 3 {
        suggestions.push(Suggestion::new(
            "Content Structure",
            "Add more headings to improve content structure and readability",
            Priority::Medium,
            "Better content organization",
        ));
        score -= 10;
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: entries,
    }
}

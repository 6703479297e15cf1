use markdown_parser::{paragraph_count, word_count};

use crate::utils::page::Page;
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};

const CATEGORY: &str = "Content";

pub fn analyze(page: &Page) -> Audit<()> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let words = word_count(page.content());
    let paragraphs = paragraph_count(page.content());

    if words < 300 {
        issues.push(Issue::new(
            IssueType::Warning,
            CATEGORY,
            format!("Content is too short ({words} words). Aim for at least 300 words"),
            Impact::Medium,
        ));
        score -= 20;
    } else if words < 600 {
        suggestions.push(Suggestion::new(
            CATEGORY,
            "Consider expanding content for better SEO performance",
            Priority::Medium,
            "More comprehensive content",
        ));
        score -= 5;
    }

    // readability proxy over paragraph blocks, not real sentence lengths
    let avg_words_per_paragraph = words as f64 / paragraphs.max(1) as f64;
    if avg_words_per_paragraph > 25.0 {
        suggestions.push(Suggestion::new(
            CATEGORY,
            "Consider shorter sentences for better readability",
            Priority::Low,
            "Improved user experience",
        ));
        score -= 5;
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: (),
    }
}

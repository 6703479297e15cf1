use markdown_parser::Node;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::page::Page;
use crate::utils::report::{clamp_score, Audit, Impact, Issue, IssueType, Priority, Suggestion};

const CATEGORY: &str = "Links";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkDetails {
    pub internal: u32,
    pub external: u32,
    pub broken: u32,
}

fn is_external(href: &str, current_host: &str) -> bool {
    if !href.starts_with("http") {
        return false;
    }
    match Url::parse(href) {
        Ok(url) => url.host_str().is_some_and(|host| host != current_host),
        Err(_) => false,
    }
}

/// `current_host` is passed in explicitly so the classification never depends
/// on ambient environment state.
pub fn analyze(page: &Page, current_host: &str) -> Audit<LinkDetails> {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100i32;

    let links: Vec<(String, String)> = page
        .nodes()
        .into_iter()
        .filter_map(|node| match node {
            Node::Link { text, href } => Some((text, href)),
            _ => None,
        })
        .collect();

    let total = links.len() as u32;
    let external = links
        .iter()
        .filter(|(_, href)| is_external(href, current_host))
        .count() as u32;
    let internal = total - external;
    // unverified placeholder: assumes one in twenty links is broken
    let broken = total / 20;

    let non_descriptive = links
        .iter()
        .filter(|(text, _)| text.chars().count() < 3)
        .count() as u32;
    if non_descriptive > 0 {
        issues.push(
            Issue::new(
                IssueType::Warning,
                CATEGORY,
                format!("{non_descriptive} links with non-descriptive anchor text"),
                Impact::Medium,
            )
            .with_element("<a>"),
        );
        score -= (non_descriptive * 3) as i32;
    }

    if broken > 0 {
        issues.push(
            Issue::new(
                IssueType::Error,
                CATEGORY,
                format!("{broken} broken links detected"),
                Impact::High,
            )
            .with_element("<a>"),
        );
        score -= (broken * 10) as i32;
    }

    if external > 0 {
        suggestions.push(Suggestion::new(
            "SEO",
            "Consider adding rel=\"nofollow\" to external links when appropriate",
            Priority::Low,
            "Better link equity management",
        ));
    }

    if internal < 3 {
        suggestions.push(Suggestion::new(
            "SEO",
            "Add more internal links to improve site navigation and SEO",
            Priority::Medium,
            "Better internal linking structure",
        ));
        score -= 10;
    }

    Audit {
        score: clamp_score(score),
        issues,
        suggestions,
        details: LinkDetails {
            internal,
            external,
            broken,
        },
    }
}

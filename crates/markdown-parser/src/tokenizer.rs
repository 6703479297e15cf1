use serde::{Deserialize, Serialize};

/// A typed node extracted from markdown-rendered page content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Node {
    Heading { level: u8, text: String },
    Image { alt: String, src: String },
    Link { text: String, href: String },
}

/// Scans content for headings, images, and links in source order.
///
/// Headings are lines starting with 1-6 `#` characters followed by
/// whitespace. Images are inline `![alt](src)`, links inline `[text](href)`;
/// the leading `!` decides which, so an image is never also a link. Link and
/// image text may span lines; heading text is always a single line. Unclosed
/// forms produce no node and the scan resumes after the opening bracket.
pub fn tokenize(content: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let bytes = content.as_bytes();
    let mut i = 0;
    let mut at_line_start = true;

    while i < bytes.len() {
        if at_line_start {
            let line_end = content[i..]
                .find('\n')
                .map(|p| i + p)
                .unwrap_or(content.len());
            if let Some(node) = heading_at(&content[i..line_end]) {
                nodes.push(node);
            }
            at_line_start = false;
        }
        match bytes[i] {
            b'\n' => {
                at_line_start = true;
                i += 1;
            }
            b'!' if bytes.get(i + 1) == Some(&b'[') => {
                match bracket_pair_at(content, i + 1) {
                    Some((alt, src, end)) => {
                        nodes.push(Node::Image { alt, src });
                        i = end;
                    }
                    None => i += 2,
                }
            }
            b'[' => match bracket_pair_at(content, i) {
                Some((text, href, end)) => {
                    nodes.push(Node::Link { text, href });
                    i = end;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }

    nodes
}

/// Whitespace-split non-empty tokens.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Blocks separated by a blank line, blank-only blocks excluded.
pub fn paragraph_count(content: &str) -> usize {
    content
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .count()
}

fn heading_at(line: &str) -> Option<Node> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(Node::Heading {
        level: hashes as u8,
        text: text.to_string(),
    })
}

/// Parses `[text](target)` starting at the `[` at byte offset `open`.
/// Text runs to the first `]`, the target to the first `)`; the target must
/// be non-empty and the `(` must immediately follow the `]`. Returns the
/// text, the target, and the offset one past the closing paren.
fn bracket_pair_at(content: &str, open: usize) -> Option<(String, String, usize)> {
    let rest = &content[open + 1..];
    let close = rest.find(']')?;
    let text = &rest[..close];
    let after = &rest[close + 1..];
    if !after.starts_with('(') {
        return None;
    }
    let target_end = after[1..].find(')')?;
    if target_end == 0 {
        return None;
    }
    let target = &after[1..1 + target_end];
    let end = open + 1 + close + 2 + target_end + 1;
    Some((text.to_string(), target.to_string(), end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let content = "# Title\n\nSome text\n\n## Section\n###### Deep";
        let nodes = tokenize(content);
        assert_eq!(
            nodes,
            vec![
                Node::Heading {
                    level: 1,
                    text: "Title".to_string()
                },
                Node::Heading {
                    level: 2,
                    text: "Section".to_string()
                },
                Node::Heading {
                    level: 6,
                    text: "Deep".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_heading_requires_space_and_valid_level() {
        assert!(tokenize("#NoSpace").is_empty());
        assert!(tokenize("####### Seven").is_empty());
        assert!(tokenize("#   ").is_empty());
        // only line-leading hashes count
        assert!(tokenize("text # not a heading").is_empty());
    }

    #[test]
    fn test_image_is_not_a_link() {
        let nodes = tokenize("![logo](/img/logo.png) and [home](/index)");
        assert_eq!(
            nodes,
            vec![
                Node::Image {
                    alt: "logo".to_string(),
                    src: "/img/logo.png".to_string()
                },
                Node::Link {
                    text: "home".to_string(),
                    href: "/index".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_alt_and_empty_link_text() {
        let nodes = tokenize("![](/a.png) [](/empty)");
        assert_eq!(
            nodes,
            vec![
                Node::Image {
                    alt: String::new(),
                    src: "/a.png".to_string()
                },
                Node::Link {
                    text: String::new(),
                    href: "/empty".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unclosed_forms_produce_nothing() {
        assert!(tokenize("[dangling](no-close").is_empty());
        assert!(tokenize("![dangling](no-close").is_empty());
        assert!(tokenize("[no-target]").is_empty());
        assert!(tokenize("[empty-target]()").is_empty());
    }

    #[test]
    fn test_nested_brackets_produce_nothing() {
        assert!(tokenize("[outer[inner]](url)").is_empty());
    }

    #[test]
    fn test_unclosed_bracket_resumes_scan() {
        let nodes = tokenize("[broken [real](/path)");
        assert_eq!(
            nodes,
            vec![Node::Link {
                text: "real".to_string(),
                href: "/path".to_string()
            }]
        );
    }

    #[test]
    fn test_link_text_may_span_lines() {
        let nodes = tokenize("[two\nlines](/wrapped)");
        assert_eq!(
            nodes,
            vec![Node::Link {
                text: "two\nlines".to_string(),
                href: "/wrapped".to_string()
            }]
        );
    }

    #[test]
    fn test_heading_line_still_scanned_for_inline_nodes() {
        let nodes = tokenize("## See [docs](/docs)");
        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[0], Node::Heading { level: 2, .. }));
        assert!(matches!(&nodes[1], Node::Link { .. }));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one two  three\nfour"), 4);
    }

    #[test]
    fn test_paragraph_count() {
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count("one block"), 1);
        assert_eq!(paragraph_count("first\n\nsecond\n\n   \n\nthird"), 3);
    }
}

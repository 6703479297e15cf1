use scraper::{ElementRef, Html, Selector};
use seo_checks::PageMetadata;

/// Pulls the metadata fields the meta check scores out of the document head.
pub(crate) fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);
    PageMetadata {
        title: first_text(&document, "title"),
        description: meta_content(&document, "meta[name='description']"),
        keywords: meta_content(&document, "meta[name='keywords']"),
        og_title: meta_content(&document, "meta[property='og:title']"),
        og_description: meta_content(&document, "meta[property='og:description']"),
        og_image: meta_content(&document, "meta[property='og:image']"),
    }
}

/// Renders the document body to the markdown dialect the tokenizer consumes:
/// headings become `#` lines, images `![alt](src)`, anchors `[text](href)`,
/// and block elements are separated by blank lines.
pub(crate) fn render_markdown(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    if let Some(body) = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
    {
        render_children(body, &mut out);
    }
    out.trim().to_string()
}

fn render_children(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            push_token(out, &collapse_whitespace(text));
        } else if let Some(child_el) = ElementRef::wrap(child) {
            render_element(child_el, out);
        }
    }
}

fn render_element(el: ElementRef<'_>, out: &mut String) {
    match el.value().name() {
        "script" | "style" | "noscript" | "template" => {}
        name @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
            let text = collapse_whitespace(&el.text().collect::<String>());
            if !text.is_empty() {
                let level = (name.as_bytes()[1] - b'0') as usize;
                end_block(out);
                out.push_str(&"#".repeat(level));
                out.push(' ');
                out.push_str(&text);
                end_block(out);
            }
        }
        "img" => {
            let src = el.value().attr("src").unwrap_or_default();
            if !src.is_empty() {
                let alt = el.value().attr("alt").unwrap_or_default();
                push_token(out, &format!("![{alt}]({src})"));
            }
        }
        "a" => {
            let text = collapse_whitespace(&el.text().collect::<String>());
            match el.value().attr("href") {
                Some(href) if !href.is_empty() => {
                    push_token(out, &format!("[{text}]({href})"));
                }
                _ => push_token(out, &text),
            }
        }
        "p" | "ul" | "ol" | "table" | "blockquote" | "pre" | "section" | "article" | "div"
        | "header" | "footer" | "main" | "nav" | "aside" | "form" | "figure" => {
            end_block(out);
            render_children(el, out);
            end_block(out);
        }
        "br" => out.push('\n'),
        "li" | "tr" => {
            render_children(el, out);
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }
        _ => render_children(el, out),
    }
}

fn first_text(document: &Html, selector: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn meta_content(document: &Html, selector: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_token(out: &mut String, token: &str) {
    if token.is_empty() {
        return;
    }
    if !out.is_empty() && !out.ends_with(|c: char| c.is_whitespace()) {
        out.push(' ');
    }
    out.push_str(token);
}

// closes the current block so the next one starts after a blank line
fn end_block(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}

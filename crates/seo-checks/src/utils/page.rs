use markdown_parser::{tokenize, Node};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to parse URL: {0}")]
    UrlParseError(String),
}

/// Metadata the content fetcher reports alongside the page body. Fields the
/// fetcher could not find are empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
}

/// A fetched page as the category checks see it: final URL, markdown-rendered
/// body content, and fetcher-supplied metadata.
#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    content: String,
    metadata: PageMetadata,
}

impl Page {
    pub fn new(url: Url, content: String, metadata: PageMetadata) -> Self {
        Self {
            url,
            content,
            metadata,
        }
    }

    pub fn from_parts(
        url: &str,
        content: &str,
        metadata: PageMetadata,
    ) -> Result<Self, PageError> {
        let url = Url::parse(url).map_err(|e| PageError::UrlParseError(e.to_string()))?;
        Ok(Self::new(url, content.to_string(), metadata))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn nodes(&self) -> Vec<Node> {
        tokenize(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let page = Page::from_parts(
            "https://example.com/about",
            "# About us",
            PageMetadata::default(),
        )
        .unwrap();
        assert_eq!(page.host(), "example.com");
        assert_eq!(page.nodes().len(), 1);
    }

    #[test]
    fn test_from_parts_rejects_bad_url() {
        let result = Page::from_parts("not a url", "", PageMetadata::default());
        assert!(matches!(result, Err(PageError::UrlParseError(_))));
    }
}

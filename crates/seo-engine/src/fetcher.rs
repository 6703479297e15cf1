use async_trait::async_trait;
use reqwest::Client;
use seo_checks::PageMetadata;
use thiserror::Error;
use tokio::time::Duration;
use url::Url;

use crate::html;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch URL: {0}")]
    Request(String),
    #[error("Failed to fetch URL: {0}")]
    Status(String),
    #[error("No usable content at {0}")]
    EmptyContent(String),
}

/// What a fetch hands back: the page body rendered to markdown plus the
/// metadata fields the meta check scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub content: String,
    pub metadata: PageMetadata,
}

/// Content retrieval contract. A failure is terminal for the analysis that
/// issued it; the engine never retries.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Default fetcher: a plain GET, then metadata extraction and markdown
/// rendering over the returned HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let metadata = html::extract_metadata(&body);
        let content = html::render_markdown(&body);
        if content.is_empty() && metadata.title.is_empty() {
            return Err(FetchError::EmptyContent(url.to_string()));
        }

        Ok(FetchedPage { content, metadata })
    }
}

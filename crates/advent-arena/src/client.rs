//! Are.na API client for channel contents.
//!
//! Requests `GET {base}/channels/{slug}/contents?page={n}` and reads the
//! `contents` array of the JSON body. No authentication is sent.

use async_trait::async_trait;
use tracing::{debug, trace};
use url::Url;

use advent_models::{CollectionId, ContentItem, ContentPage};

use crate::config::ArenaConfig;
use crate::error::{FetchError, Result};

/// A paginated remote collection.
///
/// Pages are numbered from 1. An empty page means there is no more data.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches one page of a collection's contents.
    async fn fetch_page(&self, collection: &CollectionId, page: u32) -> Result<Vec<ContentItem>>;
}

/// Are.na API client.
#[derive(Clone)]
pub struct ArenaClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ArenaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ArenaConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a client from environment variables.
    ///
    /// Uses `ARENA_API_URL` if set, otherwise the public API.
    pub fn from_env() -> Result<Self> {
        Self::new(ArenaConfig::from_env())
    }

    /// URL of one page of a channel's contents.
    pub fn contents_url(&self, collection: &CollectionId, page: u32) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["channels", collection.as_str(), "contents"]);
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl PageSource for ArenaClient {
    async fn fetch_page(&self, collection: &CollectionId, page: u32) -> Result<Vec<ContentItem>> {
        let url = self.contents_url(collection, page)?;
        trace!(%url, "Requesting contents page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                page,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            page,
            message: format!("failed to read body: {}", e),
        })?;
        let parsed: ContentPage = serde_json::from_str(&body).map_err(|e| FetchError::Parse {
            page,
            message: e.to_string(),
        })?;

        debug!(
            collection = %collection,
            page,
            items = parsed.contents.len(),
            "Fetched contents page"
        );
        Ok(parsed.contents)
    }
}

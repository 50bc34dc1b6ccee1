use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Url after following redirects.
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Retrieves a page. Retries and timeouts are up to the implementation.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|error| {
                warn!(%error, "falling back to a default http client");
                reqwest::Client::new()
            });
        Self { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let res: reqwest::Response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::from_reqwest(url, error))?;
        let status = res.status();
        let resolved = res.url().to_string();
        debug!(%url, %resolved, status = status.as_u16(), "fetched page");
        if !status.is_success() {
            return Err(FetchError::with_status(resolved, status.as_u16()));
        }
        let body = res
            .text()
            .await
            .map_err(|error| FetchError::from_reqwest(&resolved, error))?;
        Ok(FetchedPage {
            url: resolved,
            status: status.as_u16(),
            body,
        })
    }
}

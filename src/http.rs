use crate::client::Fetcher;
use crate::config::CatalogConfig;
use crate::errors::{CatalogError, CatalogResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CatalogError::Upstream(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> CatalogResult<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Upstream(format!("{}: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            return Err(CatalogError::Upstream(format!("{} returned {}", url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Upstream(format!("{}: {}", url, e)))
    }
}

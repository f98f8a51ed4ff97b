//! HTTP client for the product feed.

use async_trait::async_trait;
use storefront_core::catalog::{parse_feed, Product, ProductSource};
use storefront_core::LoadError;
use tracing::debug;

use crate::timeout::TimeoutConfig;

/// Endpoint the storefront reads its catalog from by default.
pub const DEFAULT_FEED_URL: &str = "https://fakestoreapi.com/products";

/// Feed endpoint and client settings.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Product list URL.
    pub url: String,
    /// Request timeouts.
    pub timeout: TimeoutConfig,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl FeedConfig {
    /// Create a config for the given URL with no timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: TimeoutConfig::none(),
            user_agent: default_user_agent(),
        }
    }

    /// Set timeouts.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Default `User-Agent`: crate name and version.
pub fn default_user_agent() -> String {
    format!("storefront/{}", env!("CARGO_PKG_VERSION"))
}

/// Fetches the product list with a single GET.
///
/// There is no retry; a failure is returned to the catalog store as a
/// [`LoadError`].
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Build a client from config.
    pub fn new(config: FeedConfig) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(connect) = config.timeout.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(total) = config.timeout.total {
            builder = builder.timeout(total);
        }
        let http = builder
            .build()
            .map_err(|e| LoadError::Request(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The configured URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// GET the feed and decode it.
    pub async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let url = self.config.url.as_str();
        debug!(url, "requesting product feed");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(url, bytes = body.len(), "feed body received");

        let products = parse_feed(&body)?;
        Ok(products)
    }
}

#[async_trait]
impl ProductSource for FeedClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        self.fetch().await
    }

    fn describe(&self) -> String {
        self.config.url.clone()
    }
}

fn map_transport_error(e: reqwest::Error) -> LoadError {
    if e.is_timeout() {
        LoadError::Timeout(e.to_string())
    } else if e.is_connect() {
        LoadError::Connection(e.to_string())
    } else if e.is_decode() || e.is_body() {
        LoadError::Decode(e.to_string())
    } else {
        LoadError::Request(e.to_string())
    }
}

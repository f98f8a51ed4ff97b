//! Where the catalog gets its products from.

use async_trait::async_trait;

use crate::catalog::Product;
use crate::error::LoadError;

/// A product feed.
///
/// Implementations perform one fetch per call and never retry; the catalog
/// store decides what to do with a failure.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product list, in feed order.
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError>;

    /// Short description for logs (usually the URL).
    fn describe(&self) -> String;
}

/// A source backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static({} products)", self.products.len())
    }
}

/// A source that always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingSource {
    error: LoadError,
}

impl FailingSource {
    pub fn new(error: LoadError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl ProductSource for FailingSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        Err(self.error.clone())
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

//! The catalog store: loaded products plus the current filter.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{derive_categories, CategoryFilter, Product, ProductSource};
use crate::error::LoadError;
use crate::ids::ProductId;
use crate::search::ProductFilter;

/// Summary of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Number of products received.
    pub products: usize,
    /// Number of real categories (the "all" sentinel excluded).
    pub categories: usize,
}

impl LoadReport {
    /// The feed answered successfully but had nothing in it.
    pub fn is_empty_feed(&self) -> bool {
        self.products == 0
    }
}

/// Products as last fetched, the derived category set, and the filter the
/// view layer is showing.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Arc<Product>>,
    categories: Vec<String>,
    filter: ProductFilter,
    loaded: bool,
}

impl CatalogStore {
    /// An empty catalog with no filter applied.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: derive_categories(std::iter::empty::<&Product>()),
            filter: ProductFilter::default(),
            loaded: false,
        }
    }

    /// Build a catalog directly from a product list.
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut store = Self::new();
        store.replace_products(products);
        store
    }

    /// Fetch from `source` and replace the catalog on success.
    ///
    /// On failure nothing changes and the error is returned; no retry is
    /// attempted. Failures and empty feeds are logged at debug level; the
    /// caller reports them.
    pub async fn load(&mut self, source: &dyn ProductSource) -> Result<LoadReport, LoadError> {
        let origin = source.describe();
        let products = match source.fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                debug!(source = %origin, error = %e, "catalog load failed");
                return Err(e);
            }
        };

        let report = self.replace_products(products);
        if report.is_empty_feed() {
            debug!(source = %origin, "feed returned no products");
        } else {
            info!(
                source = %origin,
                products = report.products,
                categories = report.categories,
                "catalog loaded"
            );
        }
        Ok(report)
    }

    fn replace_products(&mut self, products: Vec<Product>) -> LoadReport {
        self.categories = derive_categories(&products);
        self.products = products.into_iter().map(Arc::new).collect();
        self.loaded = true;
        LoadReport {
            products: self.products.len(),
            categories: self.categories.len() - 1,
        }
    }

    /// Whether a load has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All products, in feed order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a product by ID. The first match wins if the feed repeated an ID.
    pub fn product(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Category options, starting with "all".
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn search_term(&self) -> &str {
        &self.filter.term
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.filter.category
    }

    /// Replace the search text. Empty matches everything.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.term = term.into();
    }

    /// Replace the selected category. Names outside the category set are
    /// accepted and simply match nothing.
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.filter.category = category.into();
    }

    /// Clear the search text and select "all".
    pub fn reset_filters(&mut self) {
        self.filter = ProductFilter::default();
    }

    /// Products passing the current filter, in feed order.
    pub fn visible_products(&self) -> Vec<Arc<Product>> {
        self.filter
            .apply(&self.products)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FailingSource, StaticSource};
    use crate::money::Money;
    use std::io;
    use std::sync::Mutex;

    fn scenario_products() -> Vec<Product> {
        vec![
            Product::new(1u64, "Red Shirt", Money::from_cents(1000), "clothing"),
            Product::new(2u64, "Blue Mug", Money::from_cents(500), "home"),
        ]
    }

    fn visible_ids(store: &CatalogStore) -> Vec<u64> {
        store.visible_products().iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let store = CatalogStore::new();
        assert!(!store.is_loaded());
        assert!(store.products().is_empty());
        assert_eq!(store.categories(), ["all"]);
        assert!(store.visible_products().is_empty());
    }

    #[tokio::test]
    async fn test_load_replaces_products_and_categories() {
        let mut store = CatalogStore::new();
        let report = store
            .load(&StaticSource::new(scenario_products()))
            .await
            .unwrap();

        assert_eq!(report, LoadReport { products: 2, categories: 2 });
        assert!(store.is_loaded());
        assert_eq!(store.categories(), ["all", "clothing", "home"]);
        assert_eq!(visible_ids(&store), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_state() {
        let mut store = CatalogStore::with_products(scenario_products());
        let error = LoadError::Connection("unreachable".into());
        let result = store.load(&FailingSource::new(error.clone())).await;

        assert_eq!(result, Err(error));
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.categories(), ["all", "clothing", "home"]);
    }

    #[tokio::test]
    async fn test_empty_feed_is_not_an_error() {
        let mut store = CatalogStore::with_products(scenario_products());
        let report = store.load(&StaticSource::default()).await.unwrap();

        assert!(report.is_empty_feed());
        assert!(store.products().is_empty());
        assert_eq!(store.categories(), ["all"]);
        store.set_search_term("mug");
        assert!(store.visible_products().is_empty());
    }

    #[test]
    fn test_category_selection() {
        let mut store = CatalogStore::with_products(scenario_products());
        store.set_category("clothing");
        assert_eq!(visible_ids(&store), vec![1]);

        store.set_category("all");
        assert_eq!(visible_ids(&store), vec![1, 2]);

        store.set_category("toys");
        assert!(store.visible_products().is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let mut store = CatalogStore::with_products(scenario_products());
        for term in ["mug", "MUG", "Mug", "mUg"] {
            store.set_search_term(term);
            assert_eq!(visible_ids(&store), vec![2], "term {term:?}");
        }
    }

    #[test]
    fn test_reset_filters() {
        let mut store = CatalogStore::with_products(scenario_products());
        store.set_search_term("zzz");
        store.set_category("home");
        assert!(store.visible_products().is_empty());

        store.reset_filters();
        assert_eq!(store.search_term(), "");
        assert!(store.selected_category().is_all());
        assert_eq!(visible_ids(&store), vec![1, 2]);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_and_empty_loads_stay_below_warn() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = CatalogStore::new();
            let failing = FailingSource::new(LoadError::Timeout("slow feed".into()));
            assert!(runtime.block_on(store.load(&failing)).is_err());
            assert!(runtime.block_on(store.load(&StaticSource::default())).is_ok());
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_product_lookup() {
        let store = CatalogStore::with_products(scenario_products());
        assert_eq!(store.product(ProductId::new(2)).unwrap().title, "Blue Mug");
        assert!(store.product(ProductId::new(9)).is_none());
    }
}

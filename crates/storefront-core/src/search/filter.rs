//! Search filter combining the search box and the category picker.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// The search term plus the selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Search text exactly as typed.
    pub term: String,
    /// Selected category.
    pub category: CategoryFilter,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Whether nothing is being filtered out.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.category.is_all()
    }

    /// Whether a single product passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && product.title_contains_lowercase(&self.term.to_lowercase())
    }

    /// Keep the matching items, in input order.
    pub fn apply<'a, P>(&self, products: impl IntoIterator<Item = &'a P>) -> Vec<&'a P>
    where
        P: AsRef<Product> + 'a,
    {
        let needle = self.term.to_lowercase();
        products
            .into_iter()
            .filter(|p| {
                let product: &Product = (**p).as_ref();
                self.category.matches(product) && product.title_contains_lowercase(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::sync::Arc;

    fn catalog() -> Vec<Arc<Product>> {
        vec![
            Arc::new(Product::new(1u64, "Red Shirt", Money::from_cents(1000), "clothing")),
            Arc::new(Product::new(2u64, "Blue Mug", Money::from_cents(500), "home")),
            Arc::new(Product::new(3u64, "Blue Shirt", Money::from_cents(1200), "clothing")),
        ]
    }

    fn ids(products: &[&Arc<Product>]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let products = catalog();
        let filter = ProductFilter::new();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&products)), vec![1, 2, 3]);
    }

    #[test]
    fn test_term_and_category_combine() {
        let products = catalog();
        let filter = ProductFilter::new().with_term("BLUE").with_category("clothing");
        assert_eq!(ids(&filter.apply(&products)), vec![3]);
        assert!(filter.matches(&products[2]));
        assert!(!filter.matches(&products[1]));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let products = catalog();
        let filter = ProductFilter::new().with_category("garden");
        assert!(filter.apply(&products).is_empty());
    }
}

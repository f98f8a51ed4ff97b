//! Category selection and the derived category set.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the synthetic category that selects every product.
pub const ALL_CATEGORIES: &str = "all";

/// The category picker's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// The "all" sentinel.
    #[default]
    All,
    /// A single category by exact name.
    Named(String),
}

impl CategoryFilter {
    /// Build a filter from user input. `"all"` is always the sentinel, even if
    /// the feed happens to use it as a real category name.
    pub fn parse(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Whether a product belongs to this selection.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CategoryFilter {
    fn from(name: String) -> Self {
        CategoryFilter::parse(name)
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        CategoryFilter::parse(name)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Derive the picker's options: the "all" sentinel followed by each distinct
/// category in the order it first appears. Products without a category
/// contribute nothing.
pub fn derive_categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if product.has_category() && !categories.iter().any(|c| *c == product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

//! Product catalog module.
//!
//! Contains the product type, category derivation, the product source seam
//! and the catalog store.

mod category;
mod product;
mod source;
mod store;

pub use category::{derive_categories, CategoryFilter, ALL_CATEGORIES};
pub use product::{parse_feed, Product};
pub use source::{FailingSource, ProductSource, StaticSource};
pub use store::{CatalogStore, LoadReport};

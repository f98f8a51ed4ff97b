//! Catalog and cart state for the storefront.
//!
//! This crate holds everything the storefront computes, independent of how
//! it is rendered:
//!
//! - **Catalog**: products as fetched, the derived category set, and the
//!   filtered view for the current search text and category
//! - **Cart**: entries with quantities, item count, and exact totals
//! - **Session**: one catalog plus one cart, driven by [`Intent`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! let mut session = Session::new();
//! session.load(&source).await?;
//!
//! session.apply(Intent::SelectCategory("clothing".into()))?;
//! for product in session.catalog.visible_products() {
//!     println!("{} {}", product.title, product.price);
//! }
//!
//! session.apply(Intent::AddToCart(ProductId::new(1)))?;
//! println!("Total: {}", session.cart.total()?);
//! ```

pub mod error;
pub mod ids;
pub mod intent;
pub mod money;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::{CommerceError, LoadError};
pub use ids::{ProductId, SessionId};
pub use intent::Intent;
pub use money::Money;
pub use session::{Outcome, Session};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, LoadError};
    pub use crate::ids::{ProductId, SessionId};
    pub use crate::intent::Intent;
    pub use crate::money::Money;
    pub use crate::session::{Outcome, Session};

    // Catalog
    pub use crate::catalog::{
        CatalogStore, CategoryFilter, LoadReport, Product, ProductSource, StaticSource,
        ALL_CATEGORIES,
    };

    // Cart
    pub use crate::cart::{CartEntry, CartPricing, CartStore, LinePricing};

    // Search
    pub use crate::search::ProductFilter;
}

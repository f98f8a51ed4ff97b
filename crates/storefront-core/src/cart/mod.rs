//! Shopping cart module.
//!
//! Contains the cart store, its entries, and pricing.

mod cart;
mod pricing;

pub use cart::{CartEntry, CartStore, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartPricing, LinePricing};

//! HTTP product feed for the storefront catalog.
//!
//! This crate provides:
//! - `FeedClient` - one-shot GET of the product list, implementing `ProductSource`
//! - `FeedConfig` - endpoint and client settings
//! - `TimeoutConfig` - optional connect/total timeouts (off by default)

mod client;
mod timeout;

pub use client::*;
pub use timeout::*;

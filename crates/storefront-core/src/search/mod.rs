//! Search module.
//!
//! Free-text and category filtering over the loaded catalog.

mod filter;

pub use filter::ProductFilter;

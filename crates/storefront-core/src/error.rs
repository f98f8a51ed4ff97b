//! Storefront error types.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::MoneyError;

/// Errors raised by cart mutations and intent dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product is not part of the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Quantity outside the accepted range.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// A text command could not be turned into an intent.
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),
}

/// Failure to load the product feed.
///
/// Returned from the load boundary. The catalog is left exactly as it was
/// before the attempt whenever one of these is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The feed answered with a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request did not finish in time.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The feed host could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The body was not a valid product list.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("Request error: {0}")]
    Request(String),
}

impl LoadError {
    /// Whether the failure happened on the network rather than in decoding.
    pub fn is_network(&self) -> bool {
        !matches!(self, LoadError::Decode(_))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Decode(e.to_string())
    }
}

impl From<MoneyError> for LoadError {
    fn from(e: MoneyError) -> Self {
        LoadError::Decode(e.to_string())
    }
}

//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Pricing breakdown for the whole cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Number of entries (the badge count).
    pub item_count: usize,
    /// Sum of quantities.
    pub quantity_total: u64,
    /// One line per entry, in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single cart entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePricing {
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub total: Money,
}

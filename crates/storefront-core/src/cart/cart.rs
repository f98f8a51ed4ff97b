//! Cart store and cart entries.

use std::sync::Arc;

use tracing::debug;

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Maximum quantity allowed per entry.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// One product in the cart with how many units are wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// The product, shared with the catalog.
    pub product: Arc<Product>,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// `price * quantity`, or None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(self.quantity)
    }
}

/// The shopping cart and its overlay visibility.
///
/// Holds at most one entry per product ID. Entries stay in the order they
/// were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    entries: Vec<CartEntry>,
    is_open: bool,
}

impl CartStore {
    /// An empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, merging with an existing entry.
    ///
    /// Returns the entry's new quantity. Fails without changing anything when
    /// the entry is already at [`MAX_QUANTITY_PER_ITEM`] or the cart total
    /// would overflow.
    pub fn add_to_cart(&mut self, product: Arc<Product>) -> Result<u32, CommerceError> {
        let current = self.entry(product.id).map_or(0, |e| e.quantity);
        if current >= MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                current + 1,
                MAX_QUANTITY_PER_ITEM,
            ));
        }
        self.total_with(product.id, product.price, current + 1)?;

        if let Some(existing) = self.entry_mut(product.id) {
            existing.quantity += 1;
            let quantity = existing.quantity;
            debug!(product = %product.id, quantity, "cart entry incremented");
            return Ok(quantity);
        }

        debug!(product = %product.id, "cart entry added");
        self.entries.push(CartEntry::new(product));
        Ok(1)
    }

    /// Remove the entry for `id`. Returns whether one was removed; an unknown
    /// ID is a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product_id() != id);
        let removed = self.entries.len() < len_before;
        if removed {
            debug!(product = %id, "cart entry removed");
        }
        removed
    }

    /// Set the quantity for an existing entry. Zero removes it.
    ///
    /// Returns `Ok(false)` if there is no entry for `id`.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove_from_cart(id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let price = match self.entry(id) {
            Some(entry) => entry.product.price,
            None => return Ok(false),
        };
        self.total_with(id, price, quantity)?;

        match self.entry_mut(id) {
            Some(entry) => {
                entry.quantity = quantity;
                debug!(product = %id, quantity, "cart quantity set");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Take one unit away, removing the entry when it reaches zero.
    ///
    /// Returns the remaining quantity, or None if there was no entry.
    pub fn decrement(&mut self, id: ProductId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        let remaining = entry.quantity - 1;
        if remaining == 0 {
            self.remove_from_cart(id);
        } else {
            entry.quantity = remaining;
        }
        Some(remaining)
    }

    /// Remove every entry. Visibility is left alone.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of distinct products in the cart. This is what the cart badge
    /// shows.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all quantities.
    pub fn quantity_total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id() == id)
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product_id() == id)
    }

    /// Sum of `price * quantity` over all entries.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.entries
            .iter()
            .try_fold(Money::ZERO, |acc, entry| {
                entry.line_total().and_then(|line| acc.try_add(&line))
            })
            .ok_or(CommerceError::Overflow)
    }

    /// The total the cart would have if `id` were at `quantity` units of
    /// `price`. Mutations check this first so a successful change always
    /// leaves a total that fits.
    fn total_with(&self, id: ProductId, price: Money, quantity: u32) -> Result<Money, CommerceError> {
        let line = price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        self.entries
            .iter()
            .filter(|entry| entry.product_id() != id)
            .try_fold(line, |acc, entry| {
                entry.line_total().and_then(|l| acc.try_add(&l))
            })
            .ok_or(CommerceError::Overflow)
    }

    /// Per-entry breakdown plus the subtotal.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let lines = self
            .entries
            .iter()
            .map(|entry| {
                Ok(LinePricing {
                    product_id: entry.product_id(),
                    title: entry.product.title.clone(),
                    unit_price: entry.product.price,
                    quantity: entry.quantity,
                    total: entry.line_total().ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal =
            Money::try_sum(lines.iter().map(|l| &l.total)).ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            item_count: self.item_count(),
            quantity_total: self.quantity_total(),
            lines,
        })
    }

    /// Whether the overlay is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip visibility and return the new state.
    pub fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }
}

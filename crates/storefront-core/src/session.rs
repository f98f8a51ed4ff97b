//! One storefront session: a catalog, a cart, and intent dispatch.

use tracing::debug;

use crate::cart::CartStore;
use crate::catalog::{CatalogStore, LoadReport, ProductSource};
use crate::error::{CommerceError, LoadError};
use crate::ids::SessionId;
use crate::intent::Intent;
use crate::money::Money;

/// What an applied intent changed, for the view layer to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The filter changed; `visible` products now match.
    Filter { visible: usize },
    /// The cart contents changed.
    Cart { item_count: usize, total: Money },
    /// The overlay was shown or hidden.
    Overlay { open: bool },
    /// Nothing changed (e.g. removing an ID that is not in the cart).
    Unchanged,
}

/// The stores for one running instance, created once and handed to the view
/// layer by reference.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    pub catalog: CatalogStore,
    pub cart: CartStore,
}

impl Session {
    /// An empty catalog and an empty, closed cart.
    pub fn new() -> Self {
        Self::with_catalog(CatalogStore::new())
    }

    pub fn with_catalog(catalog: CatalogStore) -> Self {
        Self {
            id: SessionId::generate(),
            catalog,
            cart: CartStore::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Load the catalog. The cart is never touched, whatever the result.
    pub async fn load(&mut self, source: &dyn ProductSource) -> Result<LoadReport, LoadError> {
        debug!(session = %self.id, source = %source.describe(), "loading catalog");
        self.catalog.load(source).await
    }

    /// Apply one intent. Errors leave the stores unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, CommerceError> {
        debug!(session = %self.id, intent = %intent, "applying intent");

        match intent {
            Intent::Search(term) => {
                self.catalog.set_search_term(term);
                Ok(self.filter_outcome())
            }
            Intent::SelectCategory(name) => {
                self.catalog.set_category(name);
                Ok(self.filter_outcome())
            }
            Intent::ResetFilters => {
                self.catalog.reset_filters();
                Ok(self.filter_outcome())
            }
            Intent::AddToCart(id) => {
                let product = self
                    .catalog
                    .product(id)
                    .cloned()
                    .ok_or(CommerceError::ProductNotFound(id))?;
                self.cart.add_to_cart(product)?;
                self.cart_outcome()
            }
            Intent::RemoveFromCart(id) => {
                if self.cart.remove_from_cart(id) {
                    self.cart_outcome()
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
            Intent::SetQuantity(id, quantity) => {
                if self.cart.set_quantity(id, quantity)? {
                    self.cart_outcome()
                } else {
                    Ok(Outcome::Unchanged)
                }
            }
            Intent::Decrement(id) => match self.cart.decrement(id) {
                Some(_) => self.cart_outcome(),
                None => Ok(Outcome::Unchanged),
            },
            Intent::ClearCart => {
                self.cart.clear();
                self.cart_outcome()
            }
            Intent::OpenCart => {
                self.cart.open();
                Ok(Outcome::Overlay { open: true })
            }
            Intent::CloseCart => {
                self.cart.close();
                Ok(Outcome::Overlay { open: false })
            }
            Intent::ToggleCart => Ok(Outcome::Overlay {
                open: self.cart.toggle_open(),
            }),
        }
    }

    fn filter_outcome(&self) -> Outcome {
        Outcome::Filter {
            visible: self.catalog.visible_products().len(),
        }
    }

    fn cart_outcome(&self) -> Result<Outcome, CommerceError> {
        Ok(Outcome::Cart {
            item_count: self.cart.item_count(),
            total: self.cart.total()?,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

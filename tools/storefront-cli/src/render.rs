//! Terminal rendering of the catalog and the cart overlay.

use std::sync::Arc;

use anyhow::Result;
use console::style;
use serde::Serialize;
use storefront_core::catalog::Product;
use storefront_core::Session;

use crate::config::DisplaySection;
use crate::output::{truncate, Output};

const ID_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 18;

/// Print a product table.
pub fn products(output: &Output, items: &[Arc<Product>], display: &DisplaySection) {
    if items.is_empty() {
        output.info("No products match.");
        return;
    }

    let widths = [ID_WIDTH, display.title_width, PRICE_WIDTH, CATEGORY_WIDTH];
    output.table_row(&["ID", "TITLE", "PRICE", "CATEGORY"], &widths);
    for product in items {
        let id = product.id.to_string();
        let title = truncate(&product.title, display.title_width);
        let price = product.price.display();
        let category = truncate(&product.category, CATEGORY_WIDTH);
        output.table_row(&[&id, &title, &price, &category], &widths);
        if display.show_images && !product.image.is_empty() {
            output.line(&format!(
                "  {:width$}  {}",
                "",
                style(&product.image).dim(),
                width = ID_WIDTH
            ));
        }
    }
}

/// One-line cart badge: entry count and total.
pub fn badge(output: &Output, session: &Session) -> Result<()> {
    let cart = &session.cart;
    if cart.is_empty() {
        output.line(&format!("{} cart empty", style("🛒").dim()));
    } else {
        output.line(&format!(
            "{} {} item(s) · {}",
            style("🛒").magenta(),
            cart.item_count(),
            style(cart.total()?.display()).bold()
        ));
    }
    Ok(())
}

/// The cart overlay: one line per entry and the total.
pub fn cart(output: &Output, session: &Session) -> Result<()> {
    output.header("Shopping Cart");
    let pricing = session.cart.pricing()?;
    if pricing.is_empty() {
        output.info("Cart is empty.");
        return Ok(());
    }

    let widths = [ID_WIDTH, 32, 5, PRICE_WIDTH];
    output.table_row(&["ID", "TITLE", "QTY", "SUBTOTAL"], &widths);
    for line in &pricing.lines {
        let id = line.product_id.to_string();
        let title = truncate(&line.title, 32);
        let quantity = line.quantity.to_string();
        let total = line.total.display();
        output.table_row(&[&id, &title, &quantity, &total], &widths);
    }
    output.kv("Total", &pricing.subtotal.display());
    Ok(())
}

/// JSON snapshot of everything the view layer would show.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub search: &'a str,
    pub category: &'a str,
    pub categories: &'a [String],
    pub visible: Vec<&'a Product>,
    pub cart_open: bool,
    pub cart: storefront_core::cart::CartPricing,
}

impl<'a> Snapshot<'a> {
    pub fn capture(session: &'a Session, visible: &'a [Arc<Product>]) -> Result<Self> {
        Ok(Self {
            search: session.catalog.search_term(),
            category: session.catalog.selected_category().as_str(),
            categories: session.catalog.categories(),
            visible: visible.iter().map(|p| &**p).collect(),
            cart_open: session.cart.is_open(),
            cart: session.cart.pricing()?,
        })
    }
}

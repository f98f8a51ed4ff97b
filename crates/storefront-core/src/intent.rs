//! User intents dispatched from the view layer.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the search text.
    Search(String),
    /// Pick a category (or "all").
    SelectCategory(String),
    /// Clear search and category.
    ResetFilters,
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    SetQuantity(ProductId, u32),
    Decrement(ProductId),
    ClearCart,
    OpenCart,
    CloseCart,
    ToggleCart,
}

/// Parses the short command syntax used by the terminal session:
/// `search <text>`, `category <name>`, `reset`, `add <id>`, `remove <id>`,
/// `qty <id> <n>`, `dec <id>`, `clear`, `open`, `close`, `toggle`.
impl FromStr for Intent {
    type Err = CommerceError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        // Only the single separator after the verb is dropped; search text
        // is kept as typed.
        let (verb, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw.trim();

        let intent = match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => Intent::Search(raw.to_string()),
            "category" | "cat" => {
                if rest.is_empty() {
                    return Err(CommerceError::InvalidIntent(
                        "category needs a name".to_string(),
                    ));
                }
                Intent::SelectCategory(rest.to_string())
            }
            "reset" => Intent::ResetFilters,
            "add" => Intent::AddToCart(parse_id(rest)?),
            "remove" | "rm" => Intent::RemoveFromCart(parse_id(rest)?),
            "dec" => Intent::Decrement(parse_id(rest)?),
            "qty" => {
                let (id, quantity) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    CommerceError::InvalidIntent("usage: qty <id> <quantity>".to_string())
                })?;
                let quantity = quantity.trim().parse::<u32>().map_err(|_| {
                    CommerceError::InvalidIntent(format!("not a quantity: {}", quantity.trim()))
                })?;
                Intent::SetQuantity(parse_id(id)?, quantity)
            }
            "clear" => Intent::ClearCart,
            "open" => Intent::OpenCart,
            "close" => Intent::CloseCart,
            "toggle" | "cart" => Intent::ToggleCart,
            "" => return Err(CommerceError::InvalidIntent("empty command".to_string())),
            other => {
                return Err(CommerceError::InvalidIntent(format!(
                    "unknown command: {other}"
                )))
            }
        };
        Ok(intent)
    }
}

fn parse_id(text: &str) -> Result<ProductId, CommerceError> {
    text.parse()
        .map_err(|_| CommerceError::InvalidIntent(format!("not a product id: {text:?}")))
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Search(term) => write!(f, "search {term}"),
            Intent::SelectCategory(name) => write!(f, "category {name}"),
            Intent::ResetFilters => f.write_str("reset"),
            Intent::AddToCart(id) => write!(f, "add {id}"),
            Intent::RemoveFromCart(id) => write!(f, "remove {id}"),
            Intent::SetQuantity(id, n) => write!(f, "qty {id} {n}"),
            Intent::Decrement(id) => write!(f, "dec {id}"),
            Intent::ClearCart => f.write_str("clear"),
            Intent::OpenCart => f.write_str("open"),
            Intent::CloseCart => f.write_str("close"),
            Intent::ToggleCart => f.write_str("toggle"),
        }
    }
}

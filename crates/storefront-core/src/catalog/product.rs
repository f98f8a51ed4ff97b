//! Product type as delivered by the feed.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Deserializes straight from one element of the feed's JSON array. Fields
/// the catalog does not interpret are kept in `extra` and serialized back
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title, the search key.
    pub title: String,
    /// Unit price.
    #[serde(deserialize_with = "money::deserialize_price")]
    pub price: Money,
    /// Long description, unused by the stores.
    #[serde(default)]
    pub description: String,
    /// Category name. Missing or null in the feed becomes empty.
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: String,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Remaining feed fields (e.g. `rating`).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a product with the fields the stores care about.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the feed supplied a category.
    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }

    /// Case-insensitive substring match on the title.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn title_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a feed body into products, preserving order.
pub fn parse_feed(body: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_ITEM: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_feed_item() {
        let product: Product = serde_json::from_str(FEED_ITEM).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.cents(), 10995);
        assert_eq!(product.category, "men's clothing");
        assert!(product.extra.contains_key("rating"));
    }

    #[test]
    fn test_missing_or_null_category() {
        let missing: Product =
            serde_json::from_str(r#"{"id":2,"title":"Thing","price":1}"#).unwrap();
        assert_eq!(missing.category, "");
        assert!(!missing.has_category());

        let null: Product =
            serde_json::from_str(r#"{"id":3,"title":"Thing","price":1,"category":null}"#)
                .unwrap();
        assert_eq!(null.category, "");
    }

    #[test]
    fn test_negative_price_rejected() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"id":4,"title":"Bad","price":-1.5,"category":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields_serialize_back() {
        let product: Product = serde_json::from_str(FEED_ITEM).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["rating"]["count"], 120);
        assert_eq!(json["price"], 109.95);
    }

    #[test]
    fn test_builder_sets_display_fields() {
        let product = Product::new(5u64, "Lamp", Money::from_cents(2500), "home")
            .with_image("https://img/5.png")
            .with_description("Warm light");
        assert_eq!(product.image, "https://img/5.png");
        assert_eq!(product.description, "Warm light");
        assert!(product.extra.is_empty());
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let product = Product::new(2u64, "Blue Mug", Money::from_cents(500), "home");
        assert!(product.title_contains_lowercase("mug"));
        assert!(product.title_contains_lowercase("blue m"));
        assert!(product.title_contains_lowercase(""));
        assert!(!product.title_contains_lowercase("shirt"));
    }

    #[test]
    fn test_parse_feed_preserves_order() {
        let body = br#"[
            {"id":2,"title":"B","price":1,"category":"x"},
            {"id":1,"title":"A","price":2,"category":"y"}
        ]"#;
        let products = parse_feed(body).unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}

//! Feed client against a local mock server.

use std::time::Duration;

use storefront_core::catalog::CatalogStore;
use storefront_core::LoadError;
use storefront_feed::{FeedClient, FeedConfig, TimeoutConfig};

const BODY: &str = r#"[
    {"id": 1, "title": "Red Shirt", "price": 10, "description": "cotton", "category": "clothing", "image": "https://img/1.png"},
    {"id": 2, "title": "Blue Mug", "price": 5.25, "description": "ceramic", "category": "home", "image": "https://img/2.png",
     "rating": {"rate": 4.1, "count": 30}}
]"#;

fn client_for(url: String) -> FeedClient {
    FeedClient::new(FeedConfig::new(url)).expect("client builds")
}

#[tokio::test]
async fn loads_products_in_feed_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BODY)
        .create_async()
        .await;

    let client = client_for(format!("{}/products", server.url()));
    let mut catalog = CatalogStore::new();
    let report = catalog.load(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.products, 2);
    assert_eq!(catalog.categories(), ["all", "clothing", "home"]);
    assert_eq!(catalog.products()[1].price.cents(), 525);
    assert!(catalog.products()[1].extra.contains_key("rating"));
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/products")
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(format!("{}/products", server.url()));
    let mut catalog = CatalogStore::new();
    let err = catalog.load(&client).await.unwrap_err();

    assert!(matches!(err, LoadError::Http { status: 503, .. }));
    assert!(err.is_network());
    assert!(catalog.products().is_empty());
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/products")
        .with_status(200)
        .with_body(r#"{"not": "a list"}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}/products", server.url()));
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, LoadError::Decode(_)));
    assert!(!err.is_network());
}

#[tokio::test]
async fn empty_feed_loads_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/products")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(format!("{}/products", server.url()));
    let mut catalog = CatalogStore::new();
    let report = catalog.load(&client).await.unwrap();

    assert!(report.is_empty_feed());
    assert!(catalog.is_loaded());
    assert_eq!(catalog.categories(), ["all"]);
}

#[tokio::test]
async fn unreachable_host_leaves_catalog_empty() {
    // Nothing listens on the discard port.
    let config = FeedConfig::new("http://127.0.0.1:9/products")
        .with_timeout(TimeoutConfig::from_total(Duration::from_secs(5)));
    let client = FeedClient::new(config).unwrap();
    let mut catalog = CatalogStore::new();

    let err = catalog.load(&client).await.unwrap_err();

    assert!(err.is_network());
    assert!(catalog.products().is_empty());
    assert!(!catalog.is_loaded());
}

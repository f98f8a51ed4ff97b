//! Property tests for the catalog derivation and the cart.

use std::sync::Arc;

use proptest::prelude::*;
use storefront_core::prelude::*;

const CATEGORIES: [&str; 3] = ["clothing", "home", "toys"];

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        0u64..50,
        "[a-zA-Z ]{0,12}",
        0i64..100_000,
        prop::sample::select(CATEGORIES.to_vec()),
    )
        .prop_map(|(id, title, cents, category)| {
            Product::new(id, title, Money::from_cents(cents), category)
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn search_under_all_is_title_subsequence(products in catalog_strategy(), term in "[a-zA-Z]{0,3}") {
        let mut store = CatalogStore::with_products(products.clone());
        store.set_search_term(term.clone());

        let expected: Vec<Product> = products
            .into_iter()
            .filter(|p| p.title.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        let visible: Vec<Product> = store
            .visible_products()
            .iter()
            .map(|p| Product::clone(p))
            .collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn category_filter_only_shows_that_category(
        products in catalog_strategy(),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let mut store = CatalogStore::with_products(products);
        store.set_category(category);
        for product in store.visible_products() {
            prop_assert_eq!(product.category.as_str(), category);
        }
    }

    #[test]
    fn visible_products_is_idempotent(products in catalog_strategy(), term in "[a-z]{0,2}") {
        let mut store = CatalogStore::with_products(products);
        store.set_search_term(term);
        let first = store.visible_products();
        let second = store.visible_products();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn repeated_adds_merge_into_one_entry(product in product_strategy(), n in 1u32..200) {
        let product = Arc::new(product);
        let mut cart = CartStore::new();
        for _ in 0..n {
            cart.add_to_cart(product.clone()).unwrap();
        }
        prop_assert_eq!(cart.item_count(), 1);
        prop_assert_eq!(cart.entry(product.id).unwrap().quantity, n);
    }

    #[test]
    fn remove_is_idempotent(products in catalog_strategy(), victim in 0u64..50) {
        let mut cart = CartStore::new();
        for product in products {
            cart.add_to_cart(Arc::new(product)).unwrap();
        }
        let id = ProductId::new(victim);

        let mut once = cart.clone();
        once.remove_from_cart(id);
        let mut twice = once.clone();
        twice.remove_from_cart(id);

        prop_assert_eq!(&once, &twice);
        prop_assert!(twice.entry(id).is_none());
    }

    #[test]
    fn total_is_monotone(products in catalog_strategy(), removals in prop::collection::vec(0u64..50, 0..10)) {
        let mut cart = CartStore::new();
        let mut last = cart.total().unwrap();
        prop_assert_eq!(last, Money::ZERO);

        for product in products {
            cart.add_to_cart(Arc::new(product)).unwrap();
            let now = cart.total().unwrap();
            prop_assert!(now >= last);
            last = now;
        }
        for id in removals {
            cart.remove_from_cart(ProductId::new(id));
            let now = cart.total().unwrap();
            prop_assert!(now <= last);
            last = now;
        }
    }
}

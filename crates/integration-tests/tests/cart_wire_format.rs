//! The persisted blob's encoding contract.
//!
//! The cart blob is a JSON array of line-item objects with the exact field
//! names `id`, `title`, `image_url`, `price` (number), and `quantity`
//! (integer), stored under the single namespaced key. Carts persisted by
//! earlier builds must keep decoding, so these tests pin the format rather
//! than just round-tripping whatever the current types produce.

use std::sync::Arc;

use gomarket_cart::{CART_STORAGE_KEY, CartProvider, MemoryStorage, Storage};
use gomarket_core::{CartSnapshot, ProductId};
use gomarket_integration_tests::{init_tracing, line_input};

#[tokio::test]
async fn test_persisted_blob_shape() {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    let provider = CartProvider::with_storage(storage.clone());
    provider.initialize().await.unwrap();

    let cart = provider.cart();
    cart.add_to_cart(line_input("shirt", 1099)).await.unwrap();
    cart.add_to_cart(line_input("shirt", 1099)).await.unwrap();

    let blob = storage.get(CART_STORAGE_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = items[0].as_object().unwrap();
    assert_eq!(item["id"], "shirt");
    assert_eq!(item["title"], "Product shirt");
    assert_eq!(item["image_url"], "https://img.example/shirt.png");
    assert!(item["price"].is_number());
    assert_eq!(item["quantity"], 2);
}

#[tokio::test]
async fn test_fixed_storage_key() {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    let provider = CartProvider::with_storage(storage.clone());
    provider.initialize().await.unwrap();

    provider
        .cart()
        .add_to_cart(line_input("shirt", 1000))
        .await
        .unwrap();

    assert_eq!(CART_STORAGE_KEY, "@GoMarket:cart");
    assert!(storage.get(CART_STORAGE_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn test_blob_written_by_external_producer_decodes() {
    init_tracing();

    // Hand-written blob in the pinned format (e.g. from an earlier build).
    let blob = r#"[
        {"id":"shirt","title":"Shirt","image_url":"https://img.example/shirt.png","price":10.99,"quantity":3},
        {"id":"mug","title":"Mug","image_url":"https://img.example/mug.png","price":5.5,"quantity":0}
    ]"#;

    let provider = CartProvider::new(MemoryStorage::with_entry(CART_STORAGE_KEY, blob));
    provider.initialize().await.unwrap();

    let snapshot = provider.cart().snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get(&ProductId::new("shirt")).unwrap().quantity, 3);
    assert_eq!(snapshot.get(&ProductId::new("mug")).unwrap().quantity, 0);
    assert_eq!(snapshot.total_quantity(), 3);
}

#[tokio::test]
async fn test_encode_decode_equivalence() {
    init_tracing();
    let provider = CartProvider::new(MemoryStorage::new());
    provider.initialize().await.unwrap();

    let cart = provider.cart();
    cart.add_to_cart(line_input("a", 1000)).await.unwrap();
    cart.add_to_cart(line_input("b", 550)).await.unwrap();
    cart.decrement(&ProductId::new("b")).await.unwrap();

    let snapshot = cart.snapshot().unwrap();
    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: CartSnapshot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, snapshot);
}

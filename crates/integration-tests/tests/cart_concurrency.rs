//! Concurrency behavior of the cart service.
//!
//! Updates to the same cart are serialized through a per-cart lock, so a
//! read-modify-write race can never silently drop an update. Updates to
//! different carts share nothing and proceed independently.

#![allow(clippy::unwrap_used)]

use clementine_core::ItemId;
use clementine_integration_tests::{test_service, unique_cart_id};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_to_one_cart_are_all_applied() {
    let service = test_service();
    let cart_id = unique_cart_id("shared");

    let mut handles = Vec::new();
    for item in 1..=16 {
        let service = service.clone();
        let cart_id = cart_id.clone();
        handles.push(tokio::spawn(async move {
            service
                .set_item_quantity(&cart_id, ItemId::new(item), i64::from(item))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let cart = service.get_cart(&cart_id).await.unwrap();
    assert_eq!(cart.items.len(), 16);
    for item in 1..=16 {
        assert_eq!(
            cart.quantity_of(ItemId::new(item)),
            Some(u32::try_from(item).unwrap()),
            "line for item {item} lost or corrupted under concurrency"
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_identical_updates_converge() {
    // Set-absolute updates make the operation naturally idempotent, so
    // hammering one line with the same value must land on exactly that
    // value no matter how the writes interleave.
    let service = test_service();
    let cart_id = unique_cart_id("hammer");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let cart_id = cart_id.clone();
        handles.push(tokio::spawn(async move {
            service.set_item_quantity(&cart_id, ItemId::new(1), 7).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let cart = service.get_cart(&cart_id).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.quantity_of(ItemId::new(1)), Some(7));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_updates_to_distinct_carts_are_independent() {
    let service = test_service();

    let mut handles = Vec::new();
    let cart_ids: Vec<String> = (0..8).map(|n| unique_cart_id(&format!("cart{n}"))).collect();
    for (n, cart_id) in cart_ids.iter().enumerate() {
        let service = service.clone();
        let cart_id = cart_id.clone();
        let quantity = i64::try_from(n).unwrap() + 1;
        handles.push(tokio::spawn(async move {
            service.set_item_quantity(&cart_id, ItemId::new(1), quantity).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for (n, cart_id) in cart_ids.iter().enumerate() {
        let cart = service.get_cart(cart_id).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(
            cart.quantity_of(ItemId::new(1)),
            Some(u32::try_from(n).unwrap() + 1)
        );
    }
}

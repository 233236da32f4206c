//! Integration tests for order detail rendering.
//!
//! These tests verify the shared order lines and that each delivery variant
//! contributes only its own block.

use online_store_core::{Delivery, FixedClock, Order};
use online_store_integration_tests::{
    alice_order, home_delivery, january_2024, monday_shop_delivery, pick_point_delivery,
};

fn rendered(order: &Order) -> String {
    let mut out = Vec::new();
    order
        .display_order_details(&mut out)
        .expect("writing to a Vec never fails");
    String::from_utf8(out).expect("output is UTF-8")
}

/// The first four lines are the shared order fields.
fn shared_block(text: &str) -> Vec<&str> {
    text.lines().take(4).collect()
}

fn variant_block(text: &str) -> Vec<&str> {
    text.lines().skip(4).collect()
}

// =============================================================================
// Shared Field Tests
// =============================================================================

#[test]
fn test_home_order_shared_lines() {
    let text = rendered(&alice_order(home_delivery()));

    assert!(text.contains("Order Number: 1001"));
    assert!(text.contains("Customer: Alice, 555-1234"));
    assert!(text.contains("Total Amount: 50.00"));
    assert!(text.contains("Delivery Address: 123 Main St"));
}

#[test]
fn test_swapping_variant_keeps_shared_lines() {
    let deliveries: Vec<Delivery> = vec![
        home_delivery().into(),
        pick_point_delivery(january_2024(1, 18, 30)).into(),
        monday_shop_delivery().into(),
    ];

    let outputs: Vec<String> = deliveries
        .into_iter()
        .map(|delivery| rendered(&alice_order(delivery)))
        .collect();

    let first = outputs.first().expect("three outputs");
    for other in &outputs {
        assert_eq!(shared_block(first), shared_block(other));
    }

    let blocks: Vec<Vec<&str>> = outputs.iter().map(|text| variant_block(text)).collect();
    assert_ne!(blocks.first(), blocks.get(1));
    assert_ne!(blocks.get(1), blocks.get(2));
    assert_ne!(blocks.first(), blocks.get(2));
}

// =============================================================================
// Variant Block Tests
// =============================================================================

#[test]
fn test_pick_point_block() {
    let text = rendered(&alice_order(pick_point_delivery(january_2024(1, 18, 30))));

    assert_eq!(
        variant_block(&text),
        vec![
            "Pick-up Address: 456 Elm St",
            "Pick-up Point ID: PP001",
            "Pick-up Point Name: Convenient Pickup",
            "Closing Time: 2024-01-01 18:30:00",
        ]
    );
}

#[test]
fn test_shop_block_lists_hours() {
    let text = rendered(&alice_order(monday_shop_delivery()));

    assert_eq!(
        variant_block(&text),
        vec![
            "Shop Address: 789 Oak St",
            "Shop ID: S001",
            "Shop Name: Online Store",
            "Shop Working Hours:",
            "Monday: 09:00:00 - 18:00:00",
        ]
    );
}

#[test]
fn test_home_block_reflects_calculation() {
    let mut order = alice_order(home_delivery());
    assert!(rendered(&order).contains("Estimated Delivery Time: not calculated yet"));

    order
        .delivery_info_mut()
        .calculate(&FixedClock::new(january_2024(1, 10, 0)), &mut std::io::sink())
        .expect("sink accepts writes");

    assert!(rendered(&order).contains("Estimated Delivery Time: 2024-01-01 12:00:00"));
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_order_json_roundtrip() {
    let order = alice_order(monday_shop_delivery());
    let json = serde_json::to_value(&order).expect("order serializes");

    assert_eq!(json["number"], 1001);
    assert_eq!(json["total_amount"]["amount"], "50.00");
    assert_eq!(json["delivery_info"]["kind"], "shop");

    let parsed: Order = serde_json::from_value(json).expect("order deserializes");
    assert_eq!(parsed, order);
}

//! Integration tests for the online store order model.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p online-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_display` - Rendering of shared and variant-specific order fields
//! - `delivery_checks` - Variant calculations driven through a fixed clock
//!
//! This library holds the fixtures the test files share.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, Local, NaiveTime, TimeZone, Weekday};
use rust_decimal::Decimal;

use online_store_core::{
    CurrencyCode, Delivery, HomeDelivery, Order, OrderNumber, PickPointDelivery, PickPointId,
    Price, ShopDelivery, ShopId, TimeRange, WorkingHours,
};

/// A local instant on 1-7 January 2024, where the 1st is a Monday.
///
/// # Panics
///
/// Panics if the arguments do not name a single, valid local time.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn january_2024(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
}

/// A home delivery to `123 Main St` by John Doe.
#[must_use]
pub fn home_delivery() -> HomeDelivery {
    HomeDelivery::new("123 Main St", "John Doe")
}

/// The `PP001` pick-up point closing at `closing_time`.
#[must_use]
pub fn pick_point_delivery(closing_time: DateTime<Local>) -> PickPointDelivery {
    PickPointDelivery {
        address: "456 Elm St".to_owned(),
        pick_point_id: PickPointId::from("PP001"),
        pick_point_name: "Convenient Pickup".to_owned(),
        closing_time,
    }
}

/// The `S001` shop, open Mondays 09:00-18:00 only.
///
/// # Panics
///
/// Never in practice; the fixed hours are valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn monday_shop_delivery() -> ShopDelivery {
    let open = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    ShopDelivery {
        address: "789 Oak St".to_owned(),
        shop_id: ShopId::from("S001"),
        shop_name: "Online Store".to_owned(),
        working_hours: WorkingHours::new().with(Weekday::Mon, TimeRange::new(open, close).unwrap()),
    }
}

/// Order #1001 for Alice totalling 50.00, delivered by `delivery`.
#[must_use]
pub fn alice_order(delivery: impl Into<Delivery>) -> Order {
    Order::new(
        OrderNumber::new(1001),
        "Sample order",
        "Alice",
        "555-1234",
        Price::new(Decimal::new(5000, 2), CurrencyCode::USD),
        delivery,
    )
}

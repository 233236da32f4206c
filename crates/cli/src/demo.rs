//! The fixed demonstration sequence.
//!
//! Builds one order per delivery variant, prints each order's details and
//! then runs that variant's calculation against the supplied clock.

use std::io::{self, Write};

use chrono::{Local, NaiveDateTime, NaiveTime, Weekday};
use thiserror::Error;
use tracing::info;

use online_store_core::{
    Clock, CurrencyCode, HomeDelivery, Order, OrderNumber, PickPointDelivery, PickPointId, Price,
    ShopDelivery, ShopId, TimeRange, WorkingHours, WorkingHoursError,
};

/// Errors that can stop the demonstration.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing to the output failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    /// A wall-clock time does not exist today (e.g. skipped by a DST change).
    #[error("Local time {0} does not exist today")]
    InvalidLocalTime(NaiveDateTime),

    /// An hour/minute pair is not a valid time of day.
    #[error("Invalid time of day {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// Sample working hours were rejected.
    #[error("Invalid working hours: {0}")]
    WorkingHours(#[from] WorkingHoursError),
}

fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime, DemoError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(DemoError::InvalidTimeOfDay { hour, minute })
}

fn home_order() -> Order {
    Order::new(
        OrderNumber::new(1001),
        "Home delivery order",
        "Alice",
        "555-1234",
        Price::from_cents(5000, CurrencyCode::USD),
        HomeDelivery::new("123 Main St", "John Doe"),
    )
}

fn pick_point_order(clock: &impl Clock) -> Result<Order, DemoError> {
    let closing = clock.now().date_naive().and_time(time_of_day(18, 30)?);
    let closing_time = closing
        .and_local_timezone(Local)
        .earliest()
        .ok_or(DemoError::InvalidLocalTime(closing))?;

    Ok(Order::new(
        OrderNumber::new(2001),
        "Pick-up point order",
        "Bob",
        "555-5678",
        Price::from_cents(7000, CurrencyCode::USD),
        PickPointDelivery {
            address: "456 Elm St".to_owned(),
            pick_point_id: PickPointId::from("PP001"),
            pick_point_name: "Convenient Pickup".to_owned(),
            closing_time,
        },
    ))
}

fn shop_order() -> Result<Order, DemoError> {
    let weekday_hours = TimeRange::new(time_of_day(9, 0)?, time_of_day(18, 0)?)?;

    Ok(Order::new(
        OrderNumber::new(3001),
        "Shop delivery order",
        "Charlie",
        "555-9012",
        Price::from_cents(10000, CurrencyCode::USD),
        ShopDelivery {
            address: "789 Oak St".to_owned(),
            shop_id: ShopId::from("S001"),
            shop_name: "Online Store".to_owned(),
            working_hours: WorkingHours::new()
                .with(Weekday::Mon, weekday_hours)
                .with(Weekday::Tue, weekday_hours),
        },
    ))
}

/// The three sample orders: home, pick-up point, shop.
///
/// # Errors
///
/// Returns an error if today's pick-up closing time does not exist locally.
pub fn sample_orders(clock: &impl Clock) -> Result<Vec<Order>, DemoError> {
    Ok(vec![home_order(), pick_point_order(clock)?, shop_order()?])
}

/// Display every sample order, then run its delivery calculation.
///
/// # Errors
///
/// Returns an error if the sample orders cannot be built or `out` fails.
pub fn run<W>(clock: &impl Clock, out: &mut W) -> Result<(), DemoError>
where
    W: Write + ?Sized,
{
    for (index, mut order) in sample_orders(clock)?.into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        info!(order = %order.number(), delivery = %order.delivery_info().kind(), "Processing order");
        order.display_order_details(out)?;
        order.delivery_info_mut().calculate(clock, out)?;
    }
    Ok(())
}

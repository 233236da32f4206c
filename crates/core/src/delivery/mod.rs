//! Delivery variants.
//!
//! An order reaches its customer in exactly one of three ways. [`Delivery`]
//! is the closed set of those ways; every consumer matches on it
//! exhaustively, so adding a variant is a compile error everywhere it needs
//! handling.

pub mod home;
pub mod pick_point;
pub mod shop;

use core::fmt;
use std::io::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub use home::HomeDelivery;
pub use pick_point::{ClosingStatus, PickPointDelivery};
pub use shop::{ShopDelivery, TimeRange, WorkingHours, WorkingHoursError, weekday_name};

use crate::clock::Clock;

/// `chrono` format used for every timestamp shown to customers.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How an order is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delivery {
    Home(HomeDelivery),
    PickPoint(PickPointDelivery),
    Shop(ShopDelivery),
}

/// Label for a [`Delivery`] variant without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    Home,
    PickPoint,
    Shop,
}

impl fmt::Display for DeliveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::PickPoint => write!(f, "pick_point"),
            Self::Shop => write!(f, "shop"),
        }
    }
}

/// Outcome of [`Delivery::calculate`], one case per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryCheck {
    /// Courier arrival estimate.
    Estimated(DateTime<Local>),
    /// Pick-up point opening state.
    Closing(ClosingStatus),
    /// Whether the shop is open right now.
    ShopOpen(bool),
}

impl Delivery {
    /// The address shared by every variant.
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::Home(home) => &home.address,
            Self::PickPoint(pick_point) => &pick_point.address,
            Self::Shop(shop) => &shop.address,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DeliveryKind {
        match self {
            Self::Home(_) => DeliveryKind::Home,
            Self::PickPoint(_) => DeliveryKind::PickPoint,
            Self::Shop(_) => DeliveryKind::Shop,
        }
    }

    /// Run the variant's own calculation, writing its message to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn calculate<W>(&mut self, clock: &impl Clock, out: &mut W) -> std::io::Result<DeliveryCheck>
    where
        W: Write + ?Sized,
    {
        Ok(match self {
            Self::Home(home) => DeliveryCheck::Estimated(home.calculate_delivery_time(clock, out)?),
            Self::PickPoint(pick_point) => {
                DeliveryCheck::Closing(pick_point.calculate_time_until_closing(clock, out)?)
            }
            Self::Shop(shop) => DeliveryCheck::ShopOpen(shop.is_shop_open(clock, out)?),
        })
    }

    /// Write the variant-specific detail lines.
    pub(crate) fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home(home) => {
                writeln!(f, "Delivery Address: {}", home.address)?;
                match home.estimated_delivery_time() {
                    Some(eta) => writeln!(f, "Estimated Delivery Time: {}", eta.format(TIME_FORMAT))?,
                    None => writeln!(f, "Estimated Delivery Time: not calculated yet")?,
                }
                writeln!(f, "Courier Name: {}", home.courier_name)
            }
            Self::PickPoint(pick_point) => {
                writeln!(f, "Pick-up Address: {}", pick_point.address)?;
                writeln!(f, "Pick-up Point ID: {}", pick_point.pick_point_id)?;
                writeln!(f, "Pick-up Point Name: {}", pick_point.pick_point_name)?;
                writeln!(
                    f,
                    "Closing Time: {}",
                    pick_point.closing_time.format(TIME_FORMAT)
                )
            }
            Self::Shop(shop) => {
                writeln!(f, "Shop Address: {}", shop.address)?;
                writeln!(f, "Shop ID: {}", shop.shop_id)?;
                writeln!(f, "Shop Name: {}", shop.shop_name)?;
                writeln!(f, "Shop Working Hours:")?;
                for (day, range) in shop.working_hours.iter() {
                    writeln!(f, "{}: {range}", weekday_name(day))?;
                }
                Ok(())
            }
        }
    }
}

impl From<HomeDelivery> for Delivery {
    fn from(delivery: HomeDelivery) -> Self {
        Self::Home(delivery)
    }
}

impl From<PickPointDelivery> for Delivery {
    fn from(delivery: PickPointDelivery) -> Self {
        Self::PickPoint(delivery)
    }
}

impl From<ShopDelivery> for Delivery {
    fn from(delivery: ShopDelivery) -> Self {
        Self::Shop(delivery)
    }
}

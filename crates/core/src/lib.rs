//! Online Store Core - Order and delivery domain model.
//!
//! This crate provides the types used by the `online-store` binary:
//! - orders carrying customer and pricing data
//! - the three ways an order reaches its customer (home, pick-up point, shop)
//! - the per-variant calculations (delivery estimate, time until closing, shop hours)
//!
//! # Architecture
//!
//! The core crate contains only types and traits. Time is read through the
//! [`Clock`] trait and every message is written to a caller-supplied
//! [`std::io::Write`] sink, so nothing here touches stdout or the wall clock
//! directly.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers and prices
//! - [`clock`] - Time source abstraction
//! - [`delivery`] - Delivery variants and their calculations
//! - [`order`] - The order record and its display routine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod delivery;
pub mod order;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use delivery::{
    ClosingStatus, Delivery, DeliveryCheck, DeliveryKind, HomeDelivery, PickPointDelivery,
    ShopDelivery, TimeRange, WorkingHours, WorkingHoursError,
};
pub use order::Order;
pub use types::*;

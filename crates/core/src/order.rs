//! Customer orders.

use core::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::delivery::Delivery;
use crate::types::{OrderNumber, Price};

/// A customer's order together with how it will be delivered.
///
/// Every field is set at construction and is read-only afterwards. The held
/// [`Delivery`] can still run its own calculations through
/// [`Order::delivery_info_mut`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    number: OrderNumber,
    description: String,
    customer_name: String,
    customer_phone: String,
    total_amount: Price,
    delivery_info: Delivery,
}

impl Order {
    #[must_use]
    pub fn new(
        number: OrderNumber,
        description: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        total_amount: Price,
        delivery_info: impl Into<Delivery>,
    ) -> Self {
        Self {
            number,
            description: description.into(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            total_amount,
            delivery_info: delivery_info.into(),
        }
    }

    #[must_use]
    pub const fn number(&self) -> OrderNumber {
        self.number
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    #[must_use]
    pub const fn total_amount(&self) -> Price {
        self.total_amount
    }

    #[must_use]
    pub const fn delivery_info(&self) -> &Delivery {
        &self.delivery_info
    }

    /// Mutable access to the delivery so its calculations can record results.
    pub const fn delivery_info_mut(&mut self) -> &mut Delivery {
        &mut self.delivery_info
    }

    /// Write the order summary followed by the delivery details to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn display_order_details<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: Write + ?Sized,
    {
        tracing::debug!(
            order = %self.number,
            delivery = %self.delivery_info.kind(),
            "Displaying order details"
        );
        write!(out, "{self}")
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Number: {}", self.number)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Customer: {}, {}", self.customer_name, self.customer_phone)?;
        writeln!(f, "Total Amount: {}", self.total_amount)?;
        self.delivery_info.write_details(f)
    }
}

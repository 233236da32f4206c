//! Courier delivery to the customer's door.

use std::io::Write;

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use super::TIME_FORMAT;
use crate::clock::Clock;

/// Hours a courier takes from dispatch to the customer's door.
pub const COURIER_TRAVEL_HOURS: i64 = 2;

/// Delivery by courier to the customer's address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeDelivery {
    /// Customer's street address.
    pub address: String,
    /// Name of the assigned courier.
    pub courier_name: String,
    /// `None` until [`HomeDelivery::calculate_delivery_time`] has run.
    estimated_delivery_time: Option<DateTime<Local>>,
}

impl HomeDelivery {
    /// Create a home delivery with no estimate yet.
    #[must_use]
    pub fn new(address: impl Into<String>, courier_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            courier_name: courier_name.into(),
            estimated_delivery_time: None,
        }
    }

    /// The estimated arrival, if it has been calculated.
    #[must_use]
    pub const fn estimated_delivery_time(&self) -> Option<DateTime<Local>> {
        self.estimated_delivery_time
    }

    /// Estimate arrival as now plus [`COURIER_TRAVEL_HOURS`], store it, and
    /// announce it on `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails. The estimate is stored
    /// before the write, so it survives a failed write.
    pub fn calculate_delivery_time<W>(
        &mut self,
        clock: &impl Clock,
        out: &mut W,
    ) -> std::io::Result<DateTime<Local>>
    where
        W: Write + ?Sized,
    {
        let eta = clock.now() + Duration::hours(COURIER_TRAVEL_HOURS);
        self.estimated_delivery_time = Some(eta);

        tracing::debug!(courier = %self.courier_name, eta = %eta, "Estimated home delivery");

        writeln!(
            out,
            "{} will deliver your order by {}.",
            self.courier_name,
            eta.format(TIME_FORMAT)
        )?;
        Ok(eta)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::clock::FixedClock;

    fn monday_morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_estimate_unset_before_calculation() {
        let delivery = HomeDelivery::new("123 Main St", "John Doe");
        assert_eq!(delivery.estimated_delivery_time(), None);
    }

    #[test]
    fn test_estimate_is_two_hours_ahead() {
        let now = monday_morning();
        let mut delivery = HomeDelivery::new("123 Main St", "John Doe");
        let mut out = Vec::new();

        let eta = delivery
            .calculate_delivery_time(&FixedClock::new(now), &mut out)
            .unwrap();

        assert_eq!(eta, now + Duration::hours(2));
        assert_eq!(delivery.estimated_delivery_time(), Some(eta));
    }

    #[test]
    fn test_announcement_names_courier_and_time() {
        let mut delivery = HomeDelivery::new("123 Main St", "John Doe");
        let mut out = Vec::new();

        delivery
            .calculate_delivery_time(&FixedClock::new(monday_morning()), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "John Doe will deliver your order by 2024-01-01 12:00:00.\n"
        );
    }

    #[test]
    fn test_recalculation_overwrites_estimate() {
        let first = monday_morning();
        let later = first + Duration::minutes(45);
        let mut delivery = HomeDelivery::new("123 Main St", "John Doe");
        let mut out = Vec::new();

        delivery
            .calculate_delivery_time(&FixedClock::new(first), &mut out)
            .unwrap();
        delivery
            .calculate_delivery_time(&FixedClock::new(later), &mut out)
            .unwrap();

        assert_eq!(
            delivery.estimated_delivery_time(),
            Some(later + Duration::hours(2))
        );
    }
}

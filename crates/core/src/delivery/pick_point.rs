//! Delivery to a pick-up point the customer collects from.

use std::io::Write;

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::types::PickPointId;

/// Delivery to a staffed pick-up point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickPointDelivery {
    /// Street address of the pick-up point.
    pub address: String,
    pub pick_point_id: PickPointId,
    pub pick_point_name: String,
    /// When the point stops handing out parcels.
    pub closing_time: DateTime<Local>,
}

/// Whether a pick-up point is still open, and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingStatus {
    /// Open; `remaining` is always strictly positive.
    Open { remaining: Duration },
    Closed,
}

impl ClosingStatus {
    /// Classify the time left before closing. Zero counts as closed.
    #[must_use]
    pub fn from_remaining(remaining: Duration) -> Self {
        if remaining > Duration::zero() {
            Self::Open { remaining }
        } else {
            Self::Closed
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Whole hours and leftover whole minutes until closing, rounded down.
    #[must_use]
    pub fn hours_and_minutes(&self) -> Option<(i64, i64)> {
        match self {
            Self::Open { remaining } => {
                Some((remaining.num_hours(), remaining.num_minutes() % 60))
            }
            Self::Closed => None,
        }
    }
}

impl PickPointDelivery {
    /// Work out how long the point stays open and announce it on `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn calculate_time_until_closing<W>(
        &self,
        clock: &impl Clock,
        out: &mut W,
    ) -> std::io::Result<ClosingStatus>
    where
        W: Write + ?Sized,
    {
        let status = ClosingStatus::from_remaining(self.closing_time - clock.now());

        tracing::debug!(
            pick_point = %self.pick_point_id,
            open = status.is_open(),
            "Checked pick-up point closing time"
        );

        match status.hours_and_minutes() {
            Some((hours, minutes)) => writeln!(
                out,
                "Pick-up point {} (ID: {}) closes in {hours} hours and {minutes} minutes.",
                self.pick_point_name, self.pick_point_id
            )?,
            None => writeln!(
                out,
                "Pick-up point {} (ID: {}) is already closed.",
                self.pick_point_name, self.pick_point_id
            )?,
        }
        Ok(status)
    }
}

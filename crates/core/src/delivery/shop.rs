//! Delivery to one of the store's own shops, with weekly opening hours.

use core::fmt;
use std::io::Write;

use chrono::{Datelike, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::types::ShopId;

/// Errors that can occur when building [`WorkingHours`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkingHoursError {
    /// The shop would close before it opens. Overnight spans are not supported.
    #[error("closing time {close} is before opening time {open}")]
    InvertedRange {
        /// Requested opening time.
        open: NaiveTime,
        /// Requested closing time.
        close: NaiveTime,
    },
}

/// Opening and closing time-of-day for a single weekday.
///
/// Both bounds are inclusive: a shop open 09:00-18:00 is open at exactly
/// 18:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(NaiveTime, NaiveTime)", into = "(NaiveTime, NaiveTime)")]
pub struct TimeRange {
    open: NaiveTime,
    close: NaiveTime,
}

impl TimeRange {
    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns [`WorkingHoursError::InvertedRange`] if `close` is before `open`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self, WorkingHoursError> {
        if close < open {
            return Err(WorkingHoursError::InvertedRange { open, close });
        }
        Ok(Self { open, close })
    }

    #[must_use]
    pub const fn open(&self) -> NaiveTime {
        self.open
    }

    #[must_use]
    pub const fn close(&self) -> NaiveTime {
        self.close
    }

    /// Whether `time` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.open <= time && time <= self.close
    }
}

impl TryFrom<(NaiveTime, NaiveTime)> for TimeRange {
    type Error = WorkingHoursError;

    fn try_from((open, close): (NaiveTime, NaiveTime)) -> Result<Self, Self::Error> {
        Self::new(open, close)
    }
}

impl From<TimeRange> for (NaiveTime, NaiveTime) {
    fn from(range: TimeRange) -> Self {
        (range.open, range.close)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}

/// Opening hours keyed by weekday.
///
/// Each weekday has at most one entry. Iteration always runs Monday to
/// Sunday regardless of the order entries were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingHours([Option<TimeRange>; 7]);

impl WorkingHours {
    /// Hours with every day closed.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 7])
    }

    /// Builder-style [`WorkingHours::insert`].
    #[must_use]
    pub fn with(mut self, day: Weekday, range: TimeRange) -> Self {
        self.insert(day, range);
        self
    }

    /// Set the hours for `day`, returning the hours it replaced.
    pub fn insert(&mut self, day: Weekday, range: TimeRange) -> Option<TimeRange> {
        self.0.get_mut(slot(day)).and_then(|entry| entry.replace(range))
    }

    /// The hours for `day`, or `None` if the shop is closed all day.
    #[must_use]
    pub fn get(&self, day: Weekday) -> Option<TimeRange> {
        self.0.get(slot(day)).copied().flatten()
    }

    /// Whether the shop is open on `day` at `time`.
    #[must_use]
    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        self.get(day).is_some_and(|range| range.contains(time))
    }

    /// Days with hours, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, TimeRange)> + '_ {
        std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ()))
            .zip(self.0.iter())
            .filter_map(|(day, range)| range.map(|range| (day, range)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

fn slot(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

/// Full English name of a weekday (`chrono` only displays "Mon").
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Delivery to a store-owned shop the customer collects from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopDelivery {
    /// Street address of the shop.
    pub address: String,
    pub shop_id: ShopId,
    pub shop_name: String,
    pub working_hours: WorkingHours,
}

impl ShopDelivery {
    /// Check the current weekday and time against the working hours and
    /// announce the result on `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn is_shop_open<W>(&self, clock: &impl Clock, out: &mut W) -> std::io::Result<bool>
    where
        W: Write + ?Sized,
    {
        let now = clock.now();
        let open = self.working_hours.is_open_at(now.weekday(), now.time());

        tracing::debug!(shop = %self.shop_id, weekday = %now.weekday(), open, "Checked shop hours");

        let state = if open { "open" } else { "closed" };
        writeln!(
            out,
            "Shop {} (ID: {}) is {state}.",
            self.shop_name, self.shop_id
        )?;
        Ok(open)
    }
}

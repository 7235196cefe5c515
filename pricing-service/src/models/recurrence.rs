//! Recurrence model.

use crate::error::PricingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing interval unit.
///
/// Unknown units deserialize to `Month`, the same fallback `from_string`
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Interval {
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "day" => Interval::Day,
            "week" => Interval::Week,
            "year" => Interval::Year,
            _ => Interval::Month,
        }
    }
}

impl From<String> for Interval {
    fn from(s: String) -> Self {
        Interval::from_string(&s)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated recurrence: every `interval_count` `interval`s from `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSpec {
    pub interval_count: u32,
    pub interval: Interval,
    pub start_date: DateTime<Utc>,
}

impl RecurrenceSpec {
    /// Check `interval_count` against `1..=max_interval_count`.
    pub fn new(
        interval_count: i64,
        interval: Interval,
        start_date: DateTime<Utc>,
        max_interval_count: u32,
    ) -> Result<Self, PricingError> {
        if interval_count < 1 {
            return Err(PricingError::InvalidIntervalCount(interval_count));
        }
        if interval_count > i64::from(max_interval_count) {
            return Err(PricingError::IntervalCountTooLarge {
                count: interval_count,
                max: max_interval_count,
            });
        }

        Ok(Self {
            interval_count: interval_count as u32,
            interval,
            start_date,
        })
    }
}

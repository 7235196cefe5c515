//! Billing period arithmetic and interval labels.

use crate::error::PricingError;
use crate::models::{Interval, RecurrenceSpec};
use chrono::{DateTime, Days, Months, Utc};

/// End of the billing period that starts at `start`.
///
/// Month and year steps are calendar aware and clamp to the last day of the
/// target month: 2024-01-31 plus one month is 2024-02-29, and 2024-02-29
/// plus one year is 2025-02-28.
pub fn compute_period_end(
    start: DateTime<Utc>,
    interval_count: u32,
    interval: Interval,
) -> Result<DateTime<Utc>, PricingError> {
    if interval_count == 0 {
        return Err(PricingError::InvalidIntervalCount(0));
    }

    let count = u64::from(interval_count);
    let end = match interval {
        Interval::Day => start.checked_add_days(Days::new(count)),
        Interval::Week => start.checked_add_days(Days::new(count * 7)),
        Interval::Month => start.checked_add_months(Months::new(interval_count)),
        Interval::Year => interval_count
            .checked_mul(12)
            .and_then(|months| start.checked_add_months(Months::new(months))),
    };

    end.ok_or(PricingError::PeriodOutOfRange)
}

impl RecurrenceSpec {
    /// End of the first billing period.
    pub fn period_end(&self) -> Result<DateTime<Utc>, PricingError> {
        compute_period_end(self.start_date, self.interval_count, self.interval)
    }
}

/// `"month"` for a count of one, `"3 months"` otherwise.
pub fn describe_interval(count: u32, interval: Interval) -> String {
    if count == 1 {
        interval.as_str().to_string()
    } else {
        format!("{} {}s", count, interval.as_str())
    }
}

/// Summary label shown next to the total: `"Every 1 month"`, `"Every 2 weeks"`.
pub fn cadence_label(count: u32, interval: Interval) -> String {
    let unit = if count == 1 {
        interval.as_str().to_string()
    } else {
        format!("{}s", interval.as_str())
    };
    format!("Every {} {}", count, unit)
}

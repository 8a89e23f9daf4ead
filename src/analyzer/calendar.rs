//! Calendar date normalization.
//!
//! Callers may pass out-of-range components (month 13, day 0, day 32).
//! These roll over into neighbouring months and years instead of failing:
//! month 13 of 2019 is January 2020, day 0 is the last day of the
//! previous month.

use chrono::{Duration, NaiveDate};

/// Build a calendar date from possibly out-of-range components
///
/// **Public** - used by `TransactionAnalyzer::total_amount_on_date`
///
/// # Returns
/// The normalized date, or `None` if it falls outside the representable range
pub fn normalize_calendar_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_month.checked_add_signed(Duration::days(i64::from(day) - 1))
}

//! Calendar arithmetic shared by the scheduler and its callers.
//!
//! Everything is chrono `NaiveDate` math, so the scheduler, the upcoming
//! list, and any host bookkeeping agree bit-for-bit on what "tomorrow" is.

use chrono::{Datelike, Days, NaiveDate};

/// `date + n` calendar days; `n` may be negative. Correct across month and
/// year boundaries and leap-year February.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        date.checked_add_days(Days::new(n as u64))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    }
    // chrono's date range spans years ±262143; a simulation date cannot
    // leave it.
    .expect("date arithmetic out of chrono range")
}

/// Numeric seed for a date: its YYYYMMDD digits as an integer, e.g.
/// 2026-03-02 → 20260302.
pub fn date_seed(date: NaiveDate) -> u64 {
    date.year() as u64 * 10_000 + date.month() as u64 * 100 + date.day() as u64
}

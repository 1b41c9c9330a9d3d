//! PortfolioSnapshot — immutable end-of-tick record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Appended to the simulation history exactly once per processed tick,
/// in tick order. An append-only sequence keyed by tick index — no
/// back-references into the live portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub date: NaiveDate,
    pub total_value: f64,
    pub cash_balance: f64,
    /// (total_value - starting_value) / starting_value
    pub cumulative_return: f64,
}

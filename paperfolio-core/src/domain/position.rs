//! Position — one held instrument, fractional quantities allowed.

use super::instrument::InstrumentKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single held position.
///
/// `entry_price`/`entry_date` record the first purchase and are preserved
/// when later buys add to the position (pooled model, not cost-basis
/// accounting). Invariant after any recomputation step:
/// `current_value == quantity * current_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub kind: InstrumentKind,
    pub quantity: f64,
    pub entry_price: f64,
    pub entry_date: NaiveDate,
    pub current_price: f64,
    pub current_value: f64,
}

impl Position {
    pub fn market_value(&self, price: f64) -> f64 {
        self.quantity * price
    }

    pub fn unrealized_pnl(&self) -> f64 {
        self.quantity * (self.current_price - self.entry_price)
    }
}

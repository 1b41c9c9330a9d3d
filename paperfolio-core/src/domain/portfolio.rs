//! Portfolio — aggregate state of cash + all positions.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Aggregate portfolio state.
///
/// The accounting identity must hold after every mutation step:
/// `total_value == cash_balance + sum(position current values)`.
/// `starting_value` is fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub positions: Vec<Position>,
    pub cash_balance: f64,
    pub total_value: f64,
    pub starting_value: f64,
}

impl Portfolio {
    pub fn new(starting_capital: f64) -> Self {
        Self {
            positions: Vec::new(),
            cash_balance: starting_capital,
            total_value: starting_capital,
            starting_value: starting_capital,
        }
    }

    /// Sum of all position market values.
    pub fn positions_value(&self) -> f64 {
        self.positions.iter().map(|p| p.current_value).sum()
    }

    /// Re-establish the accounting identity after cash or positions changed.
    pub fn recompute_total(&mut self) {
        self.total_value = self.cash_balance + self.positions_value();
    }

    /// (total - starting) / starting, or 0 for a degenerate starting value.
    pub fn cumulative_return(&self) -> f64 {
        if self.starting_value <= 0.0 {
            return 0.0;
        }
        (self.total_value - self.starting_value) / self.starting_value
    }

    /// Position for a plain (non-option) ticker, if held.
    pub fn position(&self, ticker: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|p| p.ticker == ticker && !p.kind.is_option())
    }
}

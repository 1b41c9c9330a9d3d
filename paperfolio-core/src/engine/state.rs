//! Simulation configuration and immutable run state.

use crate::domain::{
    PendingTrade, Portfolio, PortfolioSnapshot, RuleLogEntry, Scenario, TradeRule,
};
use serde::{Deserialize, Serialize};

/// An initial allocation: "put this much money into this ticker on day one".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub ticker: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    /// Timer-driven playback; an external driver calls `advance_tick` on a cadence.
    Movie,
    /// The user steps the simulation manually.
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
}

/// Immutable parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub starting_capital: f64,
    pub scenario: Scenario,
    pub allocations: Vec<Allocation>,
    pub rules: Vec<TradeRule>,
    pub mode: SimulationMode,
    pub granularity: Granularity,
    pub drip: bool,
}

/// Full simulation state.
///
/// Created once at simulation start; advanced only by `advance_tick`, which
/// produces a new value. Once `is_complete` is set the state is terminal and
/// must not be advanced further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub config: SimulationConfig,
    /// Index into the reference price series: the next trading day to process.
    pub current_date_index: usize,
    pub portfolio: Portfolio,
    pub history: Vec<PortfolioSnapshot>,
    pub rules_log: Vec<RuleLogEntry>,
    pub narrator_queue: Vec<String>,
    pub pending_trades: Vec<PendingTrade>,
    pub is_complete: bool,
}

impl SimulationState {
    /// Fresh state at the start of a run: day zero, all cash, empty history.
    pub fn new(config: SimulationConfig) -> Self {
        let portfolio = Portfolio::new(config.starting_capital);
        Self {
            config,
            current_date_index: 0,
            portfolio,
            history: Vec::new(),
            rules_log: Vec::new(),
            narrator_queue: Vec::new(),
            pending_trades: Vec::new(),
            is_complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use chrono::NaiveDate;

    fn config() -> SimulationConfig {
        SimulationConfig {
            starting_capital: 10_000.0,
            scenario: Scenario {
                slug: "test".into(),
                name: "Test".into(),
                start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
                description: String::new(),
                snark_description: String::new(),
                color: "green".into(),
                difficulty: Difficulty::Easy,
                risk_free_rate: 0.02,
                events: Vec::new(),
            },
            allocations: Vec::new(),
            rules: Vec::new(),
            mode: SimulationMode::Movie,
            granularity: Granularity::Daily,
            drip: false,
        }
    }

    #[test]
    fn new_state_starts_at_day_zero() {
        let state = SimulationState::new(config());
        assert_eq!(state.current_date_index, 0);
        assert!(state.history.is_empty());
        assert!(state.pending_trades.is_empty());
        assert!(!state.is_complete);
        assert_eq!(state.portfolio.cash_balance, 10_000.0);
    }
}

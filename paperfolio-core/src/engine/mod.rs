//! Simulation engine — the per-tick state transition and its sub-steps.
//!
//! Each tick processes one trading day in four phases:
//!
//! 1. Trade execution: pending trades fill at the day's opening prices
//! 2. Valuation: every position reprices at the day's closing prices
//! 3. DRIP: dividend yield converts into extra fractional shares (if enabled)
//! 4. Snapshot: one immutable history record, then the date cursor advances
//!
//! `advance_tick` is pure: it never mutates its inputs and returns a wholly
//! new `SimulationState`.

pub mod drip;
pub mod state;
pub mod tick;
pub mod trades;
pub mod valuation;

pub use drip::{annual_dividend_yield, apply_drip_dividends, TRADING_DAYS_PER_YEAR};
pub use state::{Allocation, Granularity, SimulationConfig, SimulationMode, SimulationState};
pub use tick::{advance_tick, reference_series};
pub use trades::apply_pending_trades;
pub use valuation::revalue_positions;

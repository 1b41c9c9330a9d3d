//! Trade intents and rule bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// Where a pending trade came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSource {
    /// Placed directly by the user.
    Manual,
    /// Emitted by the (external) rules engine.
    Rule,
}

/// A trade intent, queued for the next tick and discarded after it —
/// whether or not it executed. There are no retry semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTrade {
    pub ticker: String,
    pub action: TradeAction,
    /// Currency value to transact (not share count).
    pub amount: f64,
    pub source: TradeSource,
}

/// A standing rule carried in the simulation config.
///
/// Rules are evaluated by an external rules engine that queues
/// `PendingTrade`s; the core only carries them through the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRule {
    pub ticker: String,
    pub action: TradeAction,
    pub amount: f64,
    /// Human-readable trigger description, e.g. "drops 10% in a day".
    pub trigger: String,
}

/// One entry in the rules activity log carried on the simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLogEntry {
    pub date: NaiveDate,
    pub message: String,
}

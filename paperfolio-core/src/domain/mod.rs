//! Domain types for the Paperfolio simulation engine.

pub mod instrument;
pub mod portfolio;
pub mod position;
pub mod price;
pub mod scenario;
pub mod snapshot;
pub mod trade;

pub use instrument::{instrument_name, InstrumentKind, OptionContract, OptionSide};
pub use portfolio::Portfolio;
pub use position::Position;
pub use price::{PriceData, PricePoint, PriceSeries, Ticker};
pub use scenario::{Difficulty, Scenario, ScenarioEvent};
pub use snapshot::PortfolioSnapshot;
pub use trade::{PendingTrade, RuleLogEntry, TradeAction, TradeRule, TradeSource};

//! PricePoint — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily OHLCV point for a single ticker.
///
/// Price series are supplied whole to the engine as an externally-sourced,
/// pre-validated artifact; the engine never fetches or repairs data itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PricePoint {
    /// Basic OHLC sanity check: high is the top of the range, low the bottom,
    /// and open/close are strictly positive.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}

/// Instrument symbol, e.g. "SPY".
pub type Ticker = String;

/// Ordered-by-date daily series for one ticker. Index `i` is the i-th trading
/// day since scenario start; non-trading days simply do not appear.
pub type PriceSeries = Vec<PricePoint>;

/// Ticker-to-series map for one simulation run.
///
/// A `BTreeMap` so that iteration order (and therefore anything derived from
/// it, like the reference calendar series) is deterministic across runs.
pub type PriceData = BTreeMap<Ticker, PriceSeries>;

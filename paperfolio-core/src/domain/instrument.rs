//! Instrument classification and metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of instrument a position holds.
///
/// Option positions carry their contract terms as structured fields rather
/// than a synthetic string-encoded identifier, so downstream logic (notably
/// the DRIP skip) matches on the variant instead of parsing strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstrumentKind {
    Stock,
    Etf,
    Crypto,
    Leveraged,
    Option(OptionContract),
}

impl InstrumentKind {
    pub fn is_option(&self) -> bool {
        matches!(self, InstrumentKind::Option(_))
    }
}

/// Structured option contract terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub underlying: String,
    pub strike: f64,
    pub expiry: NaiveDate,
    pub side: OptionSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSide {
    Call,
    Put,
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            OptionSide::Call => "C",
            OptionSide::Put => "P",
        };
        write!(f, "{} {} {}{}", self.underlying, self.expiry, side, self.strike)
    }
}

/// Classify a ticker into an instrument kind.
///
/// Covers the tickers that ship with the bundled scenarios; anything unknown
/// defaults to a common stock. Option positions never come through here —
/// they are constructed with an explicit `OptionContract`.
pub fn instrument_kind(ticker: &str) -> InstrumentKind {
    match ticker {
        "SPY" | "QQQ" | "VTI" | "IWM" | "GLD" | "TLT" => InstrumentKind::Etf,
        "TQQQ" | "SQQQ" => InstrumentKind::Leveraged,
        "BTC" | "ETH" | "DOGE" | "SOL" => InstrumentKind::Crypto,
        _ => InstrumentKind::Stock,
    }
}

/// Human-readable name for a ticker, used when the executor opens a position.
pub fn instrument_name(ticker: &str) -> &str {
    match ticker {
        "SPY" => "S&P 500 ETF",
        "QQQ" => "NASDAQ-100 ETF",
        "VTI" => "Total Market ETF",
        "IWM" => "Russell 2000 ETF",
        "GLD" => "Gold ETF",
        "TLT" => "20+ Year Treasury ETF",
        "TQQQ" => "3x NASDAQ Bull",
        "SQQQ" => "3x NASDAQ Bear",
        "AAPL" => "Apple",
        "MSFT" => "Microsoft",
        "AMZN" => "Amazon",
        "TSLA" => "Tesla",
        "NVDA" => "NVIDIA",
        "META" => "Meta Platforms",
        "GME" => "GameStop",
        "NFLX" => "Netflix",
        "JPM" => "JPMorgan Chase",
        "GS" => "Goldman Sachs",
        "IBM" => "IBM",
        "BTC" => "Bitcoin",
        "ETH" => "Ethereum",
        "DOGE" => "Dogecoin",
        "SOL" => "Solana",
        other => other,
    }
}

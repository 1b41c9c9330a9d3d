//! Price-data loading from per-scenario JSON artifacts.
//!
//! Layout on disk: `<data_dir>/<scenario-slug>/<TICKER>.json`, each file a
//! JSON array of daily OHLCV points. The artifacts are produced by an
//! external sourcing pipeline; this loader only validates what the engine
//! relies on (ascending duplicate-free dates, sane OHLC) and refuses the
//! rest.

use paperfolio_core::domain::{PriceData, PricePoint};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read price data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse {ticker}: {source}")]
    Parse {
        ticker: String,
        source: serde_json::Error,
    },
    #[error("no price files found in {0}")]
    NoData(String),
    #[error("{ticker}: series is empty")]
    EmptySeries { ticker: String },
    #[error("{ticker}: dates not strictly ascending at {date}")]
    OutOfOrder { ticker: String, date: String },
    #[error("{ticker}: insane OHLC on {date}")]
    BadPoint { ticker: String, date: String },
}

/// Load every `<TICKER>.json` under `data_dir/slug` into a `PriceData` map.
pub fn load_price_data(data_dir: &Path, slug: &str) -> Result<PriceData, LoadError> {
    let scenario_dir = data_dir.join(slug);
    let mut prices = PriceData::new();

    for entry in std::fs::read_dir(&scenario_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let ticker = stem.to_uppercase();
        let text = std::fs::read_to_string(&path)?;
        let series: Vec<PricePoint> =
            serde_json::from_str(&text).map_err(|source| LoadError::Parse {
                ticker: ticker.clone(),
                source,
            })?;
        validate_series(&ticker, &series)?;
        prices.insert(ticker, series);
    }

    if prices.is_empty() {
        return Err(LoadError::NoData(scenario_dir.display().to_string()));
    }
    Ok(prices)
}

fn validate_series(ticker: &str, series: &[PricePoint]) -> Result<(), LoadError> {
    if series.is_empty() {
        return Err(LoadError::EmptySeries {
            ticker: ticker.into(),
        });
    }
    for window in series.windows(2) {
        if window[1].date <= window[0].date {
            return Err(LoadError::OutOfOrder {
                ticker: ticker.into(),
                date: window[1].date.to_string(),
            });
        }
    }
    for point in series {
        if !point.is_sane() {
            return Err(LoadError::BadPoint {
                ticker: ticker.into(),
                date: point.date.to_string(),
            });
        }
    }
    Ok(())
}

//! Valuation — reprices every position at the tick's closing prices.

use crate::domain::{Portfolio, PriceData};

/// Reprice all positions using this tick's close for each ticker.
///
/// On a per-ticker data gap (no point at `date_index`) the position keeps its
/// prior `current_price` so holdings never silently zero out. Runs exactly
/// once per tick, after trade execution and before DRIP.
pub fn revalue_positions(portfolio: &Portfolio, prices: &PriceData, date_index: usize) -> Portfolio {
    let mut next = portfolio.clone();

    for pos in &mut next.positions {
        if let Some(point) = prices.get(&pos.ticker).and_then(|s| s.get(date_index)) {
            pos.current_price = point.close;
        }
        pos.current_value = pos.quantity * pos.current_price;
    }

    next.recompute_total();
    next
}

//! The tick state machine — one trading day per call.

use crate::domain::{PortfolioSnapshot, PriceData, PricePoint};
use crate::engine::drip::apply_drip_dividends;
use crate::engine::state::SimulationState;
use crate::engine::trades::apply_pending_trades;
use crate::engine::valuation::revalue_positions;

/// Pick the reference series that anchors the scenario's calendar.
///
/// Tickers' series may have misaligned trading calendars (holidays, listing
/// dates); the engine does not reconcile them. The reference is the longest
/// series in the map, ties broken by lexicographically smallest ticker, so
/// the choice is deterministic for any given input.
pub fn reference_series(prices: &PriceData) -> Option<(&str, &[PricePoint])> {
    prices
        .iter()
        .max_by(|(a_ticker, a), (b_ticker, b)| {
            a.len()
                .cmp(&b.len())
                // BTreeMap iterates ascending, so on equal lengths keep the
                // earlier ticker by preferring it in the max comparison.
                .then_with(|| b_ticker.cmp(a_ticker))
        })
        .map(|(ticker, series)| (ticker.as_str(), series.as_slice()))
}

/// Advance the simulation by exactly one trading day.
///
/// Pure: never mutates `state` or `prices`; returns a wholly new state.
/// Phases, in order: trade execution at the open, valuation at the close,
/// DRIP (if configured), snapshot append, queue clear, cursor advance.
///
/// If no series has a price point at the current index (empty map, empty
/// series, cursor past the end), the tick does no work and the result is
/// immediately terminal with the cursor unchanged and no snapshot — a
/// defined completion path, not an error.
///
/// Calling this on an already-terminal state is a caller error; the debug
/// assertion below catches it in tests rather than silently re-processing.
pub fn advance_tick(state: &SimulationState, prices: &PriceData) -> SimulationState {
    debug_assert!(
        !state.is_complete,
        "advance_tick called on a completed simulation"
    );

    let Some((_, reference)) = reference_series(prices) else {
        return complete_without_processing(state);
    };
    let Some(point) = reference.get(state.current_date_index) else {
        return complete_without_processing(state);
    };
    let date = point.date;
    let reference_len = reference.len();

    let portfolio = apply_pending_trades(
        &state.portfolio,
        &state.pending_trades,
        prices,
        state.current_date_index,
        date,
    );
    let portfolio = revalue_positions(&portfolio, prices, state.current_date_index);
    let portfolio = if state.config.drip {
        apply_drip_dividends(&portfolio, prices, state.current_date_index).into_owned()
    } else {
        portfolio
    };

    debug_assert!(
        (portfolio.total_value - (portfolio.cash_balance + portfolio.positions_value())).abs()
            < 1e-6,
        "accounting identity violated: total={}, cash={}, positions={}",
        portfolio.total_value,
        portfolio.cash_balance,
        portfolio.positions_value()
    );

    let snapshot = PortfolioSnapshot {
        date,
        total_value: portfolio.total_value,
        cash_balance: portfolio.cash_balance,
        cumulative_return: portfolio.cumulative_return(),
    };
    let mut history = state.history.clone();
    history.push(snapshot);

    let next_index = state.current_date_index + 1;
    SimulationState {
        config: state.config.clone(),
        current_date_index: next_index,
        portfolio,
        history,
        rules_log: state.rules_log.clone(),
        narrator_queue: state.narrator_queue.clone(),
        pending_trades: Vec::new(),
        is_complete: next_index >= reference_len,
    }
}

/// The no-data completion path: unchanged cursor, unchanged history.
fn complete_without_processing(state: &SimulationState) -> SimulationState {
    let mut next = state.clone();
    next.is_complete = true;
    next
}

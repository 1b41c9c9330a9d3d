//! Trade executor — applies the pending-trade queue at opening prices.

use crate::domain::instrument::{instrument_kind, instrument_name};
use crate::domain::{PendingTrade, Portfolio, Position, PriceData, TradeAction};
use chrono::NaiveDate;

/// Position quantities at or below this are treated as fully closed.
const QUANTITY_EPSILON: f64 = 1e-9;

/// Apply a queue of pending trades against the current tick's opening prices.
///
/// For each trade, in queue order:
/// - Buy: quantity = amount / open, cash decreases by amount. Buying into an
///   existing position sums quantities and keeps the original entry
///   price/date (pooled model, not cost-basis accounting).
/// - Sell: reduces or removes the position and credits cash. A sell for more
///   value than held is clamped to the held quantity.
///
/// A trade whose ticker has no price point at `date_index` (or a non-positive
/// open) is dropped silently: the trade never reached the market, and the
/// queue is cleared by the caller regardless.
pub fn apply_pending_trades(
    portfolio: &Portfolio,
    trades: &[PendingTrade],
    prices: &PriceData,
    date_index: usize,
    date: NaiveDate,
) -> Portfolio {
    let mut next = portfolio.clone();

    for trade in trades {
        let open = match prices
            .get(&trade.ticker)
            .and_then(|series| series.get(date_index))
        {
            Some(point) if point.open > 0.0 => point.open,
            _ => continue, // no market for this ticker today
        };

        match trade.action {
            TradeAction::Buy => buy(&mut next, trade, open, date),
            TradeAction::Sell => sell(&mut next, trade, open),
        }
    }

    next.recompute_total();
    next
}

fn buy(portfolio: &mut Portfolio, trade: &PendingTrade, open: f64, date: NaiveDate) {
    let quantity = trade.amount / open;
    portfolio.cash_balance -= trade.amount;

    if let Some(pos) = portfolio
        .positions
        .iter_mut()
        .find(|p| p.ticker == trade.ticker && !p.kind.is_option())
    {
        pos.quantity += quantity;
        pos.current_price = open;
        pos.current_value = pos.quantity * open;
    } else {
        portfolio.positions.push(Position {
            id: trade.ticker.clone(),
            ticker: trade.ticker.clone(),
            name: instrument_name(&trade.ticker).to_string(),
            kind: instrument_kind(&trade.ticker),
            quantity,
            entry_price: open,
            entry_date: date,
            current_price: open,
            current_value: trade.amount,
        });
    }
}

fn sell(portfolio: &mut Portfolio, trade: &PendingTrade, open: f64) {
    let Some(idx) = portfolio
        .positions
        .iter()
        .position(|p| p.ticker == trade.ticker && !p.kind.is_option())
    else {
        return; // nothing held, nothing to sell
    };

    let pos = &mut portfolio.positions[idx];
    let requested = trade.amount / open;
    let sold = requested.min(pos.quantity);
    portfolio.cash_balance += sold * open;
    pos.quantity -= sold;
    pos.current_price = open;
    pos.current_value = pos.quantity * open;

    if pos.quantity <= QUANTITY_EPSILON {
        portfolio.positions.remove(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricePoint, TradeSource};

    fn day(open: f64, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            open,
            high: open.max(close) * 1.01,
            low: open.min(close) * 0.99,
            close,
            volume: 1_000_000,
        }
    }

    fn prices(ticker: &str, open: f64, close: f64) -> PriceData {
        PriceData::from([(ticker.to_string(), vec![day(open, close)])])
    }

    fn trade(ticker: &str, action: TradeAction, amount: f64) -> PendingTrade {
        PendingTrade {
            ticker: ticker.into(),
            action,
            amount,
            source: TradeSource::Manual,
        }
    }

    fn jan2() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
    }

    #[test]
    fn buy_fills_at_open() {
        let portfolio = Portfolio::new(10_000.0);
        let trades = vec![trade("SPY", TradeAction::Buy, 5_000.0)];
        let next = apply_pending_trades(&portfolio, &trades, &prices("SPY", 100.0, 120.0), 0, jan2());
        let pos = next.position("SPY").unwrap();
        assert!((pos.quantity - 50.0).abs() < 1e-12);
        assert_eq!(pos.entry_price, 100.0);
        assert!((next.cash_balance - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn buy_into_existing_position_keeps_entry() {
        let portfolio = Portfolio::new(10_000.0);
        let data = prices("SPY", 100.0, 100.0);
        let first = apply_pending_trades(
            &portfolio,
            &[trade("SPY", TradeAction::Buy, 2_000.0)],
            &data,
            0,
            jan2(),
        );
        // Second buy at a different (synthetic) open
        let data2 = prices("SPY", 200.0, 200.0);
        let second = apply_pending_trades(
            &first,
            &[trade("SPY", TradeAction::Buy, 2_000.0)],
            &data2,
            0,
            jan2(),
        );
        let pos = second.position("SPY").unwrap();
        assert!((pos.quantity - 30.0).abs() < 1e-12); // 20 + 10
        assert_eq!(pos.entry_price, 100.0); // original entry preserved
        assert_eq!(second.positions.len(), 1);
    }

    #[test]
    fn sell_credits_cash_and_reduces_position() {
        let portfolio = Portfolio::new(10_000.0);
        let data = prices("SPY", 100.0, 100.0);
        let bought = apply_pending_trades(
            &portfolio,
            &[trade("SPY", TradeAction::Buy, 5_000.0)],
            &data,
            0,
            jan2(),
        );
        let sold = apply_pending_trades(
            &bought,
            &[trade("SPY", TradeAction::Sell, 2_000.0)],
            &data,
            0,
            jan2(),
        );
        let pos = sold.position("SPY").unwrap();
        assert!((pos.quantity - 30.0).abs() < 1e-12);
        assert!((sold.cash_balance - 7_000.0).abs() < 1e-9);
    }

    #[test]
    fn oversell_clamps_to_held_quantity() {
        let portfolio = Portfolio::new(10_000.0);
        let data = prices("SPY", 100.0, 100.0);
        let bought = apply_pending_trades(
            &portfolio,
            &[trade("SPY", TradeAction::Buy, 1_000.0)],
            &data,
            0,
            jan2(),
        );
        let sold = apply_pending_trades(
            &bought,
            &[trade("SPY", TradeAction::Sell, 50_000.0)],
            &data,
            0,
            jan2(),
        );
        assert!(sold.position("SPY").is_none());
        assert!((sold.cash_balance - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn sell_without_position_is_noop() {
        let portfolio = Portfolio::new(10_000.0);
        let next = apply_pending_trades(
            &portfolio,
            &[trade("SPY", TradeAction::Sell, 1_000.0)],
            &prices("SPY", 100.0, 100.0),
            0,
            jan2(),
        );
        assert_eq!(next.cash_balance, 10_000.0);
        assert!(next.positions.is_empty());
    }

    #[test]
    fn trade_with_no_price_data_is_dropped() {
        let portfolio = Portfolio::new(10_000.0);
        let next = apply_pending_trades(
            &portfolio,
            &[trade("NVDA", TradeAction::Buy, 5_000.0)],
            &prices("SPY", 100.0, 100.0),
            0,
            jan2(),
        );
        assert_eq!(next.cash_balance, 10_000.0);
        assert!(next.positions.is_empty());
    }

    #[test]
    fn trades_apply_in_queue_order() {
        let mut data = prices("SPY", 100.0, 100.0);
        data.extend(prices("NVDA", 200.0, 200.0));
        let portfolio = Portfolio::new(10_000.0);
        let next = apply_pending_trades(
            &portfolio,
            &[
                trade("SPY", TradeAction::Buy, 3_000.0),
                trade("NVDA", TradeAction::Buy, 3_000.0),
            ],
            &data,
            0,
            jan2(),
        );
        assert_eq!(next.positions.len(), 2);
        assert!((next.cash_balance - 4_000.0).abs() < 1e-9);
        assert!((next.total_value - 10_000.0).abs() < 1e-9);
    }
}

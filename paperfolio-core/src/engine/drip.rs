//! DRIP — dividend reinvestment, one trading day at a time.

use crate::domain::{Portfolio, PriceData};
use std::borrow::Cow;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Approximate trailing-12-month annual dividend yield per ticker.
///
/// Crypto, leveraged products, and non-dividend names are 0. Intentionally
/// conservative averages; educational, not investment advice.
pub fn annual_dividend_yield(ticker: &str) -> f64 {
    match ticker {
        // ETFs
        "SPY" => 0.018,
        "QQQ" => 0.005,
        "VTI" => 0.017,
        "IWM" => 0.014,
        "TLT" => 0.040,
        // Stocks
        "AAPL" => 0.005,
        "MSFT" => 0.007,
        "NVDA" => 0.001,
        "META" => 0.004,
        "JPM" => 0.025,
        "GS" => 0.024,
        "IBM" => 0.045,
        // GLD (no income), leveraged products, crypto, non-payers
        _ => 0.0,
    }
}

/// Apply one trading day of dividend reinvestment.
///
/// For each non-option position whose ticker yields more than zero:
/// `extra_shares = quantity * annual_yield / 252`. The share price is
/// unchanged; only quantity (and therefore `current_value`) grows. The
/// position's already-recomputed `current_price` is used, falling back to a
/// close lookup only if it is non-positive.
///
/// Returns `Cow::Borrowed` when no position changed, so callers can cheaply
/// detect "nothing happened". Applying this N times compounds to
/// `quantity * (1 + annual_yield / 252)^N`.
pub fn apply_drip_dividends<'a>(
    portfolio: &'a Portfolio,
    prices: &PriceData,
    date_index: usize,
) -> Cow<'a, Portfolio> {
    let mut changed = false;
    let positions: Vec<_> = portfolio
        .positions
        .iter()
        .map(|pos| {
            if pos.kind.is_option() {
                return pos.clone();
            }
            let annual_yield = annual_dividend_yield(&pos.ticker);
            if annual_yield <= 0.0 {
                return pos.clone();
            }

            let mut next = pos.clone();
            next.quantity += pos.quantity * annual_yield / TRADING_DAYS_PER_YEAR;
            let price = if pos.current_price > 0.0 {
                pos.current_price
            } else {
                prices
                    .get(&pos.ticker)
                    .and_then(|s| s.get(date_index))
                    .map(|p| p.close)
                    .unwrap_or(0.0)
            };
            next.current_price = price;
            next.current_value = next.quantity * price;
            changed = true;
            next
        })
        .collect();

    if !changed {
        return Cow::Borrowed(portfolio);
    }

    let mut next = Portfolio {
        positions,
        cash_balance: portfolio.cash_balance,
        total_value: portfolio.total_value,
        starting_value: portfolio.starting_value,
    };
    next.recompute_total();
    Cow::Owned(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstrumentKind, OptionContract, OptionSide, Position};
    use chrono::NaiveDate;

    fn held(ticker: &str, kind: InstrumentKind, quantity: f64, price: f64) -> Position {
        Position {
            id: ticker.into(),
            ticker: ticker.into(),
            name: ticker.into(),
            kind,
            quantity,
            entry_price: price,
            entry_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            current_price: price,
            current_value: quantity * price,
        }
    }

    #[test]
    fn yield_bearing_position_grows_one_daily_yield() {
        let mut portfolio = Portfolio::new(0.0);
        portfolio
            .positions
            .push(held("SPY", InstrumentKind::Etf, 100.0, 100.0));
        portfolio.recompute_total();

        let next = apply_drip_dividends(&portfolio, &PriceData::new(), 0);
        let pos = next.position("SPY").unwrap();
        let expected = 100.0 + 100.0 * 0.018 / TRADING_DAYS_PER_YEAR;
        assert!((pos.quantity - expected).abs() < 1e-9);
        assert_eq!(pos.current_price, 100.0);
        assert!((next.total_value - pos.current_value).abs() < 1e-9);
    }

    #[test]
    fn cash_is_untouched() {
        let mut portfolio = Portfolio::new(500.0);
        portfolio
            .positions
            .push(held("SPY", InstrumentKind::Etf, 100.0, 100.0));
        portfolio.recompute_total();

        let next = apply_drip_dividends(&portfolio, &PriceData::new(), 0);
        assert_eq!(next.cash_balance, 500.0);
    }

    #[test]
    fn zero_yield_ticker_is_unchanged() {
        let mut portfolio = Portfolio::new(0.0);
        portfolio
            .positions
            .push(held("BTC", InstrumentKind::Crypto, 1.0, 50_000.0));
        portfolio.recompute_total();

        let next = apply_drip_dividends(&portfolio, &PriceData::new(), 0);
        assert!(matches!(next, Cow::Borrowed(_)));
        assert_eq!(next.position("BTC").unwrap().quantity, 1.0);
    }

    #[test]
    fn option_position_is_skipped_even_on_yielding_underlying() {
        let contract = OptionContract {
            underlying: "SPY".into(),
            strike: 400.0,
            expiry: NaiveDate::from_ymd_opt(2021, 6, 18).unwrap(),
            side: OptionSide::Call,
        };
        let mut portfolio = Portfolio::new(0.0);
        // Ticker collides with a yielding name; the kind is what must decide.
        portfolio
            .positions
            .push(held("SPY", InstrumentKind::Option(contract), 10.0, 12.5));
        portfolio.recompute_total();

        let next = apply_drip_dividends(&portfolio, &PriceData::new(), 0);
        assert!(matches!(next, Cow::Borrowed(_)));
    }

    #[test]
    fn empty_portfolio_is_a_referential_noop() {
        let portfolio = Portfolio::new(10_000.0);
        let next = apply_drip_dividends(&portfolio, &PriceData::new(), 0);
        assert!(matches!(next, Cow::Borrowed(_)));
    }

    #[test]
    fn mixed_portfolio_only_grows_yielding_positions() {
        let mut portfolio = Portfolio::new(0.0);
        portfolio
            .positions
            .push(held("SPY", InstrumentKind::Etf, 100.0, 100.0));
        portfolio
            .positions
            .push(held("TQQQ", InstrumentKind::Leveraged, 10.0, 50.0));
        portfolio.recompute_total();

        let next = apply_drip_dividends(&portfolio, &PriceData::new(), 0);
        assert!(next.position("SPY").unwrap().quantity > 100.0);
        assert_eq!(next.position("TQQQ").unwrap().quantity, 10.0);
    }
}

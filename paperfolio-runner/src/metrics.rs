//! Performance metrics — pure functions over the snapshot history.

use paperfolio_core::domain::PortfolioSnapshot;
use serde::Serialize;

/// Summary statistics for one finished run.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub total_return: f64,
    pub max_drawdown: f64,
    /// Annualized standard deviation of daily returns.
    pub volatility: f64,
    /// Total return minus the scenario's risk-free rate over the run length.
    pub excess_return: f64,
}

impl PerformanceMetrics {
    pub fn compute(history: &[PortfolioSnapshot], risk_free_rate: f64) -> Self {
        let values: Vec<f64> = history.iter().map(|s| s.total_value).collect();
        let total_return = history.last().map(|s| s.cumulative_return).unwrap_or(0.0);
        let years = history.len() as f64 / 252.0;
        Self {
            total_return,
            max_drawdown: max_drawdown(&values),
            volatility: volatility(&values),
            excess_return: total_return - risk_free_rate * years,
        }
    }
}

/// Largest peak-to-trough decline as a positive fraction.
pub fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0f64;
    for &v in values {
        peak = peak.max(v);
        if peak > 0.0 {
            worst = worst.max((peak - v) / peak);
        }
    }
    worst
}

/// Annualized standard deviation of simple daily returns.
pub fn volatility(values: &[f64]) -> f64 {
    let returns: Vec<f64> = values
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| w[1] / w[0] - 1.0)
        .collect();
    if returns.len() < 2 {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (returns.len() - 1) as f64;
    variance.sqrt() * (252.0f64).sqrt()
}

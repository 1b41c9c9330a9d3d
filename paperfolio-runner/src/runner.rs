//! Playback runner — turns a `RunConfig` into a finished simulation.

use paperfolio_core::domain::{
    PendingTrade, PortfolioSnapshot, PriceData, Scenario, TradeAction, TradeSource,
};
use paperfolio_core::engine::{advance_tick, SimulationConfig, SimulationState};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::find_scenario;
use crate::config::RunConfig;
use crate::metrics::PerformanceMetrics;
use crate::milestones::MilestoneTracker;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("scenario '{0}' not found in catalog")]
    ScenarioNotFound(String),
    #[error("price data is empty")]
    EmptyPriceData,
}

/// Complete result of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub scenario_slug: String,
    pub starting_capital: f64,
    pub final_value: f64,
    pub cumulative_return: f64,
    pub ticks: usize,
    /// Milestone keys in the order they fired.
    pub milestones: Vec<&'static str>,
    pub metrics: PerformanceMetrics,
    pub history: Vec<PortfolioSnapshot>,
}

/// Drive a run to completion.
///
/// Initial allocations become pending trades on the very first tick (so they
/// fill at day one's opening prices, like any other trade), then the loop
/// calls `advance_tick` until the engine reports completion. The milestone
/// tracker observes cumulative return after every tick.
pub fn run_simulation(
    config: &RunConfig,
    catalog: &[Scenario],
    prices: &PriceData,
) -> Result<RunSummary, RunError> {
    let scenario = find_scenario(catalog, &config.scenario)
        .ok_or_else(|| RunError::ScenarioNotFound(config.scenario.clone()))?;
    if prices.values().all(|s| s.is_empty()) {
        return Err(RunError::EmptyPriceData);
    }

    let sim_config = SimulationConfig {
        starting_capital: config.starting_capital,
        scenario: scenario.clone(),
        allocations: config.allocations.clone(),
        rules: Vec::new(),
        mode: config.mode,
        granularity: config.granularity,
        drip: config.drip,
    };

    let mut state = SimulationState::new(sim_config);
    state.pending_trades = config
        .allocations
        .iter()
        .map(|a| PendingTrade {
            ticker: a.ticker.clone(),
            action: TradeAction::Buy,
            amount: a.amount,
            source: TradeSource::Manual,
        })
        .collect();

    let mut tracker = MilestoneTracker::new();
    let mut fired = Vec::new();
    let mut ticks = 0usize;
    while !state.is_complete {
        state = advance_tick(&state, prices);
        ticks += 1;
        if let Some(snapshot) = state.history.last() {
            for m in tracker.observe(snapshot.cumulative_return) {
                fired.push(m.key);
            }
        }
    }

    let metrics = PerformanceMetrics::compute(&state.history, scenario.risk_free_rate);
    Ok(RunSummary {
        run_id: config.run_id(),
        scenario_slug: scenario.slug.clone(),
        starting_capital: config.starting_capital,
        final_value: state.portfolio.total_value,
        cumulative_return: state.portfolio.cumulative_return(),
        ticks,
        milestones: fired,
        metrics,
        history: state.history,
    })
}

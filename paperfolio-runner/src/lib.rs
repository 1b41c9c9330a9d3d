//! Paperfolio Runner — orchestration around the core engine.
//!
//! Owns everything a host needs to turn a config file into a finished run:
//! - `RunConfig`: serializable run parameters with a content-hash run id
//! - The scenario catalog (built-in presets + JSON loading)
//! - Price-data loading from per-scenario JSON artifacts
//! - The playback runner that drives `advance_tick` to completion
//! - Milestone tracking over cumulative return
//! - Performance metrics and CSV export of the snapshot history

pub mod catalog;
pub mod config;
pub mod data_loader;
pub mod export;
pub mod metrics;
pub mod milestones;
pub mod runner;

pub use catalog::{builtin_catalog, find_scenario, load_catalog, CatalogError};
pub use config::{ConfigError, RunConfig};
pub use data_loader::{load_price_data, LoadError};
pub use export::write_history_csv;
pub use metrics::PerformanceMetrics;
pub use milestones::{Milestone, MilestoneDirection, MilestoneTracker, MILESTONES};
pub use runner::{run_simulation, RunError, RunSummary};

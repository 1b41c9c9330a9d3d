//! Paperfolio Core — deterministic fake-money portfolio simulation engine.
//!
//! This crate contains the heart of the simulator:
//! - Domain types (price points, positions, portfolio, trades, scenarios, snapshots)
//! - The per-tick state transition `advance_tick` (trades → valuation → DRIP → snapshot)
//! - The dividend-reinvestment (DRIP) sub-engine
//! - The deterministic daily-challenge scheduler
//!
//! Every transition is a pure function: state in, new state out. There is no
//! shared mutable state anywhere in the crate, which makes the engine trivially
//! replayable (keep old `SimulationState` values around) and safe to drive from
//! any thread model a host chooses.

pub mod challenge;
pub mod domain;
pub mod engine;

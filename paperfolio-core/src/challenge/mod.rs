//! Daily challenge scheduler — the same scenario for every user, every day.
//!
//! Every function here is pure: no wall clock, no hidden state. Given the
//! same date and catalog, every caller everywhere computes the same answer,
//! which is the whole cross-user consistency mechanism — there is no
//! coordination protocol to get wrong.

pub mod calendar;
pub mod lock;

pub use calendar::{add_days, date_seed};
pub use lock::{is_daily_lock_conflict, DailyLock};

use crate::domain::Scenario;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("no scenarios available")]
    EmptyCatalog,
}

/// One scheduled entry: a calendar date and the scenario assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyChallenge<'a> {
    pub date: NaiveDate,
    pub scenario: &'a Scenario,
}

/// Deterministically pick the scenario for a calendar date.
///
/// The YYYYMMDD digits of the date seed a `StdRng` via `seed_from_u64`,
/// whose SplitMix64 initializer gives full avalanche: consecutive dates
/// (seeds differing by 1) produce uncorrelated picks. A plain LCG lacks
/// this property and would schedule correlated runs of daily picks.
pub fn daily_scenario<'a>(
    date: NaiveDate,
    scenarios: &'a [Scenario],
) -> Result<&'a Scenario, ChallengeError> {
    if scenarios.is_empty() {
        return Err(ChallengeError::EmptyCatalog);
    }
    let mut rng = StdRng::seed_from_u64(date_seed(date));
    let idx = rng.gen_range(0..scenarios.len());
    Ok(&scenarios[idx])
}

/// The next `days` consecutive challenges starting at `from` inclusive.
pub fn upcoming_challenges<'a>(
    from: NaiveDate,
    days: usize,
    scenarios: &'a [Scenario],
) -> Result<Vec<DailyChallenge<'a>>, ChallengeError> {
    (0..days as i64)
        .map(|offset| {
            let date = add_days(from, offset);
            daily_scenario(date, scenarios).map(|scenario| DailyChallenge { date, scenario })
        })
        .collect()
}

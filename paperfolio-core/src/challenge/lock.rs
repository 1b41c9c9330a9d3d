//! Daily-lock conflict resolution.
//!
//! The host persists an "already played today" marker; this module owns only
//! the pure predicate over it. Storage is the host's problem.

use crate::domain::Scenario;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted "already played" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLock {
    /// The date the user first started a challenge.
    pub date: NaiveDate,
    /// The scenario slug they committed to on that date.
    pub slug: String,
}

/// Should an existing lock block the user from playing `target_slug` today?
///
/// True only when the lock is for today, still names a scenario present in
/// the current catalog, and differs from the target. A stale lock — one
/// whose scenario has since been removed from rotation — must never block;
/// neither does an absent lock, an old one, or replaying the same scenario.
pub fn is_daily_lock_conflict(
    lock: Option<&DailyLock>,
    today: NaiveDate,
    target_slug: &str,
    scenarios: &[Scenario],
) -> bool {
    let Some(lock) = lock else {
        return false;
    };
    if lock.date != today {
        return false;
    }
    if !scenarios.iter().any(|s| s.slug == lock.slug) {
        return false; // stale lock: scenario left the rotation
    }
    lock.slug != target_slug
}

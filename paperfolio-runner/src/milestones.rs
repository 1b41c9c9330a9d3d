//! Milestone tracking over cumulative return.
//!
//! The narrator UI that consumes these events is not part of this workspace;
//! this is the pure producer side: a fixed threshold table and a tracker
//! that fires each threshold at most once per run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneDirection {
    Up,
    Down,
}

/// A portfolio-return threshold that triggers a milestone event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Milestone {
    pub key: &'static str,
    pub threshold: f64,
    pub direction: MilestoneDirection,
}

/// Thresholds on cumulative return, checked after every tick.
pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        key: "+10",
        threshold: 0.10,
        direction: MilestoneDirection::Up,
    },
    Milestone {
        key: "+25",
        threshold: 0.25,
        direction: MilestoneDirection::Up,
    },
    Milestone {
        key: "+50",
        threshold: 0.50,
        direction: MilestoneDirection::Up,
    },
    Milestone {
        key: "-20",
        threshold: -0.20,
        direction: MilestoneDirection::Down,
    },
    Milestone {
        key: "-50",
        threshold: -0.50,
        direction: MilestoneDirection::Down,
    },
];

/// Fires each milestone at most once per run.
///
/// Explicit state passed by the runner, not a global store: resetting a run
/// means constructing a fresh tracker.
#[derive(Debug, Clone, Default)]
pub struct MilestoneTracker {
    fired: [bool; MILESTONES.len()],
}

impl MilestoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a cumulative return against all thresholds; returns the
    /// milestones newly crossed by this observation.
    pub fn observe(&mut self, cumulative_return: f64) -> Vec<Milestone> {
        let mut crossed = Vec::new();
        for (i, m) in MILESTONES.iter().enumerate() {
            if self.fired[i] {
                continue;
            }
            let hit = match m.direction {
                MilestoneDirection::Up => cumulative_return >= m.threshold,
                MilestoneDirection::Down => cumulative_return <= m.threshold,
            };
            if hit {
                self.fired[i] = true;
                crossed.push(*m);
            }
        }
        crossed
    }

    /// Keys of everything fired so far, in table order.
    pub fn fired_keys(&self) -> Vec<&'static str> {
        MILESTONES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.fired[*i])
            .map(|(_, m)| m.key)
            .collect()
    }
}

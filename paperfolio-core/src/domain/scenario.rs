//! Scenario — a named historical date range used as the backdrop of one run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable scenario reference data, loaded externally per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub slug: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub snark_description: String,
    pub color: String,
    pub difficulty: Difficulty,
    pub risk_free_rate: f64,
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Brutal,
}

/// A dated narrative event shown during playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvent {
    pub date: NaiveDate,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_serialization_roundtrip() {
        let scenario = Scenario {
            slug: "covid-crash".into(),
            name: "The COVID Crash".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 2, 19).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 8, 18).unwrap(),
            description: "Fastest 30% drawdown in history.".into(),
            snark_description: "Remember sourdough starters?".into(),
            color: "red".into(),
            difficulty: Difficulty::Hard,
            risk_free_rate: 0.015,
            events: vec![ScenarioEvent {
                date: NaiveDate::from_ymd_opt(2020, 3, 23).unwrap(),
                label: "Market bottom".into(),
            }],
        };
        let json = serde_json::to_string(&scenario).unwrap();
        let deser: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, deser);
    }
}

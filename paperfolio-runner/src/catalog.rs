//! Scenario catalog — built-in presets plus JSON loading.

use chrono::NaiveDate;
use paperfolio_core::domain::{Difficulty, Scenario, ScenarioEvent};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog file contains no scenarios")]
    Empty,
    #[error("duplicate scenario slug '{0}'")]
    DuplicateSlug(String),
}

/// Load a scenario catalog from a JSON array file.
pub fn load_catalog(path: &Path) -> Result<Vec<Scenario>, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    let scenarios: Vec<Scenario> = serde_json::from_str(&text)?;
    if scenarios.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (i, s) in scenarios.iter().enumerate() {
        if scenarios[..i].iter().any(|other| other.slug == s.slug) {
            return Err(CatalogError::DuplicateSlug(s.slug.clone()));
        }
    }
    Ok(scenarios)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid catalog date")
}

fn event(y: i32, m: u32, d: u32, label: &str) -> ScenarioEvent {
    ScenarioEvent {
        date: date(y, m, d),
        label: label.into(),
    }
}

/// The catalog that ships with the binary.
///
/// Slugs and date ranges are stable identifiers: persisted daily locks
/// reference them, so renaming a slug retires it (stale locks stop binding).
pub fn builtin_catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            slug: "dot-com-bust".into(),
            name: "The Dot-Com Bust".into(),
            start_date: date(2000, 3, 10),
            end_date: date(2002, 10, 9),
            description: "The NASDAQ loses 78% from its peak as the internet bubble deflates."
                .into(),
            snark_description: "Pets.com had a Super Bowl ad. You had a margin account.".into(),
            color: "red".into(),
            difficulty: Difficulty::Brutal,
            risk_free_rate: 0.06,
            events: vec![
                event(2000, 3, 10, "NASDAQ peaks at 5,048"),
                event(2000, 4, 14, "Black Friday: NASDAQ drops 9.7%"),
                event(2001, 9, 17, "Markets reopen after 9/11"),
                event(2002, 10, 9, "NASDAQ bottoms at 1,114"),
            ],
        },
        Scenario {
            slug: "financial-crisis".into(),
            name: "The Global Financial Crisis".into(),
            start_date: date(2007, 10, 9),
            end_date: date(2009, 3, 9),
            description: "Housing collapse takes the banking system down with it.".into(),
            snark_description: "Your house was an ATM. The ATM is now out of order.".into(),
            color: "red".into(),
            difficulty: Difficulty::Brutal,
            risk_free_rate: 0.03,
            events: vec![
                event(2008, 3, 16, "Bear Stearns sold for $2/share"),
                event(2008, 9, 15, "Lehman Brothers files for bankruptcy"),
                event(2008, 10, 3, "TARP signed into law"),
                event(2009, 3, 9, "S&P 500 bottoms at 676"),
            ],
        },
        Scenario {
            slug: "recovery-2009".into(),
            name: "The 2009 Recovery".into(),
            start_date: date(2009, 3, 9),
            end_date: date(2010, 12, 31),
            description: "The rebound off the crisis bottom, doubters included.".into(),
            snark_description: "The most hated bull market in history begins.".into(),
            color: "green".into(),
            difficulty: Difficulty::Easy,
            risk_free_rate: 0.01,
            events: vec![
                event(2009, 3, 9, "The bottom (nobody rings a bell)"),
                event(2010, 5, 6, "Flash Crash: Dow drops 1,000 points in minutes"),
            ],
        },
        Scenario {
            slug: "covid-crash".into(),
            name: "The COVID Crash".into(),
            start_date: date(2020, 2, 19),
            end_date: date(2020, 8, 18),
            description: "The fastest 30% drawdown ever, then the fastest recovery.".into(),
            snark_description: "Remember sourdough starters? Your portfolio remembers March 23."
                .into(),
            color: "orange".into(),
            difficulty: Difficulty::Hard,
            risk_free_rate: 0.005,
            events: vec![
                event(2020, 3, 9, "First circuit breaker since 1997"),
                event(2020, 3, 16, "Worst day since 1987: -12%"),
                event(2020, 3, 23, "The bottom; Fed goes unlimited"),
                event(2020, 4, 20, "Oil futures go negative"),
            ],
        },
        Scenario {
            slug: "meme-mania".into(),
            name: "Meme Stock Mania".into(),
            start_date: date(2021, 1, 4),
            end_date: date(2021, 12, 31),
            description: "Retail traders discover short squeezes; volatility discovers them back."
                .into(),
            snark_description: "Diamond hands, paper gains.".into(),
            color: "purple".into(),
            difficulty: Difficulty::Hard,
            risk_free_rate: 0.001,
            events: vec![
                event(2021, 1, 28, "GME peaks near $483 premarket"),
                event(2021, 11, 10, "Inflation print hits 6.2%"),
            ],
        },
        Scenario {
            slug: "rate-shock".into(),
            name: "The 2022 Rate Shock".into(),
            start_date: date(2022, 1, 3),
            end_date: date(2022, 12, 30),
            description: "The Fed hikes into inflation; stocks and bonds fall together.".into(),
            snark_description: "60/40 portfolios had one job.".into(),
            color: "red".into(),
            difficulty: Difficulty::Hard,
            risk_free_rate: 0.025,
            events: vec![
                event(2022, 6, 13, "S&P enters bear market"),
                event(2022, 9, 13, "CPI surprise: worst day since June 2020"),
                event(2022, 11, 10, "Softer CPI: +5.5% in a day"),
            ],
        },
        Scenario {
            slug: "ai-boom".into(),
            name: "The AI Boom".into(),
            start_date: date(2023, 1, 3),
            end_date: date(2024, 6, 28),
            description: "Chipmakers carry the index while everyone argues about bubbles.".into(),
            snark_description: "Every earnings call says 'AI' forty times. Number goes up.".into(),
            color: "green".into(),
            difficulty: Difficulty::Easy,
            risk_free_rate: 0.05,
            events: vec![
                event(2023, 5, 24, "NVDA guides up $4B; stock +24% overnight"),
                event(2024, 6, 18, "NVDA briefly the most valuable company"),
            ],
        },
        Scenario {
            slug: "crypto-winter".into(),
            name: "Crypto Winter".into(),
            start_date: date(2021, 11, 8),
            end_date: date(2022, 12, 30),
            description: "From all-time highs through Luna, Celsius, and FTX.".into(),
            snark_description: "Have fun staying poor, they said.".into(),
            color: "blue".into(),
            difficulty: Difficulty::Brutal,
            risk_free_rate: 0.015,
            events: vec![
                event(2021, 11, 8, "BTC peaks near $69,000"),
                event(2022, 5, 9, "Terra/Luna collapses"),
                event(2022, 11, 11, "FTX files for bankruptcy"),
            ],
        },
        Scenario {
            slug: "lost-decade-japan".into(),
            name: "Sideways Grind".into(),
            start_date: date(2015, 1, 2),
            end_date: date(2016, 12, 30),
            description: "Two years where the index goes nowhere and patience is the position."
                .into(),
            snark_description: "The market can stay boring longer than you can stay interested."
                .into(),
            color: "gray".into(),
            difficulty: Difficulty::Medium,
            risk_free_rate: 0.002,
            events: vec![
                event(2015, 8, 24, "China devaluation: Dow opens -1,000"),
                event(2016, 6, 24, "Brexit vote surprise"),
            ],
        },
    ]
}

/// Find a scenario by slug.
pub fn find_scenario<'a>(catalog: &'a [Scenario], slug: &str) -> Option<&'a Scenario> {
    catalog.iter().find(|s| s.slug == slug)
}

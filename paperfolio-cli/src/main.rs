//! Paperfolio CLI — run simulations and inspect the daily challenge.
//!
//! Commands:
//! - `run` — execute a simulation from a TOML config file
//! - `daily` — show the challenge scenario for a date (default: today, UTC)
//! - `upcoming` — list the next N daily challenges
//! - `catalog` — list every scenario in the catalog

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use paperfolio_core::challenge::{daily_scenario, upcoming_challenges};
use paperfolio_core::domain::Scenario;
use paperfolio_runner::{
    builtin_catalog, load_catalog, load_price_data, run_simulation, write_history_csv, RunConfig,
};

#[derive(Parser)]
#[command(name = "paperfolio", about = "Paperfolio CLI — fake-money portfolio simulator")]
struct Cli {
    /// Path to a scenario catalog JSON file. Defaults to the built-in catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a simulation from a TOML config file.
    Run {
        /// Path to the run config.
        #[arg(long)]
        config: PathBuf,

        /// Directory holding per-scenario price artifacts. Falls back to the
        /// config's `data_dir`, then to "data".
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Write the snapshot history as CSV to this path.
        #[arg(long)]
        export: Option<PathBuf>,

        /// Print the full run summary as JSON instead of the text report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the daily challenge for a date.
    Daily {
        /// Date (YYYY-MM-DD). Defaults to today, UTC.
        #[arg(long)]
        date: Option<String>,
    },
    /// List the next N daily challenges.
    Upcoming {
        /// First date (YYYY-MM-DD). Defaults to today, UTC.
        #[arg(long)]
        from: Option<String>,

        /// Number of days to list.
        #[arg(long, default_value_t = 7)]
        days: usize,
    },
    /// List every scenario in the catalog.
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => builtin_catalog(),
    };

    match cli.command {
        Commands::Run {
            config,
            data_dir,
            export,
            json,
        } => cmd_run(&catalog, &config, data_dir, export.as_deref(), json),
        Commands::Daily { date } => cmd_daily(&catalog, date.as_deref()),
        Commands::Upcoming { from, days } => cmd_upcoming(&catalog, from.as_deref(), days),
        Commands::Catalog => cmd_catalog(&catalog),
    }
}

fn parse_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{text}', expected YYYY-MM-DD")),
        // UTC so every user sees the same challenge regardless of timezone.
        None => Ok(Utc::now().date_naive()),
    }
}

fn cmd_run(
    catalog: &[Scenario],
    config_path: &std::path::Path,
    data_dir: Option<PathBuf>,
    export: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let config = RunConfig::from_toml_path(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let data_dir = data_dir
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("data"));
    let prices = load_price_data(&data_dir, &config.scenario)
        .with_context(|| format!("loading price data for '{}'", config.scenario))?;

    let summary = run_simulation(&config, catalog, &prices)?;

    if let Some(path) = export {
        write_history_csv(path, &summary.history)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("run        {}", &summary.run_id[..16]);
    println!("scenario   {}", summary.scenario_slug);
    println!("ticks      {}", summary.ticks);
    println!("start      ${:.2}", summary.starting_capital);
    println!("final      ${:.2}", summary.final_value);
    println!("return     {:+.2}%", summary.cumulative_return * 100.0);
    println!("drawdown   {:.2}%", summary.metrics.max_drawdown * 100.0);
    println!("volatility {:.2}%", summary.metrics.volatility * 100.0);
    if !summary.milestones.is_empty() {
        println!("milestones {}", summary.milestones.join(", "));
    }

    if let Some(path) = export {
        println!("history    {}", path.display());
    }
    Ok(())
}

fn cmd_daily(catalog: &[Scenario], date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let scenario = daily_scenario(date, catalog)?;
    println!("{date}  {}  ({})", scenario.name, scenario.slug);
    println!("  {}", scenario.description);
    println!("  \"{}\"", scenario.snark_description);
    Ok(())
}

fn cmd_upcoming(catalog: &[Scenario], from: Option<&str>, days: usize) -> Result<()> {
    if days == 0 {
        bail!("--days must be at least 1");
    }
    let from = parse_date(from)?;
    for challenge in upcoming_challenges(from, days, catalog)? {
        println!(
            "{}  {}  ({:?})",
            challenge.date, challenge.scenario.name, challenge.scenario.difficulty
        );
    }
    Ok(())
}

fn cmd_catalog(catalog: &[Scenario]) -> Result<()> {
    for s in catalog {
        println!(
            "{:<20} {} → {}  {:?}  {}",
            s.slug, s.start_date, s.end_date, s.difficulty, s.name
        );
    }
    Ok(())
}

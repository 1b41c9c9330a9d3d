//! Snapshot-history export (CSV).

use anyhow::{Context, Result};
use paperfolio_core::domain::PortfolioSnapshot;
use std::path::Path;

/// Write the run history as CSV: one row per tick, in tick order.
pub fn write_history_csv(path: &Path, history: &[PortfolioSnapshot]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create history CSV {}", path.display()))?;
    writer.write_record(["date", "total_value", "cash_balance", "cumulative_return"])?;
    for snapshot in history {
        writer.write_record([
            snapshot.date.to_string(),
            format!("{:.4}", snapshot.total_value),
            format!("{:.4}", snapshot.cash_balance),
            format!("{:.6}", snapshot.cumulative_return),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush history CSV {}", path.display()))?;
    Ok(())
}

//! Texttest fixture driver: runs the inventory for a number of days and
//! prints its state before each day.

pub mod config;
pub mod fixture;
pub mod report;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use gilded_rose_inventory::InventoryUpdater;

pub use config::{Cli, OutputFormat};

/// Load the inventory and write the report selected by `cli` to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let mut updater = load_inventory(cli.inventory.as_deref())?;

    match cli.format {
        OutputFormat::Text => report::write_text(out, &mut updater, cli.days)?,
        OutputFormat::Json => report::write_json(out, &mut updater, cli.days)?,
    }
    out.flush().context("failed to flush report")?;

    tracing::info!(days = cli.days, items = updater.items().len(), "simulation finished");
    Ok(())
}

/// Read an inventory file, or fall back to the built-in fixture.
pub fn load_inventory(path: Option<&Path>) -> Result<InventoryUpdater> {
    let Some(path) = path else {
        return InventoryUpdater::new(fixture::default_items())
            .context("built-in inventory is invalid");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    let updater = InventoryUpdater::from_json_str(&text)
        .with_context(|| format!("invalid inventory in {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = updater.items().len(), "loaded inventory");
    Ok(updater)
}

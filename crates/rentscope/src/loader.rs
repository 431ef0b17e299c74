//! Dataset loading and saving
//!
//! Listings travel as a JSON array of provider rows. Rows the engine cannot
//! operate on (missing or non-positive price/size) are skipped during
//! snapshot construction and logged here.

use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use rentscope_core::Dataset;
use rentscope_core::model::{Listing, RawListing};

/// Load a dataset snapshot from a JSON file of provider rows.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read dataset file {}", path.display()))?;
    let rows: Vec<RawListing> = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("failed to parse dataset file {}", path.display()))?;

    let dataset = Dataset::from_raw(rows);
    if dataset.count_excluded() > 0 {
        tracing::warn!(
            excluded = dataset.count_excluded(),
            "dropped provider rows with missing or invalid price/size"
        );
    }
    tracing::info!(
        rows = dataset.len(),
        version = dataset.version().0,
        "dataset loaded from {}",
        path.display()
    );
    Ok(dataset)
}

/// Write a dataset snapshot as a JSON file readable by [`load_dataset`].
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let rows: Vec<&Listing> = dataset.iter().collect();
    let contents = serde_json::to_string_pretty(&rows)?;
    fs::write(path, contents)
        .wrap_err_with(|| format!("failed to write dataset file {}", path.display()))?;
    tracing::info!(rows = rows.len(), "dataset written to {}", path.display());
    Ok(())
}

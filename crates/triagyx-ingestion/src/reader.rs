//! CSV boundary reader.
//!
//! The only file input the pipeline has. A missing or unreadable input is
//! substituted with an empty table so the run never aborts on a bad source
//! (ARCHITECTURE.md §1).

use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::table::RawTable;

/// Read a delimited table, falling back to an empty table on any failure.
pub fn read_csv_table(path: &Path) -> RawTable {
    match try_read(path) {
        Ok(table) => {
            debug!(
                path = %path.display(),
                rows = table.n_rows(),
                cols = table.n_cols(),
                "loaded input table"
            );
            table
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "input table unreadable, substituting an empty table"
            );
            RawTable::empty()
        }
    }
}

fn try_read(path: &Path) -> anyhow::Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("failed to read header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read record")?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable::new(headers, rows))
}

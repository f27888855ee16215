//! Artifact writers for the final candidate table.
//!
//! Two representations of the same rows: a delimited table and a
//! record-oriented JSON document. Field values are identical in both;
//! the column order is the fixed projection of the ranker
//! (ARCHITECTURE.md §6).

use std::path::Path;

use tracing::info;
use triagyx_common::{RankedCandidate, Result};

/// Write the delimited export. The header row is always written, so an
/// empty run still produces the full column set.
pub fn write_csv(path: &Path, rows: &[RankedCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(RankedCandidate::COLUMNS)?;
    for row in rows {
        writer.write_record(row.field_strings())?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote candidate CSV");
    Ok(())
}

/// Write the record-oriented export, one object per row.
pub fn write_json(path: &Path, rows: &[RankedCandidate]) -> Result<()> {
    let body = serde_json::to_string(rows)?;
    std::fs::write(path, body)?;
    info!(path = %path.display(), rows = rows.len(), "wrote candidate JSON");
    Ok(())
}

//! Descriptive table diagnostics.
//!
//! Independent of the scoring path: profiles feed the human-readable
//! quality report and nothing else (ARCHITECTURE.md §5). Outliers are
//! counted with the classic 1.5×IQR fence — deliberately not the
//! 1st/99th-percentile definition the winsorizer clamps with, because
//! counting and clamping serve different purposes.

use serde::Serialize;
use triagyx_common::RankedCandidate;
use triagyx_ingestion::table::RawTable;
use triagyx_ingestion::winsorise::percentile;

const IQR_FENCE: f64 = 1.5;

/// Descriptive statistics of one table.
#[derive(Debug, Clone, Serialize)]
pub struct TableProfile {
    pub dataset: String,
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub missing_by_column: Vec<(String, usize)>,
    pub total_missing: usize,
    pub duplicate_rows: usize,
    pub outliers_iqr: Vec<(String, usize)>,
}

/// Count values outside the `[Q1 − 1.5·IQR, Q3 + 1.5·IQR]` fence.
/// A zero-IQR column reports zero outliers.
pub fn iqr_outlier_count(values: &[Option<f64>]) -> usize {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let (Some(q1), Some(q3)) = (percentile(&present, 0.25), percentile(&present, 0.75)) else {
        return 0;
    };
    let iqr = q3 - q1;
    if iqr == 0.0 {
        return 0;
    }
    let lo = q1 - IQR_FENCE * iqr;
    let hi = q3 + IQR_FENCE * iqr;
    present.iter().filter(|v| **v < lo || **v > hi).count()
}

/// Profile one raw table.
pub fn profile_table(dataset: &str, table: &RawTable) -> TableProfile {
    let column_names: Vec<String> = table.headers().to_vec();

    let missing_by_column: Vec<(String, usize)> = column_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), table.missing_in_column(i)))
        .collect();
    let total_missing = missing_by_column.iter().map(|(_, n)| n).sum();

    let outliers_iqr: Vec<(String, usize)> = column_names
        .iter()
        .filter(|name| table.is_numeric_column(name.as_str()))
        .map(|name| (name.clone(), iqr_outlier_count(&table.numeric_column(name))))
        .collect();

    TableProfile {
        dataset: dataset.to_string(),
        rows: table.n_rows(),
        columns: table.n_cols(),
        column_names,
        missing_by_column,
        total_missing,
        duplicate_rows: table.count_duplicate_rows(),
        outliers_iqr,
    }
}

/// View the final candidate table as a raw table so the same profiling
/// runs before and after the pipeline.
pub fn final_as_table(rows: &[RankedCandidate]) -> RawTable {
    let headers: Vec<String> = RankedCandidate::COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.field_strings()).collect();
    RawTable::new(headers, cells)
}

/// Profile the final candidate table.
pub fn profile_final(dataset: &str, rows: &[RankedCandidate]) -> TableProfile {
    profile_table(dataset, &final_as_table(rows))
}

//! Data-quality report assembly.
//!
//! Combines the pre-harmonization profiles with the final table's state
//! into one human-readable document (ARCHITECTURE.md §6). For a correct
//! run every critical null count is zero.

use std::path::Path;

use tracing::info;
use triagyx_common::{RankedCandidate, Result};

use crate::profile::{final_as_table, TableProfile};

/// Fields that must never be missing in the final table.
pub const CRITICAL_COLUMNS: [&str; 6] = [
    "candidate_id",
    "source_dataset",
    "drug_score",
    "safety_index",
    "efficacy_index",
    "priority_rank",
];

/// Cleaning steps the pipeline applies, in order. Fixed text.
const CLEANING_STEPS: [&str; 5] = [
    "Standardized all column labels to snake_case.",
    "Removed exact-duplicate rows per source table.",
    "Winsorized numeric outliers at the 1st/99th percentile.",
    "Estimated missing lipophilicity (xlogp) from structure or properties.",
    "Imputed critical numeric fields with whole-population medians.",
];

const ENGINEERED_FEATURES: [&str; 5] = [
    "efficacy_index",
    "safety_index",
    "molecular_complexity",
    "drug_score",
    "priority_rank",
];

const SUITABILITY: &str = "Suitable for real-time scoring, filtering and display: \
compact schema, normalized engineered metrics, no critical nulls, deterministic ranking.";

/// Per-critical-column count of missing values in the final table.
pub fn critical_null_counts(rows: &[RankedCandidate]) -> Vec<(&'static str, usize)> {
    let mut counts = Vec::with_capacity(CRITICAL_COLUMNS.len());
    let missing_text = |s: &str| s.trim().is_empty();
    for column in CRITICAL_COLUMNS {
        let n = rows
            .iter()
            .filter(|r| match column {
                "candidate_id" => missing_text(&r.candidate_id),
                "source_dataset" => missing_text(&r.source_dataset),
                "drug_score" => !r.drug_score.is_finite(),
                "safety_index" => !r.safety_index.is_finite(),
                "efficacy_index" => !r.efficacy_index.is_finite(),
                "priority_rank" => r.priority_rank == 0,
                _ => false,
            })
            .count();
        counts.push((column, n));
    }
    counts
}

/// Assemble the quality report text.
pub fn build_quality_report(
    source_profiles: &[TableProfile],
    final_rows: &[RankedCandidate],
) -> String {
    let final_table = final_as_table(final_rows);
    let numeric_columns: Vec<&str> = RankedCandidate::COLUMNS
        .iter()
        .copied()
        .filter(|c| final_table.is_numeric_column(c))
        .collect();
    let nulls = critical_null_counts(final_rows);

    let mut lines: Vec<String> = Vec::new();
    lines.push("Data Quality Report — Unified Drug Candidate Table".to_string());
    lines.push("=".repeat(70));
    lines.push(String::new());

    lines.push("Step 1: Source diagnostics".to_string());
    for p in source_profiles {
        lines.push(format!(
            "- {}: rows={}, cols={}, total_missing={}, duplicates={}",
            p.dataset, p.rows, p.columns, p.total_missing, p.duplicate_rows
        ));
    }

    lines.push(String::new());
    lines.push("Step 2: Cleaning summary".to_string());
    for step in CLEANING_STEPS {
        lines.push(format!("- {step}"));
    }

    lines.push(String::new());
    lines.push("Step 3: Engineered features".to_string());
    lines.push(format!("- {}", ENGINEERED_FEATURES.join(", ")));

    lines.push(String::new());
    lines.push("Step 4: Final table status".to_string());
    lines.push(format!("- Final rows: {}", final_rows.len()));
    lines.push(format!("- Final columns: {}", RankedCandidate::COLUMNS.len()));
    let null_summary: Vec<String> = nulls.iter().map(|(c, n)| format!("{c}={n}")).collect();
    lines.push(format!("- Critical null counts: {}", null_summary.join(", ")));
    lines.push(format!("- Numeric columns: {}", numeric_columns.join(", ")));
    lines.push(format!(
        "- Duplicate rows in final table: {}",
        final_table.count_duplicate_rows()
    ));

    lines.push(String::new());
    lines.push("Suitability assessment".to_string());
    lines.push(format!("- {SUITABILITY}"));

    lines.join("\n")
}

/// Write the quality report artifact.
pub fn write_quality_report(
    path: &Path,
    source_profiles: &[TableProfile],
    final_rows: &[RankedCandidate],
) -> Result<()> {
    std::fs::write(path, build_quality_report(source_profiles, final_rows))?;
    info!(path = %path.display(), "wrote data quality report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_table;
    use triagyx_ingestion::table::RawTable;

    fn ranked_row(rank: u32) -> RankedCandidate {
        RankedCandidate {
            candidate_id: format!("delaney_{rank}"),
            source_dataset: "delaney_solubility".to_string(),
            name: "unknown".to_string(),
            smiles: "unknown".to_string(),
            molecular_weight: 100.0,
            polar_area: 40.0,
            xlogp: 1.0,
            h_bond_donor_count: 1.0,
            h_bond_acceptor_count: 2.0,
            rotatable_bond_count: 3.0,
            binding_score: 0.4,
            toxicity: 0.3,
            stability: 0.6,
            solubility: 0.5,
            efficacy_index: 0.5,
            safety_index: 0.7,
            molecular_complexity: 0.4,
            drug_score: 0.55,
            priority_rank: rank,
        }
    }

    #[test]
    fn test_critical_nulls_are_zero_for_complete_rows() {
        let rows = vec![ranked_row(1), ranked_row(2)];
        let nulls = critical_null_counts(&rows);
        assert_eq!(nulls.len(), 6);
        assert!(nulls.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_critical_nulls_detect_gaps() {
        let mut bad = ranked_row(1);
        bad.candidate_id = String::new();
        bad.drug_score = f64::NAN;
        let nulls = critical_null_counts(&[bad]);
        let get = |name: &str| nulls.iter().find(|(c, _)| *c == name).unwrap().1;
        assert_eq!(get("candidate_id"), 1);
        assert_eq!(get("drug_score"), 1);
        assert_eq!(get("safety_index"), 0);
    }

    #[test]
    fn test_report_structure() {
        let raw = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "".into()]],
        );
        let profiles = vec![profile_table("pubchem", &raw)];
        let rows = vec![ranked_row(1)];

        let report = build_quality_report(&profiles, &rows);
        assert!(report.contains("Step 1: Source diagnostics"));
        assert!(report.contains("- pubchem: rows=1, cols=2, total_missing=1, duplicates=0"));
        assert!(report.contains("Step 2: Cleaning summary"));
        assert!(report.contains("snake_case"));
        assert!(report.contains("Step 3: Engineered features"));
        assert!(report.contains("- Final rows: 1"));
        assert!(report.contains("- Final columns: 19"));
        assert!(report.contains("drug_score=0"));
        assert!(report.contains("Suitability assessment"));
    }

    #[test]
    fn test_report_on_empty_run() {
        let report = build_quality_report(&[], &[]);
        assert!(report.contains("- Final rows: 0"));
        assert!(report.contains("candidate_id=0"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_quality_report.txt");
        write_quality_report(&path, &[], &[ranked_row(1)]).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("Data Quality Report"));
    }
}

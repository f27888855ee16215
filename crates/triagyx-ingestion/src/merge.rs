//! Table merger.
//!
//! Concatenates the adapted tables into one combined candidate table
//! (ARCHITECTURE.md §3.1). The shared [`Candidate`] schema guarantees a
//! single naming convention, so the merge itself is pure concatenation in
//! adapter order; that order is what breaks ranking ties later.

use std::collections::HashSet;

use tracing::warn;
use triagyx_common::Candidate;

/// Concatenate adapted tables, preserving their order.
pub fn merge_candidates(tables: Vec<Vec<Candidate>>) -> Vec<Candidate> {
    let merged: Vec<Candidate> = tables.into_iter().flatten().collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(merged.len());
    for c in &merged {
        if !seen.insert(c.candidate_id.as_str()) {
            warn!(candidate_id = %c.candidate_id, "duplicate candidate_id after merge");
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use triagyx_common::SourceDataset;

    #[test]
    fn test_merge_preserves_adapter_order() {
        let a = vec![
            Candidate::new("pubchem_1".into(), SourceDataset::PubchemAntibiotic),
            Candidate::new("pubchem_2".into(), SourceDataset::PubchemAntibiotic),
        ];
        let b = vec![Candidate::new("delaney_0".into(), SourceDataset::DelaneySolubility)];
        let c = vec![Candidate::new("QM_001".into(), SourceDataset::QuantumCandidates)];

        let merged = merge_candidates(vec![a, b, c]);
        let ids: Vec<&str> = merged.iter().map(|c| c.candidate_id.as_str()).collect();
        assert_eq!(ids, ["pubchem_1", "pubchem_2", "delaney_0", "QM_001"]);
    }

    #[test]
    fn test_merge_of_empty_tables() {
        let merged = merge_candidates(vec![vec![], vec![], vec![]]);
        assert!(merged.is_empty());
    }
}

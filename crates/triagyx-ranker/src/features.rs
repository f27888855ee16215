//! Engineered candidate indices.
//! Implements the composite index formulas of ARCHITECTURE.md §4.3.

use triagyx_common::Candidate;

use crate::normalise::{clip01, minmax};
use crate::weights::FeatureWeights;

// Inner term weights of each composite index.
const EFFICACY_BINDING: f64 = 0.6;
const EFFICACY_STABILITY: f64 = 0.2;
const EFFICACY_SOLUBILITY: f64 = 0.2;
const SAFETY_TOXICITY: f64 = 0.7;
const SAFETY_COMPLIANCE: f64 = 0.3;
const COMPLEXITY_RAW: f64 = 0.5;
const COMPLEXITY_HEAVY_ATOMS: f64 = 0.3;
const COMPLEXITY_ROTATABLE: f64 = 0.2;

fn column<F>(candidates: &[Candidate], get: F) -> Vec<Option<f64>>
where
    F: Fn(&Candidate) -> Option<f64>,
{
    candidates.iter().map(get).collect()
}

/// Derive `efficacy_index`, `safety_index`, `molecular_complexity` and
/// `drug_score` for every candidate, each clipped to `[0, 1]`.
///
/// `compliance` is the per-row rule-compliance ratio, already in `[0, 1]`.
pub fn engineer(candidates: &mut [Candidate], compliance: &[f64], weights: &FeatureWeights) {
    debug_assert_eq!(candidates.len(), compliance.len());

    let binding = minmax(&column(candidates, |c| c.binding_score));
    let stability = minmax(&column(candidates, |c| c.stability));
    let solubility = minmax(&column(candidates, |c| c.solubility));
    let toxicity = minmax(&column(candidates, |c| c.toxicity));
    let complexity = minmax(&column(candidates, |c| c.complexity));
    let heavy_atoms = minmax(&column(candidates, |c| c.heavy_atom_count));
    let rotatable = minmax(&column(candidates, |c| c.rotatable_bond_count));

    for (i, c) in candidates.iter_mut().enumerate() {
        let efficacy = clip01(
            EFFICACY_BINDING * binding[i]
                + EFFICACY_STABILITY * stability[i]
                + EFFICACY_SOLUBILITY * solubility[i],
        );
        let safety = clip01(
            SAFETY_TOXICITY * (1.0 - toxicity[i]) + SAFETY_COMPLIANCE * compliance[i],
        );
        let molecular_complexity = clip01(
            COMPLEXITY_RAW * complexity[i]
                + COMPLEXITY_HEAVY_ATOMS * heavy_atoms[i]
                + COMPLEXITY_ROTATABLE * rotatable[i],
        );
        // peaks at mid-range complexity, penalizes both extremes
        let balance = clip01(1.0 - (molecular_complexity - 0.5).abs() * 2.0);
        let drug_score = clip01(
            weights.efficacy * efficacy
                + weights.safety * safety
                + weights.complexity_balance * balance,
        );

        c.efficacy_index = Some(efficacy);
        c.safety_index = Some(safety);
        c.molecular_complexity = Some(molecular_complexity);
        c.drug_score = Some(drug_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triagyx_common::SourceDataset;

    fn candidates(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate::new(format!("c{i}"), SourceDataset::QuantumCandidates))
            .collect()
    }

    #[test]
    fn test_indices_bounded_for_arbitrary_inputs() {
        let mut rows = candidates(4);
        rows[0].binding_score = Some(-1000.0);
        rows[0].toxicity = Some(5000.0);
        rows[1].binding_score = Some(1000.0);
        rows[1].stability = Some(3.5);
        rows[2].complexity = Some(1e9);
        rows[3].heavy_atom_count = Some(-7.0);
        let compliance = vec![0.0, 1.0, 0.5, 0.5];

        engineer(&mut rows, &compliance, &FeatureWeights::default());

        for c in &rows {
            for v in [
                c.efficacy_index.unwrap(),
                c.safety_index.unwrap(),
                c.molecular_complexity.unwrap(),
                c.drug_score.unwrap(),
            ] {
                assert!((0.0..=1.0).contains(&v), "index out of bounds: {v}");
            }
        }
    }

    #[test]
    fn test_binding_extreme_contributes_full_term() {
        let mut rows = candidates(2);
        rows[0].binding_score = Some(1.0);
        rows[1].binding_score = Some(0.0);
        // stability and solubility are degenerate columns: normalise to 0
        let compliance = vec![1.0, 1.0];

        engineer(&mut rows, &compliance, &FeatureWeights::default());
        assert!((rows[0].efficacy_index.unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(rows[1].efficacy_index, Some(0.0));
    }

    #[test]
    fn test_safety_saturates_at_one() {
        let mut rows = candidates(2);
        rows[0].toxicity = Some(0.0);
        rows[1].toxicity = Some(1.0);
        let compliance = vec![1.0, 1.0];

        engineer(&mut rows, &compliance, &FeatureWeights::default());
        // 0.7·(1 − 0) + 0.3·1 = 1.0 exactly
        assert_eq!(rows[0].safety_index, Some(1.0));
        assert!((rows[1].safety_index.unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_complexity_balance_peaks_at_midrange() {
        // three-point complexity column: 0, mid, max
        let mut rows = candidates(3);
        rows[0].complexity = Some(0.0);
        rows[1].complexity = Some(0.5);
        rows[2].complexity = Some(1.0);
        let compliance = vec![0.0, 0.0, 0.0];

        engineer(&mut rows, &compliance, &FeatureWeights::default());
        // molecular_complexity = 0.5·norm → 0.0, 0.25, 0.5
        // balance = 0.0 → 0.0, 0.25 → 0.5, 0.5 → 1.0
        let score = |i: usize, rows: &[Candidate]| rows[i].drug_score.unwrap();
        assert!(score(2, &rows) > score(1, &rows));
        assert!(score(1, &rows) > score(0, &rows));
    }

    #[test]
    fn test_missing_heavy_atoms_contribute_zero() {
        let mut rows = candidates(2);
        rows[0].complexity = Some(10.0);
        rows[1].complexity = Some(20.0);
        rows[0].heavy_atom_count = Some(5.0);
        rows[1].heavy_atom_count = None;
        let compliance = vec![0.5, 0.5];

        engineer(&mut rows, &compliance, &FeatureWeights::default());
        // heavy-atom column is degenerate (single value) → zeros for both;
        // row 1's missing entry must not poison the index
        assert!(rows[1].molecular_complexity.unwrap().is_finite());
    }

    #[test]
    fn test_empty_table() {
        let mut rows: Vec<Candidate> = vec![];
        engineer(&mut rows, &[], &FeatureWeights::default());
        assert!(rows.is_empty());
    }
}

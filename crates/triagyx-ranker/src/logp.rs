//! Lipophilicity (xlogp) estimation strategies.
//!
//! Rows that arrive without a usable xlogp get one estimated. Which
//! estimator runs is decided once, when the pipeline is built, so a run is
//! deterministic and the strategy is injectable in tests
//! (ARCHITECTURE.md §3.2).

use tracing::debug;
use triagyx_common::Candidate;

use crate::smiles::crippen_logp;

/// Strategy interface for estimating a candidate's xlogp.
///
/// Implementations return `None` to leave the value missing; they never
/// fail the batch.
pub trait XlogpEstimator: Send + Sync {
    fn estimate(&self, candidate: &Candidate) -> Option<f64>;
    fn name(&self) -> &'static str;
}

/// Structure-based estimator: additive atomic contributions over the
/// candidate's SMILES. Scan failure → `None`.
pub struct SmilesXlogp;

impl XlogpEstimator for SmilesXlogp {
    fn estimate(&self, candidate: &Candidate) -> Option<f64> {
        crippen_logp(&candidate.smiles)
    }

    fn name(&self) -> &'static str {
        "smiles"
    }
}

const HEURISTIC_MIN: f64 = -2.0;
const HEURISTIC_MAX: f64 = 6.0;

/// Property-based fallback, always available: baseline near 2.0, rising
/// with molecular weight, falling with polar surface area. A missing
/// input counts as 0.0; the estimate is clamped to `[-2.0, 6.0]`.
pub struct HeuristicXlogp;

impl XlogpEstimator for HeuristicXlogp {
    fn estimate(&self, candidate: &Candidate) -> Option<f64> {
        let mw = candidate.molecular_weight.unwrap_or(0.0);
        let pa = candidate.polar_area.unwrap_or(0.0);
        let estimate = 2.0 + (mw - 350.0) / 250.0 - (pa - 50.0) / 200.0;
        Some(estimate.clamp(HEURISTIC_MIN, HEURISTIC_MAX))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// True when the SMILES field actually carries a structure.
pub fn has_structure(smiles: &str) -> bool {
    let s = smiles.trim();
    !s.is_empty() && !s.eq_ignore_ascii_case("unknown") && !s.eq_ignore_ascii_case("nan")
}

/// True when this row's xlogp should be overwritten: the field is missing
/// or exactly zero, and a structural identifier is present.
pub fn needs_estimate(candidate: &Candidate) -> bool {
    let missing_or_zero = match candidate.xlogp {
        None => true,
        Some(x) => x == 0.0,
    };
    missing_or_zero && has_structure(&candidate.smiles)
}

/// Fill xlogp for every row matching the trigger condition; all other
/// rows pass through untouched. Returns the number of rows filled.
pub fn estimate_missing(candidates: &mut [Candidate], estimator: &dyn XlogpEstimator) -> usize {
    let mut filled = 0;
    for c in candidates.iter_mut() {
        if !needs_estimate(c) {
            continue;
        }
        if let Some(value) = estimator.estimate(c) {
            c.xlogp = Some(value);
            filled += 1;
        }
    }
    debug!(
        estimator = estimator.name(),
        filled, "estimated missing xlogp values"
    );
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use triagyx_common::SourceDataset;

    fn candidate(xlogp: Option<f64>, smiles: &str) -> Candidate {
        let mut c = Candidate::new("pubchem_1".into(), SourceDataset::PubchemAntibiotic);
        c.xlogp = xlogp;
        c.smiles = smiles.to_string();
        c
    }

    #[test]
    fn test_trigger_condition_matrix() {
        assert!(needs_estimate(&candidate(None, "CCO")));
        assert!(needs_estimate(&candidate(Some(0.0), "CCO")));
        assert!(!needs_estimate(&candidate(Some(1.2), "CCO")));
        assert!(!needs_estimate(&candidate(None, "unknown")));
        assert!(!needs_estimate(&candidate(None, "UNKNOWN")));
        assert!(!needs_estimate(&candidate(None, "nan")));
        assert!(!needs_estimate(&candidate(None, "  ")));
    }

    #[test]
    fn test_heuristic_formula() {
        let mut c = candidate(None, "CCO");
        c.molecular_weight = Some(350.0);
        c.polar_area = Some(50.0);
        assert_eq!(HeuristicXlogp.estimate(&c), Some(2.0));
    }

    #[test]
    fn test_heuristic_missing_inputs_count_as_zero() {
        let c = candidate(None, "CCO");
        // mw = 0, pa = 0: 2.0 - 350/250 + 50/200 = 0.85
        let v = HeuristicXlogp.estimate(&c).unwrap();
        assert!((v - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_heuristic_clamped() {
        let mut heavy = candidate(None, "CCO");
        heavy.molecular_weight = Some(10_000.0);
        assert_eq!(HeuristicXlogp.estimate(&heavy), Some(6.0));

        let mut polar = candidate(None, "CCO");
        polar.polar_area = Some(10_000.0);
        assert_eq!(HeuristicXlogp.estimate(&polar), Some(-2.0));
    }

    #[test]
    fn test_smiles_estimator_leaves_unparseable_missing() {
        let mut rows = vec![candidate(None, "c1ccccc1"), candidate(None, "@@bad@@")];
        // the bad row still matches the trigger but the scan fails
        rows[1].smiles = "Zz99".to_string();
        let filled = estimate_missing(&mut rows, &SmilesXlogp);
        assert_eq!(filled, 1);
        assert!(rows[0].xlogp.is_some());
        assert!(rows[1].xlogp.is_none());
    }

    #[test]
    fn test_only_trigger_rows_overwritten() {
        let mut rows = vec![
            candidate(Some(3.3), "c1ccccc1"),
            candidate(None, "unknown"),
            candidate(None, "CCO"),
        ];
        estimate_missing(&mut rows, &HeuristicXlogp);
        assert_eq!(rows[0].xlogp, Some(3.3));
        assert_eq!(rows[1].xlogp, None);
        assert!(rows[2].xlogp.is_some());
    }
}

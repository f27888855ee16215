//! Final ranking and projection.
//! See ARCHITECTURE.md §4.4.

use triagyx_common::{Candidate, RankedCandidate};

/// Decimal places kept in every exported float field.
const ROUND_DECIMALS: f64 = 1e6;

fn round6(x: f64) -> f64 {
    if x.is_finite() {
        (x * ROUND_DECIMALS).round() / ROUND_DECIMALS
    } else {
        0.0
    }
}

fn text_or_unknown(s: String) -> String {
    if s.trim().is_empty() {
        "unknown".to_string()
    } else {
        s
    }
}

/// Sort by `drug_score` descending and assign a dense 1-based rank.
///
/// The sort is stable with no secondary key: candidates with equal scores
/// keep their merge order. Missing fields are synthesized (`"unknown"` /
/// `0.0`) so every exported row is complete.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<RankedCandidate> {
    let score = |c: &Candidate| c.drug_score.unwrap_or(0.0);
    candidates.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
        .into_iter()
        .enumerate()
        .map(|(i, c)| RankedCandidate {
            candidate_id: text_or_unknown(c.candidate_id),
            source_dataset: c.source_dataset.as_str().to_string(),
            name: text_or_unknown(c.name),
            smiles: text_or_unknown(c.smiles),
            molecular_weight: round6(c.molecular_weight.unwrap_or(0.0)),
            polar_area: round6(c.polar_area.unwrap_or(0.0)),
            xlogp: round6(c.xlogp.unwrap_or(0.0)),
            h_bond_donor_count: round6(c.h_bond_donor_count.unwrap_or(0.0)),
            h_bond_acceptor_count: round6(c.h_bond_acceptor_count.unwrap_or(0.0)),
            rotatable_bond_count: round6(c.rotatable_bond_count.unwrap_or(0.0)),
            binding_score: round6(c.binding_score.unwrap_or(0.0)),
            toxicity: round6(c.toxicity.unwrap_or(0.0)),
            stability: round6(c.stability.unwrap_or(0.0)),
            solubility: round6(c.solubility.unwrap_or(0.0)),
            efficacy_index: round6(c.efficacy_index.unwrap_or(0.0)),
            safety_index: round6(c.safety_index.unwrap_or(0.0)),
            molecular_complexity: round6(c.molecular_complexity.unwrap_or(0.0)),
            drug_score: round6(c.drug_score.unwrap_or(0.0)),
            priority_rank: (i + 1) as u32,
        })
        .collect()
}

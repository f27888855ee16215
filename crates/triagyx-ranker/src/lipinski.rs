//! Drug-likeness rule compliance.
//! See ARCHITECTURE.md §4.1 — Lipinski-style compliance ratio.

use triagyx_common::Candidate;

/// One structural drug-likeness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// molecular_weight ≤ 500
    MolecularWeight,
    /// xlogp in [-0.5, 5.0]
    Xlogp,
    /// h_bond_donor_count ≤ 5
    HBondDonors,
    /// h_bond_acceptor_count ≤ 10
    HBondAcceptors,
    /// rotatable_bond_count ≤ 10
    RotatableBonds,
    /// polar_area ≤ 140
    PolarArea,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::MolecularWeight,
        Rule::Xlogp,
        Rule::HBondDonors,
        Rule::HBondAcceptors,
        Rule::RotatableBonds,
        Rule::PolarArea,
    ];

    /// Row-wise evaluation. A missing descriptor fails its rule.
    pub fn passes(&self, c: &Candidate) -> bool {
        match self {
            Rule::MolecularWeight => c.molecular_weight.is_some_and(|v| v <= 500.0),
            Rule::Xlogp => c.xlogp.is_some_and(|v| (-0.5..=5.0).contains(&v)),
            Rule::HBondDonors => c.h_bond_donor_count.is_some_and(|v| v <= 5.0),
            Rule::HBondAcceptors => c.h_bond_acceptor_count.is_some_and(|v| v <= 10.0),
            Rule::RotatableBonds => c.rotatable_bond_count.is_some_and(|v| v <= 10.0),
            Rule::PolarArea => c.polar_area.is_some_and(|v| v <= 140.0),
        }
    }
}

/// Fallback ratio when no rule can be evaluated for the table.
const NO_RULES_RATIO: f64 = 0.5;

/// Fraction of the enabled rules a candidate passes.
pub fn compliance_ratio(c: &Candidate, rules: &[Rule]) -> f64 {
    if rules.is_empty() {
        return NO_RULES_RATIO;
    }
    let passed = rules.iter().filter(|r| r.passes(c)).count();
    passed as f64 / rules.len() as f64
}

/// Compliance ratio for every row.
pub fn compliance_column(candidates: &[Candidate], rules: &[Rule]) -> Vec<f64> {
    candidates
        .iter()
        .map(|c| compliance_ratio(c, rules))
        .collect()
}

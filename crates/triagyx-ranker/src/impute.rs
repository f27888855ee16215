//! Median imputation of critical numeric descriptors.
//!
//! Runs once, after the merge, so every median reflects the full combined
//! population rather than a single source (ARCHITECTURE.md §3.4). The
//! Delaney measured-solubility rescale happens first (§3.3): a measured
//! value, when present, is a better solubility signal than a borrowed
//! median.

use tracing::debug;
use triagyx_common::{Candidate, SourceDataset};

use crate::normalise::minmax;

type FieldAccessor = fn(&mut Candidate) -> &mut Option<f64>;

/// The descriptors guaranteed present (and finite) after imputation.
pub fn critical_fields() -> [(&'static str, FieldAccessor); 10] {
    [
        ("molecular_weight", |c| &mut c.molecular_weight),
        ("polar_area", |c| &mut c.polar_area),
        ("h_bond_donor_count", |c| &mut c.h_bond_donor_count),
        ("h_bond_acceptor_count", |c| &mut c.h_bond_acceptor_count),
        ("rotatable_bond_count", |c| &mut c.rotatable_bond_count),
        ("binding_score", |c| &mut c.binding_score),
        ("toxicity", |c| &mut c.toxicity),
        ("stability", |c| &mut c.stability),
        ("solubility", |c| &mut c.solubility),
        ("complexity", |c| &mut c.complexity),
    ]
}

/// Median of a column's present values; even counts average the two
/// middle values. `None` when nothing is present.
pub fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = present.len() / 2;
    if present.len() % 2 == 0 {
        Some((present[mid - 1] + present[mid]) / 2.0)
    } else {
        Some(present[mid])
    }
}

/// Override `solubility` for Delaney rows with the min-max rescale of
/// their measured log-solubility. Rows without a measured value keep
/// whatever `solubility` they have and fall through to imputation.
pub fn rescale_measured_solubility(candidates: &mut [Candidate]) {
    let column: Vec<Option<f64>> = candidates
        .iter()
        .map(|c| c.measured_log_solubility)
        .collect();
    let scaled = minmax(&column);

    let mut overridden = 0;
    for (c, s) in candidates.iter_mut().zip(scaled) {
        if c.source_dataset == SourceDataset::DelaneySolubility
            && c.measured_log_solubility.is_some()
        {
            c.solubility = Some(s);
            overridden += 1;
        }
    }
    debug!(overridden, "rescaled measured solubility for benchmark rows");
}

/// Fill every missing critical descriptor with its column median
/// (0.0 when the whole column is missing).
pub fn impute_critical(candidates: &mut [Candidate]) {
    for (name, field) in critical_fields() {
        let column: Vec<Option<f64>> = candidates.iter_mut().map(|c| *field(c)).collect();
        let fill = median(&column).unwrap_or(0.0);
        let mut filled = 0;
        for c in candidates.iter_mut() {
            let slot = field(c);
            if slot.is_none() {
                *slot = Some(fill);
                filled += 1;
            }
        }
        if filled > 0 {
            debug!(field = name, median = fill, filled, "imputed missing values");
        }
    }
}

//! Simulated candidate-scoring table adapter.
//!
//! This source carries no structural data at all, only four simulated
//! scores already meant to live on a `[0, 1]` scale. Out-of-range values
//! are coerced to the nearest bound instead of winsorized.

use tracing::debug;
use triagyx_common::{Candidate, SourceDataset};

use crate::table::RawTable;

/// One parsed row of the simulated scoring table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantumRow {
    pub molecule_id: Option<String>,
    pub binding_score: Option<f64>,
    pub toxicity: Option<f64>,
    pub stability: Option<f64>,
    pub solubility: Option<f64>,
}

impl QuantumRow {
    fn from_table(table: &RawTable, row: usize) -> Self {
        Self {
            molecule_id: table.text(row, "molecule_id"),
            binding_score: table.number(row, "binding_score"),
            toxicity: table.number(row, "toxicity"),
            stability: table.number(row, "stability"),
            solubility: table.number(row, "solubility"),
        }
    }
}

fn clamp_unit(v: Option<f64>) -> Option<f64> {
    v.map(|x| x.clamp(0.0, 1.0))
}

/// Adapt the simulated scoring table into candidates.
pub fn adapt(mut table: RawTable) -> Vec<Candidate> {
    table.canonicalise_headers();
    let removed = table.dedup_exact();
    if removed > 0 {
        debug!(removed, "quantum: dropped exact-duplicate rows");
    }

    (0..table.n_rows())
        .map(|i| {
            let row = QuantumRow::from_table(&table, i);
            let local_id = row.molecule_id.clone().unwrap_or_else(|| i.to_string());
            let mut c = Candidate::new(local_id, SourceDataset::QuantumCandidates);
            if let Some(id) = row.molecule_id {
                c.name = id;
            }
            // no structural identifier exists for simulated molecules
            c.smiles = "unknown".to_string();
            c.binding_score = clamp_unit(row.binding_score);
            c.toxicity = clamp_unit(row.toxicity);
            c.stability = clamp_unit(row.stability);
            c.solubility = clamp_unit(row.solubility);
            c
        })
        .collect()
}

//! Delaney (ESOL) solubility benchmark adapter.

use tracing::debug;
use triagyx_common::{Candidate, SourceDataset};

use crate::table::RawTable;
use crate::winsorise::winsorise_field;

/// Verbose benchmark labels renamed to canonical descriptor names.
const RENAMES: [(&str, &str); 5] = [
    ("compound_id", "name"),
    ("number_of_h_bond_donors", "h_bond_donor_count"),
    ("number_of_rotatable_bonds", "rotatable_bond_count"),
    ("polar_surface_area", "polar_area"),
    (
        "measured_log_solubility_in_mols_per_litre",
        "measured_log_solubility",
    ),
];

/// One parsed row of the solubility benchmark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelaneyRow {
    pub name: Option<String>,
    pub smiles: Option<String>,
    pub molecular_weight: Option<f64>,
    pub h_bond_donor_count: Option<f64>,
    pub rotatable_bond_count: Option<f64>,
    pub polar_area: Option<f64>,
    pub measured_log_solubility: Option<f64>,
}

impl DelaneyRow {
    fn from_table(table: &RawTable, row: usize) -> Self {
        Self {
            name: table.text(row, "name"),
            smiles: table.text(row, "smiles"),
            molecular_weight: table.number(row, "molecular_weight"),
            h_bond_donor_count: table.number(row, "h_bond_donor_count"),
            rotatable_bond_count: table.number(row, "rotatable_bond_count"),
            polar_area: table.number(row, "polar_area"),
            measured_log_solubility: table.number(row, "measured_log_solubility"),
        }
    }
}

/// Adapt the solubility benchmark into candidates.
///
/// The benchmark carries no stable compound identifier, so
/// `candidate_id` is the 0-based row index after duplicate removal.
pub fn adapt(mut table: RawTable) -> Vec<Candidate> {
    table.canonicalise_headers();
    let removed = table.dedup_exact();
    if removed > 0 {
        debug!(removed, "delaney: dropped exact-duplicate rows");
    }
    for (from, to) in RENAMES {
        table.rename_column(from, to);
    }

    let mut rows: Vec<DelaneyRow> = (0..table.n_rows())
        .map(|i| DelaneyRow::from_table(&table, i))
        .collect();

    winsorise_field(&mut rows, |r| &mut r.molecular_weight);
    winsorise_field(&mut rows, |r| &mut r.h_bond_donor_count);
    winsorise_field(&mut rows, |r| &mut r.rotatable_bond_count);
    winsorise_field(&mut rows, |r| &mut r.polar_area);
    winsorise_field(&mut rows, |r| &mut r.measured_log_solubility);

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut c = Candidate::new(format!("delaney_{i}"), SourceDataset::DelaneySolubility);
            if let Some(name) = row.name {
                c.name = name;
            }
            if let Some(smiles) = row.smiles {
                c.smiles = smiles;
            }
            c.molecular_weight = row.molecular_weight;
            c.h_bond_donor_count = row.h_bond_donor_count;
            c.rotatable_bond_count = row.rotatable_bond_count;
            c.polar_area = row.polar_area;
            c.measured_log_solubility = row.measured_log_solubility;
            c
        })
        .collect()
}

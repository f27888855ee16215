//! PubChem compound-property export adapter.

use chrono::NaiveDate;
use tracing::debug;
use triagyx_common::{Candidate, SourceDataset};

use crate::table::RawTable;
use crate::winsorise::winsorise_field;

/// One parsed row of the PubChem antibiotic export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PubchemRow {
    pub compound_cid: Option<String>,
    pub name: Option<String>,
    pub smiles: Option<String>,
    pub create_date: Option<String>,
    pub molecular_weight: Option<f64>,
    pub polar_area: Option<f64>,
    pub complexity: Option<f64>,
    pub xlogp: Option<f64>,
    pub heavy_atom_count: Option<f64>,
    pub h_bond_donor_count: Option<f64>,
    pub h_bond_acceptor_count: Option<f64>,
    pub rotatable_bond_count: Option<f64>,
}

impl PubchemRow {
    fn from_table(table: &RawTable, row: usize) -> Self {
        Self {
            compound_cid: table.text(row, "compound_cid"),
            name: table.text(row, "name"),
            smiles: table.text(row, "smiles"),
            create_date: table.text(row, "create_date"),
            molecular_weight: table.number(row, "molecular_weight"),
            polar_area: table.number(row, "polar_area"),
            complexity: table.number(row, "complexity"),
            xlogp: table.number(row, "xlogp"),
            heavy_atom_count: table.number(row, "heavy_atom_count"),
            h_bond_donor_count: table.number(row, "h_bond_donor_count"),
            h_bond_acceptor_count: table.number(row, "h_bond_acceptor_count"),
            rotatable_bond_count: table.number(row, "rotatable_bond_count"),
        }
    }
}

/// Convert an 8-digit `YYYYMMDD` date value to ISO `YYYY-MM-DD`.
/// A trailing `.0` (numeric round-trip artifact) is stripped first;
/// anything unparseable becomes `None`.
pub fn iso_date(raw: &str) -> Option<String> {
    let digits = raw.trim().trim_end_matches(".0");
    let date = NaiveDate::parse_from_str(digits, "%Y%m%d").ok()?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Adapt the PubChem export into candidates.
///
/// Numeric descriptors are winsorized; the `compound_cid` identifier is
/// exempt. Rows missing the identifier fall back to their row index so
/// `candidate_id` stays unique.
pub fn adapt(mut table: RawTable) -> Vec<Candidate> {
    table.canonicalise_headers();
    let removed = table.dedup_exact();
    if removed > 0 {
        debug!(removed, "pubchem: dropped exact-duplicate rows");
    }

    let mut rows: Vec<PubchemRow> = (0..table.n_rows())
        .map(|i| PubchemRow::from_table(&table, i))
        .collect();

    for row in &mut rows {
        row.create_date = row.create_date.take().and_then(|d| iso_date(&d));
    }

    winsorise_field(&mut rows, |r| &mut r.molecular_weight);
    winsorise_field(&mut rows, |r| &mut r.polar_area);
    winsorise_field(&mut rows, |r| &mut r.complexity);
    winsorise_field(&mut rows, |r| &mut r.xlogp);
    winsorise_field(&mut rows, |r| &mut r.heavy_atom_count);
    winsorise_field(&mut rows, |r| &mut r.h_bond_donor_count);
    winsorise_field(&mut rows, |r| &mut r.h_bond_acceptor_count);
    winsorise_field(&mut rows, |r| &mut r.rotatable_bond_count);

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let local_id = row.compound_cid.clone().unwrap_or_else(|| i.to_string());
            let mut c = Candidate::new(
                format!("pubchem_{local_id}"),
                SourceDataset::PubchemAntibiotic,
            );
            if let Some(name) = row.name {
                c.name = name;
            }
            if let Some(smiles) = row.smiles {
                c.smiles = smiles;
            }
            c.molecular_weight = row.molecular_weight;
            c.polar_area = row.polar_area;
            c.complexity = row.complexity;
            c.xlogp = row.xlogp;
            c.heavy_atom_count = row.heavy_atom_count;
            c.h_bond_donor_count = row.h_bond_donor_count;
            c.h_bond_acceptor_count = row.h_bond_acceptor_count;
            c.rotatable_bond_count = row.rotatable_bond_count;
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RawTable {
        RawTable::new(
            vec![
                "Compound CID".into(),
                "Name".into(),
                "SMILES".into(),
                "Molecular Weight".into(),
                "Polar Area".into(),
                "Create Date".into(),
            ],
            vec![
                vec![
                    "2244".into(),
                    " Aspirin ".into(),
                    "CC(=O)OC1=CC=CC=C1C(=O)O".into(),
                    "180.16".into(),
                    "63.6".into(),
                    "20050627.0".into(),
                ],
                // numeric cells repeat the first row's values so the
                // winsorizer sees constant columns and leaves them alone
                vec![
                    "338".into(),
                    "Salicylic acid".into(),
                    "C1=CC=C(C(=C1)C(=O)O)O".into(),
                    "180.16".into(),
                    "63.6".into(),
                    "not-a-date".into(),
                ],
                vec![
                    "".into(),
                    "nan".into(),
                    "".into(),
                    "bad".into(),
                    "".into(),
                    "".into(),
                ],
            ],
        )
    }

    #[test]
    fn test_iso_date_conversion() {
        assert_eq!(iso_date("20050627").as_deref(), Some("2005-06-27"));
        assert_eq!(iso_date("20050627.0").as_deref(), Some("2005-06-27"));
        assert_eq!(iso_date("not-a-date"), None);
        assert_eq!(iso_date("20051340"), None); // month 13
        assert_eq!(iso_date(""), None);
    }

    #[test]
    fn test_adapt_stamps_source_and_id() {
        let out = adapt(sample_table());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].candidate_id, "pubchem_2244");
        assert!(out
            .iter()
            .all(|c| c.source_dataset == SourceDataset::PubchemAntibiotic));
    }

    #[test]
    fn test_string_fields_trimmed_and_defaulted() {
        let out = adapt(sample_table());
        assert_eq!(out[0].name, "Aspirin");
        // nan-token name and empty smiles fall back to the sentinel
        assert_eq!(out[2].name, "unknown");
        assert_eq!(out[2].smiles, "unknown");
    }

    #[test]
    fn test_missing_cid_falls_back_to_row_index() {
        let out = adapt(sample_table());
        assert_eq!(out[2].candidate_id, "pubchem_2");
    }

    #[test]
    fn test_non_numeric_descriptor_becomes_missing() {
        let out = adapt(sample_table());
        assert_eq!(out[2].molecular_weight, None);
        assert_eq!(out[1].molecular_weight, Some(180.16));
    }

    #[test]
    fn test_quantum_fields_stay_missing() {
        let out = adapt(sample_table());
        assert!(out.iter().all(|c| c.binding_score.is_none()));
        assert!(out.iter().all(|c| c.toxicity.is_none()));
    }

    #[test]
    fn test_duplicate_rows_removed() {
        let row: Vec<String> = vec![
            "2244".into(),
            " Aspirin ".into(),
            "CC(=O)OC1=CC=CC=C1C(=O)O".into(),
            "180.16".into(),
            "63.6".into(),
            "20050627.0".into(),
        ];
        let t = RawTable::new(sample_table().headers().to_vec(), vec![row.clone(), row]);
        let out = adapt(t);
        assert_eq!(out.len(), 1);
    }
}

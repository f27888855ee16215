//! Shared candidate schema.
//!
//! Every source adapter lowers its own record shape into [`Candidate`], the
//! one schema the harmonization stages operate on. Missing values are
//! first-class `None`, never NaN, so each downstream stage can decide
//! explicitly what a gap means. Once ranked, rows become [`RankedCandidate`]
//! and are immutable.

use serde::{Deserialize, Serialize};

/// Origin of a candidate row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceDataset {
    PubchemAntibiotic,
    DelaneySolubility,
    QuantumCandidates,
}

impl SourceDataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceDataset::PubchemAntibiotic => "pubchem_antibiotic",
            SourceDataset::DelaneySolubility => "delaney_solubility",
            SourceDataset::QuantumCandidates => "quantum_candidates",
        }
    }
}

/// One compound in the unified schema, between adaptation and ranking.
///
/// Descriptors a source does not provide stay `None` until the imputer fills
/// them; engineered indices stay `None` until the feature engineer runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: String,
    pub source_dataset: SourceDataset,
    pub name: String,
    pub smiles: String,

    pub molecular_weight: Option<f64>,
    pub polar_area: Option<f64>,
    pub complexity: Option<f64>,
    pub xlogp: Option<f64>,
    pub heavy_atom_count: Option<f64>,
    pub h_bond_donor_count: Option<f64>,
    pub h_bond_acceptor_count: Option<f64>,
    pub rotatable_bond_count: Option<f64>,
    pub binding_score: Option<f64>,
    pub toxicity: Option<f64>,
    pub stability: Option<f64>,
    pub solubility: Option<f64>,
    pub measured_log_solubility: Option<f64>,

    pub efficacy_index: Option<f64>,
    pub safety_index: Option<f64>,
    pub molecular_complexity: Option<f64>,
    pub drug_score: Option<f64>,
}

impl Candidate {
    /// A candidate with all descriptors missing and sentinel text fields.
    pub fn new(candidate_id: String, source_dataset: SourceDataset) -> Self {
        Self {
            candidate_id,
            source_dataset,
            name: "unknown".to_string(),
            smiles: "unknown".to_string(),
            molecular_weight: None,
            polar_area: None,
            complexity: None,
            xlogp: None,
            heavy_atom_count: None,
            h_bond_donor_count: None,
            h_bond_acceptor_count: None,
            rotatable_bond_count: None,
            binding_score: None,
            toxicity: None,
            stability: None,
            solubility: None,
            measured_log_solubility: None,
            efficacy_index: None,
            safety_index: None,
            molecular_complexity: None,
            drug_score: None,
        }
    }
}

/// One row of the final, ranked candidate table.
///
/// All numeric fields are finite and rounded to six decimal places;
/// `priority_rank` is a dense 1-based rank by descending `drug_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: String,
    pub source_dataset: String,
    pub name: String,
    pub smiles: String,
    pub molecular_weight: f64,
    pub polar_area: f64,
    pub xlogp: f64,
    pub h_bond_donor_count: f64,
    pub h_bond_acceptor_count: f64,
    pub rotatable_bond_count: f64,
    pub binding_score: f64,
    pub toxicity: f64,
    pub stability: f64,
    pub solubility: f64,
    pub efficacy_index: f64,
    pub safety_index: f64,
    pub molecular_complexity: f64,
    pub drug_score: f64,
    pub priority_rank: u32,
}

impl RankedCandidate {
    /// Export column order. The CSV and JSON artifacts both follow it.
    pub const COLUMNS: [&'static str; 19] = [
        "candidate_id",
        "source_dataset",
        "name",
        "smiles",
        "molecular_weight",
        "polar_area",
        "xlogp",
        "h_bond_donor_count",
        "h_bond_acceptor_count",
        "rotatable_bond_count",
        "binding_score",
        "toxicity",
        "stability",
        "solubility",
        "efficacy_index",
        "safety_index",
        "molecular_complexity",
        "drug_score",
        "priority_rank",
    ];

    /// Cell values in [`Self::COLUMNS`] order, as written to the CSV export.
    pub fn field_strings(&self) -> Vec<String> {
        vec![
            self.candidate_id.clone(),
            self.source_dataset.clone(),
            self.name.clone(),
            self.smiles.clone(),
            self.molecular_weight.to_string(),
            self.polar_area.to_string(),
            self.xlogp.to_string(),
            self.h_bond_donor_count.to_string(),
            self.h_bond_acceptor_count.to_string(),
            self.rotatable_bond_count.to_string(),
            self.binding_score.to_string(),
            self.toxicity.to_string(),
            self.stability.to_string(),
            self.solubility.to_string(),
            self.efficacy_index.to_string(),
            self.safety_index.to_string(),
            self.molecular_complexity.to_string(),
            self.drug_score.to_string(),
            self.priority_rank.to_string(),
        ]
    }
}

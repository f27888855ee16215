//! End-to-end harmonization pipeline.
//!
//! Wires the stages together in their fixed order (ARCHITECTURE.md §1–§4):
//! adapt each source, merge, estimate missing xlogp, rescale measured
//! solubility, impute, score rule compliance, engineer indices, rank.
//! Every stage is a pure transformation of the in-memory table; the whole
//! run is a deterministic function of the three input tables.

use tracing::info;
use triagyx_common::RankedCandidate;
use triagyx_ingestion::merge::merge_candidates;
use triagyx_ingestion::sources::{delaney, pubchem, quantum};
use triagyx_ingestion::table::RawTable;

use crate::features::engineer;
use crate::impute::{impute_critical, rescale_measured_solubility};
use crate::lipinski::{compliance_column, Rule};
use crate::logp::{estimate_missing, HeuristicXlogp, XlogpEstimator};
use crate::rank::rank;
use crate::weights::FeatureWeights;

/// The harmonization-and-ranking pipeline.
///
/// The xlogp estimator and the scoring weights are fixed at construction;
/// running the pipeline never changes its configuration.
pub struct Pipeline {
    estimator: Box<dyn XlogpEstimator>,
    weights: FeatureWeights,
    rules: Vec<Rule>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Box::new(HeuristicXlogp), FeatureWeights::default())
    }
}

impl Pipeline {
    pub fn new(estimator: Box<dyn XlogpEstimator>, weights: FeatureWeights) -> Self {
        Self {
            estimator,
            weights,
            rules: Rule::ALL.to_vec(),
        }
    }

    /// Replace the enabled compliance rules (mainly for tests).
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Run the full pipeline over the three raw source tables.
    pub fn run(
        &self,
        pubchem_table: RawTable,
        delaney_table: RawTable,
        quantum_table: RawTable,
    ) -> Vec<RankedCandidate> {
        let pubchem_rows = pubchem::adapt(pubchem_table);
        let delaney_rows = delaney::adapt(delaney_table);
        let quantum_rows = quantum::adapt(quantum_table);
        info!(
            pubchem = pubchem_rows.len(),
            delaney = delaney_rows.len(),
            quantum = quantum_rows.len(),
            "adapted source tables"
        );

        let mut merged = merge_candidates(vec![pubchem_rows, delaney_rows, quantum_rows]);

        let filled = estimate_missing(&mut merged, self.estimator.as_ref());
        rescale_measured_solubility(&mut merged);
        impute_critical(&mut merged);

        let compliance = compliance_column(&merged, &self.rules);
        engineer(&mut merged, &compliance, &self.weights);

        let ranked = rank(merged);
        info!(
            rows = ranked.len(),
            xlogp_estimated = filled,
            estimator = self.estimator.name(),
            "pipeline complete"
        );
        ranked
    }
}

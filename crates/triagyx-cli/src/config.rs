//! Configuration loading for Triagyx.
//! Reads triagyx.toml from the current directory or the path in
//! TRIAGYX_CONFIG. A missing file means defaults; a broken file is an
//! error.

use serde::{Deserialize, Serialize};
use std::path::Path;

use triagyx_ranker::weights::FeatureWeights;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inputs: InputConfig,
    #[serde(default)]
    pub outputs: OutputConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_pubchem_path")]
    pub pubchem: String,
    #[serde(default = "default_delaney_path")]
    pub delaney: String,
    #[serde(default = "default_quantum_path")]
    pub quantum: String,
}

fn default_pubchem_path() -> String { "data/PubChem_compound_antibiotic.csv".to_string() }
fn default_delaney_path() -> String { "data/delaney-processed.csv".to_string() }
fn default_quantum_path() -> String { "data/quantum_drug_candidates.csv".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pubchem: default_pubchem_path(),
            delaney: default_delaney_path(),
            quantum: default_quantum_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub cleaned_csv: String,
    #[serde(default = "default_json_path")]
    pub records_json: String,
    #[serde(default = "default_glossary_path")]
    pub feature_glossary: String,
    #[serde(default = "default_report_path")]
    pub quality_report: String,
}

fn default_csv_path() -> String { "cleaned_dataset.csv".to_string() }
fn default_json_path() -> String { "processed_dataset.json".to_string() }
fn default_glossary_path() -> String { "feature_description.txt".to_string() }
fn default_report_path() -> String { "data_quality_report.txt".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            cleaned_csv: default_csv_path(),
            records_json: default_json_path(),
            feature_glossary: default_glossary_path(),
            quality_report: default_report_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_efficacy_weight")]
    pub efficacy: f64,
    #[serde(default = "default_safety_weight")]
    pub safety: f64,
    #[serde(default = "default_balance_weight")]
    pub complexity_balance: f64,
}

fn default_efficacy_weight() -> f64 { 0.45 }
fn default_safety_weight() -> f64 { 0.35 }
fn default_balance_weight() -> f64 { 0.20 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            efficacy: default_efficacy_weight(),
            safety: default_safety_weight(),
            complexity_balance: default_balance_weight(),
        }
    }
}

impl ScoringConfig {
    pub fn to_weights(&self) -> FeatureWeights {
        FeatureWeights {
            efficacy: self.efficacy,
            safety: self.safety,
            complexity_balance: self.complexity_balance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// xlogp estimation strategy: "heuristic" or "smiles"
    #[serde(default = "default_engine")]
    pub engine: String,
}

fn default_engine() -> String { "heuristic".to_string() }

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self { engine: default_engine() }
    }
}

impl Config {
    /// Load configuration from triagyx.toml.
    /// Checks TRIAGYX_CONFIG first, then the current directory; absence
    /// of the file yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("TRIAGYX_CONFIG").unwrap_or_else(|_| "triagyx.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

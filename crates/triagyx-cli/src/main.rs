//! Triagyx — heterogeneous drug-candidate harmonization and ranking.
//! Entry point for the pipeline binary: read the three source tables,
//! run the pipeline, write the artifacts, print a short summary.

mod config;

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use triagyx_ingestion::reader::read_csv_table;
use triagyx_ranker::logp::{HeuristicXlogp, SmilesXlogp, XlogpEstimator};
use triagyx_ranker::pipeline::Pipeline;
use triagyx_report::export::{write_csv, write_json};
use triagyx_report::glossary::write_glossary;
use triagyx_report::profile::profile_table;
use triagyx_report::quality::{critical_null_counts, write_quality_report};

fn build_estimator(engine: &str) -> Box<dyn XlogpEstimator> {
    match engine {
        "smiles" => Box::new(SmilesXlogp),
        "heuristic" => Box::new(HeuristicXlogp),
        other => {
            warn!(engine = other, "unknown estimator engine, using heuristic");
            Box::new(HeuristicXlogp)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("triagyx=debug,info")),
        )
        .init();

    info!("Triagyx starting up");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::load()?;

    // Read the three source tables; a missing file becomes an empty table
    let pubchem = read_csv_table(Path::new(&config.inputs.pubchem));
    let delaney = read_csv_table(Path::new(&config.inputs.delaney));
    let quantum = read_csv_table(Path::new(&config.inputs.quantum));

    // Pre-harmonization diagnostics, reporting only
    let profiles = vec![
        profile_table("pubchem", &pubchem),
        profile_table("delaney", &delaney),
        profile_table("quantum", &quantum),
    ];

    let mut weights = config.scoring.to_weights();
    if !weights.validate() {
        warn!("scoring weights do not sum to 1.0, renormalising");
        weights.normalise();
    }
    let pipeline = Pipeline::new(build_estimator(&config.estimator.engine), weights);

    let ranked = pipeline.run(pubchem, delaney, quantum);

    write_csv(Path::new(&config.outputs.cleaned_csv), &ranked)?;
    write_json(Path::new(&config.outputs.records_json), &ranked)?;
    write_glossary(Path::new(&config.outputs.feature_glossary))?;
    write_quality_report(Path::new(&config.outputs.quality_report), &profiles, &ranked)?;

    // Console summary
    let nulls = critical_null_counts(&ranked);
    let null_summary: Vec<String> = nulls.iter().map(|(c, n)| format!("{c}={n}")).collect();
    println!("Pipeline completed");
    println!(
        "Final shape: ({}, {})",
        ranked.len(),
        triagyx_common::RankedCandidate::COLUMNS.len()
    );
    println!("Critical nulls: {}", null_summary.join(", "));
    println!("Top 5 candidates:");
    for r in ranked.iter().take(5) {
        println!(
            "  {:>2}. {:<24} {:<20} drug_score={:.6}",
            r.priority_rank, r.candidate_id, r.source_dataset, r.drug_score
        );
    }

    Ok(())
}

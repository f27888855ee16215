//! triagyx-report — Diagnostics and output artifacts.
//! Covers ARCHITECTURE.md §5–§6:
//! - Descriptive table profiling (reporting only, never feeds scoring)
//! - CSV / JSON exports of the final candidate table
//! - Static feature glossary
//! - Data-quality report

pub mod export;
pub mod glossary;
pub mod profile;
pub mod quality;

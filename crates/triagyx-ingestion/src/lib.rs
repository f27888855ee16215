//! triagyx-ingestion — Source table ingestion and cleaning.
//! Covers the front half of the pipeline (ARCHITECTURE.md §1–§3.1):
//! - Canonical column labels
//! - Raw-table boundary reader
//! - Exact-duplicate removal
//! - Percentile winsorizing
//! - Three source adapters onto the shared candidate schema
//! - Table merge

pub mod columns;
pub mod merge;
pub mod reader;
pub mod sources;
pub mod table;
pub mod winsorise;

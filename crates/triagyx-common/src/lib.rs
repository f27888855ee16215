//! triagyx-common — Shared types and errors used across all Triagyx crates.

pub mod candidate;
pub mod error;

// Re-export commonly used types
pub use candidate::{Candidate, RankedCandidate, SourceDataset};
pub use error::{Result, TriagyxError};

//! Canonical column labels.
//!
//! Every source table arrives with its own labelling convention
//! ("Compound CID", "measured log solubility in mols per litre",
//! "XLogP", …). All of them are rewritten into one snake_case token form
//! before any field lookup happens. See ARCHITECTURE.md §2.1.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s\-]+").unwrap();
    static ref UNDERSCORE_RUN: Regex = Regex::new(r"_+").unwrap();
}

/// Rewrite an arbitrary column label into its canonical snake_case form.
///
/// Idempotent: a label that is already canonical comes back unchanged.
pub fn canonical_label(label: &str) -> String {
    let trimmed = label.trim();
    let depunctuated = PUNCTUATION.replace_all(trimmed, " ");
    let split = CAMEL_BOUNDARY.replace_all(&depunctuated, "${1}_${2}");
    let joined = SEPARATOR_RUN.replace_all(&split, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&joined, "_");
    collapsed.trim_matches('_').to_lowercase()
}

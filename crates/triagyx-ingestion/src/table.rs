//! In-memory raw source table.
//!
//! A [`RawTable`] is the boundary representation of one input file: ordered
//! column labels plus rows of string cells, with no schema guarantees at
//! all. Adapters canonicalise the labels, look fields up by name, and parse
//! cells into typed values; anything unparseable becomes an explicit
//! missing value rather than an error.

use std::collections::HashSet;

use crate::columns::canonical_label;

/// Cell tokens treated as missing, compared case-insensitively after
/// trimming.
const MISSING_TOKENS: [&str; 5] = ["", "na", "n/a", "nan", "null"];

/// True when a raw cell carries no value.
pub fn is_missing_token(cell: &str) -> bool {
    let t = cell.trim();
    MISSING_TOKENS.iter().any(|m| t.eq_ignore_ascii_case(m))
}

/// One raw tabular dataset: header labels and string-cell rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a table; every row is padded or truncated to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rewrite all header labels into canonical form.
    pub fn canonicalise_headers(&mut self) {
        for h in &mut self.headers {
            *h = canonical_label(h);
        }
    }

    /// Rename the first column matching `from` to `to`.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(h) = self.headers.iter_mut().find(|h| *h == from) {
            *h = to.to_string();
        }
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.column_index(label).is_some()
    }

    /// Trimmed text value of a cell, `None` when the column is absent or the
    /// cell is a missing token.
    pub fn text(&self, row: usize, label: &str) -> Option<String> {
        let col = self.column_index(label)?;
        let cell = self.rows.get(row)?.get(col)?;
        if is_missing_token(cell) {
            None
        } else {
            Some(cell.trim().to_string())
        }
    }

    /// Numeric value of a cell; non-numeric content coerces to `None`.
    pub fn number(&self, row: usize, label: &str) -> Option<f64> {
        let v = self.text(row, label)?.parse::<f64>().ok()?;
        v.is_finite().then_some(v)
    }

    /// A whole column as numeric values, one entry per row.
    pub fn numeric_column(&self, label: &str) -> Vec<Option<f64>> {
        (0..self.n_rows()).map(|i| self.number(i, label)).collect()
    }

    /// True when the column has at least one value and every non-missing
    /// cell parses as a finite number.
    pub fn is_numeric_column(&self, label: &str) -> bool {
        let Some(col) = self.column_index(label) else {
            return false;
        };
        let mut any = false;
        for row in &self.rows {
            let cell = &row[col];
            if is_missing_token(cell) {
                continue;
            }
            match cell.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => any = true,
                _ => return false,
            }
        }
        any
    }

    /// Remove exact-duplicate rows, keeping the first occurrence.
    /// Returns the number of rows removed.
    pub fn dedup_exact(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);
        self.rows.retain(|row| seen.insert(row.clone()));
        before - self.rows.len()
    }

    /// Count rows that duplicate an earlier row, without removing them.
    pub fn count_duplicate_rows(&self) -> usize {
        let mut seen: HashSet<&[String]> = HashSet::with_capacity(self.rows.len());
        self.rows
            .iter()
            .filter(|row| !seen.insert(row.as_slice()))
            .count()
    }

    /// Missing-cell count for one column.
    pub fn missing_in_column(&self, col: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| is_missing_token(&row[col]))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawTable {
        RawTable::new(
            vec!["id".into(), "value".into(), "label".into()],
            vec![
                vec!["1".into(), "10.5".into(), "aspirin".into()],
                vec!["2".into(), "".into(), "phenol".into()],
                vec!["3".into(), "NaN".into(), " toluene ".into()],
                vec!["1".into(), "10.5".into(), "aspirin".into()],
            ],
        )
    }

    #[test]
    fn test_missing_tokens() {
        assert!(is_missing_token(""));
        assert!(is_missing_token("  "));
        assert!(is_missing_token("NaN"));
        assert!(is_missing_token("null"));
        assert!(is_missing_token("N/A"));
        assert!(!is_missing_token("0"));
        assert!(!is_missing_token("unknown"));
    }

    #[test]
    fn test_text_trims_and_drops_missing() {
        let t = sample();
        assert_eq!(t.text(2, "label").as_deref(), Some("toluene"));
        assert_eq!(t.text(1, "value"), None);
        assert_eq!(t.text(0, "absent"), None);
    }

    #[test]
    fn test_number_coerces_garbage_to_none() {
        let t = sample();
        assert_eq!(t.number(0, "value"), Some(10.5));
        assert_eq!(t.number(2, "value"), None);
        assert_eq!(t.number(0, "label"), None);
    }

    #[test]
    fn test_numeric_column_detection() {
        let t = sample();
        assert!(t.is_numeric_column("id"));
        assert!(t.is_numeric_column("value")); // missing cells do not disqualify
        assert!(!t.is_numeric_column("label"));
        assert!(!t.is_numeric_column("absent"));
    }

    #[test]
    fn test_all_missing_column_is_not_numeric() {
        let t = RawTable::new(
            vec!["x".into()],
            vec![vec!["".into()], vec!["nan".into()]],
        );
        assert!(!t.is_numeric_column("x"));
    }

    #[test]
    fn test_dedup_exact_keeps_first() {
        let mut t = sample();
        let removed = t.dedup_exact();
        assert_eq!(removed, 1);
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.text(0, "label").as_deref(), Some("aspirin"));
    }

    #[test]
    fn test_count_duplicates_does_not_mutate() {
        let t = sample();
        assert_eq!(t.count_duplicate_rows(), 1);
        assert_eq!(t.n_rows(), 4);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let t = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into()], vec!["2".into(), "3".into(), "4".into()]],
        );
        assert_eq!(t.text(0, "b"), None);
        assert_eq!(t.number(1, "b"), Some(3.0));
    }

    #[test]
    fn test_canonicalise_headers() {
        let mut t = RawTable::new(vec!["Compound CID".into(), "XLogP".into()], vec![]);
        t.canonicalise_headers();
        assert_eq!(t.headers(), ["compound_cid", "xlog_p"]);
    }

    #[test]
    fn test_empty_table() {
        let t = RawTable::empty();
        assert_eq!(t.n_rows(), 0);
        assert_eq!(t.n_cols(), 0);
        assert_eq!(t.count_duplicate_rows(), 0);
    }
}

//! Column normalisation helpers.
//! See ARCHITECTURE.md §4.2 — min-max rescaling to the unit interval.

/// Min-max rescale of a column to `[0, 1]`.
///
/// Degenerate columns (no present values, or min equal to max) map to 0.0
/// for every row. A missing entry of a non-degenerate column also
/// contributes 0.0, so every downstream composite stays finite.
pub fn minmax(values: &[Option<f64>]) -> Vec<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.iter().flatten() {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() || !max.is_finite() || (max - min).abs() < 1e-10 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| match v {
            Some(x) => (x - min) / (max - min),
            None => 0.0,
        })
        .collect()
}

/// Clip a value to the unit interval.
pub fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

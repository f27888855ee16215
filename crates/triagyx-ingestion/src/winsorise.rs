//! Percentile winsorizing of numeric columns.
//!
//! Extreme entries are clamped into the empirical 1st–99th percentile range
//! instead of being dropped, so later percentile-based rescaling is not
//! dominated by a handful of outliers. See ARCHITECTURE.md §2.3. The
//! 1.5×IQR fence used by the diagnostics profiler is a deliberately
//! different definition (counting, not clamping) and must stay separate.

const LOWER_Q: f64 = 0.01;
const UPPER_Q: f64 = 0.99;

/// Linear-interpolation percentile of an ascending-sorted slice.
/// `q` is a fraction in `[0, 1]`. Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        Some(sorted[lo])
    } else {
        let frac = pos - lo as f64;
        Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
    }
}

/// Sorted non-missing values of a column.
pub fn sorted_present(values: &[Option<f64>]) -> Vec<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    present
}

/// Clamp every present value of a column into its 1st–99th percentile
/// range. Degenerate columns (no values, or equal percentiles) pass
/// through unchanged.
pub fn winsorise_column(values: &mut [Option<f64>]) {
    let present = sorted_present(values);
    let (Some(q1), Some(q99)) = (percentile(&present, LOWER_Q), percentile(&present, UPPER_Q))
    else {
        return;
    };
    if q1 == q99 {
        return;
    }
    for v in values.iter_mut().flatten() {
        *v = v.clamp(q1, q99);
    }
}

/// Winsorise one `Option<f64>` field across a slice of typed rows.
pub fn winsorise_field<R, F>(rows: &mut [R], field: F)
where
    F: Fn(&mut R) -> &mut Option<f64>,
{
    let mut column: Vec<Option<f64>> = rows.iter_mut().map(|r| *field(r)).collect();
    winsorise_column(&mut column);
    for (row, value) in rows.iter_mut().zip(column) {
        *field(row) = value;
    }
}

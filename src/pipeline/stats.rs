use crate::types::series::VariableSeries;
use crate::types::statistics::{Ci95, Percentiles, Statistics};
use ordered_float::OrderedFloat;

/// IQR multiplier for the outlier bounds `[Q1 − 2·IQR, Q3 + 2·IQR]`.
const IQR_FENCE: f64 = 2.0;
/// The outlier filter becomes a no-op if it would remove more than this
/// share of the points; small samples keep their tails.
const MAX_FILTERED_FRACTION: f64 = 0.10;

/// Descriptive statistics over the full series.
pub fn compute(series: &VariableSeries) -> Statistics {
    compute_values(&series.values())
}

/// Descriptive statistics over the IQR-filtered series. Opt-in per caller;
/// the pipeline applies it to the temperature variables only.
pub fn compute_filtered(series: &VariableSeries) -> Statistics {
    compute_values(&filter_outliers(&series.values()))
}

fn compute_values(values: &[f64]) -> Statistics {
    if values.is_empty() {
        return Statistics::default();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    // Population variance: divide by n, not n-1.
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    let margin = 1.96 * std_dev / n.sqrt();

    Statistics {
        mean,
        median: percentile_sorted(&sorted, 50.0),
        std_dev,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        count: sorted.len(),
        percentiles: Percentiles {
            p10: percentile_sorted(&sorted, 10.0),
            p25: percentile_sorted(&sorted, 25.0),
            p50: percentile_sorted(&sorted, 50.0),
            p75: percentile_sorted(&sorted, 75.0),
            p90: percentile_sorted(&sorted, 90.0),
        },
        ci95: Ci95 {
            lower: mean - margin,
            upper: mean + margin,
            margin,
        },
    }
}

/// Interpolated percentile: `index = p/100·(n−1)`, linear between the two
/// bracketing ranks. Returns 0 for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));
    percentile_sorted(&sorted, p)
}

fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (index - lo as f64)
    }
}

/// IQR outlier removal. Keeps the original data untouched if the fences
/// would trim more than [`MAX_FILTERED_FRACTION`] of it.
pub fn filter_outliers(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));
    let q1 = percentile_sorted(&sorted, 25.0);
    let q3 = percentile_sorted(&sorted, 75.0);
    let iqr = q3 - q1;
    let lower = q1 - IQR_FENCE * iqr;
    let upper = q3 + IQR_FENCE * iqr;

    let kept: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v >= lower && *v <= upper)
        .collect();
    let removed = values.len() - kept.len();
    if removed as f64 > values.len() as f64 * MAX_FILTERED_FRACTION {
        values.to_vec()
    } else {
        kept
    }
}

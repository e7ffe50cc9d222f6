use serde::Serialize;

/// Interpolated percentiles of a variable series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Percentiles {
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

/// 95% confidence interval around the mean, `mean ± 1.96·sd/√n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Ci95 {
    pub lower: f64,
    pub upper: f64,
    pub margin: f64,
}

/// Descriptive statistics of one variable series. Immutable once computed;
/// an empty series yields the all-zero default with `count` 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub percentiles: Percentiles,
    pub ci95: Ci95,
}

/// Statistics for every observed variable, keyed by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VariableStatistics {
    pub temp_avg: Statistics,
    pub temp_max: Statistics,
    pub temp_min: Statistics,
    pub wind_avg: Statistics,
    pub wind_max: Statistics,
    pub humidity: Statistics,
    pub precipitation: Statistics,
}

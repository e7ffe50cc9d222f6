use crate::types::outlook::Confidence;
use crate::types::series::VariableSeries;

/// Below this many observations no regression is attempted; the model
/// degrades to a zero-slope, low-confidence fit around the sample mean.
pub const MIN_POINTS: usize = 10;

/// Exponential age-decay constant (years) for the regression weights.
const DECAY_YEARS: f64 = 5.0;

/// Exponentially time-weighted linear fit of value against year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub confidence: Confidence,
}

impl TrendModel {
    /// Zero-slope fallback centred on the sample mean (0 for an empty
    /// series), so projections still return something sensible.
    fn flat(series: &VariableSeries) -> TrendModel {
        let intercept = if series.is_empty() {
            0.0
        } else {
            series.values().iter().sum::<f64>() / series.len() as f64
        };
        TrendModel {
            slope: 0.0,
            intercept,
            r_squared: 0.0,
            confidence: Confidence::Low,
        }
    }

    /// Straight-line value at `year`.
    pub fn value_at(&self, year: i32) -> f64 {
        self.slope * year as f64 + self.intercept
    }
}

/// Fits the weighted regression, `w = exp(−(current_year − year)/τ)` with
/// τ = 5 years so recent observations dominate.
pub fn estimate(series: &VariableSeries, current_year: i32) -> TrendModel {
    if series.len() < MIN_POINTS {
        return TrendModel::flat(series);
    }

    let mut sum_w = 0.0;
    let mut sum_wx = 0.0;
    let mut sum_wy = 0.0;
    for point in series.points() {
        let w = weight(current_year, point.year);
        sum_w += w;
        sum_wx += w * point.year as f64;
        sum_wy += w * point.value;
    }
    let x_bar = sum_wx / sum_w;
    let y_bar = sum_wy / sum_w;

    let mut s_xx = 0.0;
    let mut s_xy = 0.0;
    for point in series.points() {
        let w = weight(current_year, point.year);
        let dx = point.year as f64 - x_bar;
        s_xx += w * dx * dx;
        s_xy += w * dx * (point.value - y_bar);
    }
    if s_xx == 0.0 {
        // All observations fall in one year; no slope is identifiable.
        return TrendModel::flat(series);
    }

    let slope = s_xy / s_xx;
    let intercept = y_bar - slope * x_bar;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for point in series.points() {
        let w = weight(current_year, point.year);
        let fitted = slope * point.year as f64 + intercept;
        ss_res += w * (point.value - fitted).powi(2);
        ss_tot += w * (point.value - y_bar).powi(2);
    }
    let r_squared = if ss_tot > 0.0 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else {
        0.0
    };

    TrendModel {
        slope,
        intercept,
        r_squared,
        confidence: confidence_for(r_squared),
    }
}

fn weight(current_year: i32, year: i32) -> f64 {
    (-(current_year - year) as f64 / DECAY_YEARS).exp()
}

fn confidence_for(r_squared: f64) -> Confidence {
    if r_squared > 0.5 {
        Confidence::High
    } else if r_squared > 0.2 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

use crate::paradecast::LatLon;
use crate::pipeline::trend::{TrendModel, MIN_POINTS};
use crate::pipeline::{stats, SeriesSet, TrendSet};
use crate::tables::{calibration, seasonal};
use crate::types::outlook::{Confidence, Prediction, VariableEstimate};
use crate::types::series::VariableSeries;
use log::debug;

/// Tighter decay for the recency-biased average feeding the blend.
const NOWCAST_DECAY_YEARS: f64 = 3.0;
/// How many of the most recent observations feed the recent percentile.
const RECENT_POINTS: usize = 3;
const RECENT_PERCENTILE: f64 = 60.0;

const WEIGHT_AVERAGE: f64 = 0.40;
const WEIGHT_TREND: f64 = 0.35;
const WEIGHT_RECENT: f64 = 0.25;

/// Exponentially weighted mean of a series, `w = exp(−age/τ)`.
/// 0 for an empty series.
pub fn weighted_average(series: &VariableSeries, current_year: i32, decay_years: f64) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let mut sum_w = 0.0;
    let mut sum_wv = 0.0;
    for point in series.points() {
        let w = (-(current_year - point.year) as f64 / decay_years).exp();
        sum_w += w;
        sum_wv += w * point.value;
    }
    sum_wv / sum_w
}

/// The generic blend every variable goes through: recency-weighted average,
/// trend projection at the current year, and the 60th percentile of the
/// last few observations, combined 0.40/0.35/0.25.
fn blend_variable(series: &VariableSeries, model: &TrendModel, current_year: i32) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let average = weighted_average(series, current_year, NOWCAST_DECAY_YEARS);
    let trend_value = model.value_at(current_year);
    let recent = stats::percentile(&series.recent_values(RECENT_POINTS), RECENT_PERCENTILE);
    WEIGHT_AVERAGE * average + WEIGHT_TREND * trend_value + WEIGHT_RECENT * recent
}

fn confidence_for(series: &VariableSeries, model: &TrendModel) -> Confidence {
    if series.len() < MIN_POINTS {
        Confidence::Low
    } else {
        model.confidence
    }
}

fn estimate(series: &VariableSeries, model: &TrendModel, current_year: i32) -> VariableEstimate {
    VariableEstimate {
        value: blend_variable(series, model, current_year),
        confidence: confidence_for(series, model),
        trend_per_year: model.slope,
    }
}

/// Builds the point prediction for the target day.
///
/// Temperatures are replaced outright by a matching calibration entry, and
/// their confidence is promoted to `High` since the value then comes from a
/// curated table rather than the fit; when no entry matches, the seasonal
/// offset is added instead. Humidity and precipitation get their seasonal
/// multipliers in either case (the asymmetry is intentional and mirrors the
/// observed source behavior), and wind is never seasonally adjusted.
pub fn predict(
    set: &SeriesSet,
    trends: &TrendSet,
    current_year: i32,
    location: LatLon,
    month: u32,
) -> Prediction {
    let mut temp_max = estimate(&set.temp_max, &trends.temp_max, current_year);
    let mut temp_min = estimate(&set.temp_min, &trends.temp_min, current_year);
    let wind_max = estimate(&set.wind_max, &trends.wind_max, current_year);
    let mut humidity = estimate(&set.humidity, &trends.humidity, current_year);
    let mut precipitation = estimate(&set.precipitation, &trends.precipitation, current_year);

    let season = seasonal::factor_for(month);

    let calibrated = match calibration::find(location, month) {
        Some(entry) => {
            debug!(
                "calibration hit for ({}, {}) month {}: tmax {} tmin {}",
                location.0, location.1, month, entry.temp_max, entry.temp_min
            );
            temp_max.value = entry.temp_max;
            temp_min.value = entry.temp_min;
            temp_max.confidence = Confidence::High;
            temp_min.confidence = Confidence::High;
            true
        }
        None => {
            temp_max.value += season.temp_offset;
            temp_min.value += season.temp_offset;
            false
        }
    };

    humidity.value = (humidity.value * season.humidity_multiplier).clamp(0.0, 100.0);
    precipitation.value = (precipitation.value * season.precip_multiplier).max(0.0);

    Prediction {
        temp_max,
        temp_min,
        wind_max,
        humidity,
        precipitation,
        calibrated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::trend;
    use crate::types::series::ObservationPoint;

    fn series(values: &[(i32, f64)]) -> VariableSeries {
        VariableSeries::new(
            values
                .iter()
                .map(|&(year, value)| ObservationPoint { year, value })
                .collect(),
        )
    }

    fn constant_series(value: f64, years: usize) -> VariableSeries {
        let points: Vec<(i32, f64)> = (0..years).map(|i| (1995 + i as i32, value)).collect();
        series(&points)
    }

    fn set_with(temp_max: f64, temp_min: f64) -> SeriesSet {
        SeriesSet {
            temp_avg: constant_series((temp_max + temp_min) / 2.0, 30),
            temp_max: constant_series(temp_max, 30),
            temp_min: constant_series(temp_min, 30),
            wind_avg: constant_series(3.0, 30),
            wind_max: constant_series(8.0, 30),
            humidity: constant_series(60.0, 30),
            precipitation: constant_series(2.0, 30),
        }
    }

    #[test]
    fn weighted_average_of_constant_is_constant() {
        let s = constant_series(17.5, 30);
        assert!((weighted_average(&s, 2025, 3.0) - 17.5).abs() < 1e-9);
    }

    #[test]
    fn weighted_average_of_empty_is_zero() {
        assert_eq!(weighted_average(&series(&[]), 2025, 3.0), 0.0);
    }

    #[test]
    fn blend_of_constant_series_is_the_constant() {
        let s = constant_series(12.0, 30);
        let model = trend::estimate(&s, 2025);
        let blended = blend_variable(&s, &model, 2025);
        assert!((blended - 12.0).abs() < 1e-6);
    }

    #[test]
    fn calibration_center_overrides_temperatures_exactly() {
        let set = set_with(30.0, 20.0);
        let trends = TrendSet::estimate(&set, 2025);
        let prediction = predict(&set, &trends, 2025, LatLon(40.4168, -3.7038), 10);
        assert!(prediction.calibrated);
        assert_eq!(prediction.temp_max.value, 21.5);
        assert_eq!(prediction.temp_min.value, 9.8);
        assert_eq!(prediction.temp_max.confidence, Confidence::High);
        assert_eq!(prediction.temp_min.confidence, Confidence::High);
    }

    #[test]
    fn seasonal_adjustment_still_applies_under_calibration() {
        // October: humidity x1.05, precipitation x1.4.
        let set = set_with(30.0, 20.0);
        let trends = TrendSet::estimate(&set, 2025);
        let prediction = predict(&set, &trends, 2025, LatLon(40.4168, -3.7038), 10);
        assert!((prediction.humidity.value - 63.0).abs() < 1e-6);
        assert!((prediction.precipitation.value - 2.8).abs() < 1e-6);
        assert!((prediction.wind_max.value - 8.0).abs() < 1e-6);
    }

    #[test]
    fn no_calibration_applies_temp_offset() {
        let set = set_with(20.0, 10.0);
        let trends = TrendSet::estimate(&set, 2025);
        // July away from any calibration entry: offset +2.0.
        let prediction = predict(&set, &trends, 2025, LatLon(52.52, 13.40), 7);
        assert!(!prediction.calibrated);
        assert!((prediction.temp_max.value - 22.0).abs() < 1e-6);
        assert!((prediction.temp_min.value - 12.0).abs() < 1e-6);
    }

    #[test]
    fn humidity_is_clamped_to_valid_range() {
        let mut set = set_with(20.0, 10.0);
        set.humidity = constant_series(99.0, 30);
        let trends = TrendSet::estimate(&set, 2025);
        // January multiplies humidity by 1.10; must clamp at 100.
        let prediction = predict(&set, &trends, 2025, LatLon(52.52, 13.40), 1);
        assert_eq!(prediction.humidity.value, 100.0);
    }

    #[test]
    fn short_series_predicts_with_low_confidence() {
        let mut set = set_with(20.0, 10.0);
        set.wind_max = series(&[(2024, 9.0)]);
        let trends = TrendSet::estimate(&set, 2025);
        let prediction = predict(&set, &trends, 2025, LatLon(52.52, 13.40), 5);
        assert_eq!(prediction.wind_max.confidence, Confidence::Low);
        assert!((prediction.wind_max.value - 9.0).abs() < 1e-6);
    }

    #[test]
    fn empty_series_predicts_zero_without_panicking() {
        let mut set = set_with(20.0, 10.0);
        set.precipitation = series(&[]);
        let trends = TrendSet::estimate(&set, 2025);
        let prediction = predict(&set, &trends, 2025, LatLon(52.52, 13.40), 6);
        assert_eq!(prediction.precipitation.value, 0.0);
        assert_eq!(prediction.precipitation.confidence, Confidence::Low);
    }
}

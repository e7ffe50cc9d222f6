use crate::pipeline::{stats, SeriesSet, TrendSet};
use crate::types::series::VariableSeries;
use serde::Serialize;

pub const BASELINE_VERY_HOT: f64 = 35.0;
pub const BASELINE_VERY_COLD: f64 = 5.0;
pub const BASELINE_VERY_WINDY: f64 = 10.0;
pub const BASELINE_VERY_HUMID: f64 = 80.0;
pub const BASELINE_HEAVY_RAIN: f64 = 10.0;

/// Trend slopes are projected this many years forward when shifting the
/// global baselines.
pub const DECADE_YEARS: f64 = 10.0;

/// Per-condition exceedance thresholds, merging the local percentile signal
/// with the decade-projected global baseline and keeping whichever is more
/// extreme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub very_hot: f64,
    pub very_cold: f64,
    pub very_windy: f64,
    pub very_humid: f64,
    pub heavy_rain: f64,
}

/// Local percentile of a series, or the supplied baseline when there is no
/// data to take a percentile of.
fn local_or(series: &VariableSeries, p: f64, baseline: f64) -> f64 {
    if series.is_empty() {
        baseline
    } else {
        stats::percentile(&series.values(), p)
    }
}

pub fn compute(set: &SeriesSet, trends: &TrendSet) -> Thresholds {
    Thresholds {
        very_hot: local_or(&set.temp_max, 90.0, BASELINE_VERY_HOT)
            .max(BASELINE_VERY_HOT + trends.temp_max.slope * DECADE_YEARS),
        very_cold: local_or(&set.temp_min, 10.0, BASELINE_VERY_COLD)
            .min(BASELINE_VERY_COLD + trends.temp_min.slope * DECADE_YEARS),
        very_windy: local_or(&set.wind_max, 90.0, BASELINE_VERY_WINDY).max(BASELINE_VERY_WINDY),
        very_humid: BASELINE_VERY_HUMID,
        heavy_rain: local_or(&set.precipitation, 75.0, BASELINE_HEAVY_RAIN)
            .max(BASELINE_HEAVY_RAIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::TrendSet;
    use crate::types::series::ObservationPoint;

    fn constant_series(value: f64, years: usize) -> VariableSeries {
        VariableSeries::new(
            (0..years)
                .map(|i| ObservationPoint {
                    year: 1995 + i as i32,
                    value,
                })
                .collect(),
        )
    }

    fn mild_set() -> SeriesSet {
        SeriesSet {
            temp_avg: constant_series(15.0, 30),
            temp_max: constant_series(20.0, 30),
            temp_min: constant_series(10.0, 30),
            wind_avg: constant_series(3.0, 30),
            wind_max: constant_series(6.0, 30),
            humidity: constant_series(55.0, 30),
            precipitation: constant_series(1.0, 30),
        }
    }

    #[test]
    fn baselines_win_over_mild_local_climate() {
        let set = mild_set();
        let trends = TrendSet::estimate(&set, 2025);
        let thresholds = compute(&set, &trends);
        // Flat series: slopes are 0, so the baselines stand.
        assert_eq!(thresholds.very_hot, BASELINE_VERY_HOT);
        assert_eq!(thresholds.very_cold, BASELINE_VERY_COLD);
        assert_eq!(thresholds.very_windy, BASELINE_VERY_WINDY);
        assert_eq!(thresholds.heavy_rain, BASELINE_HEAVY_RAIN);
    }

    #[test]
    fn very_humid_is_fixed() {
        let set = mild_set();
        let trends = TrendSet::estimate(&set, 2025);
        assert_eq!(compute(&set, &trends).very_humid, BASELINE_VERY_HUMID);
    }

    #[test]
    fn local_percentile_wins_when_more_extreme() {
        let mut set = mild_set();
        set.temp_max = constant_series(41.0, 30);
        set.wind_max = constant_series(14.0, 30);
        set.precipitation = constant_series(25.0, 30);
        let trends = TrendSet::estimate(&set, 2025);
        let thresholds = compute(&set, &trends);
        assert_eq!(thresholds.very_hot, 41.0);
        assert_eq!(thresholds.very_windy, 14.0);
        assert_eq!(thresholds.heavy_rain, 25.0);
    }

    #[test]
    fn warming_trend_raises_the_hot_threshold() {
        let mut set = mild_set();
        // +0.2 degrees per year; P90 stays below the baseline.
        set.temp_max = VariableSeries::new(
            (0..30)
                .map(|i| ObservationPoint {
                    year: 1995 + i,
                    value: 18.0 + 0.2 * i as f64,
                })
                .collect(),
        );
        let trends = TrendSet::estimate(&set, 2025);
        let thresholds = compute(&set, &trends);
        assert!(trends.temp_max.slope > 0.0);
        assert!(thresholds.very_hot >= BASELINE_VERY_HOT);
    }

    #[test]
    fn empty_series_fall_back_to_baselines() {
        let set = SeriesSet::default();
        let trends = TrendSet::estimate(&set, 2025);
        let thresholds = compute(&set, &trends);
        assert_eq!(thresholds.very_hot, BASELINE_VERY_HOT);
        assert_eq!(thresholds.very_cold, BASELINE_VERY_COLD);
        assert_eq!(thresholds.very_windy, BASELINE_VERY_WINDY);
        assert_eq!(thresholds.heavy_rain, BASELINE_HEAVY_RAIN);
    }
}

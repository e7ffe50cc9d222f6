use crate::pipeline::threshold::Thresholds;
use crate::pipeline::SeriesSet;
use crate::tables::seasonal;
use crate::types::outlook::{Condition, ConditionProbability};
use crate::types::series::VariableSeries;

/// Which side of the threshold counts as exceedance.
enum Direction {
    Above,
    Below,
}

fn exceedance(series: &VariableSeries, threshold: f64, direction: Direction) -> (usize, usize) {
    let exceeded = series
        .points()
        .iter()
        .filter(|p| match direction {
            Direction::Above => p.value > threshold,
            Direction::Below => p.value < threshold,
        })
        .count();
    (exceeded, series.len())
}

fn probability_record(
    condition: Condition,
    series: &VariableSeries,
    threshold: f64,
    direction: Direction,
    multiplier: f64,
) -> ConditionProbability {
    let (years_exceeded, total_years) = exceedance(series, threshold, direction);
    let raw = if total_years == 0 {
        0.0
    } else {
        100.0 * years_exceeded as f64 / total_years as f64
    };
    ConditionProbability {
        condition,
        probability: (raw * multiplier).min(100.0),
        threshold,
        years_exceeded,
        total_years,
    }
}

/// Empirical exceedance frequency of each condition against its adaptive
/// threshold. Humidity and rain are scaled by the seasonal multipliers
/// (wet-season risk is under-counted by the mixed climatology otherwise),
/// capped at 100.
pub fn estimate_all(
    set: &SeriesSet,
    thresholds: &Thresholds,
    month: u32,
) -> Vec<ConditionProbability> {
    let season = seasonal::factor_for(month);
    vec![
        probability_record(
            Condition::VeryHot,
            &set.temp_max,
            thresholds.very_hot,
            Direction::Above,
            1.0,
        ),
        probability_record(
            Condition::VeryCold,
            &set.temp_min,
            thresholds.very_cold,
            Direction::Below,
            1.0,
        ),
        probability_record(
            Condition::VeryWindy,
            &set.wind_max,
            thresholds.very_windy,
            Direction::Above,
            1.0,
        ),
        probability_record(
            Condition::VeryHumid,
            &set.humidity,
            thresholds.very_humid,
            Direction::Above,
            season.humidity_multiplier,
        ),
        probability_record(
            Condition::HeavyRain,
            &set.precipitation,
            thresholds.heavy_rain,
            Direction::Above,
            season.precip_multiplier,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{threshold, SeriesSet, TrendSet};
    use crate::types::series::ObservationPoint;

    fn series(values: &[f64]) -> VariableSeries {
        VariableSeries::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| ObservationPoint {
                    year: 1995 + i as i32,
                    value,
                })
                .collect(),
        )
    }

    fn find(conditions: &[ConditionProbability], condition: Condition) -> ConditionProbability {
        *conditions
            .iter()
            .find(|c| c.condition == condition)
            .unwrap()
    }

    #[test]
    fn thirty_year_very_hot_scenario_is_exact() {
        // 30 years of TEMP_MAX: one 30, twenty-eight 31s, one 40.
        let mut values = vec![30.0];
        values.extend(std::iter::repeat(31.0).take(28));
        values.push(40.0);
        let mut set = SeriesSet::default();
        set.temp_max = series(&values);

        let trends = TrendSet::estimate(&set, 2025);
        let thresholds = threshold::compute(&set, &trends);
        let conditions = estimate_all(&set, &thresholds, 10);
        let very_hot = find(&conditions, Condition::VeryHot);

        let expected_count = values.iter().filter(|&&v| v > thresholds.very_hot).count();
        assert_eq!(very_hot.years_exceeded, expected_count);
        assert_eq!(very_hot.total_years, 30);
        assert!(
            (very_hot.probability - 100.0 * expected_count as f64 / 30.0).abs() < 1e-9,
            "probability {} does not match exact frequency",
            very_hot.probability
        );
    }

    #[test]
    fn cold_counts_below_threshold() {
        let mut set = SeriesSet::default();
        set.temp_min = series(&[-2.0, 1.0, 3.0, 7.0, 8.0]);
        let thresholds = Thresholds {
            very_hot: 35.0,
            very_cold: 5.0,
            very_windy: 10.0,
            very_humid: 80.0,
            heavy_rain: 10.0,
        };
        let very_cold = find(&estimate_all(&set, &thresholds, 3), Condition::VeryCold);
        assert_eq!(very_cold.years_exceeded, 3);
        assert!((very_cold.probability - 60.0).abs() < 1e-9);
    }

    #[test]
    fn seasonal_multiplier_scales_rain_and_caps_at_100() {
        let mut set = SeriesSet::default();
        set.precipitation = series(&[20.0, 20.0, 20.0, 20.0, 1.0]);
        let thresholds = Thresholds {
            very_hot: 35.0,
            very_cold: 5.0,
            very_windy: 10.0,
            very_humid: 80.0,
            heavy_rain: 10.0,
        };
        // October: x1.4. Raw 80% becomes 100 after capping at 112.
        let rain = find(&estimate_all(&set, &thresholds, 10), Condition::HeavyRain);
        assert_eq!(rain.probability, 100.0);
        assert_eq!(rain.years_exceeded, 4);
        // July: x0.5 halves it instead.
        let rain_july = find(&estimate_all(&set, &thresholds, 7), Condition::HeavyRain);
        assert!((rain_july.probability - 40.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_gives_zero_probability() {
        let set = SeriesSet::default();
        let thresholds = Thresholds {
            very_hot: 35.0,
            very_cold: 5.0,
            very_windy: 10.0,
            very_humid: 80.0,
            heavy_rain: 10.0,
        };
        for record in estimate_all(&set, &thresholds, 6) {
            assert_eq!(record.probability, 0.0);
            assert_eq!(record.total_years, 0);
        }
    }

    #[test]
    fn all_five_conditions_are_reported_in_order() {
        let set = SeriesSet::default();
        let thresholds = Thresholds {
            very_hot: 35.0,
            very_cold: 5.0,
            very_windy: 10.0,
            very_humid: 80.0,
            heavy_rain: 10.0,
        };
        let conditions = estimate_all(&set, &thresholds, 6);
        let kinds: Vec<Condition> = conditions.iter().map(|c| c.condition).collect();
        assert_eq!(kinds, Condition::ALL.to_vec());
    }
}

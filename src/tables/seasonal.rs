/// Per-month adjustment applied to predictions and probabilities:
/// additive for temperature, multiplicative for humidity and precipitation.
/// Wind carries no seasonal signal in the source data and is left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalFactor {
    pub month: u32,
    pub temp_offset: f64,
    pub precip_multiplier: f64,
    pub humidity_multiplier: f64,
    pub season: &'static str,
}

pub static FACTORS: [SeasonalFactor; 12] = [
    SeasonalFactor { month: 1, temp_offset: -1.5, precip_multiplier: 0.8, humidity_multiplier: 1.10, season: "winter" },
    SeasonalFactor { month: 2, temp_offset: -1.0, precip_multiplier: 0.8, humidity_multiplier: 1.08, season: "winter" },
    SeasonalFactor { month: 3, temp_offset: 0.0, precip_multiplier: 1.1, humidity_multiplier: 1.00, season: "spring" },
    SeasonalFactor { month: 4, temp_offset: 0.5, precip_multiplier: 1.3, humidity_multiplier: 0.98, season: "spring" },
    SeasonalFactor { month: 5, temp_offset: 1.0, precip_multiplier: 1.2, humidity_multiplier: 0.95, season: "spring" },
    SeasonalFactor { month: 6, temp_offset: 1.5, precip_multiplier: 0.7, humidity_multiplier: 0.90, season: "summer" },
    SeasonalFactor { month: 7, temp_offset: 2.0, precip_multiplier: 0.5, humidity_multiplier: 0.85, season: "summer" },
    SeasonalFactor { month: 8, temp_offset: 1.8, precip_multiplier: 0.6, humidity_multiplier: 0.88, season: "summer" },
    SeasonalFactor { month: 9, temp_offset: 1.0, precip_multiplier: 1.2, humidity_multiplier: 0.95, season: "autumn" },
    SeasonalFactor { month: 10, temp_offset: 0.0, precip_multiplier: 1.4, humidity_multiplier: 1.05, season: "autumn" },
    SeasonalFactor { month: 11, temp_offset: -0.5, precip_multiplier: 1.2, humidity_multiplier: 1.08, season: "autumn" },
    SeasonalFactor { month: 12, temp_offset: -1.2, precip_multiplier: 0.9, humidity_multiplier: 1.10, season: "winter" },
];

/// Month is expected in 1..=12 (validated at the request boundary); any
/// other value falls back to January rather than panicking.
pub fn factor_for(month: u32) -> &'static SeasonalFactor {
    FACTORS.iter().find(|f| f.month == month).unwrap_or(&FACTORS[0])
}

use crate::types::outlook::{Prediction, RiskAssessment, RiskLevel, RiskScore};
use crate::types::statistics::VariableStatistics;

const LEVEL_HIGH: f64 = 70.0;
const LEVEL_MEDIUM: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RiskKind {
    Frost,
    Storm,
    HeatStress,
}

fn level_for(score: f64) -> RiskLevel {
    if score >= LEVEL_HIGH {
        RiskLevel::High
    } else if score >= LEVEL_MEDIUM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn recommendations(kind: RiskKind, level: RiskLevel) -> &'static [&'static str] {
    match (kind, level) {
        (RiskKind::Frost, RiskLevel::High) => &[
            "Protect sensitive plants and exposed pipes overnight",
            "Expect icy surfaces in the early morning",
            "Postpone pre-dawn outdoor activities",
        ],
        (RiskKind::Frost, RiskLevel::Medium) => &[
            "Cover sensitive plants if skies stay clear",
            "Watch for patchy ground frost at dawn",
        ],
        (RiskKind::Frost, RiskLevel::Low) => &["No frost precautions needed"],
        (RiskKind::Storm, RiskLevel::High) => &[
            "Secure loose outdoor objects",
            "Avoid open water and exposed ridgelines",
            "Keep an indoor fallback plan ready",
        ],
        (RiskKind::Storm, RiskLevel::Medium) => &[
            "Keep rain gear at hand",
            "Check for weather warnings before heading out",
        ],
        (RiskKind::Storm, RiskLevel::Low) => &["No storm precautions needed"],
        (RiskKind::HeatStress, RiskLevel::High) => &[
            "Schedule strenuous activity outside midday hours",
            "Drink water regularly, before feeling thirsty",
            "Seek shade and watch for signs of heat exhaustion",
        ],
        (RiskKind::HeatStress, RiskLevel::Medium) => &[
            "Plan breaks in the shade",
            "Carry extra water",
        ],
        (RiskKind::HeatStress, RiskLevel::Low) => &["No heat precautions needed"],
    }
}

fn score_record(kind: RiskKind, score: f64) -> RiskScore {
    let score = score.clamp(0.0, 100.0);
    let level = level_for(score);
    RiskScore {
        score,
        level,
        recommendations: recommendations(kind, level).to_vec(),
    }
}

fn frost_score(predicted_temp_min: f64, mean_humidity: f64, mean_wind_avg: f64) -> f64 {
    (10.0 - predicted_temp_min).max(0.0) * 50.0
        + mean_humidity * 0.3
        + (5.0 - mean_wind_avg).max(0.0) * 20.0
}

fn storm_score(prob_heavy_rain: f64, mean_wind_max: f64, mean_humidity: f64) -> f64 {
    prob_heavy_rain * 0.5 + (mean_wind_max / 15.0) * 30.0 + (mean_humidity / 100.0) * 20.0
}

fn heat_stress_score(predicted_temp_max: f64, mean_humidity: f64, mean_wind_avg: f64) -> f64 {
    (predicted_temp_max - 30.0).max(0.0) * 3.0
        + (mean_humidity / 100.0) * 30.0
        + (5.0 - mean_wind_avg).max(0.0) * 10.0
}

/// Composes the three weighted-sum risk scores from the prediction, the
/// historical means and the heavy-rain probability. Scores are clamped to
/// [0, 100] before level mapping.
pub fn assess(
    prediction: &Prediction,
    statistics: &VariableStatistics,
    prob_heavy_rain: f64,
) -> RiskAssessment {
    let mean_humidity = statistics.humidity.mean;
    let mean_wind_avg = statistics.wind_avg.mean;
    let mean_wind_max = statistics.wind_max.mean;

    RiskAssessment {
        frost: score_record(
            RiskKind::Frost,
            frost_score(prediction.temp_min.value, mean_humidity, mean_wind_avg),
        ),
        storm: score_record(
            RiskKind::Storm,
            storm_score(prob_heavy_rain, mean_wind_max, mean_humidity),
        ),
        heat_stress: score_record(
            RiskKind::HeatStress,
            heat_stress_score(prediction.temp_max.value, mean_humidity, mean_wind_avg),
        ),
    }
}

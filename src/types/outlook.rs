use crate::types::statistics::VariableStatistics;
use serde::Serialize;

/// Qualitative confidence tier attached to trends and predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// One predicted variable: blended point value, confidence tier and the
/// per-year trend slope behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableEstimate {
    pub value: f64,
    pub confidence: Confidence,
    pub trend_per_year: f64,
}

/// Point prediction for the target calendar day, one estimate per variable.
/// `calibrated` is set when a calibration entry replaced the temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub temp_max: VariableEstimate,
    pub temp_min: VariableEstimate,
    pub wind_max: VariableEstimate,
    pub humidity: VariableEstimate,
    pub precipitation: VariableEstimate,
    pub calibrated: bool,
}

/// The five extreme-condition categories an exceedance probability is
/// estimated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    VeryHot,
    VeryCold,
    VeryWindy,
    VeryHumid,
    HeavyRain,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::VeryHot,
        Condition::VeryCold,
        Condition::VeryWindy,
        Condition::VeryHumid,
        Condition::HeavyRain,
    ];
}

/// Empirical exceedance probability of one condition against its adaptive
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionProbability {
    pub condition: Condition,
    /// Percentage in 0..=100.
    pub probability: f64,
    pub threshold: f64,
    pub years_exceeded: usize,
    pub total_years: usize,
}

/// Ordinal severity tier of a compound risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A compound risk score in 0..=100 with its tier and the fixed
/// recommendation set selected by that tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScore {
    pub score: f64,
    pub level: RiskLevel,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub frost: RiskScore,
    pub storm: RiskScore,
    pub heat_stress: RiskScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempRange {
    pub min: f64,
    pub max: f64,
}

/// Hour-of-day estimate derived from the daily prediction. Only produced
/// when the request names an hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyForecast {
    pub hour: u32,
    pub expected_temp: f64,
    pub range: TempRange,
    /// Percentage in 0..=100.
    pub rain_probability: f64,
}

/// Aggregate output of the inference pipeline for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOutlook {
    pub prediction: Prediction,
    pub statistics: VariableStatistics,
    /// One entry per condition, in [`Condition::ALL`] order.
    pub conditions: Vec<ConditionProbability>,
    pub risk: RiskAssessment,
    pub hourly: Option<HourlyForecast>,
}

//! The statistical inference pipeline: raw historical series in, complete
//! day outlook out. Every stage is a pure function of its inputs; the only
//! time-dependent value, `current_year`, is an explicit request field so
//! results are reproducible. Nothing here performs I/O or touches shared
//! mutable state, so the pipeline can run on any number of request threads
//! concurrently.

pub mod blend;
pub mod hourly;
pub mod probability;
pub mod risk;
pub mod series;
pub mod stats;
pub mod threshold;
pub mod trend;

use crate::paradecast::LatLon;
use crate::pipeline::trend::TrendModel;
use crate::types::outlook::{Condition, DayOutlook};
use crate::types::parameter::Parameter;
use crate::types::raw::RawSeries;
use crate::types::series::VariableSeries;
use crate::types::statistics::VariableStatistics;

/// Everything the pipeline needs for one request.
#[derive(Debug, Clone, Copy)]
pub struct OutlookRequest<'a> {
    pub raw: &'a RawSeries,
    /// Target calendar month, 1..=12.
    pub month: u32,
    /// Target calendar day, 1..=31.
    pub day: u32,
    /// Reference year for trend projection and recency weights.
    pub current_year: i32,
    pub location: LatLon,
    /// When set (0..=23), an hourly interpolation is included.
    pub hour: Option<u32>,
}

/// The per-calendar-day series of every parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    pub temp_avg: VariableSeries,
    pub temp_max: VariableSeries,
    pub temp_min: VariableSeries,
    pub wind_avg: VariableSeries,
    pub wind_max: VariableSeries,
    pub humidity: VariableSeries,
    pub precipitation: VariableSeries,
}

impl SeriesSet {
    pub fn extract(raw: &RawSeries, month: u32, day: u32) -> SeriesSet {
        let get = |p| series::extract_day_series(raw, p, month, day);
        SeriesSet {
            temp_avg: get(Parameter::TempAvg),
            temp_max: get(Parameter::TempMax),
            temp_min: get(Parameter::TempMin),
            wind_avg: get(Parameter::WindAvg),
            wind_max: get(Parameter::WindMax),
            humidity: get(Parameter::Humidity),
            precipitation: get(Parameter::Precipitation),
        }
    }

    /// Reported statistics. The IQR outlier filter is opted in for the
    /// temperature variables only; wind, humidity and precipitation have
    /// heavy natural tails that the filter would misread as outliers.
    pub fn statistics(&self) -> VariableStatistics {
        VariableStatistics {
            temp_avg: stats::compute_filtered(&self.temp_avg),
            temp_max: stats::compute_filtered(&self.temp_max),
            temp_min: stats::compute_filtered(&self.temp_min),
            wind_avg: stats::compute(&self.wind_avg),
            wind_max: stats::compute(&self.wind_max),
            humidity: stats::compute(&self.humidity),
            precipitation: stats::compute(&self.precipitation),
        }
    }
}

/// Trend models for the five predicted variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSet {
    pub temp_max: TrendModel,
    pub temp_min: TrendModel,
    pub wind_max: TrendModel,
    pub humidity: TrendModel,
    pub precipitation: TrendModel,
}

impl TrendSet {
    pub fn estimate(set: &SeriesSet, current_year: i32) -> TrendSet {
        TrendSet {
            temp_max: trend::estimate(&set.temp_max, current_year),
            temp_min: trend::estimate(&set.temp_min, current_year),
            wind_max: trend::estimate(&set.wind_max, current_year),
            humidity: trend::estimate(&set.humidity, current_year),
            precipitation: trend::estimate(&set.precipitation, current_year),
        }
    }
}

/// Runs the full pipeline for one request. Never fails: missing or
/// malformed data degrades to zero-count statistics and low-confidence
/// predictions instead of erroring.
pub fn run(request: &OutlookRequest<'_>) -> DayOutlook {
    let set = SeriesSet::extract(request.raw, request.month, request.day);
    let statistics = set.statistics();
    let trends = TrendSet::estimate(&set, request.current_year);

    let prediction = blend::predict(
        &set,
        &trends,
        request.current_year,
        request.location,
        request.month,
    );
    let thresholds = threshold::compute(&set, &trends);
    let conditions = probability::estimate_all(&set, &thresholds, request.month);
    let heavy_rain = conditions
        .iter()
        .find(|c| c.condition == Condition::HeavyRain)
        .map(|c| c.probability)
        .unwrap_or(0.0);
    let risk = risk::assess(&prediction, &statistics, heavy_rain);
    let hourly = request.hour.map(|hour| {
        hourly::forecast(
            &prediction,
            &statistics,
            heavy_rain,
            hour,
            request.month,
            request.location,
        )
    });

    DayOutlook {
        prediction,
        statistics,
        conditions,
        risk,
        hourly,
    }
}

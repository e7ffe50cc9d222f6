mod error;
mod paradecast;
mod pipeline;
mod provider;
mod tables;
mod types;

pub use error::ParadecastError;
pub use paradecast::*;

pub use pipeline::{run, OutlookRequest, SeriesSet, TrendSet};

pub use pipeline::threshold::Thresholds;
pub use pipeline::trend::TrendModel;

pub use types::outlook::*;
pub use types::parameter::Parameter;
pub use types::raw::RawSeries;
pub use types::series::{ObservationPoint, VariableSeries};
pub use types::statistics::{Ci95, Percentiles, Statistics, VariableStatistics};

pub use tables::calibration::CalibrationEntry;
pub use tables::seasonal::SeasonalFactor;

pub use provider::error::{GeoError, ProviderError};
pub use provider::geo::GeoResolver;
pub use provider::power::PowerClient;

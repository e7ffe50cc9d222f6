use crate::provider::error::{GeoError, ProviderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParadecastError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("Invalid target date {month:02}-{day:02}")]
    InvalidTargetDate { month: u32, day: u32 },

    #[error("Invalid hour {0}, expected 0..=23")]
    InvalidHour(u32),
}

//! The main entry point for producing a same-calendar-day outlook: fetches
//! the historical series for a coordinate, runs the inference pipeline and
//! optionally attaches location metadata.

use crate::error::ParadecastError;
use crate::pipeline::{self, OutlookRequest};
use crate::provider::geo::GeoResolver;
use crate::provider::power::PowerClient;
use crate::types::outlook::DayOutlook;
use bon::bon;
use chrono::{Datelike, Utc};
use log::warn;
use serde::Serialize;

/// A geographical coordinate: latitude first, longitude second.
///
/// # Examples
///
/// ```
/// use paradecast::LatLon;
///
/// let madrid = LatLon(40.4168, -3.7038);
/// assert_eq!(madrid.0, 40.4168); // Latitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

/// How many years of history to request by default.
const DEFAULT_YEARS_BACK: u32 = 30;

/// An outlook plus the location metadata resolved around it. The metadata
/// is cosmetic: the numeric outlook is complete without it, so resolver
/// failures leave the fields `None` rather than failing the request.
#[derive(Debug, Clone, Serialize)]
pub struct OutlookReport {
    pub location: LatLon,
    pub month: u32,
    pub day: u32,
    pub outlook: DayOutlook,
    pub elevation: Option<f64>,
    pub place_name: Option<String>,
}

/// Client combining the historical data provider, the geo resolvers and
/// the inference pipeline.
pub struct Paradecast {
    provider: PowerClient,
    geo: GeoResolver,
}

impl Default for Paradecast {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl Paradecast {
    pub fn new() -> Self {
        Self {
            provider: PowerClient::new(),
            geo: GeoResolver::new(),
        }
    }

    /// Use a provider pointed at a non-default endpoint (e.g. a stub
    /// server in tests).
    pub fn with_provider(provider: PowerClient) -> Self {
        Self {
            provider,
            geo: GeoResolver::new(),
        }
    }

    /// Produces the probabilistic outlook for a calendar day at a location.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** Coordinates of the point of interest.
    /// * `.month(u32)`: **Required.** Target calendar month, 1..=12.
    /// * `.day(u32)`: **Required.** Target calendar day, 1..=31.
    /// * `.hour(u32)`: Optional. Hour of day (0..=23) to interpolate for.
    /// * `.years_back(u32)`: Optional. Years of history to fetch. Defaults to `30`.
    /// * `.include_location_meta(bool)`: Optional. Attach elevation and a
    ///   display name to the report. Defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ParadecastError::InvalidTargetDate`] or
    /// [`ParadecastError::InvalidHour`] for out-of-range targets, and
    /// [`ParadecastError::Provider`] when the historical fetch fails after
    /// its bounded retries. Resolver failures are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use paradecast::{LatLon, Paradecast, ParadecastError};
    /// # async fn run() -> Result<(), ParadecastError> {
    /// let client = Paradecast::new();
    /// let report = client
    ///     .outlook()
    ///     .location(LatLon(40.4168, -3.7038))
    ///     .month(10)
    ///     .day(4)
    ///     .hour(15)
    ///     .call()
    ///     .await?;
    /// println!("p(very hot) = {}", report.outlook.conditions[0].probability);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn outlook(
        &self,
        location: LatLon,
        month: u32,
        day: u32,
        hour: Option<u32>,
        years_back: Option<u32>,
        include_location_meta: Option<bool>,
    ) -> Result<OutlookReport, ParadecastError> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(ParadecastError::InvalidTargetDate { month, day });
        }
        if let Some(h) = hour {
            if h > 23 {
                return Err(ParadecastError::InvalidHour(h));
            }
        }
        let years_back = years_back.unwrap_or(DEFAULT_YEARS_BACK);
        let current_year = Utc::now().year();

        let raw = self
            .provider
            .fetch_daily_history(location, current_year - years_back as i32, current_year)
            .await?;

        let outlook = pipeline::run(&OutlookRequest {
            raw: &raw,
            month,
            day,
            current_year,
            location,
            hour,
        });

        let (elevation, place_name) = if include_location_meta.unwrap_or(false) {
            (
                self.geo
                    .elevation(location)
                    .await
                    .map_err(|e| warn!("elevation lookup failed: {e}"))
                    .ok(),
                self.geo
                    .place_name(location)
                    .await
                    .map_err(|e| warn!("place-name lookup failed: {e}"))
                    .ok(),
            )
        } else {
            (None, None)
        };

        Ok(OutlookReport {
            location,
            month,
            day,
            outlook,
            elevation,
            place_name,
        })
    }
}

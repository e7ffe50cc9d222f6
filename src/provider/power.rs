use crate::paradecast::LatLon;
use crate::provider::error::ProviderError;
use crate::types::parameter::Parameter;
use crate::types::raw::RawSeries;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

const BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
const COMMUNITY: &str = "RE";

/// Bounded retry with doubling backoff; after the last attempt the fetch
/// surfaces as a hard failure (the pipeline cannot run without a series).
const MAX_ATTEMPTS: u32 = 4;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Async client for a POWER-style daily point endpoint. Produces the
/// [`RawSeries`] contract the pipeline consumes; sentinel values are passed
/// through untouched and filtered during series extraction.
pub struct PowerClient {
    http: Client,
    base_url: String,
}

impl Default for PowerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different endpoint, e.g. a local stub.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the full daily history for every parameter over
    /// `start_year..=end_year`, retrying with exponential backoff.
    pub async fn fetch_daily_history(
        &self,
        location: LatLon,
        start_year: i32,
        end_year: i32,
    ) -> Result<RawSeries, ProviderError> {
        let url = self.request_url(location, start_year, end_year);
        info!("Fetching daily history from {}", url);

        let mut backoff = INITIAL_BACKOFF;
        let mut attempt = 1;
        loop {
            match self.try_fetch(&url).await {
                Ok(raw) => return Ok(raw),
                Err(e) if attempt >= MAX_ATTEMPTS => {
                    return Err(ProviderError::RetriesExhausted {
                        url,
                        attempts: attempt,
                        last: Box::new(e),
                    });
                }
                Err(e) => {
                    warn!(
                        "Fetch attempt {}/{} failed ({}); retrying in {:?}",
                        attempt, MAX_ATTEMPTS, e, backoff
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                    attempt += 1;
                }
            }
        }
    }

    fn request_url(&self, location: LatLon, start_year: i32, end_year: i32) -> String {
        let parameters: Vec<&str> = Parameter::ALL.iter().map(|p| p.power_name()).collect();
        format!(
            "{}?parameters={}&community={}&latitude={}&longitude={}&start={}0101&end={}1231&format=JSON",
            self.base_url,
            parameters.join(","),
            COMMUNITY,
            location.0,
            location.1,
            start_year,
            end_year
        )
    }

    async fn try_fetch(&self, url: &str) -> Result<RawSeries, ProviderError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e))?;
        parse_power_payload(&body).map_err(|e| ProviderError::Decode(url.to_string(), e))
    }
}

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: HashMap<String, BTreeMap<String, f64>>,
}

/// Decodes a POWER daily-point payload into the raw series contract.
/// Parameters the pipeline does not know are ignored; known parameters that
/// are absent simply stay missing and degrade downstream.
pub(crate) fn parse_power_payload(body: &str) -> Result<RawSeries, serde_json::Error> {
    let response: PowerResponse = serde_json::from_str(body)?;
    let mut raw = RawSeries::new();
    for (name, by_date) in response.properties.parameter {
        if let Some(parameter) = Parameter::from_power_name(&name) {
            raw.insert_parameter(parameter, by_date);
        }
    }
    Ok(raw)
}

use crate::paradecast::LatLon;
use crate::provider::error::GeoError;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;

const ELEVATION_URL: &str = "https://api.open-meteo.com/v1/elevation";
const REVERSE_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Resolves elevation and a display name for a coordinate, caching results
/// per process. The pipeline never reads these values; they are carried
/// through as response metadata only.
///
/// The caches are keyed by coordinates rounded to two decimals (~1 km) and
/// use last-writer-wins semantics; concurrent duplicate fetches are
/// harmless since the resolved values are identical.
pub struct GeoResolver {
    http: Client,
    elevations: RwLock<HashMap<(i64, i64), f64>>,
    names: RwLock<HashMap<(i64, i64), String>>,
}

fn cache_key(location: LatLon) -> (i64, i64) {
    (
        (location.0 * 100.0).round() as i64,
        (location.1 * 100.0).round() as i64,
    )
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    elevation: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    display_name: String,
}

impl Default for GeoResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoResolver {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            elevations: RwLock::new(HashMap::new()),
            names: RwLock::new(HashMap::new()),
        }
    }

    pub async fn elevation(&self, location: LatLon) -> Result<f64, GeoError> {
        let key = cache_key(location);
        if let Ok(cache) = self.elevations.read() {
            if let Some(&elevation) = cache.get(&key) {
                return Ok(elevation);
            }
        }

        let url = format!(
            "{}?latitude={}&longitude={}",
            ELEVATION_URL, location.0, location.1
        );
        let response: ElevationResponse = self.get_json(&url).await?;
        let elevation = response
            .elevation
            .first()
            .copied()
            .ok_or(GeoError::MissingElevation {
                lat: location.0,
                lon: location.1,
            })?;

        if let Ok(mut cache) = self.elevations.write() {
            cache.insert(key, elevation);
        } else {
            warn!("elevation cache lock poisoned; skipping insert");
        }
        Ok(elevation)
    }

    pub async fn place_name(&self, location: LatLon) -> Result<String, GeoError> {
        let key = cache_key(location);
        if let Ok(cache) = self.names.read() {
            if let Some(name) = cache.get(&key) {
                return Ok(name.clone());
            }
        }

        let url = format!(
            "{}?lat={}&lon={}&format=jsonv2&zoom=10",
            REVERSE_GEOCODE_URL, location.0, location.1
        );
        let response: ReverseGeocodeResponse = self.get_json(&url).await?;

        if let Ok(mut cache) = self.names.write() {
            cache.insert(key, response.display_name.clone());
        } else {
            warn!("place-name cache lock poisoned; skipping insert");
        }
        Ok(response.display_name)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, GeoError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GeoError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    GeoError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    GeoError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| GeoError::Decode(url.to_string(), e))
    }
}

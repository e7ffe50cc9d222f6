use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode provider response for {0}")]
    Decode(String, #[source] serde_json::Error),

    #[error("Request to {url} failed after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<ProviderError>,
    },
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode resolver response for {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("No elevation returned for ({lat}, {lon})")]
    MissingElevation { lat: f64, lon: f64 },
}

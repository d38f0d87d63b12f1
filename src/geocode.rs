//! Reverse Geocoding
//!
//! Resolves coordinates to a settlement name through a Nominatim-compatible
//! `/reverse` endpoint. Lookups are best effort: every failure collapses to
//! [`UNKNOWN_LOCATION`].

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GeocodeConfig;

/// Returned whenever a place name cannot be resolved
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Address fields consulted, in priority order
const PLACE_FIELDS: [&str; 3] = ["city", "town", "village"];

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response has no city, town or village")]
    NoPlaceName,
}

/// First non-empty `address.city`, `address.town` or `address.village`
pub fn extract_place_name(body: &Value) -> Option<String> {
    let address = body.get("address")?;
    PLACE_FIELDS
        .iter()
        .filter_map(|field| address.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

/// HTTP client for reverse lookups
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl ReverseGeocoder {
    pub fn new(config: &GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use a preconfigured client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve coordinates, reporting why a lookup failed
    pub async fn lookup(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        debug!("Reverse geocoding ({}, {}) via {}", lat, lon, url);

        let body: Value = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_place_name(&body).ok_or(GeocodeError::NoPlaceName)
    }

    /// Resolve coordinates, substituting [`UNKNOWN_LOCATION`] on any failure
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> String {
        match self.lookup(lat, lon).await {
            Ok(name) => name,
            Err(e) => {
                warn!("Reverse geocoding ({}, {}) failed: {}", lat, lon, e);
                UNKNOWN_LOCATION.to_string()
            }
        }
    }
}

/// One-off lookup against the public Nominatim service
pub async fn reverse_geocode(lat: f64, lon: f64) -> String {
    match ReverseGeocoder::new(&GeocodeConfig::default()) {
        Ok(geocoder) => geocoder.reverse_geocode(lat, lon).await,
        Err(e) => {
            warn!("Failed to build geocoding client: {}", e);
            UNKNOWN_LOCATION.to_string()
        }
    }
}

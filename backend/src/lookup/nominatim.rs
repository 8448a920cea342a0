//! OpenStreetMap Nominatim geocoder.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use super::error::{LookupError, LookupResult, LookupService};
use super::provider::Geocoder;
use crate::models::GeoCoordinate;

/// Public Nominatim endpoint.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Decode a `/search?format=json` response body into the first match.
pub fn parse_search_response(body: &str) -> LookupResult<Option<GeoCoordinate>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|e| LookupError::decode(LookupService::Geocoder, e.to_string()))?;

    let Some(first) = hits.into_iter().next() else {
        return Ok(None);
    };

    let parse = |field: &str, value: &str| {
        value.trim().parse::<f64>().map_err(|_| {
            LookupError::decode(
                LookupService::Geocoder,
                format!("{} '{}' is not a number", field, value),
            )
        })
    };
    let latitude = parse("lat", &first.lat)?;
    let longitude = parse("lon", &first.lon)?;

    GeoCoordinate::new(latitude, longitude).map(Some).ok_or_else(|| {
        LookupError::decode(
            LookupService::Geocoder,
            format!("coordinate ({}, {}) out of range", latitude, longitude),
        )
    })
}

/// Geocoder backed by the Nominatim search API.
#[cfg(feature = "remote-lookup")]
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "remote-lookup")]
impl NominatimGeocoder {
    /// `client` should carry the configured timeout and User-Agent; Nominatim
    /// rejects requests without an identifying agent.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[cfg(feature = "remote-lookup")]
#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn locate(&self, place: &str) -> LookupResult<Option<GeoCoordinate>> {
        let service = LookupService::Geocoder;
        debug!("Geocoding place '{}'", place);

        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?
            .error_for_status()
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        parse_search_response(&body)
    }
}

//! sunrise-sunset.org sunrise lookup.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Deserialize;

use super::error::{LookupError, LookupResult, LookupService};
use super::provider::SunriseService;
use crate::models::GeoCoordinate;
use crate::services::normalize::parse_utc_instant;

/// Public sunrise-sunset.org endpoint.
pub const DEFAULT_SUNRISE_URL: &str = "https://api.sunrise-sunset.org";

#[derive(Debug, Deserialize)]
struct SunriseEnvelope {
    status: String,
    // An object on success, an empty string on error responses.
    #[serde(default)]
    results: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct SunriseResults {
    sunrise: Option<String>,
}

/// Decode a `/json?formatted=0` response body into the sunrise instant.
///
/// A non-`OK` status or a missing sunrise yields `None`. The service reports
/// days without a sunrise as the Unix epoch; those also yield `None`.
pub fn parse_sunrise_response(body: &str) -> LookupResult<Option<DateTime<Utc>>> {
    let envelope: SunriseEnvelope = serde_json::from_str(body)
        .map_err(|e| LookupError::decode(LookupService::Sunrise, e.to_string()))?;

    if envelope.status != "OK" {
        debug!("Sunrise service returned status {}", envelope.status);
        return Ok(None);
    }

    let results: SunriseResults = serde_json::from_value(envelope.results)
        .map_err(|e| LookupError::decode(LookupService::Sunrise, e.to_string()))?;
    let Some(raw) = results.sunrise else {
        return Ok(None);
    };

    let instant = parse_utc_instant(&raw)
        .map_err(|e| LookupError::decode(LookupService::Sunrise, e.to_string()))?;

    Ok((instant.timestamp() > 1).then_some(instant))
}

/// Sunrise lookup backed by the sunrise-sunset.org API.
#[cfg(feature = "remote-lookup")]
#[derive(Debug, Clone)]
pub struct SunriseSunsetService {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "remote-lookup")]
impl SunriseSunsetService {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn json_url(&self) -> String {
        format!("{}/json", self.base_url)
    }
}

#[cfg(feature = "remote-lookup")]
#[async_trait]
impl SunriseService for SunriseSunsetService {
    async fn sunrise_utc(
        &self,
        at: GeoCoordinate,
        date: NaiveDate,
    ) -> LookupResult<Option<DateTime<Utc>>> {
        let service = LookupService::Sunrise;
        debug!(
            "Fetching sunrise for ({}, {}) on {}",
            at.latitude(),
            at.longitude(),
            date
        );

        let response = self
            .client
            .get(self.json_url())
            .query(&[
                ("lat", at.latitude().to_string()),
                ("lng", at.longitude().to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
                ("formatted", "0".to_string()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        // The API answers invalid requests with HTTP 400 and a JSON status.
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        parse_sunrise_response(&body)
    }
}

//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies are deserialized leniently (every field optional) and then
//! validated once into [`BirthDetails`]; handlers never pass raw payloads on.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::models::BirthDetails;
use crate::services::{IsthkaalReport, NakshatraReport};

/// Request body shared by both calculation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub dob: Option<String>,
    /// `HH:MM` or `HH:MM:SS`
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub birth_place: Option<String>,
}

impl TryFrom<BirthRequest> for BirthDetails {
    type Error = CalcError;

    fn try_from(request: BirthRequest) -> Result<Self, Self::Error> {
        BirthDetails::parse(
            request.name.as_deref(),
            request.dob.as_deref(),
            request.birth_time.as_deref(),
            request.birth_place.as_deref(),
        )
    }
}

/// Response of `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsthkaalResponse {
    pub name: String,
    pub dob: String,
    /// `"<ghati> घटी <pal> पल"`
    pub isthkaal: String,
    /// Local sunrise, `HH:MM:SS`
    pub sunrise: String,
}

impl IsthkaalResponse {
    pub fn new(birth: &BirthDetails, report: &IsthkaalReport) -> Self {
        Self {
            name: birth.name.clone(),
            dob: birth.dob_string(),
            isthkaal: report.isthkaal.label(),
            sunrise: report.sunrise_local.to_string(),
        }
    }
}

/// Response of `POST /calculate-nakshatra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraResponse {
    pub name: String,
    pub dob: String,
    pub nakshatra: String,
    pub nakshatra_pada: String,
    pub rashi: String,
    /// Syllables a name traditionally starts with
    pub rashi_naam: String,
    pub rashi_reason: String,
}

impl NakshatraResponse {
    pub fn new(birth: &BirthDetails, report: &NakshatraReport) -> Self {
        let position = &report.position;
        Self {
            name: birth.name.clone(),
            dob: birth.dob_string(),
            nakshatra: position.nakshatra_name().to_string(),
            nakshatra_pada: position.pada_label().to_string(),
            rashi: position.rashi().name.to_string(),
            rashi_naam: position.naming_letters().to_string(),
            rashi_reason: position.reason(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Zone used for birth and sunrise clock times
    pub timezone: String,
}

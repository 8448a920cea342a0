//! HTTP handlers for the REST API.
//!
//! Each handler validates the request body once, runs one pipeline and maps
//! the first failure to a status code.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use super::dto::{BirthRequest, HealthResponse, IsthkaalResponse, NakshatraResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::BirthDetails;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn validate(payload: Result<Json<BirthRequest>, JsonRejection>) -> Result<BirthDetails, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;
    BirthDetails::try_from(request).map_err(|e| {
        warn!("Invalid birth details: {}", e);
        AppError::from(e)
    })
}

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timezone: state.calculator.timezone().to_string(),
    }))
}

/// POST /calculate
///
/// Isthkaal (ghati/pal since local sunrise) for a birth time and place.
pub async fn calculate_isthkaal(
    State(state): State<AppState>,
    payload: Result<Json<BirthRequest>, JsonRejection>,
) -> HandlerResult<IsthkaalResponse> {
    let birth = validate(payload)?;
    let report = state.calculator.isthkaal(&birth).await?;

    info!(
        "Isthkaal for {} on {}: {}",
        birth.birth_place, birth.dob, report.isthkaal
    );
    Ok(Json(IsthkaalResponse::new(&birth, &report)))
}

/// POST /calculate-nakshatra
///
/// Nakshatra, Pada and Rashi of the Moon at the birth instant.
pub async fn calculate_nakshatra(
    State(state): State<AppState>,
    payload: Result<Json<BirthRequest>, JsonRejection>,
) -> HandlerResult<NakshatraResponse> {
    let birth = validate(payload)?;
    let report = state.calculator.nakshatra(&birth).await?;

    info!(
        "Nakshatra for {} on {} {}: {}",
        birth.birth_place, birth.dob, birth.birth_time, report.position
    );
    Ok(Json(NakshatraResponse::new(&birth, &report)))
}

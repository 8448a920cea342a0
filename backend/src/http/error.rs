//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
    /// Failure class for programmatic handling
    pub code: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The body was not valid JSON for the endpoint
    MalformedBody(String),
    /// A pipeline stage failed
    Calc(CalcError),
    /// The whole request exceeded its time budget
    Timeout,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Calc(CalcError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Calc(CalcError::Resolution(_)) => StatusCode::BAD_REQUEST,
            AppError::Calc(CalcError::UpstreamData(_)) => StatusCode::BAD_GATEWAY,
            AppError::Calc(CalcError::Computation(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::MalformedBody(msg) => ApiError::new("INVALID_INPUT", msg),
            AppError::Calc(err) => ApiError::new(err.code(), err.to_string()),
            AppError::Timeout => ApiError::new("UPSTREAM_UNAVAILABLE", "Request timed out"),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::Calc(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// Maps errors raised by router middleware (the request timeout) to JSON.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Calc(CalcError::Computation(format!("Unhandled error: {}", err)))
    }
}

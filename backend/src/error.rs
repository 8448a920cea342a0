//! Error taxonomy shared by both calculation pipelines.
//!
//! Every stage returns [`CalcResult`]; the first failure short-circuits the
//! pipeline and its variant decides how the failure is reported.

/// Result type for pipeline stages.
pub type CalcResult<T> = Result<T, CalcError>;

/// Failure classes of a calculation request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A required field is missing or malformed (bad date/time, DST gap).
    /// Raised before any downstream lookup is made.
    #[error("{0}")]
    InvalidInput(String),

    /// The birth place did not resolve to coordinates.
    #[error("{0}")]
    Resolution(String),

    /// A lookup collaborator (geocoder, sunrise service, ephemeris) gave no
    /// usable value.
    #[error("{0}")]
    UpstreamData(String),

    /// Classification or conversion could not proceed despite valid inputs.
    #[error("{0}")]
    Computation(String),
}

impl CalcError {
    /// Stable machine-readable code for the failure class.
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput(_) => "INVALID_INPUT",
            CalcError::Resolution(_) => "RESOLUTION_FAILED",
            CalcError::UpstreamData(_) => "UPSTREAM_UNAVAILABLE",
            CalcError::Computation(_) => "COMPUTATION_ERROR",
        }
    }

    /// Whether the caller can fix the failure by changing the request.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, CalcError::InvalidInput(_) | CalcError::Resolution(_))
    }
}

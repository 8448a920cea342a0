//! Error types for outbound lookups.

use std::fmt;

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Which collaborator a lookup error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupService {
    Geocoder,
    Sunrise,
}

impl fmt::Display for LookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupService::Geocoder => "geocoder",
            LookupService::Sunrise => "sunrise",
        };
        f.write_str(name)
    }
}

/// Failure talking to a lookup collaborator. Lookups are never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// Connection or request failure.
    #[error("Transport error: {message} [service={service}]")]
    Transport {
        service: LookupService,
        message: String,
    },

    /// The bounded request timeout elapsed.
    #[error("Timeout error: no response within the configured timeout [service={service}]")]
    Timeout { service: LookupService },

    /// Non-success HTTP status.
    #[error("Status error: HTTP {status} [service={service}]")]
    Status { service: LookupService, status: u16 },

    /// The response body could not be decoded.
    #[error("Decode error: {message} [service={service}]")]
    Decode {
        service: LookupService,
        message: String,
    },

    /// Client construction or settings problem.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LookupError {
    pub fn transport(service: LookupService, message: impl Into<String>) -> Self {
        Self::Transport {
            service,
            message: message.into(),
        }
    }

    pub fn decode(service: LookupService, message: impl Into<String>) -> Self {
        Self::Decode {
            service,
            message: message.into(),
        }
    }

    /// The collaborator the error originated from, if known.
    pub fn service(&self) -> Option<LookupService> {
        match self {
            LookupError::Transport { service, .. }
            | LookupError::Timeout { service }
            | LookupError::Status { service, .. }
            | LookupError::Decode { service, .. } => Some(*service),
            LookupError::Configuration(_) => None,
        }
    }

    /// Classify a reqwest failure.
    #[cfg(feature = "remote-lookup")]
    pub(crate) fn from_reqwest(service: LookupService, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { service }
        } else if let Some(status) = err.status() {
            Self::Status {
                service,
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::decode(service, err.to_string())
        } else {
            Self::transport(service, err.to_string())
        }
    }
}

//! Collaborator traits consumed by the calculation pipelines.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::error::LookupResult;
use crate::models::{GeoCoordinate, JulianDay};

/// Resolves a free-form place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First matching coordinate, or `None` when the place is unknown.
    async fn locate(&self, place: &str) -> LookupResult<Option<GeoCoordinate>>;
}

/// Looks up the civil sunrise instant for a coordinate and date.
#[async_trait]
pub trait SunriseService: Send + Sync {
    /// Sunrise in UTC, or `None` when the service has no value (e.g. polar
    /// day or night).
    async fn sunrise_utc(
        &self,
        at: GeoCoordinate,
        date: NaiveDate,
    ) -> LookupResult<Option<DateTime<Utc>>>;
}

/// Computes the Moon's ecliptic longitude.
pub trait Ephemeris: Send + Sync {
    /// Longitude for the given Julian day (UT), or `None` when it cannot be
    /// determined.
    fn lunar_longitude(&self, jd: JulianDay) -> Option<qtty::Degrees>;
}

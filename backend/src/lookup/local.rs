//! In-memory lookup collaborators for tests and offline development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use qtty::Degrees;

use super::error::{LookupError, LookupResult};
use super::provider::{Ephemeris, Geocoder, SunriseService};
use crate::models::{GeoCoordinate, JulianDay};

/// Geocoder over a fixed, case-insensitive table of places.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, GeoCoordinate>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place. Out-of-range coordinates are skipped.
    pub fn with_place(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        if let Some(coord) = GeoCoordinate::new(latitude, longitude) {
            self.places.insert(name.trim().to_lowercase(), coord);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn locate(&self, place: &str) -> LookupResult<Option<GeoCoordinate>> {
        Ok(self.places.get(&place.trim().to_lowercase()).copied())
    }
}

/// Sunrise service returning the same UTC clock time on every date.
#[derive(Debug, Clone)]
pub struct FixedSunrise {
    utc_time: Option<NaiveTime>,
    failure: Option<LookupError>,
}

impl FixedSunrise {
    /// Sunrise at `utc_time` on whatever date is requested.
    pub fn at(utc_time: NaiveTime) -> Self {
        Self {
            utc_time: Some(utc_time),
            failure: None,
        }
    }

    /// A service that never has a sunrise.
    pub fn unavailable() -> Self {
        Self {
            utc_time: None,
            failure: None,
        }
    }

    /// A service whose every call fails with `error`.
    pub fn failing(error: LookupError) -> Self {
        Self {
            utc_time: None,
            failure: Some(error),
        }
    }
}

#[async_trait]
impl SunriseService for FixedSunrise {
    async fn sunrise_utc(
        &self,
        _at: GeoCoordinate,
        date: NaiveDate,
    ) -> LookupResult<Option<DateTime<Utc>>> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.utc_time.map(|t| date.and_time(t).and_utc()))
    }
}

/// Ephemeris returning a constant longitude (or nothing).
#[derive(Debug, Clone, Copy)]
pub struct FixedEphemeris(pub Option<Degrees>);

impl FixedEphemeris {
    pub fn degrees(value: f64) -> Self {
        Self(Some(Degrees::new(value)))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl Ephemeris for FixedEphemeris {
    fn lunar_longitude(&self, _jd: JulianDay) -> Option<Degrees> {
        self.0
    }
}

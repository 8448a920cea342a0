//! Isthkaal and Nakshatra pipelines.
//!
//! Each pipeline runs its stages in order and stops at the first failure:
//!
//! ```text
//! Isthkaal:  place ─► coordinates ─► sunrise (UTC) ─► sunrise (local) ─► ghati/pal
//! Nakshatra: place ─► coordinates ─► localized birth instant ─► Julian day
//!                  ─► lunar longitude ─► Nakshatra / Pada / Rashi
//! ```

use std::sync::Arc;

use chrono_tz::Tz;
use log::{debug, warn};

use super::isthkaal::Isthkaal;
use super::lunar_position::{classify, LunarPosition};
use super::normalize::{julian_day_inputs, localize, utc_to_local_time_of_day};
use crate::error::{CalcError, CalcResult};
use crate::lookup::{Ephemeris, Geocoder, LookupError, LookupProviders, SunriseService};
use crate::models::{BirthDetails, GeoCoordinate, JulianDay, TimeOfDay};

/// Message for a place that does not resolve.
pub const INVALID_PLACE: &str = "Invalid birth place";

/// Message for a missing sunrise.
pub const NO_SUNRISE: &str = "Could not fetch sunrise time";

/// Message for a missing lunar longitude.
pub const NO_LUNAR_LONGITUDE: &str = "Could not determine lunar longitude";

/// Output of the Isthkaal pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct IsthkaalReport {
    pub coordinate: GeoCoordinate,
    /// Sunrise as local wall-clock time in the configured zone.
    pub sunrise_local: TimeOfDay,
    pub isthkaal: Isthkaal,
}

/// Output of the Nakshatra pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraReport {
    pub coordinate: GeoCoordinate,
    pub julian_day: JulianDay,
    pub position: LunarPosition,
}

/// Runs both pipelines against a set of lookup collaborators.
///
/// Cheap to clone; all collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct Calculator {
    geocoder: Arc<dyn Geocoder>,
    sunrise: Arc<dyn SunriseService>,
    ephemeris: Arc<dyn Ephemeris>,
    timezone: Tz,
}

impl Calculator {
    pub fn new(providers: LookupProviders, timezone: Tz) -> Self {
        Self {
            geocoder: providers.geocoder,
            sunrise: providers.sunrise,
            ephemeris: providers.ephemeris,
            timezone,
        }
    }

    /// Zone in which birth and sunrise clock times are expressed.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    async fn resolve_place(&self, place: &str) -> CalcResult<GeoCoordinate> {
        match self.geocoder.locate(place).await {
            Ok(Some(coordinate)) => {
                debug!(
                    "Resolved '{}' to ({}, {})",
                    place,
                    coordinate.latitude(),
                    coordinate.longitude()
                );
                Ok(coordinate)
            }
            Ok(None) => {
                warn!("Place '{}' did not resolve", place);
                Err(CalcError::Resolution(INVALID_PLACE.to_string()))
            }
            Err(e) => Err(upstream("Geocoding failed", e)),
        }
    }

    /// Isthkaal of the birth time relative to local sunrise on the birth date.
    pub async fn isthkaal(&self, birth: &BirthDetails) -> CalcResult<IsthkaalReport> {
        let coordinate = self.resolve_place(&birth.birth_place).await?;

        let sunrise_utc = match self.sunrise.sunrise_utc(coordinate, birth.dob).await {
            Ok(Some(instant)) => instant,
            Ok(None) => {
                warn!("No sunrise for '{}' on {}", birth.birth_place, birth.dob);
                return Err(CalcError::UpstreamData(NO_SUNRISE.to_string()));
            }
            Err(e) => return Err(upstream(NO_SUNRISE, e)),
        };

        let sunrise_local = utc_to_local_time_of_day(sunrise_utc, self.timezone);
        let isthkaal = Isthkaal::between(sunrise_local, birth.birth_time);
        debug!(
            "Sunrise {} UTC -> {} {}; birth {} -> {}",
            sunrise_utc.format("%H:%M:%S"),
            sunrise_local,
            self.timezone,
            birth.birth_time,
            isthkaal
        );

        Ok(IsthkaalReport {
            coordinate,
            sunrise_local,
            isthkaal,
        })
    }

    /// Nakshatra, Pada and Rashi of the Moon at the birth instant.
    ///
    /// The birth place must resolve even though the longitude only depends
    /// on the instant. A birth time that cannot be localized fails before
    /// any lookup is made.
    pub async fn nakshatra(&self, birth: &BirthDetails) -> CalcResult<NakshatraReport> {
        let instant = localize(birth.dob, birth.birth_time, self.timezone)?;
        let coordinate = self.resolve_place(&birth.birth_place).await?;

        let julian_day = julian_day_inputs(&instant).julian_day();

        let Some(longitude) = self.ephemeris.lunar_longitude(julian_day) else {
            warn!("Ephemeris gave no longitude for JD {}", julian_day.value());
            return Err(CalcError::UpstreamData(NO_LUNAR_LONGITUDE.to_string()));
        };

        let position = classify(longitude)?;
        debug!("JD {:.5}: {}", julian_day.value(), position);

        Ok(NakshatraReport {
            coordinate,
            julian_day,
            position,
        })
    }
}

fn upstream(context: &str, err: LookupError) -> CalcError {
    warn!("{}: {}", context, err);
    CalcError::UpstreamData(format!("{}: {}", context, err))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;

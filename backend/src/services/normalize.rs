//! Timezone and Julian-day normalization.
//!
//! Civil times are interpreted in a configured IANA zone through the tz
//! database, so DST and historical offset changes are honoured.

use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{CalcError, CalcResult};
use crate::models::{JulianDay, TimeOfDay};

/// Calendar form of an absolute instant as consumed by the ephemeris:
/// UTC date plus fractional hour of that date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDayInputs {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: f64,
}

impl JulianDayInputs {
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_calendar(self.year, self.month, self.day, self.hour)
    }
}

/// Parse an IANA zone name such as `Asia/Kolkata`.
pub fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| format!("Unknown IANA timezone '{}'", name))
}

/// Attach `tz` to a civil date and time.
///
/// Local times that are skipped or repeated by a DST transition cannot be
/// localized unambiguously and are rejected as input faults.
pub fn localize(date: NaiveDate, time: TimeOfDay, tz: Tz) -> CalcResult<DateTime<Tz>> {
    let naive = date.and_time(time.as_naive());
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(_, _) => Err(CalcError::InvalidInput(format!(
            "Birth time {} is ambiguous in {} (DST transition)",
            naive, tz
        ))),
        LocalResult::None => Err(CalcError::InvalidInput(format!(
            "Birth time {} does not exist in {} (DST transition)",
            naive, tz
        ))),
    }
}

/// Split an instant into UTC calendar date and fractional hour.
pub fn julian_day_inputs<T: TimeZone>(instant: &DateTime<T>) -> JulianDayInputs {
    let utc = instant.with_timezone(&Utc);
    JulianDayInputs {
        year: utc.year(),
        month: utc.month(),
        day: utc.day(),
        hour: utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0,
    }
}

/// Local wall-clock time of a UTC instant in `tz`.
pub fn utc_to_local_time_of_day(instant: DateTime<Utc>, tz: Tz) -> TimeOfDay {
    TimeOfDay::from(instant.with_timezone(&tz).time())
}

/// Parse an ISO-8601 / RFC 3339 timestamp (with offset) into UTC.
pub fn parse_utc_instant(text: &str) -> CalcResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CalcError::UpstreamData(format!("Invalid timestamp '{}': {}", text, e)))
}

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use crate::error::CalcError;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Wall-clock time of day, independent of any reference date.
///
/// Accepts both `HH:MM` and `HH:MM:SS`; the short form is treated as
/// `HH:MM:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from components. Returns `None` for out-of-range values.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse `HH:MM:SS` or `HH:MM`.
    pub fn parse(text: &str) -> Result<Self, CalcError> {
        let text = text.trim();
        NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .map(Self)
            .map_err(|_| {
                CalcError::InvalidInput(format!(
                    "Invalid time '{}': expected HH:MM or HH:MM:SS",
                    text
                ))
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Whole seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // Drop sub-second precision; only whole seconds are meaningful here.
        Self(time.with_nanosecond(0).unwrap_or(time))
    }
}

impl FromStr for TimeOfDay {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// Julian Day number (continuous day count, days since -4712-01-01 12:00).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(qtty::Days);

impl JulianDay {
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw Julian Day value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Days elapsed since J2000.0.
    pub fn since_j2000(&self) -> qtty::Days {
        self.0 - qtty::Days::new(J2000)
    }

    /// Julian Day from a proleptic Gregorian calendar date and a fractional
    /// hour of that day (Meeus, *Astronomical Algorithms*, ch. 7).
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: f64) -> Self {
        let (y, m) = if month <= 2 {
            (year as f64 - 1.0, month as f64 + 12.0)
        } else {
            (year as f64, month as f64)
        };
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b
            - 1524.5;
        Self::new(jd + qtty::Hours::new(hour).to::<qtty::Day>().value())
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.since_j2000().value() / 36_525.0
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

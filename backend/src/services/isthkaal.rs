//! Isthkaal: time elapsed since local sunrise, in ghati and pal.
//!
//! One ghati is 24 minutes and one ghati is 60 pal, so one pal is 24 seconds.
//! A birth clock time earlier than sunrise belongs to the previous
//! sunrise-to-sunrise cycle; the elapsed time wraps explicitly modulo 24h.

use std::fmt;

use qtty::{Minutes, Second, Seconds};

use crate::models::{TimeOfDay, SECONDS_PER_DAY};

/// Length of one ghati.
pub const GHATI: Minutes = Minutes::new(24.0);

/// Pal in one ghati.
pub const PAL_PER_GHATI: u32 = 60;

const SECONDS_PER_GHATI: u32 = GHATI.to::<Second>().value() as u32;
const SECONDS_PER_PAL: u32 = SECONDS_PER_GHATI / PAL_PER_GHATI;

/// Elapsed time since sunrise in traditional units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isthkaal {
    pub ghati: u32,
    pub pal: u32,
}

impl Isthkaal {
    /// Isthkaal of `birth` relative to `sunrise` (both local wall-clock times).
    pub fn between(sunrise: TimeOfDay, birth: TimeOfDay) -> Self {
        Self::from_elapsed(elapsed(sunrise, birth))
    }

    /// Convert an elapsed duration. Partial pal and negative durations are
    /// truncated.
    pub fn from_elapsed(elapsed: Seconds) -> Self {
        let seconds = elapsed.value().max(0.0) as u32;
        Self {
            ghati: seconds / SECONDS_PER_GHATI,
            pal: (seconds % SECONDS_PER_GHATI) / SECONDS_PER_PAL,
        }
    }

    /// Display label, e.g. `"22 घटी 30 पल"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Isthkaal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} घटी {} पल", self.ghati, self.pal)
    }
}

/// Time from `sunrise` to `birth`, wrapped into [0, 24h).
pub fn elapsed(sunrise: TimeOfDay, birth: TimeOfDay) -> Seconds {
    let diff = birth.seconds_from_midnight() as i64 - sunrise.seconds_from_midnight() as i64;
    Seconds::new(diff.rem_euclid(SECONDS_PER_DAY as i64) as f64)
}

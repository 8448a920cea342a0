//! Core value types: time of day, Julian day, coordinates, birth details.

pub mod birth;
pub mod geo;
pub mod time;


pub use birth::{parse_date, BirthDetails, MISSING_FIELDS};
pub use geo::GeoCoordinate;
pub use time::{JulianDay, TimeOfDay, J2000, SECONDS_PER_DAY};

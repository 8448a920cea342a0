//! # Janma Rust Backend
//!
//! Vedic birth-time calculations served over HTTP.
//!
//! Given a name, date of birth, time of birth and birth place, the crate
//! computes:
//!
//! - **Isthkaal**: time elapsed since local sunrise, in ghati and pal
//! - **Nakshatra**: lunar mansion, its quarter (Pada) and the Moon sign
//!   (Rashi) with the syllables names traditionally begin with
//!
//! ## Architecture
//!
//! - [`models`]: validated birth details, civil time and Julian days
//! - [`services`]: classification, Isthkaal arithmetic and the two pipelines
//! - [`lookup`]: geocoding, sunrise and ephemeris collaborators
//! - [`config`]: layered service configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Outbound lookups are behind the `remote-lookup` feature; the HTTP layer is
//! behind `http-server`. Both are enabled by default.

pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{CalcError, CalcResult};

//! External lookup collaborators: geocoding, sunrise times, lunar ephemeris.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Pipelines (services::pipeline::Calculator)              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │  Arc<dyn Geocoder / SunriseService / Ephemeris>
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Traits (provider.rs)                                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//!     ┌───────────────┼──────────────────────┐
//!     ▼               ▼                      ▼
//!  Nominatim     sunrise-sunset.org     Meeus lunar series
//!  (reqwest)     (reqwest)              (in-process)
//!
//!  StaticGeocoder / FixedSunrise / FixedEphemeris (in-memory, tests)
//! ```
//!
//! Outbound calls use one shared `reqwest::Client` with a bounded timeout.
//! Nothing is retried; the first failure is reported to the caller.

pub mod ephemeris;
pub mod error;
pub mod factory;
pub mod local;
pub mod nominatim;
pub mod provider;
pub mod sunrise_sunset;

pub use ephemeris::MeeusLunarEphemeris;
pub use error::{LookupError, LookupResult, LookupService};
pub use factory::{LookupFactory, LookupProviders};
pub use local::{FixedEphemeris, FixedSunrise, StaticGeocoder};
#[cfg(feature = "remote-lookup")]
pub use nominatim::NominatimGeocoder;
pub use provider::{Ephemeris, Geocoder, SunriseService};
#[cfg(feature = "remote-lookup")]
pub use sunrise_sunset::SunriseSunsetService;

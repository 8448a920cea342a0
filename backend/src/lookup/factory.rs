//! Construction of lookup collaborators from configuration.

use std::sync::Arc;

use super::ephemeris::MeeusLunarEphemeris;
use super::error::LookupResult;
use super::local::{FixedEphemeris, FixedSunrise, StaticGeocoder};
use super::provider::{Ephemeris, Geocoder, SunriseService};
use crate::config::LookupSettings;

/// The three collaborators a calculator needs.
#[derive(Clone)]
pub struct LookupProviders {
    pub geocoder: Arc<dyn Geocoder>,
    pub sunrise: Arc<dyn SunriseService>,
    pub ephemeris: Arc<dyn Ephemeris>,
}

/// Factory for [`LookupProviders`].
pub struct LookupFactory;

impl LookupFactory {
    /// Network-backed geocoder and sunrise service sharing one HTTP client,
    /// with the in-process lunar ephemeris.
    ///
    /// # Errors
    /// Returns [`super::LookupError::Configuration`] if the HTTP client
    /// cannot be built.
    #[cfg(feature = "remote-lookup")]
    pub fn create_remote(settings: &LookupSettings) -> LookupResult<LookupProviders> {
        use super::error::LookupError;
        use super::nominatim::NominatimGeocoder;
        use super::sunrise_sunset::SunriseSunsetService;

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| LookupError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(LookupProviders {
            geocoder: Arc::new(NominatimGeocoder::new(
                client.clone(),
                settings.geocoder_url.clone(),
            )),
            sunrise: Arc::new(SunriseSunsetService::new(
                client,
                settings.sunrise_url.clone(),
            )),
            ephemeris: Arc::new(MeeusLunarEphemeris::new()),
        })
    }

    /// In-memory collaborators.
    pub fn create_local(
        geocoder: StaticGeocoder,
        sunrise: FixedSunrise,
        ephemeris: Option<FixedEphemeris>,
    ) -> LookupProviders {
        let ephemeris: Arc<dyn Ephemeris> = match ephemeris {
            Some(fixed) => Arc::new(fixed),
            None => Arc::new(MeeusLunarEphemeris::new()),
        };
        LookupProviders {
            geocoder: Arc::new(geocoder),
            sunrise: Arc::new(sunrise),
            ephemeris,
        }
    }
}

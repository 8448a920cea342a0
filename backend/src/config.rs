//! Service configuration from `janma.toml` and environment variables.
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file, then environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;

use crate::lookup::nominatim::DEFAULT_NOMINATIM_URL;
use crate::lookup::sunrise_sunset::DEFAULT_SUNRISE_URL;
use crate::services::normalize::parse_timezone;

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub calendar: CalendarSettings,
    pub lookup: LookupSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// IP address or host name.
    pub host: String,
    pub port: u16,
    /// Time budget for a whole request, outbound lookups included.
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Civil-time settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// IANA zone in which birth times and sunrise are expressed.
    pub timezone: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

/// Outbound lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    pub geocoder_url: String,
    pub sunrise_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_NOMINATIM_URL.to_string(),
            sunrise_url: DEFAULT_SUNRISE_URL.to_string(),
            user_agent: format!("JanmaCalculator/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10,
        }
    }
}

impl LookupSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServiceConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `janma.toml` from the first standard location that has one.
    ///
    /// Searches the current directory, `backend/` and the parent directory.
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("janma.toml"),
            PathBuf::from("backend/janma.toml"),
            PathBuf::from("../janma.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Defaults, then the config file (if any), then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?.unwrap_or_default();
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// # Environment Variables
    /// - `HOST`: bind host
    /// - `PORT`: bind port
    /// - `REQUEST_TIMEOUT_SECS`: time budget for a whole request
    /// - `JANMA_TIMEZONE`: IANA timezone for civil times
    /// - `GEOCODER_URL`: Nominatim base URL
    /// - `SUNRISE_URL`: sunrise-sunset.org base URL
    /// - `LOOKUP_USER_AGENT`: User-Agent for outbound lookups
    /// - `LOOKUP_TIMEOUT_SECS`: per-request lookup timeout
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_number("PORT", &port)?;
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = parse_number("REQUEST_TIMEOUT_SECS", &secs)?;
        }
        if let Some(tz) = lookup("JANMA_TIMEZONE") {
            self.calendar.timezone = tz;
        }
        if let Some(url) = lookup("GEOCODER_URL") {
            self.lookup.geocoder_url = url;
        }
        if let Some(url) = lookup("SUNRISE_URL") {
            self.lookup.sunrise_url = url;
        }
        if let Some(agent) = lookup("LOOKUP_USER_AGENT") {
            self.lookup.user_agent = agent;
        }
        if let Some(secs) = lookup("LOOKUP_TIMEOUT_SECS") {
            self.lookup.timeout_secs = parse_number("LOOKUP_TIMEOUT_SECS", &secs)?;
        }
        Ok(())
    }

    /// Check values that cannot be validated by deserialization alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timezone()?;
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "server.host".to_string(),
                value: String::new(),
                reason: "host must not be empty".to_string(),
            });
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.request_timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        if self.lookup.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "lookup.timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        if self.lookup.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "lookup.user_agent".to_string(),
                value: String::new(),
                reason: "Nominatim requires an identifying User-Agent".to_string(),
            });
        }
        Ok(())
    }

    /// The configured timezone.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        parse_timezone(&self.calendar.timezone).map_err(|reason| ConfigError::InvalidValue {
            key: "calendar.timezone".to_string(),
            value: self.calendar.timezone.clone(),
            reason,
        })
    }

    /// Socket address to bind the HTTP listener to. Host names are resolved
    /// and the first address is used.
    pub async fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: "server.host".to_string(),
            value: format!("{}:{}", host, self.server.port),
            reason,
        };

        let mut addrs = tokio::net::lookup_host((host, self.server.port))
            .await
            .map_err(|e| invalid(e.to_string()))?;
        addrs
            .next()
            .ok_or_else(|| invalid("host did not resolve to any address".to_string()))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: "expected a non-negative integer".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 10000);
        assert_eq!(config.calendar.timezone, "Asia/Kolkata");
        assert_eq!(config.lookup.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
        assert_eq!(config.timezone().unwrap(), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
[server]
port = 8080

[calendar]
timezone = "Asia/Kathmandu"
"#;
        let config = ServiceConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.timezone().unwrap(), chrono_tz::Asia::Kathmandu);
        assert_eq!(config.lookup.geocoder_url, DEFAULT_NOMINATIM_URL);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = ServiceConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_bind_addr_accepts_host_names() {
        let mut config = ServiceConfig::default();
        config.server.host = "localhost".to_string();
        config.server.port = 8081;
        assert!(config.validate().is_ok());
        let addr = config.bind_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8081);
    }

    #[test]
    fn test_zero_request_timeout_fails_validation() {
        let mut config = ServiceConfig::default();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_env_overrides() {
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(vars(&[
                ("PORT", "3000"),
                ("HOST", "127.0.0.1"),
                ("JANMA_TIMEZONE", "Europe/London"),
                ("LOOKUP_TIMEOUT_SECS", "3"),
                ("SUNRISE_URL", "http://localhost:9999"),
                ("REQUEST_TIMEOUT_SECS", "45"),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr().await.unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(45));
        assert_eq!(config.timezone().unwrap(), chrono_tz::Europe::London);
        assert_eq!(config.lookup.timeout_secs, 3);
        assert_eq!(config.lookup.sunrise_url, "http://localhost:9999");
    }

    #[test]
    fn test_bad_port_override() {
        let mut config = ServiceConfig::default();
        let err = config.apply_overrides(vars(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_timezone_fails_validation() {
        let mut config = ServiceConfig::default();
        config.calendar.timezone = "Nowhere/Special".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let mut config = ServiceConfig::default();
        config.lookup.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ServiceConfig::from_file("/definitely/not/here/janma.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

//! Configuration management for the `SkyBrief` service
//!
//! Handles loading configuration from files and environment variables,
//! with validation for all settings.

use crate::SkyBriefError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `SkyBrief` service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyBriefConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream weather feed configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the service listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Browser origins allowed by the CORS layer
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Upstream aviationweather.gov and NOAA endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// METAR JSON endpoint
    #[serde(default = "default_metar_url")]
    pub metar_url: String,
    /// TAF JSON endpoint
    #[serde(default = "default_taf_url")]
    pub taf_url: String,
    /// PIREP JSON endpoint
    #[serde(default = "default_pirep_url")]
    pub pirep_url: String,
    /// International SIGMET JSON endpoint
    #[serde(default = "default_sigmet_url")]
    pub sigmet_url: String,
    /// Domestic AIR/SIGMET JSON endpoint
    #[serde(default = "default_airsigmet_url")]
    pub airsigmet_url: String,
    /// NOAA raw METAR text feed (latest report per station)
    #[serde(default = "default_noaa_text_url")]
    pub noaa_text_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

// Default value functions
fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn default_metar_url() -> String {
    "https://aviationweather.gov/api/data/metar".to_string()
}

fn default_taf_url() -> String {
    "https://aviationweather.gov/api/data/taf".to_string()
}

fn default_pirep_url() -> String {
    "https://aviationweather.gov/api/data/pirep".to_string()
}

fn default_sigmet_url() -> String {
    "https://aviationweather.gov/api/data/isigmet".to_string()
}

fn default_airsigmet_url() -> String {
    "https://aviationweather.gov/api/data/airsigmet".to_string()
}

fn default_noaa_text_url() -> String {
    "https://tgftp.nws.noaa.gov/data/observations/metar/stations".to_string()
}

fn default_timeout() -> u32 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            metar_url: default_metar_url(),
            taf_url: default_taf_url(),
            pirep_url: default_pirep_url(),
            sigmet_url: default_sigmet_url(),
            airsigmet_url: default_airsigmet_url(),
            noaa_text_url: default_noaa_text_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for SkyBriefConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl SkyBriefConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from a specified path, falling back to
    /// `skybrief.toml` in the working directory
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("skybrief.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. SKYBRIEF_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("SKYBRIEF")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkyBriefConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.upstream.timeout_seconds == 0 {
            return Err(
                SkyBriefError::config("Upstream timeout must be greater than zero").into(),
            );
        }

        for url in [
            &self.upstream.metar_url,
            &self.upstream.taf_url,
            &self.upstream.pirep_url,
            &self.upstream.sigmet_url,
            &self.upstream.airsigmet_url,
            &self.upstream.noaa_text_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SkyBriefError::config(format!(
                    "Upstream URL must be absolute: {url}"
                ))
                .into());
            }
        }

        for origin in &self.server.allowed_origins {
            if origin.is_empty() {
                return Err(SkyBriefError::config("CORS origin cannot be empty").into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SkyBriefConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8000);
        assert!(config.upstream.metar_url.contains("aviationweather.gov"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = SkyBriefConfig::default();
        config.upstream.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relative_url_rejected() {
        let mut config = SkyBriefConfig::default();
        config.upstream.metar_url = "api/data/metar".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SkyBriefConfig::load_from_path(Some(PathBuf::from(
            "definitely-missing-config.toml",
        )))
        .unwrap();
        assert_eq!(config.server.port, 8000);
    }
}

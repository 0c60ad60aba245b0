//! `SkyBrief` - aviation weather aggregation and route briefing
//!
//! This library fetches METAR, TAF, PIREP and SIGMET data from the public
//! aviationweather.gov feeds, decodes raw METAR reports into structured
//! fields and classifies overall flight-weather severity per station.

pub mod api;
pub mod awc;
pub mod briefing;
pub mod config;
pub mod error;
pub mod metar;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use awc::AwcClient;
pub use briefing::analyzer::{Severity, StationAnalysis};
pub use briefing::route::{AnalyzedStation, LegBriefing, RouteBriefing};
pub use briefing::stations::StationRegistry;
pub use config::SkyBriefConfig;
pub use error::SkyBriefError;
pub use models::{Coordinate, DecodedObservation, SigmetRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkyBriefError>;

/// Process-wide application state shared by all request handlers.
///
/// Built once at startup; the station registry is immutable afterwards and
/// handed to the analyzer by reference.
pub struct AppState {
    /// Loaded service configuration
    pub config: SkyBriefConfig,
    /// Upstream aviationweather.gov client
    pub awc: AwcClient,
    /// ICAO identifier to coordinate registry
    pub stations: StationRegistry,
}

impl AppState {
    /// Build the shared state from a loaded configuration.
    pub fn new(config: SkyBriefConfig) -> Result<Self> {
        let awc = AwcClient::new(config.upstream.clone())?;
        Ok(Self {
            config,
            awc,
            stations: StationRegistry::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_app_state_construction() {
        let state = AppState::new(SkyBriefConfig::default()).unwrap();
        assert!(!state.stations.is_empty());
    }
}

//! Station severity analyzer
//!
//! Combines parsed wind/visibility values, decoded weather phenomena and
//! active SIGMET advisories into an overall severity classification for
//! one station. Pure function of its inputs; safe to run concurrently
//! for different stations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::briefing::{geometry, units};
use crate::models::{Coordinate, DecodedObservation, SigmetRecord};

/// Substitute speed when the wind field does not parse: treat it as calm.
pub const CALM_WIND_FALLBACK_KT: f64 = 0.0;

/// Substitute distance when the visibility field does not parse: treat it
/// as unlimited.
pub const UNLIMITED_VISIBILITY_FALLBACK_MI: f64 = 10.0;

/// Overall flight-weather severity for one station.
///
/// Serialized as the literal display strings the briefing frontend keys
/// its color coding on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// No rule matched
    Clear,
    /// Conditions worth a look before departure
    #[serde(rename = "Significant Weather")]
    Significant,
    /// Hazardous conditions or an active SIGMET over the station
    #[serde(rename = "Severe Weather")]
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Clear => write!(f, "Clear"),
            Severity::Significant => write!(f, "Significant Weather"),
            Severity::Severe => write!(f, "Severe Weather"),
        }
    }
}

/// Severity classification plus the hazards that drove it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationAnalysis {
    /// Overall classification
    pub overall: Severity,
    /// Hazard descriptions; `["None"]` when nothing was found
    pub hazards: Vec<String>,
}

/// Classify one station's weather.
///
/// `coordinate` is the station's registry entry; stations without one
/// skip SIGMET correlation entirely. A SIGMET whose box contains the
/// station forces [`Severity::Severe`] regardless of what the
/// wind/visibility/phenomena rules produced.
#[must_use]
pub fn analyze(
    observation: &DecodedObservation,
    coordinate: Option<Coordinate>,
    sigmets: &[SigmetRecord],
) -> StationAnalysis {
    let wind_kt = units::parse_wind(&observation.wind).unwrap_or(CALM_WIND_FALLBACK_KT);
    let visibility_mi = units::parse_visibility(&observation.visibility)
        .unwrap_or(UNLIMITED_VISIBILITY_FALLBACK_MI);
    // Decoded alongside the rest but not consulted by the rules below.
    let _temperature_c = units::parse_temperature(&observation.temperature).unwrap_or(f64::NAN);

    let phenomena: Vec<String> = observation
        .weather
        .iter()
        .map(|token| token.to_lowercase())
        .collect();
    let mentions = |needle: &str| phenomena.iter().any(|token| token.contains(needle));

    let mut overall = if wind_kt >= 25.0
        || visibility_mi < 3.0
        || mentions("thunderstorm")
        || mentions("tornado")
    {
        Severity::Severe
    } else if wind_kt >= 15.0
        || visibility_mi < 6.0
        || ["rain", "snow", "ice"].iter().any(|needle| mentions(needle))
    {
        Severity::Significant
    } else {
        Severity::Clear
    };

    let mut hazards = Vec::new();
    if let Some(coordinate) = coordinate {
        for sigmet in sigmets {
            if geometry::station_in_box(coordinate, sigmet) {
                hazards.push(format!(
                    "SIGMET: {}",
                    sigmet.hazard.as_deref().unwrap_or("Unknown")
                ));
                overall = Severity::Severe;
            }
        }
    }

    if hazards.is_empty() {
        hazards.push("None".to_string());
    }

    StationAnalysis { overall, hazards }
}

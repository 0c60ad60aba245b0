//! Decoded METAR observation model

use serde::{Deserialize, Serialize};

/// Structured fields decoded from a single raw METAR report.
///
/// All measurement fields are human-readable strings in the shapes the
/// decoder emits (e.g. wind `"W at 15 knots"`, visibility `"10 miles"`,
/// temperature `"22.0 C"`); the unit parsers in [`crate::briefing::units`]
/// recover numeric values from them. An observation is produced once per
/// fetch and never cached or shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedObservation {
    /// Reporting station ICAO identifier
    pub station: String,
    /// Observation time reconstructed from the day/hour/minute group
    pub time: String,
    /// Air temperature, e.g. `"22.0 C"`
    pub temperature: String,
    /// Dew point, e.g. `"18.0 C"`
    pub dew_point: String,
    /// Wind, e.g. `"W at 15 knots, gusting to 25 knots"` or `"calm"`
    pub wind: String,
    /// Visibility, e.g. `"10 miles"` or `"9000 meters"`
    pub visibility: String,
    /// Altimeter setting, e.g. `"29.92 inches"` or `"1013.0 mb"`
    pub pressure: String,
    /// Decoded weather phenomena in report order, e.g. `["light rain"]`
    pub weather: Vec<String>,
    /// Decoded sky layers in report order
    pub sky: Vec<String>,
    /// The raw report text this observation was decoded from
    pub raw: String,
}

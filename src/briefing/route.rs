//! Route briefing composer
//!
//! Runs fetch, decode and analysis for the departure and arrival stations
//! and shapes the result into the briefing response. Both legs share one
//! SIGMET snapshot per request and are evaluated concurrently; a decode
//! failure on either leg fails the whole briefing.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::briefing::analyzer::{self, Severity, StationAnalysis};
use crate::models::{Coordinate, DecodedObservation, SigmetRecord};
use crate::{AppState, Result, metar};

/// Analysis response for a single station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedStation {
    /// Severity classification and hazards
    pub analysis: StationAnalysis,
    /// The decoded observation the analysis was derived from
    pub decoded_metar: DecodedObservation,
}

/// One leg of a route briefing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegBriefing {
    /// Station ICAO identifier
    pub icao: String,
    /// Registry coordinate, absent for unknown stations
    pub coordinate: Option<Coordinate>,
    /// Human-readable summary of the leg's weather
    pub summary_text: String,
    /// Severity classification and hazards
    pub analysis: StationAnalysis,
    /// The decoded observation the analysis was derived from
    pub decoded_metar: DecodedObservation,
}

/// Departure and arrival briefings for one route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteBriefing {
    /// Departure station briefing
    pub departure: LegBriefing,
    /// Arrival station briefing
    pub arrival: LegBriefing,
}

/// Fetch, decode and analyze the latest report for one station.
pub async fn analyzed_station(state: &AppState, icao: &str) -> Result<AnalyzedStation> {
    let icao = icao.to_uppercase();
    let raw = state.awc.raw_metar(&icao).await?;
    let decoded = metar::decode(&raw)?;
    let sigmets = active_sigmets(state).await;
    let analysis = analyzer::analyze(&decoded, state.stations.coordinate(&icao), &sigmets);
    Ok(AnalyzedStation {
        analysis,
        decoded_metar: decoded,
    })
}

/// Compose a briefing for a departure/arrival pair.
pub async fn brief(state: &AppState, departure: &str, arrival: &str) -> Result<RouteBriefing> {
    let sigmets = active_sigmets(state).await;

    let (departure, arrival) = tokio::try_join!(
        brief_leg(state, departure, &sigmets),
        brief_leg(state, arrival, &sigmets),
    )?;

    Ok(RouteBriefing { departure, arrival })
}

/// Current SIGMET snapshot, degrading to an empty list when the feed is
/// unreachable so briefings still classify from the observation alone.
async fn active_sigmets(state: &AppState) -> Vec<SigmetRecord> {
    match state.awc.sigmet_records().await {
        Ok(records) => records,
        Err(err) => {
            warn!("SIGMET feed unavailable, skipping hazard correlation: {err}");
            Vec::new()
        }
    }
}

async fn brief_leg(
    state: &AppState,
    icao: &str,
    sigmets: &[SigmetRecord],
) -> Result<LegBriefing> {
    let icao = icao.to_uppercase();
    let raw = state.awc.raw_metar(&icao).await?;
    let decoded = metar::decode(&raw)?;
    let coordinate = state.stations.coordinate(&icao);
    let analysis = analyzer::analyze(&decoded, coordinate, sigmets);
    let summary_text = compose_summary(&icao, &decoded, &analysis);
    Ok(LegBriefing {
        icao,
        coordinate,
        summary_text,
        analysis,
        decoded_metar: decoded,
    })
}

/// Multi-line leg summary: overall condition, winds, visibility and
/// phenomena, plus a hazards line only when conditions are severe.
#[must_use]
pub fn compose_summary(
    icao: &str,
    observation: &DecodedObservation,
    analysis: &StationAnalysis,
) -> String {
    let mut lines = vec![
        format!("Overall condition at {icao}: {}.", analysis.overall),
        format!("Winds: {}.", observation.wind),
        format!("Visibility: {}.", observation.visibility),
    ];

    if observation.weather.is_empty() {
        lines.push("Phenomena: none reported.".to_string());
    } else {
        lines.push(format!("Phenomena: {}.", observation.weather.join(", ")));
    }

    if analysis.overall == Severity::Severe {
        lines.push(format!("Hazards: {}.", analysis.hazards.join("; ")));
    }

    lines.join("\n")
}

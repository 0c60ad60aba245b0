//! HTTP API surface
//!
//! Proxy endpoints pass the upstream JSON through unchanged; the
//! `analyzed` and `route-weather` endpoints run the briefing core.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;

use crate::briefing::route::{self, AnalyzedStation, RouteBriefing};
use crate::models::DecodedObservation;
use crate::{AppState, Result, metar};

#[derive(Debug, Deserialize)]
pub struct MetarQuery {
    /// Lookback window in hours
    #[serde(default = "default_metar_hours")]
    pub hours: f64,
}

#[derive(Debug, Deserialize)]
pub struct PirepQuery {
    /// Lookback window in hours
    #[serde(default = "default_pirep_hours")]
    pub hours: f64,
    /// Search radius in nautical miles
    #[serde(default = "default_pirep_distance")]
    pub distance: u32,
}

#[derive(Debug, Deserialize)]
pub struct SigmetQuery {
    /// Hazard filter, e.g. `turb` or `ice`
    #[serde(default = "default_sigmet_hazard")]
    pub hazard: String,
    /// Flight level filter
    #[serde(default = "default_sigmet_level")]
    pub level: u32,
    /// Optional snapshot date, RFC 3339
    pub date: Option<String>,
}

fn default_metar_hours() -> f64 {
    1.5
}

fn default_pirep_hours() -> f64 {
    2.0
}

fn default_pirep_distance() -> u32 {
    100
}

fn default_sigmet_hazard() -> String {
    "turb".to_string()
}

fn default_sigmet_level() -> u32 {
    3000
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metar/{icao}", get(get_metar))
        .route("/metar/decoded/{icao}", get(get_metar_decoded))
        .route("/metar/analyzed/{icao}", get(get_metar_analyzed))
        .route("/taf/{icao}", get(get_taf))
        .route("/pirep/{icao}", get(get_pireps))
        .route("/sigmet", get(get_sigmets))
        .route("/airsigmet", get(get_airsigmets))
        .route("/route-weather/{departure}/{arrival}", get(get_route_weather))
        .with_state(state)
}

async fn get_metar(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
    Query(query): Query<MetarQuery>,
) -> Result<Json<Value>> {
    Ok(Json(state.awc.metar(&icao, query.hours).await?))
}

async fn get_metar_decoded(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
) -> Result<Json<DecodedObservation>> {
    let raw = state.awc.raw_metar(&icao).await?;
    Ok(Json(metar::decode(&raw)?))
}

async fn get_metar_analyzed(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
) -> Result<Json<AnalyzedStation>> {
    Ok(Json(route::analyzed_station(&state, &icao).await?))
}

async fn get_taf(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
) -> Result<Json<Value>> {
    Ok(Json(state.awc.taf(&icao).await?))
}

async fn get_pireps(
    State(state): State<Arc<AppState>>,
    Path(icao): Path<String>,
    Query(query): Query<PirepQuery>,
) -> Result<Json<Value>> {
    Ok(Json(state.awc.pireps(&icao, query.hours, query.distance).await?))
}

async fn get_sigmets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SigmetQuery>,
) -> Result<Json<Value>> {
    Ok(Json(
        state
            .awc
            .intl_sigmets(&query.hazard, query.level, query.date.as_deref())
            .await?,
    ))
}

async fn get_airsigmets(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    Ok(Json(state.awc.airsigmets().await?))
}

async fn get_route_weather(
    State(state): State<Arc<AppState>>,
    Path((departure, arrival)): Path<(String, String)>,
) -> Result<Json<RouteBriefing>> {
    Ok(Json(route::brief(&state, &departure, &arrival).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query: MetarQuery = serde_json::from_str("{}").unwrap();
        assert!((query.hours - 1.5).abs() < f64::EPSILON);

        let query: PirepQuery = serde_json::from_str("{}").unwrap();
        assert!((query.hours - 2.0).abs() < f64::EPSILON);
        assert_eq!(query.distance, 100);

        let query: SigmetQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.hazard, "turb");
        assert_eq!(query.level, 3000);
        assert!(query.date.is_none());
    }
}

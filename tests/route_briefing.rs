//! Route briefing tests against a local stand-in for the upstream feeds,
//! exercising the fetch -> decode -> analyze path including its failure
//! modes.

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use skybrief::briefing::route;
use skybrief::{AppState, SkyBriefConfig, SkyBriefError};

const QUIET_REPORT: &str = "KMCI 311853Z 18006KT 10SM FEW250 25/10 A3001 RMK AO2";
const STORM_REPORT: &str = "KMIA 311853Z 09012KT 3SM +TSRA BKN015CB 28/24 A2995 RMK AO2";

async fn station_blob(Path(file): Path<String>) -> Response {
    match file.as_str() {
        "KMCI.TXT" => format!("2026/08/31 18:53\n{QUIET_REPORT}").into_response(),
        "KMIA.TXT" => format!("2026/08/31 18:53\n{STORM_REPORT}").into_response(),
        // A blob whose report line is not a METAR at all.
        "KZZZ.TXT" => "2026/08/31 18:53\nTHIS IS NOT A METAR".to_string().into_response(),
        _ => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// Serve the two-line NOAA text shape and an empty advisory feed on an
/// ephemeral local port, returning the base URL.
async fn spawn_stub_feed() -> String {
    let app = Router::new()
        .route("/stations/{file}", get(station_blob))
        .route("/airsigmet", get(|| async { "[]".to_string() }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(base_url: &str) -> AppState {
    let mut config = SkyBriefConfig::default();
    config.upstream.noaa_text_url = format!("{base_url}/stations");
    config.upstream.airsigmet_url = format!("{base_url}/airsigmet");
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn briefing_covers_both_legs() {
    let base_url = spawn_stub_feed().await;
    let state = state_for(&base_url);

    let briefing = route::brief(&state, "kmci", "kmia").await.unwrap();

    assert_eq!(briefing.departure.icao, "KMCI");
    assert_eq!(briefing.arrival.icao, "KMIA");
    assert!(briefing.departure.summary_text.contains("Clear"));
    assert!(briefing.arrival.summary_text.contains("Severe Weather"));
}

#[tokio::test]
async fn departure_decode_failure_fails_whole_briefing() {
    let base_url = spawn_stub_feed().await;
    let state = state_for(&base_url);

    // The error carries no briefing at all; a valid arrival report must
    // not surface as a partial result.
    let err = route::brief(&state, "KZZZ", "KMCI").await.unwrap_err();
    assert!(matches!(err, SkyBriefError::Decode { .. }));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_arrival_report_fails_whole_briefing() {
    let base_url = spawn_stub_feed().await;
    let state = state_for(&base_url);

    let err = route::brief(&state, "KMCI", "KNON").await.unwrap_err();
    assert!(matches!(err, SkyBriefError::NotFound { .. }));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

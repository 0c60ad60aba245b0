//! End-to-end decode -> analyze -> summary tests for the briefing core,
//! running entirely offline against canned reports and advisories.

use skybrief::briefing::{analyzer, route};
use skybrief::{Severity, SigmetRecord, StationRegistry};

const QUIET_REPORT: &str = "KMCI 311853Z 18006KT 10SM FEW250 25/10 A3001 RMK AO2";
const STORM_REPORT: &str = "KMIA 311853Z 09012KT 3SM +TSRA BKN015CB 28/24 A2995 RMK AO2";
const WINDY_REPORT: &str = "KJFK 311851Z 27028G35KT 10SM BKN050 22/18 A2992";

#[test]
fn quiet_station_briefs_clear() {
    let registry = StationRegistry::new();
    let decoded = skybrief::metar::decode(QUIET_REPORT).unwrap();
    let analysis = analyzer::analyze(&decoded, registry.coordinate("KMCI"), &[]);

    assert_eq!(analysis.overall, Severity::Clear);
    assert_eq!(analysis.hazards, vec!["None"]);

    let summary = route::compose_summary("KMCI", &decoded, &analysis);
    assert!(summary.contains("Overall condition at KMCI: Clear."));
    assert!(summary.contains("Winds: S at 6 knots."));
    assert!(!summary.contains("Hazards:"));
}

#[test]
fn thunderstorm_station_briefs_severe() {
    let registry = StationRegistry::new();
    let decoded = skybrief::metar::decode(STORM_REPORT).unwrap();
    let analysis = analyzer::analyze(&decoded, registry.coordinate("KMIA"), &[]);

    assert_eq!(analysis.overall, Severity::Severe);

    let summary = route::compose_summary("KMIA", &decoded, &analysis);
    assert!(summary.contains("Severe Weather"));
    assert!(summary.contains("Phenomena: heavy thunderstorm rain."));
    // Severe from the rules alone still carries the sentinel hazard list.
    assert!(summary.contains("Hazards: None."));
}

#[test]
fn gusty_station_briefs_severe_from_sustained_speed() {
    let decoded = skybrief::metar::decode(WINDY_REPORT).unwrap();
    // Sustained 28 knots crosses the severe threshold; the gust value is
    // not consulted.
    let analysis = analyzer::analyze(&decoded, None, &[]);
    assert_eq!(analysis.overall, Severity::Severe);
}

#[test]
fn sigmet_over_station_escalates_and_is_listed() {
    let registry = StationRegistry::new();
    let decoded = skybrief::metar::decode(QUIET_REPORT).unwrap();
    let sigmets = vec![
        SigmetRecord {
            hazard: Some("turb".to_string()),
            bbox: Some(vec![35.0, 45.0, -100.0, -90.0]),
        },
        // Malformed box: must never affect the station.
        SigmetRecord {
            hazard: Some("ice".to_string()),
            bbox: Some(vec![35.0, 45.0]),
        },
    ];
    let analysis = analyzer::analyze(&decoded, registry.coordinate("KMCI"), &sigmets);

    assert_eq!(analysis.overall, Severity::Severe);
    assert_eq!(analysis.hazards, vec!["SIGMET: turb"]);

    let summary = route::compose_summary("KMCI", &decoded, &analysis);
    assert!(summary.contains("Hazards: SIGMET: turb."));
}

#[test]
fn unknown_station_with_active_sigmets_stays_clear() {
    let registry = StationRegistry::new();
    let decoded = skybrief::metar::decode("ZZZZ 311853Z 18006KT 10SM FEW250 25/10 A3001")
        .unwrap();
    let sigmets = vec![SigmetRecord {
        hazard: Some("turb".to_string()),
        bbox: Some(vec![-90.0, 90.0, -180.0, 180.0]),
    }];
    let analysis = analyzer::analyze(&decoded, registry.coordinate("ZZZZ"), &sigmets);

    assert_eq!(analysis.overall, Severity::Clear);
    assert_eq!(analysis.hazards, vec!["None"]);
}

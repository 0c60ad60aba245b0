//! Station coordinate registry
//!
//! A fixed ICAO identifier to coordinate mapping, built once at startup
//! and immutable afterwards. Stations missing from the registry simply
//! skip SIGMET correlation; lookups never fail.

use std::collections::HashMap;

use crate::models::Coordinate;

/// Airport reference points, degrees north / east.
const STATIONS: &[(&str, f64, f64)] = &[
    ("KATL", 33.6407, -84.4277),
    ("KBOS", 42.3656, -71.0096),
    ("KCLT", 35.2140, -80.9431),
    ("KDEN", 39.8561, -104.6737),
    ("KDFW", 32.8998, -97.0403),
    ("KDTW", 42.2162, -83.3554),
    ("KEWR", 40.6895, -74.1745),
    ("KIAH", 29.9902, -95.3368),
    ("KJFK", 40.6413, -73.7781),
    ("KLAS", 36.0840, -115.1537),
    ("KLAX", 33.9416, -118.4085),
    ("KMCI", 39.2976, -94.7139),
    ("KMIA", 25.7959, -80.2870),
    ("KMSP", 44.8848, -93.2223),
    ("KORD", 41.9742, -87.9073),
    ("KPHX", 33.4342, -112.0116),
    ("KSEA", 47.4502, -122.3088),
    ("KSFO", 37.6213, -122.3790),
    ("KSLC", 40.7899, -111.9791),
    ("KSTL", 38.7487, -90.3700),
    ("CYYZ", 43.6777, -79.6248),
    ("EDDF", 50.0379, 8.5622),
    ("EGLL", 51.4700, -0.4543),
    ("LFPG", 49.0097, 2.5479),
    ("RJTT", 35.5494, 139.7798),
];

/// Immutable ICAO to coordinate lookup table.
pub struct StationRegistry {
    coordinates: HashMap<&'static str, Coordinate>,
}

impl StationRegistry {
    /// Build the registry from the static station table.
    #[must_use]
    pub fn new() -> Self {
        let coordinates = STATIONS
            .iter()
            .map(|&(icao, latitude, longitude)| (icao, Coordinate::new(latitude, longitude)))
            .collect();
        Self { coordinates }
    }

    /// Look up a station's coordinate; `None` for unknown identifiers.
    #[must_use]
    pub fn coordinate(&self, icao: &str) -> Option<Coordinate> {
        self.coordinates
            .get(icao.to_uppercase().as_str())
            .copied()
    }

    /// Number of registered stations
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// True when no stations are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_station() {
        let registry = StationRegistry::new();
        let jfk = registry.coordinate("KJFK").unwrap();
        assert!((jfk.latitude - 40.6413).abs() < 1e-9);
        assert!((jfk.longitude + 73.7781).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = StationRegistry::new();
        assert!(registry.coordinate("kjfk").is_some());
        assert!(registry.coordinate("Kjfk").is_some());
    }

    #[test]
    fn test_unknown_station_is_none() {
        let registry = StationRegistry::new();
        assert!(registry.coordinate("KZZZ").is_none());
    }
}

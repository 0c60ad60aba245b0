//! Bounding-box containment test for SIGMET correlation

use crate::models::{Coordinate, SigmetRecord};

/// Does a station coordinate fall inside an advisory's bounding box?
///
/// The box is an axis-aligned rectangle `[lat_min, lat_max, lon_min,
/// lon_max]` in flat lat/lon space with inclusive bounds. A missing box
/// or one that is not exactly four numbers never matches. Boxes crossing
/// the antimeridian are not handled.
#[must_use]
pub fn station_in_box(coordinate: Coordinate, sigmet: &SigmetRecord) -> bool {
    let Some(bbox) = sigmet.bbox.as_deref() else {
        return false;
    };
    let &[lat_min, lat_max, lon_min, lon_max] = bbox else {
        return false;
    };

    coordinate.latitude >= lat_min
        && coordinate.latitude <= lat_max
        && coordinate.longitude >= lon_min
        && coordinate.longitude <= lon_max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sigmet(bbox: Option<Vec<f64>>) -> SigmetRecord {
        SigmetRecord {
            hazard: Some("turb".to_string()),
            bbox,
        }
    }

    #[test]
    fn test_station_inside_box() {
        let record = sigmet(Some(vec![30.0, 45.0, -100.0, -80.0]));
        assert!(station_in_box(Coordinate::new(40.0, -90.0), &record));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let record = sigmet(Some(vec![30.0, 45.0, -100.0, -80.0]));
        assert!(station_in_box(Coordinate::new(30.0, -100.0), &record));
        assert!(station_in_box(Coordinate::new(45.0, -80.0), &record));
    }

    #[test]
    fn test_station_outside_on_one_axis() {
        let record = sigmet(Some(vec![30.0, 45.0, -100.0, -80.0]));
        // Latitude inside, longitude outside.
        assert!(!station_in_box(Coordinate::new(40.0, -70.0), &record));
        // Longitude inside, latitude outside.
        assert!(!station_in_box(Coordinate::new(50.0, -90.0), &record));
    }

    #[test]
    fn test_missing_box_never_matches() {
        let record = sigmet(None);
        assert!(!station_in_box(Coordinate::new(40.0, -90.0), &record));
    }

    #[test]
    fn test_wrong_length_box_never_matches() {
        let record = sigmet(Some(vec![30.0, 45.0, -100.0]));
        assert!(!station_in_box(Coordinate::new(40.0, -90.0), &record));
        let record = sigmet(Some(vec![30.0, 45.0, -100.0, -80.0, 1.0]));
        assert!(!station_in_box(Coordinate::new(40.0, -90.0), &record));
    }
}

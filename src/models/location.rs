//! Station coordinate model

use serde::{Deserialize, Serialize};

/// A station position as a flat latitude/longitude pair.
///
/// Degrees north and east; no projection is applied anywhere in the
/// service, so this is only meaningful for bounding-box containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees north
    pub latitude: f64,
    /// Longitude in degrees east
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

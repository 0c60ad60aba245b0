//! SIGMET advisory model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One hazardous-weather advisory from the SIGMET feed.
///
/// Only the fields the analyzer consumes are kept. Records with an absent
/// or malformed bounding box are still valid; they simply never affect any
/// station (see [`crate::briefing::geometry`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SigmetRecord {
    /// Hazard type, e.g. `"turb"` or `"ice"`
    #[serde(default)]
    pub hazard: Option<String>,
    /// Bounding box as `[lat_min, lat_max, lon_min, lon_max]`
    #[serde(default, deserialize_with = "lenient_bbox")]
    pub bbox: Option<Vec<f64>>,
}

impl SigmetRecord {
    /// Project a raw feed snapshot (a JSON array of advisories) into
    /// records.
    ///
    /// The feed is not under our control, so every field is read
    /// leniently; an entry that is not even an object becomes a record
    /// with no hazard and no box.
    #[must_use]
    pub fn from_feed(feed: &Value) -> Vec<Self> {
        feed.as_array()
            .map(|entries| entries.iter().map(Self::from_entry).collect())
            .unwrap_or_default()
    }

    fn from_entry(entry: &Value) -> Self {
        Self {
            hazard: entry
                .get("hazard")
                .and_then(Value::as_str)
                .map(str::to_owned),
            bbox: entry.get("bbox").and_then(bbox_from_value),
        }
    }
}

/// Accept a bounding box only when it is an array of numbers; anything
/// else (including a number mixed with nulls or strings) is treated as
/// absent.
fn bbox_from_value(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    items.iter().map(Value::as_f64).collect()
}

fn lenient_bbox<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(bbox_from_value(&value))
}

//! # Telemetry Records
//!
//! Wire-format telemetry records and snapshot decoding.
//!
//! The simulator pushes snapshots as JSON objects mapping an opaque key to
//! one record per vehicle. Records can arrive partial: vectors may be short
//! or missing and scalar fields absent. Decoding keeps whatever survives;
//! projection later omits the derived fields it cannot compute.

use serde::de::Error;
use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

/// One vehicle's raw telemetry record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTelemetry {
    /// Simulator object name; the first character selects the vehicle class
    #[serde(rename = "objectname")]
    pub object_name: String,

    /// Position in meters, index 2 is altitude above the pad
    #[serde(default)]
    pub location: Vec<f64>,

    /// Rotation quaternion as [x, y, z, w]
    #[serde(default)]
    pub rotation: Vec<f64>,

    /// Velocity in meters per second
    #[serde(default)]
    pub velocity: Vec<f64>,

    /// Speed in meters per second, when the feed ships it precomputed
    #[serde(default)]
    pub speed: Option<f64>,

    /// Fuel (CH4) mass in kilograms
    #[serde(rename = "fuelMass", default)]
    pub fuel_mass: Option<f64>,

    /// Oxidizer (LOX) mass in kilograms
    #[serde(rename = "oxidizerMass", default)]
    pub oxidizer_mass: Option<f64>,

    /// Running-engines bitmask, bit (n - 1) encodes engine n
    #[serde(rename = "enginesThatAreRunningBitmask", default)]
    pub engines_bitmask: Option<u64>,
}

impl VehicleTelemetry {
    /// Speed in meters per second
    ///
    /// Uses the wire value when present, otherwise the velocity magnitude
    /// (the simulator derives speed the same way). `None` when the record
    /// carries neither.
    pub fn speed_ms(&self) -> Option<f64> {
        self.speed.or_else(|| {
            if self.velocity.is_empty() {
                None
            } else {
                Some(self.velocity.iter().map(|v| v * v).sum::<f64>().sqrt())
            }
        })
    }

    /// Altitude above the pad in meters, when the record carries one
    pub fn altitude_m(&self) -> Option<f64> {
        self.location.get(2).copied()
    }
}

/// Decode one telemetry snapshot
///
/// Accepts the feed's native shape, a JSON object mapping an opaque key to a
/// record, as well as a bare array of records. Entries that fail to decode
/// or carry an empty object name are logged and dropped; one vehicle's bad
/// data never blocks the rest of the snapshot.
///
/// Entry order is preserved, which downstream first-match vehicle selection
/// relies on.
///
/// # Arguments
///
/// * `input` - One complete snapshot as JSON text
///
/// # Returns
///
/// * `Result<Vec<VehicleTelemetry>>` - Surviving records, in feed order
///
/// # Errors
///
/// Returns an error only when the snapshot itself is not valid JSON or its
/// top level is neither an object nor an array.
pub fn decode_snapshot(input: &str) -> Result<Vec<VehicleTelemetry>> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    let entries: Vec<(String, serde_json::Value)> = match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        _ => {
            return Err(serde_json::Error::custom(
                "snapshot top level must be a JSON object or array",
            )
            .into());
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        match serde_json::from_value::<VehicleTelemetry>(entry) {
            Ok(record) if record.object_name.is_empty() => {
                warn!("Skipping snapshot entry '{}': empty object name", key);
            }
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping malformed snapshot entry '{}': {}", key, e);
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn booster_json() -> &'static str {
        r#"{
            "objectname": "B13",
            "location": [0.0, 0.0, 12345.0],
            "rotation": [0.0, 0.0, 0.0, 1.0],
            "velocity": [3.0, 4.0, 0.0],
            "fuelMass": 500000.0,
            "oxidizerMass": 1330000.0,
            "enginesThatAreRunningBitmask": 7
        }"#
    }

    #[test]
    fn test_decode_full_record() {
        let record: VehicleTelemetry = serde_json::from_str(booster_json()).unwrap();
        assert_eq!(record.object_name, "B13");
        assert_eq!(record.altitude_m(), Some(12345.0));
        assert_eq!(record.engines_bitmask, Some(7));
        assert_eq!(record.fuel_mass, Some(500000.0));
        assert_eq!(record.oxidizer_mass, Some(1330000.0));
    }

    #[test]
    fn test_speed_derived_from_velocity() {
        let record: VehicleTelemetry = serde_json::from_str(booster_json()).unwrap();
        // |(3, 4, 0)| = 5
        assert!((record.speed_ms().unwrap() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_wire_speed_wins_over_velocity() {
        let record: VehicleTelemetry = serde_json::from_str(
            r#"{"objectname": "B13", "speed": 42.0, "velocity": [3.0, 4.0, 0.0]}"#,
        )
        .unwrap();
        assert!((record.speed_ms().unwrap() - 42.0).abs() < EPS);
    }

    #[test]
    fn test_partial_record_decodes() {
        let record: VehicleTelemetry =
            serde_json::from_str(r#"{"objectname": "S28"}"#).unwrap();
        assert_eq!(record.object_name, "S28");
        assert!(record.location.is_empty());
        assert!(record.rotation.is_empty());
        assert_eq!(record.speed_ms(), None);
        assert_eq!(record.altitude_m(), None);
        assert_eq!(record.engines_bitmask, None);
    }

    #[test]
    fn test_short_location_has_no_altitude() {
        let record: VehicleTelemetry =
            serde_json::from_str(r#"{"objectname": "B13", "location": [1.0, 2.0]}"#).unwrap();
        assert_eq!(record.altitude_m(), None);
    }

    #[test]
    fn test_decode_snapshot_keyed_object_keeps_feed_order() {
        // Keys deliberately out of alphabetical order
        let input = r#"{
            "S28": {"objectname": "S28", "speed": 20.0},
            "B13": {"objectname": "B13", "speed": 10.0}
        }"#;

        let records = decode_snapshot(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].object_name, "S28");
        assert_eq!(records[1].object_name, "B13");
    }

    #[test]
    fn test_decode_snapshot_array() {
        let input = r#"[{"objectname": "S28"}, {"objectname": "B13"}]"#;
        let records = decode_snapshot(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].object_name, "S28");
        assert_eq!(records[1].object_name, "B13");
    }

    #[test]
    fn test_malformed_entry_skipped_siblings_survive() {
        let input = r#"{
            "bad": {"location": [0.0]},
            "B13": {"objectname": "B13"}
        }"#;

        let records = decode_snapshot(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].object_name, "B13");
    }

    #[test]
    fn test_empty_object_name_skipped() {
        let input = r#"{"x": {"objectname": ""}, "B13": {"objectname": "B13"}}"#;
        let records = decode_snapshot(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].object_name, "B13");
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(decode_snapshot("not json").is_err());
        assert!(decode_snapshot("42").is_err());
        assert!(decode_snapshot("\"B13\"").is_err());
    }
}

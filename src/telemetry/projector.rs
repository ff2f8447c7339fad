//! # Telemetry Projector
//!
//! Projects raw telemetry records into per-vehicle view models.
//!
//! Each snapshot fully replaces the previous frame: the projector keeps no
//! state between calls, so the caller must apply snapshots in arrival order.

use serde::Serialize;

use super::attitude::{euler_from_quaternion, EulerAngles};
use super::engines::{running_engine_numbers, running_flags};
use super::record::VehicleTelemetry;
use super::vehicle::VehicleClass;

/// Meters per second to kilometers per hour.
const MS_TO_KMH: f64 = 3.6;

/// Meters per kilometer.
const M_PER_KM: f64 = 1000.0;

/// Kilograms per metric ton.
const KG_PER_TON: f64 = 1000.0;

/// Upper clamp for propellant fill levels, percent.
const FULL_PERCENT: f64 = 100.0;

/// Render-ready summary of one vehicle for a single update cycle.
///
/// Fields the record could not supply stay `None`; the renderer leaves the
/// matching widget untouched instead of zeroing it.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleView {
    /// Simulator object name the view was derived from
    pub object_name: String,

    /// Vehicle class, from the object name prefix
    pub class: VehicleClass,

    /// Speed in km/h, rounded to the nearest integer
    pub speed_kmh: Option<i64>,

    /// Altitude in whole kilometers, floored
    pub altitude_km: Option<i64>,

    /// Oxidizer fill level in percent, clamped at 100 (no lower clamp)
    pub oxidizer_percent: Option<f64>,

    /// Fuel fill level in percent, clamped at 100 (no lower clamp)
    pub fuel_percent: Option<f64>,

    /// Attitude angles, present iff the rotation had exactly 4 components
    pub attitude: Option<EulerAngles>,

    /// Run/stop flag per engine, ordered by engine number
    pub engines: Option<Vec<bool>>,

    /// Numbers of the engines currently firing, ascending
    pub running_engines: Option<Vec<u32>>,

    /// Total propellant on board in metric tons
    pub propellant_tons: Option<f64>,
}

/// One projected frame: at most one booster and one ship view.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryFrame {
    pub booster: Option<VehicleView>,
    pub ship: Option<VehicleView>,
}

/// Tracked object names present in a snapshot, grouped by class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    pub boosters: Vec<String>,
    pub ships: Vec<String>,
}

/// Project a snapshot's records into a telemetry frame
///
/// The first record whose name starts with 'B' fills the booster slot and
/// the first starting with 'S' the ship slot; later records with the same
/// prefix are ignored. The slots are independent: a missing ship leaves the
/// booster populated and vice versa.
///
/// # Arguments
///
/// * `records` - Decoded snapshot records, in feed order
///
/// # Returns
///
/// * `TelemetryFrame` - Fresh view models replacing any prior frame
///
/// # Examples
///
/// ```
/// use starbase_bridge::telemetry::projector::project;
/// use starbase_bridge::telemetry::record::decode_snapshot;
///
/// let records = decode_snapshot(r#"{"a": {"objectname": "B13", "speed": 100.0}}"#).unwrap();
/// let frame = project(&records);
///
/// assert_eq!(frame.booster.unwrap().speed_kmh, Some(360));
/// assert!(frame.ship.is_none());
/// ```
pub fn project<'a, I>(records: I) -> TelemetryFrame
where
    I: IntoIterator<Item = &'a VehicleTelemetry>,
{
    let mut booster = None;
    let mut ship = None;

    for record in records {
        match VehicleClass::from_object_name(&record.object_name) {
            Some(VehicleClass::Booster) if booster.is_none() => {
                booster = Some(project_vehicle(record, VehicleClass::Booster));
            }
            Some(VehicleClass::Ship) if ship.is_none() => {
                ship = Some(project_vehicle(record, VehicleClass::Ship));
            }
            _ => {}
        }

        if booster.is_some() && ship.is_some() {
            break;
        }
    }

    TelemetryFrame { booster, ship }
}

/// List the tracked object names in a snapshot, grouped by class
///
/// Names keep their feed order within each class.
pub fn roster<'a, I>(records: I) -> Roster
where
    I: IntoIterator<Item = &'a VehicleTelemetry>,
{
    let mut boosters = Vec::new();
    let mut ships = Vec::new();

    for record in records {
        match VehicleClass::from_object_name(&record.object_name) {
            Some(VehicleClass::Booster) => boosters.push(record.object_name.clone()),
            Some(VehicleClass::Ship) => ships.push(record.object_name.clone()),
            None => {}
        }
    }

    Roster { boosters, ships }
}

/// Derive one vehicle's view model from its record
fn project_vehicle(record: &VehicleTelemetry, class: VehicleClass) -> VehicleView {
    let speed_kmh = record
        .speed_ms()
        .map(|speed| (speed * MS_TO_KMH).round() as i64);

    let altitude_km = record
        .altitude_m()
        .map(|altitude| (altitude / M_PER_KM).floor() as i64);

    let oxidizer_percent = record
        .oxidizer_mass
        .map(|mass| fill_percent(mass, class.max_oxidizer_kg()));
    let fuel_percent = record
        .fuel_mass
        .map(|mass| fill_percent(mass, class.max_fuel_kg()));

    // Attitude only for a well-formed [x, y, z, w] quaternion; a short or
    // overlong rotation omits it rather than defaulting to zero
    let attitude = match record.rotation.as_slice() {
        &[x, y, z, w] => Some(euler_from_quaternion(x, y, z, w)),
        _ => None,
    };

    let engines = record
        .engines_bitmask
        .map(|mask| running_flags(mask, class.engine_count()));
    let running_engines = record
        .engines_bitmask
        .map(|mask| running_engine_numbers(mask, class.engine_count()));

    let propellant_tons = match (record.fuel_mass, record.oxidizer_mass) {
        (Some(fuel), Some(oxidizer)) => Some((fuel + oxidizer) / KG_PER_TON),
        _ => None,
    };

    VehicleView {
        object_name: record.object_name.clone(),
        class,
        speed_kmh,
        altitude_km,
        oxidizer_percent,
        fuel_percent,
        attitude,
        engines,
        running_engines,
        propellant_tons,
    }
}

/// Fill level as a percentage of capacity, clamped at 100 only
///
/// Negative masses stay negative; only the upper bound is clamped.
fn fill_percent(mass_kg: f64, capacity_kg: f64) -> f64 {
    (mass_kg / capacity_kg * FULL_PERCENT).min(FULL_PERCENT)
}

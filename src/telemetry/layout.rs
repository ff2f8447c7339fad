//! # Engine Layout
//!
//! Static engine-icon geometry for each vehicle class.
//!
//! The dashboard draws engines as concentric rings; the descriptors here
//! give each engine its polar position and icon size. The layout is computed
//! on demand, never persisted, and engine numbers line up with the
//! running-engines bitmask positions.

use super::vehicle::VehicleClass;

/// One engine position in the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineDescriptor {
    /// Engine number, 1-based, matching bitmask position (number - 1)
    pub number: u32,

    /// Angular position in degrees, -90 puts the first engine at 12 o'clock
    pub angle_deg: f64,

    /// Ring radius in layout units
    pub radius: f64,

    /// Icon size in layout units
    pub size: f64,
}

/// One concentric ring of identically sized engines.
struct Ring {
    count: u32,
    first_number: u32,
    step_deg: f64,
    offset_deg: f64,
    radius: f64,
    size: f64,
}

/// Booster engine rings: 3 center, 10 inner, 20 outer.
const BOOSTER_RINGS: [Ring; 3] = [
    Ring { count: 3, first_number: 1, step_deg: 120.0, offset_deg: -90.0, radius: 15.0, size: 20.0 },
    Ring { count: 10, first_number: 4, step_deg: 36.0, offset_deg: -90.0, radius: 50.0, size: 20.0 },
    Ring { count: 20, first_number: 14, step_deg: 18.0, offset_deg: -90.0, radius: 80.0, size: 20.0 },
];

/// Ship engine rings: 3 sea-level center, 3 vacuum outer.
const SHIP_RINGS: [Ring; 2] = [
    Ring { count: 3, first_number: 1, step_deg: 120.0, offset_deg: -90.0, radius: 18.0, size: 30.0 },
    Ring { count: 3, first_number: 4, step_deg: 120.0, offset_deg: -30.0, radius: 65.0, size: 64.0 },
];

/// Build the engine layout for a vehicle class
///
/// Engines are numbered contiguously from 1 across the rings, center
/// outward, and the descriptor count matches the class engine count.
///
/// # Examples
///
/// ```
/// use starbase_bridge::telemetry::layout::engine_layout;
/// use starbase_bridge::telemetry::vehicle::VehicleClass;
///
/// let layout = engine_layout(VehicleClass::Booster);
/// assert_eq!(layout.len(), 33);
/// ```
pub fn engine_layout(class: VehicleClass) -> Vec<EngineDescriptor> {
    let rings: &[Ring] = match class {
        VehicleClass::Booster => &BOOSTER_RINGS,
        VehicleClass::Ship => &SHIP_RINGS,
    };

    rings
        .iter()
        .flat_map(|ring| {
            (0..ring.count).map(move |i| EngineDescriptor {
                number: ring.first_number + i,
                angle_deg: f64::from(i) * ring.step_deg + ring.offset_deg,
                radius: ring.radius,
                size: ring.size,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booster_layout_count_matches_class() {
        let layout = engine_layout(VehicleClass::Booster);
        assert_eq!(layout.len(), VehicleClass::Booster.engine_count() as usize);
    }

    #[test]
    fn test_ship_layout_count_matches_class() {
        let layout = engine_layout(VehicleClass::Ship);
        assert_eq!(layout.len(), VehicleClass::Ship.engine_count() as usize);
    }

    #[test]
    fn test_engine_numbers_contiguous_from_1() {
        for class in [VehicleClass::Booster, VehicleClass::Ship] {
            let layout = engine_layout(class);
            for (i, engine) in layout.iter().enumerate() {
                assert_eq!(engine.number, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_booster_ring_partition() {
        let layout = engine_layout(VehicleClass::Booster);

        // Center ring: engines 1-3 at radius 15
        assert!(layout[..3].iter().all(|e| e.radius == 15.0));
        // Inner ring: engines 4-13 at radius 50
        assert!(layout[3..13].iter().all(|e| e.radius == 50.0));
        // Outer ring: engines 14-33 at radius 80
        assert!(layout[13..].iter().all(|e| e.radius == 80.0));
        // All booster icons share one size
        assert!(layout.iter().all(|e| e.size == 20.0));
    }

    #[test]
    fn test_booster_first_engine_at_top() {
        let layout = engine_layout(VehicleClass::Booster);
        assert_eq!(layout[0].angle_deg, -90.0);
        assert_eq!(layout[1].angle_deg, 30.0);
        assert_eq!(layout[2].angle_deg, 150.0);
        // First engine of the outer ring also starts at the top
        assert_eq!(layout[13].angle_deg, -90.0);
        assert_eq!(layout[14].angle_deg, -72.0);
    }

    #[test]
    fn test_ship_vacuum_ring_offset_and_size() {
        let layout = engine_layout(VehicleClass::Ship);

        // Sea-level engines 1-3: small, centered ring
        assert!(layout[..3].iter().all(|e| e.radius == 18.0 && e.size == 30.0));
        assert_eq!(layout[0].angle_deg, -90.0);

        // Vacuum engines 4-6: large, outer ring rotated off the top
        assert!(layout[3..].iter().all(|e| e.radius == 65.0 && e.size == 64.0));
        assert_eq!(layout[3].angle_deg, -30.0);
        assert_eq!(layout[4].angle_deg, 90.0);
        assert_eq!(layout[5].angle_deg, 210.0);
    }
}

//! # Attitude Resolver
//!
//! Converts a unit rotation quaternion into Euler angles for attitude display.
//!
//! The conversion follows the aerospace intrinsic Tait-Bryan Z-Y-X convention.
//! Axis order matters: a swapped order yields a different but
//! plausible-looking attitude.

use serde::Serialize;

/// Euler angles in degrees.
///
/// Pitch is confined to [-90, 90]; roll and yaw to [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EulerAngles {
    /// Rotation around the X axis in degrees
    pub roll: f64,

    /// Rotation around the Y axis in degrees
    pub pitch: f64,

    /// Rotation around the Z axis in degrees
    pub yaw: f64,
}

/// Convert a unit quaternion to Euler angles in degrees
///
/// The pitch term is clamped to ±90° whenever floating-point overshoot pushes
/// `2(wy - zx)` outside [-1, 1] at the gimbal-lock boundary, so the function
/// is total over all real inputs and never produces NaN from `asin`.
///
/// # Arguments
///
/// * `x`, `y`, `z`, `w` - Quaternion components, unit norm expected
///
/// # Returns
///
/// * `EulerAngles` - Roll, pitch and yaw in degrees
///
/// # Examples
///
/// ```
/// use starbase_bridge::telemetry::attitude::euler_from_quaternion;
///
/// let euler = euler_from_quaternion(0.0, 0.0, 0.0, 1.0);
/// assert!(euler.roll.abs() < 1e-9);
/// assert!(euler.pitch.abs() < 1e-9);
/// assert!(euler.yaw.abs() < 1e-9);
/// ```
pub fn euler_from_quaternion(x: f64, y: f64, z: f64, w: f64) -> EulerAngles {
    // Roll (X-axis rotation)
    let sinr_cosp = 2.0 * (w * x + y * z);
    let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
    let roll = sinr_cosp.atan2(cosr_cosp);

    // Pitch (Y-axis rotation), clamped at the gimbal-lock boundary
    let sinp = 2.0 * (w * y - z * x);
    let pitch = if sinp.abs() >= 1.0 {
        std::f64::consts::FRAC_PI_2.copysign(sinp)
    } else {
        sinp.asin()
    };

    // Yaw (Z-axis rotation)
    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    let yaw = siny_cosp.atan2(cosy_cosp);

    EulerAngles {
        roll: roll.to_degrees(),
        pitch: pitch.to_degrees(),
        yaw: yaw.to_degrees(),
    }
}

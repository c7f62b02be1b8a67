//! Mathematical constants and nalgebra extensions for the attitude isolator

use nalgebra::{UnitQuaternion, Vector3};

use crate::types::EulerAngles;

/// Mathematical constants
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Scale of the integer angle fields in an attitude report (degrees per LSB)
pub const ATTITUDE_SCALE: f64 = 1e-5;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Convert an integer-scaled angle in degrees to radians
///
/// `degrees = raw * scale`, then `radians = degrees * π/180`. Any `i32` is
/// accepted; no range checking is done here.
///
/// # Example
/// ```
/// use attitude_isolator::{ATTITUDE_SCALE, scaled_to_radians};
///
/// let yaw = scaled_to_radians(9_000_000, ATTITUDE_SCALE);
/// assert!((yaw - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn scaled_to_radians(raw: i32, scale: f64) -> f64 {
    (f64::from(raw) * scale) * DEG_TO_RAD
}

/// Extension trait for UnitQuaternion operations
pub trait QuaternionExt {
    /// Convert quaternion to Euler angles (roll, pitch, yaw) in radians
    fn to_euler(&self) -> EulerAngles;

    /// Convert quaternion to Euler angles in degrees
    fn to_euler_degrees(&self) -> Vector3<f64>;

    /// Distance of `w² + x² + y² + z²` from one
    fn norm_squared_error(&self) -> f64;
}

impl QuaternionExt for UnitQuaternion<f64> {
    fn to_euler(&self) -> EulerAngles {
        let (roll, pitch, yaw) = self.euler_angles();
        EulerAngles::new(roll, pitch, yaw)
    }

    fn to_euler_degrees(&self) -> Vector3<f64> {
        let euler = self.to_euler();
        Vector3::new(euler.roll, euler.pitch, euler.yaw) * RAD_TO_DEG
    }

    fn norm_squared_error(&self) -> f64 {
        (self.as_ref().norm_squared() - 1.0).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_to_radians() {
        assert_eq!(scaled_to_radians(0, ATTITUDE_SCALE), 0.0);

        let half_turn = scaled_to_radians(18_000_000, ATTITUDE_SCALE);
        assert!((half_turn - core::f64::consts::PI).abs() < 1e-12);

        let negative = scaled_to_radians(-4_500_000, ATTITUDE_SCALE);
        assert!((negative + core::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_scaled_to_radians_extremes() {
        // Out-of-range values are converted, not rejected
        let max = scaled_to_radians(i32::MAX, ATTITUDE_SCALE);
        let min = scaled_to_radians(i32::MIN, ATTITUDE_SCALE);
        assert!(max.is_finite());
        assert!(min.is_finite());
        assert!(max > 0.0 && min < 0.0);
    }

    #[test]
    fn test_quaternion_euler_conversion() {
        let quat = UnitQuaternion::from_euler_angles(30.0 * DEG_TO_RAD, 45.0 * DEG_TO_RAD, 60.0 * DEG_TO_RAD);
        let recovered = quat.to_euler_degrees();

        assert!((recovered - Vector3::new(30.0, 45.0, 60.0)).magnitude() < 1e-9);
        assert!(quat.norm_squared_error() < 1e-12);
    }
}

//! Attitude converter: integer-scaled roll/pitch/heading to a unit quaternion

use nalgebra::{Quaternion, UnitQuaternion};

use crate::math::scaled_to_radians;
use crate::types::{AttitudeSettings, EulerAngles, RawAttitudeSample};

/// Orientation of the sensor body frame relative to the reference frame
pub type Orientation = UnitQuaternion<f64>;

/// Build a quaternion from roll, pitch and yaw in radians
///
/// Intrinsic Z-Y-X composition: roll is applied first, then pitch, then yaw.
/// This is the only rotation order used anywhere in the crate.
///
/// The result is unit length by the half-angle identities alone; it is not
/// renormalized.
///
/// # Example
/// ```
/// use attitude_isolator::{EulerAngles, attitude::quaternion_from_euler};
///
/// let q = quaternion_from_euler(EulerAngles::new(0.0, 0.0, core::f64::consts::FRAC_PI_2));
/// assert!((q.w - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!((q.k - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
pub fn quaternion_from_euler(angles: EulerAngles) -> Orientation {
    let (sr, cr) = (angles.roll * 0.5).sin_cos();
    let (sp, cp) = (angles.pitch * 0.5).sin_cos();
    let (sy, cy) = (angles.yaw * 0.5).sin_cos();

    let w = cr * cp * cy + sr * sp * sy;
    let x = sr * cp * cy - cr * sp * sy;
    let y = cr * sp * cy + sr * cp * sy;
    let z = cr * cp * sy - sr * sp * cy;

    UnitQuaternion::new_unchecked(Quaternion::new(w, x, y, z))
}

/// Convert a raw attitude report using the reference 1e-5 degree scale
///
/// # Example
/// ```
/// use attitude_isolator::convert;
///
/// let q = convert(0, 0, 0);
/// assert_eq!(q.w, 1.0);
/// ```
pub fn convert(raw_roll: i32, raw_pitch: i32, raw_heading: i32) -> Orientation {
    AttitudeConverter::new().convert(raw_roll, raw_pitch, raw_heading)
}

/// Converts integer-scaled attitude reports into orientations
///
/// Accepts any `i32` triple. Values outside the physical range (roll/pitch
/// beyond ±90°, heading outside [0°, 360°)) still produce a valid rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttitudeConverter {
    settings: AttitudeSettings,
}

impl AttitudeConverter {
    /// Create a converter using the reference 1e-5 degree scale
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AttitudeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> AttitudeSettings {
        self.settings
    }

    /// Scale the raw angles to radians
    pub fn to_euler(&self, raw_roll: i32, raw_pitch: i32, raw_heading: i32) -> EulerAngles {
        let scale = self.settings.scale;
        EulerAngles::new(
            scaled_to_radians(raw_roll, scale),
            scaled_to_radians(raw_pitch, scale),
            scaled_to_radians(raw_heading, scale),
        )
    }

    /// Convert raw roll, pitch and heading into an orientation
    pub fn convert(&self, raw_roll: i32, raw_pitch: i32, raw_heading: i32) -> Orientation {
        quaternion_from_euler(self.to_euler(raw_roll, raw_pitch, raw_heading))
    }

    /// Convert a full attitude report; accuracy fields are ignored
    pub fn convert_sample(&self, sample: &RawAttitudeSample) -> Orientation {
        self.convert(sample.roll, sample.pitch, sample.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{DEG_TO_RAD, QuaternionExt};
    use crate::types::AttitudeAccuracy;

    #[test]
    fn test_identity() {
        let q = convert(0, 0, 0);
        assert_eq!(q.w, 1.0);
        assert_eq!(q.i, 0.0);
        assert_eq!(q.j, 0.0);
        assert_eq!(q.k, 0.0);
    }

    #[test]
    fn test_matches_nalgebra_euler_composition() {
        let cases = [
            (10.0, 20.0, 30.0),
            (-45.0, 80.0, 359.0),
            (179.0, -89.0, 0.5),
            (0.0, 90.0, 180.0),
        ];

        for (roll, pitch, yaw) in cases {
            let ours = quaternion_from_euler(EulerAngles::new(roll * DEG_TO_RAD, pitch * DEG_TO_RAD, yaw * DEG_TO_RAD));
            let reference = UnitQuaternion::from_euler_angles(roll * DEG_TO_RAD, pitch * DEG_TO_RAD, yaw * DEG_TO_RAD);
            assert!(
                (ours.as_ref() - reference.as_ref()).norm() < 1e-12,
                "mismatch for ({roll}, {pitch}, {yaw})"
            );
        }
    }

    #[test]
    fn test_heading_quarter_turn() {
        let q = convert(0, 0, 9_000_000);
        let half = core::f64::consts::FRAC_1_SQRT_2;
        assert!((q.w - half).abs() < 1e-12);
        assert!(q.i.abs() < 1e-12);
        assert!(q.j.abs() < 1e-12);
        assert!((q.k - half).abs() < 1e-12);
    }

    #[test]
    fn test_euler_round_trip_within_physical_range() {
        let converter = AttitudeConverter::new();
        let q = converter.convert(1_234_567, -2_345_678, 12_345_678);
        let euler = q.to_euler_degrees();

        assert!((euler.x - 12.34567).abs() < 1e-9);
        assert!((euler.y + 23.45678).abs() < 1e-9);
        assert!((euler.z - 123.45678).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_inputs_accepted() {
        let converter = AttitudeConverter::new();
        for (r, p, h) in [
            (i32::MAX, i32::MIN, i32::MAX),
            (i32::MIN, i32::MAX, -1),
            (18_000_001, 9_000_001, 36_000_000),
        ] {
            let q = converter.convert(r, p, h);
            assert!(q.norm_squared_error() < 1e-9, "not unit for ({r}, {p}, {h})");
        }
    }

    #[test]
    fn test_custom_scale() {
        // Whole degrees instead of 1e-5 degrees
        let converter = AttitudeConverter::with_settings(AttitudeSettings { scale: 1.0 });
        let reference = convert(0, 0, 9_000_000);
        let q = converter.convert(0, 0, 90);
        assert!((q.as_ref() - reference.as_ref()).norm() < 1e-12);
    }

    #[test]
    fn test_accuracy_does_not_affect_orientation() {
        let converter = AttitudeConverter::new();
        let plain = RawAttitudeSample::new(210, 320, 430);
        let with_accuracy = plain.with_accuracy(AttitudeAccuracy {
            roll: 41,
            pitch: 72,
            heading: 50,
        });

        assert_eq!(converter.convert_sample(&plain), converter.convert_sample(&with_accuracy));
    }
}

//! Motion isolator: removes gravity from raw accelerometer readings
//!
//! The reference frame has its Z axis pointing up, so a level, stationary
//! accelerometer reads `(0, 0, +G)` and the expected gravity at identity
//! orientation is `(0, 0, G)`. Accelerometers that read `-G` on Z at rest are
//! handled with [`GravitySign::Add`](crate::GravitySign::Add).

use nalgebra::Vector3;

use crate::attitude::Orientation;
use crate::types::IsolatorSettings;

/// Expected gravity in the sensor frame for orientation `q`
///
/// Third row of the rotation matrix of `q`, scaled by `gravity`. Computed
/// from the quaternion components directly; `q` is assumed to be unit length.
///
/// # Example
/// ```
/// use nalgebra::UnitQuaternion;
/// use attitude_isolator::{STANDARD_GRAVITY, isolation::expected_gravity};
///
/// let gravity = expected_gravity(&UnitQuaternion::identity(), STANDARD_GRAVITY);
/// assert_eq!(gravity.z, STANDARD_GRAVITY);
/// ```
pub fn expected_gravity(q: &Orientation, gravity: f64) -> Vector3<f64> {
    let q = q.as_ref();
    let qw = q.w;
    let qx = q.i;
    let qy = q.j;
    let qz = q.k;

    Vector3::new(
        2.0 * (qx * qz - qw * qy),
        2.0 * (qy * qz + qw * qx),
        qw * qw - qx * qx - qy * qy + qz * qz,
    ) * gravity
}

/// Isolate linear acceleration using default settings (m/s², subtract)
pub fn isolate(q: &Orientation, raw_accel: Vector3<f64>) -> Vector3<f64> {
    MotionIsolator::new().isolate(q, raw_accel)
}

/// Separates linear acceleration from gravity
///
/// Stateless apart from its settings: orientation is always passed in by the
/// caller. NaN in either input propagates to the output.
///
/// # Example
/// ```
/// use nalgebra::{UnitQuaternion, Vector3};
/// use attitude_isolator::{MotionIsolator, STANDARD_GRAVITY};
///
/// let isolator = MotionIsolator::new();
/// let raw = Vector3::new(0.0, 0.0, STANDARD_GRAVITY + 2.0);
/// let linear = isolator.isolate(&UnitQuaternion::identity(), raw);
/// assert!((linear - Vector3::new(0.0, 0.0, 2.0)).magnitude() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionIsolator {
    settings: IsolatorSettings,
}

impl MotionIsolator {
    /// Create an isolator for m/s² readings that subtracts gravity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an isolator with the specified settings
    ///
    /// Settings are not checked here; callers building them by hand should run
    /// [`IsolatorSettings::validate`] first. Debug builds assert validity.
    pub fn with_settings(settings: IsolatorSettings) -> Self {
        debug_assert!(settings.validate().is_ok(), "invalid isolator settings: {settings:?}");
        Self { settings }
    }

    pub fn settings(&self) -> IsolatorSettings {
        self.settings
    }

    /// Expected gravity in the sensor frame, using the configured magnitude
    pub fn expected_gravity(&self, q: &Orientation) -> Vector3<f64> {
        expected_gravity(q, self.settings.gravity)
    }

    /// Linear acceleration in the sensor frame
    pub fn isolate(&self, q: &Orientation, raw_accel: Vector3<f64>) -> Vector3<f64> {
        raw_accel + self.expected_gravity(q) * self.settings.gravity_sign.factor()
    }

    /// Linear acceleration rotated into the reference frame
    pub fn earth_acceleration(&self, q: &Orientation, raw_accel: Vector3<f64>) -> Vector3<f64> {
        q * self.isolate(q, raw_accel)
    }
}

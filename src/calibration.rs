//! Gravity-sign calibration for the motion isolator
//!
//! Procedure: hold the device stationary (ideally level), feed its current
//! orientation and a handful of accelerometer samples to
//! [`calibrate_gravity_sign`]. With the right sign the isolated output is
//! close to `(0, 0, 0)`; the function picks that sign, or reports that
//! neither sign brings the residual under the tolerance.

use nalgebra::Vector3;

use crate::attitude::Orientation;
use crate::error::CalibrationError;
use crate::isolation::MotionIsolator;
use crate::types::{GravitySign, IsolatorSettings};

/// Outcome of a successful gravity-sign calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignCalibration {
    /// Sign that cancels gravity for the supplied samples
    pub gravity_sign: GravitySign,
    /// Magnitude of the isolated acceleration with the chosen sign
    pub residual: f64,
    /// Magnitude of the isolated acceleration with the other sign
    pub rejected_residual: f64,
}

impl SignCalibration {
    /// Isolator settings using the calibrated sign and the given gravity magnitude
    pub fn settings(&self, gravity: f64) -> IsolatorSettings {
        IsolatorSettings {
            gravity,
            gravity_sign: self.gravity_sign,
        }
    }
}

/// Magnitude of the isolated acceleration for one sample
pub fn residual(isolator: &MotionIsolator, q: &Orientation, sample: Vector3<f64>) -> f64 {
    isolator.isolate(q, sample).magnitude()
}

/// Whether a sample is consistent with a stationary device under `isolator`'s settings
///
/// # Example
/// ```
/// use nalgebra::{UnitQuaternion, Vector3};
/// use attitude_isolator::{MotionIsolator, STANDARD_GRAVITY, calibration::is_at_rest};
///
/// let isolator = MotionIsolator::new();
/// let level = UnitQuaternion::identity();
/// assert!(is_at_rest(&isolator, &level, Vector3::new(0.01, -0.02, STANDARD_GRAVITY), 0.1));
/// assert!(!is_at_rest(&isolator, &level, Vector3::new(0.0, 0.0, -STANDARD_GRAVITY), 0.1));
/// ```
pub fn is_at_rest(isolator: &MotionIsolator, q: &Orientation, sample: Vector3<f64>, tolerance: f64) -> bool {
    residual(isolator, q, sample) <= tolerance
}

/// Choose the gravity sign from samples taken while the device is stationary
///
/// Samples are averaged to suppress sensor noise, then isolated with both
/// signs. The sign with the smaller residual wins if that residual is within
/// `tolerance` (same units as `gravity`).
///
/// `gravity` must be finite and positive, `tolerance` finite and non-negative.
pub fn calibrate_gravity_sign(
    q: &Orientation,
    stationary_samples: &[Vector3<f64>],
    gravity: f64,
    tolerance: f64,
) -> Result<SignCalibration, CalibrationError> {
    if !gravity.is_finite() || gravity <= 0.0 {
        return Err(CalibrationError::InvalidParameter {
            name: "gravity",
            value: gravity,
        });
    }
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(CalibrationError::InvalidParameter {
            name: "tolerance",
            value: tolerance,
        });
    }
    if stationary_samples.is_empty() {
        return Err(CalibrationError::NoSamples);
    }
    if stationary_samples
        .iter()
        .any(|sample| !sample.iter().all(|v| v.is_finite()))
    {
        return Err(CalibrationError::NonFiniteSample);
    }

    let mean = stationary_samples.iter().sum::<Vector3<f64>>() / stationary_samples.len() as f64;

    let residual_for = |gravity_sign: GravitySign| {
        let isolator = MotionIsolator::with_settings(IsolatorSettings { gravity, gravity_sign });
        residual(&isolator, q, mean)
    };
    let subtract = residual_for(GravitySign::Subtract);
    let add = residual_for(GravitySign::Add);

    let calibration = if subtract <= add {
        SignCalibration {
            gravity_sign: GravitySign::Subtract,
            residual: subtract,
            rejected_residual: add,
        }
    } else {
        SignCalibration {
            gravity_sign: GravitySign::Add,
            residual: add,
            rejected_residual: subtract,
        }
    };

    if calibration.residual.is_nan() || calibration.residual > tolerance {
        return Err(CalibrationError::NotAtRest {
            residual: calibration.residual,
            tolerance,
        });
    }

    tracing::debug!(
        sign = ?calibration.gravity_sign,
        residual = calibration.residual,
        samples = stationary_samples.len(),
        "gravity sign calibrated"
    );
    Ok(calibration)
}

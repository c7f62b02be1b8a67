//! Core types and conventions for the attitude isolator

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::{ATTITUDE_SCALE, STANDARD_GRAVITY};

/// Roll, pitch and yaw in radians
///
/// Input to [`quaternion_from_euler`](crate::attitude::quaternion_from_euler).
/// Roll is applied first, then pitch, then yaw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about the body X axis
    pub roll: f64,
    /// Rotation about the body Y axis
    pub pitch: f64,
    /// Rotation about the Z axis (heading)
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }
}

/// Accuracy estimates that accompany an attitude report
///
/// Same integer scale as the angles. These values are carried through for
/// diagnostics and never enter the orientation math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttitudeAccuracy {
    pub roll: u32,
    pub pitch: u32,
    pub heading: u32,
}

/// One attitude report from the receiver
///
/// All three angles describe the same instant. Angles are signed integers in
/// units of the configured scale (1e-5 degrees for the reference feed).
///
/// # Example
/// ```
/// use attitude_isolator::RawAttitudeSample;
///
/// // Level, heading 90°
/// let sample = RawAttitudeSample::new(0, 0, 9_000_000);
/// assert!(sample.accuracy.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawAttitudeSample {
    pub roll: i32,
    pub pitch: i32,
    pub heading: i32,
    /// Optional accuracy estimates reported alongside the angles
    #[serde(default)]
    pub accuracy: Option<AttitudeAccuracy>,
}

impl RawAttitudeSample {
    pub fn new(roll: i32, pitch: i32, heading: i32) -> Self {
        Self {
            roll,
            pitch,
            heading,
            accuracy: None,
        }
    }

    /// Attach accuracy estimates to the sample
    pub fn with_accuracy(mut self, accuracy: AttitudeAccuracy) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// How the expected gravity vector is combined with the raw accelerometer sample
///
/// Depends on the polarity of the accelerometer at rest. With the device level
/// and stationary, the isolated output must be close to zero; see
/// [`calibrate_gravity_sign`](crate::calibration::calibrate_gravity_sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravitySign {
    /// `linear = raw - gravity` (Z reads +1g at rest)
    #[default]
    Subtract,
    /// `linear = raw + gravity` (Z reads -1g at rest)
    Add,
}

impl GravitySign {
    /// Multiplier applied to the expected gravity before adding it to the raw sample
    pub fn factor(self) -> f64 {
        match self {
            GravitySign::Subtract => -1.0,
            GravitySign::Add => 1.0,
        }
    }
}

/// Units of the accelerometer feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelerationUnit {
    /// m/s²
    #[default]
    MetersPerSecondSquared,
    /// Multiples of standard gravity
    StandardGravity,
}

impl AccelerationUnit {
    /// Gravity magnitude expressed in this unit
    pub fn gravity(self) -> f64 {
        match self {
            AccelerationUnit::MetersPerSecondSquared => STANDARD_GRAVITY,
            AccelerationUnit::StandardGravity => 1.0,
        }
    }
}

/// Attitude converter settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttitudeSettings {
    /// Degrees per LSB of the integer angle fields
    pub scale: f64,
}

impl Default for AttitudeSettings {
    fn default() -> Self {
        Self {
            scale: ATTITUDE_SCALE,
        }
    }
}

impl AttitudeSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Motion isolator settings
///
/// # Example
/// ```
/// use attitude_isolator::{AccelerationUnit, GravitySign, IsolatorSettings};
///
/// // Accelerometer reporting in g, Z reads -1g at rest
/// let settings = IsolatorSettings {
///     gravity: AccelerationUnit::StandardGravity.gravity(),
///     gravity_sign: GravitySign::Add,
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolatorSettings {
    /// Gravity magnitude in the accelerometer's units (9.80665 for m/s², 1.0 for g)
    pub gravity: f64,
    /// Whether expected gravity is subtracted from or added to the raw sample
    pub gravity_sign: GravitySign,
}

impl Default for IsolatorSettings {
    fn default() -> Self {
        Self::for_unit(AccelerationUnit::default())
    }
}

impl IsolatorSettings {
    /// Default settings for an accelerometer reporting in `unit`
    pub fn for_unit(unit: AccelerationUnit) -> Self {
        Self {
            gravity: unit.gravity(),
            gravity_sign: GravitySign::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        Ok(())
    }
}

/// Settings for the whole attitude/acceleration pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub attitude: AttitudeSettings,
    pub isolation: IsolatorSettings,
}

impl PipelineSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.attitude.validate()?;
        self.isolation.validate()
    }
}

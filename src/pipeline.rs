//! Single-owner attitude and acceleration pipeline

use nalgebra::{UnitQuaternion, Vector3};

use crate::attitude::{AttitudeConverter, Orientation};
use crate::isolation::MotionIsolator;
use crate::types::{AttitudeAccuracy, PipelineSettings, RawAttitudeSample};

/// Attitude reports in, linear acceleration out
///
/// Owns the current orientation. Every attitude report replaces it outright;
/// every accelerometer sample is isolated against whatever orientation is
/// current at that moment. Before the first attitude report the orientation
/// is identity.
///
/// For producers and consumers running on different threads, convert with
/// [`AttitudeConverter`] and share the result through
/// [`OrientationState`](crate::OrientationState) instead.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use attitude_isolator::{AttitudePipeline, RawAttitudeSample, STANDARD_GRAVITY};
///
/// let mut pipeline = AttitudePipeline::new();
/// pipeline.process_attitude(&RawAttitudeSample::new(0, 0, 9_000_000));
///
/// // Level with a 2 m/s² upward push
/// let linear = pipeline.process_acceleration(Vector3::new(0.0, 0.0, STANDARD_GRAVITY + 2.0));
/// assert!((linear.z - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct AttitudePipeline {
    settings: PipelineSettings,
    converter: AttitudeConverter,
    isolator: MotionIsolator,
    orientation: Orientation,
    accuracy: Option<AttitudeAccuracy>,
    attitude_samples: u64,
}

impl AttitudePipeline {
    /// Create a pipeline with default settings
    pub fn new() -> Self {
        Self::with_settings(PipelineSettings::default())
    }

    /// Create a pipeline with the specified settings
    ///
    /// Settings are not checked here; [`PipelineSettings::load`] and
    /// [`PipelineSettings::from_toml_str`] validate, hand-built settings should
    /// go through [`PipelineSettings::validate`]. Debug builds assert validity.
    pub fn with_settings(settings: PipelineSettings) -> Self {
        debug_assert!(settings.validate().is_ok(), "invalid pipeline settings: {settings:?}");
        Self {
            settings,
            converter: AttitudeConverter::with_settings(settings.attitude),
            isolator: MotionIsolator::with_settings(settings.isolation),
            orientation: UnitQuaternion::identity(),
            accuracy: None,
            attitude_samples: 0,
        }
    }

    pub fn settings(&self) -> PipelineSettings {
        self.settings
    }

    /// Convert an attitude report and make it the current orientation
    pub fn process_attitude(&mut self, sample: &RawAttitudeSample) -> Orientation {
        self.orientation = self.converter.convert_sample(sample);
        self.accuracy = sample.accuracy;
        self.attitude_samples += 1;

        tracing::trace!(
            roll = sample.roll,
            pitch = sample.pitch,
            heading = sample.heading,
            count = self.attitude_samples,
            "attitude sample"
        );

        self.orientation
    }

    /// Remove gravity from a raw accelerometer sample using the current orientation
    pub fn process_acceleration(&self, raw_accel: Vector3<f64>) -> Vector3<f64> {
        let linear = self.isolator.isolate(&self.orientation, raw_accel);
        if !linear.iter().all(|v| v.is_finite()) {
            tracing::warn!(?raw_accel, "non-finite linear acceleration");
        }
        linear
    }

    /// Linear acceleration of a raw sample expressed in the reference frame
    pub fn earth_acceleration(&self, raw_accel: Vector3<f64>) -> Vector3<f64> {
        self.isolator.earth_acceleration(&self.orientation, raw_accel)
    }

    /// Expected gravity in the sensor frame for the current orientation
    pub fn gravity(&self) -> Vector3<f64> {
        self.isolator.expected_gravity(&self.orientation)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Accuracy estimates from the most recent attitude report, if it had any
    pub fn accuracy(&self) -> Option<AttitudeAccuracy> {
        self.accuracy
    }

    /// Number of attitude reports processed since creation or reset
    pub fn attitude_samples(&self) -> u64 {
        self.attitude_samples
    }

    /// Return to identity orientation with no processed samples
    pub fn reset(&mut self) {
        self.orientation = UnitQuaternion::identity();
        self.accuracy = None;
        self.attitude_samples = 0;
    }
}

impl Default for AttitudePipeline {
    fn default() -> Self {
        Self::new()
    }
}

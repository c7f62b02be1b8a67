//! Attitude Isolator - attitude conversion and gravity removal for GNSS/INS feeds
//!
//! Converts the integer-scaled roll/pitch/heading of an attitude report (such
//! as u-blox UBX-NAV-ATT, 1e-5 degrees per LSB) into a unit quaternion, then
//! uses that orientation to remove gravity from raw accelerometer samples,
//! leaving the linear acceleration of the device.
//!
//! # Conventions
//!
//! - Euler angles compose intrinsically Z-Y-X: roll first, then pitch, then yaw.
//! - The orientation rotates the sensor body frame into a reference frame whose
//!   Z axis points up. A level, stationary accelerometer reads `(0, 0, +G)`.
//! - Accelerometers with the opposite polarity use [`GravitySign::Add`]; see
//!   [`calibration`] for how to pick the sign.
//! - The gravity magnitude is configurable: 9.80665 for m/s², 1.0 for g.
//!
//! This crate does no filtering: every attitude report replaces the previous
//! orientation, and each accelerometer sample is isolated on its own.
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use attitude_isolator::{AttitudePipeline, RawAttitudeSample, STANDARD_GRAVITY};
//!
//! let mut pipeline = AttitudePipeline::new();
//!
//! // Pitched up 90°, heading north
//! pipeline.process_attitude(&RawAttitudeSample::new(0, 9_000_000, 0));
//!
//! // Gravity now falls entirely on -X
//! let linear = pipeline.process_acceleration(Vector3::new(-STANDARD_GRAVITY, 0.0, 0.0));
//! assert!(linear.magnitude() < 1e-6);
//! ```
//!
//! The two steps are also available as pure functions:
//!
//! ```rust
//! use nalgebra::Vector3;
//! use attitude_isolator::{STANDARD_GRAVITY, convert, isolate};
//!
//! let q = convert(0, 0, 9_000_000);
//! let linear = isolate(&q, Vector3::new(0.0, 0.0, STANDARD_GRAVITY + 2.0));
//! assert!((linear.z - 2.0).abs() < 1e-9);
//! ```

pub mod attitude;
pub mod calibration;
mod config;
mod error;
pub mod isolation;
mod math;
mod pipeline;
mod state;
mod types;

// Re-export all public types and functions
pub use attitude::{AttitudeConverter, Orientation, convert, quaternion_from_euler};
pub use calibration::{SignCalibration, calibrate_gravity_sign};
pub use error::{CalibrationError, ConfigError};
pub use isolation::{MotionIsolator, expected_gravity, isolate};
pub use math::{ATTITUDE_SCALE, DEG_TO_RAD, QuaternionExt, RAD_TO_DEG, STANDARD_GRAVITY, scaled_to_radians};
pub use pipeline::AttitudePipeline;
pub use state::{OrientationSnapshot, OrientationState};
pub use types::*;

//! Error types for configuration and calibration

use thiserror::Error;

/// Failure to load or validate pipeline settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("gravity must be finite and positive, got {0}")]
    InvalidGravity(f64),
    #[error("attitude scale must be finite and non-zero, got {0}")]
    InvalidScale(f64),
}

/// Failure of the gravity-sign calibration check
#[derive(Debug, Error, PartialEq)]
pub enum CalibrationError {
    #[error("no stationary samples supplied")]
    NoSamples,
    #[error("stationary samples contain non-finite values")]
    NonFiniteSample,
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("device is not at rest: best residual {residual:.4} exceeds tolerance {tolerance:.4}")]
    NotAtRest { residual: f64, tolerance: f64 },
}

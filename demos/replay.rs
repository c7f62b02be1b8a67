//! Replays `testdata/attitude_log.csv` through the pipeline
//!
//! Usage: `cargo run --example replay [log.csv] [config.toml]`
//!
//! Set `RUST_LOG=attitude_isolator=trace` to see per-sample tracing.

use attitude_isolator::{AttitudeAccuracy, AttitudePipeline, PipelineSettings, QuaternionExt, RawAttitudeSample};
use nalgebra::Vector3;
use serde::Deserialize;
use std::error::Error;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct LogRecord {
    time: f64,
    roll: i32,
    pitch: i32,
    heading: i32,
    roll_accuracy: u32,
    pitch_accuracy: u32,
    heading_accuracy: u32,
    accel_x: f64,
    accel_y: f64,
    accel_z: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay=info,attitude_isolator=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let log_path = args.next().unwrap_or_else(|| "testdata/attitude_log.csv".to_string());
    let settings = match args.next() {
        Some(config_path) => PipelineSettings::load(config_path)?,
        None => {
            info!("No config given, using defaults");
            PipelineSettings::default()
        }
    };

    let mut pipeline = AttitudePipeline::with_settings(settings);
    let mut reader = csv::Reader::from_path(&log_path)?;
    info!(path = %log_path, "Replaying attitude log");

    println!(
        "{:>6} {:>8} {:>8} {:>8} {:>9} {:>9} {:>9}",
        "time", "roll", "pitch", "yaw", "lin_x", "lin_y", "lin_z"
    );

    for result in reader.deserialize() {
        let record: LogRecord = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(?e, "Skipping malformed record");
                continue;
            }
        };

        let attitude = RawAttitudeSample::new(record.roll, record.pitch, record.heading).with_accuracy(
            AttitudeAccuracy {
                roll: record.roll_accuracy,
                pitch: record.pitch_accuracy,
                heading: record.heading_accuracy,
            },
        );
        let euler = pipeline.process_attitude(&attitude).to_euler_degrees();
        let linear = pipeline.process_acceleration(Vector3::new(record.accel_x, record.accel_y, record.accel_z));

        println!(
            "{:>6.2} {:>8.3} {:>8.3} {:>8.3} {:>9.4} {:>9.4} {:>9.4}",
            record.time, euler.x, euler.y, euler.z, linear.x, linear.y, linear.z
        );
    }

    info!(samples = pipeline.attitude_samples(), "Replay finished");
    Ok(())
}

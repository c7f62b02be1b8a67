use attitude_isolator::{AttitudeAccuracy, AttitudePipeline, QuaternionExt, RawAttitudeSample};
use nalgebra::Vector3;

fn main() {
    let mut pipeline = AttitudePipeline::new();

    // Attitude report: roll 2.1°, pitch 3.2°, heading 4.3° (1e-5 degree units)
    let report = RawAttitudeSample::new(210_000, 320_000, 430_000).with_accuracy(AttitudeAccuracy {
        roll: 41_000,
        pitch: 72_000,
        heading: 50_000,
    });
    let quaternion = pipeline.process_attitude(&report);
    println!(
        "Quaternion: w={:.6} x={:.6} y={:.6} z={:.6}",
        quaternion.w, quaternion.i, quaternion.j, quaternion.k
    );

    let euler = quaternion.to_euler_degrees();
    println!("Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}", euler.x, euler.y, euler.z);

    // Raw accelerometer sample in m/s²
    let accelerometer = Vector3::new(-9.81, 5.1, 2.0);
    let linear = pipeline.process_acceleration(accelerometer);

    println!("Linear Accel X: {:.4}", linear.x);
    println!("Linear Accel Y: {:.4}", linear.y);
    println!("Linear Accel Z: {:.4}", linear.z);
}

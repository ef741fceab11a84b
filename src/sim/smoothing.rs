//! Critically damped smoothing
//!
//! Game-style "smooth damp": exponential approach to a moving target without
//! spring overshoot, frame-rate independent. Every smoothed value in the
//! simulation (player pose, camera orbit parameters, camera eye) goes through
//! these two functions.

use glam::Vec3;

/// Smallest smooth time accepted; slider input below this is clamped up
/// rather than asserted on, since the settings UI feeds arbitrary values.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Relax `current` toward `target`, carrying `velocity` across calls.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    target + (change + temp) * exp
}

/// Component-wise [`smooth_damp`] for 3-vectors.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;
    target + (change + temp) * exp
}

//! Egg Dash - core simulation for a 3D egg-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, camera, eggs, effects, game state)
//! - `settings`: Live-tunable parameters exposed to the debug/settings UI
//!
//! Rendering, windowing and input devices are external collaborators: they
//! feed a [`sim::FrameInput`] into [`sim::tick`] each frame and read a
//! [`sim::RenderSnapshot`] back. The core never issues draw calls.

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{FrameInput, GamePhase, GameWorld, RenderSnapshot};

/// Game configuration constants
pub mod consts {
    /// Ground plane is GROUND_SIZE x GROUND_SIZE, centered at the origin
    pub const GROUND_SIZE: f32 = 20.0;
    /// Hard world edge; slightly outside the ground for visual margin
    pub const WORLD_BOUNDARY: f32 = GROUND_SIZE / 2.0 + 1.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 1.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_RESPAWN_TIME: f32 = 3.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Scoring
    pub const EGG_SCORE: u32 = 10;
    /// Uncollected regular eggs allowed before the run ends
    pub const MAX_MISSES: u32 = 3;
    /// Seconds a ground marker lingers where an egg was missed
    pub const MISS_INDICATOR_DURATION: f32 = 1.5;

    /// Camera orbit limits (also the clamp range for the settings sliders)
    pub const CAMERA_MIN_HEIGHT: f32 = 1.0;
    pub const CAMERA_MAX_HEIGHT: f32 = 8.0;
    pub const CAMERA_MIN_DISTANCE: f32 = 3.0;
    pub const CAMERA_MAX_DISTANCE: f32 = 15.0;

    /// Effect defaults
    pub const COLLECTION_EFFECT_DURATION: f32 = 1.2;
    pub const COLLECTION_PARTICLES: usize = 16;
    pub const DEATH_EFFECT_DURATION: f32 = 2.0;
    pub const DEATH_PARTICLES: usize = 20;
    /// Downward acceleration on effect particles
    pub const EFFECT_GRAVITY: f32 = 9.8;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

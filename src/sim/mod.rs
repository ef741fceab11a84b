//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Single owner of all mutable state (`GameWorld`)
//! - No rendering or platform dependencies
//!
//! Per-tick ordering is fixed: discrete input transitions, then camera/player
//! targets, then smoothing, then egg lifecycle (collision before miss/expiry
//! before prune), then effects.

pub mod camera;
pub mod effects;
pub mod eggs;
pub mod player;
pub mod smoothing;
pub mod state;
pub mod tick;

pub use camera::CameraRig;
pub use effects::{Effect, EffectKind, EffectParticle};
pub use player::{Player, clamp_to_boundary};
pub use smoothing::{smooth_damp, smooth_damp_vec3};
pub use state::{
    CameraView, Egg, EggKind, EggSprite, GamePhase, GameWorld, MissIndicator, MissMarker,
    ParticleSprite, PlayerPose, RenderSnapshot,
};
pub use tick::{FrameInput, tick};

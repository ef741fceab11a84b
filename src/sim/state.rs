//! Game world state and core simulation types
//!
//! Every piece of mutable simulation state is owned by [`GameWorld`]; the
//! render and UI layers only read [`RenderSnapshot`]s built once per frame.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::CameraRig;
use super::effects::Effect;
use super::player::Player;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended (lives or miss cap)
    GameOver,
}

/// Collectible kind; every kind-dependent constant hangs off [`EggKind::profile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggKind {
    /// Awards score when touched
    Regular,
    /// Costs a life when touched
    Poison,
}

/// Static per-kind tuning
#[derive(Debug, Clone, Copy)]
pub struct EggProfile {
    pub radius: f32,
    pub lifespan: f32,
    /// Radians/sec for the sinusoidal pulse
    pub pulse_speed: f32,
    /// Scale ramps 0 -> 1 over this many seconds after spawn
    pub spawn_duration: f32,
    /// Scale ramps back down over the last this-many seconds of life
    pub despawn_duration: f32,
    /// Live population cap
    pub cap: usize,
    /// Seconds between spawn attempts
    pub spawn_interval: f32,
}

impl EggKind {
    pub fn profile(self) -> EggProfile {
        match self {
            EggKind::Regular => EggProfile {
                radius: 0.5,
                lifespan: 4.0,
                pulse_speed: 3.0,
                spawn_duration: 1.0,
                despawn_duration: 1.0,
                cap: 10,
                spawn_interval: 4.0,
            },
            // Poison eggs are bigger, shorter-lived and twitchier
            EggKind::Poison => EggProfile {
                radius: 0.6,
                lifespan: 3.0,
                pulse_speed: 5.0,
                spawn_duration: 0.7,
                despawn_duration: 0.7,
                cap: 5,
                spawn_interval: 6.0,
            },
        }
    }
}

/// A timed collectible (or hazard) sitting on the ground plane
#[derive(Debug, Clone)]
pub struct Egg {
    pub kind: EggKind,
    pub position: Vec3,
    pub color: Vec3,
    pub active: bool,
    /// Remaining lifetime in seconds
    pub life_timer: f32,
    /// Animated 0 -> 1 -> 0 over the lifecycle
    pub scale: f32,
    /// Sinusoidal pulse around 1.0
    pub pulse_factor: f32,
    pub spawning: bool,
    /// Latches once remaining life drops under the despawn window
    pub despawning: bool,
}

impl Egg {
    pub fn radius(&self) -> f32 {
        self.kind.profile().radius
    }

    /// Scale the renderer (and collision) should use this frame
    pub fn render_scale(&self) -> f32 {
        self.scale * self.pulse_factor
    }
}

/// Ground marker left where a regular egg expired uncollected.
/// `remaining` doubles as the fade-alpha driver.
#[derive(Debug, Clone, Copy)]
pub struct MissIndicator {
    pub position: Vec2,
    pub remaining: f32,
}

impl MissIndicator {
    pub fn alpha(&self) -> f32 {
        (self.remaining / MISS_INDICATOR_DURATION).clamp(0.0, 1.0)
    }
}

/// The single owning instance of all simulation state
#[derive(Debug, Clone)]
pub struct GameWorld {
    /// Run seed; reset reseeds from this for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub missed: u32,
    /// Accumulated sim time, drives pulse animation
    pub time: f32,
    pub player: Player,
    pub camera: CameraRig,
    pub eggs: Vec<Egg>,
    pub miss_indicators: Vec<MissIndicator>,
    pub effects: Vec<Effect>,
    pub egg_spawn_timer: f32,
    pub poison_spawn_timer: f32,
    /// Whether the input collaborator should capture the cursor
    pub capture_cursor: bool,
    /// Set when cancel is pressed on the start screen
    pub exit_requested: bool,
}

impl GameWorld {
    /// Create a fresh world at the start screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            lives: STARTING_LIVES,
            missed: 0,
            time: 0.0,
            player: Player::new(),
            camera: CameraRig::new(),
            eggs: Vec::new(),
            miss_indicators: Vec::new(),
            effects: Vec::new(),
            egg_spawn_timer: 0.0,
            poison_spawn_timer: 0.0,
            capture_cursor: false,
            exit_requested: false,
        }
    }

    /// Full reset: counters, entities, player pose, spawn timers, RNG.
    /// Leaves the phase alone; the state machine decides where to go next.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.missed = 0;
        self.time = 0.0;
        self.player = Player::new();
        self.eggs.clear();
        self.miss_indicators.clear();
        self.effects.clear();
        self.egg_spawn_timer = 0.0;
        self.poison_spawn_timer = 0.0;
        log::info!("game reset");
    }

    /// Live eggs of one kind
    pub fn active_egg_count(&self, kind: EggKind) -> usize {
        self.eggs
            .iter()
            .filter(|e| e.active && e.kind == kind)
            .count()
    }

    /// Read-only per-frame view for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            missed: self.missed,
            capture_cursor: self.capture_cursor,
            player: PlayerPose {
                position: self.player.position,
                yaw: self.player.rotation,
                alive: self.player.alive,
            },
            camera: CameraView {
                eye: self.camera.eye,
                target: self.player.position,
                up: Vec3::Y,
            },
            eggs: self
                .eggs
                .iter()
                .filter(|e| e.active)
                .map(|e| EggSprite {
                    position: e.position,
                    scale: e.render_scale(),
                    color: e.color,
                    kind: e.kind,
                })
                .collect(),
            miss_markers: self
                .miss_indicators
                .iter()
                .map(|m| MissMarker {
                    position: m.position,
                    alpha: m.alpha(),
                })
                .collect(),
            particles: self
                .effects
                .iter()
                .flat_map(|e| {
                    let alpha = e.alpha();
                    e.particles.iter().map(move |p| ParticleSprite {
                        position: p.position,
                        size: p.size,
                        color: p.color,
                        rotation: p.rotation,
                        alpha,
                    })
                })
                .collect(),
        }
    }
}

/// Player pose as the renderer sees it
#[derive(Debug, Clone, Copy)]
pub struct PlayerPose {
    pub position: Vec3,
    pub yaw: f32,
    pub alive: bool,
}

/// Look-at parameters for the view matrix
#[derive(Debug, Clone, Copy)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// One drawable egg
#[derive(Debug, Clone, Copy)]
pub struct EggSprite {
    pub position: Vec3,
    pub scale: f32,
    pub color: Vec3,
    pub kind: EggKind,
}

/// One fading ground marker
#[derive(Debug, Clone, Copy)]
pub struct MissMarker {
    pub position: Vec2,
    pub alpha: f32,
}

/// One drawable effect particle
#[derive(Debug, Clone, Copy)]
pub struct ParticleSprite {
    pub position: Vec3,
    pub size: Vec3,
    pub color: Vec3,
    pub rotation: f32,
    pub alpha: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub missed: u32,
    pub capture_cursor: bool,
    pub player: PlayerPose,
    pub camera: CameraView,
    pub eggs: Vec<EggSprite>,
    pub miss_markers: Vec<MissMarker>,
    pub particles: Vec<ParticleSprite>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_at_title() {
        let world = GameWorld::new(7);
        assert_eq!(world.phase, GamePhase::Start);
        assert_eq!(world.lives, STARTING_LIVES);
        assert_eq!(world.score, 0);
        assert!(world.eggs.is_empty());
        assert!(!world.capture_cursor);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut world = GameWorld::new(7);
        world.score = 120;
        world.lives = 1;
        world.missed = 2;
        world.eggs.push(Egg {
            kind: EggKind::Regular,
            position: Vec3::ZERO,
            color: Vec3::ONE,
            active: true,
            life_timer: 1.0,
            scale: 1.0,
            pulse_factor: 1.0,
            spawning: false,
            despawning: false,
        });
        world.miss_indicators.push(MissIndicator {
            position: Vec2::ZERO,
            remaining: 1.0,
        });
        world.player.position = Vec3::new(3.0, 1.0, -2.0);

        world.reset();
        assert_eq!(world.score, 0);
        assert_eq!(world.lives, STARTING_LIVES);
        assert_eq!(world.missed, 0);
        assert!(world.eggs.is_empty());
        assert!(world.miss_indicators.is_empty());
        assert!(world.effects.is_empty());
        assert_eq!(world.player.position, Player::SPAWN_POINT);
        assert!(world.player.alive);
    }

    #[test]
    fn test_snapshot_skips_inactive_eggs() {
        let mut world = GameWorld::new(7);
        world.eggs.push(Egg {
            kind: EggKind::Regular,
            position: Vec3::ZERO,
            color: Vec3::ONE,
            active: false,
            life_timer: 0.0,
            scale: 0.0,
            pulse_factor: 1.0,
            spawning: false,
            despawning: true,
        });
        assert!(world.snapshot().eggs.is_empty());
    }

    #[test]
    fn test_poison_profile_is_twitchier() {
        let regular = EggKind::Regular.profile();
        let poison = EggKind::Poison.profile();
        assert!(poison.pulse_speed > regular.pulse_speed);
        assert!(poison.lifespan < regular.lifespan);
        assert!(poison.radius > regular.radius);
    }
}

//! Player movement, boundary clamping and the kill/respawn cycle
//!
//! Input moves the *target* position; the visible sphere eases toward it via
//! smooth damp, so it glides into walls instead of snapping.

use glam::{Vec2, Vec3};

use super::camera::CameraRig;
use super::smoothing::{smooth_damp, smooth_damp_vec3};
use super::state::{GamePhase, GameWorld};
use crate::Settings;
use crate::consts::*;

/// The player-controlled sphere
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub target_position: Vec3,
    pub position_velocity: Vec3,
    /// Yaw in radians
    pub rotation: f32,
    pub target_rotation: f32,
    pub rotation_velocity: f32,
    pub alive: bool,
    /// Counts down only while dead
    pub respawn_timer: f32,
    pub radius: f32,
    pub speed: f32,
}

impl Player {
    pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub fn new() -> Self {
        Self {
            position: Self::SPAWN_POINT,
            target_position: Self::SPAWN_POINT,
            position_velocity: Vec3::ZERO,
            rotation: 0.0,
            target_rotation: 0.0,
            rotation_velocity: 0.0,
            alive: true,
            respawn_timer: 0.0,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
        }
    }

    /// Move the target position by a 2D intent resolved through the camera
    /// basis (x = strafe right, y = forward, i.e. away from the camera).
    /// Facing only updates while the intent is non-zero.
    pub fn apply_movement(
        &mut self,
        axis: Vec2,
        camera: &CameraRig,
        speed_scale: f32,
        dt: f32,
    ) {
        let movement = camera.right * axis.x - camera.forward * axis.y;
        if movement.length_squared() <= f32::EPSILON {
            return;
        }
        let movement = movement.normalize();
        let desired = movement.x.atan2(movement.z);
        // Take the short way around when the facing crosses the ±π seam
        self.target_rotation += crate::normalize_angle(desired - self.target_rotation);
        self.target_position += movement * self.speed * speed_scale * dt;
        self.target_position = clamp_to_boundary(self.target_position, self.radius);
    }

    /// Back to the spawn point, target synced so smoothing doesn't drag
    /// the sphere across the arena.
    pub fn respawn(&mut self) {
        self.position = Self::SPAWN_POINT;
        self.target_position = Self::SPAWN_POINT;
        self.position_velocity = Vec3::ZERO;
        self.alive = true;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a position inside the walls and above the ground.
pub fn clamp_to_boundary(mut position: Vec3, radius: f32) -> Vec3 {
    let boundary = WORLD_BOUNDARY - radius;
    position.x = position.x.clamp(-boundary, boundary);
    position.z = position.z.clamp(-boundary, boundary);
    position.y = position.y.max(radius);
    position
}

impl GameWorld {
    /// Take a life; at zero the run is over. No-op when already dead.
    pub fn kill_player(&mut self) {
        if !self.player.alive {
            return;
        }
        self.player.alive = false;
        self.lives = self.lives.saturating_sub(1);
        self.player.respawn_timer = PLAYER_RESPAWN_TIME;

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.capture_cursor = false;
            log::info!("game over: out of lives, final score {}", self.score);
        } else {
            log::info!("player down, {} lives remaining", self.lives);
        }
    }

    /// Respawn countdown while dead; pose smoothing while alive.
    pub fn update_player(&mut self, settings: &Settings, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }

        if !self.player.alive {
            self.player.respawn_timer -= dt;
            if self.player.respawn_timer <= 0.0 {
                self.player.respawn();
                log::info!("player respawned");
            }
            return;
        }

        self.player.position = smooth_damp_vec3(
            self.player.position,
            self.player.target_position,
            &mut self.player.position_velocity,
            settings.position_smooth_time,
            dt,
        );
        self.player.rotation = smooth_damp(
            self.player.rotation,
            self.player.target_rotation,
            &mut self.player.rotation_velocity,
            settings.rotation_smooth_time,
            dt,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn playing_world() -> GameWorld {
        let mut world = GameWorld::new(42);
        world.phase = GamePhase::Playing;
        world
    }

    #[test]
    fn test_movement_is_camera_relative() {
        let mut player = Player::new();
        let camera = CameraRig::new(); // angle 0: forward = +Z, right = +X
        player.apply_movement(Vec2::new(0.0, 1.0), &camera, 1.0, DT);
        // "forward" intent moves away from the camera, along -Z here
        assert!(player.target_position.z < 0.0);
        assert!((player.target_position.x).abs() < 1e-5);
    }

    #[test]
    fn test_facing_freezes_when_idle() {
        let mut player = Player::new();
        let camera = CameraRig::new();
        player.apply_movement(Vec2::new(1.0, 0.0), &camera, 1.0, DT);
        let facing = player.target_rotation;
        assert!(facing != 0.0);
        player.apply_movement(Vec2::ZERO, &camera, 1.0, DT);
        assert_eq!(player.target_rotation, facing);
    }

    #[test]
    fn test_diagonal_speed_matches_cardinal() {
        let camera = CameraRig::new();
        let mut straight = Player::new();
        let mut diagonal = Player::new();
        straight.apply_movement(Vec2::new(0.0, 1.0), &camera, 1.0, DT);
        diagonal.apply_movement(Vec2::new(1.0, 1.0), &camera, 1.0, DT);
        let d_straight = straight.target_position.distance(Player::SPAWN_POINT);
        let d_diagonal = diagonal.target_position.distance(Player::SPAWN_POINT);
        assert!((d_straight - d_diagonal).abs() < 1e-5);
    }

    #[test]
    fn test_kill_decrements_lives_and_arms_respawn() {
        let mut world = playing_world();
        world.kill_player();
        assert!(!world.player.alive);
        assert_eq!(world.lives, STARTING_LIVES - 1);
        assert_eq!(world.player.respawn_timer, PLAYER_RESPAWN_TIME);
        assert_eq!(world.phase, GamePhase::Playing);

        // Already dead: nothing more happens
        world.kill_player();
        assert_eq!(world.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_last_life_forces_game_over() {
        let mut world = playing_world();
        world.lives = 1;
        world.kill_player();
        assert_eq!(world.lives, 0);
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_respawn_after_countdown() {
        let mut world = playing_world();
        world.player.position = Vec3::new(5.0, 1.0, 5.0);
        world.kill_player();

        let settings = Settings::default();
        let steps = (PLAYER_RESPAWN_TIME / DT) as usize + 2;
        for _ in 0..steps {
            world.update_player(&settings, DT);
        }
        assert!(world.player.alive);
        assert_eq!(world.player.position, Player::SPAWN_POINT);
    }

    #[test]
    fn test_countdown_only_runs_while_playing() {
        let mut world = playing_world();
        world.kill_player();
        world.phase = GamePhase::Paused;
        world.update_player(&Settings::default(), 10.0);
        assert!(!world.player.alive);
        assert_eq!(world.player.respawn_timer, PLAYER_RESPAWN_TIME);
    }

    proptest! {
        #[test]
        fn prop_clamp_keeps_position_in_bounds(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            z in -100.0f32..100.0,
        ) {
            let clamped = clamp_to_boundary(Vec3::new(x, y, z), PLAYER_RADIUS);
            let boundary = WORLD_BOUNDARY - PLAYER_RADIUS;
            prop_assert!(clamped.x.abs() <= boundary);
            prop_assert!(clamped.z.abs() <= boundary);
            prop_assert!(clamped.y >= PLAYER_RADIUS);
        }
    }
}

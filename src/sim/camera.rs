//! Orbit-follow camera
//!
//! The rig orbits the player: mouse/scroll/joystick move the angle, height
//! and distance *targets*; every tick the current values relax toward them
//! and the eye position eases toward its derived orbit point. The
//! forward/right basis is recomputed from the smoothed angle after the
//! relaxation step, so movement input each frame uses last frame's basis
//! (one frame of lag, matching the reference feel).

use glam::{Vec2, Vec3};

use super::smoothing::{smooth_damp, smooth_damp_vec3};
use crate::Settings;

#[derive(Debug, Clone)]
pub struct CameraRig {
    pub angle: f32,
    pub target_angle: f32,
    angle_velocity: f32,

    pub height: f32,
    pub target_height: f32,
    height_velocity: f32,

    pub distance: f32,
    pub target_distance: f32,
    distance_velocity: f32,

    /// Smoothed eye position fed to the view matrix
    pub eye: Vec3,
    eye_velocity: Vec3,

    /// Unit vector from the player toward the camera, projected on the ground
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        let mut rig = Self {
            angle: 0.0,
            target_angle: 0.0,
            angle_velocity: 0.0,
            height: 3.0,
            target_height: 3.0,
            height_velocity: 0.0,
            distance: 6.0,
            target_distance: 6.0,
            distance_velocity: 0.0,
            eye: Vec3::new(0.0, 3.0, 8.0),
            eye_velocity: Vec3::ZERO,
            forward: Vec3::Z,
            right: Vec3::X,
        };
        rig.update_basis();
        rig
    }

    /// Mouse look: horizontal delta orbits, vertical delta (inverted)
    /// raises/lowers, both accumulated onto the targets.
    pub fn apply_mouse(&mut self, delta: Vec2, settings: &Settings) {
        let dx = delta.x * settings.mouse_sensitivity;
        let dy = delta.y * settings.mouse_sensitivity;
        self.target_angle += dx * 0.01;
        self.target_height -= dy * 0.1;
        self.clamp_targets(settings);
    }

    /// Scroll-to-zoom onto the distance target
    pub fn apply_scroll(&mut self, delta: f32, settings: &Settings) {
        self.target_distance -= delta * settings.scroll_sensitivity;
        self.clamp_targets(settings);
    }

    /// Joystick camera axes (already deadzone-filtered by the caller);
    /// coarser per-frame steps than the mouse.
    pub fn apply_joystick(&mut self, axes: Vec2, settings: &Settings) {
        self.target_angle += axes.x * 0.05;
        self.target_height -= axes.y * 0.5;
        self.clamp_targets(settings);
    }

    /// Where the eye wants to be for a given player position
    pub fn eye_target(&self, player_pos: Vec3) -> Vec3 {
        player_pos
            + Vec3::new(
                self.angle.sin() * self.distance,
                self.height,
                self.angle.cos() * self.distance,
            )
    }

    /// Relax toward targets, then derive the basis from the smoothed angle.
    pub fn tick(&mut self, player_pos: Vec3, settings: &Settings, dt: f32) {
        // The UI may write targets directly; re-clamp before smoothing.
        self.clamp_targets(settings);

        let st = settings.camera_smooth_time;
        self.distance = smooth_damp(
            self.distance,
            self.target_distance,
            &mut self.distance_velocity,
            st,
            dt,
        );
        self.height = smooth_damp(
            self.height,
            self.target_height,
            &mut self.height_velocity,
            st,
            dt,
        );
        self.angle = smooth_damp(
            self.angle,
            self.target_angle,
            &mut self.angle_velocity,
            st,
            dt,
        );

        let eye_target = self.eye_target(player_pos);
        self.eye = smooth_damp_vec3(self.eye, eye_target, &mut self.eye_velocity, st, dt);

        self.update_basis();
    }

    fn clamp_targets(&mut self, settings: &Settings) {
        self.target_height = self
            .target_height
            .clamp(settings.camera_min_height, settings.camera_max_height);
        self.target_distance = self
            .target_distance
            .clamp(settings.camera_min_distance, settings.camera_max_distance);
    }

    fn update_basis(&mut self) {
        self.forward = Vec3::new(self.angle.sin(), 0.0, self.angle.cos());
        self.right = Vec3::new(self.angle.cos(), 0.0, -self.angle.sin());
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_mouse_height_clamped() {
        let settings = Settings::default();
        let mut rig = CameraRig::new();
        rig.apply_mouse(Vec2::new(0.0, -10_000.0), &settings);
        assert_eq!(rig.target_height, CAMERA_MAX_HEIGHT);
        rig.apply_mouse(Vec2::new(0.0, 10_000.0), &settings);
        assert_eq!(rig.target_height, CAMERA_MIN_HEIGHT);
    }

    #[test]
    fn test_scroll_distance_clamped() {
        let settings = Settings::default();
        let mut rig = CameraRig::new();
        rig.apply_scroll(1_000.0, &settings);
        assert_eq!(rig.target_distance, CAMERA_MIN_DISTANCE);
        rig.apply_scroll(-1_000.0, &settings);
        assert_eq!(rig.target_distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn test_basis_follows_smoothed_angle() {
        let settings = Settings::default();
        let mut rig = CameraRig::new();
        rig.target_angle = std::f32::consts::FRAC_PI_2;
        // plenty of ticks to converge
        for _ in 0..600 {
            rig.tick(Vec3::ZERO, &settings, DT);
        }
        assert!((rig.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-2);
        assert!((rig.forward - Vec3::X).length() < 1e-2);
        assert!((rig.right - -Vec3::Z).length() < 1e-2);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let settings = Settings::default();
        let mut rig = CameraRig::new();
        rig.target_angle = 1.3;
        for _ in 0..120 {
            rig.tick(Vec3::ZERO, &settings, DT);
        }
        assert!((rig.forward.length() - 1.0).abs() < 1e-5);
        assert!((rig.right.length() - 1.0).abs() < 1e-5);
        assert!(rig.forward.dot(rig.right).abs() < 1e-5);
    }

    #[test]
    fn test_eye_converges_to_orbit_point() {
        let settings = Settings::default();
        let mut rig = CameraRig::new();
        let player = Vec3::new(2.0, 1.0, -3.0);
        for _ in 0..600 {
            rig.tick(player, &settings, DT);
        }
        let expected = rig.eye_target(player);
        assert!((rig.eye - expected).length() < 0.05);
        // orbit geometry: eye sits `distance` away horizontally, `height` up
        let offset = rig.eye - player;
        assert!((Vec2::new(offset.x, offset.z).length() - rig.distance).abs() < 0.05);
        assert!((offset.y - rig.height).abs() < 0.05);
    }

    #[test]
    fn test_ui_written_targets_are_reclamped() {
        let settings = Settings::default();
        let mut rig = CameraRig::new();
        // a settings panel writing out-of-range values directly
        rig.target_distance = 500.0;
        rig.target_height = -20.0;
        rig.tick(Vec3::ZERO, &settings, DT);
        assert!(rig.target_distance <= CAMERA_MAX_DISTANCE);
        assert!(rig.target_height >= CAMERA_MIN_HEIGHT);
    }
}

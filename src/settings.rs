//! Live-tunable game settings
//!
//! The debug/settings UI reads and overwrites these mid-game, so every value
//! is clamped by `sanitized()` at the point of use rather than validated up
//! front. Serialized as JSON for the UI collaborator.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable parameters and capability toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Smoothing ===
    /// Player position smooth time (seconds)
    pub position_smooth_time: f32,
    /// Player facing smooth time (seconds)
    pub rotation_smooth_time: f32,
    /// Camera orbit/eye smooth time (seconds)
    pub camera_smooth_time: f32,

    // === Sensitivity ===
    /// Mouse look scale (degrees-ish per pixel)
    pub mouse_sensitivity: f32,
    /// Scroll-to-zoom scale
    pub scroll_sensitivity: f32,
    /// Joystick movement speed multiplier
    pub joystick_sensitivity: f32,
    /// Axis magnitude below which joystick input reads as zero
    pub joystick_deadzone: f32,

    // === Camera limits ===
    pub camera_min_height: f32,
    pub camera_max_height: f32,
    pub camera_min_distance: f32,
    pub camera_max_distance: f32,

    // === Optional subsystems ===
    /// Count expired regular eggs as misses (miss cap ends the run)
    pub miss_tracking: bool,
    /// Spawn collection/death particle effects
    pub effects: bool,
    /// Accept joystick movement and camera axes
    pub joystick: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            position_smooth_time: 0.1,
            rotation_smooth_time: 0.05,
            camera_smooth_time: 0.1,

            mouse_sensitivity: 0.1,
            scroll_sensitivity: 0.5,
            joystick_sensitivity: 2.0,
            joystick_deadzone: 0.2,

            camera_min_height: CAMERA_MIN_HEIGHT,
            camera_max_height: CAMERA_MAX_HEIGHT,
            camera_min_distance: CAMERA_MIN_DISTANCE,
            camera_max_distance: CAMERA_MAX_DISTANCE,

            miss_tracking: true,
            effects: true,
            joystick: true,
        }
    }
}

impl Settings {
    /// Copy with every field clamped to its slider range.
    ///
    /// The tick consumes settings through this, so a UI writing garbage
    /// (zero smooth times, inverted camera limits) cannot break the sim.
    pub fn sanitized(&self) -> Self {
        let mut s = self.clone();
        s.position_smooth_time = s.position_smooth_time.clamp(0.01, 0.5);
        s.rotation_smooth_time = s.rotation_smooth_time.clamp(0.01, 0.3);
        s.camera_smooth_time = s.camera_smooth_time.clamp(0.01, 0.5);

        s.mouse_sensitivity = s.mouse_sensitivity.clamp(0.01, 1.0);
        s.scroll_sensitivity = s.scroll_sensitivity.clamp(0.05, 2.0);
        s.joystick_sensitivity = s.joystick_sensitivity.clamp(0.1, 5.0);
        s.joystick_deadzone = s.joystick_deadzone.clamp(0.0, 0.5);

        s.camera_min_height = s.camera_min_height.clamp(CAMERA_MIN_HEIGHT, CAMERA_MAX_HEIGHT);
        s.camera_max_height = s.camera_max_height.clamp(s.camera_min_height, CAMERA_MAX_HEIGHT);
        s.camera_min_distance = s
            .camera_min_distance
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        s.camera_max_distance = s
            .camera_max_distance
            .clamp(s.camera_min_distance, CAMERA_MAX_DISTANCE);
        s
    }

    /// Serialize for the settings UI
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parse a UI-edited settings blob; malformed input falls back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("ignoring malformed settings json: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_smooth_times() {
        let s = Settings {
            position_smooth_time: 0.0,
            rotation_smooth_time: -3.0,
            camera_smooth_time: 99.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.position_smooth_time, 0.01);
        assert_eq!(s.rotation_smooth_time, 0.01);
        assert_eq!(s.camera_smooth_time, 0.5);
    }

    #[test]
    fn test_sanitize_orders_camera_limits() {
        let s = Settings {
            camera_min_height: 7.0,
            camera_max_height: 2.0,
            camera_min_distance: 14.0,
            camera_max_distance: 4.0,
            ..Default::default()
        }
        .sanitized();
        assert!(s.camera_min_height <= s.camera_max_height);
        assert!(s.camera_min_distance <= s.camera_max_distance);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            mouse_sensitivity: 0.25,
            miss_tracking: false,
            ..Default::default()
        };
        let parsed = Settings::from_json(&s.to_json());
        assert_eq!(parsed.mouse_sensitivity, 0.25);
        assert!(!parsed.miss_tracking);
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        let parsed = Settings::from_json("{not json");
        assert_eq!(parsed.joystick_deadzone, Settings::default().joystick_deadzone);
    }
}

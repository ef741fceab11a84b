//! Per-frame simulation tick
//!
//! One call per displayed frame: discrete state-machine transitions first,
//! then (while Playing) camera/player targets from input, smoothing, egg
//! lifecycle and effects. Everything outside Playing is frozen.

use glam::Vec2;

use super::effects::update_effects;
use super::state::{GamePhase, GameWorld};
use crate::Settings;

/// Input snapshot for a single frame (deterministic)
///
/// Button fields are press *edges*, not held state; the input collaborator
/// debounces keys/buttons before filling this in.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Keyboard movement: x = strafe right, y = forward (away from camera)
    pub move_axis: Vec2,
    /// Joystick movement stick (raw, deadzone applied here)
    pub joystick_move: Vec2,
    /// Joystick camera stick (raw, deadzone applied here)
    pub joystick_camera: Vec2,
    /// Mouse-look delta in pixels
    pub mouse_delta: Vec2,
    /// Scroll wheel delta (positive = zoom in)
    pub scroll_delta: f32,
    /// Start the game from the title screen
    pub confirm: bool,
    /// Toggle pause
    pub pause: bool,
    /// Restart the run in place
    pub reset: bool,
    /// Back out (pause/game-over -> title, title -> quit)
    pub cancel: bool,
}

/// Advance the world by one frame.
pub fn tick(world: &mut GameWorld, input: &FrameInput, settings: &Settings, dt: f32) {
    // The UI edits settings live; consume them through the clamp
    let settings = settings.sanitized();

    match world.phase {
        GamePhase::Start => {
            if input.cancel {
                world.exit_requested = true;
                return;
            }
            if input.confirm {
                world.phase = GamePhase::Playing;
                world.capture_cursor = true;
                log::info!("game started");
            }
        }
        GamePhase::Playing => {
            if input.pause {
                world.phase = GamePhase::Paused;
                world.capture_cursor = false;
                log::info!("game paused");
            } else if input.reset {
                world.reset();
                world.capture_cursor = true;
            }
        }
        GamePhase::Paused => {
            if input.pause {
                world.phase = GamePhase::Playing;
                world.capture_cursor = true;
                log::info!("game resumed");
            } else if input.cancel {
                world.reset();
                world.phase = GamePhase::Start;
                world.capture_cursor = false;
            } else if input.reset {
                world.reset();
                world.phase = GamePhase::Playing;
                world.capture_cursor = true;
            }
        }
        GamePhase::GameOver => {
            if input.cancel {
                world.reset();
                world.phase = GamePhase::Start;
                world.capture_cursor = false;
            } else if input.reset {
                world.reset();
                world.phase = GamePhase::Playing;
                world.capture_cursor = true;
            }
        }
    }

    if world.phase != GamePhase::Playing {
        return;
    }

    world.time += dt;

    // Camera targets from this frame's look input
    world.camera.apply_mouse(input.mouse_delta, &settings);
    if input.scroll_delta != 0.0 {
        world.camera.apply_scroll(input.scroll_delta, &settings);
    }
    if settings.joystick {
        let cam_axes = apply_deadzone(input.joystick_camera, settings.joystick_deadzone);
        if cam_axes != Vec2::ZERO {
            world.camera.apply_joystick(cam_axes, &settings);
        }
    }

    // Movement intent resolves through *last* frame's camera basis
    if world.player.alive {
        world
            .player
            .apply_movement(input.move_axis, &world.camera, 1.0, dt);
        if settings.joystick {
            let stick = apply_deadzone(input.joystick_move, settings.joystick_deadzone);
            if stick != Vec2::ZERO {
                // Stick y is inverted relative to the forward axis
                let axis = Vec2::new(stick.x, -stick.y);
                world.player.apply_movement(
                    axis,
                    &world.camera,
                    settings.joystick_sensitivity,
                    dt,
                );
            }
        }
    }

    // Smooth pose and respawn countdown, then the camera (basis recomputed
    // after smoothing, giving movement its accepted one-frame lag)
    world.update_player(&settings, dt);
    let player_pos = world.player.position;
    world.camera.tick(player_pos, &settings, dt);

    // Egg lifecycle: collision -> miss/expiry -> prune, in that order
    world.update_eggs(&settings, dt);
    world.update_miss_indicators(dt);
    update_effects(&mut world.effects, dt);
}

/// Joystick axes below the deadzone read as zero, per component.
fn apply_deadzone(axes: Vec2, deadzone: f32) -> Vec2 {
    Vec2::new(
        if axes.x.abs() < deadzone { 0.0 } else { axes.x },
        if axes.y.abs() < deadzone { 0.0 } else { axes.y },
    )
}

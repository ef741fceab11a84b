//! Egg Dash entry point
//!
//! Headless demo: scripts a short session against the core simulation and
//! logs what happens. Real builds wire a renderer and an input collaborator
//! around the same `tick` call.

use glam::Vec2;

use egg_dash::sim::{FrameInput, GamePhase, GameWorld, tick};
use egg_dash::{Settings, consts};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xE66);
    let settings = Settings::default();
    let mut world = GameWorld::new(seed);

    log::info!("starting scripted run with seed {seed}");
    tick(
        &mut world,
        &FrameInput {
            confirm: true,
            ..Default::default()
        },
        &settings,
        DT,
    );

    // Wander for up to 60 simulated seconds, slowly orbiting the camera
    let frames = (60.0 / DT) as usize;
    for frame in 0..frames {
        let t = frame as f32 * DT;
        let input = FrameInput {
            move_axis: Vec2::new(t.cos(), t.sin()),
            mouse_delta: Vec2::new(1.5, 0.0),
            ..Default::default()
        };
        tick(&mut world, &input, &settings, DT);
        if world.phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = world.snapshot();
    log::info!(
        "run finished: {:?}, score {}, lives {}, misses {}/{}",
        snapshot.phase,
        snapshot.score,
        snapshot.lives,
        snapshot.missed,
        consts::MAX_MISSES
    );
    let summary = serde_json::json!({
        "seed": seed,
        "phase": format!("{:?}", snapshot.phase),
        "score": snapshot.score,
        "lives": snapshot.lives,
        "missed": snapshot.missed,
        "eggs_on_ground": snapshot.eggs.len(),
    });
    println!("{summary}");
}

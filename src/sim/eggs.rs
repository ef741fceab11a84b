//! Egg lifecycle: spawning, aging, animation, collision, misses, pruning
//!
//! Per tick the order is fixed: spawn timers, then per-egg aging/animation
//! and player collision, then miss/expiry bookkeeping, then pruning. Miss
//! detection always observes an egg's final state before it is removed, and
//! collisions use the scale animated *this* frame, so an egg that is still
//! materializing (scale near zero) cannot be touched.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::effects::Effect;
use super::state::{Egg, EggKind, GamePhase, GameWorld, MissIndicator};
use crate::Settings;
use crate::consts::*;

impl GameWorld {
    /// Advance spawn timers, animate and collide every active egg.
    pub fn update_eggs(&mut self, settings: &Settings, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.egg_spawn_timer += dt;
        self.poison_spawn_timer += dt;

        // Fixed-interval policy: the attempt is consumed and the timer goes
        // back to zero whether or not the spawn succeeds; overshoot is
        // discarded rather than carried into the next interval.
        if self.egg_spawn_timer >= EggKind::Regular.profile().spawn_interval {
            self.try_spawn(EggKind::Regular);
            self.egg_spawn_timer = 0.0;
        }
        if self.poison_spawn_timer >= EggKind::Poison.profile().spawn_interval {
            self.try_spawn(EggKind::Poison);
            self.poison_spawn_timer = 0.0;
        }

        let time = self.time;
        let player_alive = self.player.alive;
        let player_pos = self.player.position;
        let player_radius = self.player.radius;

        let mut collected: Vec<(Vec3, Vec3)> = Vec::new();
        let mut poison_hits: Vec<Vec3> = Vec::new();

        for egg in self.eggs.iter_mut() {
            if !egg.active {
                continue;
            }
            let profile = egg.kind.profile();

            egg.life_timer -= dt;
            egg.pulse_factor = 1.0 + 0.1 * (time * profile.pulse_speed).sin();

            if egg.spawning {
                let elapsed = profile.lifespan - egg.life_timer;
                if elapsed < profile.spawn_duration {
                    egg.scale = elapsed / profile.spawn_duration;
                } else {
                    egg.scale = 1.0;
                    egg.spawning = false;
                }
            }

            // Latches permanently once the despawn window starts
            if egg.life_timer <= profile.despawn_duration && !egg.despawning {
                egg.despawning = true;
            }
            if egg.despawning {
                egg.scale = (egg.life_timer / profile.despawn_duration).max(0.0);
            }

            if player_alive {
                let distance = player_pos.distance(egg.position);
                let collision_distance = player_radius + egg.radius() * egg.scale;
                if distance < collision_distance {
                    match egg.kind {
                        EggKind::Poison => poison_hits.push(egg.position),
                        EggKind::Regular => collected.push((egg.position, egg.color)),
                    }
                    egg.active = false;
                }
            }
        }

        for (position, color) in collected {
            self.score += EGG_SCORE;
            log::debug!("egg collected, score {}", self.score);
            if settings.effects {
                let effect = Effect::collection(position, color, &mut self.rng);
                self.effects.push(effect);
            }
        }
        for position in poison_hits {
            // Two poison eggs on the same frame only cost one life
            if !self.player.alive {
                continue;
            }
            log::debug!("player touched a poison egg");
            if settings.effects {
                let effect = Effect::death(position, &mut self.rng);
                self.effects.push(effect);
            }
            self.kill_player();
        }

        // Miss/expiry bookkeeping must see expired eggs before pruning
        self.check_expired_eggs(settings);
        self.prune_inactive_eggs();
    }

    /// Spawn one egg of `kind` if the game is live and the cap allows it.
    fn try_spawn(&mut self, kind: EggKind) {
        // Keep the list clean before counting
        self.prune_inactive_eggs();

        if self.phase != GamePhase::Playing {
            return;
        }
        let profile = kind.profile();
        if self.active_egg_count(kind) >= profile.cap {
            return;
        }

        // Keep eggs away from the walls
        let inner = WORLD_BOUNDARY - profile.radius - 1.0;
        let x = self.rng.random_range(-inner..=inner);
        let z = self.rng.random_range(-inner..=inner);
        let color = match kind {
            EggKind::Regular => Vec3::new(
                self.rng.random_range(0.5..=1.0),
                self.rng.random_range(0.5..=1.0),
                self.rng.random_range(0.5..=1.0),
            ),
            EggKind::Poison => Vec3::new(0.6, 0.2, 0.8),
        };

        self.eggs.push(Egg {
            kind,
            position: Vec3::new(x, profile.radius, z),
            color,
            active: true,
            life_timer: profile.lifespan,
            scale: 0.0,
            pulse_factor: 1.0,
            spawning: true,
            despawning: false,
        });
        log::debug!("{kind:?} egg spawned at ({x:.1}, {z:.1})");
    }

    /// Expire timed-out eggs; uncollected regular eggs count as misses when
    /// miss tracking is on, and the miss cap ends the run like losing all
    /// lives does.
    fn check_expired_eggs(&mut self, settings: &Settings) {
        let mut new_misses: Vec<Vec2> = Vec::new();

        for egg in self.eggs.iter_mut() {
            if !egg.active || egg.life_timer > 0.0 {
                continue;
            }
            if egg.kind == EggKind::Regular && settings.miss_tracking {
                new_misses.push(Vec2::new(egg.position.x, egg.position.z));
            }
            egg.active = false;
        }

        for position in new_misses {
            self.missed += 1;
            self.miss_indicators.push(MissIndicator {
                position,
                remaining: MISS_INDICATOR_DURATION,
            });
            log::info!("missed egg ({}/{})", self.missed, MAX_MISSES);
            if self.missed >= MAX_MISSES && self.phase == GamePhase::Playing {
                self.phase = GamePhase::GameOver;
                self.capture_cursor = false;
                log::info!("game over: too many misses, final score {}", self.score);
            }
        }
    }

    /// Drop inactive eggs from the live set. Idempotent.
    pub fn prune_inactive_eggs(&mut self) {
        self.eggs.retain(|e| e.active);
    }

    /// Age miss markers out; `remaining` drives the render fade too.
    pub fn update_miss_indicators(&mut self, dt: f32) {
        self.miss_indicators.retain(|m| m.remaining > 0.0);
        for indicator in self.miss_indicators.iter_mut() {
            indicator.remaining -= dt;
        }
    }
}

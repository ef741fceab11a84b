//! Cosmetic particle bursts
//!
//! Collection bursts (radial fan with upward bias) and death bursts (uniform
//! spherical explosion). Particles integrate ballistically under gravity;
//! the whole effect expires on one timer and the renderer fades it by
//! remaining-time fraction.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Collection,
    Death,
}

#[derive(Debug, Clone, Copy)]
pub struct EffectParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub size: Vec3,
    pub color: Vec3,
    pub rotation: f32,
    pub rotation_speed: f32,
}

#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    pub position: Vec3,
    pub timer: f32,
    pub duration: f32,
    pub particles: Vec<EffectParticle>,
}

impl Effect {
    /// Burst of tumbling chunks in a radial fan, colored like the egg.
    pub fn collection(position: Vec3, color: Vec3, rng: &mut Pcg32) -> Self {
        let mut particles = Vec::with_capacity(COLLECTION_PARTICLES);
        for i in 0..COLLECTION_PARTICLES {
            let angle = i as f32 / COLLECTION_PARTICLES as f32 * std::f32::consts::TAU;
            let spread = 0.3 + rng.random::<f32>() * 0.7;
            let speed = 3.0 + rng.random::<f32>() * 4.0;

            let velocity = Vec3::new(
                angle.cos() * speed * spread,
                1.5 + rng.random::<f32>() * 3.0,
                angle.sin() * speed * spread,
            );
            let size = Vec3::new(
                0.1 + rng.random::<f32>() * 0.2,
                0.1 + rng.random::<f32>() * 0.2,
                0.1 + rng.random::<f32>() * 0.2,
            );

            particles.push(EffectParticle {
                position,
                velocity,
                size,
                color,
                rotation: rng.random::<f32>() * std::f32::consts::TAU,
                rotation_speed: (rng.random::<f32>() - 0.5) * 10.0,
            });
        }

        Self {
            kind: EffectKind::Collection,
            position,
            timer: COLLECTION_EFFECT_DURATION,
            duration: COLLECTION_EFFECT_DURATION,
            particles,
        }
    }

    /// Spherical explosion of purple-ish shards.
    pub fn death(position: Vec3, rng: &mut Pcg32) -> Self {
        let mut particles = Vec::with_capacity(DEATH_PARTICLES);
        for _ in 0..DEATH_PARTICLES {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            // arccos distribution gives uniform coverage of the sphere
            let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
            let speed = 3.0 + rng.random::<f32>() * 4.0;

            let velocity = Vec3::new(
                phi.sin() * theta.cos() * speed,
                phi.sin() * theta.sin() * speed,
                phi.cos() * speed,
            );
            let size = Vec3::splat(0.15 + rng.random::<f32>() * 0.25);
            let color = Vec3::new(
                0.6 + rng.random::<f32>() * 0.3,
                0.1 + rng.random::<f32>() * 0.2,
                0.7 + rng.random::<f32>() * 0.2,
            );

            particles.push(EffectParticle {
                position,
                velocity,
                size,
                color,
                rotation: 0.0,
                rotation_speed: 0.0,
            });
        }

        Self {
            kind: EffectKind::Death,
            position,
            timer: DEATH_EFFECT_DURATION,
            duration: DEATH_EFFECT_DURATION,
            particles,
        }
    }

    /// Fade fraction for the renderer
    pub fn alpha(&self) -> f32 {
        (self.timer / self.duration).clamp(0.0, 1.0)
    }
}

/// Advance timers and integrate particles, then drop expired effects.
pub fn update_effects(effects: &mut Vec<Effect>, dt: f32) {
    for effect in effects.iter_mut() {
        effect.timer -= dt;
        for particle in effect.particles.iter_mut() {
            particle.position += particle.velocity * dt;
            particle.velocity.y -= EFFECT_GRAVITY * dt;
            particle.rotation += particle.rotation_speed * dt;
        }
    }
    effects.retain(|e| e.timer > 0.0);
}

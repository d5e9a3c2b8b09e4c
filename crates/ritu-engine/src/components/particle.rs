//! Particle entities and the store that owns them.
//!
//! The store is the only component allowed to create or destroy
//! particles. Depth, archetype, color, size, opacity, and rotation
//! speed are fixed at spawn; position, velocity, rotation, and trail
//! mutate every tick in the force-field system.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::Viewport;
use crate::components::profile::SeasonProfile;
use crate::core::rng::Rng;
use crate::renderer::surface::Color;

/// Maximum retained trail positions per particle.
pub const TRAIL_LEN: usize = 5;

/// Visual/behavioral category of a particle, fixed for its lifetime.
/// Determines the draw routine and the motion profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Filled circle (snow).
    Disc,
    /// Elongating line segment (rain).
    Streak,
    /// Rotated two-curve bezier shape.
    Petal,
    /// Rotated ellipse, long axis 2x.
    Leaf,
    /// Large soft blob drawn under a blur filter.
    Fog,
    /// Radial gradient disc (heat shimmer).
    Flare,
}

/// One simulated element.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Viewport-pixel position. Unbounded; re-enters modularly, never
    /// clamped.
    pub pos: Vec2,
    /// Pseudo-3D depth in [0, 1): 0 far (small, faint, slow), 1 near.
    /// Immutable after spawn.
    pub depth: f32,
    /// Base velocity: random jitter plus half the wind bias. Pointer
    /// forces are transient per tick, never accumulated here.
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub color: Color,
    /// Radians, accumulated each tick by `rotation_speed`.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub archetype: Archetype,
    /// Recent positions, most-recent-first, bounded at [`TRAIL_LEN`].
    /// Maintained only when the profile enables trails.
    pub trail: VecDeque<Vec2>,
}

impl Particle {
    /// Spawn a fresh particle uniformly over the viewport with the
    /// profile's archetype-dependent size/opacity formulas.
    pub fn spawn(viewport: Viewport, profile: &SeasonProfile, rng: &mut Rng) -> Self {
        let depth = rng.next_f32();
        let pos = Vec2::new(
            uniform_axis(rng, viewport.width),
            uniform_axis(rng, viewport.height),
        );
        let vel = Vec2::new(
            (rng.next_f32() - 0.5) * 0.5 + profile.wind * 0.5,
            (rng.next_f32() - 0.5) * 0.5,
        );
        let size = match profile.archetype {
            Archetype::Fog => rng.next_f32() * 100.0 + 50.0,
            _ => rng.next_f32() * 3.0 + 1.0 + depth * 2.0,
        };
        let opacity = match profile.archetype {
            Archetype::Fog => rng.next_f32() * 0.1,
            _ => rng.next_f32() * 0.5 + 0.1,
        };
        let color = if profile.palette.is_empty() {
            Color::WHITE
        } else {
            profile.palette[rng.next_int(profile.palette.len() as u32) as usize]
        };

        Self {
            pos,
            depth,
            vel,
            size,
            opacity,
            color,
            rotation: rng.next_f32() * std::f32::consts::TAU,
            rotation_speed: (rng.next_f32() - 0.5) * 0.05,
            archetype: profile.archetype,
            trail: VecDeque::new(),
        }
    }

    /// Prepend the current position to the trail, keeping the newest
    /// [`TRAIL_LEN`] entries.
    pub fn push_trail(&mut self) {
        self.trail.push_front(self.pos);
        self.trail.truncate(TRAIL_LEN);
    }
}

fn uniform_axis(rng: &mut Rng, dim: f32) -> f32 {
    if dim > 0.0 && dim.is_finite() {
        rng.next_f32() * dim
    } else {
        // Degenerate viewport: spawn on the origin axis, never NaN.
        0.0
    }
}

/// Flat-Vec owner of the live particle set.
/// Small counts (tens to low hundreds) — no spatial indexing needed.
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Replace the entire particle set for the given viewport and
    /// profile. Called on mount, on every resize, and on every season
    /// change; nothing survives.
    pub fn populate(&mut self, viewport: Viewport, profile: &SeasonProfile, rng: &mut Rng) {
        if viewport.is_degenerate() {
            log::warn!(
                "populating degenerate viewport {}x{}",
                viewport.width,
                viewport.height
            );
        }
        self.particles.clear();
        self.particles.reserve(profile.count);
        for _ in 0..profile.count {
            self.particles.push(Particle::spawn(viewport, profile, rng));
        }
        log::debug!(
            "populated {} {:?} particles",
            self.particles.len(),
            profile.archetype
        );
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Ground-impact ripples for the rain season.
//!
//! The force field spawns a ripple (stochastically) when a streak
//! particle wraps past the bottom edge; from then on the field owns it
//! exclusively — growing, fading, and pruning each tick.

use glam::Vec2;

/// Radius growth per tick.
pub const RIPPLE_GROWTH: f32 = 2.0;
/// Opacity decay per tick.
pub const RIPPLE_DECAY: f32 = 0.03;
/// Opacity every ripple spawns with.
pub const RIPPLE_SPAWN_OPACITY: f32 = 0.6;

/// A transient expanding ring on the "ground" plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Ripple {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: 0.0,
            opacity: RIPPLE_SPAWN_OPACITY,
        }
    }

    /// Grow and fade one tick. Returns false once fully faded.
    pub fn tick(&mut self) -> bool {
        self.radius += RIPPLE_GROWTH;
        self.opacity -= RIPPLE_DECAY;
        // 1e-3 absorbs f32 drift so 0.6 fades out in exactly 20 ticks.
        self.opacity > 1e-3
    }
}

/// Owner of all live ripples.
pub struct RippleField {
    ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn new() -> Self {
        Self {
            ripples: Vec::new(),
        }
    }

    /// Insert a fresh ripple (called from the force field on a
    /// bottom-edge wrap).
    pub fn spawn(&mut self, pos: Vec2) {
        self.ripples.push(Ripple::new(pos));
    }

    /// Age every ripple, dropping the ones that faded out.
    pub fn tick(&mut self) {
        self.ripples.retain_mut(|r| r.tick());
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn as_slice(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Drop all ripples (season change / resize reset).
    pub fn clear(&mut self) {
        self.ripples.clear();
    }
}

impl Default for RippleField {
    fn default() -> Self {
        Self::new()
    }
}

//! Pointer tracking.
//!
//! The host pushes raw pointer-move coordinates at whatever frequency
//! its events arrive; the simulation samples once per tick. Velocity is
//! a per-tick finite difference against the previous tick's recorded
//! position — no smoothing, no continuous derivative. A pointer that
//! has not moved between two samples reads as exactly zero velocity.

use glam::Vec2;

/// Read-only pointer snapshot handed to the force field each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Tracks the last-known pointer position between ticks.
pub struct PointerTracker {
    pos: Vec2,
    last: Vec2,
    vel: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            last: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }

    /// Record a raw pointer-move event. Called at event frequency, not
    /// throttled; only the latest position matters to the next sample.
    pub fn record(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Sample once per tick: velocity is the position delta since the
    /// previous sample.
    pub fn sample(&mut self) -> PointerState {
        self.vel = self.pos - self.last;
        self.last = self.pos;
        PointerState {
            pos: self.pos,
            vel: self.vel,
        }
    }

    /// The most recent sample without advancing the tracker.
    pub fn state(&self) -> PointerState {
        PointerState {
            pos: self.pos,
            vel: self.vel,
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

//! ritu-engine — seasonal ambient particle simulation.
//!
//! A headless, host-agnostic reimplementation of a portfolio site's
//! canvas environment: per-frame particle physics for six seasonal
//! effects (petals, heat flares, rain with ground ripples, leaves,
//! haze, snow) with depth-sorted parallax rendering and cursor-reactive
//! force fields. Hosts provide a [`Surface`] to draw on and a scheduler
//! implementing [`Ticker`]; everything else lives here.

pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::environment::Environment;
pub use api::types::{Season, Viewport};
pub use components::particle::{Archetype, Particle, ParticleStore, TRAIL_LEN};
pub use components::profile::SeasonProfile;
pub use components::ripple::{Ripple, RippleField, RIPPLE_DECAY, RIPPLE_GROWTH, RIPPLE_SPAWN_OPACITY};
pub use core::rng::Rng;
pub use core::ticker::{ManualTicker, Ticker};
pub use input::pointer::{PointerState, PointerTracker};
pub use renderer::draw::render;
pub use renderer::surface::{
    Color, CubicBezier, DrawOp, GradientStop, RecordingSurface, Surface,
};
pub use systems::forces::{pointer_force, step_particles, INTERACT_RADIUS, WRAP_MARGIN};

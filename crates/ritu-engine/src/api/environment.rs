//! The seasonal environment driver.
//!
//! Owns every piece of simulation state and runs the ordered tick:
//! pointer sample, then forces/integration, then ripple aging, then
//! rendering — rendering must see this tick's positions, never stale
//! ones. External inputs (season identifier, viewport size, raw pointer
//! coordinates) flow in only through the methods here; the only output
//! is draw calls against the host's surface.
//!
//! Single-threaded by construction: one logical owner touches the
//! particle and ripple collections, suspension happens between ticks on
//! the host's scheduler (see [`crate::core::ticker`]). Dropping the
//! environment is teardown.

use crate::api::types::{Season, Viewport};
use crate::components::particle::{Particle, ParticleStore};
use crate::components::profile::SeasonProfile;
use crate::components::ripple::{Ripple, RippleField};
use crate::core::rng::Rng;
use crate::input::pointer::PointerTracker;
use crate::renderer::draw::render;
use crate::renderer::surface::Surface;
use crate::systems::forces::step_particles;

pub struct Environment {
    season: Option<Season>,
    profile: SeasonProfile,
    viewport: Viewport,
    store: ParticleStore,
    ripples: RippleField,
    pointer: PointerTracker,
    rng: Rng,
}

impl Environment {
    /// Build and populate an environment for a season and viewport.
    /// The seed drives every stochastic choice; hosts that do not care
    /// pass anything, tests pass a fixed value.
    pub fn new(season: Season, width: f32, height: f32, seed: u64) -> Self {
        let mut env = Self {
            season: Some(season),
            profile: SeasonProfile::resolve(season),
            viewport: Viewport::new(width, height),
            store: ParticleStore::new(),
            ripples: RippleField::new(),
            pointer: PointerTracker::new(),
            rng: Rng::new(seed),
        };
        env.repopulate();
        env
    }

    /// Build from a host-supplied identifier string; unrecognized
    /// identifiers get the fallback profile.
    pub fn from_id(id: &str, width: f32, height: f32, seed: u64) -> Self {
        match Season::parse(id) {
            Some(season) => Self::new(season, width, height, seed),
            None => {
                let mut env = Self::new(Season::Vasant, width, height, seed);
                env.season = None;
                env.profile = SeasonProfile::fallback();
                env.repopulate();
                env
            }
        }
    }

    pub fn season(&self) -> Option<Season> {
        self.season
    }

    pub fn profile(&self) -> &SeasonProfile {
        &self.profile
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.as_slice()
    }

    pub fn ripples(&self) -> &[Ripple] {
        self.ripples.as_slice()
    }

    /// Switch seasons: resolve the new profile and fully repopulate.
    /// No morphing between seasons; nothing survives. Setting the
    /// current season again is a no-op.
    pub fn set_season(&mut self, season: Season) {
        if self.season == Some(season) {
            return;
        }
        self.season = Some(season);
        self.profile = SeasonProfile::resolve(season);
        self.repopulate();
    }

    /// Season change from a host identifier string. Unrecognized
    /// identifiers fall back to the default profile rather than failing.
    pub fn set_season_id(&mut self, id: &str) {
        match Season::parse(id) {
            Some(season) => self.set_season(season),
            None => {
                if self.season.is_none() {
                    return;
                }
                log::debug!("unknown season id {:?}, switching to fallback profile", id);
                self.season = None;
                self.profile = SeasonProfile::fallback();
                self.repopulate();
            }
        }
    }

    /// Viewport resize: full reset, fresh uniform sample over the new
    /// dimensions. Old positions are never rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.repopulate();
    }

    /// Record a raw pointer-move event (host event frequency, not
    /// throttled; the tracker is sampled once per tick).
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.record(x, y);
    }

    /// One tick: sample the pointer, step the force field, age ripples,
    /// render. With no surface attached the whole tick is skipped —
    /// the environment is decorative and must never error.
    pub fn tick(&mut self, surface: Option<&mut dyn Surface>) {
        let Some(surface) = surface else {
            log::debug!("no surface attached, skipping tick");
            return;
        };

        let pointer = self.pointer.sample();
        step_particles(
            self.store.as_mut_slice(),
            pointer,
            &self.profile,
            self.viewport,
            &mut self.ripples,
            &mut self.rng,
        );
        self.ripples.tick();
        render(
            surface,
            self.store.as_mut_slice(),
            self.ripples.as_slice(),
            &self.profile,
        );
    }

    fn repopulate(&mut self) {
        self.store
            .populate(self.viewport, &self.profile, &mut self.rng);
        self.ripples.clear();
    }
}

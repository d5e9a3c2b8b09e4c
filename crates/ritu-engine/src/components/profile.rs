//! Season profiles: the immutable configuration bundle resolved from a
//! season identifier. Resolution is pure and idempotent; unknown
//! identifiers degrade to a documented fallback instead of failing.

use serde::{Deserialize, Serialize};

use crate::api::types::Season;
use crate::components::particle::Archetype;
use crate::renderer::surface::Color;

/// Physics and visual configuration for one season.
///
/// Immutable once resolved; season changes resolve a fresh profile and
/// fully repopulate the particle store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonProfile {
    /// Live particle count the store must hold.
    pub count: usize,
    /// Draw routine and motion profile for every particle.
    pub archetype: Archetype,
    /// Spawn colors, picked uniformly at random per particle.
    pub palette: Vec<Color>,
    /// Downward drift bias in px/tick (negative rises, e.g. embers).
    pub gravity: f32,
    /// Horizontal drift bias in px/tick.
    pub wind: f32,
    /// Softness hint in px for hazy archetypes.
    pub blur_radius: f32,
    /// Maintain per-particle trail buffers (streak/rain only).
    pub trails_enabled: bool,
}

impl SeasonProfile {
    /// Resolve the fixed profile for a season. Pure: same season, same
    /// profile, field for field.
    pub fn resolve(season: Season) -> Self {
        match season {
            // Spring - petals
            Season::Vasant => Self {
                count: 50,
                archetype: Archetype::Petal,
                palette: vec![
                    Color::rgb(0xff, 0xb7, 0xb2),
                    Color::rgb(0xff, 0xda, 0xc1),
                    Color::rgb(0xe2, 0xf0, 0xcb),
                ],
                gravity: 0.2,
                wind: 0.5,
                blur_radius: 0.0,
                trails_enabled: false,
            },
            // Summer - heat flares, buoyant
            Season::Grishma => Self {
                count: 80,
                archetype: Archetype::Flare,
                palette: vec![
                    Color::rgb(0xff, 0xf9, 0xc4),
                    Color::rgb(0xff, 0xff, 0xff),
                    Color::rgb(0xff, 0xeb, 0x3b),
                ],
                gravity: -0.1,
                wind: 0.1,
                blur_radius: 1.0,
                trails_enabled: false,
            },
            // Monsoon - rain
            Season::Varsha => Self {
                count: 400,
                archetype: Archetype::Streak,
                palette: vec![
                    Color::rgb(0x81, 0xd4, 0xfa),
                    Color::rgb(0x4f, 0xc3, 0xf7),
                    Color::rgb(0xb3, 0xe5, 0xfc),
                ],
                gravity: 20.0,
                wind: -2.0,
                blur_radius: 0.0,
                trails_enabled: true,
            },
            // Autumn - leaves
            Season::Sharad => Self {
                count: 40,
                archetype: Archetype::Leaf,
                palette: vec![
                    Color::rgb(0xff, 0xab, 0x91),
                    Color::rgb(0xff, 0xcc, 0x80),
                    Color::rgb(0xd7, 0xcc, 0xc8),
                ],
                gravity: 0.8,
                wind: 1.2,
                blur_radius: 0.0,
                trails_enabled: false,
            },
            // Pre-winter - haze
            Season::Hemant => Self {
                count: 30,
                archetype: Archetype::Fog,
                palette: vec![
                    Color::rgb(0xcf, 0xd8, 0xdc),
                    Color::rgb(0xb0, 0xbe, 0xc5),
                    Color::rgb(0x78, 0x90, 0x9c),
                ],
                gravity: 0.05,
                wind: 0.2,
                blur_radius: 20.0,
                trails_enabled: false,
            },
            // Winter - snow
            Season::Shishir => Self {
                count: 150,
                archetype: Archetype::Disc,
                palette: vec![Color::rgb(0xff, 0xff, 0xff), Color::rgb(0xe1, 0xf5, 0xfe)],
                gravity: 1.5,
                wind: 0.3,
                blur_radius: 2.0,
                trails_enabled: false,
            },
        }
    }

    /// The documented default for unrecognized season identifiers:
    /// 100 neutral discs, moderate gravity, no wind, no blur, no trails.
    pub fn fallback() -> Self {
        Self {
            count: 100,
            archetype: Archetype::Disc,
            palette: vec![Color::WHITE],
            gravity: 0.5,
            wind: 0.0,
            blur_radius: 0.0,
            trails_enabled: false,
        }
    }

    /// Resolve from a host-supplied identifier string, falling back to
    /// the default profile when the identifier is unrecognized.
    pub fn for_id(id: &str) -> Self {
        match Season::parse(id) {
            Some(season) => Self::resolve(season),
            None => {
                log::debug!("unrecognized season identifier {:?}, using fallback profile", id);
                Self::fallback()
            }
        }
    }

    /// Parse a profile from a JSON string (host-tuned overrides).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

use serde::{Deserialize, Serialize};

/// The six seasons of the Hindu calendar that drive the ambient
/// environment. Hosts usually hand us the lowercase identifier string;
/// anything unrecognized falls back to the default profile rather than
/// failing — the environment is purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Spring — drifting petals.
    Vasant,
    /// Summer — heat flares.
    Grishma,
    /// Monsoon — rain with ground ripples.
    Varsha,
    /// Autumn — falling leaves.
    Sharad,
    /// Pre-winter — haze.
    Hemant,
    /// Winter — snow.
    Shishir,
}

impl Season {
    pub const ALL: [Season; 6] = [
        Self::Vasant,
        Self::Grishma,
        Self::Varsha,
        Self::Sharad,
        Self::Hemant,
        Self::Shishir,
    ];

    /// Parse a host-supplied season identifier.
    pub fn parse(id: &str) -> Option<Season> {
        match id {
            "vasant" => Some(Self::Vasant),
            "grishma" => Some(Self::Grishma),
            "varsha" => Some(Self::Varsha),
            "sharad" => Some(Self::Sharad),
            "hemant" => Some(Self::Hemant),
            "shishir" => Some(Self::Shishir),
            _ => None,
        }
    }

    /// The lowercase identifier used on the host boundary.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Vasant => "vasant",
            Self::Grishma => "grishma",
            Self::Varsha => "varsha",
            Self::Sharad => "sharad",
            Self::Hemant => "hemant",
            Self::Shishir => "shishir",
        }
    }
}

/// Viewport dimensions in pixels, read on mount and on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative, or non-finite dimensions. Population must not
    /// produce NaN positions for these.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }
}

//! Depth-sorted renderer.
//!
//! One pass per tick: clear, set up the fog blur scope if the season
//! calls for it, sort particles far-to-near so near ones occlude, then
//! dispatch each to its archetype routine. Ripples draw last, outside
//! the blur scope, as flattened ground ellipses. This is the only code
//! that touches the surface.

use glam::Vec2;

use crate::components::particle::{Archetype, Particle};
use crate::components::profile::SeasonProfile;
use crate::components::ripple::Ripple;
use crate::renderer::surface::{Color, CubicBezier, GradientStop, Surface};

/// Blur applied to the whole fog pass.
pub const FOG_BLUR: f32 = 40.0;
/// Stroke width for streak particles scales with depth from this base.
pub const STREAK_WIDTH: f32 = 1.5;
/// Ripple outline width.
pub const RIPPLE_WIDTH: f32 = 1.5;
/// Vertical squash that makes ripples read as lying on the ground.
pub const RIPPLE_SQUASH: f32 = 0.3;
/// Ripple outline color (rain blue).
pub const RIPPLE_COLOR: Color = Color::rgb(0x81, 0xd4, 0xfa);

/// Render one frame. Sorts the particle slice in place by depth
/// (ascending; ordering among equal depths is irrelevant).
pub fn render(
    surface: &mut dyn Surface,
    particles: &mut [Particle],
    ripples: &[Ripple],
    profile: &SeasonProfile,
) {
    surface.clear();

    if profile.archetype == Archetype::Fog {
        surface.set_blur(FOG_BLUR);
    } else {
        surface.clear_blur();
    }

    particles.sort_unstable_by(|a, b| a.depth.total_cmp(&b.depth));

    for p in particles.iter() {
        let mut alpha = p.opacity * p.depth;
        // Simulated depth blur: dim far particles instead of filtering.
        let blur_amount = (1.0 - p.depth) * 2.0;
        if p.archetype != Archetype::Fog && blur_amount > 0.5 {
            alpha *= 0.6;
        }
        surface.set_alpha(alpha);

        match p.archetype {
            Archetype::Streak => draw_streak(surface, p),
            Archetype::Petal => draw_petal(surface, p),
            Archetype::Leaf => draw_leaf(surface, p),
            Archetype::Flare => draw_flare(surface, p),
            Archetype::Disc | Archetype::Fog => {
                surface.fill_circle(p.pos, p.size, p.color);
            }
        }
    }

    surface.clear_blur();
    for r in ripples {
        surface.stroke_ellipse(
            r.pos,
            r.radius,
            r.radius * RIPPLE_SQUASH,
            RIPPLE_WIDTH,
            RIPPLE_COLOR,
            r.opacity,
        );
    }
}

/// Rain: a line from the particle elongated by fall speed.
fn draw_streak(surface: &mut dyn Surface, p: &Particle) {
    let len = 15.0 * (1.0 + p.vel.y.abs() * 0.1);
    let to = p.pos + Vec2::new(p.vel.x * 2.0, len);
    surface.stroke_line(p.pos, to, STREAK_WIDTH * p.depth, p.color);
}

/// Two mirrored bezier curves meeting at the origin.
fn draw_petal(surface: &mut dyn Surface, p: &Particle) {
    let s = p.size;
    let curves = [
        CubicBezier {
            c1: Vec2::new(s, -s),
            c2: Vec2::new(s * 2.0, 0.0),
            to: Vec2::new(0.0, s * 2.0),
        },
        CubicBezier {
            c1: Vec2::new(-s * 2.0, 0.0),
            c2: Vec2::new(-s, -s),
            to: Vec2::ZERO,
        },
    ];
    surface.fill_bezier(p.pos, p.rotation, &curves, p.color);
}

/// Rotated ellipse, long axis 2x the particle size.
fn draw_leaf(surface: &mut dyn Surface, p: &Particle) {
    surface.fill_ellipse(p.pos, p.rotation, p.size * 2.0, p.size, p.color);
}

/// Soft radial gradient disc: opaque white center, faint mid,
/// transparent edge.
fn draw_flare(surface: &mut dyn Surface, p: &Particle) {
    let stops = [
        GradientStop {
            offset: 0.0,
            color: Color::WHITE,
            alpha: p.opacity,
        },
        GradientStop {
            offset: 0.5,
            color: Color::WHITE,
            alpha: p.opacity * 0.3,
        },
        GradientStop {
            offset: 1.0,
            color: Color::WHITE,
            alpha: 0.0,
        },
    ];
    surface.fill_radial_gradient(p.pos, p.size * 4.0, &stops);
}

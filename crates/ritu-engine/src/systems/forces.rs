//! Force field and integrator.
//!
//! Once per tick, every particle gets depth-scaled ambient drift
//! (wind + gravity), a pointer-proximity force, simple additive Euler
//! integration, trail upkeep, and toroidal wraparound at the viewport
//! edges. Streak particles wrapping past the bottom edge may splash a
//! ripple into the ripple field.
//!
//! Free function over the store and the ripple field to avoid borrow
//! conflicts; nothing here creates or destroys particles.

use glam::Vec2;

use crate::api::types::Viewport;
use crate::components::particle::{Archetype, Particle};
use crate::components::profile::SeasonProfile;
use crate::components::ripple::RippleField;
use crate::core::rng::Rng;
use crate::input::pointer::PointerState;

/// Pointer interaction radius in pixels.
pub const INTERACT_RADIUS: f32 = 250.0;
/// Peak repulsion magnitude for a depth-1.0 particle at the pointer.
pub const REPEL_STRENGTH: f32 = 3.0;
/// Fraction of pointer velocity inherited at peak falloff.
pub const POINTER_DRAG: f32 = 0.08;
/// Wraparound margin beyond the viewport edges.
pub const WRAP_MARGIN: f32 = 50.0;
/// Chance of a ripple per bottom-edge wrap of a streak particle.
pub const RIPPLE_CHANCE: f32 = 0.15;
/// Ripples land within this band above the bottom edge.
pub const SPLASH_BAND: f32 = 20.0;

/// Transient pointer contribution for one particle this tick.
/// Linear falloff from 1 at the pointer to 0 at [`INTERACT_RADIUS`];
/// repulsion pushes away from the pointer, scaled by depth so near
/// particles react harder, plus velocity inheritance that drags
/// particles along with fast pointer motion. Outside the radius the
/// contribution is absent, not decayed.
pub fn pointer_force(particle: &Particle, pointer: PointerState) -> Vec2 {
    let delta = particle.pos - pointer.pos;
    let dist = delta.length();
    if dist >= INTERACT_RADIUS {
        return Vec2::ZERO;
    }
    let falloff = (INTERACT_RADIUS - dist) / INTERACT_RADIUS;
    // A particle exactly on the pointer is pushed along +x (atan2(0,0)).
    let away = if dist > f32::EPSILON {
        delta / dist
    } else {
        Vec2::X
    };
    away * falloff * REPEL_STRENGTH * particle.depth + pointer.vel * POINTER_DRAG * falloff
}

/// Advance every particle one tick.
pub fn step_particles(
    particles: &mut [Particle],
    pointer: PointerState,
    profile: &SeasonProfile,
    viewport: Viewport,
    ripples: &mut RippleField,
    rng: &mut Rng,
) {
    for p in particles.iter_mut() {
        // Far particles keep at least 20% of the ambient drift.
        let depth_factor = p.depth * 0.8 + 0.2;
        let drift = Vec2::new(profile.wind * depth_factor, profile.gravity * depth_factor);
        let force = pointer_force(p, pointer);

        p.pos += p.vel + drift + force;
        p.rotation += p.rotation_speed;

        if profile.trails_enabled {
            p.push_trail();
        }

        // Toroidal wraparound: hard teleport, never a bounce.
        if p.pos.x > viewport.width + WRAP_MARGIN {
            p.pos.x = -WRAP_MARGIN;
        }
        if p.pos.x < -WRAP_MARGIN {
            p.pos.x = viewport.width + WRAP_MARGIN;
        }
        if p.pos.y > viewport.height + WRAP_MARGIN {
            p.pos.y = -WRAP_MARGIN;
            // Rain hitting the ground
            if p.archetype == Archetype::Streak && rng.chance(RIPPLE_CHANCE) {
                ripples.spawn(Vec2::new(
                    p.pos.x,
                    viewport.height - rng.next_f32() * SPLASH_BAND,
                ));
            }
        }
        if p.pos.y < -WRAP_MARGIN {
            p.pos.y = viewport.height + WRAP_MARGIN;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Season;
    use crate::components::particle::ParticleStore;
    use crate::components::ripple::RIPPLE_SPAWN_OPACITY;

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn still_pointer(x: f32, y: f32) -> PointerState {
        PointerState {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
        }
    }

    fn test_particle(x: f32, y: f32, depth: f32, archetype: Archetype) -> Particle {
        let profile = SeasonProfile::fallback();
        let mut rng = Rng::new(1);
        let mut p = Particle::spawn(VIEW, &profile, &mut rng);
        p.pos = Vec2::new(x, y);
        p.depth = depth;
        p.archetype = archetype;
        p
    }

    #[test]
    fn no_force_beyond_interaction_radius() {
        let p = test_particle(400.0, 300.0, 1.0, Archetype::Disc);
        let pointer = still_pointer(400.0 - 251.0, 300.0);
        assert_eq!(pointer_force(&p, pointer), Vec2::ZERO);
    }

    #[test]
    fn max_repulsion_at_pointer_position() {
        // Depth 1.0 exactly on the pointer: magnitude 3 * depth * force,
        // force -> 1
        let p = test_particle(400.0, 300.0, 1.0, Archetype::Disc);
        let pointer = still_pointer(400.0, 300.0);
        let force = pointer_force(&p, pointer);
        assert!((force.length() - REPEL_STRENGTH).abs() < 1e-5, "{:?}", force);
        assert_eq!(force, Vec2::new(REPEL_STRENGTH, 0.0));
    }

    #[test]
    fn repulsion_scales_with_depth() {
        let near = test_particle(400.0, 300.0, 1.0, Archetype::Disc);
        let far = test_particle(400.0, 300.0, 0.25, Archetype::Disc);
        let pointer = still_pointer(350.0, 300.0);
        let f_near = pointer_force(&near, pointer).length();
        let f_far = pointer_force(&far, pointer).length();
        assert!((f_near - 4.0 * f_far).abs() < 1e-5);
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let p = test_particle(450.0, 300.0, 0.5, Archetype::Disc);
        let force = pointer_force(&p, still_pointer(400.0, 300.0));
        assert!(force.x > 0.0);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn pointer_velocity_is_inherited() {
        let p = test_particle(400.0, 300.0, 0.0, Archetype::Disc);
        // Depth 0 kills the repulsive term, leaving only inheritance.
        let pointer = PointerState {
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::new(10.0, -5.0),
        };
        let force = pointer_force(&p, pointer);
        assert!((force - Vec2::new(0.8, -0.4)).length() < 1e-5, "{:?}", force);
    }

    #[test]
    fn wraparound_containment_invariant() {
        let profile = SeasonProfile::resolve(Season::Varsha);
        let mut store = ParticleStore::new();
        let mut rng = Rng::new(42);
        store.populate(VIEW, &profile, &mut rng);
        let mut ripples = RippleField::new();

        for tick in 0..300 {
            // Sweep the pointer around to stir up forces.
            let pointer = PointerState {
                pos: Vec2::new((tick * 7 % 800) as f32, (tick * 3 % 600) as f32),
                vel: Vec2::new(7.0, 3.0),
            };
            step_particles(
                store.as_mut_slice(),
                pointer,
                &profile,
                VIEW,
                &mut ripples,
                &mut rng,
            );
            for p in store.iter() {
                assert!(
                    (-WRAP_MARGIN..=VIEW.width + WRAP_MARGIN).contains(&p.pos.x),
                    "tick {} x {}",
                    tick,
                    p.pos.x
                );
                assert!(
                    (-WRAP_MARGIN..=VIEW.height + WRAP_MARGIN).contains(&p.pos.y),
                    "tick {} y {}",
                    tick,
                    p.pos.y
                );
            }
        }
    }

    #[test]
    fn depth_never_mutates() {
        let profile = SeasonProfile::resolve(Season::Shishir);
        let mut store = ParticleStore::new();
        let mut rng = Rng::new(5);
        store.populate(VIEW, &profile, &mut rng);
        let depths: Vec<f32> = store.iter().map(|p| p.depth).collect();
        let mut ripples = RippleField::new();

        for _ in 0..100 {
            step_particles(
                store.as_mut_slice(),
                still_pointer(400.0, 300.0),
                &profile,
                VIEW,
                &mut ripples,
                &mut rng,
            );
        }
        let after: Vec<f32> = store.iter().map(|p| p.depth).collect();
        assert_eq!(depths, after);
    }

    #[test]
    fn bottom_wrap_resets_y_and_splashes() {
        let profile = SeasonProfile::resolve(Season::Varsha);
        let mut ripples = RippleField::new();
        let mut rng = Rng::new(42);
        let mut wraps = 0;

        for i in 0..400 {
            let mut p = test_particle(i as f32, VIEW.height + 100.0, 0.9, Archetype::Streak);
            p.vel.y = 25.0;
            step_particles(
                std::slice::from_mut(&mut p),
                still_pointer(-1000.0, -1000.0),
                &profile,
                VIEW,
                &mut ripples,
                &mut rng,
            );
            assert_eq!(p.pos.y, -WRAP_MARGIN);
            wraps += 1;
        }

        // ~15% of 400 wraps; generous bounds keep this seed-independent.
        assert_eq!(wraps, 400);
        assert!(
            (30..=100).contains(&ripples.len()),
            "ripples {}",
            ripples.len()
        );
        for r in ripples.iter() {
            assert_eq!(r.radius, 0.0);
            assert_eq!(r.opacity, RIPPLE_SPAWN_OPACITY);
            assert!(r.pos.y <= VIEW.height && r.pos.y > VIEW.height - SPLASH_BAND);
        }
    }

    #[test]
    fn non_streak_bottom_wrap_never_splashes() {
        let profile = SeasonProfile::resolve(Season::Shishir);
        let mut ripples = RippleField::new();
        let mut rng = Rng::new(42);
        for _ in 0..200 {
            let mut p = test_particle(100.0, VIEW.height + 100.0, 0.9, Archetype::Disc);
            step_particles(
                std::slice::from_mut(&mut p),
                still_pointer(-1000.0, -1000.0),
                &profile,
                VIEW,
                &mut ripples,
                &mut rng,
            );
        }
        assert!(ripples.is_empty());
    }

    #[test]
    fn horizontal_wrap_teleports() {
        let profile = SeasonProfile::fallback();
        let mut ripples = RippleField::new();
        let mut rng = Rng::new(3);

        let mut p = test_particle(VIEW.width + WRAP_MARGIN + 10.0, 300.0, 0.5, Archetype::Disc);
        p.vel = Vec2::new(5.0, 0.0);
        step_particles(
            std::slice::from_mut(&mut p),
            still_pointer(-1000.0, -1000.0),
            &profile,
            VIEW,
            &mut ripples,
            &mut rng,
        );
        assert_eq!(p.pos.x, -WRAP_MARGIN);

        let mut p = test_particle(-WRAP_MARGIN - 10.0, 300.0, 0.5, Archetype::Disc);
        p.vel = Vec2::new(-5.0, 0.0);
        step_particles(
            std::slice::from_mut(&mut p),
            still_pointer(-1000.0, -1000.0),
            &profile,
            VIEW,
            &mut ripples,
            &mut rng,
        );
        assert_eq!(p.pos.x, VIEW.width + WRAP_MARGIN);
    }

    #[test]
    fn trails_only_when_profile_enables_them() {
        let mut rng = Rng::new(9);
        let mut ripples = RippleField::new();

        let no_trails = SeasonProfile::resolve(Season::Vasant);
        let mut p = test_particle(100.0, 100.0, 0.5, Archetype::Petal);
        for _ in 0..10 {
            step_particles(
                std::slice::from_mut(&mut p),
                still_pointer(0.0, 0.0),
                &no_trails,
                VIEW,
                &mut ripples,
                &mut rng,
            );
        }
        assert!(p.trail.is_empty());

        let trails = SeasonProfile::resolve(Season::Varsha);
        let mut p = test_particle(100.0, 100.0, 0.5, Archetype::Streak);
        for _ in 0..10 {
            step_particles(
                std::slice::from_mut(&mut p),
                still_pointer(0.0, 0.0),
                &trails,
                VIEW,
                &mut ripples,
                &mut rng,
            );
        }
        assert_eq!(p.trail.len(), 5);
        // Most recent entry is the just-integrated position.
        assert_eq!(p.trail[0], p.pos);
    }

    #[test]
    fn rotation_accumulates_by_fixed_speed() {
        let profile = SeasonProfile::resolve(Season::Sharad);
        let mut rng = Rng::new(11);
        let mut ripples = RippleField::new();
        let mut p = test_particle(400.0, 300.0, 0.5, Archetype::Leaf);
        p.rotation = 0.0;
        p.rotation_speed = 0.02;
        for _ in 0..5 {
            step_particles(
                std::slice::from_mut(&mut p),
                still_pointer(-1000.0, -1000.0),
                &profile,
                VIEW,
                &mut ripples,
                &mut rng,
            );
        }
        assert!((p.rotation - 0.1).abs() < 1e-6);
    }

    #[test]
    fn ambient_drift_keeps_twenty_percent_at_depth_zero() {
        let profile = SeasonProfile::resolve(Season::Varsha);
        let mut rng = Rng::new(13);
        let mut ripples = RippleField::new();
        let mut p = test_particle(400.0, 0.0, 0.0, Archetype::Streak);
        p.vel = Vec2::ZERO;
        step_particles(
            std::slice::from_mut(&mut p),
            still_pointer(-1000.0, -1000.0),
            &profile,
            VIEW,
            &mut ripples,
            &mut rng,
        );
        // depth_factor = 0.2 at depth 0
        assert!((p.pos.y - profile.gravity * 0.2).abs() < 1e-5);
        assert!((p.pos.x - (400.0 + profile.wind * 0.2)).abs() < 1e-4);
    }
}

//! Headless season preview.
//!
//! Runs the simulation for every season (plus an unknown identifier to
//! show the fallback) against a recording surface, with the pointer
//! sweeping a circle through the viewport, and prints what each season
//! draws. Useful as a smoke test and as a wiring example for hosts.

use ritu_engine::{DrawOp, Environment, ManualTicker, RecordingSurface, Season, Ticker};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;
const TICKS: u64 = 120;

fn main() {
    env_logger::init();

    for season in Season::ALL {
        run_season(season.id());
    }
    // Unknown identifiers degrade to the fallback profile.
    run_season("aurora");
}

fn run_season(id: &str) {
    let mut env = Environment::from_id(id, WIDTH, HEIGHT, 0xC0FFEE);
    let mut surface = RecordingSurface::new();
    let mut ticker = ManualTicker::new();
    let mut peak_ripples = 0usize;

    ticker.start();
    ticker.advance(TICKS, |tick| {
        // Sweep the pointer so the force field has something to react to.
        let angle = tick as f32 * 0.05;
        env.pointer_moved(
            WIDTH * 0.5 + angle.cos() * 300.0,
            HEIGHT * 0.5 + angle.sin() * 200.0,
        );
        surface.reset();
        env.tick(Some(&mut surface));
        peak_ripples = peak_ripples.max(env.ripples().len());
    });
    ticker.stop();

    let mut circles = 0;
    let mut lines = 0;
    let mut beziers = 0;
    let mut ellipses = 0;
    let mut gradients = 0;
    let mut ripple_strokes = 0;
    for op in &surface.ops {
        match op {
            DrawOp::Circle { .. } => circles += 1,
            DrawOp::Line { .. } => lines += 1,
            DrawOp::Bezier { .. } => beziers += 1,
            DrawOp::Ellipse { .. } => ellipses += 1,
            DrawOp::RadialGradient { .. } => gradients += 1,
            DrawOp::StrokeEllipse { .. } => ripple_strokes += 1,
            _ => {}
        }
    }

    log::info!(
        "{}: {} particles over {} ticks, peak {} ripples",
        id,
        env.particles().len(),
        TICKS,
        peak_ripples
    );
    println!(
        "{:>8} | particles {:>3} | last frame: {} circles, {} lines, {} petals, {} leaves, {} flares, {} ripples",
        id,
        env.particles().len(),
        circles,
        lines,
        beziers,
        ellipses,
        gradients,
        ripple_strokes
    );
}

//! Per-frame scheduling abstraction.
//!
//! The simulation never owns a real display loop. Hosts drive it at
//! whatever refresh rate they have (requestAnimationFrame, a timer, a
//! test harness) through this trait, which only promises one thing:
//! stopping is synchronous — no tick callback runs after `stop`
//! returns. Motion is tick-rate-relative, not time-normalized, so
//! apparent speed tracks the host's actual frame rate.

/// Drives the update-then-render cycle.
pub trait Ticker {
    /// Begin delivering ticks.
    fn start(&mut self);

    /// Stop delivering ticks. Synchronous: no callback fires after this
    /// returns, so resize/season/teardown resets stay clean.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Host-driven ticker for tests and headless runs.
/// Ticks advance only through explicit `advance` calls while running.
pub struct ManualTicker {
    running: bool,
    ticks: u64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self {
            running: false,
            ticks: 0,
        }
    }

    /// Total ticks delivered since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Deliver up to `steps` ticks to `on_tick`, passing the tick index.
    /// Returns how many actually ran (zero when stopped).
    pub fn advance<F: FnMut(u64)>(&mut self, steps: u64, mut on_tick: F) -> u64 {
        let mut ran = 0;
        for _ in 0..steps {
            if !self.running {
                break;
            }
            on_tick(self.ticks);
            self.ticks += 1;
            ran += 1;
        }
        ran
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for ManualTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_tick_before_start() {
        let mut ticker = ManualTicker::new();
        let ran = ticker.advance(5, |_| panic!("tick before start"));
        assert_eq!(ran, 0);
    }

    #[test]
    fn ticks_while_running() {
        let mut ticker = ManualTicker::new();
        ticker.start();
        let mut seen = Vec::new();
        let ran = ticker.advance(3, |i| seen.push(i));
        assert_eq!(ran, 3);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(ticker.ticks(), 3);
    }

    #[test]
    fn stop_is_synchronous() {
        let mut ticker = ManualTicker::new();
        ticker.start();
        ticker.stop();
        let ran = ticker.advance(10, |_| panic!("tick after stop"));
        assert_eq!(ran, 0);
        assert!(!ticker.is_running());
    }

    #[test]
    fn restart_resumes_counting() {
        let mut ticker = ManualTicker::new();
        ticker.start();
        ticker.advance(2, |_| {});
        ticker.stop();
        ticker.start();
        ticker.advance(1, |i| assert_eq!(i, 2));
        assert_eq!(ticker.ticks(), 3);
    }
}

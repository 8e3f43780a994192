//! Fixed-step frame clock
//!
//! Physics constants are per tick and tuned for ~60 Hz. Hosts that call back at
//! that rate can run one tick per frame directly; hosts with other refresh
//! rates feed measured frame time through `FrameClock` to get a whole number of
//! nominal ticks per frame instead.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulates wall-clock time and releases it as whole ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add `elapsed` seconds and return how many ticks to run this frame
    ///
    /// Long stalls (tab switches, debugger pauses) are clamped so the game does
    /// not fast-forward through them. Non-finite readings count as no time.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, 0.1)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        // Drop whatever the substep cap left behind
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    /// Forget accumulated time
    ///
    /// [`crate::Game::advance`] calls this on the first frame of every run.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_nominal_frame() {
        let mut clock = FrameClock::new(0.0625, 4);
        assert_eq!(clock.advance(0.0625), 1);
        assert_eq!(clock.advance(0.0625), 1);
    }

    #[test]
    fn test_slow_frames_accumulate() {
        let mut clock = FrameClock::new(0.0625, 8);
        // 120 Hz host: every other frame yields a tick
        assert_eq!(clock.advance(0.03125), 0);
        assert_eq!(clock.advance(0.03125), 1);
    }

    #[test]
    fn test_substep_cap_and_stall_clamp() {
        let mut clock = FrameClock::new(0.015625, 4);
        assert_eq!(clock.advance(10.0), 4);
        // Stall was clamped to 0.1s and the backlog beyond the cap dropped
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_non_finite_elapsed_is_ignored() {
        let mut clock = FrameClock::new(0.0625, 4);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.advance(f32::NEG_INFINITY), 0);
        // Still releases ticks afterwards
        assert_eq!(clock.advance(0.0625), 1);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new(0.0625, 8);
        clock.advance(0.03125);
        clock.reset();
        assert_eq!(clock.advance(0.03125), 0);
    }
}

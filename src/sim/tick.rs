//! Per-tick simulation pipeline
//!
//! Kinematics, then scroll, then collision. Physics constants are per-tick
//! deltas, so one call advances the run by exactly one host frame.

use super::collision::{self, TickOutcome};
use super::state::RunState;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// A jump was requested since the previous tick
    pub jump: bool,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// New score, present only when it increased this tick
    pub score_changed: Option<u32>,
}

/// Advance a run by one tick
///
/// A run that already reached a terminal outcome is frozen: the stored outcome
/// is returned and nothing is mutated.
pub fn tick(run: &mut RunState, input: &TickInput, tuning: &Tuning) -> TickReport {
    if let Some(outcome) = run.outcome {
        return TickReport {
            outcome,
            score_changed: None,
        };
    }

    run.ticks += 1;

    if input.jump && run.player.request_jump(tuning) {
        log::trace!("jump at tick {}", run.ticks);
    }
    run.player.integrate(tuning);

    let score_changed = run.camera.advance(run.speed);

    let outcome = collision::resolve(&mut run.player, &mut run.obstacles, &run.camera, tuning);
    if outcome.is_terminal() {
        run.outcome = Some(outcome);
    }

    TickReport {
        outcome,
        score_changed,
    }
}

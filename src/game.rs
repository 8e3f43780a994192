//! Game loop controller
//!
//! Owns the run state machine (`Menu -> Playing -> GameOver | Victory`) and
//! drives exactly one simulation tick per host frame while Playing. Jump
//! requests may come from another thread or an input callback; they land in a
//! pending flag that the next tick consumes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::sim::{FrameClock, GameEvent, GamePhase, Level, RunState, TickInput, TickOutcome, tick};
use crate::tuning::Tuning;

/// Receives run notifications
///
/// Score changes fire at most once per tick and only when the score increased;
/// game over and victory fire once per run.
pub trait GameObserver {
    fn on_run_started(&mut self, _level: &Level) {}
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_game_over(&mut self, _score: u32) {}
    fn on_victory(&mut self, _score: u32) {}
}

impl GameObserver for () {}

/// Records every notification as a [`GameEvent`]
impl GameObserver for Vec<GameEvent> {
    fn on_run_started(&mut self, level: &Level) {
        self.push(GameEvent::RunStarted {
            level: level.name.clone(),
        });
    }

    fn on_score_changed(&mut self, score: u32) {
        self.push(GameEvent::ScoreChanged(score));
    }

    fn on_game_over(&mut self, score: u32) {
        self.push(GameEvent::GameOver { score });
    }

    fn on_victory(&mut self, score: u32) {
        self.push(GameEvent::Victory { score });
    }
}

/// Pending jump flag shared with input handlers
///
/// Any number of requests between two ticks collapse into one jump attempt.
#[derive(Debug, Clone, Default)]
pub struct JumpSignal(Arc<AtomicBool>);

impl JumpSignal {
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume the pending request, if any
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// The game: current level, tuning, phase and (while a run exists) its state
#[derive(Debug)]
pub struct Game {
    phase: GamePhase,
    level: Level,
    tuning: Tuning,
    run: Option<RunState>,
    jump: JumpSignal,
    /// Set by `start`; the next `advance` drops time left over from before the run
    clock_stale: bool,
}

impl Game {
    pub fn new(level: Level, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            level,
            tuning,
            run: None,
            jump: JumpSignal::default(),
            clock_stale: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Current or last finished run (None in the menu)
    #[inline]
    pub fn run(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    /// Handle for input callbacks
    pub fn jump_signal(&self) -> JumpSignal {
        self.jump.clone()
    }

    pub fn request_jump(&self) {
        self.jump.request();
    }

    /// Replace the level and go back to the menu, ending any run
    pub fn set_level(&mut self, level: Level) {
        log::info!("Level '{}' ready ({} obstacles)", level.name, level.data.len());
        self.level = level;
        self.return_to_menu();
    }

    /// Enter Playing with a fresh run of the current level
    ///
    /// Valid from any phase; there is no resumed run.
    pub fn start(&mut self, observer: &mut impl GameObserver) {
        self.run = Some(RunState::load(&self.level, &self.tuning));
        self.jump.take();
        self.clock_stale = true;
        self.phase = GamePhase::Playing;
        log::info!(
            "Run started: '{}' at speed {}",
            self.level.name,
            self.level.speed
        );
        observer.on_run_started(&self.level);
    }

    /// Leave any phase for the menu; no further ticks run
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.run = None;
        self.jump.take();
    }

    /// Run one tick if Playing
    ///
    /// Returns the tick's outcome, or None when no tick ran.
    pub fn frame(&mut self, observer: &mut impl GameObserver) -> Option<TickOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let run = self.run.as_mut()?;

        let input = TickInput {
            jump: self.jump.take(),
        };
        let report = tick(run, &input, &self.tuning);

        if let Some(score) = report.score_changed {
            log::debug!("Score {}%", score);
            observer.on_score_changed(score);
        }

        match report.outcome {
            TickOutcome::Died { cause, obstacle } => {
                self.phase = GamePhase::GameOver;
                log::info!(
                    "Run over at tick {}: {:?} on obstacle {} ({}%)",
                    run.ticks,
                    cause,
                    obstacle,
                    run.score()
                );
                observer.on_game_over(run.score());
            }
            TickOutcome::Won => {
                self.phase = GamePhase::Victory;
                log::info!("Level complete at tick {} ({}%)", run.ticks, run.score());
                observer.on_victory(run.score());
            }
            TickOutcome::Landed { .. } | TickOutcome::Continue => {}
        }

        Some(report.outcome)
    }

    /// Run as many ticks as `clock` releases for `elapsed` seconds of frame time
    ///
    /// The first call after `start` discards time the clock gathered before the
    /// run. Stops early when the run ends. Returns the number of ticks run.
    pub fn advance(
        &mut self,
        clock: &mut FrameClock,
        elapsed: f32,
        observer: &mut impl GameObserver,
    ) -> u32 {
        if std::mem::take(&mut self.clock_stale) {
            clock.reset();
        }
        let due = clock.advance(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if self.frame(observer).is_none() {
                break;
            }
            ran += 1;
            if self.phase != GamePhase::Playing {
                break;
            }
        }
        ran
    }

    /// Start a fresh run and play it with jumps on the given 1-based tick numbers
    ///
    /// Stops at the first terminal outcome or after `max_ticks`. Returns the
    /// terminal outcome, if one was reached.
    pub fn play_scripted(
        &mut self,
        jump_ticks: &[u64],
        max_ticks: u64,
        observer: &mut impl GameObserver,
    ) -> Option<TickOutcome> {
        self.start(observer);
        for next in 1..=max_ticks {
            if jump_ticks.contains(&next) {
                self.request_jump();
            }
            match self.frame(observer) {
                Some(outcome) if outcome.is_terminal() => return Some(outcome),
                Some(_) => {}
                None => return None,
            }
        }
        None
    }
}

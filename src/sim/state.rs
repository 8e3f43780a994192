//! Run state and core simulation types
//!
//! A `RunState` owns everything one Playing episode mutates: the player, the
//! placed obstacles and the camera. It is rebuilt from the level on every run
//! start and handed to [`super::tick`] explicitly each frame.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::TickOutcome;
use super::level::{Level, PlacedKind, PlacedObstacle, place_obstacles};
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a run to start
    #[default]
    Menu,
    /// Ticks are running
    Playing,
    /// Run ended in a crash
    GameOver,
    /// Run reached the finish line
    Victory,
}

impl GamePhase {
    /// Whether the run has ended (frozen state, waiting for retry or menu)
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// Notifications emitted by the game loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run was (re)started on the named level
    RunStarted { level: String },
    /// Completion percentage increased
    ScoreChanged(u32),
    GameOver { score: u32 },
    Victory { score: u32 },
}

/// Screen-space obstacle for downstream rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleObstacle {
    pub screen_x: f32,
    pub y: f32,
    pub kind: PlacedKind,
}

/// Everything one run mutates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub player: Player,
    /// Ascending world X
    pub obstacles: Vec<PlacedObstacle>,
    pub camera: Camera,
    /// World units scrolled per tick
    pub speed: f32,
    /// Ticks simulated so far
    pub ticks: u64,
    /// Terminal outcome, once reached
    pub outcome: Option<TickOutcome>,
}

impl RunState {
    /// Place the level's obstacles and reset player, camera and score
    pub fn load(level: &Level, tuning: &Tuning) -> Self {
        let obstacles = place_obstacles(&level.data, tuning);
        log::debug!(
            "Placed {} obstacles for '{}', finish at x={}",
            obstacles.len() - 1,
            level.name,
            obstacles.last().map(|o| o.world_x).unwrap_or_default()
        );

        Self {
            player: Player::spawn(tuning),
            obstacles,
            camera: Camera::new(tuning.score_divisor),
            speed: level.speed,
            ticks: 0,
            outcome: None,
        }
    }

    /// Score reported so far
    #[inline]
    pub fn score(&self) -> u32 {
        self.camera.score()
    }

    /// Whether the run has reached a terminal outcome
    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Obstacles currently inside the viewport, in screen space
    pub fn visible_obstacles<'a>(
        &'a self,
        tuning: &'a Tuning,
    ) -> impl Iterator<Item = VisibleObstacle> + 'a {
        self.obstacles.iter().filter_map(move |o| {
            let screen_x = self.camera.to_screen_x(o.world_x);
            let on_screen = screen_x + tuning.block_size >= 0.0 && screen_x <= tuning.field_width;
            on_screen.then_some(VisibleObstacle {
                screen_x,
                y: o.world_y,
                kind: o.kind,
            })
        })
    }
}

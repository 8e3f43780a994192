//! Neo Dash - a side-scrolling reflex platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scrolling, run state)
//! - `game`: Run state machine driving one tick per host frame
//! - `levels`: Built-in level, JSON level input and fallback sanitising
//! - `tuning`: Data-driven physics and play-field constants

pub mod error;
pub mod game;
pub mod levels;
pub mod sim;
pub mod tuning;

pub use error::NeoDashError;
pub use game::{Game, GameObserver, JumpSignal};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Physics values are per-tick deltas, tuned for one tick per ~60 Hz frame.
pub mod consts {
    /// Nominal tick rate the physics constants were tuned against
    pub const TICK_HZ: f32 = 60.0;
    /// Wall-clock length of one tick at the nominal rate
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum ticks run for a single host frame
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Play field (screen space, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 450.0;
    /// Height of the ground band at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Player square
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Fixed screen X of the player's left edge
    pub const PLAYER_X: f32 = 100.0;
    /// Obstacle grid cell
    pub const BLOCK_SIZE: f32 = 40.0;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set by a jump (px/tick, negative = up)
    pub const JUMP_IMPULSE: f32 = -11.5;
    /// Airborne tilt rate (degrees/tick)
    pub const ROTATION_SPEED: f32 = 5.0;
    /// Fraction of the remaining tilt error removed each grounded tick
    pub const TILT_DAMPING: f32 = 0.2;

    /// World X of the level start anchor
    pub const LEAD_IN: f32 = 600.0;
    /// Distance from the last obstacle to the finish line
    pub const FINISH_GAP: f32 = 800.0;

    /// Player hitbox inset on left, right and top
    pub const HITBOX_INSET: f32 = 4.0;
    /// Player hitbox inset at the feet
    pub const HITBOX_FOOT_INSET: f32 = 2.0;
    /// Obstacle body inset on left, right and top
    pub const OBSTACLE_INSET: f32 = 4.0;
    /// Extra shrink applied to spike bodies on every side
    pub const SPIKE_PADDING: f32 = 10.0;
    /// Obstacles further than this past either viewport edge are skipped
    pub const CULL_MARGIN: f32 = 100.0;

    /// World units per percent of completion
    pub const SCORE_DIVISOR: f32 = 100.0;
    /// Scroll speed used when a level supplies an unusable one
    pub const DEFAULT_SPEED: f32 = 6.0;
}

/// Nearest multiple of 90 degrees
#[inline]
pub fn nearest_right_angle(degrees: f32) -> f32 {
    (degrees / 90.0).round() * 90.0
}

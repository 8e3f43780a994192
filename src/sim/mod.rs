//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick constants only, no wall-clock time inside a tick
//! - Stable iteration order (placed obstacles in world order)
//! - No rendering, input-device or platform dependencies

pub mod aabb;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use camera::Camera;
pub use clock::FrameClock;
pub use collision::{DeathCause, TickOutcome, resolve};
pub use level::{Level, ObstacleDescriptor, ObstacleKind, PlacedKind, PlacedObstacle, place_obstacles};
pub use player::Player;
pub use state::{GameEvent, GamePhase, RunState, VisibleObstacle};
pub use tick::{TickInput, TickReport, tick};

//! Level definitions and obstacle placement
//!
//! Authored levels describe obstacles relative to one another; the loader turns
//! them into absolute world positions once per run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::tuning::Tuning;

/// Authored obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObstacleKind {
    /// Ground or block-mounted spike, lethal on touch
    Spike,
    /// Solid block, can be landed on
    Block,
    /// Spike hanging in the air, lethal on touch
    FlyingSpike,
}

/// One authored obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleDescriptor {
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
    /// Gap from the previous obstacle (or the level start anchor)
    pub x_offset: u32,
    /// Grid row, 0 = resting on the ground
    pub y_level: u32,
}

impl ObstacleDescriptor {
    pub fn new(kind: ObstacleKind, x_offset: u32, y_level: u32) -> Self {
        Self {
            kind,
            x_offset,
            y_level,
        }
    }
}

/// A playable level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub name: String,
    pub description: String,
    /// `#RRGGBB`
    pub theme_color: String,
    /// World units scrolled per tick
    pub speed: f32,
    pub data: Vec<ObstacleDescriptor>,
}

/// Kind of a placed obstacle, including the synthetic finish line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacedKind {
    Spike,
    Block,
    FlyingSpike,
    /// Pass-through trigger that ends the run in victory
    Finish,
}

impl From<ObstacleKind> for PlacedKind {
    fn from(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Spike => PlacedKind::Spike,
            ObstacleKind::Block => PlacedKind::Block,
            ObstacleKind::FlyingSpike => PlacedKind::FlyingSpike,
        }
    }
}

/// An obstacle at an absolute world position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedObstacle {
    /// World units from the level origin; f64 so long levels keep unit precision
    pub world_x: f64,
    /// Top edge (screen Y; the world does not scroll vertically)
    pub world_y: f32,
    pub kind: PlacedKind,
    /// Set once this obstacle ended the run (lethal contact or finish)
    pub triggered: bool,
}

impl PlacedObstacle {
    pub fn new(world_x: f64, world_y: f32, kind: PlacedKind) -> Self {
        Self {
            world_x,
            world_y,
            kind,
            triggered: false,
        }
    }

    /// Visual square at the given screen X
    pub fn visual_box(&self, screen_x: f32, tuning: &Tuning) -> Aabb {
        Aabb::from_square(Vec2::new(screen_x, self.world_y), tuning.block_size)
    }

    /// Collision body at the given screen X (inset on left, right and top)
    pub fn body(&self, screen_x: f32, tuning: &Tuning) -> Aabb {
        let inset = tuning.obstacle_inset;
        self.visual_box(screen_x, tuning).inset(inset, inset, inset, 0.0)
    }
}

/// Convert authored descriptors into world-space obstacles plus a finish marker
///
/// The result is in ascending world X (ties keep authored order) and always has
/// `descriptors.len() + 1` entries.
pub fn place_obstacles(descriptors: &[ObstacleDescriptor], tuning: &Tuning) -> Vec<PlacedObstacle> {
    let mut cursor = f64::from(tuning.lead_in);
    let mut placed = Vec::with_capacity(descriptors.len() + 1);

    for desc in descriptors {
        cursor += f64::from(desc.x_offset);
        placed.push(PlacedObstacle::new(
            cursor,
            tuning.obstacle_y(desc.y_level),
            desc.kind.into(),
        ));
    }

    placed.push(PlacedObstacle::new(
        cursor + f64::from(tuning.finish_gap),
        0.0,
        PlacedKind::Finish,
    ));

    placed
}

//! Player kinematics
//!
//! The player never moves horizontally; the world scrolls beneath it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::nearest_right_angle;
use crate::tuning::Tuning;

/// The player's square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Screen X of the left edge (constant for the run)
    pub x: f32,
    /// Screen Y of the top edge
    pub y: f32,
    /// Vertical velocity (px/tick, positive = falling)
    pub vy: f32,
    /// Cosmetic tilt in degrees; never read by collision
    pub tilt: f32,
    pub grounded: bool,
    pub alive: bool,
}

impl Player {
    /// A fresh player resting on the ground
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.floor_y(),
            vy: 0.0,
            tilt: 0.0,
            grounded: true,
            alive: true,
        }
    }

    /// Start a jump if grounded
    ///
    /// Returns whether the impulse was applied. Requests while airborne are
    /// ignored, so there is no double jump.
    pub fn request_jump(&mut self, tuning: &Tuning) -> bool {
        if !self.grounded {
            return false;
        }
        self.vy = tuning.jump_impulse;
        self.grounded = false;
        true
    }

    /// Apply gravity, move, and update tilt for one tick
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.vy += tuning.gravity;
        self.y += self.vy;

        if self.grounded {
            let snap = nearest_right_angle(self.tilt);
            self.tilt += (snap - self.tilt) * tuning.tilt_damping;
        } else {
            self.tilt += tuning.rotation_speed;
        }
    }

    /// Rest the player's visual bottom on a surface
    pub fn land_on(&mut self, surface_y: f32, tuning: &Tuning) {
        self.y = surface_y - tuning.player_size;
        self.vy = 0.0;
        self.grounded = true;
    }

    /// Visual square
    pub fn visual_box(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_square(Vec2::new(self.x, self.y), tuning.player_size)
    }

    /// Collision box: slightly smaller than the visual square
    pub fn hitbox(&self, tuning: &Tuning) -> Aabb {
        let inset = tuning.hitbox_inset;
        self.visual_box(tuning)
            .inset(inset, inset, inset, tuning.hitbox_foot_inset)
    }

    /// Tilt for rendering
    pub fn tilt_radians(&self) -> f32 {
        self.tilt.to_radians()
    }
}

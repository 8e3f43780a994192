//! Data-driven physics and play-field tuning
//!
//! Defaults come from [`crate::consts`]. A tuning file may override any
//! subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::NeoDashError;

/// Per-tick physics constants and play-field geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics (per tick) ===
    pub gravity: f32,
    pub jump_impulse: f32,
    /// Degrees per airborne tick
    pub rotation_speed: f32,
    pub tilt_damping: f32,

    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,
    pub ground_height: f32,
    pub player_size: f32,
    pub player_x: f32,
    pub block_size: f32,

    // === Level layout ===
    pub lead_in: f32,
    pub finish_gap: f32,

    // === Collision ===
    pub hitbox_inset: f32,
    pub hitbox_foot_inset: f32,
    pub obstacle_inset: f32,
    pub spike_padding: f32,
    pub cull_margin: f32,

    // === Scoring ===
    pub score_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            rotation_speed: ROTATION_SPEED,
            tilt_damping: TILT_DAMPING,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            player_size: PLAYER_SIZE,
            player_x: PLAYER_X,
            block_size: BLOCK_SIZE,

            lead_in: LEAD_IN,
            finish_gap: FINISH_GAP,

            hitbox_inset: HITBOX_INSET,
            hitbox_foot_inset: HITBOX_FOOT_INSET,
            obstacle_inset: OBSTACLE_INSET,
            spike_padding: SPIKE_PADDING,
            cull_margin: CULL_MARGIN,

            score_divisor: SCORE_DIVISOR,
        }
    }
}

impl Tuning {
    /// Screen Y of the ground line (top of the ground band)
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.field_height - self.ground_height
    }

    /// Player top edge when resting on the ground
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.ground_line() - self.player_size
    }

    /// Top edge of an obstacle on grid row `y_level` (0 = on the ground)
    #[inline]
    pub fn obstacle_y(&self, y_level: u32) -> f32 {
        self.ground_line() - y_level as f32 * self.block_size - self.block_size
    }

    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, NeoDashError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self, NeoDashError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), NeoDashError> {
        let invalid = |msg: &str| Err(NeoDashError::InvalidTuning(msg.to_string()));

        let sizes = [
            self.field_width,
            self.field_height,
            self.player_size,
            self.block_size,
            self.score_divisor,
        ];
        if sizes.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return invalid("field, player, block sizes and score divisor must be positive");
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return invalid("gravity must be positive");
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse >= 0.0 {
            return invalid("jump impulse must be negative (upward)");
        }
        if !(0.0..=1.0).contains(&self.tilt_damping) {
            return invalid("tilt damping must be within 0..=1");
        }
        if self.ground_height < 0.0 || self.ground_height >= self.field_height {
            return invalid("ground height must lie inside the field");
        }
        if self.cull_margin < self.block_size {
            return invalid("cull margin must be at least one block wide");
        }
        if self.hitbox_inset * 2.0 >= self.player_size || self.hitbox_foot_inset < 0.0 {
            return invalid("player hitbox insets leave no hitbox");
        }
        if (self.obstacle_inset + self.spike_padding) * 2.0 >= self.block_size {
            return invalid("spike padding leaves no spike body");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.ground_line(), 350.0);
        assert_eq!(tuning.floor_y(), 310.0);
        assert_eq!(tuning.obstacle_y(0), 310.0);
        assert_eq!(tuning.obstacle_y(1), 270.0);
        assert_eq!(tuning.obstacle_y(2), 230.0);
    }

    #[test]
    fn test_partial_override() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "score_divisor": 50 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.score_divisor, 50.0);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, NeoDashError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_narrow_cull_margin() {
        let tuning = Tuning {
            cull_margin: 10.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, NeoDashError::Json(_)));
    }
}

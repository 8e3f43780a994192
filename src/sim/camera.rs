//! Horizontal scroll and completion score

use serde::{Deserialize, Serialize};

/// World scroll offset and the score derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    world_offset: f64,
    /// Last score reported to observers
    score: u32,
    score_divisor: f32,
}

impl Camera {
    pub fn new(score_divisor: f32) -> Self {
        Self {
            world_offset: 0.0,
            score: 0,
            score_divisor,
        }
    }

    /// Scroll forward by `speed`
    ///
    /// Returns the new score only when it increased this call.
    pub fn advance(&mut self, speed: f32) -> Option<u32> {
        self.world_offset += f64::from(speed.max(0.0));

        let score = self.current_score();
        if score > self.score {
            self.score = score;
            Some(score)
        } else {
            None
        }
    }

    #[inline]
    pub fn to_screen_x(&self, world_x: f64) -> f32 {
        (world_x - self.world_offset) as f32
    }

    #[inline]
    pub fn world_offset(&self) -> f64 {
        self.world_offset
    }

    /// Completion percentage at the current offset
    pub fn current_score(&self) -> u32 {
        (self.world_offset / f64::from(self.score_divisor)).floor() as u32
    }

    /// Highest score reported so far
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_reported_only_on_increase() {
        let mut camera = Camera::new(100.0);
        let reports: Vec<u32> = (0..50).filter_map(|_| camera.advance(6.0)).collect();

        // 50 ticks * 6 = 300 units -> 1%, 2%, 3%
        assert_eq!(reports, vec![1, 2, 3]);
        assert_eq!(camera.score(), 3);
        assert_eq!(camera.world_offset(), 300.0);
    }

    #[test]
    fn test_screen_transform() {
        let mut camera = Camera::new(100.0);
        camera.advance(250.0);
        assert_eq!(camera.to_screen_x(1000.0), 750.0);
        assert_eq!(camera.to_screen_x(100.0), -150.0);
    }

    #[test]
    fn test_never_scrolls_backwards() {
        let mut camera = Camera::new(100.0);
        camera.advance(120.0);
        assert_eq!(camera.advance(-50.0), None);
        assert_eq!(camera.world_offset(), 120.0);
        assert_eq!(camera.score(), 1);
    }

    #[test]
    fn test_keeps_scrolling_far_from_origin() {
        let mut camera = Camera::new(100.0);
        camera.advance(134_217_728.0);
        let start = camera.world_offset();

        for _ in 0..1000 {
            camera.advance(6.0);
        }
        assert_eq!(camera.world_offset(), start + 6000.0);
        assert_eq!(camera.score(), 1_342_237);
    }
}

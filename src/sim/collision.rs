//! Collision resolution between the player and level geometry
//!
//! Each tick the player's hitbox is tested against the floor and then against
//! every in-range obstacle in list order. The first lethal or finish contact
//! ends the scan, so list order decides which obstacle a death is blamed on.

use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::level::{PlacedKind, PlacedObstacle};
use super::player::Player;
use crate::tuning::Tuning;

/// What killed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Touched a spike or flying spike
    Spike,
    /// Ran into the side of a block
    Crash,
    /// Hit the underside of a block while rising
    Bonk,
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Airborne, nothing touched
    Continue,
    /// Supported by the floor or a block top at `surface_y`
    Landed { surface_y: f32 },
    /// Fatal contact with obstacle `obstacle` (index into the placed list)
    Died { cause: DeathCause, obstacle: usize },
    /// Crossed the finish line
    Won,
}

impl TickOutcome {
    /// Whether this outcome ends the run
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::Died { .. } | TickOutcome::Won)
    }
}

/// Whether an obstacle at `screen_x` is far enough off screen to skip
#[inline]
fn is_culled(screen_x: f32, tuning: &Tuning) -> bool {
    screen_x > tuning.field_width + tuning.cull_margin
        || screen_x + tuning.block_size < -tuning.cull_margin
}

/// Resolve the player against the floor and all placed obstacles
///
/// Mutates the player (snapping, landing, death) and flags the obstacle that
/// ended the run, if any.
pub fn resolve(
    player: &mut Player,
    obstacles: &mut [PlacedObstacle],
    camera: &Camera,
    tuning: &Tuning,
) -> TickOutcome {
    let floor_y = tuning.floor_y();
    let mut support: Option<f32> = None;

    // Floor plane first; anything else must re-establish support below
    if player.y >= floor_y {
        player.land_on(tuning.ground_line(), tuning);
        support = Some(tuning.ground_line());
    } else {
        player.grounded = false;
    }

    let hitbox = player.hitbox(tuning);

    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        let screen_x = camera.to_screen_x(obstacle.world_x);

        match obstacle.kind {
            PlacedKind::Finish => {
                if player.x > screen_x {
                    obstacle.triggered = true;
                    return TickOutcome::Won;
                }
            }

            PlacedKind::Spike | PlacedKind::FlyingSpike => {
                if is_culled(screen_x, tuning) {
                    continue;
                }
                let spike = obstacle
                    .body(screen_x, tuning)
                    .shrink(tuning.spike_padding);
                if hitbox.overlaps(&spike) {
                    log::trace!("spike contact with obstacle {index} at screen x {screen_x}");
                    obstacle.triggered = true;
                    player.alive = false;
                    return TickOutcome::Died {
                        cause: DeathCause::Spike,
                        obstacle: index,
                    };
                }
            }

            PlacedKind::Block => {
                if is_culled(screen_x, tuning) {
                    continue;
                }
                let body = obstacle.body(screen_x, tuning);
                if !hitbox.overlaps(&body) {
                    continue;
                }

                let overlap_x = hitbox.penetration_x(&body);
                let overlap_y = hitbox.penetration_y(&body);

                if overlap_y < overlap_x {
                    if player.vy > 0.0 && player.y < obstacle.world_y {
                        log::trace!("landed on block {index}");
                        player.land_on(obstacle.world_y, tuning);
                        support = Some(obstacle.world_y);
                    } else if player.vy < 0.0 && player.y > obstacle.world_y {
                        // Bonking a block from below is fatal
                        player.y = obstacle.world_y + tuning.block_size;
                        player.vy = 0.0;
                        player.alive = false;
                        obstacle.triggered = true;
                        return TickOutcome::Died {
                            cause: DeathCause::Bonk,
                            obstacle: index,
                        };
                    }
                } else {
                    obstacle.triggered = true;
                    player.alive = false;
                    return TickOutcome::Died {
                        cause: DeathCause::Crash,
                        obstacle: index,
                    };
                }
            }
        }
    }

    match support {
        Some(surface_y) => TickOutcome::Landed { surface_y },
        None => TickOutcome::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Camera scrolled so that world X 900 sits at `screen_x`
    fn camera_with_block_at(screen_x: f32) -> Camera {
        let mut camera = Camera::new(100.0);
        camera.advance(900.0 - screen_x);
        camera
    }

    #[test]
    fn test_floor_snap() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        player.integrate(&tuning);
        assert!(player.y > tuning.floor_y());

        let camera = Camera::new(100.0);
        let outcome = resolve(&mut player, &mut [], &camera, &tuning);
        assert_eq!(outcome, TickOutcome::Landed { surface_y: 350.0 });
        assert_eq!(player.y, tuning.floor_y());
        assert_eq!(player.vy, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_airborne_clears_grounded() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        player.y = 200.0;
        player.vy = 2.0;

        let camera = Camera::new(100.0);
        let outcome = resolve(&mut player, &mut [], &camera, &tuning);
        assert_eq!(outcome, TickOutcome::Continue);
        assert!(!player.grounded);
    }

    #[test]
    fn test_landing_on_block() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        player.grounded = false;
        player.y = 278.0; // hitbox bottom 316, block top 314
        player.vy = 5.0;

        let mut obstacles = [PlacedObstacle::new(900.0, 310.0, PlacedKind::Block)];
        let camera = camera_with_block_at(100.0);

        let outcome = resolve(&mut player, &mut obstacles, &camera, &tuning);
        assert_eq!(outcome, TickOutcome::Landed { surface_y: 310.0 });
        assert!(player.grounded);
        assert!(player.alive);
        assert_eq!(player.vy, 0.0);
        assert_eq!(player.y, 270.0);
        assert!(!obstacles[0].triggered);
    }

    #[test]
    fn test_side_crash() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        let mut obstacles = [PlacedObstacle::new(900.0, 310.0, PlacedKind::Block)];
        // Block body left edge 2px inside the hitbox's right edge
        let camera = camera_with_block_at(130.0);

        let outcome = resolve(&mut player, &mut obstacles, &camera, &tuning);
        assert_eq!(
            outcome,
            TickOutcome::Died {
                cause: DeathCause::Crash,
                obstacle: 0
            }
        );
        assert!(!player.alive);
        assert!(obstacles[0].triggered);
    }

    #[test]
    fn test_head_bonk_is_fatal() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        player.grounded = false;
        // Block on row 2 (top 230, body bottom 270); hitbox top 268
        player.y = 264.0;
        player.vy = -8.0;

        let mut obstacles = [PlacedObstacle::new(900.0, 230.0, PlacedKind::Block)];
        let camera = camera_with_block_at(100.0);

        let outcome = resolve(&mut player, &mut obstacles, &camera, &tuning);
        assert_eq!(
            outcome,
            TickOutcome::Died {
                cause: DeathCause::Bonk,
                obstacle: 0
            }
        );
        assert_eq!(player.y, 270.0);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn test_spike_uses_tighter_box() {
        let tuning = Tuning::default();
        let camera_near = camera_with_block_at(136.0 - 4.0 - 10.0 + 1.0);
        let camera_touch = camera_with_block_at(136.0 - 4.0 - 10.0);

        // Plain body overlaps but the padded spike does not
        let mut player = Player::spawn(&tuning);
        let mut obstacles = [PlacedObstacle::new(900.0, 310.0, PlacedKind::Spike)];
        let outcome = resolve(&mut player, &mut obstacles, &camera_near, &tuning);
        assert_eq!(outcome, TickOutcome::Landed { surface_y: 350.0 });
        assert!(player.alive);

        let outcome = resolve(&mut player, &mut obstacles, &camera_touch, &tuning);
        assert_eq!(
            outcome,
            TickOutcome::Died {
                cause: DeathCause::Spike,
                obstacle: 0
            }
        );
    }

    #[test]
    fn test_list_order_breaks_ties() {
        let tuning = Tuning::default();
        let camera = camera_with_block_at(110.0);

        let mut player = Player::spawn(&tuning);
        let mut spike_first = [
            PlacedObstacle::new(900.0, 310.0, PlacedKind::Spike),
            PlacedObstacle::new(900.0, 310.0, PlacedKind::Block),
        ];
        let outcome = resolve(&mut player, &mut spike_first, &camera, &tuning);
        assert_eq!(
            outcome,
            TickOutcome::Died {
                cause: DeathCause::Spike,
                obstacle: 0
            }
        );
        assert!(spike_first[0].triggered);
        assert!(!spike_first[1].triggered);

        let mut player = Player::spawn(&tuning);
        let mut block_first = [
            PlacedObstacle::new(900.0, 310.0, PlacedKind::Block),
            PlacedObstacle::new(900.0, 310.0, PlacedKind::Spike),
        ];
        let outcome = resolve(&mut player, &mut block_first, &camera, &tuning);
        assert_eq!(
            outcome,
            TickOutcome::Died {
                cause: DeathCause::Crash,
                obstacle: 0
            }
        );
    }

    #[test]
    fn test_finish_line() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        let mut obstacles = [PlacedObstacle::new(900.0, 0.0, PlacedKind::Finish)];

        let outcome = resolve(&mut player, &mut obstacles, &camera_with_block_at(100.0), &tuning);
        assert_eq!(outcome, TickOutcome::Landed { surface_y: 350.0 });

        let outcome = resolve(&mut player, &mut obstacles, &camera_with_block_at(99.0), &tuning);
        assert_eq!(outcome, TickOutcome::Won);
        assert!(obstacles[0].triggered);
    }

    #[test]
    fn test_far_obstacles_are_culled() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        // A block overlapping the player would kill, but one far to the right is skipped
        let mut obstacles = [PlacedObstacle::new(5000.0, 310.0, PlacedKind::Block)];
        let outcome = resolve(&mut player, &mut obstacles, &Camera::new(100.0), &tuning);
        assert_eq!(outcome, TickOutcome::Landed { surface_y: 350.0 });
        assert!(is_culled(4000.0, &tuning));
        assert!(!is_culled(tuning.field_width + tuning.block_size, &tuning));
        assert!(!is_culled(-tuning.block_size - 1.0, &tuning));
    }
}

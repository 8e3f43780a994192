//! Level sources
//!
//! The simulation trusts whatever level it is handed. This module is the
//! boundary that produces those levels: the built-in default, JSON input from
//! a generator or a file, and the fallbacks applied before a level is played.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::DEFAULT_SPEED;
use crate::error::NeoDashError;
use crate::sim::{Level, ObstacleDescriptor, ObstacleKind};

/// Theme colours used when a level does not bring a usable one
pub const NEON_COLORS: [&str; 5] = [
    "#00f3ff", // Cyan
    "#ff00ff", // Magenta
    "#00ff00", // Lime
    "#ffe600", // Yellow
    "#ff4d00", // OrangeRed
];

fn descriptors(data: &[(ObstacleKind, u32, u32)]) -> Vec<ObstacleDescriptor> {
    data.iter()
        .map(|&(kind, x_offset, y_level)| ObstacleDescriptor::new(kind, x_offset, y_level))
        .collect()
}

/// The built-in first level
pub fn neo_genesis() -> Level {
    use ObstacleKind::*;

    Level {
        name: "Neo Genesis".to_string(),
        description: "The first simulation.".to_string(),
        theme_color: NEON_COLORS[0].to_string(),
        speed: DEFAULT_SPEED,
        data: descriptors(&[
            (Spike, 500, 0),
            (Block, 300, 0),
            (Block, 40, 1),
            (Spike, 300, 0),
            (Spike, 300, 0),
            (Block, 250, 0),
            (Block, 400, 0),
            (FlyingSpike, 200, 1),
            (Block, 400, 0),
            (Spike, 400, 0),
            (Block, 300, 0),
            (Block, 40, 1),
            (Block, 40, 2),
            (Spike, 300, 0),
            (Block, 400, 0),
            (Spike, 400, 0),
            (Spike, 150, 0),
            (Block, 300, 1),
        ]),
    }
}

/// Local backup played when a level source yields nothing usable
pub fn fallback_fields() -> Level {
    use ObstacleKind::*;

    Level {
        name: "Fallback Fields".to_string(),
        description: "The level source was unusable, so here is a local backup.".to_string(),
        theme_color: NEON_COLORS[0].to_string(),
        speed: DEFAULT_SPEED,
        data: descriptors(&[
            (Spike, 500, 0),
            (Block, 300, 0),
            (Spike, 400, 0),
            (Block, 300, 0),
            (Block, 40, 1),
            (Spike, 300, 0),
            (Block, 300, 1),
            (FlyingSpike, 200, 0),
            (Spike, 400, 0),
        ]),
    }
}

impl Default for Level {
    fn default() -> Self {
        neo_genesis()
    }
}

/// Whether `color` is a `#RRGGBB` hex colour
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a level from JSON
///
/// Field names follow the generator's schema (`themeColor`, `xOffset`,
/// `yLevel`, obstacle tags `SPIKE` / `BLOCK` / `FLYING_SPIKE`).
pub fn parse_level(json: &str) -> Result<Level, NeoDashError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a level file
pub fn load_level(path: &Path) -> Result<Level, NeoDashError> {
    let json = std::fs::read_to_string(path)?;
    let level = parse_level(&json)?;
    log::info!(
        "Loaded level '{}' from {} ({} obstacles)",
        level.name,
        path.display(),
        level.data.len()
    );
    Ok(level)
}

/// Read a level file, playing [`fallback_fields`] if it cannot be read or parsed
pub fn load_level_or_fallback(path: &Path) -> Level {
    load_level(path).unwrap_or_else(|e| {
        log::warn!("Level {} unusable ({e}); playing 'Fallback Fields'", path.display());
        fallback_fields()
    })
}

/// Replace unusable presentation fields with fallbacks
///
/// Obstacle data is never touched. `seed` picks the fallback theme colour so
/// the same input always sanitises the same way.
pub fn sanitize(mut level: Level, seed: u64) -> Level {
    if !is_hex_color(&level.theme_color) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let color = NEON_COLORS[rng.random_range(0..NEON_COLORS.len())];
        log::warn!(
            "Level '{}' has theme colour {:?}; using {}",
            level.name,
            level.theme_color,
            color
        );
        level.theme_color = color.to_string();
    }

    if !level.speed.is_finite() || level.speed <= 0.0 {
        log::warn!(
            "Level '{}' has speed {}; using {}",
            level.name,
            level.speed,
            DEFAULT_SPEED
        );
        level.speed = DEFAULT_SPEED;
    }

    if level.name.trim().is_empty() {
        log::warn!("Level has no name; using 'Untitled'");
        level.name = "Untitled".to_string();
    }

    level
}

//! Gameplay tuning
//!
//! Everything is fixed at build time through [`crate::consts`]; `GameConfig`
//! bundles those values so a session (and tests) can carry a variant.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// All tunable gameplay values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_half_width: f32,
    pub ground_level: f32,

    // === Player motion (per frame) ===
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,

    // === Gems ===
    pub pickup_radius: f32,
    pub pickup_points: u32,
    pub collectible_count: usize,
    pub collectible_height: f32,
    pub spawn_half_extent: f32,
    pub respawn_delay_ms: f64,

    // === Round ===
    pub game_duration_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_half_width: ARENA_HALF_WIDTH,
            ground_level: GROUND_LEVEL,

            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            pickup_radius: PICKUP_RADIUS,
            pickup_points: PICKUP_POINTS,
            collectible_count: COLLECTIBLE_COUNT,
            collectible_height: COLLECTIBLE_HEIGHT,
            spawn_half_extent: SPAWN_HALF_EXTENT,
            respawn_delay_ms: RESPAWN_DELAY_MS,

            game_duration_secs: GAME_DURATION_SECS,
        }
    }
}

impl GameConfig {
    /// Short round preset, handy for demos
    pub fn with_duration(secs: u32) -> Self {
        Self {
            game_duration_secs: secs,
            ..Self::default()
        }
    }

    /// Spawn area must sit inside the arena or gems become unreachable
    pub fn spawn_area_fits(&self) -> bool {
        self.spawn_half_extent > 0.0 && self.spawn_half_extent < self.arena_half_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.collectible_count, 8);
        assert_eq!(cfg.game_duration_secs, 60);
        assert_eq!(cfg.pickup_points, 10);
        assert!(cfg.spawn_area_fits());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"game_duration_secs": 5}"#).unwrap();
        assert_eq!(cfg.game_duration_secs, 5);
        assert_eq!(cfg.arena_half_width, ARENA_HALF_WIDTH);
    }
}

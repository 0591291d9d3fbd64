//! Follow camera
//!
//! Trails the player at a fixed height, drifting a fraction of the player's
//! ground offset so the arena edges stay in view.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera height above the ground plane
pub const CAMERA_HEIGHT: f32 = 8.0;
/// Distance behind the arena center (toward the viewer)
pub const CAMERA_DISTANCE: f32 = 15.0;
/// How much of the player's offset the camera follows
pub const FOLLOW_FACTOR: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE),
            target: Vec3::ZERO,
        }
    }
}

impl CameraRig {
    /// Camera looking at the player
    pub fn follow(player_pos: Vec3) -> Self {
        Self {
            eye: Vec3::new(
                player_pos.x * FOLLOW_FACTOR,
                CAMERA_HEIGHT,
                player_pos.z * FOLLOW_FACTOR + CAMERA_DISTANCE,
            ),
            target: player_pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_offsets() {
        let rig = CameraRig::follow(Vec3::new(10.0, 0.5, -10.0));
        assert!((rig.eye.x - 3.0).abs() < 1e-5);
        assert_eq!(rig.eye.y, 8.0);
        assert!((rig.eye.z - 12.0).abs() < 1e-5);
        assert_eq!(rig.target, Vec3::new(10.0, 0.5, -10.0));
    }
}

//! Gem pickup detection
//!
//! Pure function over a snapshot of the gem list: the caller removes the
//! returned ids afterwards, so nothing is skipped or counted twice.

use glam::Vec3;

use super::state::{Collectible, CollectibleId};

/// Result of one frame's pickup check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickupResult {
    /// Gems inside the pickup radius (each exactly once)
    pub removed: Vec<CollectibleId>,
    /// Points earned this frame
    pub score_delta: u32,
}

impl PickupResult {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Check whether a gem is close enough to be collected (strictly inside the radius)
#[inline]
pub fn within_pickup(player_pos: Vec3, gem_pos: Vec3, radius: f32) -> bool {
    player_pos.distance_squared(gem_pos) < radius * radius
}

/// Find every gem the player touches this frame
pub fn collect(
    player_pos: Vec3,
    collectibles: &[Collectible],
    radius: f32,
    points: u32,
) -> PickupResult {
    let removed: Vec<CollectibleId> = collectibles
        .iter()
        .rev()
        .filter(|c| within_pickup(player_pos, c.pos, radius))
        .map(|c| c.id)
        .collect();
    let score_delta = points.saturating_mul(removed.len() as u32);
    PickupResult {
        removed,
        score_delta,
    }
}

//! Collectible registry
//!
//! Owns the live gem set and the seeded RNG used to place them.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Collectible, CollectibleId};
use crate::GameConfig;

/// Live gems plus id allocation
#[derive(Debug, Clone)]
pub struct Registry {
    collectibles: Vec<Collectible>,
    rng: Pcg32,
    next_id: u32,
    spawn_half_extent: f32,
    height: f32,
}

impl Registry {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            collectibles: Vec::with_capacity(config.collectible_count),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            spawn_half_extent: config.spawn_half_extent,
            height: config.collectible_height,
        }
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn len(&self) -> usize {
        self.collectibles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectibles.is_empty()
    }

    /// Drop every gem and place `n` fresh ones. Returns the new ids.
    pub fn spawn_collectibles(&mut self, n: usize) -> Vec<CollectibleId> {
        self.collectibles.clear();
        (0..n).map(|_| self.spawn_one()).collect()
    }

    /// Add a single gem at a random spot
    pub fn spawn_one(&mut self) -> CollectibleId {
        let pos = self.random_position();
        self.insert_at(pos)
    }

    /// Add a gem at a fixed spot
    pub fn insert_at(&mut self, pos: Vec3) -> CollectibleId {
        let id = self.allocate_id();
        self.collectibles.push(Collectible { id, pos });
        id
    }

    /// Remove by id. Missing ids are ignored and report `false`.
    pub fn remove_collectible(&mut self, id: CollectibleId) -> bool {
        match self.collectibles.iter().position(|c| c.id == id) {
            Some(idx) => {
                self.collectibles.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.collectibles.clear();
    }

    fn allocate_id(&mut self) -> CollectibleId {
        let id = CollectibleId(self.next_id);
        self.next_id += 1;
        id
    }

    fn random_position(&mut self) -> Vec3 {
        let h = self.spawn_half_extent;
        if h <= 0.0 {
            return Vec3::new(0.0, self.height, 0.0);
        }
        Vec3::new(
            self.rng.random_range(-h..h),
            self.height,
            self.rng.random_range(-h..h),
        )
    }
}

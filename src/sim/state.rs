//! Game state and core simulation types
//!
//! Plain data only: the session owns one of each and mutates them from the
//! frame and countdown callbacks.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Timer ran out
    Ended,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Ended => "ended",
        }
    }
}

/// Score, countdown and phase
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// Whole seconds left in the round
    pub time_remaining: u32,
    pub phase: GamePhase,
}

/// The player's cube
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    /// Per-frame velocity
    pub vel: Vec3,
    pub is_jumping: bool,
}

impl Player {
    /// Player standing at the arena origin
    pub fn at_origin(ground_level: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, ground_level, 0.0),
            vel: Vec3::ZERO,
            is_jumping: false,
        }
    }

    #[inline]
    pub fn is_grounded(&self, ground_level: f32) -> bool {
        self.pos.y <= ground_level
    }
}

/// Opaque gem identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectibleId(pub u32);

/// A gem waiting to be picked up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: CollectibleId,
    pub pos: Vec3,
}

/// Joystick direction on the ground plane, each axis in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputVector {
    pub x: f32,
    pub z: f32,
}

impl InputVector {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    /// Build from a raw direction, shortening it to unit length if longer
    pub fn clamped(dir: Vec2) -> Self {
        let dir = if dir.length_squared() > 1.0 {
            dir.normalize_or_zero()
        } else {
            dir
        };
        Self { x: dir.x, z: dir.y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

/// Things the presentation layer wants to hear about, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    ScoreChanged(u32),
    TimeChanged(u32),
    PauseChanged(bool),
    GameEnded { final_score: u32 },
    Collected(CollectibleId),
    Spawned(CollectibleId),
}

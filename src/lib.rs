//! Gem Rush - A timed gem-collecting mini-game
//!
//! Core modules:
//! - `sim`: Headless game logic (movement, pickups, state machine, timers)
//! - `platform`: Joystick input, haptics and presentation sinks
//! - `render`: Plain-data frame snapshots for the JS scene graph
//! - `config`: Gameplay tuning values

pub mod config;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Arena half-width (player must stay strictly inside)
    pub const ARENA_HALF_WIDTH: f32 = 14.0;
    /// Player resting height (box half-size above the ground plane)
    pub const GROUND_LEVEL: f32 = 0.5;

    /// Horizontal speed per frame at full joystick deflection
    pub const MOVE_SPEED: f32 = 0.1;
    /// Vertical velocity lost per airborne frame
    pub const GRAVITY: f32 = 0.015;
    /// Vertical launch velocity of a jump
    pub const JUMP_VELOCITY: f32 = 0.3;

    /// Pickup distance (strictly less than)
    pub const PICKUP_RADIUS: f32 = 1.5;
    /// Points per gem
    pub const PICKUP_POINTS: u32 = 10;
    /// Gems kept alive while playing
    pub const COLLECTIBLE_COUNT: usize = 8;
    /// Logical gem height (render adds a bob on top)
    pub const COLLECTIBLE_HEIGHT: f32 = 1.0;
    /// Gems spawn inside [-12.5, 12.5) on both axes
    pub const SPAWN_HALF_EXTENT: f32 = 12.5;
    /// Delay between a pickup and its replacement (ms of play time)
    pub const RESPAWN_DELAY_MS: f64 = 500.0;

    /// Round length in seconds
    pub const GAME_DURATION_SECS: u32 = 60;
    /// Countdown period (ms)
    pub const COUNTDOWN_PERIOD_MS: f64 = 1000.0;
    /// Largest frame delta accepted by the clocks (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Joystick knob radius in CSS pixels (reduces the usable throw)
    pub const JOYSTICK_KNOB_RADIUS: f32 = 25.0;

    /// Vibration on pickup (ms)
    pub const PICKUP_PULSE_MS: u32 = 50;
    /// Vibration pattern on game over (on, off, on)
    pub const GAME_OVER_PATTERN_MS: [u32; 3] = [200, 100, 200];
}

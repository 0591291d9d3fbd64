//! Per-frame render data
//!
//! Everything the JS scene graph needs to place meshes, as plain values.
//! Gem bob and spin live here only; pickups use the logical position.

use glam::{Vec2, Vec3};
use serde::Serialize;

use super::camera::CameraRig;
use crate::platform::Joystick;
use crate::sim::{GamePhase, GameSession};

/// Bob amplitude around the logical gem height
pub const GEM_BOB_AMPLITUDE: f32 = 0.2;
/// Spin per simulated frame (radians)
pub const GEM_SPIN_PER_FRAME: f32 = 0.02;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec3,
    pub jumping: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GemView {
    pub id: u32,
    pub pos: Vec3,
    /// Yaw (radians)
    pub spin: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct JoystickView {
    pub active: bool,
    /// Knob offset in CSS pixels
    pub knob: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    pub camera: CameraRig,
    pub gems: Vec<GemView>,
    pub joystick: JoystickView,
}

impl FrameSnapshot {
    /// Capture the session at `time_secs` of wall-clock animation time
    pub fn capture(session: &GameSession, joystick: &Joystick, time_secs: f32) -> Self {
        let player = session.player();
        let spin = (session.play_frames() as f32 * GEM_SPIN_PER_FRAME)
            .rem_euclid(std::f32::consts::TAU);

        let gems = session
            .collectibles()
            .iter()
            .enumerate()
            .map(|(index, gem)| GemView {
                id: gem.id.0,
                pos: gem.pos + Vec3::Y * gem_bob(time_secs, index),
                spin,
            })
            .collect();

        Self {
            phase: session.phase(),
            player: PlayerView {
                pos: player.pos,
                jumping: player.is_jumping,
            },
            camera: CameraRig::follow(player.pos),
            gems,
            joystick: JoystickView {
                active: joystick.is_active(),
                knob: joystick.knob_offset(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Vertical bob for the gem at `index`, phase-shifted so neighbours don't sync
#[inline]
pub fn gem_bob(time_secs: f32, index: usize) -> f32 {
    (time_secs + index as f32).sin() * GEM_BOB_AMPLITUDE
}

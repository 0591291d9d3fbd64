//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Touch joystick input
//! - Vibration
//! - HUD and screen updates

pub mod haptics;
pub mod joystick;
pub mod presenter;

pub use haptics::{HapticSink, NoHaptics};
pub use joystick::Joystick;
pub use presenter::{LogPresenter, Presenter, dispatch};

#[cfg(target_arch = "wasm32")]
pub use haptics::WebVibration;
#[cfg(target_arch = "wasm32")]
pub use presenter::DomPresenter;

//! Render adapter data
//!
//! Meshes, lights and the WebGL renderer are built in JS; this side only
//! produces the numbers that drive them each frame.

pub mod camera;
pub mod snapshot;

pub use camera::CameraRig;
pub use snapshot::{FrameSnapshot, gem_bob};

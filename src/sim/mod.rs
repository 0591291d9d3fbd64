//! Game simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One movement integration per frame
//! - Seeded RNG only
//! - Timers are plain data advanced by the caller

pub mod collision;
pub mod driver;
pub mod movement;
pub mod registry;
pub mod schedule;
pub mod session;
pub mod state;

pub use collision::{PickupResult, collect};
pub use driver::Driver;
pub use registry::Registry;
pub use schedule::{DelayQueue, Ticker};
pub use session::GameSession;
pub use state::{Collectible, CollectibleId, GameEvent, GamePhase, GameState, InputVector, Player};

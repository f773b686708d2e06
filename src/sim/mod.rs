//! Simulation module
//!
//! All gameplay logic lives here. It must stay free of rendering and platform
//! dependencies:
//! - One update per host frame, no delta time
//! - State is owned by a single `GameState` and passed explicitly

pub mod input;
pub mod state;
pub mod tick;

pub use input::{InputLatch, Key, KeyResponse};
pub use state::{Actor, Bounds, GameState};
pub use tick::{tick, try_jump};

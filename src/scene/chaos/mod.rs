//! Chaos Module
//!
//! Four self-renewing timer chains keep the scene from settling: one
//! reshuffles letter styles, one shakes the letters, one swings gravity and
//! one sends everything back to its spawn point. Each chain waits a random
//! number of seconds, fires, then draws a fresh delay.

mod state;
mod systems;

pub use state::*;
pub use systems::*;

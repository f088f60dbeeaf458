//! Systems module for the letter scene
//!
//! - `setup`: Scene initialization and letter spawning
//! - `bounds`: Viewport bounds, walls and drift recovery
//! - `recovery`: Scene resets
//! - `dormancy`: Sleep tracking and the all-dormant earthquake
//! - `forces`: Earthquakes and gravity
//! - `styles`: Letter style changes
//! - `collisions`: Wall hit feedback
//! - `input`: Keyboard and mouse handling
//! - `ui`: Controls panel and tips

pub mod bounds;
pub mod collisions;
pub mod dormancy;
pub mod forces;
pub mod input;
pub mod recovery;
pub mod setup;
pub mod styles;
pub mod ui;

pub use bounds::*;
pub use collisions::*;
pub use dormancy::*;
pub use forces::*;
pub use input::*;
pub use recovery::*;
pub use setup::*;
pub use styles::*;
pub use ui::*;

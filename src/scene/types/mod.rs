//! Types module for the letter scene
//!
//! This module contains all the components, resources and messages
//! shared by the scene's systems, organized into submodules:
//!
//! - `letter`: Letter components, walls, markers
//! - `bounds`: Viewport bounds in world space
//! - `sleep`: Dormant-letter counter
//! - `params`: Simulation parameters, random source, stats
//! - `palette`: Colour palettes and sprite textures
//! - `messages`: Messages between systems
//! - `config`: Scene configuration and loading

pub mod bounds;
pub mod config;
pub mod letter;
pub mod messages;
pub mod palette;
pub mod params;
pub mod sleep;

pub use bounds::*;
pub use config::*;
pub use letter::*;
pub use messages::*;
pub use palette::*;
pub use params::*;
pub use sleep::*;

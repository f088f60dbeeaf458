//! Letterquake - letter sprites dropped into a bounded viewport and left to the
//! mercy of a rigid-body world that reshuffles itself every few seconds.
//!
//! - `scene`: the Bevy plugin, its resources, components, messages and systems

pub mod scene;

//! Messages exchanged between the scene's systems
//!
//! Every trigger (timer fire, bounds escape, dormancy, user input) is turned
//! into one of these and handled in a fixed order once per frame.

use bevy::prelude::*;

/// What asked for a scene reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetCause {
    Timer,
    OutOfBounds,
    User,
}

/// What asked for an earthquake
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EarthquakeCause {
    Timer,
    AllDormant,
    User,
}

/// Return every letter to its spawn point and reshuffle styles.
/// Any number of these in one frame results in a single reset.
#[derive(Message, Clone, Copy, Debug)]
pub struct ResetScene {
    pub cause: ResetCause,
}

/// Apply one random impulse to every letter
#[derive(Message, Clone, Copy, Debug)]
pub struct Earthquake {
    pub cause: EarthquakeCause,
}

/// Give every letter a random style and colour
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RandomizeStyles;

/// Put every letter in the same style (colours unchanged)
#[derive(Message, Clone, Copy, Debug)]
pub struct SetAllStyles(pub usize);

/// A letter's body went to sleep or woke up
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DormancyChanged {
    pub entity: Entity,
    pub dormant: bool,
}

/// Spawn a new tracked letter (direct text entry)
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnLetter(pub char);

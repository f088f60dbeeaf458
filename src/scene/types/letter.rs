//! Letter-related components
//!
//! A tracked letter is a parent entity carrying the rigid body and these
//! components, with a single child entity holding the sprite quad.

use bevy::prelude::*;

/// Identity of a tracked letter (which glyph it shows)
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Letter {
    pub glyph: char,
}

impl Letter {
    pub fn new(glyph: char) -> Self {
        Self {
            glyph: glyph.to_ascii_lowercase(),
        }
    }
}

/// Position the letter was spawned at. Never changes after spawn.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoint(pub Vec3);

/// Current visual style of a letter
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterStyle {
    /// Index into the glyph's sprite set
    pub style: usize,
    /// Index into the letter colour palette
    pub color: usize,
}

/// Material used by the letter's sprite child
#[derive(Component, Clone, Debug)]
pub struct LetterMaterial(pub Handle<StandardMaterial>);

/// Marker for the child entity that renders a letter's sprite
#[derive(Component)]
pub struct LetterSprite;

/// Last sleep state observed for a letter's body.
///
/// Compared against the physics engine's `Sleeping` flag every tick to derive
/// `DormancyChanged` notifications.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dormancy {
    pub dormant: bool,
}

/// Which edge of the viewport a wall sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::Top,
        WallSide::Right,
        WallSide::Bottom,
        WallSide::Left,
    ];
}

/// Static collider hugging one viewport edge
#[derive(Component, Clone, Copy, Debug)]
pub struct Wall(pub WallSide);

/// Sphere spawned where a letter struck a wall
#[derive(Component, Clone, Copy, Debug)]
pub struct ImpactMarker {
    /// Elapsed time (seconds) at which the marker is despawned
    pub expires_at: f64,
}

/// Marker component for the scene camera
#[derive(Component)]
pub struct SceneCamera;

/// Marker for the controls panel shown while the user is in control
#[derive(Component)]
pub struct ControlsHint;

/// Marker for the "press U" hint
#[derive(Component)]
pub struct UiTip;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_glyph_is_lowercased() {
        assert_eq!(Letter::new('P').glyph, 'p');
        assert_eq!(Letter::new('x').glyph, 'x');
    }
}

//! Scene reset
//!
//! The single recovery path: every letter goes back to its spawn point with
//! no motion and identity rotation, and styles are reshuffled.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::scene::types::*;

use super::setup::letter_half_extents;

/// Put one letter back where it spawned, at rest.
///
/// A spawn point the viewport no longer covers (the window shrank) is pulled
/// back inside, otherwise every reset would be followed by another.
pub fn reset_letter(
    spawn: &SpawnPoint,
    bounds: &ViewportBounds,
    transform: &mut Transform,
    velocity: &mut Velocity,
) {
    transform.translation = bounds.clamp_inside(spawn.0, letter_half_extents(true).truncate());
    transform.rotation = Quat::IDENTITY;
    *velocity = Velocity::zero();
}

/// Perform at most one reset per frame, however many were requested
pub fn apply_scene_resets(
    mut resets: MessageReader<ResetScene>,
    bounds: Res<ViewportBounds>,
    mut stats: ResMut<SceneStats>,
    mut rng: ResMut<SceneRng>,
    palette: Res<StylePalette>,
    mut letters: Query<
        (&SpawnPoint, &mut Transform, &mut Velocity, &mut LetterStyle),
        With<Letter>,
    >,
) {
    let causes: Vec<ResetCause> = resets.read().map(|r| r.cause).collect();
    let Some(cause) = causes.first() else {
        return;
    };

    let mut count = 0;
    for (spawn, mut transform, mut velocity, mut style) in letters.iter_mut() {
        reset_letter(spawn, &bounds, &mut transform, &mut velocity);
        *style = palette.random_style(&mut rng.0);
        count += 1;
    }

    stats.resets += 1;
    info!(
        "Scene reset ({:?}{}), {} letters back at spawn",
        cause,
        if causes.len() > 1 { ", merged" } else { "" },
        count
    );
}

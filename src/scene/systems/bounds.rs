//! Viewport bounds, walls and drift recovery

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_rapier3d::prelude::*;

use crate::scene::types::*;

/// Bounds of the scene camera for the given window
pub fn window_bounds(window: &Window, pixels_per_unit: f32, center: Vec2) -> Option<ViewportBounds> {
    ViewportBounds::for_orthographic(
        Vec2::new(window.width(), window.height()),
        pixels_per_unit,
        center,
    )
}

/// Recompute the viewport bounds after the window is resized
pub fn recompute_viewport_bounds(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<&Transform, With<SceneCamera>>,
    config: Res<SceneConfig>,
    mut bounds: ResMut<ViewportBounds>,
) {
    if resized.read().last().is_none() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let center = camera
        .single()
        .map(|t| t.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    // A minimised window keeps the last usable bounds.
    let Some(new_bounds) = window_bounds(window, config.pixels_per_unit, center) else {
        return;
    };
    if *bounds != new_bounds {
        *bounds = new_bounds;
        info!(
            "Viewport bounds now x: {:.2}..{:.2}, y: {:.2}..{:.2}",
            new_bounds.min.x, new_bounds.max.x, new_bounds.min.y, new_bounds.max.y
        );
    }
}

/// Request a reset as soon as any letter has left the viewport
pub fn monitor_bounds(
    bounds: Res<ViewportBounds>,
    letters: Query<(&Letter, &Transform)>,
    mut resets: MessageWriter<ResetScene>,
) {
    let escaped = letters
        .iter()
        .find(|(_, transform)| !bounds.contains(transform.translation.truncate()));

    if let Some((letter, transform)) = escaped {
        debug!(
            "Letter '{}' left the viewport at ({:.2}, {:.2})",
            letter.glyph, transform.translation.x, transform.translation.y
        );
        resets.write(ResetScene {
            cause: ResetCause::OutOfBounds,
        });
    }
}

/// Spawn one invisible static wall on a viewport edge
pub fn spawn_wall(commands: &mut Commands, bounds: &ViewportBounds, side: WallSide, thickness: f32) {
    let (position, half) = bounds.wall_placement(side, thickness);
    commands.spawn((
        Transform::from_translation(position),
        RigidBody::Fixed,
        Collider::cuboid(half.x, half.y, half.z),
        ActiveEvents::COLLISION_EVENTS,
        Wall(side),
    ));
}

/// Keep the walls on the viewport edges when the bounds change
pub fn fit_walls_to_bounds(
    mut commands: Commands,
    bounds: Res<ViewportBounds>,
    config: Res<SceneConfig>,
    mut walls: Query<(Entity, &Wall, &mut Transform)>,
) {
    if !bounds.is_changed() {
        return;
    }
    for (entity, wall, mut transform) in walls.iter_mut() {
        let (position, half) = bounds.wall_placement(wall.0, config.wall_thickness);
        transform.translation = position;
        commands
            .entity(entity)
            .insert(Collider::cuboid(half.x, half.y, half.z));
    }
}

//! Earthquakes and gravity
//!
//! Impulses go through rapier's `ExternalImpulse`; gravity is pushed into
//! the `RapierConfiguration` whenever the simulation parameters change.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::scene::types::*;

/// Random x/y impulse with each axis in `[-force, force]`
pub fn earthquake_impulse(force: f32, rng: &mut impl Rng) -> Vec3 {
    if force <= 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(rng.gen_range(-force..=force), rng.gen_range(-force..=force), 0.0)
}

/// Gravity pointing at the cursor, in normalised device coordinates scaled by `limit`
pub fn pointer_gravity(cursor: Vec2, window_size: Vec2, limit: f32) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let ndc = Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y * 2.0 - 1.0),
    );
    ndc * limit
}

/// Shake every letter once per `Earthquake` message
pub fn apply_earthquakes(
    mut earthquakes: MessageReader<Earthquake>,
    params: Res<SimulationParameters>,
    mut rng: ResMut<SceneRng>,
    mut stats: ResMut<SceneStats>,
    mut letters: Query<&mut ExternalImpulse, With<Letter>>,
) {
    for quake in earthquakes.read() {
        for mut external in letters.iter_mut() {
            external.impulse += earthquake_impulse(params.earthquake_force, &mut rng.0);
        }
        stats.earthquakes += 1;
        debug!(
            "Earthquake ({:?}) with force {:.1}",
            quake.cause, params.earthquake_force
        );
    }
}

/// Steer gravity with the pointer while pointer gravity is on
pub fn follow_pointer_gravity(
    mut moved: MessageReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut params: ResMut<SimulationParameters>,
) {
    let Some(position) = moved.read().last().map(|m| m.position) else {
        return;
    };
    if !params.mouse_gravity {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };

    let limit = params.gravity_limit;
    params.gravity = pointer_gravity(position, Vec2::new(window.width(), window.height()), limit);
}

/// Mirror `SimulationParameters::gravity` into the physics world
pub fn sync_world_gravity(
    params: Res<SimulationParameters>,
    mut configs: Query<&mut RapierConfiguration>,
) {
    if !params.is_changed() {
        return;
    }
    let gravity = params.gravity.extend(0.0);
    for mut config in configs.iter_mut() {
        if config.gravity != gravity {
            config.gravity = gravity;
        }
    }
}

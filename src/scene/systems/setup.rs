//! Scene setup system
//!
//! Spawns the camera, walls and letters, loads the sprite textures and picks
//! the background colour and starting gravity.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::scene::chaos::random_gravity;
use crate::scene::types::*;

use super::bounds::{spawn_wall, window_bounds};
use super::ui::spawn_scene_ui;

/// Mesh shared by every letter sprite
#[derive(Resource, Clone)]
pub struct LetterAssets {
    pub quad: Handle<Mesh>,
}

/// Collider half-extents of a letter body
pub fn letter_half_extents(emphasised: bool) -> Vec3 {
    if emphasised {
        Vec3::new(0.1, 0.2, 0.1)
    } else {
        Vec3::new(0.1, 0.15, 0.1)
    }
}

/// Spawn one tracked letter at `x` and return its entity.
///
/// The parent carries the rigid body; the sprite is a scaled child so the
/// collider keeps its own size. Positions outside `bounds` are pulled inside
/// so the spawn point is always a valid reset target.
#[allow(clippy::too_many_arguments)]
pub fn spawn_letter(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    letter_assets: &LetterAssets,
    textures: &LetterTextures,
    palette: &StylePalette,
    config: &SceneConfig,
    bounds: &ViewportBounds,
    rng: &mut impl Rng,
    glyph: char,
    x: f32,
) -> Entity {
    let letter = Letter::new(glyph);
    let emphasised = config.is_emphasised(glyph);
    let (scale, y) = if emphasised {
        (config.emphasised_scale, config.emphasised_y_offset)
    } else {
        (config.letter_scale, 0.0)
    };
    let half = letter_half_extents(emphasised);
    let position = bounds.clamp_inside(Vec3::new(x, y, 0.0), half.truncate());

    let style = palette.random_style(rng);
    let material = materials.add(StandardMaterial {
        base_color: palette.color(style.color),
        base_color_texture: textures.get(letter.glyph, style.style),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });
    let mass = rng.gen_range(config.min_mass..=config.max_mass.max(config.min_mass)) as f32;

    commands
        .spawn((
            (
                Transform::from_translation(position),
                Visibility::default(),
                RigidBody::Dynamic,
                Collider::cuboid(half.x, half.y, half.z),
                ColliderMassProperties::Mass(mass),
                Velocity::zero(),
                ExternalImpulse::default(),
                Damping {
                    linear_damping: 0.0,
                    angular_damping: config.angular_damping,
                },
                Restitution::coefficient(config.restitution),
                Friction::coefficient(config.friction),
                LockedAxes::TRANSLATION_LOCKED_Z
                    | LockedAxes::ROTATION_LOCKED_X
                    | LockedAxes::ROTATION_LOCKED_Y,
                Sleeping {
                    normalized_linear_threshold: config.sleep_linear_threshold,
                    angular_threshold: config.sleep_angular_threshold,
                    sleeping: false,
                },
            ),
            (
                letter,
                SpawnPoint(position),
                style,
                LetterMaterial(material.clone()),
                Dormancy::default(),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(letter_assets.quad.clone()),
                MeshMaterial3d(material),
                Transform::from_scale(Vec3::splat(scale)),
                LetterSprite,
            ));
        })
        .id()
}

/// Main setup system - initializes the whole scene
#[allow(clippy::too_many_arguments)]
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    palette: Res<StylePalette>,
    mut params: ResMut<SimulationParameters>,
    mut rng: ResMut<SceneRng>,
    mut cursor: ResMut<SpawnCursor>,
    mut bounds: ResMut<ViewportBounds>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // Orthographic camera with a fixed pixel density: the visible area grows
    // with the window instead of stretching the letters.
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            scale: 1.0 / config.pixels_per_unit,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        SceneCamera,
    ));

    commands.insert_resource(ClearColor(palette.random_background(&mut rng.0)));

    if let Ok(window) = windows.single() {
        if let Some(window_bounds) = window_bounds(window, config.pixels_per_unit, Vec2::ZERO) {
            *bounds = window_bounds;
        }
    }
    for side in WallSide::ALL {
        spawn_wall(&mut commands, &bounds, side, config.wall_thickness);
    }

    let mut textures = LetterTextures::default();
    for glyph in config.sprite_glyphs.chars().map(|c| c.to_ascii_lowercase()) {
        if textures.sprites.contains_key(&glyph) {
            continue;
        }
        let set = (0..config.style_count)
            .map(|style| {
                asset_server.load(LetterTextures::sprite_path(&config.sprite_dir, glyph, style))
            })
            .collect();
        textures.sprites.insert(glyph, set);
    }

    let letter_assets = LetterAssets {
        quad: meshes.add(Rectangle::new(1.0, 1.0)),
    };

    let mut spawned = 0;
    for glyph in config.glyphs() {
        let x = cursor.next_x(&config.spawn_x);
        spawn_letter(
            &mut commands,
            &mut materials,
            &letter_assets,
            &textures,
            &palette,
            &config,
            &bounds,
            &mut rng.0,
            glyph,
            x,
        );
        spawned += 1;
    }

    params.gravity = random_gravity(&mut rng.0);

    spawn_scene_ui(&mut commands, params.user_control);

    info!(
        "Scene ready: {} letters, gravity ({:.1}, {:.1}), bounds x: {:.2}..{:.2}, y: {:.2}..{:.2}",
        spawned,
        params.gravity.x,
        params.gravity.y,
        bounds.min.x,
        bounds.max.x,
        bounds.min.y,
        bounds.max.y
    );

    commands.insert_resource(textures);
    commands.insert_resource(letter_assets);
}

/// Spawn letters typed while direct text entry is on
#[allow(clippy::too_many_arguments)]
pub fn spawn_typed_letters(
    mut commands: Commands,
    mut spawns: MessageReader<SpawnLetter>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    letter_assets: Option<Res<LetterAssets>>,
    textures: Res<LetterTextures>,
    palette: Res<StylePalette>,
    config: Res<SceneConfig>,
    bounds: Res<ViewportBounds>,
    mut rng: ResMut<SceneRng>,
    mut cursor: ResMut<SpawnCursor>,
) {
    let Some(letter_assets) = letter_assets else {
        spawns.clear();
        return;
    };
    for SpawnLetter(glyph) in spawns.read() {
        let x = cursor.next_x(&config.spawn_x);
        spawn_letter(
            &mut commands,
            &mut materials,
            &letter_assets,
            &textures,
            &palette,
            &config,
            &bounds,
            &mut rng.0,
            *glyph,
            x,
        );
        info!("Typed letter '{}' spawned at x = {:.1}", glyph, x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasised_letters_are_taller() {
        assert!(letter_half_extents(true).y > letter_half_extents(false).y);
        assert_eq!(letter_half_extents(false), Vec3::new(0.1, 0.15, 0.1));
    }
}

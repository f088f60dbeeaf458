//! Wall-impact feedback: markers where letters hit the walls and an
//! optional hit sound.

use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::scene::types::*;

#[derive(Resource, Clone)]
pub struct HitSound(pub Handle<AudioSource>);

pub fn init_hit_sound(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let sound = asset_server.load(config.hit_sound_path.clone());
    commands.insert_resource(HitSound(sound));
}

/// Radius of the marker left by an impact at `speed`
pub fn impact_marker_radius(speed: f32) -> f32 {
    speed.max(0.0) / 15.0
}

/// Colour of an impact marker: the letter's colour, or a random palette
/// colour when the body carries no letter style.
pub fn impact_color(style: Option<&LetterStyle>, palette: &StylePalette, rng: &mut impl Rng) -> Color {
    match style {
        Some(style) => palette.color(style.color),
        None => palette.random_color(rng),
    }
}

/// Where a body at `position` meets the wall on `side`: its position
/// projected onto that viewport edge.
pub fn wall_contact_point(side: WallSide, bounds: &ViewportBounds, position: Vec2) -> Vec3 {
    let point = match side {
        WallSide::Top => Vec2::new(position.x, bounds.max.y),
        WallSide::Bottom => Vec2::new(position.x, bounds.min.y),
        WallSide::Right => Vec2::new(bounds.max.x, position.y),
        WallSide::Left => Vec2::new(bounds.min.x, position.y),
    };
    point.clamp(bounds.min, bounds.max).extend(0.0)
}

/// React to bodies starting to touch a wall
#[allow(clippy::too_many_arguments)]
pub fn react_to_wall_hits(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<SceneConfig>,
    params: Res<SimulationParameters>,
    palette: Res<StylePalette>,
    bounds: Res<ViewportBounds>,
    hit_sound: Option<Res<HitSound>>,
    mut rng: ResMut<SceneRng>,
    mut collision_events: MessageReader<CollisionEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    walls: Query<&Wall>,
    bodies: Query<(&GlobalTransform, &Velocity, Option<&LetterStyle>)>,
) {
    if !params.collision_visualisation && !params.hit_sounds {
        collision_events.clear();
        return;
    }

    let now = time.elapsed_secs_f64();

    for ev in collision_events.read() {
        let CollisionEvent::Started(e1, e2, _flags) = *ev else {
            continue;
        };

        let (wall, body) = if let Ok(wall) = walls.get(e1) {
            (wall, e2)
        } else if let Ok(wall) = walls.get(e2) {
            (wall, e1)
        } else {
            continue;
        };

        let Ok((global_transform, velocity, style)) = bodies.get(body) else {
            continue;
        };
        let speed = velocity.linvel.length();
        let position = wall_contact_point(wall.0, &bounds, global_transform.translation().truncate());

        if params.collision_visualisation && speed > 0.0 {
            let color = impact_color(style, &palette, &mut rng.0);
            commands.spawn((
                Mesh3d(meshes.add(Sphere::new(impact_marker_radius(speed)))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color,
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(position),
                ImpactMarker {
                    expires_at: now + config.impact_marker_lifetime_secs as f64,
                },
            ));
        }

        if params.hit_sounds && speed > config.hit_sound_threshold {
            if let Some(sound) = &hit_sound {
                let volume: f32 = rng.0.gen_range(0.0..1.0);
                commands.spawn((
                    AudioPlayer(sound.0.clone()),
                    PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
                ));
            }
        }
    }
}

/// Despawn impact markers whose lifetime ran out
pub fn expire_impact_markers(
    mut commands: Commands,
    time: Res<Time>,
    markers: Query<(Entity, &ImpactMarker)>,
) {
    let now = time.elapsed_secs_f64();
    for (entity, marker) in markers.iter() {
        if now >= marker.expires_at {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_marker_radius_scales_with_speed() {
        assert_eq!(impact_marker_radius(0.0), 0.0);
        assert!((impact_marker_radius(3.0) - 0.2).abs() < 1e-6);
        assert_eq!(impact_marker_radius(-1.0), 0.0);
    }

    #[test]
    fn test_contact_point_lies_on_the_hit_edge() {
        let bounds = ViewportBounds::default();
        let letter = Vec2::new(0.93, -0.4);

        assert_eq!(
            wall_contact_point(WallSide::Right, &bounds, letter),
            Vec3::new(1.0, -0.4, 0.0)
        );
        assert_eq!(
            wall_contact_point(WallSide::Bottom, &bounds, letter),
            Vec3::new(0.93, -1.0, 0.0)
        );
        assert_eq!(
            wall_contact_point(WallSide::Left, &bounds, Vec2::new(-0.9, 1.3)),
            Vec3::new(-1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_impact_color_prefers_letter_colour() {
        let palette = StylePalette::from_config(&SceneConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let style = LetterStyle { style: 0, color: 3 };
        assert_eq!(impact_color(Some(&style), &palette, &mut rng), palette.color(3));

        let fallback = impact_color(None, &palette, &mut rng);
        assert!(palette.colors.contains(&fallback));
    }
}

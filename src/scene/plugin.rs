use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::scene::chaos::*;
use crate::scene::systems::*;
use crate::scene::types::*;

/// Wires the letter scene into an app.
///
/// Uses the `SceneConfig` already inserted into the app, or the default one.
/// Expects `DefaultPlugins` and the Rapier physics plugin to be added by the
/// caller.
pub struct LetterScenePlugin;

impl Plugin for LetterScenePlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SceneConfig>()
            .cloned()
            .unwrap_or_default();

        let palette = StylePalette::from_config(&config).unwrap_or_else(|err| {
            warn!("Invalid palette in scene config ({}), using defaults", err);
            StylePalette::from_config(&SceneConfig::default()).unwrap_or_default()
        });

        app.insert_resource(SimulationParameters::from_config(&config))
            .insert_resource(ChaosSchedule::from_config(&config))
            .insert_resource(SceneRng::new(config.seed))
            .insert_resource(palette)
            .insert_resource(config)
            .init_resource::<ViewportBounds>()
            .init_resource::<SleepCounter>()
            .init_resource::<SceneStats>()
            .init_resource::<SpawnCursor>()
            .init_resource::<UiTipState>()
            .init_resource::<LetterTextures>()
            .add_message::<ResetScene>()
            .add_message::<Earthquake>()
            .add_message::<RandomizeStyles>()
            .add_message::<SetAllStyles>()
            .add_message::<DormancyChanged>()
            .add_message::<SpawnLetter>()
            .add_systems(Startup, (setup, init_hit_sound, start_chaos_chains).chain())
            .add_systems(
                Update,
                (
                    (handle_keyboard_input, spawn_typed_letters).chain(),
                    handle_mouse_buttons,
                    follow_pointer_gravity,
                    drive_chaos_chains,
                    recompute_viewport_bounds,
                    sync_controls_hint,
                    refresh_ui_tip,
                ),
            )
            // Everything that reads the simulated state runs once the physics
            // step has been written back to the transforms.
            .add_systems(
                PostUpdate,
                (
                    track_dormancy,
                    count_dormant_letters,
                    monitor_bounds,
                    trigger_earthquake_when_all_dormant,
                    apply_scene_resets,
                    apply_earthquakes,
                    randomize_letter_styles,
                    set_all_letter_styles,
                    sync_letter_materials,
                    react_to_wall_hits,
                    expire_impact_markers,
                    fit_walls_to_bounds,
                    sync_world_gravity,
                )
                    .chain()
                    .after(PhysicsSet::Writeback),
            );
    }
}

//! Timer chain integration tests

use std::time::Duration;

use bevy::prelude::*;

use letterquake::scene::*;

fn one_second_config() -> SceneConfig {
    let every_second = DelayRange::new(1, 1);
    SceneConfig {
        texture_delay: every_second,
        force_delay: every_second,
        gravity_delay: every_second,
        reset_delay: every_second,
        ..SceneConfig::default()
    }
}

fn chaos_app(config: SceneConfig) -> App {
    let mut app = App::new();
    app.add_message::<RandomizeStyles>()
        .add_message::<Earthquake>()
        .add_message::<ResetScene>()
        .insert_resource(Time::<()>::default())
        .insert_resource(SimulationParameters::from_config(&config))
        .insert_resource(ChaosSchedule::from_config(&config))
        .insert_resource(SceneRng::new(Some(11)))
        .insert_resource(StylePalette::from_config(&SceneConfig::default()).unwrap())
        .insert_resource(config)
        .init_resource::<SceneStats>()
        .init_resource::<ViewportBounds>()
        .add_systems(Startup, start_chaos_chains)
        .add_systems(
            Update,
            (
                drive_chaos_chains,
                randomize_letter_styles,
                apply_scene_resets,
                apply_earthquakes,
            )
                .chain(),
        );
    app
}

fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn stats(app: &App) -> SceneStats {
    *app.world().resource::<SceneStats>()
}

#[test]
fn test_chains_fire_when_due_and_rearm() {
    let mut app = chaos_app(one_second_config());
    app.update();
    assert_eq!(stats(&app), SceneStats::default());

    advance(&mut app, 0.5);
    assert_eq!(stats(&app).resets, 0);

    advance(&mut app, 0.5);
    assert_eq!(stats(&app).resets, 1);
    assert_eq!(stats(&app).earthquakes, 1);

    let schedule = app.world().resource::<ChaosSchedule>();
    for kind in ChainKind::ALL {
        assert!(schedule.chain(kind).is_active());
        assert_eq!(schedule.chain(kind).fires, 1);
    }

    advance(&mut app, 1.0);
    assert_eq!(stats(&app).resets, 2);
    assert_eq!(stats(&app).earthquakes, 2);
}

#[test]
fn test_force_and_gravity_chains_stay_in_range() {
    let config = one_second_config();
    let force = config.earthquake_force;
    let mut app = chaos_app(config);
    app.update();

    for _ in 0..20 {
        advance(&mut app, 1.0);
        let params = app.world().resource::<SimulationParameters>();
        assert!(params.earthquake_force >= force.min && params.earthquake_force <= force.max);
        assert!(params.gravity.x.abs() <= 1.0 && params.gravity.y.abs() <= 1.0);
    }
}

#[test]
fn test_user_control_at_startup_keeps_chains_idle() {
    let config = SceneConfig {
        start_in_user_control: true,
        ..one_second_config()
    };
    let mut app = chaos_app(config);
    app.update();
    advance(&mut app, 5.0);

    assert_eq!(stats(&app), SceneStats::default());
    assert!(app.world().resource::<ChaosSchedule>().all_stopped());
}

#[test]
fn test_engaging_user_control_lets_pending_fires_happen_once() {
    let mut app = chaos_app(one_second_config());
    app.update();
    advance(&mut app, 0.5);

    {
        let world = app.world_mut();
        let now = world.resource::<Time>().elapsed_secs_f64();
        world.resource_scope(|world, mut schedule: Mut<ChaosSchedule>| {
            world.resource_scope(|world, mut rng: Mut<SceneRng>| {
                let mut params = world.resource_mut::<SimulationParameters>();
                set_user_control(true, now, &mut params, &mut schedule, &mut rng.0);
            });
        });
    }

    advance(&mut app, 0.5);
    assert_eq!(stats(&app).resets, 1);
    assert!(app.world().resource::<ChaosSchedule>().all_stopped());

    advance(&mut app, 3.0);
    assert_eq!(stats(&app).resets, 1);
    assert_eq!(stats(&app).earthquakes, 1);
}

#[test]
fn test_texture_chain_restyles_letters() {
    let mut app = chaos_app(one_second_config());
    let letters: Vec<Entity> = "phoenix"
        .chars()
        .map(|glyph| {
            app.world_mut()
                .spawn((Letter::new(glyph), LetterStyle::default()))
                .id()
        })
        .collect();
    let styles = |app: &App| -> Vec<LetterStyle> {
        letters
            .iter()
            .map(|e| *app.world().get::<LetterStyle>(*e).unwrap())
            .collect()
    };

    app.update();
    advance(&mut app, 0.5);
    assert!(styles(&app).iter().all(|s| *s == LetterStyle::default()));

    advance(&mut app, 0.5);
    assert_eq!(
        app.world().resource::<ChaosSchedule>().chain(ChainKind::Texture).fires,
        1
    );
    assert!(styles(&app).iter().any(|s| *s != LetterStyle::default()));
}

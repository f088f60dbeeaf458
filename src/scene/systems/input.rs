//! Input handling systems
//!
//! `U` hands the scene to the user (and back). While the user is in control
//! the keyboard and mouse drive resets, earthquakes, styles and toggles.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::scene::chaos::{set_user_control, ChaosSchedule};
use crate::scene::types::*;

/// Letters that are never typed into the scene because they are controls
const CONTROL_GLYPHS: [char; 5] = ['u', 'c', 't', 'g', 's'];

pub fn is_control_glyph(c: char) -> bool {
    CONTROL_GLYPHS.contains(&c.to_ascii_lowercase())
}

/// Style selected by a digit key
pub fn digit_style(key: KeyCode) -> Option<usize> {
    let digit = match key {
        KeyCode::Digit0 | KeyCode::Numpad0 => 0,
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        KeyCode::Digit6 | KeyCode::Numpad6 => 6,
        KeyCode::Digit7 | KeyCode::Numpad7 => 7,
        KeyCode::Digit8 | KeyCode::Numpad8 => 8,
        KeyCode::Digit9 | KeyCode::Numpad9 => 9,
        _ => return None,
    };
    Some(digit)
}

/// Handle keyboard input for user control, styles, toggles and typing
#[allow(clippy::too_many_arguments)]
pub fn handle_keyboard_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut key_events: MessageReader<KeyboardInput>,
    config: Res<SceneConfig>,
    palette: Res<StylePalette>,
    mut params: ResMut<SimulationParameters>,
    mut schedule: ResMut<ChaosSchedule>,
    mut rng: ResMut<SceneRng>,
    mut tip: ResMut<UiTipState>,
    mut resets: MessageWriter<ResetScene>,
    mut set_styles: MessageWriter<SetAllStyles>,
    mut spawns: MessageWriter<SpawnLetter>,
) {
    let now = time.elapsed_secs_f64();

    if keyboard.get_just_pressed().next().is_some() && !params.user_control {
        tip.visible_until = Some(now + config.ui_tip_secs as f64);
    }

    if keyboard.just_pressed(KeyCode::KeyU) {
        let engage = !params.user_control;
        set_user_control(engage, now, &mut *params, &mut *schedule, &mut rng.0);
        tip.visible_until = None;
    }

    if params.user_control {
        if keyboard.just_pressed(KeyCode::Space) {
            resets.write(ResetScene {
                cause: ResetCause::User,
            });
        }
        if keyboard.just_pressed(KeyCode::ArrowRight) {
            let style = params.step_style(true, palette.style_count);
            set_styles.write(SetAllStyles(style));
        }
        if keyboard.just_pressed(KeyCode::ArrowLeft) {
            let style = params.step_style(false, palette.style_count);
            set_styles.write(SetAllStyles(style));
        }
        if keyboard.just_pressed(KeyCode::KeyC) {
            params.collision_visualisation = !params.collision_visualisation;
            info!("Collision visualisation: {}", params.collision_visualisation);
        }
        if keyboard.just_pressed(KeyCode::KeyT) {
            params.type_input = !params.type_input;
            info!("Type input: {}", params.type_input);
        }
        if keyboard.just_pressed(KeyCode::KeyG) {
            params.mouse_gravity = !params.mouse_gravity;
            info!("Pointer gravity: {}", params.mouse_gravity);
        }
        if keyboard.just_pressed(KeyCode::KeyS) {
            params.hit_sounds = !params.hit_sounds;
            info!("Hit sounds: {}", params.hit_sounds);
        }
    }

    // Digits pick a style in any mode.
    if let Some(style) = keyboard.get_just_pressed().find_map(|key| digit_style(*key)) {
        set_styles.write(SetAllStyles(style));
    }

    if !params.type_input {
        key_events.clear();
        return;
    }
    for event in key_events.read() {
        if event.state != ButtonState::Pressed || event.repeat {
            continue;
        }
        let Key::Character(text) = &event.logical_key else {
            continue;
        };
        for c in text.chars().filter(|c| c.is_alphabetic() && !is_control_glyph(*c)) {
            spawns.write(SpawnLetter(c));
        }
    }
}

/// Left click resets, right click shakes (user control only)
pub fn handle_mouse_buttons(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    config: Res<SceneConfig>,
    params: Res<SimulationParameters>,
    mut tip: ResMut<UiTipState>,
    mut resets: MessageWriter<ResetScene>,
    mut earthquakes: MessageWriter<Earthquake>,
) {
    let left = mouse.just_pressed(MouseButton::Left);
    let right = mouse.just_pressed(MouseButton::Right);
    if !left && !right {
        return;
    }

    if !params.user_control {
        tip.visible_until = Some(time.elapsed_secs_f64() + config.ui_tip_secs as f64);
        return;
    }

    if left {
        resets.write(ResetScene {
            cause: ResetCause::User,
        });
    }
    if right {
        earthquakes.write(Earthquake {
            cause: EarthquakeCause::User,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_style() {
        assert_eq!(digit_style(KeyCode::Digit0), Some(0));
        assert_eq!(digit_style(KeyCode::Numpad7), Some(7));
        assert_eq!(digit_style(KeyCode::KeyA), None);
    }

    #[test]
    fn test_control_glyphs_are_not_typed() {
        assert!(is_control_glyph('U'));
        assert!(is_control_glyph('g'));
        assert!(!is_control_glyph('p'));
    }
}

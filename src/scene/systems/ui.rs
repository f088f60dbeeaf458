//! On-screen hints: the controls panel and the "press U" tip

use bevy::prelude::*;

use crate::scene::types::*;

const CONTROLS_TEXT: &str = "U  release control\n\
SPACE / left click  reset\n\
right click  earthquake\n\
LEFT / RIGHT / 0-9  letter style\n\
C  collision markers   G  pointer gravity\n\
T  type letters   S  hit sounds";

pub fn spawn_scene_ui(commands: &mut Commands, user_control: bool) {
    commands.spawn((
        Text::new(CONTROLS_TEXT),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.1, 0.1, 0.1, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
        if user_control {
            Visibility::Visible
        } else {
            Visibility::Hidden
        },
        ControlsHint,
    ));

    commands.spawn((
        Text::new("Press U to take control"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(0.1, 0.1, 0.1, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
        UiTip,
    ));
}

/// Show the controls panel only while the user is in control
pub fn sync_controls_hint(
    params: Res<SimulationParameters>,
    mut hints: Query<&mut Visibility, With<ControlsHint>>,
) {
    if !params.is_changed() {
        return;
    }
    for mut visibility in hints.iter_mut() {
        *visibility = if params.user_control {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Show the tip until its deadline passes
pub fn refresh_ui_tip(
    time: Res<Time>,
    mut tip: ResMut<UiTipState>,
    mut tips: Query<&mut Visibility, With<UiTip>>,
) {
    let now = time.elapsed_secs_f64();
    let until = tip.visible_until;
    let visible = match until {
        Some(until) if now < until => true,
        Some(_) => {
            tip.visible_until = None;
            false
        }
        None => false,
    };
    let target = if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut visibility in tips.iter_mut() {
        if *visibility != target {
            *visibility = target;
        }
    }
}

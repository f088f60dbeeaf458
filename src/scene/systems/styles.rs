//! Letter styles and materials

use bevy::prelude::*;

use crate::scene::types::*;

/// Give every letter an independent random style and colour
pub fn randomize_letter_styles(
    mut requests: MessageReader<RandomizeStyles>,
    palette: Res<StylePalette>,
    mut rng: ResMut<SceneRng>,
    mut letters: Query<&mut LetterStyle, With<Letter>>,
) {
    if requests.read().count() == 0 {
        return;
    }
    for mut style in letters.iter_mut() {
        *style = palette.random_style(&mut rng.0);
    }
    debug!("Letter styles randomised");
}

/// Put every letter in the most recently requested style
pub fn set_all_letter_styles(
    mut requests: MessageReader<SetAllStyles>,
    palette: Res<StylePalette>,
    mut letters: Query<&mut LetterStyle, With<Letter>>,
) {
    let Some(SetAllStyles(requested)) = requests.read().last().copied() else {
        return;
    };
    let style = requested % palette.style_count.max(1);
    for mut letter_style in letters.iter_mut() {
        letter_style.style = style;
    }
    debug!("All letters set to style {}", style);
}

/// Push changed styles into the letters' materials
pub fn sync_letter_materials(
    textures: Res<LetterTextures>,
    palette: Res<StylePalette>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    letters: Query<(&Letter, &LetterStyle, &LetterMaterial), Changed<LetterStyle>>,
) {
    for (letter, style, material) in letters.iter() {
        let Some(mat) = materials.get_mut(&material.0) else {
            continue;
        };
        mat.base_color = palette.color(style.color);
        mat.base_color_texture = textures.get(letter.glyph, style.style);
    }
}

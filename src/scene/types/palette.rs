//! Colours and sprite textures used to dress the letters

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use super::config::SceneConfig;
use super::letter::LetterStyle;

/// Parsed colour palettes plus the number of sprite styles per glyph
#[derive(Resource, Clone, Debug)]
pub struct StylePalette {
    pub colors: Vec<Color>,
    pub backgrounds: Vec<Color>,
    pub style_count: usize,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            colors: vec![Color::srgb(0.14, 0.37, 0.12)],
            backgrounds: vec![Color::srgb(0.75, 0.70, 0.69)],
            style_count: 1,
        }
    }
}

fn parse_css_color(s: &str) -> Result<Color, String> {
    let c = csscolorparser::parse(s).map_err(|e| format!("Invalid colour '{}': {}", s, e))?;
    Ok(Color::srgba(c.r as f32, c.g as f32, c.b as f32, c.a as f32))
}

impl StylePalette {
    pub fn from_config(config: &SceneConfig) -> Result<Self, String> {
        let colors = config
            .palette
            .iter()
            .map(|s| parse_css_color(s))
            .collect::<Result<Vec<_>, _>>()?;
        let backgrounds = config
            .backgrounds
            .iter()
            .map(|s| parse_css_color(s))
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err("palette must contain at least one colour".to_string());
        }
        if backgrounds.is_empty() {
            return Err("backgrounds must contain at least one colour".to_string());
        }

        Ok(Self {
            colors,
            backgrounds,
            style_count: config.style_count.max(1),
        })
    }

    /// Independently drawn style and colour
    pub fn random_style(&self, rng: &mut impl Rng) -> LetterStyle {
        LetterStyle {
            style: rng.gen_range(0..self.style_count.max(1)),
            color: rng.gen_range(0..self.colors.len().max(1)),
        }
    }

    pub fn random_color(&self, rng: &mut impl Rng) -> Color {
        self.color(rng.gen_range(0..self.colors.len().max(1)))
    }

    pub fn random_background(&self, rng: &mut impl Rng) -> Color {
        let index = rng.gen_range(0..self.backgrounds.len().max(1));
        self.backgrounds.get(index).copied().unwrap_or(Color::WHITE)
    }

    /// Palette colour at `index` (wrapping)
    pub fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::WHITE;
        }
        self.colors[index % self.colors.len()]
    }
}

/// Sprite image handles per glyph, indexed by style
#[derive(Resource, Clone, Debug, Default)]
pub struct LetterTextures {
    pub sprites: HashMap<char, Vec<Handle<Image>>>,
}

impl LetterTextures {
    /// Asset path of a glyph's sprite for one style
    pub fn sprite_path(sprite_dir: &str, glyph: char, style: usize) -> String {
        format!("{}/{}/{}.png", sprite_dir, glyph.to_ascii_lowercase(), style)
    }

    /// Sprite for `glyph` in `style`, `None` when the glyph has no sprite set
    pub fn get(&self, glyph: char, style: usize) -> Option<Handle<Image>> {
        let set = self.sprites.get(&glyph.to_ascii_lowercase())?;
        if set.is_empty() {
            return None;
        }
        set.get(style % set.len()).cloned()
    }
}

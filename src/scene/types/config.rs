//! Scene configuration and loading
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Files ending in `.ron` are read as RON, everything else as JSON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::palette::StylePalette;

/// Inclusive range of whole seconds a timer chain waits between fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_secs: u32,
    pub max_secs: u32,
}

impl DelayRange {
    pub const fn new(min_secs: u32, max_secs: u32) -> Self {
        Self { min_secs, max_secs }
    }
}

/// Inclusive range an earthquake's force is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Letters spawned at start-up, one tracked letter per character
    pub word: String,
    /// X positions cycled through when spawning letters
    pub spawn_x: Vec<f32>,
    /// Glyph drawn larger and slightly higher than the rest
    pub emphasised_glyph: Option<char>,
    pub letter_scale: f32,
    pub emphasised_scale: f32,
    pub emphasised_y_offset: f32,

    /// Number of sprite styles per glyph
    pub style_count: usize,
    /// Asset directory holding `<glyph>/<style>.png`
    pub sprite_dir: String,
    /// Glyphs that have a sprite set under `sprite_dir`
    pub sprite_glyphs: String,
    /// CSS colours letters are tinted with
    pub palette: Vec<String>,
    /// CSS colours the background is picked from
    pub backgrounds: Vec<String>,

    pub texture_delay: DelayRange,
    pub force_delay: DelayRange,
    pub gravity_delay: DelayRange,
    pub reset_delay: DelayRange,
    pub earthquake_force: ForceRange,
    pub gravity_limit: f32,

    /// Logical pixels per world unit of the orthographic camera
    pub pixels_per_unit: f32,
    pub wall_thickness: f32,

    pub min_mass: u32,
    pub max_mass: u32,
    pub restitution: f32,
    pub friction: f32,
    pub angular_damping: f32,
    pub sleep_linear_threshold: f32,
    pub sleep_angular_threshold: f32,

    /// Impact speed above which a hit sound plays
    pub hit_sound_threshold: f32,
    pub hit_sound_path: String,
    pub impact_marker_lifetime_secs: f32,
    /// How long the "press U" hint stays up
    pub ui_tip_secs: f32,

    pub start_in_user_control: bool,
    pub collision_visualisation: bool,
    pub type_input: bool,
    pub hit_sounds: bool,

    pub window_width: u32,
    pub window_height: u32,
    /// Seed for the scene's random source; random when absent
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            word: "phoenix".to_string(),
            spawn_x: vec![-1.0, -0.7, -0.4, -0.1, 0.2, 0.5, 0.8, 1.1, 1.4, 1.7, 2.0],
            emphasised_glyph: Some('p'),
            letter_scale: 0.3,
            emphasised_scale: 0.4,
            emphasised_y_offset: 0.05,
            style_count: 10,
            sprite_dir: "sprites".to_string(),
            sprite_glyphs: "phoenix".to_string(),
            palette: [
                "#354544", // grey green
                "#3C680F", // verdant green
                "#245F1F", // letter green
                "#201E5D", // dark purple
                "#5D2548", // strong purple
                "#773F86", // medium purple
                "#484677", // light purple
                "#C34B78", // strong pink
                "#1D5B66", // teal
                "#1F7DB3", // lighter blue
                "#6C462F", // brown
                "#E96D13", // orange
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            backgrounds: ["#BEB3B1", "#C3BBB0", "#CAC9C5"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            texture_delay: DelayRange::new(6, 15),
            force_delay: DelayRange::new(6, 15),
            gravity_delay: DelayRange::new(3, 10),
            reset_delay: DelayRange::new(6, 15),
            earthquake_force: ForceRange { min: 2.0, max: 5.0 },
            gravity_limit: 1.0,
            pixels_per_unit: 360.0,
            wall_thickness: 0.02,
            min_mass: 1,
            max_mass: 5,
            restitution: 0.7,
            friction: 0.1,
            angular_damping: 0.7,
            sleep_linear_threshold: 0.1,
            sleep_angular_threshold: 0.1,
            hit_sound_threshold: 1.5,
            hit_sound_path: "sounds/hit.mp3".to_string(),
            impact_marker_lifetime_secs: 4.0,
            ui_tip_secs: 10.0,
            start_in_user_control: false,
            collision_visualisation: false,
            type_input: false,
            hit_sounds: false,
            window_width: 1280,
            window_height: 720,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Load a config file and validate it
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;

        let is_ron = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ron"));

        let config = if is_ron {
            Self::from_ron_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| format!("Invalid JSON config: {}", e))
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, String> {
        ron::from_str(contents).map_err(|e| format!("Invalid RON config: {}", e))
    }

    /// Reject configurations the scene cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.word.chars().all(char::is_whitespace) {
            return Err("word must contain at least one letter".to_string());
        }
        if self.spawn_x.is_empty() {
            return Err("spawn_x must list at least one position".to_string());
        }
        if self.style_count == 0 {
            return Err("style_count must be at least 1".to_string());
        }
        for (name, range) in [
            ("texture_delay", self.texture_delay),
            ("force_delay", self.force_delay),
            ("gravity_delay", self.gravity_delay),
            ("reset_delay", self.reset_delay),
        ] {
            if range.min_secs > range.max_secs {
                return Err(format!(
                    "{}: min_secs ({}) is greater than max_secs ({})",
                    name, range.min_secs, range.max_secs
                ));
            }
        }
        if !(self.earthquake_force.min >= 0.0 && self.earthquake_force.min <= self.earthquake_force.max) {
            return Err(format!(
                "earthquake_force: invalid range {}..{}",
                self.earthquake_force.min, self.earthquake_force.max
            ));
        }
        if self.min_mass == 0 || self.min_mass > self.max_mass {
            return Err(format!("invalid mass range {}..{}", self.min_mass, self.max_mass));
        }
        if self.pixels_per_unit <= 0.0 {
            return Err("pixels_per_unit must be positive".to_string());
        }
        StylePalette::from_config(self).map(|_| ())
    }

    /// Letters of the word in spawn order, whitespace skipped
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.word.chars().filter(|c| !c.is_whitespace())
    }

    pub fn is_emphasised(&self, glyph: char) -> bool {
        self.emphasised_glyph
            .is_some_and(|e| e.eq_ignore_ascii_case(&glyph))
    }
}

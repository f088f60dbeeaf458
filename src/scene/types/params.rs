//! Process-wide simulation state

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::SceneConfig;

/// Mutable configuration/state bag shared by input handlers and the chaos chains
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Maximum per-axis impulse applied by an earthquake
    pub earthquake_force: f32,
    /// Scale applied to pointer-driven gravity
    pub gravity_limit: f32,
    /// Directional force of the physics world (x/y plane)
    pub gravity: Vec2,
    /// Spawn a marker wherever a letter hits a wall
    pub collision_visualisation: bool,
    /// Gravity follows the pointer
    pub mouse_gravity: bool,
    /// Typed letters spawn new tracked letters
    pub type_input: bool,
    /// Direct user control; the chaos chains are stopped while true
    pub user_control: bool,
    /// Play a hit sound on hard wall impacts
    pub hit_sounds: bool,
    /// Style applied by the arrow keys
    pub current_style: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl SimulationParameters {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            earthquake_force: config.earthquake_force.min,
            gravity_limit: config.gravity_limit,
            gravity: Vec2::ZERO,
            collision_visualisation: config.collision_visualisation,
            mouse_gravity: config.start_in_user_control,
            type_input: config.type_input,
            user_control: config.start_in_user_control,
            hit_sounds: config.hit_sounds,
            current_style: 0,
        }
    }

    /// Move the manual style cursor one step forward or back, wrapping in
    /// `[0, style_count)`, and return the new style.
    pub fn step_style(&mut self, forward: bool, style_count: usize) -> usize {
        if style_count == 0 {
            return 0;
        }
        self.current_style = if forward {
            (self.current_style + 1) % style_count
        } else if self.current_style == 0 {
            style_count - 1
        } else {
            self.current_style - 1
        };
        self.current_style
    }
}

/// The scene's single random source
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    /// Seeded when `seed` is given, otherwise seeded from the OS
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Totals of recovery and impulse actions performed this session
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub resets: u64,
    pub earthquakes: u64,
}

/// Cycles through the configured spawn x positions
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SpawnCursor {
    next: usize,
}

impl SpawnCursor {
    /// Next spawn x position, wrapping at the end of `positions`
    pub fn next_x(&mut self, positions: &[f32]) -> f32 {
        if positions.is_empty() {
            return 0.0;
        }
        let x = positions[self.next % positions.len()];
        self.next = (self.next + 1) % positions.len();
        x
    }
}

/// Visibility deadline of the "press U" hint
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct UiTipState {
    pub visible_until: Option<f64>,
}

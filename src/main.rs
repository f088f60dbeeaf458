use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;

use letterquake::scene::{LetterScenePlugin, SceneConfig};

/// Letter sprites in a physics box that keeps shaking itself up
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene configuration file (.json or .ron)
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for the random source (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Word to spell with the letters
    #[arg(short, long)]
    word: Option<String>,

    /// Start with the chaos timers stopped and the user in control
    #[arg(short, long)]
    user_control: bool,

    /// Show a marker where letters hit the walls
    #[arg(long)]
    collision_visualisation: bool,

    /// Spawn letters from typed keys
    #[arg(short, long)]
    type_input: bool,

    /// Play a sound on hard wall hits
    #[arg(long)]
    hit_sounds: bool,

    /// Initial window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    height: Option<u32>,
}

impl Args {
    /// Fold the command line overrides into the loaded configuration
    fn apply(&self, config: &mut SceneConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(word) = &self.word {
            config.word = word.clone();
        }
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        config.start_in_user_control |= self.user_control;
        config.collision_visualisation |= self.collision_visualisation;
        config.type_input |= self.type_input;
        config.hit_sounds |= self.hit_sounds;
    }
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SceneConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };
    args.apply(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Letterquake".to_string(),
                        resolution: (config.window_width, config.window_height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn,letterquake=debug".to_string(),
                    ..default()
                }),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .insert_resource(config)
        .add_plugins(LetterScenePlugin)
        .run();
}

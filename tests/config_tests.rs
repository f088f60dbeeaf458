//! Scene configuration file loading tests

use std::fs;
use std::path::PathBuf;

use letterquake::scene::{DelayRange, SceneConfig};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("letterquake-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_config() {
    let path = temp_config(
        "scene.json",
        r##"{
            "word": "quake",
            "spawn_x": [-0.5, 0.0, 0.5],
            "reset_delay": { "min_secs": 2, "max_secs": 4 },
            "backgrounds": ["#101010"],
            "seed": 99
        }"##,
    );

    let config = SceneConfig::load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.word, "quake");
    assert_eq!(config.spawn_x, vec![-0.5, 0.0, 0.5]);
    assert_eq!(config.reset_delay, DelayRange::new(2, 4));
    assert_eq!(config.backgrounds, vec!["#101010".to_string()]);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.texture_delay, SceneConfig::default().texture_delay);
}

#[test]
fn test_load_ron_config_by_extension() {
    let path = temp_config(
        "scene.ron",
        r#"(
            word: "rust",
            emphasised_glyph: None,
            earthquake_force: (min: 1.0, max: 3.0),
            hit_sounds: true,
        )"#,
    );

    let config = SceneConfig::load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.word, "rust");
    assert_eq!(config.emphasised_glyph, None);
    assert_eq!(config.earthquake_force.max, 3.0);
    assert!(config.hit_sounds);
}

#[test]
fn test_load_rejects_invalid_values() {
    let path = temp_config("bad-mass.json", r#"{ "min_mass": 6, "max_mass": 2 }"#);
    let result = SceneConfig::load_from_file(&path);
    fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert!(err.contains("mass"), "unexpected error: {err}");
}

#[test]
fn test_load_rejects_malformed_file() {
    let path = temp_config("broken.json", "{ word: ");
    let result = SceneConfig::load_from_file(&path);
    fs::remove_file(&path).ok();

    assert!(result.unwrap_err().starts_with("Invalid JSON config"));
}

#[test]
fn test_load_missing_file() {
    let err = SceneConfig::load_from_file("definitely/not/here.json").unwrap_err();
    assert!(err.starts_with("Failed to read config"));
}

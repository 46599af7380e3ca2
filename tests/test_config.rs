use std::path::{Path, PathBuf};

use arcade_shooter::config::*;
use arcade_shooter::error::GameError;

#[test]
fn defaults_are_valid() {
    let config = Config::default();
    config.validate().unwrap();
    assert_eq!(config.play_area.width, 800.0);
    assert_eq!(config.play_area.height, 600.0);
    assert_eq!(config.timing.fps, 60);
    assert!(config.rules.projectiles_destroy_enemies);
    assert!(config.rules.triple_shot_effect);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn empty_file_gives_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn partial_sections_fill_defaults() {
    let config = Config::from_toml_str(
        r#"
        [play_area]
        width = 1024.0

        [rules]
        projectiles_destroy_enemies = false

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();
    assert_eq!(config.play_area.width, 1024.0);
    assert_eq!(config.play_area.height, 600.0);
    assert!(!config.rules.projectiles_destroy_enemies);
    assert!(config.rules.triple_shot_effect);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.level.as_filter(), "debug");

    let rules = config.rules.to_rules();
    assert!(!rules.projectiles_destroy_enemies);
    assert!(rules.triple_shot_effect);
}

#[test]
fn serialized_defaults_parse_back() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
}

#[test]
fn non_positive_dimensions_rejected() {
    let err = Config::from_toml_str("[play_area]\nwidth = 0.0").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig { field: "play_area.width", .. }));

    let err = Config::from_toml_str("[play_area]\nheight = -5.0").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig { field: "play_area.height", .. }));
}

#[test]
fn fps_out_of_range_rejected() {
    for fps in [0, MAX_FPS + 1] {
        let err = Config::from_toml_str(&format!("[timing]\nfps = {fps}")).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { field: "timing.fps", .. }));
    }
}

#[test]
fn unknown_log_level_is_a_parse_error() {
    let err = Config::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
    assert!(matches!(err, GameError::ConfigParse { .. }));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(matches!(err, GameError::ConfigRead { .. }));
}

#[test]
fn from_file_reads_toml() {
    let path = std::env::temp_dir().join(format!("arcade_shooter_cfg_{}.toml", std::process::id()));
    std::fs::write(&path, "[timing]\nfps = 30\n[storage]\nhigh_score_file = \"/tmp/best\"").unwrap();
    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.timing.fps, 30);
    assert_eq!(config.storage.high_score_path(), PathBuf::from("/tmp/best"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn default_score_path_is_in_home() {
    let path = StorageConfig::default().high_score_path();
    assert_eq!(path.file_name().unwrap(), ".arcade_shooter_score");
}

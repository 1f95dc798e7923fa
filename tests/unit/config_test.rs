//! Unit tests for configuration loading and saving.

use fittrack::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use fittrack::tracker::GoalBadgePolicy;
use fittrack::ui::{Screen, Theme};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.ui.theme, Theme::Dark);
    assert_eq!(config.badges.goal_policy, GoalBadgePolicy::EveryToggle);
    assert_eq!(config.start_screen(), Screen::Home);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.ui.theme = Theme::Light;
    config.ui.font_scale = 1.25;
    config.ui.start_screen = "achievements".to_string();
    config.badges.goal_policy = GoalBadgePolicy::OncePerGoal;

    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.start_screen(), Screen::Achievements);
}

#[test]
fn test_written_file_uses_readable_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.badges.goal_policy = GoalBadgePolicy::OncePerGoal;
    save_config_to(&path, &config).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("theme = \"dark\""));
    assert!(content.contains("goal_policy = \"once_per_goal\""));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui\ntheme = ").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[badges]\ngoal_policy = \"sometimes\"\n").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_bad_font_scale_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    for (value, expected) in [("0.0", 0.5), ("-2.0", 0.5), ("40.0", 3.0), ("nan", 1.0), ("inf", 1.0)] {
        std::fs::write(&path, format!("[ui]\nfont_scale = {}\n", value)).unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.ui.zoom_factor(), expected, "font_scale = {}", value);
    }
}

#[test]
fn test_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    // A directory where the file should be
    assert!(matches!(
        load_config_from(dir.path()),
        Err(ConfigError::Io(_))
    ));
}

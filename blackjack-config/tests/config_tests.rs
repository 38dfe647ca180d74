use blackjack_config::{BlackjackPayout, Config, ConfigError, LogLevel, TableColour};
use tempfile::tempdir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.window_title, "Blackjack");
    assert_eq!(config.window_width, 600);
    assert_eq!(config.window_height, 500);
    assert_eq!(config.table_colour, TableColour::new(6, 120, 0));
    assert_eq!(config.starting_balance, 1000);
    assert_eq!(config.deck_count, 1);
    assert!(!config.dealer_hits_soft_17);
    assert_eq!(config.blackjack_payout, BlackjackPayout::ThreeToTwo);
    assert_eq!(config.log_level, LogLevel::Off);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_title("High Rollers")
        .with_dimensions(800, 700)
        .with_table_colour(TableColour::new(20, 20, 120))
        .with_deck_count(6);
    assert_eq!(config.window_title, "High Rollers");
    assert_eq!(config.window_width, 800);
    assert_eq!(config.window_height, 700);
    assert_eq!(config.table_colour, TableColour::new(20, 20, 120));
    assert_eq!(config.deck_count, 6);
}

#[test]
fn test_load_creates_default_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("nested").join("config.yaml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());
}

#[test]
fn test_save_and_load_preserves_values() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");

    let mut config = Config::new().with_table_colour(TableColour::new(120, 0, 40));
    config.dealer_hits_soft_17 = true;
    config.blackjack_payout = BlackjackPayout::SixToFive;
    config.log_level = LogLevel::Debug;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!temp.path().join("config.yaml.tmp").exists());
}

#[test]
fn test_partial_yaml_fills_in_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "deck_count: 4\nlog_level: info\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.deck_count, 4);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.window_title, "Blackjack");
    assert_eq!(config.table_colour, TableColour::DEFAULT);
}

#[test]
fn test_invalid_values_are_clamped_on_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(
        &path,
        "deck_count: 0\nwindow_width: 100\nwindow_height: 50\nstarting_balance: 0\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.deck_count, 1);
    assert_eq!(config.window_width, 600);
    assert_eq!(config.window_height, 500);
    assert_eq!(config.starting_balance, 1000);
}

#[test]
fn test_validate_reports_small_window() {
    let config = Config::new().with_dimensions(300, 200);
    match config.validate() {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("window_width")),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_corrupt_file_returns_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "not: valid: yaml: [[[").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

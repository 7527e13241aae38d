use std::path::Path;

use tradeup_ev::config::Config;
use tradeup_ev::RarityHierarchy;

#[test]
fn shipped_default_config_loads() {
    let config = Config::load_from(Path::new("config/default.toml")).unwrap();
    assert_eq!(config.rarity_hierarchy().unwrap(), RarityHierarchy::default());
    assert!((config.valuation.default_confidence_level - 0.95).abs() < f64::EPSILON);
    assert_eq!(config.confidence_table().unwrap().levels(), vec![0.95, 0.99]);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn custom_hierarchy_drives_upgrades() {
    let toml_str = r#"
[rarity]
hierarchy = ["Common", "Uncommon", "Rare"]

[logging]
level = "warn"
json = true
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    let hierarchy = config.rarity_hierarchy().unwrap();
    assert_eq!(hierarchy.upgrade("Uncommon").unwrap(), "Rare");
    assert!(hierarchy.upgrade("Restricted").is_err());
    assert!(config.logging.json);
}

#[test]
fn missing_file_reports_path() {
    let err = Config::load_from(Path::new("config/does-not-exist.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("does-not-exist.toml"));
}

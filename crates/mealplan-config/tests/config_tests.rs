use std::fs;

use mealplan_config::{Config, ConfigError, ConfigManager};
use mealplan_domain::PlanKind;
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(!cfg.discounts.location_rates.is_empty());
    assert!(cfg.discount_table().is_ok());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.default_plan_kind, PlanKind::DiningDollars);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.default_plan_kind = PlanKind::ALaCarte;
    cfg.discounts.flat_rate = 0.2;
    cfg.discounts
        .location_rates
        .insert("Food Truck".to_string(), 0.25);

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.default_plan_kind, PlanKind::ALaCarte);
    assert_eq!(loaded.discounts, cfg.discounts);
    let table = loaded.discount_table().expect("valid table");
    assert_eq!(table.rate_for("Food Truck"), 0.25);
    assert_eq!(table.flat_rate(), 0.2);
}

#[test]
fn partial_file_fills_discount_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"locale": "en-US", "currency": "USD"}"#).expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.discounts.flat_rate, 0.10);
    assert!(loaded.ui_color_enabled);
}

#[test]
fn out_of_range_rate_is_rejected_when_building_table() {
    let mut cfg = Config::default();
    cfg.discounts.flat_rate = 1.5;
    assert!(cfg.discount_table().is_err());
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write config");

    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use shapes2d::config::AppConfig;
use shapes2d::demo::default_steps;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("S2D_DEBUG__LOG_LEVEL", "trace");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.debug.log_level, "trace");
    std::env::remove_var("S2D_DEBUG__LOG_LEVEL");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_steps() {
    std::env::remove_var("S2D_DEBUG__LOG_LEVEL");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.demo.steps, default_steps());
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_env_override_remove_at_end() {
    std::env::set_var("S2D_DEMO__REMOVE_AT_END", "true");
    let config = AppConfig::load().unwrap();
    assert!(config.demo.remove_at_end);
    std::env::remove_var("S2D_DEMO__REMOVE_AT_END");
}

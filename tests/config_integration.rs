use coding_assistant::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("PCA_SERVER__HOST");
        env::remove_var("PCA_SERVER__PORT");
        env::remove_var("PCA_ASSETS__STATIC_DIR");
        env::remove_var("CONFIG_FILE");
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("STATIC_DIR");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["coding-assistant"]).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.assets.static_dir, "static");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("PCA_SERVER__PORT", "9090");
        env::set_var("PCA_ASSETS__STATIC_DIR", "public");
    }

    let config = AppConfig::load_from_args(["coding-assistant"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.assets.static_dir, "public");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");

    let config_content = r"
server:
  port: 7070
";
    fs::write(file.path(), config_content).expect("Failed to write temp config");

    let path = file.path().to_str().expect("utf-8 path");
    let config = AppConfig::load_from_args(["coding-assistant", "--config", path])
        .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    // Unset keys still come from defaults.
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("PCA_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["coding-assistant", "--port", "8080"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8080);

    clear_env_vars();
}

#[test]
#[serial]
fn test_static_dir_flag() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["coding-assistant", "--static-dir", "assets"])
        .expect("Failed to load config");
    assert_eq!(config.assets.static_dir, "assets");
}

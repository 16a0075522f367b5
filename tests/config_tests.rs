use std::fs;
use tempfile::tempdir;
use zabbix_rs::{Config, Error};

#[test]
fn test_config_from_valid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[api]
url = "https://zabbix.example.com/api_jsonrpc.php"
username = "Admin"
password = "zabbix"
basic_auth_user = "gateway"
basic_auth_password = "secret"
cache_dir = "/var/cache/zabbix-rs"
log_communication = true
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.api.url, "https://zabbix.example.com/api_jsonrpc.php");
    assert_eq!(config.api.username.as_deref(), Some("Admin"));
    assert_eq!(config.api.password.as_deref(), Some("zabbix"));
    assert_eq!(config.api.basic_auth_user.as_deref(), Some("gateway"));
    assert_eq!(config.api.basic_auth_password.as_deref(), Some("secret"));
    assert_eq!(config.api.cache_dir.as_deref(), Some("/var/cache/zabbix-rs"));
    assert!(config.api.log_communication);
    assert!(config.api.token.is_none());
}

#[test]
fn test_config_url_only_is_enough() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(
        &config_path,
        "[api]\nurl = \"https://zabbix.example.com/api_jsonrpc.php\"\n",
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert!(config.api.username.is_none());
    assert!(!config.api.log_communication);
}

#[test]
fn test_config_missing_file() {
    let dir = tempdir().unwrap();
    let result = Config::from_file(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_config_invalid_toml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[api\nurl = ").unwrap();

    let result = Config::from_file(&config_path);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_config_missing_url_is_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[api]\nusername = \"Admin\"\n").unwrap();

    let result = Config::from_file(&config_path);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

//! 설정 파일 생성/로드 테스트.
use std::fs;
use std::path::PathBuf;

use fuel_combustion_calculator::config::{load_or_create, Config, ConfigError};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "fuel_combustion_calculator_{}_{name}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir.join("config.toml")
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = scratch_path("create");
    let _ = fs::remove_file(&path);

    let cfg = load_or_create(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.contains("port = 8080"));
}

#[test]
fn saved_config_is_loaded_back() {
    let path = scratch_path("roundtrip");
    let mut cfg = Config::default();
    cfg.server.host = "127.0.0.1".into();
    cfg.server.port = 3030;
    cfg.log.filter = "debug".into();
    cfg.save_to(&path).expect("save");

    let loaded = load_or_create(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.socket_addr().expect("addr").to_string(), "127.0.0.1:3030");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = scratch_path("malformed");
    fs::write(&path, "[server\nport = ").expect("write");
    assert!(matches!(load_or_create(&path), Err(ConfigError::Serde(_))));
}

use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()` so env mutations do not race.
unsafe fn clear_app_env() {
    unsafe {
        std::env::remove_var(API_URL_VAR);
        std::env::remove_var(AWS_REGION_VAR);
        std::env::remove_var(BUCKET_NAME_VAR);
        std::env::remove_var(PORT_VAR);
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_guard();
    unsafe { clear_app_env() };

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.catalog.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.storage.region, DEFAULT_AWS_REGION);
    assert_eq!(cfg.storage.bucket_name, None);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_app_env();
        std::env::set_var(API_URL_VAR, "https://catalog.example.test/");
        std::env::set_var(AWS_REGION_VAR, "eu-west-1");
        std::env::set_var(BUCKET_NAME_VAR, "media-assets");
        std::env::set_var(PORT_VAR, "8088");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8088);
    assert_eq!(cfg.catalog.api_url, "https://catalog.example.test");
    assert_eq!(
        cfg.storage,
        StorageConfig { region: "eu-west-1".into(), bucket_name: Some("media-assets".into()) }
    );

    unsafe { clear_app_env() };
}

#[test]
fn from_env_treats_empty_values_as_unset() {
    let _guard = env_guard();
    unsafe {
        clear_app_env();
        std::env::set_var(API_URL_VAR, "");
        std::env::set_var(BUCKET_NAME_VAR, "  ");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.catalog.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.storage.bucket_name, None);

    unsafe { clear_app_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert!(parse_port(Some("70000")).is_err());
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

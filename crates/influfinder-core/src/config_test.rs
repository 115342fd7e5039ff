use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "INFLUFINDER_ENV"));
}

#[test]
fn build_app_config_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.yaml"));
    assert!(cfg.user_type.is_none());
}

#[test]
fn build_app_config_overrides() {
    let mut map = HashMap::new();
    map.insert("INFLUFINDER_ENV", "production");
    map.insert("INFLUFINDER_LOG_LEVEL", "debug");
    map.insert("INFLUFINDER_CATALOG_PATH", "/srv/catalog.yaml");
    map.insert("INFLUFINDER_USER_TYPE", "normal_user");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.catalog_path.to_str(), Some("/srv/catalog.yaml"));
    assert_eq!(cfg.user_type, Some(UserType::NormalUser));
}

#[test]
fn build_app_config_blank_user_type_is_none() {
    let mut map = HashMap::new();
    map.insert("INFLUFINDER_USER_TYPE", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.user_type.is_none());
}

#[test]
fn build_app_config_rejects_unknown_user_type() {
    let mut map = HashMap::new();
    map.insert("INFLUFINDER_USER_TYPE", "celebrity");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "INFLUFINDER_USER_TYPE"
        ),
        "expected InvalidEnvVar(INFLUFINDER_USER_TYPE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unknown_env() {
    let mut map = HashMap::new();
    map.insert("INFLUFINDER_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Test.to_string(), "test");
}

use super::{apply_env_overrides, load_settings, Settings, DEFAULT_LOOKUP_ENDPOINT};

use std::{collections::HashMap, fs, time::Duration};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_use_remote_source_with_deployed_endpoint() {
    let settings = Settings::default();
    assert!(!settings.stand_in_mode);
    assert_eq!(settings.lookup_endpoint, DEFAULT_LOOKUP_ENDPOINT);
    assert_eq!(settings.stand_in_delay_ms, 1500);

    let source = settings.source_config().expect("source config");
    assert!(!source.stand_in);
    assert_eq!(source.request_timeout, None);
}

#[test]
fn reads_partial_toml_file_over_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("loader.toml");
    fs::write(
        &path,
        "lookup_endpoint = \"https://lookup.example.com/exec\"\nstand_in_mode = true\n",
    )
    .expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.lookup_endpoint, "https://lookup.example.com/exec");
    assert!(settings.stand_in_mode);
    assert_eq!(settings.stand_in_delay_ms, 1500);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings(Some(&dir.path().join("absent.toml"))).expect_err("should fail");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("loader.toml");
    fs::write(&path, "stand_in_mode = \"maybe\"\n").expect("write config");

    let err = load_settings(Some(&path)).expect_err("should fail");
    assert!(err.to_string().contains("invalid config file"));
}

#[test]
fn env_overrides_replace_file_values() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("APP__LOOKUP_ENDPOINT", "http://127.0.0.1:9000/exec"),
            ("APP__STAND_IN_MODE", "yes"),
            ("APP__STAND_IN_DELAY_MS", "0"),
            ("APP__REQUEST_TIMEOUT_SECS", "15"),
        ]),
    );

    assert_eq!(settings.lookup_endpoint, "http://127.0.0.1:9000/exec");
    assert!(settings.stand_in_mode);
    let source = settings.source_config().expect("source config");
    assert_eq!(source.stand_in_delay, Duration::ZERO);
    assert_eq!(source.request_timeout, Some(Duration::from_secs(15)));
}

#[test]
fn unparseable_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("APP__STAND_IN_MODE", "sometimes"),
            ("APP__STAND_IN_DELAY_MS", "soon"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn invalid_endpoint_is_rejected_when_building_source() {
    let settings = Settings {
        lookup_endpoint: "not a url".into(),
        ..Settings::default()
    };
    assert!(settings.source_config().is_err());
}

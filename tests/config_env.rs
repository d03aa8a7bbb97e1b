#![allow(clippy::unwrap_used)]
//! Configuration loading from the real process environment.
//!
//! These tests mutate environment variables and therefore run serially.

use props_translate::config::{Config, ConfigError};
use serial_test::serial;

const VARS: &[&str] = &[
    "TRANSLATION_API_KEY",
    "TRANSLATION_API_URL",
    "DEEPL_TOKEN",
    "DEEPL_URL",
    "LANGUAGES",
    "SOURCE_LANG",
    "TRANSLATION_STORE",
    "CACHE_FAILED_TRANSLATIONS",
];

fn clear_env() {
    for name in VARS {
        // SAFETY: tests in this file are serialized
        unsafe { std::env::remove_var(name) };
    }
}

fn set(name: &str, value: &str) {
    // SAFETY: tests in this file are serialized
    unsafe { std::env::set_var(name, value) };
}

#[test]
#[serial]
fn test_from_env_with_all_variables() {
    clear_env();
    set("DEEPL_TOKEN", "token");
    set("DEEPL_URL", "https://api-free.deepl.com");
    set("LANGUAGES", "de,fr,it");
    set("SOURCE_LANG", "de");

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_key, "token");
    assert_eq!(config.target_languages(), vec!["fr", "it"]);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_fails_fast_on_first_missing_variable() {
    clear_env();
    set("LANGUAGES", "de,fr");
    set("SOURCE_LANG", "de");

    let err = Config::from_env().unwrap_err();

    assert_eq!(
        err,
        ConfigError::Missing {
            name: "TRANSLATION_API_KEY",
            alias: Some("DEEPL_TOKEN"),
        }
    );
    assert!(err.to_string().contains("Missing required configuration"));
    assert!(err.to_string().contains("DEEPL_TOKEN"));
    clear_env();
}

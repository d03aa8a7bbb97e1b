use std::path::PathBuf;

use thiserror::Error;

/// Default location of the translation store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "translation_store.txt";

/// Errors raised while building [`Config`] from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{}", missing_message(name, *alias))]
    Missing {
        name: &'static str,
        /// Older variable name accepted in place of `name`.
        alias: Option<&'static str>,
    },

    #[error("Invalid configuration value for '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable settings for one translation sweep.
///
/// Built once at startup and passed by reference to every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Credential for the translation provider.
    pub api_key: String,
    /// Base URL of the translation provider.
    pub api_url: String,
    /// Every language to produce, including the source language.
    pub languages: Vec<String>,
    /// Language code of the input files.
    pub source_lang: String,
    /// Path of the append-only translation store.
    pub store_path: PathBuf,
    /// Persist the source text as the "translation" when the provider fails.
    pub cache_failures: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get("TRANSLATION_API_KEY")
            .or_else(|| get("DEEPL_TOKEN"))
            .ok_or(ConfigError::Missing {
                name: "TRANSLATION_API_KEY",
                alias: Some("DEEPL_TOKEN"),
            })?;

        let api_url = get("TRANSLATION_API_URL")
            .or_else(|| get("DEEPL_URL"))
            .ok_or(ConfigError::Missing {
                name: "TRANSLATION_API_URL",
                alias: Some("DEEPL_URL"),
            })?;

        let languages = parse_languages(&get("LANGUAGES").ok_or(ConfigError::Missing {
            name: "LANGUAGES",
            alias: None,
        })?);
        if languages.is_empty() {
            return Err(ConfigError::Invalid {
                name: "LANGUAGES",
                reason: "expected a comma-separated list of language codes".to_string(),
            });
        }

        let source_lang = get("SOURCE_LANG")
            .map(|lang| lang.trim().to_string())
            .ok_or(ConfigError::Missing {
                name: "SOURCE_LANG",
                alias: None,
            })?;

        let store_path = get("TRANSLATION_STORE")
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        let cache_failures = match get("CACHE_FAILED_TRANSLATIONS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                name: "CACHE_FAILED_TRANSLATIONS",
                reason: format!("expected true or false, got '{raw}'"),
            })?,
            None => true,
        };

        Ok(Self {
            api_key,
            api_url,
            languages,
            source_lang,
            store_path,
            cache_failures,
        })
    }

    /// Languages to produce output for, in configured order, without the source language.
    pub fn target_languages(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::with_capacity(self.languages.len());
        for lang in &self.languages {
            if *lang != self.source_lang && !targets.contains(&lang.as_str()) {
                targets.push(lang);
            }
        }
        targets
    }
}

fn missing_message(name: &str, alias: Option<&str>) -> String {
    let variables = alias.map_or_else(
        || format!("'{name}'"),
        |alias| format!("'{name}' (or '{alias}')"),
    );
    format!(
        "Missing required configuration: {variables}\n\n\
         Please provide it via:\n  \
         - Environment variable: export {name}=\"...\"\n  \
         - A .env file in the working directory"
    )
}

fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

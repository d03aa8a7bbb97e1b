use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::{StoreError, StoreKey, StoreSnapshot, TranslationEntry, TranslationStore};
use crate::config::Config;
use crate::fs::atomic_write;
use crate::properties::{PropertyLine, parse_lines, target_path};
use crate::translation::Translator;

/// Counters for how values were resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Values served from the translation store.
    pub cache_hits: usize,
    /// Values sent to the translation provider.
    pub provider_calls: usize,
    /// Provider calls that failed and fell back to the source text.
    pub provider_failures: usize,
}

impl TranslationStats {
    pub const fn merge(&mut self, other: Self) {
        self.cache_hits += other.cache_hits;
        self.provider_calls += other.provider_calls;
        self.provider_failures += other.provider_failures;
    }
}

/// A value the provider could not translate; the source text was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFailure {
    pub key: String,
    pub text: String,
    pub error: String,
}

/// Result of translating one source file into one target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub target: PathBuf,
    pub stats: TranslationStats,
    /// Provider failures in file order. Reported by the caller.
    pub failures: Vec<ValueFailure>,
}

/// Translates a single property file into a sibling target-language file.
pub struct FileTranslator<'a, T> {
    config: &'a Config,
    translator: &'a T,
    store: TranslationStore,
}

impl<'a, T: Translator> FileTranslator<'a, T> {
    pub fn new(config: &'a Config, translator: &'a T) -> Self {
        Self {
            config,
            translator,
            store: TranslationStore::new(&config.store_path),
        }
    }

    /// Writes the `target_lang` version of `source` and returns where it went.
    ///
    /// The store is loaded once per call. Provider failures fall back to the
    /// source text; file system failures are returned.
    pub async fn translate_file(&self, source: &Path, target_lang: &str) -> Result<FileOutcome> {
        let contents = fs::read_to_string(source)
            .with_context(|| format!("Failed to read file: {}", source.display()))?;

        let mut snapshot = self.store.load()?;
        let mut stats = TranslationStats::default();
        let mut failures = Vec::new();
        let mut output = String::with_capacity(contents.len());

        for line in parse_lines(&contents) {
            let translated = match &line {
                PropertyLine::KeyValue { key, value, .. } => Some(
                    self.resolve(
                        &mut snapshot,
                        key.trim(),
                        value,
                        target_lang,
                        &mut stats,
                        &mut failures,
                    )
                    .await?,
                ),
                PropertyLine::CommentOrBlank(_) | PropertyLine::Malformed(_) => None,
            };
            line.render_into(translated.as_deref(), &mut output);
        }

        let target = target_path(source, &self.config.source_lang, target_lang);
        atomic_write(&target, &output)?;

        Ok(FileOutcome {
            target,
            stats,
            failures,
        })
    }

    async fn resolve(
        &self,
        snapshot: &mut StoreSnapshot,
        key: &str,
        value: &str,
        target_lang: &str,
        stats: &mut TranslationStats,
        failures: &mut Vec<ValueFailure>,
    ) -> Result<String> {
        let store_key = StoreKey::new(key, value, target_lang);
        if let Some(cached) = snapshot.get(&store_key) {
            stats.cache_hits += 1;
            return Ok(cached.to_string());
        }

        stats.provider_calls += 1;
        let translated = match self
            .translator
            .translate(value, &self.config.source_lang, target_lang)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                stats.provider_failures += 1;
                let error = format!("{e:#}");
                tracing::debug!(key, text = value, target_lang, %error, "Translation failed");
                failures.push(ValueFailure {
                    key: key.to_string(),
                    text: value.to_string(),
                    error,
                });
                if !self.config.cache_failures {
                    return Ok(value.to_string());
                }
                value.to_string()
            }
        };

        let entry = TranslationEntry {
            key: store_key,
            translated_text: translated,
        };
        self.persist(snapshot, &entry)?;

        Ok(entry.translated_text)
    }

    fn persist(&self, snapshot: &mut StoreSnapshot, entry: &TranslationEntry) -> Result<()> {
        match self.store.append(entry) {
            Ok(()) => {
                snapshot.insert_if_absent(entry.clone());
                Ok(())
            }
            Err(e) if e.downcast_ref::<StoreError>().is_some() => {
                // Unstorable, but repeats within this file still reuse it.
                tracing::debug!(key = %entry.key.key, error = %e, "Not caching translation");
                snapshot.insert_if_absent(entry.clone());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

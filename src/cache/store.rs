use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Field separator of the store file.
pub const DELIMITER: char = '|';

/// Exact-match lookup triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey {
    pub key: String,
    pub source_text: String,
    pub target_lang: String,
}

impl StoreKey {
    pub fn new(
        key: impl Into<String>,
        source_text: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            source_text: source_text.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// One persisted translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: StoreKey,
    pub translated_text: String,
}

impl TranslationEntry {
    fn to_record(&self) -> Result<String, StoreError> {
        let StoreKey {
            key,
            source_text,
            target_lang,
        } = &self.key;

        for (field, value) in [
            ("key", key),
            ("source text", source_text),
            ("language", target_lang),
        ] {
            if value.contains(DELIMITER) {
                return Err(StoreError::Delimiter {
                    field,
                    value: value.clone(),
                });
            }
        }
        for value in [key, source_text, target_lang, &self.translated_text] {
            if value.contains(['\n', '\r']) {
                return Err(StoreError::LineBreak {
                    value: value.clone(),
                });
            }
        }

        Ok(format!(
            "{key}{DELIMITER}{source_text}{DELIMITER}{target_lang}{DELIMITER}{}\n",
            self.translated_text
        ))
    }

    fn from_record(line: &str) -> Option<Self> {
        let mut parts = line.splitn(4, DELIMITER);
        let key = parts.next()?;
        let source_text = parts.next()?;
        let target_lang = parts.next()?;
        let translated_text = parts.next()?;

        Some(Self {
            key: StoreKey::new(key, source_text, target_lang),
            translated_text: translated_text.to_string(),
        })
    }
}

/// Entries the line-oriented store format cannot represent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Cannot store {field} containing '|': {value:?}")]
    Delimiter { field: &'static str, value: String },

    #[error("Cannot store text containing a line break: {value:?}")]
    LineBreak { value: String },
}

/// In-memory view of the store taken at load time.
#[derive(Debug, Default, Clone)]
pub struct StoreSnapshot {
    entries: HashMap<StoreKey, String>,
}

impl StoreSnapshot {
    pub fn get(&self, key: &StoreKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts the entry unless its triple is already known. The first match wins.
    pub fn insert_if_absent(&mut self, entry: TranslationEntry) -> bool {
        let mut inserted = false;
        self.entries.entry(entry.key).or_insert_with(|| {
            inserted = true;
            entry.translated_text
        });
        inserted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append-only, file-backed translation store.
///
/// One record per line: `key|source_text|target_lang|translated_text`.
/// The translated text is the last field and may itself contain `|`.
pub struct TranslationStore {
    path: PathBuf,
}

impl TranslationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole store. A missing file yields an empty snapshot.
    pub fn load(&self) -> Result<StoreSnapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreSnapshot::default()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read translation store: {}", self.path.display())
                });
            }
        };

        let mut snapshot = StoreSnapshot::default();
        for (number, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match TranslationEntry::from_record(line) {
                Some(entry) => {
                    snapshot.insert_if_absent(entry);
                }
                None => tracing::debug!(
                    line = number + 1,
                    path = %self.path.display(),
                    "Skipping malformed store record"
                ),
            }
        }

        Ok(snapshot)
    }

    /// Appends one record and syncs it to disk before returning.
    pub fn append(&self, entry: &TranslationEntry) -> Result<()> {
        let record = entry.to_record()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| {
                format!("Failed to open translation store: {}", self.path.display())
            })?;

        file.write_all(record.as_bytes())
            .and_then(|()| file.sync_all())
            .with_context(|| {
                format!("Failed to write translation store: {}", self.path.display())
            })?;

        Ok(())
    }
}

//! # props-translate - Property File Translation
//!
//! `props-translate` walks a directory tree, finds every
//! `*_<SOURCE_LANG>.properties` file and writes a sibling file for each
//! configured target language, translating values through DeepL.
//!
//! ## Features
//!
//! - **Layout preserving**: comments, blank lines and keys are copied verbatim
//! - **Translation store**: every translation is appended to a flat text file
//!   and reused on later runs, so unchanged values never hit the API twice
//! - **Failure tolerant**: a failed value keeps its source text and the sweep goes on
//!
//! ## Quick Start
//!
//! ```bash
//! export DEEPL_TOKEN="..."
//! export DEEPL_URL="https://api-free.deepl.com"
//! export LANGUAGES="de,en,fr"
//! export SOURCE_LANG="de"
//!
//! # Translate everything below the current directory
//! props-translate
//! ```
//!
//! ## Translation store
//!
//! `translation_store.txt` holds one record per line:
//!
//! ```text
//! greeting|Hallo|fr|Bonjour
//! ```

/// Append-only translation store.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Environment-sourced configuration.
pub mod config;

/// Locating source-language property files.
pub mod discovery;

/// File system utilities.
pub mod fs;

/// File translation and the full sweep.
pub mod pipeline;

/// Property file parsing and target file naming.
pub mod properties;

/// Translation provider abstraction and the DeepL client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

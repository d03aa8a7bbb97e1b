use anyhow::Result;
use std::path::Path;

use super::transformer::{FileOutcome, FileTranslator, TranslationStats};
use crate::config::Config;
use crate::discovery::find_source_language_files;
use crate::translation::Translator;

/// Progress notifications emitted while a sweep runs.
#[derive(Debug)]
pub enum Progress<'a> {
    /// A file is about to be translated into `target_lang`.
    Started { source: &'a Path, target_lang: &'a str },
    /// A file was written.
    Finished { source: &'a Path, outcome: &'a FileOutcome },
}

/// Totals for a whole sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub source_files: usize,
    pub files_written: usize,
    pub stats: TranslationStats,
}

/// Drives the translation of every source file into every target language.
pub struct Orchestrator<'a, T> {
    config: &'a Config,
    translator: &'a T,
}

impl<'a, T: Translator> Orchestrator<'a, T> {
    pub const fn new(config: &'a Config, translator: &'a T) -> Self {
        Self { config, translator }
    }

    /// Translates every `*_<source_lang>.properties` file below `root`.
    ///
    /// Files are processed in sorted order, languages in configured order.
    /// The first file system error aborts the sweep.
    pub async fn run_all<F>(&self, root: &Path, mut on_progress: F) -> Result<SweepSummary>
    where
        F: FnMut(Progress<'_>),
    {
        let sources = find_source_language_files(root, &self.config.source_lang);
        let targets = self.config.target_languages();
        let file_translator = FileTranslator::new(self.config, self.translator);

        tracing::info!(
            files = sources.len(),
            languages = targets.len(),
            root = %root.display(),
            "Starting translation sweep"
        );

        let mut summary = SweepSummary {
            source_files: sources.len(),
            ..SweepSummary::default()
        };

        for source in &sources {
            for target_lang in &targets {
                on_progress(Progress::Started {
                    source,
                    target_lang,
                });

                let outcome = file_translator.translate_file(source, target_lang).await?;
                tracing::info!(
                    source = %source.display(),
                    target = %outcome.target.display(),
                    cache_hits = outcome.stats.cache_hits,
                    provider_calls = outcome.stats.provider_calls,
                    "Translated file"
                );

                summary.files_written += 1;
                summary.stats.merge(outcome.stats);
                on_progress(Progress::Finished {
                    source,
                    outcome: &outcome,
                });
            }
        }

        Ok(summary)
    }
}

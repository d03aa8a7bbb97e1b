use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::discovery::{PROPERTIES_EXTENSION, find_properties_files_excluding_languages};
use crate::pipeline::{Orchestrator, Progress, SweepSummary};
use crate::translation::DeeplClient;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub root: PathBuf,
}

/// Runs a full translation sweep below `options.root`.
///
/// Configuration is read from the environment; a missing variable aborts
/// before any file is touched.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = Config::from_env()?;
    let client = DeeplClient::new(config.api_url.clone(), config.api_key.clone());

    let spinner = Spinner::new("Scanning for property files...");
    let summary = Orchestrator::new(&config, &client)
        .run_all(&options.root, |progress| match progress {
            Progress::Started {
                source,
                target_lang,
            } => {
                spinner.set_message(format!(
                    "Translating {} to {}...",
                    source.display(),
                    Style::code(target_lang)
                ));
            }
            Progress::Finished { source, outcome } => {
                spinner.println(&format!(
                    "{} {} {} {}",
                    Style::success("Translated"),
                    source.display(),
                    Style::secondary("→"),
                    Style::value(outcome.target.display())
                ));
                for failure in &outcome.failures {
                    spinner.println(&format!(
                        "  {} {} kept as {:?}: {}",
                        Style::warning("Warning:"),
                        Style::code(&failure.key),
                        failure.text,
                        Style::secondary(&failure.error)
                    ));
                }
            }
        })
        .await?;
    spinner.stop();

    print_summary(&config, &options, &summary);

    Ok(())
}

fn print_summary(config: &Config, options: &TranslateOptions, summary: &SweepSummary) {
    if summary.source_files == 0 {
        println!(
            "{} No *_{}{} files found under {}",
            Style::warning("Warning:"),
            config.source_lang,
            PROPERTIES_EXTENSION,
            options.root.display()
        );
        let unsuffixed = find_properties_files_excluding_languages(&options.root, &config.languages);
        if !unsuffixed.is_empty() {
            println!(
                "  {}",
                Style::secondary(format!(
                    "{} .properties file(s) carry no configured language suffix; \
                     rename them to *_{}{} to translate them",
                    unsuffixed.len(),
                    config.source_lang,
                    PROPERTIES_EXTENSION
                ))
            );
        }
        return;
    }

    println!(
        "\n{} {} file(s) written from {} source file(s)",
        Style::header("Done:"),
        summary.files_written,
        summary.source_files
    );
    println!(
        "  {}",
        Style::secondary(format!(
            "{} from store, {} from provider, {} failed",
            summary.stats.cache_hits, summary.stats.provider_calls, summary.stats.provider_failures
        ))
    );
}

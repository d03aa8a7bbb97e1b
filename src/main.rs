use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use props_translate::cli::{Args, DEFAULT_LOG_FILTER};
use props_translate::cli::commands::translate;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // A missing .env file is fine; variables may come from the shell.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let options = translate::TranslateOptions { root: args.root };
    translate::run_translate(options).await?;

    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "props-translate")]
#[command(about = "Translate .properties files through DeepL, caching every translation")]
#[command(version)]
pub struct Args {
    /// Directory to scan for source-language property files
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

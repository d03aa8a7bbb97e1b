mod client;

use anyhow::Result;
use std::future::Future;

pub use client::DeeplClient;

/// A service that translates a single text between two languages.
pub trait Translator {
    /// Translates `text` from `source_lang` to `target_lang`.
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

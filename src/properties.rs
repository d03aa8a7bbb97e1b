//! Line-oriented parsing of `.properties` files and target file naming.

use std::path::{Path, PathBuf};

/// One line of a property file, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyLine<'a> {
    /// Blank line or `#` comment, passed through verbatim.
    CommentOrBlank(&'a str),
    /// `key=value` entry. `key` is the raw text before the first `=`,
    /// `value` the trimmed text after it.
    KeyValue {
        key: &'a str,
        value: &'a str,
        ending: &'a str,
    },
    /// Neither a comment nor an entry, passed through verbatim.
    Malformed(&'a str),
}

impl<'a> PropertyLine<'a> {
    /// Classifies one raw line.
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Self::CommentOrBlank(raw);
        }

        let (content, ending) = split_line_ending(raw);
        match content.split_once('=') {
            Some((key, value)) => Self::KeyValue {
                key,
                value: value.trim(),
                ending,
            },
            None => Self::Malformed(raw),
        }
    }

    /// Writes the line to `out`, replacing the value of an entry with `translated`.
    pub fn render_into(&self, translated: Option<&str>, out: &mut String) {
        match self {
            Self::CommentOrBlank(raw) | Self::Malformed(raw) => out.push_str(raw),
            Self::KeyValue { key, value, ending } => {
                out.push_str(key);
                out.push('=');
                out.push_str(translated.unwrap_or(*value));
                out.push_str(if ending.is_empty() { "\n" } else { *ending });
            }
        }
    }
}

/// Splits a file into lines, keeping each line's terminator.
pub fn parse_lines(contents: &str) -> Vec<PropertyLine<'_>> {
    contents.split_inclusive('\n').map(PropertyLine::parse).collect()
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(content) = raw.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = raw.strip_suffix('\n') {
        (content, "\n")
    } else {
        (raw, "")
    }
}

/// Derives the sibling output path for `target_lang`.
///
/// `messages_de.properties` with source `de` and target `fr` becomes
/// `messages_fr.properties`. A stem without the `_<source_lang>` suffix keeps
/// its full name: `messages.properties` becomes `messages_fr.properties`.
pub fn target_path(source: &Path, source_lang: &str, target_lang: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = stem
        .strip_suffix(&format!("_{source_lang}"))
        .unwrap_or(&stem);

    let file_name = match source.extension() {
        Some(ext) => format!("{base}_{target_lang}.{}", ext.to_string_lossy()),
        None => format!("{base}_{target_lang}"),
    };

    source.with_file_name(file_name)
}

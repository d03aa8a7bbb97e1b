//! Locating property files below a root directory.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extension of property files, including the dot.
pub const PROPERTIES_EXTENSION: &str = ".properties";

/// Returns every file below `root` named `*_<source_lang>.properties`.
///
/// Results are sorted lexicographically so runs are reproducible regardless of
/// the platform's directory order.
pub fn find_source_language_files(root: &Path, source_lang: &str) -> Vec<PathBuf> {
    let suffix = format!("_{source_lang}{PROPERTIES_EXTENSION}");
    collect_files(root, |name| name.ends_with(&suffix))
}

/// Returns every `.properties` file below `root` that is not named after one of `languages`.
///
/// A file counts as a language file when its name ends with `<lang>.properties`.
pub fn find_properties_files_excluding_languages<S: AsRef<str>>(
    root: &Path,
    languages: &[S],
) -> Vec<PathBuf> {
    collect_files(root, |name| {
        name.ends_with(PROPERTIES_EXTENSION)
            && !languages
                .iter()
                .any(|lang| name.ends_with(&format!("{}{PROPERTIES_EXTENSION}", lang.as_ref())))
    })
}

fn collect_files<F>(root: &Path, matches: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> bool,
{
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| is_regular_file(entry) && file_name_matches(entry, &matches))
        .map(DirEntry::into_path)
        .collect();

    files.sort();
    files
}

/// Regular files, plus symlinks that resolve to one. Symlinked directories
/// are not descended into.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn file_name_matches<F>(entry: &DirEntry, matches: &F) -> bool
where
    F: Fn(&str) -> bool,
{
    entry.file_name().to_str().is_some_and(matches)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "key=value\n").unwrap();
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_finds_source_files_recursively_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "z_de.properties");
        touch(root, "b/messages_de.properties");
        touch(root, "a/deep/nested/app_de.properties");
        touch(root, "a/app_fr.properties");
        touch(root, "a/app_de.txt");
        touch(root, "a/notde.properties");

        let files = find_source_language_files(root, "de");

        assert_eq!(
            names(root, &files),
            vec![
                "a/deep/nested/app_de.properties",
                "b/messages_de.properties",
                "z_de.properties",
            ]
        );
    }

    #[test]
    fn test_directories_are_not_returned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("weird_de.properties")).unwrap();

        assert!(find_source_language_files(root, "de").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_source_file_is_found() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "shared/real.txt");
        std::os::unix::fs::symlink(root.join("shared/real.txt"), root.join("app_de.properties"))
            .unwrap();

        let files = find_source_language_files(root, "de");

        assert_eq!(names(root, &files), vec!["app_de.properties"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_descended() {
        let temp_dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        touch(outside.path(), "menu_de.properties");
        std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("linked")).unwrap();

        assert!(find_source_language_files(temp_dir.path(), "de").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::os::unix::fs::symlink(root.join("gone.txt"), root.join("app_de.properties")).unwrap();

        assert!(find_source_language_files(root, "de").is_empty());
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(find_source_language_files(&missing, "de").is_empty());
    }

    #[test]
    fn test_excluding_known_languages() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "app.properties");
        touch(root, "app_de.properties");
        touch(root, "app_fr.properties");
        touch(root, "sub/config.properties");
        touch(root, "sub/readme.txt");

        let files = find_properties_files_excluding_languages(root, &["de", "fr"]);

        assert_eq!(
            names(root, &files),
            vec!["app.properties", "sub/config.properties"]
        );
    }
}

//! Input file discovery
//!
//! Expands a source directory plus a set of include glob patterns into a
//! concrete list of input files. Discovery runs once at the start of a
//! conversion run; the returned list is the exact set of files the run
//! will process. Symbolic links are never followed. Results are sorted by
//! relative path so runs over identical trees are reproducible.

use crate::error::{Error, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Discover regular files under `root` matching at least one pattern
///
/// Returns paths relative to `root`. Fails with a configuration error if
/// `root` does not exist or is not a directory, or if a pattern is not a
/// valid glob.
pub fn discover_files(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::Configuration(format!(
            "source directory '{}' does not exist or is not a directory",
            root.display()
        )));
    }

    let compiled: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                Error::Configuration(format!("invalid include pattern '{}': {}", p, e))
            })
        })
        .collect::<Result<_>>()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::Configuration(format!(
                "cannot read source directory '{}': {}",
                root.display(),
                e
            ))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        // Path relative to the source root, as seen by the patterns
        let relative = match entry.path().strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };

        if compiled.iter().any(|p| p.matches_path(&relative)) {
            files.push(relative);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_recursive_pattern() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.xsd"));
        touch(&temp.path().join("sub/b.xsd"));
        touch(&temp.path().join("c.txt"));

        let files =
            discover_files(temp.path(), &["**/*.xsd".to_string()]).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("a.xsd"), PathBuf::from("sub/b.xsd")]
        );
    }

    #[test]
    fn test_single_level_pattern() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.xsd"));
        touch(&temp.path().join("sub/b.xsd"));

        let files = discover_files(temp.path(), &["*.xsd".to_string()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.xsd")]);
    }

    #[test]
    fn test_multiple_patterns() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.xsd"));
        touch(&temp.path().join("b.xml"));
        touch(&temp.path().join("c.txt"));

        let files = discover_files(
            temp.path(),
            &["*.xsd".to_string(), "*.xml".to_string()],
        )
        .unwrap();
        assert_eq!(files, vec![PathBuf::from("a.xsd"), PathBuf::from("b.xml")]);
    }

    #[test]
    fn test_missing_root_is_configuration_error() {
        let err = discover_files(Path::new("/no/such/dir"), &["**/*.xsd".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_root_must_be_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("schema.xsd");
        touch(&file);

        let err = discover_files(&file, &["**/*.xsd".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let temp = TempDir::new().unwrap();
        let err = discover_files(temp.path(), &["[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_output_is_sorted() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("z.xsd"));
        touch(&temp.path().join("a.xsd"));
        touch(&temp.path().join("m/n.xsd"));

        let files =
            discover_files(temp.path(), &["**/*.xsd".to_string()]).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}

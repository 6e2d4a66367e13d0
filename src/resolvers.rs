//! Relative schema reference resolution
//!
//! A schema document may reference sibling documents by relative file
//! name (`xs:include`/`xs:import` schemaLocation values). A [`Resolver`]
//! turns such a reference into a readable byte stream, scoped to a fixed
//! base directory — the directory containing the root schema file being
//! converted. One resolver is constructed per root file: two root files
//! in different directories must resolve the same relative identifier
//! differently.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves a schema-supplied reference to a readable byte stream
///
/// Returning `None` means "not found"; the translation engine decides
/// whether an unresolved reference is fatal. Implementations never raise
/// on a failed open.
pub trait Resolver {
    /// Open the referenced document for reading, or report absence
    fn open(&self, system_id: &str) -> Option<Box<dyn Read>>;
}

/// Resolver that joins references onto a fixed base directory
///
/// Any failure to open the joined path — missing file, permission denied —
/// collapses to `None`, matching the contract that the resolver only ever
/// reports absence. The underlying I/O error is preserved at debug level.
#[derive(Debug)]
pub struct BaseDirResolver {
    base_dir: PathBuf,
}

impl BaseDirResolver {
    /// Create a resolver scoped to the given base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory this resolver is scoped to
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Resolver for BaseDirResolver {
    fn open(&self, system_id: &str) -> Option<Box<dyn Read>> {
        let path = self.base_dir.join(system_id);
        match File::open(&path) {
            Ok(file) => {
                debug!("resolved reference '{}' to '{}'", system_id, path.display());
                Some(Box::new(file))
            }
            Err(e) => {
                debug!(
                    "could not open reference '{}' at '{}': {}",
                    system_id,
                    path.display(),
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_sibling_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("common.xsd"), "<xs:schema/>").unwrap();

        let resolver = BaseDirResolver::new(temp.path());
        let mut stream = resolver.open("common.xsd").unwrap();

        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        assert_eq!(content, "<xs:schema/>");
    }

    #[test]
    fn test_missing_reference_is_none_not_error() {
        let temp = TempDir::new().unwrap();
        let resolver = BaseDirResolver::new(temp.path());
        assert!(resolver.open("missing.xsd").is_none());
    }

    #[test]
    fn test_resolution_is_independent_of_cwd() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("schemas");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("types.xsd"), "types").unwrap();

        // Resolver uses its base dir, not the process working directory
        let resolver = BaseDirResolver::new(&sub);
        assert!(resolver.open("types.xsd").is_some());

        let other = BaseDirResolver::new(temp.path());
        assert!(other.open("types.xsd").is_none());
    }

    #[test]
    fn test_two_base_dirs_resolve_same_name_differently() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        std::fs::create_dir_all(&dir_a).unwrap();
        std::fs::create_dir_all(&dir_b).unwrap();
        std::fs::write(dir_a.join("common.xsd"), "from-a").unwrap();
        std::fs::write(dir_b.join("common.xsd"), "from-b").unwrap();

        let mut content_a = String::new();
        BaseDirResolver::new(&dir_a)
            .open("common.xsd")
            .unwrap()
            .read_to_string(&mut content_a)
            .unwrap();

        let mut content_b = String::new();
        BaseDirResolver::new(&dir_b)
            .open("common.xsd")
            .unwrap()
            .read_to_string(&mut content_b)
            .unwrap();

        assert_eq!(content_a, "from-a");
        assert_eq!(content_b, "from-b");
    }

    #[test]
    fn test_nested_relative_reference() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("common");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("types.xsd"), "nested").unwrap();

        let resolver = BaseDirResolver::new(temp.path());
        assert!(resolver.open("common/types.xsd").is_some());
    }
}

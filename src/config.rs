//! Run configuration
//!
//! A conversion run is driven by an immutable [`ConverterConfig`] value:
//! the source directory to discover schemas under, the include patterns
//! selecting which files participate, the output directory, and the
//! namespace stamped onto all generated Avro named types. The value is
//! built once by the caller and threaded through the orchestrator; nothing
//! in the crate holds configuration as ambient state.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default include pattern: every .xsd file under the source directory
pub const DEFAULT_INCLUDE: &str = "**/*.xsd";

/// Immutable configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory containing XML schema files
    source_dir: PathBuf,
    /// Glob patterns selecting schema file names under the source directory
    includes: Vec<String>,
    /// Directory where Avro schema files will be written
    output_dir: PathBuf,
    /// Namespace for generated Avro named types
    namespace: String,
}

impl ConverterConfig {
    /// Create a configuration with the default include pattern
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            includes: vec![DEFAULT_INCLUDE.to_string()],
            output_dir: output_dir.into(),
            namespace: namespace.into(),
        }
    }

    /// Replace the include patterns
    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        if !includes.is_empty() {
            self.includes = includes;
        }
        self
    }

    /// Get the source directory
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Get the include patterns
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the namespace for generated named types
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Validate the configuration before a run starts
    ///
    /// The source directory must exist and be a directory. The output
    /// directory is created on demand during conversion, so it is not
    /// checked here.
    pub fn validate(&self) -> Result<()> {
        if !self.source_dir.exists() {
            return Err(Error::Configuration(format!(
                "source directory '{}' does not exist",
                self.source_dir.display()
            )));
        }
        if !self.source_dir.is_dir() {
            return Err(Error::Configuration(format!(
                "source path '{}' is not a directory",
                self.source_dir.display()
            )));
        }
        Ok(())
    }
}

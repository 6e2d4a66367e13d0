//! Batch conversion orchestrator
//!
//! Drives a whole conversion run: validates the configuration, discovers
//! the input files once, and converts them sequentially. Each input gets
//! its own resolver scoped to its containing directory, so relative
//! references inside a schema are satisfied against that schema's
//! siblings. Outputs are written pretty-printed, UTF-8, overwriting any
//! previous artifact.
//!
//! The run is fail-fast: the first per-file failure aborts the batch,
//! wrapped with the identity of the offending input file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::avro::AvroType;
use crate::config::ConverterConfig;
use crate::discovery::discover_files;
use crate::error::{Error, Result};
use crate::locations::target_path;
use crate::resolvers::BaseDirResolver;
use crate::translators::SchemaTranslator;

/// Batch converter from XSD inputs to Avro schema files
#[derive(Debug)]
pub struct SchemaConverter<T: SchemaTranslator> {
    config: ConverterConfig,
    translator: T,
}

impl<T: SchemaTranslator> SchemaConverter<T> {
    /// Create a converter over a configuration and a translation engine
    pub fn new(config: ConverterConfig, translator: T) -> Self {
        Self { config, translator }
    }

    /// Get the run configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert every discovered input file, returning the written outputs
    ///
    /// Discovery is evaluated once, up front; the set of files processed
    /// is exactly the set discovered. Conversion is sequential, and the
    /// first failing file aborts the run.
    pub fn convert_all(&self) -> Result<Vec<PathBuf>> {
        self.config.validate()?;

        let inputs = discover_files(self.config.source_dir(), self.config.includes())?;

        let mut outputs = Vec::with_capacity(inputs.len());
        for relative in &inputs {
            let output = self
                .convert_file(relative)
                .map_err(|e| e.for_input(self.config.source_dir().join(relative)))?;
            outputs.push(output);
        }
        Ok(outputs)
    }

    /// Convert a single input file, identified relative to the source root
    pub fn convert_file(&self, relative: &Path) -> Result<PathBuf> {
        let input = self.config.source_dir().join(relative);
        info!("XML schema input file: {}", input.display());

        let output = target_path(relative, self.config.output_dir());
        info!("Avro schema output file: {}", output.display());

        // Relative references resolve against this file's own directory
        let base_dir = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let resolver = BaseDirResolver::new(base_dir);

        let mut stream = File::open(&input)?;
        let schema =
            self.translator
                .translate(&mut stream, &resolver, self.config.namespace())?;
        drop(stream);

        self.write_schema(&schema, &output)?;
        Ok(output)
    }

    /// Write the pretty-printed schema, creating output directories on demand
    fn write_schema(&self, schema: &AvroType, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Write {
                path: output.to_path_buf(),
                source: e,
            })?;
        }

        let text = schema.to_pretty_string()?;
        fs::write(output, text.as_bytes()).map_err(|e| Error::Write {
            path: output.to_path_buf(),
            source: e,
        })
    }
}

//! # xsdavro
//!
//! Batch converter from XML Schema (XSD) files to Apache Avro schemas.
//!
//! For each XSD file discovered under a source directory, the converter
//! produces exactly one `.avsc` artifact under an output directory, with
//! all generated named types placed in a caller-supplied namespace.
//! Relative references a schema makes to sibling files
//! (`xs:include`/`xs:import`) are resolved against that schema's own
//! directory.
//!
//! ## Features
//!
//! - Glob-based input discovery (`**/*.xsd` by default)
//! - Deterministic output mapping: `<base name>.avsc`, flat under the
//!   output directory
//! - Per-file relative reference resolution
//! - Pluggable translation engines behind a trait; the default engine
//!   translates XSD elements, complex types, and enumerations
//! - Fail-fast batch semantics with per-file error identity
//!
//! ## Example
//!
//! ```rust,ignore
//! use xsdavro::{ConverterConfig, SchemaConverter, XsdTranslator};
//!
//! let config = ConverterConfig::new("src/main/xsd", "target/avsc", "com.example.orders");
//! let converter = SchemaConverter::new(config, XsdTranslator::new());
//! let written = converter.convert_all()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules - Wave 1: Foundation
pub mod error;
pub mod limits;

// Core modules - Wave 2: Utilities
pub mod config;
pub mod locations;
pub mod names;

// Core modules - Wave 3: Discovery and resolution
pub mod discovery;
pub mod resolvers;

// Documents and schema model
pub mod avro;
pub mod documents;

// Translation engines
pub mod translators;

// Batch conversion
pub mod converter;

// Re-exports for convenience
pub use avro::{AvroField, AvroType};
pub use config::ConverterConfig;
pub use converter::SchemaConverter;
pub use error::{Error, Result};
pub use resolvers::{BaseDirResolver, Resolver};
pub use translators::{SchemaTranslator, XsdTranslator};

/// Version of the xsdavro crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

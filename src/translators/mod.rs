//! Schema translation engines
//!
//! The batch converter is generic over a [`SchemaTranslator`]: anything
//! that can turn a root schema stream plus a resolver and a namespace into
//! an Avro schema value. The crate ships one engine, [`XsdTranslator`];
//! tests substitute stub engines through the same trait.

pub mod xsd;

pub use xsd::XsdTranslator;

use crate::avro::AvroType;
use crate::error::Result;
use crate::resolvers::Resolver;
use std::io::Read;

/// A schema translation engine
pub trait SchemaTranslator {
    /// Translate a root schema document into an Avro schema
    ///
    /// Relative references inside the document are satisfied through
    /// `resolver`; all generated named types are placed in `namespace`.
    /// Failures are per-file translation errors; the caller decides how a
    /// failure affects the rest of the batch.
    fn translate(
        &self,
        source: &mut dyn Read,
        resolver: &dyn Resolver,
        namespace: &str,
    ) -> Result<AvroType>;
}

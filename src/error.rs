//! Error types for xsdavro
//!
//! This module defines all error types used throughout the crate.
//! Configuration problems abort a run before any conversion starts;
//! translation and write failures are wrapped with the identity of the
//! input file that caused them.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using xsdavro Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsdavro operations
#[derive(Error, Debug)]
pub enum Error {
    /// Run configuration error (bad source/output directory)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Schema translation error
    #[error("translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Per-file conversion failure, naming the offending input file
    #[error("failed to convert '{}': {source}", .input.display())]
    Conversion {
        /// Input file whose conversion failed
        input: PathBuf,
        /// Underlying cause
        source: Box<Error>,
    },

    /// Output directory creation or file write failure
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        /// Output path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Name error (invalid Avro name)
    #[error("name error: {0}")]
    Name(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an error as a per-file conversion failure
    pub fn for_input(self, input: impl Into<PathBuf>) -> Self {
        Error::Conversion {
            input: input.into(),
            source: Box::new(self),
        }
    }
}

/// Schema translation error with context
///
/// Raised by a translation engine when it cannot produce a valid Avro
/// schema: malformed input, an unsupported construct, or a relative
/// reference the resolver could not open.
#[derive(Debug, Clone)]
pub struct TranslationError {
    /// Error message
    pub message: String,
    /// Reference (systemId) that triggered the error, if any
    pub location: Option<String>,
    /// Original failure reason
    pub reason: Option<String>,
}

impl TranslationError {
    /// Create a new translation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            reason: None,
        }
    }

    /// Set the reference location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Create an error for a reference the resolver could not open
    pub fn unresolved(system_id: impl Into<String>) -> Self {
        let system_id = system_id.into();
        Self::new(format!("unresolved schema reference '{}'", system_id))
            .with_location(system_id)
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref reason) = self.reason {
            write!(f, " (reason: {})", reason)?;
        }

        if let Some(ref location) = self.location {
            write!(f, " [reference: {}]", location)?;
        }

        Ok(())
    }
}

impl std::error::Error for TranslationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_error_display() {
        let err = TranslationError::new("cannot translate schema")
            .with_reason("unexpected root element")
            .with_location("types.xsd");

        let msg = format!("{}", err);
        assert!(msg.contains("cannot translate schema"));
        assert!(msg.contains("reason:"));
        assert!(msg.contains("types.xsd"));
    }

    #[test]
    fn test_unresolved_reference() {
        let err = TranslationError::unresolved("common.xsd");
        assert_eq!(err.location.as_deref(), Some("common.xsd"));
        assert!(format!("{}", err).contains("unresolved schema reference"));
    }

    #[test]
    fn test_conversion_wraps_input_identity() {
        let inner: Error = TranslationError::new("bad schema").into();
        let err = inner.for_input("schemas/order.xsd");

        let msg = format!("{}", err);
        assert!(msg.contains("schemas/order.xsd"));
        assert!(msg.contains("bad schema"));
        assert!(matches!(err, Error::Conversion { .. }));
    }
}

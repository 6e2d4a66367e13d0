//! Limits and constraints for schema processing
//!
//! This module defines limits enforced while loading schema documents,
//! protecting a conversion run against runaway include chains and
//! oversized inputs.

use crate::error::{Error, Result};

/// Limits applied while loading and translating schemas
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum schema depth (includes/imports)
    pub max_schema_depth: usize,

    /// Maximum schema document size in bytes
    pub max_document_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_schema_depth: 100,
            max_document_size: 100 * 1024 * 1024, // 100 MB
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_schema_depth: 20,
            max_document_size: 10 * 1024 * 1024, // 10 MB
        }
    }

    /// Check if schema depth is within limits
    pub fn check_schema_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_schema_depth {
            Err(Error::LimitExceeded(format!(
                "schema include depth {} exceeds maximum {}",
                depth, self.max_schema_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if a document size is within limits
    pub fn check_document_size(&self, size: usize) -> Result<()> {
        if size > self.max_document_size {
            Err(Error::LimitExceeded(format!(
                "schema document size {} bytes exceeds maximum {} bytes",
                size, self.max_document_size
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert!(limits.check_schema_depth(50).is_ok());
        assert!(limits.check_schema_depth(150).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert!(limits.max_schema_depth < Limits::default().max_schema_depth);
        assert!(limits.check_schema_depth(25).is_err());
    }

    #[test]
    fn test_check_document_size() {
        let limits = Limits::default();
        assert!(limits.check_document_size(1024).is_ok());
        assert!(limits.check_document_size(200 * 1024 * 1024).is_err());
    }
}

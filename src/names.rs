//! Avro name validation and utilities
//!
//! Avro names must start with a letter or underscore and contain only
//! letters, digits, and underscores. XSD names are looser (dots and
//! dashes are common), so every name carried into a generated schema is
//! sanitized through this module.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static AVRO_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Check if a string is a valid Avro name
pub fn is_valid_avro_name(name: &str) -> bool {
    AVRO_NAME.is_match(name)
}

/// Validate an Avro name and return an error if invalid
pub fn validate_avro_name(name: &str) -> Result<()> {
    if is_valid_avro_name(name) {
        Ok(())
    } else {
        Err(Error::Name(format!("Invalid Avro name: '{}'", name)))
    }
}

/// Sanitize an arbitrary XSD name into a valid Avro name
///
/// Invalid characters are replaced with underscores; a leading digit gets
/// an underscore prefix; an empty input becomes a single underscore.
pub fn sanitize_avro_name(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }

    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        let valid = c.is_ascii_alphabetic() || c == '_' || (i > 0 && c.is_ascii_digit());
        if valid {
            out.push(c);
        } else if i == 0 && c.is_ascii_digit() {
            out.push('_');
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

/// Derive a record type name for an element with an anonymous type
///
/// `order` becomes `OrderType`; names are sanitized first so the result
/// is always a valid Avro name.
pub fn synthesized_type_name(element_name: &str) -> String {
    let base = sanitize_avro_name(element_name);
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => format!("{}{}Type", first.to_ascii_uppercase(), chars.as_str()),
        None => "_Type".to_string(),
    }
}

/// Split a prefixed XML name into prefix and local name
pub fn split_prefixed(name: &str) -> (Option<&str>, &str) {
    if let Some((prefix, local)) = name.split_once(':') {
        (Some(prefix), local)
    } else {
        (None, name)
    }
}

//! Avro schema model
//!
//! A minimal typed representation of Avro schemas sufficient for XSD
//! translation: primitives, named records and enums, arrays, unions, and
//! references to previously defined named types. Serialization goes
//! through serde, so the pretty-printed output is deterministic for a
//! given schema value.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// An Avro schema type
///
/// `Named(..)` covers both primitive type names (`"string"`) and
/// references to named types defined earlier in the same schema document,
/// which Avro spells identically.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AvroType {
    /// Primitive type name or reference to an already-defined named type
    Named(String),
    /// Record with named fields
    Record {
        /// Always `"record"`
        #[serde(rename = "type")]
        kind: String,
        /// Record name
        name: String,
        /// Namespace of the record
        #[serde(skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        /// Record fields in declaration order
        fields: Vec<AvroField>,
    },
    /// Enumeration of symbols
    Enum {
        /// Always `"enum"`
        #[serde(rename = "type")]
        kind: String,
        /// Enum name
        name: String,
        /// Namespace of the enum
        #[serde(skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        /// Enum symbols in declaration order
        symbols: Vec<String>,
    },
    /// Array of items
    Array {
        /// Always `"array"`
        #[serde(rename = "type")]
        kind: String,
        /// Item schema
        items: Box<AvroType>,
    },
    /// Union of member types
    Union(Vec<AvroType>),
}

impl AvroType {
    /// Primitive or named-type reference
    pub fn named(name: impl Into<String>) -> Self {
        AvroType::Named(name.into())
    }

    /// Build a record
    pub fn record(
        name: impl Into<String>,
        namespace: impl Into<String>,
        fields: Vec<AvroField>,
    ) -> Self {
        AvroType::Record {
            kind: "record".to_string(),
            name: name.into(),
            namespace: Some(namespace.into()),
            fields,
        }
    }

    /// Build an enum
    pub fn enumeration(
        name: impl Into<String>,
        namespace: impl Into<String>,
        symbols: Vec<String>,
    ) -> Self {
        AvroType::Enum {
            kind: "enum".to_string(),
            name: name.into(),
            namespace: Some(namespace.into()),
            symbols,
        }
    }

    /// Build an array
    pub fn array(items: AvroType) -> Self {
        AvroType::Array {
            kind: "array".to_string(),
            items: Box::new(items),
        }
    }

    /// Wrap a type as nullable: `["null", T]`
    pub fn nullable(inner: AvroType) -> Self {
        match inner {
            // Avro forbids nested unions; fold "null" into an existing union
            AvroType::Union(mut members) => {
                if !members.iter().any(|m| m == &AvroType::named("null")) {
                    members.insert(0, AvroType::named("null"));
                }
                AvroType::Union(members)
            }
            other => AvroType::Union(vec![AvroType::named("null"), other]),
        }
    }

    /// Get the name of a named type (record or enum)
    pub fn name(&self) -> Option<&str> {
        match self {
            AvroType::Record { name, .. } | AvroType::Enum { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Serialize to the pretty-printed text form written to .avsc files
    pub fn to_pretty_string(&self) -> Result<String> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::Error::Other(format!("cannot serialize schema: {}", e)))?;
        Ok(text)
    }
}

/// A field of an Avro record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AvroField {
    /// Field name
    pub name: String,
    /// Field schema
    #[serde(rename = "type")]
    pub field_type: AvroType,
    /// Default value; `Some(Value::Null)` serializes as `"default": null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AvroField {
    /// Required field with no default
    pub fn new(name: impl Into<String>, field_type: AvroType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
        }
    }

    /// Optional field: `["null", T]` with default null
    pub fn optional(name: impl Into<String>, field_type: AvroType) -> Self {
        Self {
            name: name.into(),
            field_type: AvroType::nullable(field_type),
            default: Some(Value::Null),
        }
    }
}

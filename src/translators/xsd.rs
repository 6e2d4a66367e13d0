//! Default XSD-to-Avro translation engine
//!
//! Parses the root schema document, pulls in `xs:include`/`xs:import`
//! references iteratively through the resolver, and translates global
//! element declarations into Avro records. All named types produced by a
//! translation carry the run's namespace.

use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use std::collections::VecDeque;
use std::io::Read;
use tracing::warn;

use crate::avro::{AvroField, AvroType};
use crate::documents::{Document, Element};
use crate::error::{Result, TranslationError};
use crate::limits::Limits;
use crate::names::{sanitize_avro_name, split_prefixed, synthesized_type_name};
use crate::resolvers::Resolver;
use crate::translators::SchemaTranslator;

/// XSD 1.0 namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XSD element local names
mod xsd_elements {
    pub const SCHEMA: &str = "schema";
    pub const ELEMENT: &str = "element";
    pub const COMPLEX_TYPE: &str = "complexType";
    pub const SIMPLE_TYPE: &str = "simpleType";
    pub const ATTRIBUTE: &str = "attribute";
    pub const SEQUENCE: &str = "sequence";
    pub const CHOICE: &str = "choice";
    pub const ALL: &str = "all";
    pub const ANNOTATION: &str = "annotation";
    pub const IMPORT: &str = "import";
    pub const INCLUDE: &str = "include";
    pub const RESTRICTION: &str = "restriction";
    pub const EXTENSION: &str = "extension";
    pub const LIST: &str = "list";
    pub const UNION: &str = "union";
    pub const COMPLEX_CONTENT: &str = "complexContent";
    pub const SIMPLE_CONTENT: &str = "simpleContent";
    pub const ENUMERATION: &str = "enumeration";
}

/// XSD attribute names
mod xsd_attrs {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const REF: &str = "ref";
    pub const BASE: &str = "base";
    pub const VALUE: &str = "value";
    pub const USE: &str = "use";
    pub const MIN_OCCURS: &str = "minOccurs";
    pub const MAX_OCCURS: &str = "maxOccurs";
    pub const NILLABLE: &str = "nillable";
    pub const SCHEMA_LOCATION: &str = "schemaLocation";
}

/// Map an XSD built-in simple type to its Avro primitive
fn builtin_avro(local_name: &str) -> &'static str {
    match local_name {
        "boolean" => "boolean",
        "byte" | "short" | "int" | "unsignedByte" | "unsignedShort" => "int",
        "long" | "integer" | "unsignedInt" | "unsignedLong" | "nonNegativeInteger"
        | "positiveInteger" | "nonPositiveInteger" | "negativeInteger" => "long",
        "float" => "float",
        "double" | "decimal" => "double",
        "base64Binary" | "hexBinary" => "bytes",
        // Strings, URIs, names, and all date/time types degrade to string
        _ => "string",
    }
}

/// Schema document pending include processing
struct PendingWork {
    /// Reference that produced this document (None for the root)
    system_id: Option<String>,
    /// Include depth relative to the root
    depth: usize,
}

/// Global declarations gathered from the root document and its includes
#[derive(Default)]
struct Globals {
    elements: IndexMap<String, Element>,
    complex_types: IndexMap<String, Element>,
    simple_types: IndexMap<String, Element>,
}

impl Globals {
    /// Merge a schema document's global declarations, first definition wins
    fn absorb(&mut self, schema: &Element) {
        for child in &schema.children {
            let Some(name) = child.get_attribute(xsd_attrs::NAME) else {
                continue;
            };
            let registry = match child.local_name() {
                xsd_elements::ELEMENT => &mut self.elements,
                xsd_elements::COMPLEX_TYPE => &mut self.complex_types,
                xsd_elements::SIMPLE_TYPE => &mut self.simple_types,
                _ => continue,
            };
            registry
                .entry(name.to_string())
                .or_insert_with(|| child.clone());
        }
    }
}

/// Default translation engine for XSD documents
#[derive(Debug, Default)]
pub struct XsdTranslator {
    limits: Limits,
}

impl XsdTranslator {
    /// Create a translator with default limits
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Read and parse one schema document, enforcing the size limit
    fn parse_document(&self, source: &mut dyn Read) -> Result<Document> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        self.limits.check_document_size(bytes.len())?;
        Document::parse(&bytes)
    }

    /// Load the root schema and every reachable include/import
    ///
    /// Iterative worklist: pulls schemaLocation references breadth-first
    /// through the resolver, deduplicating locations already loaded. An
    /// `xs:include` the resolver cannot open is fatal; an `xs:import`
    /// without an openable location is skipped (imports commonly point at
    /// well-known external namespaces).
    fn load_schema_set(
        &self,
        source: &mut dyn Read,
        resolver: &dyn Resolver,
    ) -> Result<Globals> {
        let mut globals = Globals::default();
        let mut loaded: HashSet<String> = HashSet::new();
        let mut pending: VecDeque<PendingWork> = VecDeque::new();
        pending.push_back(PendingWork {
            system_id: None,
            depth: 0,
        });

        while let Some(work) = pending.pop_front() {
            self.limits.check_schema_depth(work.depth)?;

            let document = match &work.system_id {
                None => self.parse_document(source)?,
                Some(system_id) => {
                    let Some(mut stream) = resolver.open(system_id) else {
                        return Err(TranslationError::unresolved(system_id.clone()).into());
                    };
                    self.parse_document(stream.as_mut())?
                }
            };

            let schema = schema_root(&document)?;
            globals.absorb(schema);

            for child in &schema.children {
                let is_include = child.local_name() == xsd_elements::INCLUDE;
                let is_import = child.local_name() == xsd_elements::IMPORT;
                if !is_include && !is_import {
                    continue;
                }

                match child.get_attribute(xsd_attrs::SCHEMA_LOCATION) {
                    Some(location) => {
                        if loaded.insert(location.to_string()) {
                            if is_import && resolver.open(location).is_none() {
                                warn!("skipping unresolvable xs:import '{}'", location);
                                continue;
                            }
                            pending.push_back(PendingWork {
                                system_id: Some(location.to_string()),
                                depth: work.depth + 1,
                            });
                        }
                    }
                    None if is_include => {
                        return Err(TranslationError::new(
                            "xs:include missing schemaLocation attribute",
                        )
                        .into());
                    }
                    None => {
                        warn!("skipping xs:import without schemaLocation");
                    }
                }
            }
        }

        Ok(globals)
    }
}

impl SchemaTranslator for XsdTranslator {
    fn translate(
        &self,
        source: &mut dyn Read,
        resolver: &dyn Resolver,
        namespace: &str,
    ) -> Result<AvroType> {
        let globals = self.load_schema_set(source, resolver)?;

        let mut ctx = Translation {
            globals: &globals,
            namespace,
            defined: IndexSet::new(),
        };

        let roots: Vec<Element> = globals.elements.values().cloned().collect();

        let mut records = Vec::new();
        for elem in &roots {
            records.push(ctx.element_type(elem)?);
        }

        match records.len() {
            0 => Err(TranslationError::new(
                "schema declares no global elements to translate",
            )
            .into()),
            1 => Ok(records.into_iter().next().unwrap_or(AvroType::named("null"))),
            _ => Ok(AvroType::Union(records)),
        }
    }
}

/// Get the xs:schema root of a document
fn schema_root(document: &Document) -> Result<&Element> {
    let root = document
        .root()
        .ok_or_else(|| TranslationError::new("empty schema document"))?;

    if root.local_name() != xsd_elements::SCHEMA {
        return Err(TranslationError::new(format!(
            "expected xs:schema root element, got '{}'",
            root.local_name()
        ))
        .into());
    }
    if let Some(ns) = root.namespace() {
        if ns != XSD_NAMESPACE {
            return Err(TranslationError::new(format!(
                "root element is not in the XML Schema namespace (found '{}')",
                ns
            ))
            .into());
        }
    }
    Ok(root)
}

/// One translation pass over the gathered globals
struct Translation<'a> {
    globals: &'a Globals,
    namespace: &'a str,
    /// Names of named types already emitted; later uses reference by name
    defined: IndexSet<String>,
}

impl<'a> Translation<'a> {
    /// Avro type for an element declaration
    fn element_type(&mut self, elem: &Element) -> Result<AvroType> {
        if let Some(type_ref) = elem.get_attribute(xsd_attrs::TYPE) {
            return self.resolve_type_ref(elem, type_ref);
        }

        if let Some(complex) = elem.find_child(xsd_elements::COMPLEX_TYPE) {
            let hint = elem.get_attribute(xsd_attrs::NAME).unwrap_or("value");
            let name = self.unique_name(&synthesized_type_name(hint));
            return self.complex_to_record(&name, complex);
        }

        if let Some(simple) = elem.find_child(xsd_elements::SIMPLE_TYPE) {
            let hint = elem.get_attribute(xsd_attrs::NAME).unwrap_or("value");
            return self.simple_type_avro(hint, simple);
        }

        // No type information: xs:anyType, mapped leniently
        Ok(AvroType::named("string"))
    }

    /// Resolve a `type="..."` or `base="..."` QName to an Avro type
    fn resolve_type_ref(&mut self, context: &Element, qname: &str) -> Result<AvroType> {
        let (prefix, local) = split_prefixed(qname);
        let ns = context.resolve_prefix(prefix.unwrap_or(""));

        if ns == Some(XSD_NAMESPACE) {
            return Ok(AvroType::named(builtin_avro(local)));
        }

        if let Some(complex) = self.globals.complex_types.get(local) {
            let name = sanitize_avro_name(local);
            if self.defined.contains(&name) {
                return Ok(AvroType::named(name));
            }
            return self.complex_to_record(&name, &complex.clone());
        }

        if let Some(simple) = self.globals.simple_types.get(local) {
            return self.simple_type_avro(local, &simple.clone());
        }

        // Unknown reference: degrade to string rather than failing the file
        warn!("unknown type reference '{}', mapping to string", qname);
        Ok(AvroType::named("string"))
    }

    /// Translate a complex type definition into a record
    fn complex_to_record(&mut self, name: &str, complex: &Element) -> Result<AvroType> {
        // Register the name before descending so recursive references
        // resolve to the record being defined
        self.defined.insert(name.to_string());

        let mut fields = Vec::new();
        self.collect_fields(complex, false, &mut fields)?;

        Ok(AvroType::record(name, self.namespace, fields))
    }

    /// Gather record fields from a complex type body in document order
    ///
    /// `optional` forces every collected field to be nullable; it is set
    /// when descending into xs:choice, whose members are alternatives.
    fn collect_fields(
        &mut self,
        container: &Element,
        optional: bool,
        fields: &mut Vec<AvroField>,
    ) -> Result<()> {
        for child in &container.children {
            match child.local_name() {
                xsd_elements::SEQUENCE | xsd_elements::ALL => {
                    self.collect_fields(child, optional, fields)?;
                }
                xsd_elements::CHOICE => {
                    self.collect_fields(child, true, fields)?;
                }
                xsd_elements::ELEMENT => {
                    if let Some(field) = self.element_field(child, optional)? {
                        fields.push(field);
                    }
                }
                xsd_elements::ATTRIBUTE => {
                    if let Some(field) = self.attribute_field(child)? {
                        fields.push(field);
                    }
                }
                xsd_elements::COMPLEX_CONTENT | xsd_elements::SIMPLE_CONTENT => {
                    self.content_fields(child, fields)?;
                }
                xsd_elements::ANNOTATION => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Field for an element particle, honoring occurrence constraints
    fn element_field(
        &mut self,
        elem: &Element,
        forced_optional: bool,
    ) -> Result<Option<AvroField>> {
        // A ref particle points at a global element declaration
        let (declaration, raw_name) = match elem.get_attribute(xsd_attrs::NAME) {
            Some(name) => (elem.clone(), name.to_string()),
            None => match elem.get_attribute(xsd_attrs::REF) {
                Some(reference) => {
                    let (_, local) = split_prefixed(reference);
                    match self.globals.elements.get(local) {
                        Some(global) => (global.clone(), local.to_string()),
                        None => {
                            warn!("unknown element ref '{}', skipping", reference);
                            return Ok(None);
                        }
                    }
                }
                None => {
                    warn!("element particle without name or ref, skipping");
                    return Ok(None);
                }
            },
        };

        let base_type = self.element_type(&declaration)?;
        let field_name = sanitize_avro_name(&raw_name);

        let min_occurs: usize = elem
            .get_attribute(xsd_attrs::MIN_OCCURS)
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);
        let repeated = match elem.get_attribute(xsd_attrs::MAX_OCCURS) {
            Some("unbounded") => true,
            Some(v) => v.parse::<usize>().map(|n| n > 1).unwrap_or(false),
            None => false,
        };
        let nillable = elem.get_attribute(xsd_attrs::NILLABLE) == Some("true");

        if repeated {
            return Ok(Some(AvroField::new(field_name, AvroType::array(base_type))));
        }
        if forced_optional || nillable || min_occurs == 0 {
            return Ok(Some(AvroField::optional(field_name, base_type)));
        }
        Ok(Some(AvroField::new(field_name, base_type)))
    }

    /// Field for an attribute declaration
    fn attribute_field(&mut self, attr: &Element) -> Result<Option<AvroField>> {
        let Some(raw_name) = attr.get_attribute(xsd_attrs::NAME) else {
            warn!("attribute without a name (ref attributes are not carried), skipping");
            return Ok(None);
        };
        let raw_name = raw_name.to_string();

        let base_type = if let Some(type_ref) = attr.get_attribute(xsd_attrs::TYPE) {
            self.resolve_type_ref(attr, type_ref)?
        } else if let Some(simple) = attr.find_child(xsd_elements::SIMPLE_TYPE) {
            self.simple_type_avro(&raw_name, simple)?
        } else {
            AvroType::named("string")
        };

        let field_name = sanitize_avro_name(&raw_name);
        if attr.get_attribute(xsd_attrs::USE) == Some("required") {
            Ok(Some(AvroField::new(field_name, base_type)))
        } else {
            Ok(Some(AvroField::optional(field_name, base_type)))
        }
    }

    /// Fields for complexContent/simpleContent extension or restriction
    fn content_fields(&mut self, content: &Element, fields: &mut Vec<AvroField>) -> Result<()> {
        let simple = content.local_name() == xsd_elements::SIMPLE_CONTENT;

        for child in &content.children {
            match child.local_name() {
                xsd_elements::EXTENSION => {
                    if let Some(base) = child.get_attribute(xsd_attrs::BASE) {
                        if simple {
                            // Simple content: the element body becomes a value field
                            let value_type = self.resolve_type_ref(child, base)?;
                            fields.push(AvroField::new("value", value_type));
                        } else {
                            self.base_fields(child, base, fields)?;
                        }
                    }
                    self.collect_fields(child, false, fields)?;
                }
                xsd_elements::RESTRICTION => {
                    if simple {
                        if let Some(base) = child.get_attribute(xsd_attrs::BASE) {
                            let value_type = self.resolve_type_ref(child, base)?;
                            fields.push(AvroField::new("value", value_type));
                        }
                    }
                    self.collect_fields(child, false, fields)?;
                }
                xsd_elements::ANNOTATION => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Flatten the fields of an extension base complex type into `fields`
    fn base_fields(
        &mut self,
        context: &Element,
        base: &str,
        fields: &mut Vec<AvroField>,
    ) -> Result<()> {
        let (prefix, local) = split_prefixed(base);
        let ns = context.resolve_prefix(prefix.unwrap_or(""));
        if ns == Some(XSD_NAMESPACE) {
            // Extending xs:anyType adds no inherited fields
            return Ok(());
        }
        if let Some(base_type) = self.globals.complex_types.get(local) {
            self.collect_fields(&base_type.clone(), false, fields)?;
        } else {
            warn!("unknown extension base '{}', no inherited fields", base);
        }
        Ok(())
    }

    /// Translate a simple type definition
    ///
    /// Restrictions carrying enumeration facets become Avro enums; other
    /// restrictions collapse to their base type. List and union simple
    /// types degrade to string.
    fn simple_type_avro(&mut self, name_hint: &str, simple: &Element) -> Result<AvroType> {
        if let Some(restriction) = simple.find_child(xsd_elements::RESTRICTION) {
            let symbols: Vec<String> = restriction
                .find_children(xsd_elements::ENUMERATION)
                .iter()
                .filter_map(|e| e.get_attribute(xsd_attrs::VALUE))
                .map(sanitize_avro_name)
                .collect();

            if !symbols.is_empty() {
                let mut unique = Vec::new();
                for symbol in symbols {
                    if !unique.contains(&symbol) {
                        unique.push(symbol);
                    }
                }
                let name = self.unique_name(&sanitize_avro_name(name_hint));
                self.defined.insert(name.clone());
                return Ok(AvroType::enumeration(name, self.namespace, unique));
            }

            if let Some(base) = restriction.get_attribute(xsd_attrs::BASE) {
                return self.resolve_type_ref(restriction, base);
            }
            return Ok(AvroType::named("string"));
        }

        if simple.find_child(xsd_elements::LIST).is_some()
            || simple.find_child(xsd_elements::UNION).is_some()
        {
            return Ok(AvroType::named("string"));
        }

        Ok(AvroType::named("string"))
    }

    /// Produce a name not yet used by an emitted named type
    fn unique_name(&self, base: &str) -> String {
        if !self.defined.contains(base) {
            return base.to_string();
        }
        let mut counter = 2;
        loop {
            let candidate = format!("{}_{}", base, counter);
            if !self.defined.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::resolvers::BaseDirResolver;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn translate_str(xsd: &str) -> Result<AvroType> {
        let temp = TempDir::new().unwrap();
        let resolver = BaseDirResolver::new(temp.path());
        XsdTranslator::new().translate(&mut xsd.as_bytes(), &resolver, "com.example")
    }

    #[test]
    fn test_simple_record() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="order">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="id" type="xs:string"/>
        <xs:element name="quantity" type="xs:int"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

        let schema = translate_str(xsd).unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "record",
                "name": "OrderType",
                "namespace": "com.example",
                "fields": [
                    { "name": "id", "type": "string" },
                    { "name": "quantity", "type": "int" }
                ]
            })
        );
    }

    #[test]
    fn test_named_type_reference() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="order" type="orderType"/>
  <xs:complexType name="orderType">
    <xs:sequence>
      <xs:element name="id" type="xs:string"/>
    </xs:sequence>
  </xs:complexType>
</xs:schema>"#;

        let schema = translate_str(xsd).unwrap();
        assert_eq!(schema.name(), Some("orderType"));
    }

    #[test]
    fn test_optional_and_repeated_elements() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="order">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="note" type="xs:string" minOccurs="0"/>
        <xs:element name="item" type="xs:string" maxOccurs="unbounded"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        assert_eq!(
            value["fields"],
            json!([
                { "name": "note", "type": ["null", "string"], "default": null },
                { "name": "item", "type": { "type": "array", "items": "string" } }
            ])
        );
    }

    #[test]
    fn test_attributes_and_required_use() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="order">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="id" type="xs:string"/>
      </xs:sequence>
      <xs:attribute name="version" type="xs:string" use="required"/>
      <xs:attribute name="channel" type="xs:string"/>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        assert_eq!(
            value["fields"],
            json!([
                { "name": "id", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "channel", "type": ["null", "string"], "default": null }
            ])
        );
    }

    #[test]
    fn test_enumeration_becomes_enum() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="status" type="statusType"/>
  <xs:simpleType name="statusType">
    <xs:restriction base="xs:string">
      <xs:enumeration value="OPEN"/>
      <xs:enumeration value="CLOSED"/>
    </xs:restriction>
  </xs:simpleType>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "enum",
                "name": "statusType",
                "namespace": "com.example",
                "symbols": ["OPEN", "CLOSED"]
            })
        );
    }

    #[test]
    fn test_builtin_type_mapping() {
        assert_eq!(builtin_avro("string"), "string");
        assert_eq!(builtin_avro("boolean"), "boolean");
        assert_eq!(builtin_avro("int"), "int");
        assert_eq!(builtin_avro("short"), "int");
        assert_eq!(builtin_avro("long"), "long");
        assert_eq!(builtin_avro("integer"), "long");
        assert_eq!(builtin_avro("float"), "float");
        assert_eq!(builtin_avro("decimal"), "double");
        assert_eq!(builtin_avro("base64Binary"), "bytes");
        assert_eq!(builtin_avro("dateTime"), "string");
    }

    #[test]
    fn test_multiple_global_elements_form_union() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="a" type="xs:string"/>
  <xs:element name="b" type="xs:int"/>
</xs:schema>"#;

        let schema = translate_str(xsd).unwrap();
        assert_eq!(
            schema,
            AvroType::Union(vec![AvroType::named("string"), AvroType::named("int")])
        );
    }

    #[test]
    fn test_no_global_elements_is_an_error() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:simpleType name="unused">
    <xs:restriction base="xs:string"/>
  </xs:simpleType>
</xs:schema>"#;

        let err = translate_str(xsd).unwrap_err();
        assert!(matches!(err, Error::Translation(_)));
    }

    #[test]
    fn test_non_schema_root_is_an_error() {
        let err = translate_str("<not-a-schema/>").unwrap_err();
        assert!(matches!(err, Error::Translation(_)));
    }

    #[test]
    fn test_include_resolves_through_resolver() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("types.xsd"),
            r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:complexType name="orderType">
    <xs:sequence>
      <xs:element name="id" type="xs:string"/>
    </xs:sequence>
  </xs:complexType>
</xs:schema>"#,
        )
        .unwrap();

        let root = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:include schemaLocation="types.xsd"/>
  <xs:element name="order" type="orderType"/>
</xs:schema>"#;

        let resolver = BaseDirResolver::new(temp.path());
        let schema = XsdTranslator::new()
            .translate(&mut root.as_bytes(), &resolver, "com.example")
            .unwrap();

        assert_eq!(schema.name(), Some("orderType"));
    }

    #[test]
    fn test_missing_include_is_unresolved_reference() {
        let root = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:include schemaLocation="missing.xsd"/>
  <xs:element name="order" type="orderType"/>
</xs:schema>"#;

        let err = translate_str(root).unwrap_err();
        match err {
            Error::Translation(t) => {
                assert_eq!(t.location.as_deref(), Some("missing.xsd"))
            }
            other => panic!("expected translation error, got {:?}", other),
        }
    }

    #[test]
    fn test_circular_includes_terminate() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("a.xsd"),
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:include schemaLocation="b.xsd"/>
  <xs:element name="root" type="xs:string"/>
</xs:schema>"#,
        )
        .unwrap();
        std::fs::write(
            temp.path().join("b.xsd"),
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:include schemaLocation="a.xsd"/>
</xs:schema>"#,
        )
        .unwrap();

        let root = std::fs::read_to_string(temp.path().join("a.xsd")).unwrap();
        let resolver = BaseDirResolver::new(temp.path());
        let schema = XsdTranslator::new()
            .translate(&mut root.as_bytes(), &resolver, "ns")
            .unwrap();
        assert_eq!(schema, AvroType::named("string"));
    }

    #[test]
    fn test_recursive_complex_type() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="node" type="nodeType"/>
  <xs:complexType name="nodeType">
    <xs:sequence>
      <xs:element name="label" type="xs:string"/>
      <xs:element name="child" type="nodeType" minOccurs="0"/>
    </xs:sequence>
  </xs:complexType>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        // The recursive use references the record by name
        assert_eq!(
            value["fields"][1],
            json!({
                "name": "child",
                "type": ["null", "nodeType"],
                "default": null
            })
        );
    }

    #[test]
    fn test_simple_content_extension() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="price">
    <xs:complexType>
      <xs:simpleContent>
        <xs:extension base="xs:double">
          <xs:attribute name="currency" type="xs:string" use="required"/>
        </xs:extension>
      </xs:simpleContent>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        assert_eq!(
            value["fields"],
            json!([
                { "name": "value", "type": "double" },
                { "name": "currency", "type": "string" }
            ])
        );
    }

    #[test]
    fn test_complex_content_extension_flattens_base() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="employee" type="employeeType"/>
  <xs:complexType name="personType">
    <xs:sequence>
      <xs:element name="name" type="xs:string"/>
    </xs:sequence>
  </xs:complexType>
  <xs:complexType name="employeeType">
    <xs:complexContent>
      <xs:extension base="personType">
        <xs:sequence>
          <xs:element name="badge" type="xs:int"/>
        </xs:sequence>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        let field_names: Vec<&str> = value["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(field_names, vec!["name", "badge"]);
    }

    #[test]
    fn test_choice_members_are_optional() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="contact">
    <xs:complexType>
      <xs:choice>
        <xs:element name="email" type="xs:string"/>
        <xs:element name="phone" type="xs:string"/>
      </xs:choice>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        for field in value["fields"].as_array().unwrap() {
            assert_eq!(field["type"], json!(["null", "string"]));
            assert_eq!(field["default"], json!(null));
        }
    }

    #[test]
    fn test_element_ref_uses_global_declaration() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="order">
    <xs:complexType>
      <xs:sequence>
        <xs:element ref="note"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
  <xs:element name="note" type="xs:string"/>
</xs:schema>"#;

        let schema = translate_str(xsd).unwrap();
        // Two global elements: union of the order record and note string
        let AvroType::Union(members) = schema else {
            panic!("expected union")
        };
        let order = serde_json::to_value(&members[0]).unwrap();
        assert_eq!(
            order["fields"][0],
            json!({ "name": "note", "type": "string" })
        );
    }

    #[test]
    fn test_sanitizes_field_and_type_names() {
        let xsd = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="line-item">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="unit-price" type="xs:double"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

        let value = serde_json::to_value(translate_str(xsd).unwrap()).unwrap();
        assert_eq!(value["name"], "Line_itemType");
        assert_eq!(value["fields"][0]["name"], "unit_price");
    }
}

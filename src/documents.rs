//! XML document handling
//!
//! This module parses schema documents into a small element tree. It keeps
//! just enough namespace information for XSD translation: each element
//! carries its resolved namespace URI and a snapshot of the prefix
//! mappings in scope, so attribute values like `type="xs:string"` can be
//! resolved against the declarations visible at that element.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// XML element in the document tree
#[derive(Debug, Clone)]
pub struct Element {
    /// Local name (prefix stripped)
    local_name: String,
    /// Resolved namespace URI, if the element is in a namespace
    namespace: Option<String>,
    /// Attributes by local name
    attributes: HashMap<String, String>,
    /// Text content (if any)
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Prefix-to-namespace mappings in scope at this element
    prefixes: HashMap<String, String>,
}

impl Element {
    /// Get the local name of the element
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Get the namespace URI of the element
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Get an attribute value by local name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Resolve a prefix against the declarations in scope at this element
    ///
    /// The empty prefix resolves to the default namespace, if declared.
    pub fn resolve_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Find child elements by local name
    pub fn find_children(&self, local_name: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter(|e| e.local_name() == local_name)
            .collect()
    }

    /// Find the first child element with the given local name
    pub fn find_child(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.local_name() == local_name)
    }
}

/// Parsed XML document
#[derive(Debug)]
pub struct Document {
    /// Root element of the document
    pub root: Option<Element>,
}

impl Document {
    /// Parse an XML document from a string
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::parse(xml.as_bytes())
    }

    /// Parse an XML document from bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);

        let mut root: Option<Element> = None;
        // Stack of open elements; scope stack of xmlns declarations
        let mut element_stack: Vec<Element> = Vec::new();
        let mut scope_stack: Vec<HashMap<String, String>> =
            vec![HashMap::new()];
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let element = parse_start(&e, &mut scope_stack, true)?;
                    element_stack.push(element);
                }
                Ok(Event::Empty(e)) => {
                    let element = parse_start(&e, &mut scope_stack, false)?;
                    attach(element, &mut element_stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    scope_stack.pop();
                    let element = element_stack.pop().ok_or_else(|| {
                        Error::Xml("unbalanced end tag".to_string())
                    })?;
                    attach(element, &mut element_stack, &mut root)?;
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::Xml(format!("invalid text content: {}", e)))?;
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        if let Some(current) = element_stack.last_mut() {
                            match current.text {
                                Some(ref mut existing) => existing.push_str(trimmed),
                                None => current.text = Some(trimmed.to_string()),
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, CDATA, PIs carry nothing we translate
                Ok(_) => {}
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "parse error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
            }
            buf.clear();
        }

        if !element_stack.is_empty() {
            return Err(Error::Xml("unclosed element at end of document".to_string()));
        }

        Ok(Self { root })
    }

    /// Get the root element
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }
}

/// Build an Element from a start tag, pushing its xmlns scope if it stays open
fn parse_start(
    start: &BytesStart<'_>,
    scope_stack: &mut Vec<HashMap<String, String>>,
    push_scope: bool,
) -> Result<Element> {
    let mut attributes = HashMap::new();
    let mut declared: Vec<(String, String)> = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Xml(format!("invalid attribute: {}", e)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Xml(format!("invalid attribute value: {}", e)))?
            .into_owned();

        if key == "xmlns" {
            declared.push((String::new(), value));
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            declared.push((prefix.to_string(), value));
        } else {
            // Attribute keys are stored by local name
            let local = key.rsplit(':').next().unwrap_or(&key).to_string();
            attributes.insert(local, value);
        }
    }

    // New scope: parent mappings plus this element's declarations
    let mut scope = scope_stack
        .last()
        .cloned()
        .unwrap_or_default();
    for (prefix, uri) in declared {
        scope.insert(prefix, uri);
    }

    let raw_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let (prefix, local_name) = match raw_name.split_once(':') {
        Some((p, l)) => (p.to_string(), l.to_string()),
        None => (String::new(), raw_name),
    };
    let namespace = scope.get(&prefix).cloned();

    let element = Element {
        local_name,
        namespace,
        attributes,
        text: None,
        children: Vec::new(),
        prefixes: scope.clone(),
    };

    if push_scope {
        scope_stack.push(scope);
    }

    Ok(element)
}

/// Attach a completed element to its parent, or install it as the root
fn attach(
    element: Element,
    element_stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<()> {
    if let Some(parent) = element_stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(Error::Xml("multiple root elements".to_string()));
    }
    Ok(())
}

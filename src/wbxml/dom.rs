//! Structured document tree produced and consumed by the codec

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Attribute carried on decoded elements when a peel-off payload has been
/// stored out-of-line. The value is the store-assigned back-reference.
pub const BODY_REF_ATTR: &str = "body-ref";

/// How an `Opaque` node's bytes map back to the text domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpaqueKind {
    /// Bytes are the content; the text form is the UTF-8 reading of them.
    Raw,
    /// The schema calls this field a string; the canonical text form is
    /// the base64 encoding of the bytes.
    Base64,
}

/// One node of a decoded (or to-be-encoded) document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocNode {
    Element(Element),
    Text(String),
    Opaque { data: Vec<u8>, kind: OpaqueKind },
}

/// A named element in one of the protocol namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub namespace: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DocNode>,
}

impl Element {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(namespace: &str, name: &str, text: &str) -> Self {
        let mut el = Self::new(namespace, name);
        el.children.push(DocNode::Text(text.to_string()));
        el
    }

    pub fn push(&mut self, child: DocNode) {
        self.children.push(child);
    }

    /// Builder-style child append.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(DocNode::Element(child));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// First child element with the given name, in this element's
    /// namespace or any other.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| match c {
            DocNode::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |c| match c {
            DocNode::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Concatenated text-domain content of this element's direct children.
    /// Opaque children render per their kind, so a `Base64`-tagged node
    /// reads back as the base64 string the schema pretends it is.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                DocNode::Text(s) => out.push_str(s),
                DocNode::Opaque { data, kind } => match kind {
                    OpaqueKind::Raw => out.push_str(&String::from_utf8_lossy(data)),
                    OpaqueKind::Base64 => out.push_str(&BASE64.encode(data)),
                },
                DocNode::Element(_) => {}
            }
        }
        out
    }

    /// Text content of the first child element with the given name.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.find(name).map(|el| el.text())
    }
}

impl From<Element> for DocNode {
    fn from(el: Element) -> Self {
        DocNode::Element(el)
    }
}

impl DocNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            DocNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_view_of_opaque_kinds() {
        let mut el = Element::new("Email2", "ConversationId");
        el.push(DocNode::Opaque { data: vec![0x01, 0x02, 0xFF], kind: OpaqueKind::Base64 });
        assert_eq!(el.text(), "AQL/");

        let mut el = Element::new("ComposeMail", "Mime");
        el.push(DocNode::Opaque { data: b"MIME-Version: 1.0".to_vec(), kind: OpaqueKind::Raw });
        assert_eq!(el.text(), "MIME-Version: 1.0");
    }

    #[test]
    fn test_find_and_child_text() {
        let doc = Element::new("FolderHierarchy", "FolderSync")
            .child(Element::with_text("FolderHierarchy", "Status", "1"))
            .child(Element::with_text("FolderHierarchy", "SyncKey", "abc"));
        assert_eq!(doc.child_text("Status").unwrap(), "1");
        assert_eq!(doc.child_text("SyncKey").unwrap(), "abc");
        assert!(doc.find("Changes").is_none());
    }

    #[test]
    fn test_attributes() {
        let mut el = Element::new("AirSyncBase", "Data");
        assert!(el.attribute(BODY_REF_ATTR).is_none());
        el.set_attribute(BODY_REF_ATTR, "42");
        assert_eq!(el.attribute(BODY_REF_ATTR), Some("42"));
        el.set_attribute(BODY_REF_ATTR, "43");
        assert_eq!(el.attributes.len(), 1);
    }
}

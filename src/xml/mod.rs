//! Attributed, order-preserving XML nodes.
//!
//! The schema layer never looks at raw XML events. It works on [`XmlNode`]
//! trees: an element name, its attributes in document order, and an ordered
//! list of children that are either text runs or nested elements.
//!
//! ```text
//! bytes ──reader──▶ XmlNode ──accessor──▶ schema shapes
//! ```
//!
//! Whitespace-only text is kept verbatim; whether it is significant is a
//! decision of the shape that consumes the node.

mod accessor;
mod reader;

use indexmap::IndexMap;

pub use reader::parse_document;

/// One child of an [`XmlNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlContent {
    /// A run of character data (entities already unescaped).
    Text(String),
    /// A nested element.
    Element(XmlNode),
}

impl XmlContent {
    /// Returns true for text runs that contain only whitespace.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(t) if t.trim().is_empty())
    }
}

/// A parsed XML element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<XmlContent>,
}

impl XmlNode {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.push_element(child);
        self
    }

    /// Builder: append a text run.
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.push_text(text.as_ref());
        self
    }

    /// The element name, including any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Raw attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All children in document order.
    pub fn children(&self) -> &[XmlContent] {
        &self.children
    }

    /// Child elements in document order, skipping text runs.
    pub fn elements(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter_map(|c| match c {
            XmlContent::Element(e) => Some(e),
            XmlContent::Text(_) => None,
        })
    }

    /// Append text, merging with a directly preceding text run.
    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(XmlContent::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlContent::Text(text.to_string()));
        }
    }

    pub(crate) fn push_element(&mut self, child: XmlNode) {
        self.children.push(XmlContent::Element(child));
    }

    pub(crate) fn insert_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }
}

//! Typed read access over [`XmlNode`].
//!
//! Absent and present-but-empty are distinct: `has_child` / `has_attribute`
//! answer the first question without failing, while the typed getters fail
//! with [`DoxyError::MissingAttribute`] / [`DoxyError::MissingChild`].

use std::str::FromStr;

use super::{XmlContent, XmlNode};
use crate::error::{DoxyError, Result};

impl XmlNode {
    /// Returns true if the attribute is present (even when empty).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// String attribute value.
    pub fn attribute_str(&self, name: &str) -> Result<&str> {
        self.attribute(name)
            .ok_or_else(|| DoxyError::missing_attribute(self.name(), name, "string"))
    }

    /// Boolean attribute value. Accepts `yes`/`no` and `true`/`false`.
    pub fn attribute_bool(&self, name: &str) -> Result<bool> {
        match self.attribute(name) {
            Some("yes") | Some("true") => Ok(true),
            Some("no") | Some("false") => Ok(false),
            _ => Err(DoxyError::missing_attribute(self.name(), name, "boolean")),
        }
    }

    /// Numeric attribute value.
    pub fn attribute_number<T: FromStr>(&self, name: &str) -> Result<T> {
        self.attribute(name)
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| DoxyError::missing_attribute(self.name(), name, "numeric"))
    }

    /// Returns true if at least one child element has this name.
    pub fn has_child(&self, name: &str) -> bool {
        self.elements().any(|e| e.name() == name)
    }

    /// All child elements with this name, in document order.
    ///
    /// Fails when no such child exists at all.
    pub fn children_named(&self, name: &str) -> Result<Vec<&XmlNode>> {
        let found: Vec<_> = self.elements().filter(|e| e.name() == name).collect();
        if found.is_empty() {
            return Err(DoxyError::missing_child(self.name(), name));
        }
        Ok(found)
    }

    /// Returns true if a child element with this name exists and contains
    /// only text.
    pub fn is_text_leaf(&self, name: &str) -> bool {
        self.elements()
            .find(|e| e.name() == name)
            .is_some_and(XmlNode::is_leaf)
    }

    /// Returns true if this element has no child elements.
    pub fn is_leaf(&self) -> bool {
        self.children()
            .iter()
            .all(|c| matches!(c, XmlContent::Text(_)))
    }

    /// Concatenated text of a leaf element.
    pub fn text(&self) -> String {
        self.children()
            .iter()
            .filter_map(|c| match c {
                XmlContent::Text(t) => Some(t.as_str()),
                XmlContent::Element(_) => None,
            })
            .collect()
    }

    /// Text of the first child element with this name.
    pub fn child_text(&self, name: &str) -> Result<String> {
        self.elements()
            .find(|e| e.name() == name)
            .map(XmlNode::text)
            .ok_or_else(|| DoxyError::missing_child(self.name(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> XmlNode {
        XmlNode::new("memberdef")
            .with_attribute("kind", "function")
            .with_attribute("static", "yes")
            .with_attribute("line", "42")
            .with_child(XmlNode::new("name").with_text("run"))
            .with_child(XmlNode::new("param"))
            .with_child(XmlNode::new("param"))
            .with_child(XmlNode::new("type").with_child(XmlNode::new("ref")))
    }

    #[test]
    fn test_attribute_accessors() {
        let node = sample();
        assert!(node.has_attribute("kind"));
        assert!(!node.has_attribute("const"));
        assert_eq!(node.attribute_str("kind").unwrap(), "function");
        assert!(node.attribute_bool("static").unwrap());
        assert_eq!(node.attribute_number::<u32>("line").unwrap(), 42);
    }

    #[test]
    fn test_attribute_type_mismatch_is_missing() {
        let node = sample();
        let err = node.attribute_bool("kind").unwrap_err();
        assert!(matches!(
            err,
            DoxyError::MissingAttribute { ref attribute, expected: "boolean", .. } if attribute == "kind"
        ));
        assert!(node.attribute_number::<u32>("kind").is_err());
        assert!(node.attribute_str("absent").is_err());
    }

    #[test]
    fn test_children_named_distinguishes_absent() {
        let node = sample();
        assert_eq!(node.children_named("param").unwrap().len(), 2);
        assert!(node.has_child("name"));
        let err = node.children_named("enumvalue").unwrap_err();
        assert!(matches!(err, DoxyError::MissingChild { ref child, .. } if child == "enumvalue"));
    }

    #[test]
    fn test_text_leaf_detection() {
        let node = sample();
        assert!(node.is_text_leaf("name"));
        assert!(node.is_text_leaf("param"));
        assert!(!node.is_text_leaf("type"));
        assert!(!node.is_text_leaf("missing"));
        assert_eq!(node.child_text("name").unwrap(), "run");
    }
}

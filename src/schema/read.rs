//! Recognize-or-fail helpers shared by every shape constructor.

use std::str::FromStr;

use super::keywords::Keyword;
use crate::error::{DoxyError, Result};
use crate::xml::{XmlContent, XmlNode};

/// A typed shape built from one [`XmlNode`].
pub trait FromNode: Sized {
    /// The schema type name reported in violations.
    const SHAPE: &'static str;

    /// Interpret `node`, failing on anything the shape does not recognize.
    fn from_node(node: &XmlNode) -> Result<Self>;
}

/// Attribute reader that remembers which attributes were consumed.
///
/// Calling [`Attrs::finish`] after the recognized attributes have been read
/// turns the first leftover into a schema violation.
pub(crate) struct Attrs<'a> {
    node: &'a XmlNode,
    shape: &'static str,
    consumed: Vec<&'static str>,
}

impl<'a> Attrs<'a> {
    pub(crate) fn new(node: &'a XmlNode, shape: &'static str) -> Self {
        Self {
            node,
            shape,
            consumed: Vec::new(),
        }
    }

    fn take(&mut self, name: &'static str) -> Option<&'a str> {
        self.consumed.push(name);
        self.node.attribute(name)
    }

    pub(crate) fn required(&mut self, name: &'static str) -> Result<&'a str> {
        self.take(name)
            .ok_or_else(|| DoxyError::missing_attribute(self.node.name(), name, "string"))
    }

    /// Required and non-empty.
    pub(crate) fn required_non_empty(&mut self, name: &'static str) -> Result<&'a str> {
        match self.take(name) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(DoxyError::missing_attribute(
                self.node.name(),
                name,
                "non-empty string",
            )),
        }
    }

    pub(crate) fn optional(&mut self, name: &'static str) -> Option<&'a str> {
        self.take(name)
    }

    pub(crate) fn optional_string(&mut self, name: &'static str) -> Option<String> {
        self.take(name).map(str::to_string)
    }

    /// `yes`/`no` flag; absent means `false`.
    pub(crate) fn flag(&mut self, name: &'static str) -> Result<bool> {
        Ok(self.optional_flag(name)?.unwrap_or(false))
    }

    pub(crate) fn optional_flag(&mut self, name: &'static str) -> Result<Option<bool>> {
        match self.take(name) {
            None => Ok(None),
            Some("yes") | Some("true") => Ok(Some(true)),
            Some("no") | Some("false") => Ok(Some(false)),
            Some(other) => Err(DoxyError::unknown_value(self.shape, name, other)),
        }
    }

    pub(crate) fn number<T: FromStr>(&mut self, name: &'static str) -> Result<Option<T>> {
        match self.take(name) {
            None => Ok(None),
            Some(v) => v
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| DoxyError::missing_attribute(self.node.name(), name, "numeric")),
        }
    }

    pub(crate) fn required_enum<T: Keyword>(&mut self, name: &'static str) -> Result<T> {
        let value = self.required(name)?;
        T::from_keyword(value).ok_or_else(|| DoxyError::unknown_value(self.shape, name, value))
    }

    pub(crate) fn optional_enum<T: Keyword>(&mut self, name: &'static str) -> Result<Option<T>> {
        match self.take(name) {
            None => Ok(None),
            Some(value) => T::from_keyword(value)
                .map(Some)
                .ok_or_else(|| DoxyError::unknown_value(self.shape, name, value)),
        }
    }

    /// Mark attributes as recognized without reading them.
    pub(crate) fn ignore(&mut self, names: &[&'static str]) {
        self.consumed.extend_from_slice(names);
    }

    pub(crate) fn finish(self) -> Result<()> {
        match self
            .node
            .attributes()
            .find(|(key, _)| !self.consumed.iter().any(|c| c == key))
        {
            Some((key, _)) => Err(DoxyError::unknown_attribute(self.shape, key)),
            None => Ok(()),
        }
    }
}

/// Child elements of a structural (non-mixed) node.
///
/// Whitespace-only text is skipped; any other text is a violation.
pub(crate) fn elements<'a>(node: &'a XmlNode, shape: &'static str) -> Result<Vec<&'a XmlNode>> {
    let mut out = Vec::new();
    for child in node.children() {
        match child {
            XmlContent::Element(e) => out.push(e),
            XmlContent::Text(t) if t.trim().is_empty() => {}
            XmlContent::Text(_) => return Err(DoxyError::unexpected_text(shape)),
        }
    }
    Ok(out)
}

/// Text of an attribute-less leaf element such as `<name>`.
pub(crate) fn leaf_text(node: &XmlNode, shape: &'static str) -> Result<String> {
    Attrs::new(node, shape).finish()?;
    if let Some(e) = node.elements().next() {
        return Err(DoxyError::unknown_element(shape, e.name()));
    }
    Ok(node.text())
}

/// Reject a repeated singleton child.
pub(crate) fn set_once<T>(slot: &mut Option<T>, value: T, shape: &'static str, name: &str) -> Result<()> {
    if slot.is_some() {
        return Err(DoxyError::SchemaViolation {
            shape,
            item: format!("repeated <{name}>"),
        });
    }
    *slot = Some(value);
    Ok(())
}

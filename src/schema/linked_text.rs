//! Linked text: plain text interleaved with references.
//!
//! Used for `type`, `initializer`, `defval`, `exceptions`, `requiresclause`
//! and `typeconstraint`, and for references inside program listings.

use super::keywords::RefKind;
use super::read::{Attrs, FromNode};
use crate::error::{DoxyError, Result};
use crate::xml::{XmlContent, XmlNode};

/// A reference span inside linked text (`refTextType`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkedRef {
    pub refid: String,
    pub kind: RefKind,
    pub external: Option<String>,
    pub tooltip: Option<String>,
    pub text: String,
}

impl FromNode for LinkedRef {
    const SHAPE: &'static str = "refTextType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let kind = attrs.required_enum("kindref")?;
        let external = attrs.optional_string("external");
        let tooltip = attrs.optional_string("tooltip");
        attrs.finish()?;

        if let Some(e) = node.elements().next() {
            return Err(DoxyError::unknown_element(Self::SHAPE, e.name()));
        }

        Ok(Self {
            refid,
            kind,
            external,
            tooltip,
            text: node.text(),
        })
    }
}

/// One piece of linked text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkedSpan {
    Text(String),
    Ref(LinkedRef),
}

/// Text with embedded references, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkedText {
    pub spans: Vec<LinkedSpan>,
}

impl LinkedText {
    /// The text with references flattened to their labels.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|s| match s {
                LinkedSpan::Text(t) => t.as_str(),
                LinkedSpan::Ref(r) => r.text.as_str(),
            })
            .collect()
    }

    /// Returns true when the text is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

impl FromNode for LinkedText {
    const SHAPE: &'static str = "linkedTextType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;

        let mut spans = Vec::new();
        for child in node.children() {
            match child {
                XmlContent::Text(t) => spans.push(LinkedSpan::Text(t.clone())),
                XmlContent::Element(e) if e.name() == "ref" => {
                    spans.push(LinkedSpan::Ref(LinkedRef::from_node(e)?));
                }
                XmlContent::Element(e) => {
                    return Err(DoxyError::unknown_element(Self::SHAPE, e.name()));
                }
            }
        }
        Ok(Self { spans })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_text_keeps_order() {
        let node = XmlNode::new("type")
            .with_text("const ")
            .with_child(
                XmlNode::new("ref")
                    .with_attribute("refid", "classfoo")
                    .with_attribute("kindref", "compound")
                    .with_text("Foo"),
            )
            .with_text(" &");
        let text = LinkedText::from_node(&node).unwrap();
        assert_eq!(text.spans.len(), 3);
        assert_eq!(text.plain_text(), "const Foo &");
        assert!(matches!(&text.spans[1], LinkedSpan::Ref(r) if r.kind == RefKind::Compound));
    }

    #[test]
    fn test_ref_requires_refid() {
        let node = XmlNode::new("ref")
            .with_attribute("refid", "")
            .with_attribute("kindref", "member");
        assert!(matches!(
            LinkedRef::from_node(&node),
            Err(DoxyError::MissingAttribute { .. })
        ));
    }
}

//! `descriptionType`: the container of brief, detailed and in-body prose.

use super::doc::{ContentModel, DocContent, DocNode, parse_mixed};
use super::read::{Attrs, FromNode, set_once};
use crate::error::{DoxyError, Result};
use crate::xml::{XmlContent, XmlNode};

/// Which description element this was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DescriptionKind {
    Brief,
    Detailed,
    InBody,
    Parameter,
    Xref,
}

impl DescriptionKind {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "briefdescription" => Some(Self::Brief),
            "detaileddescription" => Some(Self::Detailed),
            "inbodydescription" => Some(Self::InBody),
            "parameterdescription" => Some(Self::Parameter),
            "xrefdescription" => Some(Self::Xref),
            _ => None,
        }
    }
}

/// Paragraphs, internal blocks and `sect1` sections under an optional title.
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    pub kind: DescriptionKind,
    pub title: Option<Vec<DocContent>>,
    pub content: Vec<DocContent>,
}

impl Description {
    pub fn empty(kind: DescriptionKind) -> Self {
        Self {
            kind,
            title: None,
            content: Vec::new(),
        }
    }

    /// Returns true when nothing but whitespace was documented.
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|c| match c {
            DocContent::Text(t) => t.trim().is_empty(),
            DocContent::Node(DocNode::Para(p)) => p.is_blank(),
            DocContent::Node(_) => false,
        })
    }

    /// Top-level command nodes, skipping the whitespace between them.
    pub fn nodes(&self) -> impl Iterator<Item = &DocNode> {
        self.content.iter().filter_map(|c| match c {
            DocContent::Node(n) => Some(n),
            DocContent::Text(_) => None,
        })
    }
}

impl FromNode for Description {
    const SHAPE: &'static str = "descriptionType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let kind = DescriptionKind::from_element(node.name())
            .ok_or_else(|| DoxyError::unknown_element(Self::SHAPE, node.name()))?;
        Self::parse_as(node, kind)
    }
}

impl Description {
    /// Read description content from an element of any name.
    pub(crate) fn parse_as(node: &XmlNode, kind: DescriptionKind) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;

        let mut title = None;
        let mut content = Vec::new();
        for child in node.children() {
            match child {
                XmlContent::Element(e) if e.name() == "title" => {
                    Attrs::new(e, "docTitleType").finish()?;
                    set_once(
                        &mut title,
                        parse_mixed(e, ContentModel::Inline, "docTitleType")?,
                        Self::SHAPE,
                        "title",
                    )?;
                }
                XmlContent::Element(e) => content.push(DocContent::Node(DocNode::parse(
                    e,
                    ContentModel::DESCRIPTION,
                    Self::SHAPE,
                )?)),
                XmlContent::Text(t) => content.push(DocContent::Text(t.clone())),
            }
        }
        Ok(Self {
            kind,
            title,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::doc::outline;
    use crate::xml::parse_document;

    fn read(xml: &str) -> Result<Description> {
        Description::from_node(&parse_document(xml.as_bytes())?)
    }

    #[test]
    fn test_brief_description() {
        let d = read("<briefdescription>\n<para>Short.</para>\n</briefdescription>").unwrap();
        assert_eq!(d.kind, DescriptionKind::Brief);
        assert_eq!(outline(&d.content), vec!["#text", "para", "#text"]);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_empty_description() {
        let d = read("<detaileddescription>\n</detaileddescription>").unwrap();
        assert!(d.is_empty());
        assert_eq!(d.nodes().count(), 0);
    }

    #[test]
    fn test_sections_nest_by_level() {
        let d = read(
            "<detaileddescription><sect1 id=\"a\"><title>A</title>\
             <sect2 id=\"b\"><title>B</title><para>x</para></sect2></sect1></detaileddescription>",
        )
        .unwrap();
        match d.nodes().next() {
            Some(DocNode::Sect(s)) => {
                assert_eq!(s.level, 1);
                assert!(matches!(
                    s.content.first(),
                    Some(DocContent::Node(DocNode::Sect(inner))) if inner.level == 2
                ));
            }
            other => panic!("expected sect1, got {other:?}"),
        }
    }

    #[test]
    fn test_skipped_section_level_is_violation() {
        let err = read("<detaileddescription><sect2/></detaileddescription>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Schema violation in descriptionType: unrecognized <sect2>"
        );
    }

    #[test]
    fn test_inline_markup_outside_para_is_violation() {
        assert!(read("<briefdescription><bold>x</bold></briefdescription>").is_err());
    }
}

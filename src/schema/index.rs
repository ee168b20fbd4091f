//! `index.xml`: the table of every compound and member.

use super::keywords::{CompoundKind, Keyword, MemberKind};
use super::read::{Attrs, FromNode, elements, leaf_text, set_once};
use crate::error::{DoxyError, Result};
use crate::xml::XmlNode;

/// Kind of a member row; the index also lists enumerators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexMemberKind {
    Member(MemberKind),
    EnumValue,
}

impl Keyword for IndexMemberKind {
    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "enumvalue" => Some(Self::EnumValue),
            other => MemberKind::from_keyword(other).map(Self::Member),
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Member(kind) => kind.keyword(),
            Self::EnumValue => "enumvalue",
        }
    }
}

/// A member row of the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexMember {
    pub refid: String,
    pub kind: IndexMemberKind,
    pub name: String,
}

impl FromNode for IndexMember {
    const SHAPE: &'static str = "MemberType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let kind = attrs.required_enum("kind")?;
        attrs.finish()?;
        let mut name = None;
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "name" => set_once(&mut name, leaf_text(child, Self::SHAPE)?, Self::SHAPE, "name")?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            refid,
            kind,
            name: name.ok_or_else(|| DoxyError::missing_child("member", "name"))?,
        })
    }
}

/// A compound row of the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexCompound {
    pub refid: String,
    pub kind: CompoundKind,
    pub name: String,
    pub members: Vec<IndexMember>,
}

impl FromNode for IndexCompound {
    const SHAPE: &'static str = "CompoundType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let kind = attrs.required_enum("kind")?;
        attrs.finish()?;

        let mut name = None;
        let mut members = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "name" => set_once(&mut name, leaf_text(child, Self::SHAPE)?, Self::SHAPE, "name")?,
                "member" => members.push(IndexMember::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            refid,
            kind,
            name: name.ok_or_else(|| DoxyError::missing_child("compound", "name"))?,
            members,
        })
    }
}

/// Root of `index.xml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoxygenIndex {
    pub version: String,
    pub lang: Option<String>,
    pub compounds: Vec<IndexCompound>,
}

impl FromNode for DoxygenIndex {
    const SHAPE: &'static str = "DoxygenIndexType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        if node.name() != "doxygenindex" {
            return Err(DoxyError::unknown_element(Self::SHAPE, node.name()));
        }
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let version = attrs.required("version")?.to_string();
        let lang = attrs.optional_string("xml:lang");
        attrs.ignore(&["xmlns:xsi", "xsi:noNamespaceSchemaLocation"]);
        attrs.finish()?;

        let mut compounds = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "compound" => compounds.push(IndexCompound::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            version,
            lang,
            compounds,
        })
    }
}

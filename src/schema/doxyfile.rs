//! `Doxyfile.xml`: the configuration Doxygen ran with.

use super::keywords::OptionType;
use super::read::{Attrs, FromNode, elements, leaf_text};
use crate::error::{DoxyError, Result};
use crate::xml::XmlNode;

/// One `<option id type default>` with its values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoxyfileOption {
    pub id: String,
    pub ty: OptionType,
    pub is_default: bool,
    pub values: Vec<String>,
}

impl FromNode for DoxyfileOption {
    const SHAPE: &'static str = "OptionType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required_non_empty("id")?.to_string();
        let ty = attrs.required_enum("type")?;
        let is_default = attrs.flag("default")?;
        attrs.finish()?;

        let mut values = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "value" => values.push(leaf_text(child, Self::SHAPE)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            id,
            ty,
            is_default,
            values,
        })
    }
}

/// Root of `Doxyfile.xml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Doxyfile {
    pub version: String,
    pub lang: Option<String>,
    pub options: Vec<DoxyfileOption>,
}

impl FromNode for Doxyfile {
    const SHAPE: &'static str = "DoxygenFileType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        if node.name() != "doxyfile" {
            return Err(DoxyError::unknown_element(Self::SHAPE, node.name()));
        }
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let version = attrs.required("version")?.to_string();
        let lang = attrs.optional_string("xml:lang");
        attrs.ignore(&["xmlns:xsi", "xsi:noNamespaceSchemaLocation"]);
        attrs.finish()?;

        let mut options = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "option" => options.push(DoxyfileOption::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            version,
            lang,
            options,
        })
    }
}

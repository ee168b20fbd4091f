//! Include, inheritance and collaboration graphs.

use super::keywords::GraphRelation;
use super::read::{Attrs, FromNode, elements, leaf_text, set_once};
use crate::error::{DoxyError, Result};
use crate::xml::XmlNode;

/// An edge to another graph node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    pub target: String,
    pub relation: GraphRelation,
    pub labels: Vec<String>,
}

impl FromNode for GraphEdge {
    const SHAPE: &'static str = "childnodeType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let target = attrs.required("refid")?.to_string();
        let relation = attrs.required_enum("relation")?;
        attrs.finish()?;

        let mut labels = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "edgelabel" => labels.push(leaf_text(child, Self::SHAPE)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            target,
            relation,
            labels,
        })
    }
}

/// One box of a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Compound the box links to, if documented.
    pub link: Option<String>,
    pub children: Vec<GraphEdge>,
}

impl FromNode for GraphNode {
    const SHAPE: &'static str = "nodeType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required("id")?.to_string();
        attrs.finish()?;

        let mut label = None;
        let mut link = None;
        let mut children = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "label" => set_once(&mut label, leaf_text(child, Self::SHAPE)?, Self::SHAPE, "label")?,
                "link" => {
                    let mut link_attrs = Attrs::new(child, "linkType");
                    let refid = link_attrs.required("refid")?.to_string();
                    link_attrs.ignore(&["external"]);
                    link_attrs.finish()?;
                    set_once(&mut link, refid, Self::SHAPE, "link")?;
                }
                "childnode" => children.push(GraphEdge::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            id,
            label: label.ok_or_else(|| DoxyError::missing_child("node", "label"))?,
            link,
            children,
        })
    }
}

/// A whole graph: a flat list of nodes connected through ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
}

impl Graph {
    /// Compounds linked from the graph, in node order.
    pub fn linked_compounds(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| n.link.as_deref())
    }
}

impl FromNode for Graph {
    const SHAPE: &'static str = "graphType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut nodes = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "node" => nodes.push(GraphNode::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self { nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn test_include_graph() {
        let xml = br#"<incdepgraph>
  <node id="1"><label>a.h</label><link refid="a_8h"/><childnode refid="2" relation="include"/></node>
  <node id="2"><label>vector</label></node>
</incdepgraph>"#;
        let graph = Graph::from_node(&parse_document(xml).unwrap()).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.linked_compounds().collect::<Vec<_>>(), vec!["a_8h"]);
        assert_eq!(graph.nodes[0].children[0].relation, GraphRelation::Include);
    }

    #[test]
    fn test_node_requires_label() {
        let xml = br#"<incdepgraph><node id="1"/></incdepgraph>"#;
        assert!(matches!(
            Graph::from_node(&parse_document(xml).unwrap()),
            Err(DoxyError::MissingChild { .. })
        ));
    }
}

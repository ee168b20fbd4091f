//! Schema node model.
//!
//! Turns generic [`XmlNode`] trees into typed shapes, one Rust type per
//! schema type. Construction is recognize-or-fail: an attribute, child
//! element or text run that a shape does not know is a
//! [`SchemaViolation`](crate::error::DoxyError::SchemaViolation) naming the
//! shape and the item, so a stale schema never silently drops content.
//!
//! ```text
//! index.xml      ──▶ DoxygenIndex ─▶ IndexCompound ─▶ IndexMember
//! <refid>.xml    ──▶ DoxygenDocument ─▶ CompoundDef ─▶ SectionDef ─▶ MemberDef
//!                                            │
//!                                            └──▶ Description ─▶ DocNode ...
//! Doxyfile.xml   ──▶ Doxyfile ─▶ DoxyfileOption
//! ```

mod compound;
mod description;
mod doc;
mod doxyfile;
mod graph;
mod index;
mod keywords;
mod linked_text;
mod listing;
mod member;
mod read;

#[cfg(test)]
mod tests;

pub use compound::{
    CompoundDef, CompoundGraphs, CompoundRef, DoxygenDocument, IncludeRef, InnerKind, InnerRef,
    MemberListEntry, TocSection,
};
pub use description::{Description, DescriptionKind};
pub use doc::{
    ContainerKind, DiagramKind, DocAnchor, DocContainer, DocContent, DocDetails, DocDiagram,
    DocEmoji, DocEntry, DocFormatOnly, DocFormula, DocHeading, DocImage, DocIndexEntry,
    DocInternal, DocList, DocListItem, DocMarkup, DocNode, DocPara, DocParamName,
    DocParameterItem, DocParameterList, DocRef, DocSect, DocSimpleSect, DocSymbol, DocTable,
    DocTocItem, DocTocList, DocUlink, DocVariableList, DocXrefSect, MarkupKind, node_outline,
    outline,
};
pub use doxyfile::{Doxyfile, DoxyfileOption};
pub use graph::{Graph, GraphEdge, GraphNode};
pub use index::{DoxygenIndex, IndexCompound, IndexMember, IndexMemberKind};
pub use keywords::{
    Align, CompoundKind, GraphRelation, HighlightClass, Keyword, MemberKind, OptionType,
    OutputFormat, ParamDirection, ParamListKind, Protection, RefKind, SectionDefKind,
    SimpleSectKind, VAlign, Virtualness,
};
pub use linked_text::{LinkedRef, LinkedSpan, LinkedText};
pub use listing::{CodeLine, Highlight, HighlightSpan, ProgramListing};
pub use member::{
    EnumValue, Location, MEMBER_FLAGS, MemberDef, MemberFlags, MemberLink, MemberRef, Param,
    SectionDef, template_header,
};
pub use read::FromNode;

use crate::error::Result;
use crate::xml::{XmlNode, parse_document};

/// Parse XML bytes and interpret the document element as `T`.
pub fn read_document<T: FromNode>(bytes: &[u8]) -> Result<T> {
    let root: XmlNode = parse_document(bytes)?;
    T::from_node(&root)
}

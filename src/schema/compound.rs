//! Per-compound documents (`<refid>.xml`).
//!
//! ```text
//! doxygen
//!   └─ compounddef(id, kind)
//!        ├─ compoundname, title?
//!        ├─ basecompoundref* / derivedcompoundref*
//!        ├─ includes* / includedby*
//!        ├─ inner{dir,file,class,namespace,group,page,...}*
//!        ├─ templateparamlist?, sectiondef*, tableofcontents?
//!        ├─ briefdescription, detaileddescription
//!        ├─ graphs, programlisting?, location?
//!        └─ listofallmembers?
//! ```

use super::description::{Description, DescriptionKind};
use super::graph::Graph;
use super::keywords::{CompoundKind, Protection, Virtualness};
use super::linked_text::LinkedText;
use super::listing::ProgramListing;
use super::member::{Location, MemberDef, Param, SectionDef, template_params};
use super::read::{Attrs, FromNode, elements, leaf_text, set_once};
use crate::error::{DoxyError, Result};
use crate::xml::XmlNode;

// ============================================================================
// REFERENCES
// ============================================================================

/// `<basecompoundref>` / `<derivedcompoundref>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundRef {
    /// Absent for undocumented classes such as `std::exception`.
    pub refid: Option<String>,
    pub prot: Protection,
    pub virt: Virtualness,
    pub name: String,
}

impl FromNode for CompoundRef {
    const SHAPE: &'static str = "compoundRefType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.optional_string("refid");
        let prot = attrs.required_enum("prot")?;
        let virt = attrs.required_enum("virt")?;
        attrs.finish()?;
        Ok(Self {
            refid,
            prot,
            virt,
            name: leaf_text_of(node, Self::SHAPE)?,
        })
    }
}

/// `<includes local="yes">foo.h</includes>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeRef {
    pub refid: Option<String>,
    pub local: bool,
    pub name: String,
}

impl IncludeRef {
    /// `#include "foo.h"` or `#include <foo.h>`.
    pub fn directive(&self) -> String {
        if self.local {
            format!("#include \"{}\"", self.name)
        } else {
            format!("#include <{}>", self.name)
        }
    }
}

impl FromNode for IncludeRef {
    const SHAPE: &'static str = "incType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.optional_string("refid");
        let local = attrs.flag("local")?;
        attrs.finish()?;
        Ok(Self {
            refid,
            local,
            name: leaf_text_of(node, Self::SHAPE)?,
        })
    }
}

/// Which `inner*` element an [`InnerRef`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InnerKind {
    Dir,
    File,
    Class,
    Concept,
    Module,
    Namespace,
    Page,
    Group,
}

impl InnerKind {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "innerdir" => Some(Self::Dir),
            "innerfile" => Some(Self::File),
            "innerclass" => Some(Self::Class),
            "innerconcept" => Some(Self::Concept),
            "innermodule" => Some(Self::Module),
            "innernamespace" => Some(Self::Namespace),
            "innerpage" => Some(Self::Page),
            "innergroup" => Some(Self::Group),
            _ => None,
        }
    }

    /// Heading of the list of inner compounds on a page.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Dir => "Folders",
            Self::File => "Files",
            Self::Class => "Classes",
            Self::Concept => "Concepts",
            Self::Module => "Modules",
            Self::Namespace => "Namespaces",
            Self::Page => "Pages",
            Self::Group => "Groups",
        }
    }
}

/// A reference to a compound nested in this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerRef {
    pub kind: InnerKind,
    pub refid: String,
    pub prot: Option<Protection>,
    pub inline: bool,
    pub name: String,
}

impl InnerRef {
    pub const SHAPE: &'static str = "refType";

    fn parse(node: &XmlNode, kind: InnerKind) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let prot = attrs.optional_enum("prot")?;
        let inline = attrs.flag("inline")?;
        attrs.finish()?;
        Ok(Self {
            kind,
            refid,
            prot,
            inline,
            name: leaf_text_of(node, Self::SHAPE)?,
        })
    }
}

/// Text of a leaf whose attributes were already consumed.
fn leaf_text_of(node: &XmlNode, shape: &'static str) -> Result<String> {
    if let Some(e) = node.elements().next() {
        return Err(DoxyError::unknown_element(shape, e.name()));
    }
    Ok(node.text())
}

// ============================================================================
// TABLE OF CONTENTS AND MEMBER LIST
// ============================================================================

/// One entry of a page's table of contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TocSection {
    pub name: String,
    pub reference: String,
    pub children: Vec<TocSection>,
}

/// `<tableofcontents>`: nested `tocsect` entries.
pub(crate) fn table_of_contents(node: &XmlNode) -> Result<Vec<TocSection>> {
    const SHAPE: &str = "tableofcontentsType";
    Attrs::new(node, SHAPE).finish()?;
    let mut sections: Vec<TocSection> = Vec::new();
    for child in elements(node, SHAPE)? {
        match child.name() {
            "tocsect" => sections.push(toc_section(child)?),
            // Nested levels follow the entry they belong to.
            "tableofcontents" => match sections.last_mut() {
                Some(last) => last.children.extend(table_of_contents(child)?),
                None => return Err(DoxyError::unknown_element(SHAPE, "tableofcontents")),
            },
            other => return Err(DoxyError::unknown_element(SHAPE, other)),
        }
    }
    Ok(sections)
}

fn toc_section(node: &XmlNode) -> Result<TocSection> {
    const SHAPE: &str = "tableofcontentsKindType";
    Attrs::new(node, SHAPE).finish()?;
    let mut name = None;
    let mut reference = None;
    let mut children = Vec::new();
    for child in elements(node, SHAPE)? {
        let tag = child.name();
        match tag {
            "name" => set_once(&mut name, leaf_text(child, SHAPE)?, SHAPE, tag)?,
            "reference" => set_once(&mut reference, leaf_text(child, SHAPE)?, SHAPE, tag)?,
            "tableofcontents" => children.extend(table_of_contents(child)?),
            other => return Err(DoxyError::unknown_element(SHAPE, other)),
        }
    }
    Ok(TocSection {
        name: name.unwrap_or_default(),
        reference: reference.ok_or_else(|| DoxyError::missing_child("tocsect", "reference"))?,
        children,
    })
}

/// One row of `<listofallmembers>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberListEntry {
    pub refid: String,
    pub prot: Protection,
    pub virt: Virtualness,
    pub ambiguity_scope: Option<String>,
    pub scope: String,
    pub name: String,
}

impl FromNode for MemberListEntry {
    const SHAPE: &'static str = "memberRefType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let prot = attrs.required_enum("prot")?;
        let virt = attrs.required_enum("virt")?;
        let ambiguity_scope = attrs.optional_string("ambiguityscope");
        attrs.finish()?;

        let mut scope = None;
        let mut name = None;
        for child in elements(node, Self::SHAPE)? {
            let tag = child.name();
            match tag {
                "scope" => set_once(&mut scope, leaf_text(child, Self::SHAPE)?, Self::SHAPE, tag)?,
                "name" => set_once(&mut name, leaf_text(child, Self::SHAPE)?, Self::SHAPE, tag)?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            refid,
            prot,
            virt,
            ambiguity_scope,
            scope: scope.unwrap_or_default(),
            name: name.ok_or_else(|| DoxyError::missing_child("member", "name"))?,
        })
    }
}

fn member_list(node: &XmlNode) -> Result<Vec<MemberListEntry>> {
    const SHAPE: &str = "listofallmembersType";
    Attrs::new(node, SHAPE).finish()?;
    elements(node, SHAPE)?
        .into_iter()
        .map(|child| match child.name() {
            "member" => MemberListEntry::from_node(child),
            other => Err(DoxyError::unknown_element(SHAPE, other)),
        })
        .collect()
}

// ============================================================================
// COMPOUND DEFINITION
// ============================================================================

/// Graphs attached to a compound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundGraphs {
    pub include: Option<Graph>,
    pub included_by: Option<Graph>,
    pub inheritance: Option<Graph>,
    pub collaboration: Option<Graph>,
}

/// A compound: class, namespace, file, folder, group, page, ...
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundDef {
    pub id: String,
    pub kind: CompoundKind,
    pub language: Option<String>,
    pub prot: Option<Protection>,
    pub is_final: bool,
    pub is_sealed: bool,
    pub is_abstract: bool,
    pub is_inline: bool,
    pub compound_name: String,
    pub title: Option<String>,
    pub base_refs: Vec<CompoundRef>,
    pub derived_refs: Vec<CompoundRef>,
    pub includes: Vec<IncludeRef>,
    pub included_by: Vec<IncludeRef>,
    pub inner: Vec<InnerRef>,
    pub qualifiers: Vec<String>,
    pub template_params: Vec<Param>,
    pub sections: Vec<SectionDef>,
    pub toc: Vec<TocSection>,
    pub requires_clause: Option<LinkedText>,
    pub initializer: Option<LinkedText>,
    pub brief: Description,
    pub detailed: Description,
    pub graphs: CompoundGraphs,
    pub program_listing: Option<ProgramListing>,
    pub location: Option<Location>,
    pub all_members: Vec<MemberListEntry>,
}

impl CompoundDef {
    /// Inner references of one kind, in document order.
    pub fn inner_of(&self, kind: InnerKind) -> impl Iterator<Item = &InnerRef> {
        self.inner.iter().filter(move |r| r.kind == kind)
    }

    /// Every member defined in this compound, across sections.
    pub fn members(&self) -> impl Iterator<Item = &MemberDef> {
        self.sections.iter().flat_map(|s| s.members.iter())
    }
}

impl FromNode for CompoundDef {
    const SHAPE: &'static str = "compounddefType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        const S: &str = CompoundDef::SHAPE;
        let mut attrs = Attrs::new(node, S);
        let id = attrs.required_non_empty("id")?.to_string();
        let kind = attrs.required_enum("kind")?;
        let language = attrs.optional_string("language");
        let prot = attrs.optional_enum("prot")?;
        let is_final = attrs.flag("final")?;
        let is_sealed = attrs.flag("sealed")?;
        let is_abstract = attrs.flag("abstract")?;
        let is_inline = attrs.flag("inline")?;
        attrs.finish()?;

        let mut compound_name = None;
        let mut title = None;
        let mut base_refs = Vec::new();
        let mut derived_refs = Vec::new();
        let mut includes = Vec::new();
        let mut included_by = Vec::new();
        let mut inner = Vec::new();
        let mut qualifiers = Vec::new();
        let mut template = None;
        let mut sections = Vec::new();
        let mut toc = None;
        let mut requires_clause = None;
        let mut initializer = None;
        let mut brief = None;
        let mut detailed = None;
        let mut graphs = CompoundGraphs::default();
        let mut program_listing = None;
        let mut location = None;
        let mut all_members = None;

        for child in elements(node, S)? {
            let tag = child.name();
            if let Some(inner_kind) = InnerKind::from_element(tag) {
                inner.push(InnerRef::parse(child, inner_kind)?);
                continue;
            }
            match tag {
                "compoundname" => set_once(&mut compound_name, leaf_text(child, S)?, S, tag)?,
                "title" => set_once(&mut title, leaf_text(child, S)?, S, tag)?,
                "basecompoundref" => base_refs.push(CompoundRef::from_node(child)?),
                "derivedcompoundref" => derived_refs.push(CompoundRef::from_node(child)?),
                "includes" => includes.push(IncludeRef::from_node(child)?),
                "includedby" => included_by.push(IncludeRef::from_node(child)?),
                "qualifier" => qualifiers.push(leaf_text(child, S)?),
                "templateparamlist" => set_once(&mut template, template_params(child)?, S, tag)?,
                "sectiondef" => sections.push(SectionDef::from_node(child)?),
                "tableofcontents" => set_once(&mut toc, table_of_contents(child)?, S, tag)?,
                "requiresclause" => set_once(&mut requires_clause, LinkedText::from_node(child)?, S, tag)?,
                "initializer" => set_once(&mut initializer, LinkedText::from_node(child)?, S, tag)?,
                "briefdescription" => set_once(&mut brief, Description::from_node(child)?, S, tag)?,
                "detaileddescription" => set_once(&mut detailed, Description::from_node(child)?, S, tag)?,
                "incdepgraph" => set_once(&mut graphs.include, Graph::from_node(child)?, S, tag)?,
                "invincdepgraph" => set_once(&mut graphs.included_by, Graph::from_node(child)?, S, tag)?,
                "inheritancegraph" => set_once(&mut graphs.inheritance, Graph::from_node(child)?, S, tag)?,
                "collaborationgraph" => {
                    set_once(&mut graphs.collaboration, Graph::from_node(child)?, S, tag)?
                }
                "programlisting" => set_once(&mut program_listing, ProgramListing::from_node(child)?, S, tag)?,
                "location" => set_once(&mut location, Location::from_node(child)?, S, tag)?,
                "listofallmembers" => set_once(&mut all_members, member_list(child)?, S, tag)?,
                other => return Err(DoxyError::unknown_element(S, other)),
            }
        }

        Ok(Self {
            id,
            kind,
            language,
            prot,
            is_final,
            is_sealed,
            is_abstract,
            is_inline,
            compound_name: compound_name
                .ok_or_else(|| DoxyError::missing_child("compounddef", "compoundname"))?,
            title,
            base_refs,
            derived_refs,
            includes,
            included_by,
            inner,
            qualifiers,
            template_params: template.unwrap_or_default(),
            sections,
            toc: toc.unwrap_or_default(),
            requires_clause,
            initializer,
            brief: brief.unwrap_or_else(|| Description::empty(DescriptionKind::Brief)),
            detailed: detailed.unwrap_or_else(|| Description::empty(DescriptionKind::Detailed)),
            graphs,
            program_listing,
            location,
            all_members: all_members.unwrap_or_default(),
        })
    }
}

/// Root of a compound document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DoxygenDocument {
    pub version: String,
    pub lang: Option<String>,
    pub compounds: Vec<CompoundDef>,
}

impl FromNode for DoxygenDocument {
    const SHAPE: &'static str = "DoxygenType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        if node.name() != "doxygen" {
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
                "compounddef" => compounds.push(CompoundDef::from_node(child)?),
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

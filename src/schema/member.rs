//! Member sections and member definitions.
//!
//! ```text
//! sectiondef(kind)
//!   ├─ header?        user-defined heading
//!   ├─ description?
//!   ├─ memberdef*     full definitions (compound pages)
//!   └─ member*        references to members defined elsewhere
//! ```

use super::description::{Description, DescriptionKind};
use super::keywords::{MemberKind, Protection, SectionDefKind, Virtualness};
use super::linked_text::LinkedText;
use super::read::{Attrs, FromNode, elements, leaf_text, set_once};
use crate::error::{DoxyError, Result};
use crate::xml::XmlNode;

// ============================================================================
// LOCATION
// ============================================================================

/// Where an entity is declared and defined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub decl_file: Option<String>,
    pub decl_line: Option<u32>,
    pub decl_column: Option<u32>,
    pub body_file: Option<String>,
    pub body_start: Option<i64>,
    pub body_end: Option<i64>,
}

impl FromNode for Location {
    const SHAPE: &'static str = "locationType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let location = Self {
            file: attrs.required("file")?.to_string(),
            line: attrs.number("line")?,
            column: attrs.number("column")?,
            decl_file: attrs.optional_string("declfile"),
            decl_line: attrs.number("declline")?,
            decl_column: attrs.number("declcolumn")?,
            body_file: attrs.optional_string("bodyfile"),
            body_start: attrs.number("bodystart")?,
            body_end: attrs.number("bodyend")?,
        };
        attrs.finish()?;
        if let Some(e) = node.elements().next() {
            return Err(DoxyError::unknown_element(Self::SHAPE, e.name()));
        }
        Ok(location)
    }
}

// ============================================================================
// PARAMETERS
// ============================================================================

/// A function or template parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub attributes: Option<String>,
    pub ty: Option<LinkedText>,
    pub declname: Option<String>,
    pub defname: Option<String>,
    pub array: Option<String>,
    pub defval: Option<LinkedText>,
    pub type_constraint: Option<LinkedText>,
    pub brief: Option<Description>,
}

impl Param {
    /// Declaration as written in a prototype: `const T & name = value`.
    pub fn declaration(&self) -> String {
        let mut out = String::new();
        if let Some(attributes) = &self.attributes {
            out.push_str(attributes);
            out.push(' ');
        }
        if let Some(ty) = &self.ty {
            out.push_str(ty.plain_text().trim());
        }
        if let Some(name) = self.declname.as_ref().or(self.defname.as_ref()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(name);
        }
        if let Some(array) = &self.array {
            out.push_str(array);
        }
        if let Some(defval) = &self.defval {
            out.push_str(" = ");
            out.push_str(defval.plain_text().trim());
        }
        out
    }
}

impl FromNode for Param {
    const SHAPE: &'static str = "paramType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut param = Self {
            attributes: None,
            ty: None,
            declname: None,
            defname: None,
            array: None,
            defval: None,
            type_constraint: None,
            brief: None,
        };
        for child in elements(node, Self::SHAPE)? {
            let name = child.name();
            match name {
                "attributes" => set_once(&mut param.attributes, leaf_text(child, Self::SHAPE)?, Self::SHAPE, name)?,
                "type" => set_once(&mut param.ty, LinkedText::from_node(child)?, Self::SHAPE, name)?,
                "declname" => set_once(&mut param.declname, leaf_text(child, Self::SHAPE)?, Self::SHAPE, name)?,
                "defname" => set_once(&mut param.defname, leaf_text(child, Self::SHAPE)?, Self::SHAPE, name)?,
                "array" => set_once(&mut param.array, leaf_text(child, Self::SHAPE)?, Self::SHAPE, name)?,
                "defval" => set_once(&mut param.defval, LinkedText::from_node(child)?, Self::SHAPE, name)?,
                "typeconstraint" => set_once(
                    &mut param.type_constraint,
                    LinkedText::from_node(child)?,
                    Self::SHAPE,
                    name,
                )?,
                "briefdescription" => set_once(&mut param.brief, Description::from_node(child)?, Self::SHAPE, name)?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(param)
    }
}

/// `<templateparamlist>`
pub(crate) fn template_params(node: &XmlNode) -> Result<Vec<Param>> {
    const SHAPE: &str = "templateparamlistType";
    Attrs::new(node, SHAPE).finish()?;
    let mut params = Vec::new();
    for child in elements(node, SHAPE)? {
        match child.name() {
            "param" => params.push(Param::from_node(child)?),
            other => return Err(DoxyError::unknown_element(SHAPE, other)),
        }
    }
    Ok(params)
}

/// `template <typename T, int N>` or an empty string.
pub fn template_header(params: &[Param]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let list: Vec<String> = params.iter().map(Param::declaration).collect();
    format!("template <{}>", list.join(", "))
}

// ============================================================================
// ENUM VALUES AND MEMBER LINKS
// ============================================================================

/// One enumerator.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub id: String,
    pub prot: Protection,
    pub name: String,
    pub initializer: Option<LinkedText>,
    pub brief: Description,
    pub detailed: Description,
}

impl FromNode for EnumValue {
    const SHAPE: &'static str = "enumvalueType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required_non_empty("id")?.to_string();
        let prot = attrs.required_enum("prot")?;
        attrs.finish()?;

        let mut name = None;
        let mut initializer = None;
        let mut brief = None;
        let mut detailed = None;
        for child in elements(node, Self::SHAPE)? {
            let tag = child.name();
            match tag {
                "name" => set_once(&mut name, leaf_text(child, Self::SHAPE)?, Self::SHAPE, tag)?,
                "initializer" => set_once(&mut initializer, LinkedText::from_node(child)?, Self::SHAPE, tag)?,
                "briefdescription" => set_once(&mut brief, Description::from_node(child)?, Self::SHAPE, tag)?,
                "detaileddescription" => set_once(&mut detailed, Description::from_node(child)?, Self::SHAPE, tag)?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            id,
            prot,
            name: name.ok_or_else(|| DoxyError::missing_child("enumvalue", "name"))?,
            initializer,
            brief: brief.unwrap_or_else(|| Description::empty(DescriptionKind::Brief)),
            detailed: detailed.unwrap_or_else(|| Description::empty(DescriptionKind::Detailed)),
        })
    }
}

/// `<reimplements>`, `<reimplementedby>`, `<references>`, `<referencedby>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberLink {
    pub refid: String,
    pub compound_ref: Option<String>,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
    pub text: String,
}

impl FromNode for MemberLink {
    const SHAPE: &'static str = "referenceType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let compound_ref = attrs.optional_string("compoundref");
        let start_line = attrs.number("startline")?;
        let end_line = attrs.number("endline")?;
        attrs.finish()?;
        if let Some(e) = node.elements().next() {
            return Err(DoxyError::unknown_element(Self::SHAPE, e.name()));
        }
        Ok(Self {
            refid,
            compound_ref,
            start_line,
            end_line,
            text: node.text(),
        })
    }
}

// ============================================================================
// MEMBER DEFINITION
// ============================================================================

/// Boolean qualifier attributes of `memberdef`, in label order.
pub const MEMBER_FLAGS: &[&str] = &[
    "static", "extern", "strong", "const", "explicit", "inline", "volatile", "mutable",
    "noexcept", "nodiscard", "constexpr", "consteval", "constinit", "final", "sealed", "new",
    "optional", "required", "readable", "writable", "initonly", "settable", "privatesettable",
    "protectedsettable", "gettable", "privategettable", "protectedgettable", "attribute",
    "property", "readonly", "bound", "removable", "constrained", "transient", "maybevoid",
    "maybedefault", "maybeambiguous", "add", "remove", "raise",
];

/// The set of qualifier flags that are `yes` on a member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberFlags(Vec<&'static str>);

impl MemberFlags {
    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| *f == flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A documented member.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberDef {
    pub id: String,
    pub kind: MemberKind,
    pub prot: Protection,
    pub virt: Option<Virtualness>,
    pub flags: MemberFlags,
    pub refqual: Option<String>,
    pub noexcept_expression: Option<String>,
    pub accessor: Option<String>,
    pub template_params: Vec<Param>,
    pub ty: Option<LinkedText>,
    pub definition: Option<String>,
    pub args: Option<String>,
    pub name: String,
    pub qualified_name: Option<String>,
    pub read: Option<String>,
    pub write: Option<String>,
    pub bitfield: Option<String>,
    pub reimplements: Vec<MemberLink>,
    pub reimplemented_by: Vec<MemberLink>,
    pub qualifiers: Vec<String>,
    pub params: Vec<Param>,
    pub enum_values: Vec<EnumValue>,
    pub requires_clause: Option<LinkedText>,
    pub initializer: Option<LinkedText>,
    pub exceptions: Option<LinkedText>,
    pub brief: Description,
    pub detailed: Description,
    pub in_body: Description,
    pub location: Option<Location>,
    pub references: Vec<MemberLink>,
    pub referenced_by: Vec<MemberLink>,
}

impl MemberDef {
    /// Qualifier labels shown next to the member definition.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.flags.iter().collect();
        match self.virt {
            Some(Virtualness::Virtual) => labels.push("virtual"),
            Some(Virtualness::PureVirtual) => labels.push("pure virtual"),
            _ => {}
        }
        match self.prot {
            Protection::Protected => labels.push("protected"),
            Protection::Private => labels.push("private"),
            Protection::Package => labels.push("package"),
            Protection::Public => {}
        }
        labels
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains("static")
    }

    /// Source-like prototype of the member.
    pub fn prototype(&self) -> String {
        let header = template_header(&self.template_params);
        let mut body = match self.kind {
            MemberKind::Define => {
                let mut s = format!("#define {}", self.name);
                if !self.params.is_empty() {
                    let names: Vec<String> = self.params.iter().map(Param::declaration).collect();
                    s.push_str(&format!("({})", names.join(", ")));
                }
                if let Some(init) = &self.initializer {
                    s.push(' ');
                    s.push_str(init.plain_text().trim());
                }
                s
            }
            MemberKind::Enum => {
                let mut s = String::from("enum ");
                if self.flags.contains("strong") {
                    s.push_str("class ");
                }
                s.push_str(&self.name);
                if let Some(ty) = self.ty.as_ref().filter(|t| !t.is_blank()) {
                    s.push_str(" : ");
                    s.push_str(ty.plain_text().trim());
                }
                s
            }
            _ => {
                let mut s = self
                    .definition
                    .clone()
                    .unwrap_or_else(|| self.name.clone());
                if let Some(args) = &self.args {
                    s.push_str(args);
                }
                if let Some(init) = self.initializer.as_ref().filter(|i| !i.is_blank()) {
                    s.push(' ');
                    s.push_str(init.plain_text().trim());
                }
                s
            }
        };
        if !header.is_empty() {
            body = format!("{header}\n{body}");
        }
        body
    }
}

impl FromNode for MemberDef {
    const SHAPE: &'static str = "memberdefType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required_non_empty("id")?.to_string();
        let kind = attrs.required_enum("kind")?;
        let prot = attrs.required_enum("prot")?;
        let virt = attrs.optional_enum("virt")?;
        let mut flags = Vec::new();
        for &flag in MEMBER_FLAGS {
            if attrs.flag(flag)? {
                flags.push(flag);
            }
        }
        let refqual = attrs.optional_string("refqual");
        let noexcept_expression = attrs.optional_string("noexceptexpression");
        let accessor = attrs.optional_string("accessor");
        attrs.finish()?;

        let mut template = None;
        let mut ty = None;
        let mut definition = None;
        let mut args = None;
        let mut name = None;
        let mut qualified_name = None;
        let mut read = None;
        let mut write = None;
        let mut bitfield = None;
        let mut reimplements = Vec::new();
        let mut reimplemented_by = Vec::new();
        let mut qualifiers = Vec::new();
        let mut params = Vec::new();
        let mut enum_values = Vec::new();
        let mut requires_clause = None;
        let mut initializer = None;
        let mut exceptions = None;
        let mut brief = None;
        let mut detailed = None;
        let mut in_body = None;
        let mut location = None;
        let mut references = Vec::new();
        let mut referenced_by = Vec::new();

        const S: &str = MemberDef::SHAPE;
        for child in elements(node, S)? {
            let tag = child.name();
            match tag {
                "templateparamlist" => set_once(&mut template, template_params(child)?, S, tag)?,
                "type" => set_once(&mut ty, LinkedText::from_node(child)?, S, tag)?,
                "definition" => set_once(&mut definition, leaf_text(child, S)?, S, tag)?,
                "argsstring" => set_once(&mut args, leaf_text(child, S)?, S, tag)?,
                "name" => set_once(&mut name, leaf_text(child, S)?, S, tag)?,
                "qualifiedname" => set_once(&mut qualified_name, leaf_text(child, S)?, S, tag)?,
                "read" => set_once(&mut read, leaf_text(child, S)?, S, tag)?,
                "write" => set_once(&mut write, leaf_text(child, S)?, S, tag)?,
                "bitfield" => set_once(&mut bitfield, leaf_text(child, S)?, S, tag)?,
                "reimplements" => reimplements.push(MemberLink::from_node(child)?),
                "reimplementedby" => reimplemented_by.push(MemberLink::from_node(child)?),
                "qualifier" => qualifiers.push(leaf_text(child, S)?),
                "param" => params.push(Param::from_node(child)?),
                "enumvalue" => enum_values.push(EnumValue::from_node(child)?),
                "requiresclause" => set_once(&mut requires_clause, LinkedText::from_node(child)?, S, tag)?,
                "initializer" => set_once(&mut initializer, LinkedText::from_node(child)?, S, tag)?,
                "exceptions" => set_once(&mut exceptions, LinkedText::from_node(child)?, S, tag)?,
                "briefdescription" => set_once(&mut brief, Description::from_node(child)?, S, tag)?,
                "detaileddescription" => set_once(&mut detailed, Description::from_node(child)?, S, tag)?,
                "inbodydescription" => set_once(&mut in_body, Description::from_node(child)?, S, tag)?,
                "location" => set_once(&mut location, Location::from_node(child)?, S, tag)?,
                "references" => references.push(MemberLink::from_node(child)?),
                "referencedby" => referenced_by.push(MemberLink::from_node(child)?),
                other => return Err(DoxyError::unknown_element(S, other)),
            }
        }

        Ok(Self {
            id,
            kind,
            prot,
            virt,
            flags: MemberFlags(flags),
            refqual,
            noexcept_expression,
            accessor,
            template_params: template.unwrap_or_default(),
            ty,
            definition,
            args,
            name: name.ok_or_else(|| DoxyError::missing_child("memberdef", "name"))?,
            qualified_name,
            read,
            write,
            bitfield,
            reimplements,
            reimplemented_by,
            qualifiers,
            params,
            enum_values,
            requires_clause,
            initializer,
            exceptions,
            brief: brief.unwrap_or_else(|| Description::empty(DescriptionKind::Brief)),
            detailed: detailed.unwrap_or_else(|| Description::empty(DescriptionKind::Detailed)),
            in_body: in_body.unwrap_or_else(|| Description::empty(DescriptionKind::InBody)),
            location,
            references,
            referenced_by,
        })
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

/// `<member refid kind>` inside a section: a member defined on another page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRef {
    pub refid: String,
    pub kind: MemberKind,
    pub name: String,
}

impl FromNode for MemberRef {
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

/// A member section as emitted by Doxygen.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDef {
    pub kind: SectionDefKind,
    pub header: Option<String>,
    pub description: Option<Description>,
    pub members: Vec<MemberDef>,
    pub member_refs: Vec<MemberRef>,
}

impl FromNode for SectionDef {
    const SHAPE: &'static str = "sectiondefType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let kind = attrs.required_enum("kind")?;
        attrs.finish()?;

        let mut header = None;
        let mut description = None;
        let mut members = Vec::new();
        let mut member_refs = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            let tag = child.name();
            match tag {
                "header" => set_once(&mut header, leaf_text(child, Self::SHAPE)?, Self::SHAPE, tag)?,
                "description" => set_once(
                    &mut description,
                    Description::parse_as(child, DescriptionKind::Detailed)?,
                    Self::SHAPE,
                    tag,
                )?,
                "memberdef" => members.push(MemberDef::from_node(child)?),
                "member" => member_refs.push(MemberRef::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            kind,
            header,
            description,
            members,
            member_refs,
        })
    }
}

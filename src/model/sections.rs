//! Section organizer.
//!
//! Doxygen groups members by declared kind (`public-func`, `protected-attrib`,
//! ...). Pages want finer sections: constructors, destructors and operators
//! are split out of the member functions, and sections with the same scope
//! and category are merged.
//!
//! ```text
//! sectiondef(public-func)  ─┬─▶ (Public, Constructor)  "Public Constructors"
//!   Foo(), ~Foo(),          ├─▶ (Public, Destructor)   "Public Destructor"
//!   operator==, run()       ├─▶ (Public, Operator)     "Public Operators"
//!                           └─▶ (Public, Function)     "Public Member Functions"
//! ```

use indexmap::IndexMap;

use crate::base::member_anchor;
use crate::schema::{
    CompoundDef, Description, MemberDef, MemberKind, MemberRef, SectionDef, SectionDefKind,
};

// ============================================================================
// SCOPES AND CATEGORIES
// ============================================================================

/// Visibility scope of a section, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionScope {
    Public,
    PublicStatic,
    Protected,
    ProtectedStatic,
    Package,
    PackageStatic,
    Private,
    PrivateStatic,
    Global,
    Related,
}

impl SectionScope {
    fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::PublicStatic => "Public Static",
            Self::Protected => "Protected",
            Self::ProtectedStatic => "Protected Static",
            Self::Package => "Package",
            Self::PackageStatic => "Package Static",
            Self::Private => "Private",
            Self::PrivateStatic => "Private Static",
            Self::Global => "",
            Self::Related => "Related",
        }
    }

    fn is_static(self) -> bool {
        matches!(
            self,
            Self::PublicStatic | Self::ProtectedStatic | Self::PackageStatic | Self::PrivateStatic
        )
    }
}

/// What a section lists, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberCategory {
    Typedef,
    Enum,
    Constructor,
    Destructor,
    Operator,
    Function,
    Signal,
    Slot,
    Property,
    Event,
    Attribute,
    Friend,
    Define,
    Prototype,
    Other,
}

/// Characters that may directly follow `operator` in an operator name.
const OPERATOR_CHARS: &str = "=!<>+-*/%&|^~,\"([";

impl MemberCategory {
    /// The category a member is listed under on its owner's page.
    pub fn for_member(kind: MemberKind, name: &str, owner: &str) -> Self {
        match kind {
            MemberKind::Function => function_category(name, owner),
            MemberKind::Variable => Self::Attribute,
            MemberKind::Typedef => Self::Typedef,
            MemberKind::Enum => Self::Enum,
            MemberKind::Signal => Self::Signal,
            MemberKind::Slot => Self::Slot,
            MemberKind::Property => Self::Property,
            MemberKind::Event => Self::Event,
            MemberKind::Friend => Self::Friend,
            MemberKind::Define => Self::Define,
            MemberKind::Prototype => Self::Prototype,
            MemberKind::Dcop | MemberKind::Interface | MemberKind::Service => Self::Other,
        }
    }
}

fn function_category(name: &str, owner: &str) -> MemberCategory {
    let class = strip_template_args(owner.rsplit("::").next().unwrap_or(owner));
    let name = strip_template_args(name);
    if !class.is_empty() && name == class {
        return MemberCategory::Constructor;
    }
    if name.strip_prefix('~').is_some_and(|rest| rest == class) {
        return MemberCategory::Destructor;
    }
    if let Some(rest) = name.strip_prefix("operator") {
        let symbolic = rest.chars().next().is_some_and(|c| OPERATOR_CHARS.contains(c));
        let allocation = rest
            .strip_prefix(' ')
            .is_some_and(|r| r.starts_with("new") || r.starts_with("delete"));
        if symbolic || allocation {
            return MemberCategory::Operator;
        }
    }
    MemberCategory::Function
}

fn strip_template_args(name: &str) -> &str {
    match name.find('<') {
        Some(pos) if !name.starts_with("operator") => name[..pos].trim_end(),
        _ => name,
    }
}

/// Scope of a Doxygen section kind; `None` for user-defined sections.
pub fn scope_of(kind: SectionDefKind) -> Option<SectionScope> {
    use SectionDefKind as K;
    let scope = match kind {
        K::UserDefined => return None,
        K::PublicType | K::PublicFunc | K::PublicAttrib | K::PublicSlot => SectionScope::Public,
        K::Signal | K::DcopFunc | K::Property | K::Event | K::Friend => SectionScope::Public,
        K::PublicStaticFunc | K::PublicStaticAttrib => SectionScope::PublicStatic,
        K::ProtectedType | K::ProtectedFunc | K::ProtectedAttrib | K::ProtectedSlot => {
            SectionScope::Protected
        }
        K::ProtectedStaticFunc | K::ProtectedStaticAttrib => SectionScope::ProtectedStatic,
        K::PackageType | K::PackageFunc | K::PackageAttrib => SectionScope::Package,
        K::PackageStaticFunc | K::PackageStaticAttrib => SectionScope::PackageStatic,
        K::PrivateType | K::PrivateFunc | K::PrivateAttrib | K::PrivateSlot => SectionScope::Private,
        K::PrivateStaticFunc | K::PrivateStaticAttrib => SectionScope::PrivateStatic,
        K::Related => SectionScope::Related,
        K::Define | K::Prototype | K::Typedef | K::Enum | K::Func | K::Var => SectionScope::Global,
    };
    Some(scope)
}

/// Heading of a merged section.
pub fn heading(scope: SectionScope, category: MemberCategory) -> String {
    use MemberCategory as C;
    if scope == SectionScope::Global {
        return match category {
            C::Typedef => "Typedefs",
            C::Enum => "Enumerations",
            C::Constructor => "Constructors",
            C::Destructor => "Destructors",
            C::Operator => "Operators",
            C::Function => "Functions",
            C::Attribute => "Variables",
            C::Define => "Macro Definitions",
            C::Prototype => "Prototypes",
            C::Friend => "Friends",
            _ => "Other Members",
        }
        .to_string();
    }
    let noun = match category {
        C::Typedef => "Member Typedefs",
        C::Enum => "Member Enumerations",
        C::Constructor => "Constructors",
        C::Destructor => "Destructor",
        C::Operator => "Operators",
        C::Function if scope.is_static() || scope == SectionScope::Related => "Functions",
        C::Function => "Member Functions",
        C::Attribute if scope.is_static() => "Attributes",
        C::Attribute if scope == SectionScope::Related => "Variables",
        C::Attribute => "Member Attributes",
        C::Slot => "Slots",
        C::Signal => return "Signals".to_string(),
        C::Property => return "Properties".to_string(),
        C::Event => return "Events".to_string(),
        C::Friend => return "Friends".to_string(),
        C::Define => return "Macro Definitions".to_string(),
        C::Prototype => return "Prototypes".to_string(),
        C::Other => "Members",
    };
    format!("{} {}", scope.label(), noun)
}

// ============================================================================
// ORGANIZED SECTIONS
// ============================================================================

/// A member as listed on its owner's page.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub category: MemberCategory,
    pub anchor: String,
    pub def: MemberDef,
}

/// How a section came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// A `\name` group, kept as written.
    UserDefined,
    /// Members of one scope and category, merged across Doxygen sections.
    Organized {
        scope: SectionScope,
        category: MemberCategory,
    },
}

/// A section of a compound page.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    pub description: Option<Description>,
    pub members: Vec<Member>,
    /// Members defined on another page.
    pub references: Vec<MemberRef>,
}

impl Section {
    fn sort_key(&self) -> (u8, Option<MemberCategory>, Option<SectionScope>) {
        match self.kind {
            SectionKind::UserDefined => (0, None, None),
            SectionKind::Organized { scope, category } => (1, Some(category), Some(scope)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.references.is_empty()
    }
}

/// Regroup a compound's sections.
///
/// User-defined sections keep their header and relative order and come
/// first; every other member lands in the `(scope, category)` section its
/// kind and name select. The result is stably sorted.
pub fn organize(def: &CompoundDef) -> Vec<Section> {
    // Constructors and destructors only exist on class pages.
    let owner = if def.kind.is_class_like() {
        def.compound_name.as_str()
    } else {
        ""
    };
    let mut user_defined = Vec::new();
    let mut merged: IndexMap<(SectionScope, MemberCategory), Section> = IndexMap::new();

    for section in &def.sections {
        let Some(scope) = scope_of(section.kind) else {
            user_defined.push(user_section(section, owner));
            continue;
        };
        for member in &section.members {
            let category = MemberCategory::for_member(member.kind, &member.name, owner);
            merged_section(&mut merged, scope, category)
                .members
                .push(to_member(member, category));
        }
        for reference in &section.member_refs {
            let category = MemberCategory::for_member(reference.kind, &reference.name, owner);
            merged_section(&mut merged, scope, category)
                .references
                .push(reference.clone());
        }
    }

    let mut sections: Vec<Section> = user_defined;
    sections.extend(merged.into_values());
    sections.sort_by_key(Section::sort_key);
    sections
}

fn merged_section(
    merged: &mut IndexMap<(SectionScope, MemberCategory), Section>,
    scope: SectionScope,
    category: MemberCategory,
) -> &mut Section {
    merged.entry((scope, category)).or_insert_with(|| Section {
        kind: SectionKind::Organized { scope, category },
        heading: heading(scope, category),
        description: None,
        members: Vec::new(),
        references: Vec::new(),
    })
}

fn user_section(section: &SectionDef, owner: &str) -> Section {
    Section {
        kind: SectionKind::UserDefined,
        heading: section
            .header
            .clone()
            .unwrap_or_else(|| "Other Members".to_string()),
        description: section.description.clone(),
        members: section
            .members
            .iter()
            .map(|m| to_member(m, MemberCategory::for_member(m.kind, &m.name, owner)))
            .collect(),
        references: section.member_refs.clone(),
    }
}

fn to_member(def: &MemberDef, category: MemberCategory) -> Member {
    Member {
        category,
        anchor: member_anchor(&def.id).to_string(),
        def: def.clone(),
    }
}

//! Compound entities: one per registered compound, fully initialized by
//! [`SiteBuilder::build`](super::SiteBuilder::build).

use super::collections::CollectionKind;
use super::sections::Section;
use crate::base::CompoundId;
use crate::base::constants::{PATH_SEPARATOR, SCOPE_SEPARATOR};
use crate::schema::{CompoundDef, CompoundKind};

/// A compound placed in the hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct Compound {
    pub id: CompoundId,
    pub kind: CompoundKind,
    pub collection: CollectionKind,
    /// Qualified name (`ns::Widget`, `src/util`).
    pub name: String,
    /// Last segment of the qualified name.
    pub short_name: String,
    pub title: Option<String>,
    pub parents: Vec<CompoundId>,
    pub children: Vec<CompoundId>,
    /// Path below the collection route; absent for anonymous entities and
    /// their descendants, which get no page.
    pub permalink: Option<String>,
    /// Full page URL, `/{base}/{collection}/{permalink}`.
    pub url: Option<String>,
    pub sections: Vec<Section>,
    /// Rendered brief description (inline MDX).
    pub brief: String,
    /// Rendered detailed description (MDX lines).
    pub detailed: Vec<String>,
    pub def: CompoundDef,
}

impl Compound {
    /// Returns true if the compound has a page.
    pub fn is_navigable(&self) -> bool {
        self.permalink.is_some()
    }

    pub fn is_top_level(&self) -> bool {
        self.parents.is_empty()
    }

    /// Title shown at the top of the compound's page.
    pub fn page_title(&self) -> String {
        match self.kind {
            CompoundKind::Group | CompoundKind::Page => self
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| self.name.clone()),
            CompoundKind::File => format!("{} File Reference", self.short_name),
            CompoundKind::Dir => format!("{} Folder Reference", self.name),
            kind => format!("{} {} Reference", self.name, kind.label()),
        }
    }
}

/// Last segment of a qualified compound name.
pub(crate) fn short_name(def: &CompoundDef) -> String {
    let name = def.compound_name.as_str();
    let segment = match def.kind {
        CompoundKind::File | CompoundKind::Dir => name
            .trim_end_matches(PATH_SEPARATOR)
            .rsplit(PATH_SEPARATOR)
            .next(),
        CompoundKind::Group | CompoundKind::Page => Some(name),
        _ => name.rsplit(SCOPE_SEPARATOR).next(),
    };
    segment.unwrap_or(name).to_string()
}

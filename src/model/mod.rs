//! Compound model: registry, hierarchy, permalinks, sections and links.
//!
//! ```text
//! CompoundDef* ──▶ SiteBuilder ──build──▶ Site
//!                                          ├─ Compound (parents, children, permalink, sections)
//!                                          └─ LinkIndex (refid → page URL)
//! ```

mod builder;
mod collections;
mod compound;
mod hierarchy;
mod links;
pub mod permalink;
pub mod sections;
mod site;

#[cfg(test)]
mod tests;

pub use builder::SiteBuilder;
pub use collections::{CollectionKind, page_url};
pub use compound::Compound;
pub use hierarchy::Hierarchy;
pub use links::LinkIndex;
pub use sections::{
    Member, MemberCategory, Section, SectionKind, SectionScope, heading, organize, scope_of,
};
pub use site::Site;

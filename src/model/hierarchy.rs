//! Parent/child graphs over the registered compounds.
//!
//! ```text
//! Classes      derivedcompoundref      several parents (a DAG)
//! Namespaces   innernamespace          one parent
//! Groups       innergroup              one parent
//! Files        innerdir / innerfile    one parent (the folder)
//! Pages        innerpage               one parent
//! ```
//!
//! The main page lists every top-level page as inner page; those stay
//! top-level.
//!
//! Edges are kept in insertion-ordered sets, so running a pass twice adds
//! nothing the first run did not.

use indexmap::{IndexMap, IndexSet};
use tracing::{trace, warn};

use super::collections::CollectionKind;
use crate::base::CompoundId;
use crate::base::constants::MAIN_PAGE_ID;
use crate::schema::{CompoundDef, CompoundKind, InnerKind};

/// Resolved parent and child sets for every compound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hierarchy {
    parents: IndexMap<CompoundId, IndexSet<CompoundId>>,
    children: IndexMap<CompoundId, IndexSet<CompoundId>>,
}

impl Hierarchy {
    /// Run every pass over a registry.
    pub fn build(defs: &IndexMap<CompoundId, CompoundDef>) -> Self {
        let mut hierarchy = Self::default();
        hierarchy.link_classes(defs);
        hierarchy.link_trees(defs);
        hierarchy
    }

    /// Add `parent → child`. Returns false if the edge already existed.
    pub fn add_edge(&mut self, parent: &CompoundId, child: &CompoundId) -> bool {
        let new_parent = self
            .parents
            .entry(child.clone())
            .or_default()
            .insert(parent.clone());
        let new_child = self
            .children
            .entry(parent.clone())
            .or_default()
            .insert(child.clone());
        new_parent || new_child
    }

    pub fn parents_of(&self, id: &str) -> impl Iterator<Item = &CompoundId> {
        self.parents.get(id).into_iter().flatten()
    }

    pub fn children_of(&self, id: &str) -> impl Iterator<Item = &CompoundId> {
        self.children.get(id).into_iter().flatten()
    }

    /// The single tree parent, for collections where there is one.
    pub fn parent_of(&self, id: &str) -> Option<&CompoundId> {
        self.parents.get(id).and_then(|p| p.first())
    }

    pub fn is_top_level(&self, id: &str) -> bool {
        self.parents.get(id).is_none_or(IndexSet::is_empty)
    }

    /// Classes: each resolvable derived class gets the current class as a
    /// parent.
    pub fn link_classes(&mut self, defs: &IndexMap<CompoundId, CompoundDef>) {
        for (id, def) in defs.iter().filter(|(_, d)| d.kind.is_class_like()) {
            for derived in &def.derived_refs {
                let Some(target) = derived.refid.as_deref() else {
                    continue;
                };
                match defs.get_key_value(target) {
                    Some((target_id, target_def)) if target_def.kind.is_class_like() => {
                        if self.add_edge(id, target_id) {
                            trace!("[HIERARCHY] class {} -> {}", id, target_id);
                        }
                    }
                    Some(_) => warn!(
                        "Class {} lists non-class {} as derived, ignored",
                        id, target
                    ),
                    None => warn!("Derived class {} of {} is not documented", target, id),
                }
            }
        }
    }

    /// Namespaces, groups, folders, files and pages: single-parent trees.
    pub fn link_trees(&mut self, defs: &IndexMap<CompoundId, CompoundDef>) {
        for (id, def) in defs {
            let Some(collection) = CollectionKind::for_kind(def.kind) else {
                continue;
            };
            if collection.is_multi_parent() || id.as_str() == MAIN_PAGE_ID {
                continue;
            }
            for inner in def.inner.iter().filter(|r| defines_tree(def.kind, r.kind)) {
                let Some((child_id, child_def)) = defs.get_key_value(inner.refid.as_str()) else {
                    warn!("Inner compound {} of {} is not documented", inner.refid, id);
                    continue;
                };
                if CollectionKind::for_kind(child_def.kind) != Some(collection) {
                    continue;
                }
                self.set_single_parent(id, child_id);
            }
        }
    }

    fn set_single_parent(&mut self, parent: &CompoundId, child: &CompoundId) {
        if child == parent {
            warn!("Compound {} lists itself as a child, ignored", child);
            return;
        }
        if let Some(existing) = self.parent_of(child.as_str()).filter(|p| *p != parent) {
            warn!(
                "Compound {} already has parent {}, ignoring second parent {}",
                child, existing, parent
            );
            return;
        }
        if self.add_edge(parent, child) {
            trace!("[HIERARCHY] {} -> {}", parent, child);
        }
    }
}

/// Which inner references define the tree of a compound kind.
fn defines_tree(owner: CompoundKind, inner: InnerKind) -> bool {
    matches!(
        (owner, inner),
        (CompoundKind::Namespace, InnerKind::Namespace)
            | (CompoundKind::Group, InnerKind::Group)
            | (CompoundKind::Dir, InnerKind::Dir)
            | (CompoundKind::Dir, InnerKind::File)
            | (CompoundKind::Page, InnerKind::Page)
    )
}

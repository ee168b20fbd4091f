//! The linked, immutable documentation tree.

use std::collections::VecDeque;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::warn;

use super::collections::CollectionKind;
use super::compound::Compound;
use super::links::LinkIndex;
use crate::base::CompoundId;
use crate::config::{DoxygenConfig, SiteOptions};
use crate::error::{DoxyError, Result};
use crate::render;
use crate::schema::RefKind;

/// Every registered compound, linked and ready to render.
#[derive(Clone, Debug)]
pub struct Site {
    options: SiteOptions,
    config: DoxygenConfig,
    compounds: IndexMap<CompoundId, Compound>,
    links: LinkIndex,
}

impl Site {
    pub(crate) fn new(
        options: SiteOptions,
        config: DoxygenConfig,
        compounds: IndexMap<CompoundId, Compound>,
        links: LinkIndex,
    ) -> Self {
        Self {
            options,
            config,
            compounds,
            links,
        }
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    pub fn config(&self) -> &DoxygenConfig {
        &self.config
    }

    pub fn links(&self) -> &LinkIndex {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Project name for page headers, from `PROJECT_NAME`.
    pub fn project_name(&self) -> Option<&str> {
        self.config.project_name()
    }

    /// Site options take precedence over `PROJECT_BRIEF`.
    pub fn project_brief(&self) -> Option<&str> {
        self.options
            .project_brief
            .as_deref()
            .or_else(|| self.config.project_brief())
    }

    pub fn get(&self, id: &str) -> Option<&Compound> {
        self.compounds.get(id)
    }

    /// Like [`Site::get`], but an unknown id is an error.
    pub fn compound(&self, id: &str) -> Result<&Compound> {
        self.get(id)
            .ok_or_else(|| DoxyError::UnknownCompound(id.to_string()))
    }

    /// All compounds in registration order.
    pub fn compounds(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.values()
    }

    pub fn collection(&self, kind: CollectionKind) -> impl Iterator<Item = &Compound> {
        self.compounds().filter(move |c| c.collection == kind)
    }

    /// Roots of a collection's tree.
    pub fn top_level(&self, kind: CollectionKind) -> impl Iterator<Item = &Compound> {
        self.collection(kind).filter(|c| c.is_top_level())
    }

    /// Children of a compound, skipping ids that are not registered.
    pub fn children_of<'a>(&'a self, compound: &'a Compound) -> impl Iterator<Item = &'a Compound> {
        compound.children.iter().filter_map(|id| self.get(id.as_str()))
    }

    /// Page URL of a compound; `None` when it has no page or is unknown.
    pub fn page_permalink(&self, id: &str) -> Option<&str> {
        self.links.page_url(id)
    }

    /// Resolve a reference as seen from the page of `current`.
    pub fn resolve_reference(
        &self,
        refid: &str,
        kind: RefKind,
        current: Option<&str>,
    ) -> Result<Option<String>> {
        self.links.resolve(refid, kind, current)
    }

    /// Every compound with a page, parents before children.
    ///
    /// Class parents form a DAG; a class is yielded once all of its base
    /// classes with pages have been. Compounds caught in a cycle are
    /// appended at the end.
    pub fn walk(&self) -> Vec<&Compound> {
        let mut pending: FxHashMap<&str, usize> = FxHashMap::default();
        let mut queue = VecDeque::new();
        for compound in self.compounds().filter(|c| c.is_navigable()) {
            let waiting = compound
                .parents
                .iter()
                .filter(|p| self.get(p.as_str()).is_some_and(Compound::is_navigable))
                .count();
            if waiting == 0 {
                queue.push_back(compound);
            } else {
                pending.insert(compound.id.as_str(), waiting);
            }
        }

        let mut order = Vec::with_capacity(self.compounds.len());
        while let Some(compound) = queue.pop_front() {
            order.push(compound);
            for child in self.children_of(compound) {
                let Some(waiting) = pending.get_mut(child.id.as_str()) else {
                    continue;
                };
                *waiting -= 1;
                if *waiting == 0 {
                    pending.remove(child.id.as_str());
                    queue.push_back(child);
                }
            }
        }

        if !pending.is_empty() {
            warn!("{} compounds are part of a parent cycle", pending.len());
            order.extend(
                self.compounds()
                    .filter(|c| pending.contains_key(c.id.as_str())),
            );
        }
        order
    }

    /// Render the MDX page of a compound.
    pub fn render_page(&self, id: &str) -> Result<String> {
        Ok(render::page::join_lines(self.render_page_lines(id)?))
    }

    /// Render the MDX page of a compound as lines, without line terminators.
    pub fn render_page_lines(&self, id: &str) -> Result<Vec<String>> {
        let compound = self.compound(id)?;
        if !compound.is_navigable() {
            return Err(DoxyError::MissingPermalink(id.to_string()));
        }
        render::page::render_page_lines(self, compound)
    }

    /// Render the MDX index page of a collection.
    pub fn render_index(&self, collection: CollectionKind) -> Result<String> {
        render::index::render_index(self, collection)
    }
}

//! Two-phase construction of a [`Site`].
//!
//! ```text
//! SiteBuilder::add_compound ─┐   (ingestion: ids only, no links)
//! SiteBuilder::add_document ─┘
//!          │
//!          ▼ build(self)
//!   hierarchy ─▶ permalinks ─▶ link index ─▶ sections ─▶ descriptions
//!          │
//!          ▼
//!        Site   (immutable, fully linked)
//! ```
//!
//! `build` consumes the builder, so the link passes run exactly once.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use super::collections::CollectionKind;
use super::compound::{Compound, short_name};
use super::hierarchy::Hierarchy;
use super::links::LinkIndex;
use super::permalink;
use super::sections::organize;
use super::site::Site;
use crate::base::CompoundId;
use crate::config::{DoxygenConfig, SiteOptions};
use crate::error::Result;
use crate::render::{RenderContext, description_fragment, description_lines};
use crate::schema::{CompoundDef, DoxygenDocument, Keyword};

/// Registry of compound definitions awaiting linking.
#[derive(Debug, Default)]
pub struct SiteBuilder {
    options: SiteOptions,
    config: DoxygenConfig,
    defs: IndexMap<CompoundId, CompoundDef>,
    skipped: usize,
}

impl SiteBuilder {
    pub fn new(options: SiteOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: DoxygenConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of registered compounds.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Register one compound. Returns the collection it was filed under, or
    /// `None` if its kind is not tracked or its id is already taken.
    pub fn add_compound(&mut self, def: CompoundDef) -> Option<CollectionKind> {
        let Some(collection) = CollectionKind::for_kind(def.kind) else {
            warn!(
                "Skipping {} {}: kind is not tracked",
                def.kind.keyword(),
                def.id
            );
            self.skipped += 1;
            return None;
        };
        if self.defs.contains_key(def.id.as_str()) {
            warn!("Duplicate compound id {}, keeping the first definition", def.id);
            return None;
        }
        debug!("Registered {} {} ({})", def.kind.keyword(), def.id, def.compound_name);
        self.defs.insert(CompoundId::new(def.id.as_str()), def);
        Some(collection)
    }

    /// Register every compound of a document.
    pub fn add_document(&mut self, document: DoxygenDocument) {
        for def in document.compounds {
            self.add_compound(def);
        }
    }

    /// Link everything and produce the immutable site.
    pub fn build(self) -> Result<Site> {
        self.options.validate()?;
        let route = self.options.route().to_string();

        let hierarchy = Hierarchy::build(&self.defs);
        let mut permalinks = permalink::compute(&self.defs, &hierarchy);

        let mut links = LinkIndex::new();
        for (id, def) in &self.defs {
            let Some(collection) = CollectionKind::for_kind(def.kind) else {
                continue;
            };
            match permalinks.get(id).and_then(Option::as_deref) {
                None if permalink::is_hidden(id, &self.defs, &hierarchy) => {
                    links.insert_hidden(id.clone(), collection);
                }
                permalink => links.insert(id.clone(), collection, &route, permalink),
            }
        }

        let mut compounds = IndexMap::with_capacity(self.defs.len());
        for (id, def) in self.defs {
            let Some(collection) = CollectionKind::for_kind(def.kind) else {
                continue;
            };
            let permalink = permalinks.swap_remove(&id).flatten();
            let url = links.page_url(id.as_str()).map(str::to_string);

            let (brief, detailed) = if permalink.is_some() {
                let cx = RenderContext::new(&links, Some(id.as_str()));
                (
                    description_fragment(&def.brief, &cx)?,
                    description_lines(&def.detailed, &cx)?,
                )
            } else {
                (String::new(), Vec::new())
            };

            let compound = Compound {
                kind: def.kind,
                collection,
                name: def.compound_name.clone(),
                short_name: short_name(&def),
                title: def.title.clone(),
                parents: hierarchy.parents_of(id.as_str()).cloned().collect(),
                children: hierarchy.children_of(id.as_str()).cloned().collect(),
                permalink,
                url,
                sections: organize(&def),
                brief,
                detailed,
                def,
                id: id.clone(),
            };
            compounds.insert(id, compound);
        }

        let navigable = compounds.values().filter(|c| c.is_navigable()).count();
        info!(
            "Built site with {} compounds ({} with pages, {} skipped)",
            compounds.len(),
            navigable,
            self.skipped
        );

        Ok(Site::new(self.options, self.config, compounds, links))
    }
}

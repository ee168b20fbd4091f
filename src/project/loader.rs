//! Loads a Doxygen XML output directory.
//!
//! ```text
//! index.xml ──▶ tracked refids ──par_iter──▶ <refid>.xml ──▶ DoxygenDocument
//!                                                              │ (index order)
//! Doxyfile.xml ──▶ DoxygenConfig ──────────────▶ SiteBuilder ◀─┘ ──▶ Site
//! ```
//!
//! Only parsing runs in parallel. Documents are registered in index order so
//! duplicate handling and sibling order do not depend on thread scheduling.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::base::constants::{COMPOUND_EXTENSION, DOXYFILE_FILE, INDEX_FILE};
use crate::config::{DoxygenConfig, SiteOptions};
use crate::error::{DoxyError, Result};
use crate::model::{CollectionKind, Site, SiteBuilder};
use crate::schema::{Doxyfile, DoxygenDocument, DoxygenIndex, read_document};

/// Read `index.xml`, parse every tracked compound document and build the site.
pub fn load_site(dir: impl AsRef<Path>, options: SiteOptions) -> Result<Site> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(DoxyError::config(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    let index = load_index(dir)?;
    let config = load_config(dir)?.unwrap_or_default();
    let refids = tracked_refids(&index);

    let documents: Vec<DoxygenDocument> = refids
        .par_iter()
        .map(|refid| {
            let path = dir.join(format!("{refid}.{COMPOUND_EXTENSION}"));
            let document = read_document(&read_file(&path)?)?;
            debug!("Loaded {}", path.display());
            Ok(document)
        })
        .collect::<Result<_>>()?;

    let mut builder = SiteBuilder::new(options).with_config(config);
    for document in documents {
        builder.add_document(document);
    }
    info!(
        "Loaded {} compound documents from {}",
        refids.len(),
        dir.display()
    );
    builder.build()
}

/// Parse `index.xml` in `dir`.
pub fn load_index(dir: impl AsRef<Path>) -> Result<DoxygenIndex> {
    let path = dir.as_ref().join(INDEX_FILE);
    read_document(&read_file(&path)?)
}

/// Parse `Doxyfile.xml` in `dir`, if Doxygen wrote one.
pub fn load_config(dir: impl AsRef<Path>) -> Result<Option<DoxygenConfig>> {
    let path = dir.as_ref().join(DOXYFILE_FILE);
    if !path.is_file() {
        debug!("No {} in {}", DOXYFILE_FILE, dir.as_ref().display());
        return Ok(None);
    }
    let doxyfile: Doxyfile = read_document(&read_file(&path)?)?;
    Ok(Some(DoxygenConfig::from_doxyfile(&doxyfile)))
}

/// Ids of the indexed compounds whose kind belongs to a collection, in index
/// order and without repeats.
pub fn tracked_refids(index: &DoxygenIndex) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut refids = Vec::new();
    for compound in &index.compounds {
        if CollectionKind::for_kind(compound.kind).is_none() {
            debug!("Not loading {} ({})", compound.refid, compound.name);
            continue;
        }
        if !seen.insert(compound.refid.as_str()) {
            warn!("{} is listed twice in {}", compound.refid, INDEX_FILE);
            continue;
        }
        refids.push(compound.refid.clone());
    }
    refids
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        warn!("Failed to read {}: {}", path.display(), e);
        DoxyError::Io(e)
    })
}

//! Collection index pages: the collection's tree as a nested list.

use tracing::warn;

use super::escape::escape_text;
use super::fragments::link;
use crate::error::Result;
use crate::model::{CollectionKind, Compound, Site};

pub(crate) fn render_index(site: &Site, collection: CollectionKind) -> Result<String> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    for root in site.top_level(collection).filter(|c| c.is_navigable()) {
        entry_lines(site, root, &mut path, &mut out);
    }
    if out.is_empty() {
        return Ok(String::new());
    }
    let mut page = out.join("\n");
    page.push('\n');
    Ok(page)
}

fn entry_lines<'a>(
    site: &'a Site,
    compound: &'a Compound,
    path: &mut Vec<&'a str>,
    out: &mut Vec<String>,
) {
    let indent = "  ".repeat(path.len());
    let label = link(&escape_text(&index_label(compound)), compound.url.clone());
    if compound.brief.is_empty() {
        out.push(format!("{indent}- {label}"));
    } else {
        out.push(format!("{indent}- {label}: {}", compound.brief));
    }

    path.push(compound.id.as_str());
    for child in site.children_of(compound).filter(|c| c.is_navigable()) {
        if path.contains(&child.id.as_str()) {
            warn!("Skipping {} below {}: cycle", child.id, compound.id);
            continue;
        }
        entry_lines(site, child, path, out);
    }
    path.pop();
}

/// Name shown in the index: classes by qualified name, tree entries by their
/// own segment, pages and groups by title.
fn index_label(compound: &Compound) -> String {
    match compound.collection {
        CollectionKind::Classes => compound.name.clone(),
        CollectionKind::Namespaces | CollectionKind::Files => compound.short_name.clone(),
        CollectionKind::Groups | CollectionKind::Pages => compound.page_title(),
    }
}

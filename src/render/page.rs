//! Compound pages.
//!
//! ```text
//! brief  [More...](#details)
//! declaration, includes, base/derived classes      (classes, files)
//! inner compound lists                             (Namespaces, Classes, ...)
//! one summary table per section
//! ## Description {#details}
//! per-section member documentation
//! ## Source                                        (files, when enabled)
//! ```
//!
//! Pages skip the summary parts and show their text and sub-pages.

use super::escape::{code_fence, escape_html, escape_text};
use super::fragments::{link, listing_lines};
use super::member::{member_lines, summary_lines};
use super::{RenderContext, lines::trim_blank_tail};
use crate::error::Result;
use crate::model::{Compound, Site};
use crate::schema::{
    CompoundKind, CompoundRef, InnerKind, Keyword, Protection, Virtualness, template_header,
};

/// Order in which inner compound lists appear.
const INNER_ORDER: [InnerKind; 8] = [
    InnerKind::Group,
    InnerKind::Dir,
    InnerKind::File,
    InnerKind::Namespace,
    InnerKind::Class,
    InnerKind::Concept,
    InnerKind::Module,
    InnerKind::Page,
];

/// The page as lines: no leading or trailing blank line, no runs of blank
/// lines.
pub(crate) fn render_page_lines(site: &Site, compound: &Compound) -> Result<Vec<String>> {
    let cx = RenderContext::new(site.links(), Some(compound.id.as_str()));
    let mut out = Vec::new();

    if compound.kind == CompoundKind::Page {
        out.extend(compound.detailed.iter().cloned());
        out.push(String::new());
        out.extend(inner_lines(site, compound));
        return Ok(normalize(out));
    }

    let documented_members = compound.sections.iter().any(|s| !s.members.is_empty());
    let has_details = !compound.detailed.is_empty() || documented_members;
    if !compound.brief.is_empty() {
        if has_details {
            out.push(format!("{} [More...](#details)", compound.brief));
        } else {
            out.push(compound.brief.clone());
        }
        out.push(String::new());
    }

    if compound.kind.is_class_like() {
        out.extend(declaration_lines(compound));
    }
    out.extend(include_lines(compound));
    if compound.kind.is_class_like() {
        out.extend(class_links("Inherits", &compound.def.base_refs, site));
        out.extend(class_links("Inherited by", &compound.def.derived_refs, site));
    }

    out.extend(inner_lines(site, compound));

    for section in compound.sections.iter().filter(|s| !s.is_empty()) {
        out.extend(summary_lines(section, &cx)?);
    }

    if has_details {
        out.push("## Description {#details}".to_string());
        out.push(String::new());
        out.extend(compound.detailed.iter().cloned());
        out.push(String::new());
    }

    let show_location = site.options().show_source_locations;
    for section in compound.sections.iter().filter(|s| !s.members.is_empty()) {
        out.push(format!("## {} Documentation", escape_text(&section.heading)));
        out.push(String::new());
        for member in &section.members {
            out.extend(member_lines(member, show_location, &cx)?);
            out.push(String::new());
        }
    }

    if compound.kind == CompoundKind::File && site.options().show_program_listing {
        if let Some(listing) = &compound.def.program_listing {
            let body = listing_lines(listing);
            let fence = code_fence(&body);
            out.push("## Source".to_string());
            out.push(String::new());
            out.push(format!("{fence}{}", listing.language()));
            out.extend(body);
            out.push(fence);
        }
    }

    Ok(normalize(out))
}

/// Collapse runs of blank lines and trim blank lines at both ends.
fn normalize(mut lines: Vec<String>) -> Vec<String> {
    lines.dedup_by(|a, b| a.is_empty() && b.is_empty());
    while lines.first().is_some_and(String::is_empty) {
        lines.remove(0);
    }
    trim_blank_tail(&mut lines);
    lines
}

/// The page text: lines joined with `\n` plus a final newline.
pub(crate) fn join_lines(lines: Vec<String>) -> String {
    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// `template <...>` and `class ns::Widget final` in a code block.
fn declaration_lines(compound: &Compound) -> Vec<String> {
    let def = &compound.def;
    let mut body = Vec::new();
    let header = template_header(&def.template_params);
    if !header.is_empty() {
        body.push(header);
    }
    let mut declaration = format!("{} {}", def.kind.keyword(), compound.name);
    if def.is_final {
        declaration.push_str(" final");
    }
    if def.is_sealed {
        declaration.push_str(" sealed");
    }
    body.push(declaration);

    let fence = code_fence(&body);
    let mut out = vec![format!("{fence}cpp")];
    out.extend(body);
    out.push(fence);
    out.push(String::new());
    out
}

fn include_lines(compound: &Compound) -> Vec<String> {
    let mut out: Vec<String> = compound
        .def
        .includes
        .iter()
        .map(|include| format!("<code>{}</code><br/>", escape_html(&include.directive())))
        .collect();
    if let Some(last) = out.last_mut() {
        if let Some(stripped) = last.strip_suffix("<br/>") {
            *last = stripped.to_string();
        }
        out.push(String::new());
    }
    out
}

fn class_links(label: &str, refs: &[CompoundRef], site: &Site) -> Vec<String> {
    if refs.is_empty() {
        return Vec::new();
    }
    let items: Vec<String> = refs
        .iter()
        .map(|r| {
            let mut prefix = String::new();
            if r.prot != Protection::Public {
                prefix.push_str(r.prot.keyword());
                prefix.push(' ');
            }
            if r.virt != Virtualness::NonVirtual {
                prefix.push_str("virtual ");
            }
            let url = r
                .refid
                .as_deref()
                .and_then(|id| site.page_permalink(id))
                .map(str::to_string);
            format!("{prefix}{}", link(&escape_text(&r.name), url))
        })
        .collect();
    vec![format!("**{label}** {}.", items.join(", ")), String::new()]
}

/// One table per kind of inner compound. Entries without a page are left
/// out; untracked ones are listed without a link.
fn inner_lines(site: &Site, compound: &Compound) -> Vec<String> {
    let mut out = Vec::new();
    for kind in INNER_ORDER {
        let mut rows = Vec::new();
        for inner in compound.def.inner_of(kind) {
            let row = match site.get(&inner.refid) {
                Some(target) if !target.is_navigable() => continue,
                Some(target) => {
                    let label = match kind {
                        InnerKind::Page | InnerKind::Group => target.page_title(),
                        _ => inner.name.clone(),
                    };
                    format!(
                        "| {} | {} |",
                        link(&escape_text(&label), target.url.clone()),
                        target.brief
                    )
                }
                None => format!("| {} | |", escape_text(&inner.name)),
            };
            rows.push(row);
        }
        if rows.is_empty() {
            continue;
        }
        out.push(format!("## {}", kind.heading()));
        out.push(String::new());
        out.push("| Name | Description |".to_string());
        out.push("| --- | --- |".to_string());
        out.extend(rows);
        out.push(String::new());
    }
    out
}

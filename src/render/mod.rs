//! MDX rendering.
//!
//! Two families over the [`DocNode`](crate::schema::DocNode) sum type, each
//! one exhaustive `match`:
//!
//! ```text
//! fragments::fragment(node) -> String        inline, single line
//! lines::node_lines(node)   -> Vec<String>   block, one entry per line
//! ```
//!
//! Pages are built on top of the lines family (`page`, `index`), with member
//! blocks in `member`. All link targets come from the [`LinkIndex`] carried by
//! the [`RenderContext`].

mod escape;
pub mod fragments;
pub(crate) mod index;
pub mod lines;
mod member;
pub(crate) mod page;

#[cfg(test)]
mod tests;

pub use escape::{code_fence, escape_html, escape_text};
pub use fragments::{fragment, fragments};
pub use lines::{content_lines, node_lines};

use crate::error::Result;
use crate::model::LinkIndex;
use crate::schema::{Description, RefKind};

/// What a renderer needs to know about the page being produced.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub links: &'a LinkIndex,
    /// Id of the compound whose page is rendered; member references into it
    /// become same-page anchors.
    pub current: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new(links: &'a LinkIndex, current: Option<&'a str>) -> Self {
        Self { links, current }
    }

    /// Resolve a reference from the current page.
    pub fn resolve(&self, refid: &str, kind: RefKind) -> Result<Option<String>> {
        self.links.resolve(refid, kind, self.current)
    }
}

/// A description as one inline string (briefs, table cells).
pub fn description_fragment(description: &Description, cx: &RenderContext<'_>) -> Result<String> {
    if description.is_empty() {
        return Ok(String::new());
    }
    Ok(fragments(&description.content, cx)?.trim().to_string())
}

/// A description as MDX lines, without trailing blank lines.
pub fn description_lines(description: &Description, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    if description.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    if let Some(title) = &description.title {
        out.push(format!("**{}**", fragments(title, cx)?.trim()));
        out.push(String::new());
    }
    out.extend(content_lines(&description.content, cx)?);
    lines::trim_blank_tail(&mut out);
    Ok(out)
}

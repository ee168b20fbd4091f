//! Fragment family: a node rendered as one inline string.
//!
//! Used for briefs, table cells, titles and anything else that has to fit on
//! a single line. Block nodes collapse to inline HTML; section-level nodes
//! have no inline form and fail with a dispatch error.

use super::RenderContext;
use super::escape::{escape_html, escape_text};
use crate::base::member_anchor;
use crate::error::{DoxyError, Result};
use crate::schema::{
    ContainerKind, DocContent, DocDiagram, DocEntry, DocList, DocNode, DocPara, DocParameterList,
    DocTable, Keyword, LinkedSpan, LinkedText, MarkupKind, OutputFormat, ProgramListing, RefKind,
};

pub(crate) const FAMILY: &str = "fragment";

/// Render mixed content, concatenating every item.
pub fn fragments(content: &[DocContent], cx: &RenderContext<'_>) -> Result<String> {
    let mut out = String::new();
    for item in content {
        match item {
            DocContent::Text(text) => out.push_str(&escape_text(text)),
            DocContent::Node(node) => out.push_str(&fragment(node, cx)?),
        }
    }
    Ok(out)
}

/// Render one node inline.
pub fn fragment(node: &DocNode, cx: &RenderContext<'_>) -> Result<String> {
    Ok(match node {
        DocNode::Para(para) => para_fragment(para, cx)?,
        DocNode::Markup(markup) => {
            let tag = markup_tag(markup.kind);
            format!("<{tag}>{}</{tag}>", fragments(&markup.content, cx)?)
        }
        DocNode::Ref(r) => {
            let text = fragments(&r.content, cx)?;
            if r.external.is_some() {
                text
            } else {
                link(&text, cx.resolve(&r.refid, r.kind)?)
            }
        }
        DocNode::Ulink(ulink) => {
            let text = fragments(&ulink.content, cx)?;
            format!("[{text}]({})", ulink.url.replace(' ', "%20"))
        }
        DocNode::Anchor(anchor) => format!("<a id=\"{}\"></a>", member_anchor(&anchor.id)),
        DocNode::LineBreak => "<br/>".to_string(),
        DocNode::HorizontalRule => "<hr/>".to_string(),
        DocNode::Symbol(symbol) => symbol.character.to_string(),
        DocNode::Emoji(emoji) => match &emoji.unicode {
            Some(unicode) => unicode.clone(),
            None => escape_text(&emoji.name),
        },
        DocNode::Formula(formula) => format!("<code>{}</code>", escape_html(&formula.text)),
        DocNode::Image(image) => match (&image.format, &image.name) {
            (OutputFormat::Html, Some(name)) => {
                let alt = match &image.alt {
                    Some(alt) => escape_html(alt),
                    None => escape_html(&fragments(&image.caption, cx)?),
                };
                let mut tag = format!("<img src=\"{}\" alt=\"{alt}\"", escape_html(name));
                if let Some(width) = &image.width {
                    tag.push_str(&format!(" width=\"{}\"", escape_html(width)));
                }
                if let Some(height) = &image.height {
                    tag.push_str(&format!(" height=\"{}\"", escape_html(height)));
                }
                tag.push_str("/>");
                tag
            }
            _ => String::new(),
        },
        DocNode::FormatOnly(only) => match only.format {
            OutputFormat::Html => only.text.trim().to_string(),
            _ => String::new(),
        },
        DocNode::Heading(heading) => format!("<b>{}</b>", fragments(&heading.content, cx)?),
        DocNode::List(list) => list_fragment(list, cx)?,
        DocNode::VariableList(list) => {
            let mut out = String::from("<dl>");
            for (term, item) in &list.entries {
                out.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>",
                    fragments(term, cx)?,
                    paras_fragment(&item.paras, cx)?
                ));
            }
            out.push_str("</dl>");
            out
        }
        DocNode::SimpleSect(sect) => {
            let title = match &sect.title {
                Some(title) => fragments(title, cx)?,
                None => sect.kind.title().to_string(),
            };
            let body = paras_fragment(&sect.paras, cx)?;
            if title.is_empty() {
                body
            } else {
                format!("<b>{title}:</b> {body}")
            }
        }
        DocNode::ParameterList(list) => parameter_fragment(list, cx)?,
        DocNode::XrefSect(xref) => {
            let title = link(&escape_text(&xref.title), cx.resolve(&xref.id, RefKind::Member)?);
            format!("<b>{title}:</b> {}", fragments(&xref.description.content, cx)?)
        }
        DocNode::ProgramListing(listing) => code_fragment(&listing_lines(listing)),
        DocNode::Verbatim(text) => {
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            code_fragment(&lines)
        }
        DocNode::Preformatted(content) => format!("<pre>{}</pre>", fragments(content, cx)?),
        DocNode::Table(table) => table_fragment(table, cx)?,
        DocNode::Container(container) => {
            let body = paras_fragment(&container.paras, cx)?;
            match container.kind {
                ContainerKind::BlockQuote => format!("<blockquote>{body}</blockquote>"),
                ContainerKind::ParBlock => body,
            }
        }
        DocNode::IndexEntry(_) => String::new(),
        DocNode::Diagram(diagram) => diagram_fragment(diagram, cx)?,
        DocNode::Details(details) => {
            let summary = match &details.summary {
                Some(summary) => fragments(summary, cx)?.trim().to_string(),
                None => "Details".to_string(),
            };
            format!(
                "<details><summary>{summary}</summary>{}</details>",
                paras_fragment(&details.paras, cx)?
            )
        }
        DocNode::TocList(toc) => {
            let mut out = String::from("<ul>");
            for item in &toc.items {
                out.push_str(&format!(
                    "<li><a href=\"#{}\">{}</a></li>",
                    escape_html(member_anchor(&item.id)),
                    fragments(&item.content, cx)?.trim()
                ));
            }
            out.push_str("</ul>");
            out
        }
        DocNode::Sect(_) | DocNode::Internal(_) => {
            return Err(DoxyError::Dispatch {
                shape: node.shape_name(),
                family: FAMILY,
            });
        }
    })
}

/// Paragraph content without surrounding whitespace.
pub fn para_fragment(para: &DocPara, cx: &RenderContext<'_>) -> Result<String> {
    Ok(fragments(&para.content, cx)?.trim().to_string())
}

/// Several paragraphs on one line, separated by breaks.
pub fn paras_fragment(paras: &[DocPara], cx: &RenderContext<'_>) -> Result<String> {
    let mut parts = Vec::with_capacity(paras.len());
    for para in paras.iter().filter(|p| !p.is_blank()) {
        parts.push(para_fragment(para, cx)?);
    }
    Ok(parts.join("<br/>"))
}

/// Linked text such as a member type, with references resolved.
pub fn linked_text(text: &LinkedText, cx: &RenderContext<'_>) -> Result<String> {
    let mut out = String::new();
    for span in &text.spans {
        match span {
            LinkedSpan::Text(t) => out.push_str(&escape_text(t)),
            LinkedSpan::Ref(r) => {
                let label = escape_text(&r.text);
                if r.external.is_some() {
                    out.push_str(&label);
                } else {
                    out.push_str(&link(&label, cx.resolve(&r.refid, r.kind)?));
                }
            }
        }
    }
    Ok(out.trim().to_string())
}

/// `[text](url)`, or the bare text for dangling references.
pub fn link(text: &str, url: Option<String>) -> String {
    match url {
        Some(url) => format!("[{text}]({url})"),
        None => text.to_string(),
    }
}

pub(crate) fn markup_tag(kind: MarkupKind) -> &'static str {
    match kind {
        MarkupKind::Bold => "b",
        MarkupKind::Emphasis => "em",
        MarkupKind::ComputerOutput => "code",
        MarkupKind::Underline => "u",
        MarkupKind::Strike | MarkupKind::S => "s",
        MarkupKind::Del => "del",
        MarkupKind::Ins => "ins",
        MarkupKind::Subscript => "sub",
        MarkupKind::Superscript => "sup",
        MarkupKind::Center => "center",
        MarkupKind::Small => "small",
        MarkupKind::Cite => "cite",
        MarkupKind::JavadocLiteral | MarkupKind::JavadocCode => "code",
    }
}

pub(crate) fn listing_lines(listing: &ProgramListing) -> Vec<String> {
    listing
        .plain_lines()
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

fn code_fragment(lines: &[String]) -> String {
    let body: Vec<String> = lines.iter().map(|l| escape_html(l)).collect();
    format!("<code>{}</code>", body.join("<br/>"))
}

/// Inline diagrams as code, file diagrams by caption or file name.
fn diagram_fragment(diagram: &DocDiagram, cx: &RenderContext<'_>) -> Result<String> {
    let caption = fragments(&diagram.caption, cx)?.trim().to_string();
    Ok(match &diagram.file {
        Some(file) if caption.is_empty() => format!("<em>{}</em>", escape_text(file)),
        Some(_) => format!("<em>{caption}</em>"),
        None => code_fragment(&source_lines(&diagram.source)),
    })
}

pub(crate) fn source_lines(source: &str) -> Vec<String> {
    source
        .trim_matches('\n')
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

fn list_fragment(list: &DocList, cx: &RenderContext<'_>) -> Result<String> {
    let tag = if list.ordered { "ol" } else { "ul" };
    let mut out = match (list.ordered, list.start) {
        (true, Some(start)) => format!("<{tag} start=\"{start}\">"),
        _ => format!("<{tag}>"),
    };
    for item in &list.items {
        let check = match item.checked {
            Some(true) => "☑ ",
            Some(false) => "☐ ",
            None => "",
        };
        out.push_str(&format!("<li>{check}{}</li>", paras_fragment(&item.paras, cx)?));
    }
    out.push_str(&format!("</{tag}>"));
    Ok(out)
}

fn parameter_fragment(list: &DocParameterList, cx: &RenderContext<'_>) -> Result<String> {
    let mut items = Vec::with_capacity(list.items.len());
    for item in &list.items {
        let mut names = Vec::with_capacity(item.names.len());
        for name in &item.names {
            names.push(format!("<code>{}</code>", fragments(&name.content, cx)?.trim()));
        }
        items.push(format!(
            "{} {}",
            names.join(", "),
            fragments(&item.description.content, cx)?.trim()
        ));
    }
    Ok(format!("<b>{}:</b> {}", list.kind.title(), items.join("; ")))
}

/// A table on a single line, as HTML.
pub(crate) fn table_fragment(table: &DocTable, cx: &RenderContext<'_>) -> Result<String> {
    let mut out = String::from("<table>");
    if let Some(caption) = &table.caption {
        out.push_str(&format!("<caption>{}</caption>", fragments(caption, cx)?.trim()));
    }
    for row in &table.body {
        out.push_str("<tr>");
        for entry in row {
            out.push_str(&entry_fragment(entry, cx)?);
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    Ok(out)
}

pub(crate) fn entry_fragment(entry: &DocEntry, cx: &RenderContext<'_>) -> Result<String> {
    let tag = if entry.thead { "th" } else { "td" };
    let mut open = format!("<{tag}");
    if let Some(colspan) = entry.colspan {
        open.push_str(&format!(" colSpan=\"{colspan}\""));
    }
    if let Some(rowspan) = entry.rowspan {
        open.push_str(&format!(" rowSpan=\"{rowspan}\""));
    }
    if let Some(align) = entry.align {
        open.push_str(&format!(" align=\"{}\"", align.keyword()));
    }
    Ok(format!("{open}>{}</{tag}>", paras_fragment(&entry.paras, cx)?))
}

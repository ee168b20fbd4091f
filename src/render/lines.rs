//! Lines family: a node rendered as a block of MDX lines.
//!
//! Every block ends with one blank line. Runs of inline content between
//! blocks are joined into a single paragraph line.
//!
//! ```text
//! <para>See <ref>Foo</ref>: <itemizedlist>…</itemizedlist> done.</para>
//!   ──▶ "See [Foo](/api/classes/foo):"
//!       ""
//!       "- first"
//!       ""
//!       "done."
//!       ""
//! ```

use super::RenderContext;
use super::escape::{code_fence, escape_html, escape_text};
use super::fragments::{entry_fragment, fragment, fragments, link, listing_lines, source_lines};
use crate::base::member_anchor;
use crate::error::Result;
use crate::schema::{
    ContainerKind, DocContent, DocDetails, DocDiagram, DocList, DocNode, DocPara,
    DocParameterList, DocSect, DocSimpleSect, DocTable, OutputFormat, ParamDirection, RefKind, SimpleSectKind,
};

/// Render mixed content, grouping inline runs into paragraphs.
pub fn content_lines(content: &[DocContent], cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut inline = String::new();
    for item in content {
        match item {
            DocContent::Text(text) => inline.push_str(&escape_text(text)),
            DocContent::Node(node) if !node.is_block() => inline.push_str(&fragment(node, cx)?),
            DocContent::Node(node) => {
                flush_paragraph(&mut inline, &mut out);
                out.extend(node_lines(node, cx)?);
            }
        }
    }
    flush_paragraph(&mut inline, &mut out);
    Ok(out)
}

/// Render one node as a block.
pub fn node_lines(node: &DocNode, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = match node {
        DocNode::Para(para) => return content_lines(&para.content, cx),
        DocNode::Markup(_)
        | DocNode::Ref(_)
        | DocNode::Ulink(_)
        | DocNode::Anchor(_)
        | DocNode::LineBreak
        | DocNode::Symbol(_)
        | DocNode::Emoji(_)
        | DocNode::Formula(_)
        | DocNode::Image(_) => vec![fragment(node, cx)?],
        DocNode::IndexEntry(_) => return Ok(Vec::new()),
        DocNode::HorizontalRule => vec!["<hr/>".to_string()],
        DocNode::List(list) => list_lines(list, cx)?,
        DocNode::VariableList(list) => {
            let mut out = Vec::new();
            for (term, item) in &list.entries {
                out.push(format!("**{}**", fragments(term, cx)?.trim()));
                out.push(String::new());
                out.extend(indent(&paras_lines(&item.paras, cx)?, "  "));
            }
            trim_blank_tail(&mut out);
            out
        }
        DocNode::SimpleSect(sect) => simple_sect_lines(sect, cx)?,
        DocNode::ParameterList(list) => parameter_lines(list, cx)?,
        DocNode::XrefSect(xref) => {
            let title = link(&escape_text(&xref.title), cx.resolve(&xref.id, RefKind::Member)?);
            let mut out = vec![format!("**{title}**"), String::new()];
            out.extend(content_lines(&xref.description.content, cx)?);
            trim_blank_tail(&mut out);
            out
        }
        DocNode::ProgramListing(listing) => {
            fenced(listing.language(), &listing_lines(listing))
        }
        DocNode::Verbatim(text) => {
            let lines: Vec<String> = text.trim_matches('\n').lines().map(str::to_string).collect();
            fenced("", &lines)
        }
        DocNode::Preformatted(content) => {
            let mut text = String::new();
            plain_text(content, &mut text);
            let lines: Vec<String> = text.trim_matches('\n').lines().map(str::to_string).collect();
            fenced("", &lines)
        }
        DocNode::Heading(heading) => {
            let level = heading.level.clamp(2, 6) as usize;
            vec![format!("{} {}", "#".repeat(level), fragments(&heading.content, cx)?.trim())]
        }
        DocNode::Table(table) => table_lines(table, cx)?,
        DocNode::Container(container) => {
            let body = paras_lines(&container.paras, cx)?;
            match container.kind {
                ContainerKind::BlockQuote => body
                    .into_iter()
                    .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {line}") })
                    .collect(),
                ContainerKind::ParBlock => body,
            }
        }
        DocNode::FormatOnly(only) => match only.format {
            OutputFormat::Html => only.text.trim().lines().map(str::to_string).collect(),
            _ => return Ok(Vec::new()),
        },
        DocNode::Diagram(diagram) => diagram_lines(diagram, cx)?,
        DocNode::Details(details) => details_lines(details, cx)?,
        DocNode::TocList(toc) => {
            let mut out = Vec::with_capacity(toc.items.len());
            for item in &toc.items {
                out.push(format!(
                    "- [{}](#{})",
                    fragments(&item.content, cx)?.trim(),
                    member_anchor(&item.id)
                ));
            }
            out
        }
        DocNode::Sect(sect) => sect_lines(sect, cx)?,
        DocNode::Internal(internal) => content_lines(&internal.content, cx)?,
    };
    trim_blank_tail(&mut out);
    if !out.is_empty() {
        out.push(String::new());
    }
    Ok(out)
}

/// Drop trailing blank lines.
pub fn trim_blank_tail(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
}

fn flush_paragraph(inline: &mut String, out: &mut Vec<String>) {
    let text = inline.trim();
    if !text.is_empty() {
        out.push(collapse_spaces(text));
        out.push(String::new());
    }
    inline.clear();
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out
}

fn paras_lines(paras: &[DocPara], cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for para in paras {
        out.extend(content_lines(&para.content, cx)?);
    }
    trim_blank_tail(&mut out);
    Ok(out)
}

fn indent(lines: &[String], prefix: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

fn fenced(language: &str, body: &[String]) -> Vec<String> {
    let fence = code_fence(body);
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(format!("{fence}{language}"));
    out.extend(body.iter().cloned());
    out.push(fence);
    out
}

/// Text of preformatted content, with markup dropped.
fn plain_text(content: &[DocContent], out: &mut String) {
    for item in content {
        match item {
            DocContent::Text(text) => out.push_str(text),
            DocContent::Node(DocNode::Markup(markup)) => plain_text(&markup.content, out),
            DocContent::Node(DocNode::Ref(r)) => plain_text(&r.content, out),
            DocContent::Node(DocNode::Ulink(ulink)) => plain_text(&ulink.content, out),
            DocContent::Node(DocNode::Symbol(symbol)) => out.push_str(symbol.character),
            DocContent::Node(DocNode::LineBreak) => out.push('\n'),
            DocContent::Node(_) => {}
        }
    }
}

fn list_lines(list: &DocList, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut number = list.start.unwrap_or(1);
    for item in &list.items {
        if let Some(value) = item.value {
            number = value;
        }
        let mut marker = if list.ordered {
            format!("{number}. ")
        } else {
            "- ".to_string()
        };
        match item.checked {
            Some(true) => marker.push_str("[x] "),
            Some(false) => marker.push_str("[ ] "),
            None => {}
        }
        number += 1;

        let body = paras_lines(&item.paras, cx)?;
        let continuation = " ".repeat(marker.chars().count());
        let mut body = body.into_iter();
        match body.next() {
            Some(first) => out.push(format!("{marker}{first}").trim_end().to_string()),
            None => out.push(marker.trim_end().to_string()),
        }
        // Blank lines inside an item would end a tight list.
        for line in body.filter(|l| !l.is_empty()) {
            out.push(format!("{continuation}{line}"));
        }
    }
    Ok(out)
}

/// Admonition for notes and warnings, a titled block for the rest.
fn simple_sect_lines(sect: &DocSimpleSect, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let custom = match &sect.title {
        Some(title) => Some(fragments(title, cx)?.trim().to_string()),
        None => None,
    };
    let body = paras_lines(&sect.paras, cx)?;

    let admonition = match sect.kind {
        SimpleSectKind::Note => Some("note"),
        SimpleSectKind::Warning => Some("warning"),
        SimpleSectKind::Attention => Some("danger"),
        SimpleSectKind::Important => Some("info"),
        SimpleSectKind::Remark => Some("tip"),
        _ => None,
    };
    let mut out = Vec::with_capacity(body.len() + 4);
    match admonition {
        Some(kind) => {
            match custom.filter(|title| !title.is_empty()) {
                Some(title) => out.push(format!(":::{kind}[{title}]")),
                None => out.push(format!(":::{kind}")),
            }
            out.extend(body);
            out.push(":::".to_string());
        }
        None => {
            let title = custom.unwrap_or_else(|| sect.kind.title().to_string());
            if !title.is_empty() {
                out.push(format!("**{title}**"));
                out.push(String::new());
            }
            out.extend(body);
        }
    }
    Ok(out)
}

fn parameter_lines(list: &DocParameterList, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let with_direction = list
        .items
        .iter()
        .flat_map(|item| &item.names)
        .any(|name| name.direction.is_some());

    let mut out = vec![format!("**{}**", list.kind.title()), String::new()];
    if with_direction {
        out.push("| | Name | Description |".to_string());
        out.push("| --- | --- | --- |".to_string());
    } else {
        out.push("| Name | Description |".to_string());
        out.push("| --- | --- |".to_string());
    }
    for item in &list.items {
        let mut names = Vec::with_capacity(item.names.len());
        let mut direction = "";
        for name in &item.names {
            names.push(format!("<code>{}</code>", fragments(&name.content, cx)?.trim()));
            direction = match name.direction {
                Some(ParamDirection::In) => "in",
                Some(ParamDirection::Out) => "out",
                Some(ParamDirection::InOut) => "in,out",
                None => direction,
            };
        }
        let mut description = Vec::new();
        for node in item.description.nodes() {
            description.push(fragment(node, cx)?);
        }
        let description = description.join("<br/>");
        if with_direction {
            out.push(format!("| {direction} | {} | {description} |", names.join(", ")));
        } else {
            out.push(format!("| {} | {description} |", names.join(", ")));
        }
    }
    Ok(out)
}

fn table_lines(table: &DocTable, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = vec!["<table>".to_string()];
    if let Some(caption) = &table.caption {
        out.push(format!("<caption>{}</caption>", fragments(caption, cx)?.trim()));
    }
    for row in &table.body {
        out.push("<tr>".to_string());
        for entry in row {
            out.push(entry_fragment(entry, cx)?);
        }
        out.push("</tr>".to_string());
    }
    out.push("</table>".to_string());
    Ok(out)
}

/// Inline sources become fenced blocks tagged with their language; file
/// diagrams leave their caption, or the file name.
fn diagram_lines(diagram: &DocDiagram, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let caption = fragments(&diagram.caption, cx)?.trim().to_string();
    let mut out = Vec::new();
    match &diagram.file {
        Some(file) if caption.is_empty() => out.push(format!("*{}*", escape_text(file))),
        Some(_) => out.push(format!("*{caption}*")),
        None => {
            out.extend(fenced(diagram.kind.language(), &source_lines(&diagram.source)));
            if !caption.is_empty() {
                out.push(String::new());
                out.push(format!("*{caption}*"));
            }
        }
    }
    Ok(out)
}

fn details_lines(details: &DocDetails, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let summary = match &details.summary {
        Some(summary) => fragments(summary, cx)?.trim().to_string(),
        None => "Details".to_string(),
    };
    let mut out = vec![
        "<details>".to_string(),
        format!("<summary>{summary}</summary>"),
        String::new(),
    ];
    out.extend(paras_lines(&details.paras, cx)?);
    out.push(String::new());
    out.push("</details>".to_string());
    Ok(out)
}

fn sect_lines(sect: &DocSect, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let level = (sect.level as usize + 1).clamp(2, 6);
    let title = match &sect.title {
        Some(title) => fragments(title, cx)?.trim().to_string(),
        None => String::new(),
    };
    let mut heading = format!("{} {title}", "#".repeat(level));
    if let Some(id) = &sect.id {
        heading.push_str(&format!(" {{#{}}}", escape_html(member_anchor(id))));
    }
    let mut out = vec![heading, String::new()];
    out.extend(content_lines(&sect.content, cx)?);
    Ok(out)
}


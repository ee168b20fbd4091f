//! Member rendering: summary tables and definition blocks.

use super::escape::{code_fence, escape_html, escape_text};
use super::fragments::{link, linked_text};
use super::lines::trim_blank_tail;
use super::{RenderContext, description_fragment, description_lines};
use crate::base::member_anchor;
use crate::error::Result;
use crate::model::{Member, Section};
use crate::schema::{EnumValue, MemberDef, MemberKind, MemberLink, RefKind};

/// Heading, optional description and one table row per member.
pub(super) fn summary_lines(section: &Section, cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = vec![format!("## {}", escape_text(&section.heading)), String::new()];
    if let Some(description) = &section.description {
        let lines = description_lines(description, cx)?;
        if !lines.is_empty() {
            out.extend(lines);
            out.push(String::new());
        }
    }

    out.push("| Type | Name |".to_string());
    out.push("| --- | --- |".to_string());
    for member in &section.members {
        out.push(summary_row(member, cx)?);
    }
    for reference in &section.references {
        let name = link(
            &escape_text(&reference.name),
            cx.resolve(&reference.refid, RefKind::Member)?,
        );
        out.push(format!("| {} | {name} |", kind_label(reference.kind)));
    }
    out.push(String::new());
    Ok(out)
}

fn summary_row(member: &Member, cx: &RenderContext<'_>) -> Result<String> {
    let def = &member.def;
    let ty = match &def.ty {
        Some(ty) if !ty.is_blank() => linked_text(ty, cx)?,
        _ => kind_label(def.kind).to_string(),
    };
    let mut name = format!("[{}](#{})", escape_text(&def.name), member.anchor);
    if let Some(args) = def.args.as_deref().filter(|a| !a.is_empty()) {
        name.push(' ');
        name.push_str(&escape_text(args));
    }
    let brief = description_fragment(&def.brief, cx)?;
    if !brief.is_empty() {
        name.push_str("<br/>");
        name.push_str(&brief);
    }
    Ok(format!("| {ty} | {name} |"))
}

/// Label of a member kind where there is no type to show.
fn kind_label(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Define => "#define",
        MemberKind::Enum => "enum",
        MemberKind::Typedef => "typedef",
        MemberKind::Friend => "friend",
        MemberKind::Signal => "signal",
        MemberKind::Slot => "slot",
        MemberKind::Property => "property",
        MemberKind::Event => "event",
        _ => "",
    }
}

/// The full definition block of a member.
pub(super) fn member_lines(
    member: &Member,
    show_location: bool,
    cx: &RenderContext<'_>,
) -> Result<Vec<String>> {
    let def = &member.def;
    let mut out = vec![
        format!("### {} {{#{}}}", escape_text(&def.name), member.anchor),
        String::new(),
    ];

    let prototype: Vec<String> = def.prototype().lines().map(str::to_string).collect();
    let fence = code_fence(&prototype);
    out.push(format!("{fence}cpp"));
    out.extend(prototype);
    out.push(fence);
    out.push(String::new());

    let labels = def.labels();
    if !labels.is_empty() {
        let labels: Vec<String> = labels
            .iter()
            .map(|label| format!("<code>{label}</code>"))
            .collect();
        out.push(labels.join(" "));
        out.push(String::new());
    }

    for description in [&def.brief, &def.detailed, &def.in_body] {
        let lines = description_lines(description, cx)?;
        if !lines.is_empty() {
            out.extend(lines);
            out.push(String::new());
        }
    }

    if !def.enum_values.is_empty() {
        out.extend(enum_lines(&def.enum_values, cx)?);
        out.push(String::new());
    }

    if let Some(line) = links_line("Reimplements", &def.reimplements, cx)? {
        out.push(line);
        out.push(String::new());
    }
    if let Some(line) = links_line("Reimplemented in", &def.reimplemented_by, cx)? {
        out.push(line);
        out.push(String::new());
    }

    if show_location {
        if let Some(line) = location_line(def) {
            out.push(line);
            out.push(String::new());
        }
    }

    trim_blank_tail(&mut out);
    Ok(out)
}

fn enum_lines(values: &[EnumValue], cx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut out = vec![
        "| Enumerator | Value | Description |".to_string(),
        "| --- | --- | --- |".to_string(),
    ];
    for value in values {
        let initializer = match &value.initializer {
            Some(init) if !init.is_blank() => {
                format!("<code>{}</code>", escape_html(init.plain_text().trim()))
            }
            _ => String::new(),
        };
        let mut description = description_fragment(&value.brief, cx)?;
        let detailed = description_fragment(&value.detailed, cx)?;
        if !detailed.is_empty() {
            if !description.is_empty() {
                description.push_str("<br/>");
            }
            description.push_str(&detailed);
        }
        out.push(format!(
            "| <a id=\"{}\"></a><code>{}</code> | {initializer} | {description} |",
            member_anchor(&value.id),
            escape_html(&value.name)
        ));
    }
    Ok(out)
}

fn links_line(label: &str, links: &[MemberLink], cx: &RenderContext<'_>) -> Result<Option<String>> {
    if links.is_empty() {
        return Ok(None);
    }
    let mut targets = Vec::with_capacity(links.len());
    for target in links {
        targets.push(link(
            &escape_text(&target.text),
            cx.resolve(&target.refid, RefKind::Member)?,
        ));
    }
    Ok(Some(format!("{label} {}.", targets.join(", "))))
}

fn location_line(def: &MemberDef) -> Option<String> {
    let location = def.location.as_ref()?;
    if let (Some(file), Some(start)) = (&location.body_file, location.body_start.filter(|s| *s > 0)) {
        return Some(format!(
            "Definition at line {start} of file <code>{}</code>.",
            escape_html(file)
        ));
    }
    let file = escape_html(&location.file);
    Some(match location.line {
        Some(line) => format!("Declared at line {line} of file <code>{file}</code>."),
        None => format!("Declared in file <code>{file}</code>."),
    })
}

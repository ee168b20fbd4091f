//! Program listings: `<programlisting>` with highlighted code lines.

use super::keywords::{HighlightClass, RefKind};
use super::linked_text::LinkedRef;
use super::read::{Attrs, FromNode, elements};
use crate::error::{DoxyError, Result};
use crate::xml::{XmlContent, XmlNode};

/// A piece of a highlighted run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HighlightSpan {
    Text(String),
    /// `<sp/>`, optionally repeated through `@value`.
    Space(usize),
    Ref(LinkedRef),
}

/// `<highlight class="keyword">`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub class: HighlightClass,
    pub spans: Vec<HighlightSpan>,
}

impl Highlight {
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                HighlightSpan::Text(t) => out.push_str(t),
                HighlightSpan::Space(n) => out.extend(std::iter::repeat_n(' ', *n)),
                HighlightSpan::Ref(r) => out.push_str(&r.text),
            }
        }
        out
    }
}

impl FromNode for Highlight {
    const SHAPE: &'static str = "highlightType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let class = attrs.required_enum("class")?;
        attrs.finish()?;

        let mut spans = Vec::new();
        for child in node.children() {
            match child {
                XmlContent::Text(t) => spans.push(HighlightSpan::Text(t.clone())),
                XmlContent::Element(e) => match e.name() {
                    "sp" => {
                        let mut sp = Attrs::new(e, "spType");
                        let count = sp.number("value")?.unwrap_or(1);
                        sp.finish()?;
                        spans.push(HighlightSpan::Space(count));
                    }
                    "ref" => spans.push(HighlightSpan::Ref(LinkedRef::from_node(e)?)),
                    other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
                },
            }
        }
        Ok(Self { class, spans })
    }
}

/// `<codeline lineno="12" refid="..." refkind="member">`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeLine {
    pub lineno: Option<u32>,
    pub refid: Option<String>,
    pub refkind: Option<RefKind>,
    pub external: bool,
    pub highlights: Vec<Highlight>,
}

impl CodeLine {
    pub fn plain_text(&self) -> String {
        self.highlights.iter().map(Highlight::plain_text).collect()
    }
}

impl FromNode for CodeLine {
    const SHAPE: &'static str = "codelineType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let lineno = attrs.number("lineno")?;
        let refid = attrs.optional_string("refid");
        let refkind = attrs.optional_enum("refkind")?;
        let external = attrs.flag("external")?;
        attrs.finish()?;

        let mut highlights = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "highlight" => highlights.push(Highlight::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            lineno,
            refid,
            refkind,
            external,
            highlights,
        })
    }
}

/// A fragment of source code, as in `\code` blocks or file listings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramListing {
    /// Extension hint such as `.cpp` for the highlighter.
    pub filename: Option<String>,
    pub lines: Vec<CodeLine>,
}

impl ProgramListing {
    /// Language tag for a fenced code block.
    pub fn language(&self) -> &str {
        match self.filename.as_deref().map(|f| f.trim_start_matches('.')) {
            Some("py") => "python",
            Some("js") => "javascript",
            Some("ts") => "typescript",
            Some("rs") => "rust",
            Some("java") => "java",
            Some("sh") => "bash",
            Some("c") | Some("h") => "c",
            _ => "cpp",
        }
    }

    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(CodeLine::plain_text).collect()
    }
}

impl FromNode for ProgramListing {
    const SHAPE: &'static str = "listingType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let filename = attrs.optional_string("filename");
        attrs.finish()?;

        let mut lines = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "codeline" => lines.push(CodeLine::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self { filename, lines })
    }
}

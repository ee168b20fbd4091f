//! Documentation markup shapes.
//!
//! Doxygen describes prose as mixed content: free text interleaved with
//! command elements (`<bold>`, `<ref>`, `<itemizedlist>`, ...). Every command
//! element maps onto one [`DocNode`] variant; elements that only differ by
//! their name share one shape parameterized by a kind enum (all markup spans
//! are a [`DocMarkup`], all character entities a [`DocSymbol`], all
//! `sect1`..`sect4` a [`DocSect`]).
//!
//! Which elements are legal depends on the position, see [`ContentModel`].

use super::description::{Description, DescriptionKind};
use super::keywords::{
    Align, OutputFormat, ParamDirection, ParamListKind, RefKind, SimpleSectKind, VAlign,
};
use super::listing::ProgramListing;
use super::read::{Attrs, FromNode, elements, leaf_text, set_once};
use crate::error::{DoxyError, Result};
use crate::xml::{XmlContent, XmlNode};

// ============================================================================
// CONTENT
// ============================================================================

/// One item of mixed content.
#[derive(Clone, Debug, PartialEq)]
pub enum DocContent {
    Text(String),
    Node(DocNode),
}

impl DocContent {
    /// Name of the item as it appeared in the source: `#text` for text runs.
    pub fn outline_name(&self) -> &str {
        match self {
            Self::Text(_) => "#text",
            Self::Node(n) => n.element_name(),
        }
    }
}

/// Element names and text runs of mixed content, in document order.
pub fn outline(content: &[DocContent]) -> Vec<&str> {
    content.iter().map(DocContent::outline_name).collect()
}

/// The same outline computed from the source node.
pub fn node_outline(node: &XmlNode) -> Vec<&str> {
    node.children()
        .iter()
        .map(|c| match c {
            XmlContent::Text(_) => "#text",
            XmlContent::Element(e) => e.name(),
        })
        .collect()
}

/// What a content position admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContentModel {
    /// Titles, reference labels, headings: text-level commands only.
    Inline,
    /// Paragraph bodies and markup spans: text-level and block commands.
    Para,
    /// Description bodies: paragraphs, internal blocks and sections.
    Body { sect_level: u8, internal: bool },
}

impl ContentModel {
    pub(crate) const DESCRIPTION: Self = Self::Body {
        sect_level: 1,
        internal: true,
    };

    fn allows_inline(self) -> bool {
        matches!(self, Self::Inline | Self::Para)
    }

    fn allows_blocks(self) -> bool {
        matches!(self, Self::Para)
    }
}

/// Parse the mixed content of `node` under `model`.
pub(crate) fn parse_mixed(
    node: &XmlNode,
    model: ContentModel,
    shape: &'static str,
) -> Result<Vec<DocContent>> {
    let mut out = Vec::with_capacity(node.children().len());
    for child in node.children() {
        match child {
            XmlContent::Text(t) => out.push(DocContent::Text(t.clone())),
            XmlContent::Element(e) => out.push(DocContent::Node(DocNode::parse(e, model, shape)?)),
        }
    }
    Ok(out)
}

/// Parse a list of `<para>` children (list items, table cells, quotes).
fn parse_paras(node: &XmlNode, shape: &'static str) -> Result<Vec<DocPara>> {
    let mut paras = Vec::new();
    for child in elements(node, shape)? {
        match child.name() {
            "para" => paras.push(DocPara::from_node(child)?),
            other => return Err(DoxyError::unknown_element(shape, other)),
        }
    }
    Ok(paras)
}

// ============================================================================
// NODES
// ============================================================================

/// A documentation command element.
#[derive(Clone, Debug, PartialEq)]
pub enum DocNode {
    Para(DocPara),
    Markup(DocMarkup),
    Ref(DocRef),
    Ulink(DocUlink),
    Anchor(DocAnchor),
    LineBreak,
    HorizontalRule,
    Symbol(DocSymbol),
    Emoji(DocEmoji),
    List(DocList),
    VariableList(DocVariableList),
    SimpleSect(DocSimpleSect),
    ParameterList(DocParameterList),
    XrefSect(DocXrefSect),
    ProgramListing(ProgramListing),
    Verbatim(String),
    Preformatted(Vec<DocContent>),
    Formula(DocFormula),
    Heading(DocHeading),
    Image(DocImage),
    Table(DocTable),
    Container(DocContainer),
    FormatOnly(DocFormatOnly),
    IndexEntry(DocIndexEntry),
    Diagram(DocDiagram),
    Details(DocDetails),
    TocList(DocTocList),
    Sect(DocSect),
    Internal(DocInternal),
}

impl DocNode {
    /// Schema type name, reported by dispatch errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Para(_) => DocPara::SHAPE,
            Self::Markup(_) => DocMarkup::SHAPE,
            Self::Ref(_) => DocRef::SHAPE,
            Self::Ulink(_) => DocUlink::SHAPE,
            Self::Anchor(_) => DocAnchor::SHAPE,
            Self::LineBreak | Self::HorizontalRule | Self::Symbol(_) => "docEmptyType",
            Self::Emoji(_) => DocEmoji::SHAPE,
            Self::List(_) => DocList::SHAPE,
            Self::VariableList(_) => DocVariableList::SHAPE,
            Self::SimpleSect(_) => DocSimpleSect::SHAPE,
            Self::ParameterList(_) => DocParameterList::SHAPE,
            Self::XrefSect(_) => DocXrefSect::SHAPE,
            Self::ProgramListing(_) => ProgramListing::SHAPE,
            Self::Verbatim(_) => "docVerbatimType",
            Self::Preformatted(_) => "docPreformattedType",
            Self::Formula(_) => DocFormula::SHAPE,
            Self::Heading(_) => DocHeading::SHAPE,
            Self::Image(_) => DocImage::SHAPE,
            Self::Table(_) => DocTable::SHAPE,
            Self::Container(_) => DocContainer::SHAPE,
            Self::FormatOnly(_) => DocFormatOnly::SHAPE,
            Self::IndexEntry(_) => DocIndexEntry::SHAPE,
            Self::Diagram(d) => d.shape(),
            Self::Details(_) => DocDetails::SHAPE,
            Self::TocList(_) => DocTocList::SHAPE,
            Self::Sect(_) => DocSect::SHAPE,
            Self::Internal(_) => DocInternal::SHAPE,
        }
    }

    /// The element name this node was read from.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Para(_) => "para",
            Self::Markup(m) => m.kind.element(),
            Self::Ref(_) => "ref",
            Self::Ulink(_) => "ulink",
            Self::Anchor(_) => "anchor",
            Self::LineBreak => "linebreak",
            Self::HorizontalRule => "hruler",
            Self::Symbol(s) => s.element,
            Self::Emoji(_) => "emoji",
            Self::List(l) if l.ordered => "orderedlist",
            Self::List(_) => "itemizedlist",
            Self::VariableList(_) => "variablelist",
            Self::SimpleSect(_) => "simplesect",
            Self::ParameterList(_) => "parameterlist",
            Self::XrefSect(_) => "xrefsect",
            Self::ProgramListing(_) => "programlisting",
            Self::Verbatim(_) => "verbatim",
            Self::Preformatted(_) => "preformatted",
            Self::Formula(_) => "formula",
            Self::Heading(_) => "heading",
            Self::Image(_) => "image",
            Self::Table(_) => "table",
            Self::Container(c) => c.kind.element(),
            Self::FormatOnly(f) => f.element(),
            Self::IndexEntry(_) => "indexentry",
            Self::Diagram(d) => d.element(),
            Self::Details(_) => "details",
            Self::TocList(_) => "toclist",
            Self::Sect(s) => DocSect::element_for(s.level),
            Self::Internal(_) => "internal",
        }
    }

    /// Returns true for nodes that start their own block in line output.
    pub fn is_block(&self) -> bool {
        match self {
            Self::Para(_)
            | Self::HorizontalRule
            | Self::List(_)
            | Self::VariableList(_)
            | Self::SimpleSect(_)
            | Self::ParameterList(_)
            | Self::XrefSect(_)
            | Self::ProgramListing(_)
            | Self::Verbatim(_)
            | Self::Preformatted(_)
            | Self::Heading(_)
            | Self::Table(_)
            | Self::Container(_)
            | Self::Diagram(_)
            | Self::Details(_)
            | Self::TocList(_)
            | Self::Sect(_)
            | Self::Internal(_) => true,
            Self::FormatOnly(f) => f.block,
            _ => false,
        }
    }

    /// Interpret one element at a position admitting `model`.
    pub(crate) fn parse(node: &XmlNode, model: ContentModel, parent: &'static str) -> Result<Self> {
        let name = node.name();

        if model.allows_inline() {
            if let Some(kind) = MarkupKind::from_element(name) {
                return Ok(Self::Markup(DocMarkup::parse(node, kind)?));
            }
            if let Some(symbol) = DocSymbol::lookup(name) {
                empty(node, "docEmptyType")?;
                return Ok(Self::Symbol(symbol));
            }
            if let Some(format) = DocFormatOnly::format_for(name) {
                return Ok(Self::FormatOnly(DocFormatOnly::parse(node, format)?));
            }
            match name {
                "ref" => return Ok(Self::Ref(DocRef::from_node(node)?)),
                "ulink" => return Ok(Self::Ulink(DocUlink::from_node(node)?)),
                "anchor" => return Ok(Self::Anchor(DocAnchor::from_node(node)?)),
                "linebreak" => {
                    empty(node, "docEmptyType")?;
                    return Ok(Self::LineBreak);
                }
                "emoji" => return Ok(Self::Emoji(DocEmoji::from_node(node)?)),
                "formula" => return Ok(Self::Formula(DocFormula::from_node(node)?)),
                "image" => return Ok(Self::Image(DocImage::from_node(node)?)),
                "indexentry" => return Ok(Self::IndexEntry(DocIndexEntry::from_node(node)?)),
                _ => {}
            }
        }

        if model.allows_blocks() {
            if let Some((kind, from_file)) = DocDiagram::kind_for(name) {
                return Ok(Self::Diagram(DocDiagram::parse(node, kind, from_file)?));
            }
            match name {
                "hruler" => {
                    empty(node, "docEmptyType")?;
                    return Ok(Self::HorizontalRule);
                }
                "itemizedlist" | "orderedlist" => return Ok(Self::List(DocList::from_node(node)?)),
                "variablelist" => {
                    return Ok(Self::VariableList(DocVariableList::from_node(node)?));
                }
                "simplesect" => return Ok(Self::SimpleSect(DocSimpleSect::from_node(node)?)),
                "parameterlist" => {
                    return Ok(Self::ParameterList(DocParameterList::from_node(node)?));
                }
                "xrefsect" => return Ok(Self::XrefSect(DocXrefSect::from_node(node)?)),
                "programlisting" => {
                    return Ok(Self::ProgramListing(ProgramListing::from_node(node)?));
                }
                "verbatim" => return Ok(Self::Verbatim(leaf_text(node, "docVerbatimType")?)),
                "preformatted" => {
                    Attrs::new(node, "docPreformattedType").finish()?;
                    let content = parse_mixed(node, ContentModel::Para, "docPreformattedType")?;
                    return Ok(Self::Preformatted(content));
                }
                "heading" => return Ok(Self::Heading(DocHeading::from_node(node)?)),
                "table" => return Ok(Self::Table(DocTable::from_node(node)?)),
                "blockquote" => {
                    return Ok(Self::Container(DocContainer::parse(node, ContainerKind::BlockQuote)?));
                }
                "parblock" => {
                    return Ok(Self::Container(DocContainer::parse(node, ContainerKind::ParBlock)?));
                }
                "details" => return Ok(Self::Details(DocDetails::from_node(node)?)),
                "toclist" => return Ok(Self::TocList(DocTocList::from_node(node)?)),
                _ => {}
            }
        }

        if let ContentModel::Body {
            sect_level,
            internal,
        } = model
        {
            if name == "para" {
                return Ok(Self::Para(DocPara::from_node(node)?));
            }
            if internal && name == "internal" {
                return Ok(Self::Internal(DocInternal::parse(node, sect_level)?));
            }
            if name == DocSect::element_for(sect_level) {
                return Ok(Self::Sect(DocSect::parse(node, sect_level)?));
            }
        }

        Err(DoxyError::unknown_element(parent, name))
    }
}

/// An attribute-less element without content.
fn empty(node: &XmlNode, shape: &'static str) -> Result<()> {
    Attrs::new(node, shape).finish()?;
    no_elements(node, shape)
}

fn no_elements(node: &XmlNode, shape: &'static str) -> Result<()> {
    match node.elements().next() {
        Some(child) => Err(DoxyError::unknown_element(shape, child.name())),
        None => Ok(()),
    }
}

// ============================================================================
// PARAGRAPHS AND SPANS
// ============================================================================

/// `<para>`: the unit of prose.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocPara {
    pub content: Vec<DocContent>,
}

impl DocPara {
    /// Returns true when the paragraph holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.iter().all(|c| match c {
            DocContent::Text(t) => t.trim().is_empty(),
            DocContent::Node(_) => false,
        })
    }
}

impl FromNode for DocPara {
    const SHAPE: &'static str = "docParaType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        Ok(Self {
            content: parse_mixed(node, ContentModel::Para, Self::SHAPE)?,
        })
    }
}

/// The text-level markup elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    Bold,
    Emphasis,
    ComputerOutput,
    Underline,
    Strike,
    S,
    Del,
    Ins,
    Subscript,
    Superscript,
    Center,
    Small,
    Cite,
    /// Javadoc `{@literal ...}`.
    JavadocLiteral,
    /// Javadoc `{@code ...}`.
    JavadocCode,
}

impl MarkupKind {
    const ALL: [Self; 15] = [
        Self::Bold,
        Self::Emphasis,
        Self::ComputerOutput,
        Self::Underline,
        Self::Strike,
        Self::S,
        Self::Del,
        Self::Ins,
        Self::Subscript,
        Self::Superscript,
        Self::Center,
        Self::Small,
        Self::Cite,
        Self::JavadocLiteral,
        Self::JavadocCode,
    ];

    pub fn element(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Emphasis => "emphasis",
            Self::ComputerOutput => "computeroutput",
            Self::Underline => "underline",
            Self::Strike => "strike",
            Self::S => "s",
            Self::Del => "del",
            Self::Ins => "ins",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::Center => "center",
            Self::Small => "small",
            Self::Cite => "cite",
            Self::JavadocLiteral => "javadocliteral",
            Self::JavadocCode => "javadoccode",
        }
    }

    pub fn from_element(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.element() == name)
    }
}

/// A markup span (`<bold>`, `<emphasis>`, `<computeroutput>`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct DocMarkup {
    pub kind: MarkupKind,
    pub content: Vec<DocContent>,
}

impl DocMarkup {
    pub const SHAPE: &'static str = "docMarkupType";

    fn parse(node: &XmlNode, kind: MarkupKind) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        Ok(Self {
            kind,
            content: parse_mixed(node, ContentModel::Para, Self::SHAPE)?,
        })
    }
}

/// A cross-reference in prose.
#[derive(Clone, Debug, PartialEq)]
pub struct DocRef {
    pub refid: String,
    pub kind: RefKind,
    pub external: Option<String>,
    pub content: Vec<DocContent>,
}

impl FromNode for DocRef {
    const SHAPE: &'static str = "docRefTextType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let refid = attrs.required_non_empty("refid")?.to_string();
        let kind = attrs.required_enum("kindref")?;
        let external = attrs.optional_string("external");
        attrs.finish()?;
        Ok(Self {
            refid,
            kind,
            external,
            content: parse_mixed(node, ContentModel::Inline, Self::SHAPE)?,
        })
    }
}

/// An external hyperlink.
#[derive(Clone, Debug, PartialEq)]
pub struct DocUlink {
    pub url: String,
    pub content: Vec<DocContent>,
}

impl FromNode for DocUlink {
    const SHAPE: &'static str = "docURLLink";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let url = attrs.required("url")?.to_string();
        attrs.finish()?;
        Ok(Self {
            url,
            content: parse_mixed(node, ContentModel::Inline, Self::SHAPE)?,
        })
    }
}

/// A link target inside a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocAnchor {
    pub id: String,
}

impl FromNode for DocAnchor {
    const SHAPE: &'static str = "docAnchorType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required_non_empty("id")?.to_string();
        attrs.finish()?;
        no_elements(node, Self::SHAPE)?;
        Ok(Self { id })
    }
}

/// Character entity elements and the characters they stand for.
///
/// `<para/>` inside a paragraph is the pilcrow entity, not a paragraph.
const SYMBOLS: &[(&str, &str)] = &[
    ("nonbreakablespace", "\u{a0}"),
    ("iexcl", "¡"),
    ("cent", "¢"),
    ("pound", "£"),
    ("curren", "¤"),
    ("yen", "¥"),
    ("brvbar", "¦"),
    ("sect", "§"),
    ("umlaut", "¨"),
    ("copy", "©"),
    ("ordf", "ª"),
    ("laquo", "«"),
    ("not", "¬"),
    ("shy", "\u{ad}"),
    ("registered", "®"),
    ("macr", "¯"),
    ("deg", "°"),
    ("plusmn", "±"),
    ("sup2", "²"),
    ("sup3", "³"),
    ("acute", "´"),
    ("micro", "µ"),
    ("para", "¶"),
    ("middot", "·"),
    ("cedil", "¸"),
    ("sup1", "¹"),
    ("ordm", "º"),
    ("raquo", "»"),
    ("frac14", "¼"),
    ("frac12", "½"),
    ("frac34", "¾"),
    ("iquest", "¿"),
    ("Agrave", "À"),
    ("Aacute", "Á"),
    ("Acirc", "Â"),
    ("Atilde", "Ã"),
    ("Aumlaut", "Ä"),
    ("Aring", "Å"),
    ("AElig", "Æ"),
    ("Ccedil", "Ç"),
    ("Egrave", "È"),
    ("Eacute", "É"),
    ("Ecirc", "Ê"),
    ("Eumlaut", "Ë"),
    ("Igrave", "Ì"),
    ("Iacute", "Í"),
    ("Icirc", "Î"),
    ("Iumlaut", "Ï"),
    ("ETH", "Ð"),
    ("Ntilde", "Ñ"),
    ("Ograve", "Ò"),
    ("Oacute", "Ó"),
    ("Ocirc", "Ô"),
    ("Otilde", "Õ"),
    ("Oumlaut", "Ö"),
    ("times", "×"),
    ("Oslash", "Ø"),
    ("Ugrave", "Ù"),
    ("Uacute", "Ú"),
    ("Ucirc", "Û"),
    ("Uumlaut", "Ü"),
    ("Yacute", "Ý"),
    ("THORN", "Þ"),
    ("szlig", "ß"),
    ("agrave", "à"),
    ("aacute", "á"),
    ("acirc", "â"),
    ("atilde", "ã"),
    ("aumlaut", "ä"),
    ("aring", "å"),
    ("aelig", "æ"),
    ("ccedil", "ç"),
    ("egrave", "è"),
    ("eacute", "é"),
    ("ecirc", "ê"),
    ("eumlaut", "ë"),
    ("igrave", "ì"),
    ("iacute", "í"),
    ("icirc", "î"),
    ("iumlaut", "ï"),
    ("eth", "ð"),
    ("ntilde", "ñ"),
    ("ograve", "ò"),
    ("oacute", "ó"),
    ("ocirc", "ô"),
    ("otilde", "õ"),
    ("oumlaut", "ö"),
    ("divide", "÷"),
    ("oslash", "ø"),
    ("ugrave", "ù"),
    ("uacute", "ú"),
    ("ucirc", "û"),
    ("uumlaut", "ü"),
    ("yacute", "ý"),
    ("thorn", "þ"),
    ("yumlaut", "ÿ"),
    ("fnof", "ƒ"),
    ("Alpha", "Α"),
    ("Beta", "Β"),
    ("Gamma", "Γ"),
    ("Delta", "Δ"),
    ("Epsilon", "Ε"),
    ("Zeta", "Ζ"),
    ("Eta", "Η"),
    ("Theta", "Θ"),
    ("Iota", "Ι"),
    ("Kappa", "Κ"),
    ("Lambda", "Λ"),
    ("Mu", "Μ"),
    ("Nu", "Ν"),
    ("Xi", "Ξ"),
    ("Omicron", "Ο"),
    ("Pi", "Π"),
    ("Rho", "Ρ"),
    ("Sigma", "Σ"),
    ("Tau", "Τ"),
    ("Upsilon", "Υ"),
    ("Phi", "Φ"),
    ("Chi", "Χ"),
    ("Psi", "Ψ"),
    ("Omega", "Ω"),
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("delta", "δ"),
    ("epsilon", "ε"),
    ("zeta", "ζ"),
    ("eta", "η"),
    ("theta", "θ"),
    ("iota", "ι"),
    ("kappa", "κ"),
    ("lambda", "λ"),
    ("mu", "μ"),
    ("nu", "ν"),
    ("xi", "ξ"),
    ("omicron", "ο"),
    ("pi", "π"),
    ("rho", "ρ"),
    ("sigmaf", "ς"),
    ("sigma", "σ"),
    ("tau", "τ"),
    ("upsilon", "υ"),
    ("phi", "φ"),
    ("chi", "χ"),
    ("psi", "ψ"),
    ("omega", "ω"),
    ("thetasym", "ϑ"),
    ("upsih", "ϒ"),
    ("piv", "ϖ"),
    ("bull", "•"),
    ("hellip", "…"),
    ("prime", "′"),
    ("Prime", "″"),
    ("oline", "‾"),
    ("frasl", "⁄"),
    ("weierp", "℘"),
    ("imaginary", "ℑ"),
    ("real", "ℜ"),
    ("trademark", "™"),
    ("tm", "™"),
    ("alefsym", "ℵ"),
    ("larr", "←"),
    ("uarr", "↑"),
    ("rarr", "→"),
    ("darr", "↓"),
    ("harr", "↔"),
    ("crarr", "↵"),
    ("lArr", "⇐"),
    ("uArr", "⇑"),
    ("rArr", "⇒"),
    ("dArr", "⇓"),
    ("hArr", "⇔"),
    ("forall", "∀"),
    ("part", "∂"),
    ("exist", "∃"),
    ("empty", "∅"),
    ("nabla", "∇"),
    ("isin", "∈"),
    ("notin", "∉"),
    ("ni", "∋"),
    ("prod", "∏"),
    ("sum", "∑"),
    ("minus", "−"),
    ("lowast", "∗"),
    ("radic", "√"),
    ("prop", "∝"),
    ("infin", "∞"),
    ("ang", "∠"),
    ("and", "∧"),
    ("or", "∨"),
    ("cap", "∩"),
    ("cup", "∪"),
    ("int", "∫"),
    ("there4", "∴"),
    ("sim", "∼"),
    ("cong", "≅"),
    ("asymp", "≈"),
    ("ne", "≠"),
    ("equiv", "≡"),
    ("le", "≤"),
    ("ge", "≥"),
    ("sub", "⊂"),
    ("sup", "⊃"),
    ("nsub", "⊄"),
    ("sube", "⊆"),
    ("supe", "⊇"),
    ("oplus", "⊕"),
    ("otimes", "⊗"),
    ("perp", "⊥"),
    ("sdot", "⋅"),
    ("lceil", "⌈"),
    ("rceil", "⌉"),
    ("lfloor", "⌊"),
    ("rfloor", "⌋"),
    ("lang", "⟨"),
    ("rang", "⟩"),
    ("loz", "◊"),
    ("spades", "♠"),
    ("clubs", "♣"),
    ("hearts", "♥"),
    ("diams", "♦"),
    ("OElig", "Œ"),
    ("oelig", "œ"),
    ("Scaron", "Š"),
    ("scaron", "š"),
    ("Yumlaut", "Ÿ"),
    ("circ", "ˆ"),
    ("tilde", "˜"),
    ("ensp", "\u{2002}"),
    ("emsp", "\u{2003}"),
    ("thinsp", "\u{2009}"),
    ("zwnj", "\u{200c}"),
    ("zwj", "\u{200d}"),
    ("lrm", "\u{200e}"),
    ("rlm", "\u{200f}"),
    ("ndash", "–"),
    ("mdash", "—"),
    ("lsquo", "‘"),
    ("rsquo", "’"),
    ("sbquo", "‚"),
    ("ldquo", "“"),
    ("rdquo", "”"),
    ("bdquo", "„"),
    ("dagger", "†"),
    ("Dagger", "‡"),
    ("permil", "‰"),
    ("lsaquo", "‹"),
    ("rsaquo", "›"),
    ("euro", "€"),
];

/// A character entity element such as `<ndash/>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocSymbol {
    pub element: &'static str,
    pub character: &'static str,
}

impl DocSymbol {
    /// Find the entity bound to an element name.
    pub fn lookup(name: &str) -> Option<Self> {
        SYMBOLS
            .iter()
            .find(|(element, _)| *element == name)
            .map(|&(element, character)| Self { element, character })
    }
}

/// `<emoji name=":smile:" unicode="&#x1f604;"/>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocEmoji {
    pub name: String,
    pub unicode: Option<String>,
}

impl FromNode for DocEmoji {
    const SHAPE: &'static str = "docEmojiType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let name = attrs.required("name")?.to_string();
        let unicode = attrs.optional_string("unicode");
        attrs.finish()?;
        no_elements(node, Self::SHAPE)?;
        Ok(Self { name, unicode })
    }
}

/// An inline or display formula, kept in its TeX spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocFormula {
    pub id: String,
    pub text: String,
}

impl FromNode for DocFormula {
    const SHAPE: &'static str = "docFormulaType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required("id")?.to_string();
        attrs.finish()?;
        no_elements(node, Self::SHAPE)?;
        Ok(Self {
            id,
            text: node.text(),
        })
    }
}

/// `<image type="html" name="diagram.png">caption</image>`
#[derive(Clone, Debug, PartialEq)]
pub struct DocImage {
    pub format: OutputFormat,
    pub name: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub alt: Option<String>,
    pub inline: bool,
    pub caption: Vec<DocContent>,
}

impl FromNode for DocImage {
    const SHAPE: &'static str = "docImageType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let format = attrs.required_enum("type")?;
        let name = attrs.optional_string("name");
        let width = attrs.optional_string("width");
        let height = attrs.optional_string("height");
        let alt = attrs.optional_string("alt");
        let inline = attrs.flag("inline")?;
        attrs.ignore(&["caption"]);
        attrs.finish()?;
        Ok(Self {
            format,
            name,
            width,
            height,
            alt,
            inline,
            caption: parse_mixed(node, ContentModel::Inline, Self::SHAPE)?,
        })
    }
}

/// Raw output for one backend (`<htmlonly>`, `<latexonly>`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocFormatOnly {
    pub format: OutputFormat,
    pub block: bool,
    pub text: String,
}

impl DocFormatOnly {
    pub const SHAPE: &'static str = "docHtmlOnlyType";

    fn format_for(name: &str) -> Option<OutputFormat> {
        match name {
            "htmlonly" => Some(OutputFormat::Html),
            "latexonly" => Some(OutputFormat::Latex),
            "manonly" => Some(OutputFormat::Man),
            "rtfonly" => Some(OutputFormat::Rtf),
            "xmlonly" => Some(OutputFormat::Xml),
            "docbookonly" => Some(OutputFormat::Docbook),
            _ => None,
        }
    }

    fn element(&self) -> &'static str {
        match self.format {
            OutputFormat::Html => "htmlonly",
            OutputFormat::Latex => "latexonly",
            OutputFormat::Man => "manonly",
            OutputFormat::Rtf => "rtfonly",
            OutputFormat::Xml => "xmlonly",
            OutputFormat::Docbook => "docbookonly",
        }
    }

    fn parse(node: &XmlNode, format: OutputFormat) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let block = if format == OutputFormat::Html {
            attrs.flag("block")?
        } else {
            false
        };
        attrs.finish()?;
        no_elements(node, Self::SHAPE)?;
        Ok(Self {
            format,
            block,
            text: node.text(),
        })
    }
}

/// `<indexentry>`: a term for the printed index. Has no visible output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocIndexEntry {
    pub primary: String,
    pub secondary: Option<String>,
}

impl FromNode for DocIndexEntry {
    const SHAPE: &'static str = "docIndexEntryType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut primary = None;
        let mut secondary = None;
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "primaryie" => set_once(
                    &mut primary,
                    leaf_text(child, Self::SHAPE)?,
                    Self::SHAPE,
                    "primaryie",
                )?,
                "secondaryie" => set_once(
                    &mut secondary,
                    leaf_text(child, Self::SHAPE)?,
                    Self::SHAPE,
                    "secondaryie",
                )?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        let primary =
            primary.ok_or_else(|| DoxyError::missing_child("indexentry", "primaryie"))?;
        Ok(Self {
            primary,
            secondary: secondary.filter(|s| !s.trim().is_empty()),
        })
    }
}

// ============================================================================
// BLOCKS
// ============================================================================

/// One item of an itemized or ordered list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocListItem {
    pub checked: Option<bool>,
    pub value: Option<u32>,
    pub paras: Vec<DocPara>,
}

impl FromNode for DocListItem {
    const SHAPE: &'static str = "docListItemType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let checked = match attrs.optional("override") {
            None => None,
            Some("checked") => Some(true),
            Some("unchecked") => Some(false),
            Some(other) => return Err(DoxyError::unknown_value(Self::SHAPE, "override", other)),
        };
        let value = attrs.number("value")?;
        attrs.finish()?;
        Ok(Self {
            checked,
            value,
            paras: parse_paras(node, Self::SHAPE)?,
        })
    }
}

/// `<itemizedlist>` or `<orderedlist>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocList {
    pub ordered: bool,
    pub style: Option<String>,
    pub start: Option<u32>,
    pub items: Vec<DocListItem>,
}

impl FromNode for DocList {
    const SHAPE: &'static str = "docListType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let ordered = node.name() == "orderedlist";
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let style = attrs.optional_string("type");
        let start = attrs.number("start")?;
        attrs.finish()?;

        let mut items = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "listitem" => items.push(DocListItem::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            ordered,
            style,
            start,
            items,
        })
    }
}

/// `<variablelist>`: alternating terms and definitions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocVariableList {
    pub entries: Vec<(Vec<DocContent>, DocListItem)>,
}

impl FromNode for DocVariableList {
    const SHAPE: &'static str = "docVariableListType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut entries = Vec::new();
        let mut pending_term: Option<Vec<DocContent>> = None;
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "varlistentry" => {
                    let mut term = None;
                    for inner in elements(child, "docVarListEntryType")? {
                        match inner.name() {
                            "term" => set_once(
                                &mut term,
                                parse_mixed(inner, ContentModel::Inline, "docTitleType")?,
                                "docVarListEntryType",
                                "term",
                            )?,
                            other => {
                                return Err(DoxyError::unknown_element("docVarListEntryType", other));
                            }
                        }
                    }
                    let term = term
                        .ok_or_else(|| DoxyError::missing_child("varlistentry", "term"))?;
                    set_once(&mut pending_term, term, Self::SHAPE, "varlistentry")?;
                }
                "listitem" => {
                    let term = pending_term
                        .take()
                        .ok_or_else(|| DoxyError::missing_child("variablelist", "varlistentry"))?;
                    entries.push((term, DocListItem::from_node(child)?));
                }
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        if pending_term.is_some() {
            return Err(DoxyError::missing_child("variablelist", "listitem"));
        }
        Ok(Self { entries })
    }
}

/// `<simplesect kind="note">`, `<simplesect kind="return">`, ...
#[derive(Clone, Debug, PartialEq)]
pub struct DocSimpleSect {
    pub kind: SimpleSectKind,
    pub title: Option<Vec<DocContent>>,
    pub paras: Vec<DocPara>,
}

impl FromNode for DocSimpleSect {
    const SHAPE: &'static str = "docSimpleSectType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let kind = attrs.required_enum("kind")?;
        attrs.finish()?;

        let mut title = None;
        let mut paras = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "title" => set_once(
                    &mut title,
                    parse_mixed(child, ContentModel::Inline, "docTitleType")?,
                    Self::SHAPE,
                    "title",
                )?,
                "para" => paras.push(DocPara::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self { kind, title, paras })
    }
}

/// A documented parameter name, optionally with a direction.
#[derive(Clone, Debug, PartialEq)]
pub struct DocParamName {
    pub direction: Option<ParamDirection>,
    pub content: Vec<DocContent>,
}

/// One row of a parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct DocParameterItem {
    pub names: Vec<DocParamName>,
    pub types: Vec<Vec<DocContent>>,
    pub description: Description,
}

impl FromNode for DocParameterItem {
    const SHAPE: &'static str = "docParamListItem";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut names = Vec::new();
        let mut types = Vec::new();
        let mut description = None;

        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "parameternamelist" => {
                    Attrs::new(child, "docParamNameList").finish()?;
                    for inner in elements(child, "docParamNameList")? {
                        match inner.name() {
                            "parametertype" => {
                                Attrs::new(inner, "docParamType").finish()?;
                                types.push(parse_mixed(inner, ContentModel::Inline, "docParamType")?);
                            }
                            "parametername" => {
                                let mut attrs = Attrs::new(inner, "docParamName");
                                let direction = attrs.optional_enum("direction")?;
                                attrs.finish()?;
                                names.push(DocParamName {
                                    direction,
                                    content: parse_mixed(inner, ContentModel::Inline, "docParamName")?,
                                });
                            }
                            other => return Err(DoxyError::unknown_element("docParamNameList", other)),
                        }
                    }
                }
                "parameterdescription" => set_once(
                    &mut description,
                    Description::from_node(child)?,
                    Self::SHAPE,
                    "parameterdescription",
                )?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }

        Ok(Self {
            names,
            types,
            description: description
                .unwrap_or_else(|| Description::empty(DescriptionKind::Parameter)),
        })
    }
}

/// `<parameterlist kind="param">`
#[derive(Clone, Debug, PartialEq)]
pub struct DocParameterList {
    pub kind: ParamListKind,
    pub items: Vec<DocParameterItem>,
}

impl FromNode for DocParameterList {
    const SHAPE: &'static str = "docParamListType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let kind = attrs.required_enum("kind")?;
        attrs.finish()?;
        let mut items = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "parameteritem" => items.push(DocParameterItem::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self { kind, items })
    }
}

/// Cross-referenced sections: `\todo`, `\bug`, `\deprecated`, `\test`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocXrefSect {
    pub id: String,
    pub title: String,
    pub description: Description,
}

impl FromNode for DocXrefSect {
    const SHAPE: &'static str = "docXRefSectType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required("id")?.to_string();
        attrs.finish()?;

        let mut title = None;
        let mut description = None;
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "xreftitle" => set_once(
                    &mut title,
                    leaf_text(child, Self::SHAPE)?,
                    Self::SHAPE,
                    "xreftitle",
                )?,
                "xrefdescription" => set_once(
                    &mut description,
                    Description::from_node(child)?,
                    Self::SHAPE,
                    "xrefdescription",
                )?,
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            id,
            title: title.unwrap_or_default(),
            description: description
                .ok_or_else(|| DoxyError::missing_child("xrefsect", "xrefdescription"))?,
        })
    }
}

/// `<heading level="2">`
#[derive(Clone, Debug, PartialEq)]
pub struct DocHeading {
    pub level: u8,
    pub content: Vec<DocContent>,
}

impl FromNode for DocHeading {
    const SHAPE: &'static str = "docHeadingType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let level = attrs
            .number("level")?
            .ok_or_else(|| DoxyError::missing_attribute("heading", "level", "numeric"))?;
        attrs.finish()?;
        Ok(Self {
            level,
            content: parse_mixed(node, ContentModel::Inline, Self::SHAPE)?,
        })
    }
}

/// One table cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocEntry {
    pub thead: bool,
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
    pub align: Option<Align>,
    pub valign: Option<VAlign>,
    pub width: Option<String>,
    pub class: Option<String>,
    pub paras: Vec<DocPara>,
}

impl FromNode for DocEntry {
    const SHAPE: &'static str = "docEntryType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let thead = attrs.flag("thead")?;
        let colspan = attrs.number("colspan")?;
        let rowspan = attrs.number("rowspan")?;
        let align = attrs.optional_enum("align")?;
        let valign = attrs.optional_enum("valign")?;
        let width = attrs.optional_string("width");
        let class = attrs.optional_string("class");
        attrs.finish()?;
        Ok(Self {
            thead,
            colspan,
            rowspan,
            align,
            valign,
            width,
            class,
            paras: parse_paras(node, Self::SHAPE)?,
        })
    }
}

/// `<table rows="2" cols="2">`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocTable {
    pub rows: u32,
    pub cols: u32,
    pub width: Option<String>,
    pub caption: Option<Vec<DocContent>>,
    pub body: Vec<Vec<DocEntry>>,
}

impl FromNode for DocTable {
    const SHAPE: &'static str = "docTableType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let rows = attrs.number("rows")?.unwrap_or(0);
        let cols = attrs.number("cols")?.unwrap_or(0);
        let width = attrs.optional_string("width");
        attrs.finish()?;

        let mut caption = None;
        let mut body = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "caption" => {
                    let mut cap_attrs = Attrs::new(child, "docCaptionType");
                    cap_attrs.ignore(&["id"]);
                    cap_attrs.finish()?;
                    set_once(
                        &mut caption,
                        parse_mixed(child, ContentModel::Inline, "docCaptionType")?,
                        Self::SHAPE,
                        "caption",
                    )?;
                }
                "row" => {
                    Attrs::new(child, "docRowType").finish()?;
                    let mut row = Vec::new();
                    for entry in elements(child, "docRowType")? {
                        match entry.name() {
                            "entry" => row.push(DocEntry::from_node(entry)?),
                            other => return Err(DoxyError::unknown_element("docRowType", other)),
                        }
                    }
                    body.push(row);
                }
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self {
            rows,
            cols,
            width,
            caption,
            body,
        })
    }
}

/// Paragraph containers that only differ by element name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    BlockQuote,
    ParBlock,
}

impl ContainerKind {
    pub fn element(self) -> &'static str {
        match self {
            Self::BlockQuote => "blockquote",
            Self::ParBlock => "parblock",
        }
    }
}

/// `<blockquote>` / `<parblock>`: a run of paragraphs.
#[derive(Clone, Debug, PartialEq)]
pub struct DocContainer {
    pub kind: ContainerKind,
    pub paras: Vec<DocPara>,
}

impl DocContainer {
    pub const SHAPE: &'static str = "docBlockQuoteType";

    fn parse(node: &XmlNode, kind: ContainerKind) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        Ok(Self {
            kind,
            paras: parse_paras(node, Self::SHAPE)?,
        })
    }
}

/// Diagram languages Doxygen passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Dot,
    Msc,
    PlantUml,
    Dia,
}

impl DiagramKind {
    /// Code fence language of the diagram source.
    pub fn language(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Msc => "msc",
            Self::PlantUml => "plantuml",
            Self::Dia => "dia",
        }
    }
}

/// A diagram written in place (`<dot>`, `<msc>`, `<plantuml>`) or read from
/// a file (`<dotfile>`, `<mscfile>`, `<diafile>`, `<plantumlfile>`).
#[derive(Clone, Debug, PartialEq)]
pub struct DocDiagram {
    pub kind: DiagramKind,
    /// Source file, for the file forms.
    pub file: Option<String>,
    /// Inline source, empty for the file forms.
    pub source: String,
    pub caption: Vec<DocContent>,
}

impl DocDiagram {
    const INLINE_SHAPE: &'static str = "docDotMscType";
    const PLANTUML_SHAPE: &'static str = "docPlantumlType";
    const FILE_SHAPE: &'static str = "docImageFileType";

    fn kind_for(name: &str) -> Option<(DiagramKind, bool)> {
        match name {
            "dot" => Some((DiagramKind::Dot, false)),
            "msc" => Some((DiagramKind::Msc, false)),
            "plantuml" => Some((DiagramKind::PlantUml, false)),
            "dotfile" => Some((DiagramKind::Dot, true)),
            "mscfile" => Some((DiagramKind::Msc, true)),
            "diafile" => Some((DiagramKind::Dia, true)),
            "plantumlfile" => Some((DiagramKind::PlantUml, true)),
            _ => None,
        }
    }

    pub fn shape(&self) -> &'static str {
        match (self.kind, self.file.is_some()) {
            (_, true) => Self::FILE_SHAPE,
            (DiagramKind::PlantUml, false) => Self::PLANTUML_SHAPE,
            _ => Self::INLINE_SHAPE,
        }
    }

    pub fn element(&self) -> &'static str {
        match (self.kind, self.file.is_some()) {
            (DiagramKind::Dot, false) => "dot",
            (DiagramKind::Msc, false) => "msc",
            (DiagramKind::PlantUml, false) => "plantuml",
            (DiagramKind::Dia, _) => "diafile",
            (DiagramKind::Dot, true) => "dotfile",
            (DiagramKind::Msc, true) => "mscfile",
            (DiagramKind::PlantUml, true) => "plantumlfile",
        }
    }

    fn parse(node: &XmlNode, kind: DiagramKind, from_file: bool) -> Result<Self> {
        if from_file {
            let mut attrs = Attrs::new(node, Self::FILE_SHAPE);
            let file = attrs.required_non_empty("name")?.to_string();
            attrs.ignore(&["width", "height"]);
            attrs.finish()?;
            return Ok(Self {
                kind,
                file: Some(file),
                source: String::new(),
                caption: parse_mixed(node, ContentModel::Inline, Self::FILE_SHAPE)?,
            });
        }

        let shape = if kind == DiagramKind::PlantUml {
            Self::PLANTUML_SHAPE
        } else {
            Self::INLINE_SHAPE
        };
        let mut attrs = Attrs::new(node, shape);
        let caption = attrs.optional_string("caption");
        attrs.ignore(&["name", "width", "height"]);
        if kind == DiagramKind::PlantUml {
            attrs.ignore(&["engine"]);
        }
        attrs.finish()?;
        no_elements(node, shape)?;
        Ok(Self {
            kind,
            file: None,
            source: node.text(),
            caption: caption.map(DocContent::Text).into_iter().collect(),
        })
    }
}

/// `<details>`: a collapsible block with an optional `<summary>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocDetails {
    pub summary: Option<Vec<DocContent>>,
    pub paras: Vec<DocPara>,
}

impl FromNode for DocDetails {
    const SHAPE: &'static str = "docDetailsType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut summary = None;
        let mut paras = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "summary" => {
                    Attrs::new(child, "docSummaryType").finish()?;
                    set_once(
                        &mut summary,
                        parse_mixed(child, ContentModel::Inline, "docSummaryType")?,
                        Self::SHAPE,
                        "summary",
                    )?;
                }
                "para" => paras.push(DocPara::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self { summary, paras })
    }
}

/// One entry of a `<toclist>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocTocItem {
    pub id: String,
    pub content: Vec<DocContent>,
}

impl FromNode for DocTocItem {
    const SHAPE: &'static str = "docTocItemType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.required_non_empty("id")?.to_string();
        attrs.finish()?;
        Ok(Self {
            id,
            content: parse_mixed(node, ContentModel::Inline, Self::SHAPE)?,
        })
    }
}

/// `<toclist>`: the `\tableofcontents` of a page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocTocList {
    pub items: Vec<DocTocItem>,
}

impl FromNode for DocTocList {
    const SHAPE: &'static str = "docTocListType";

    fn from_node(node: &XmlNode) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let mut items = Vec::new();
        for child in elements(node, Self::SHAPE)? {
            match child.name() {
                "tocitem" => items.push(DocTocItem::from_node(child)?),
                other => return Err(DoxyError::unknown_element(Self::SHAPE, other)),
            }
        }
        Ok(Self { items })
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

/// `<sect1>` .. `<sect4>` inside a description.
#[derive(Clone, Debug, PartialEq)]
pub struct DocSect {
    pub level: u8,
    pub id: Option<String>,
    pub title: Option<Vec<DocContent>>,
    pub content: Vec<DocContent>,
}

impl DocSect {
    pub const SHAPE: &'static str = "docSectType";

    fn element_for(level: u8) -> &'static str {
        match level {
            1 => "sect1",
            2 => "sect2",
            3 => "sect3",
            4 => "sect4",
            5 => "sect5",
            _ => "sect6",
        }
    }

    fn parse(node: &XmlNode, level: u8) -> Result<Self> {
        let mut attrs = Attrs::new(node, Self::SHAPE);
        let id = attrs.optional_string("id");
        attrs.finish()?;

        let model = ContentModel::Body {
            sect_level: level + 1,
            internal: true,
        };
        let mut title = None;
        let mut content = Vec::new();
        for child in node.children() {
            match child {
                XmlContent::Element(e) if e.name() == "title" => {
                    Attrs::new(e, "docTitleType").finish()?;
                    set_once(
                        &mut title,
                        parse_mixed(e, ContentModel::Inline, "docTitleType")?,
                        Self::SHAPE,
                        "title",
                    )?;
                }
                XmlContent::Element(e) => {
                    content.push(DocContent::Node(DocNode::parse(e, model, Self::SHAPE)?));
                }
                XmlContent::Text(t) => content.push(DocContent::Text(t.clone())),
            }
        }
        Ok(Self {
            level,
            id,
            title,
            content,
        })
    }
}

/// `<internal>`: documentation only shown with `INTERNAL_DOCS`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocInternal {
    pub content: Vec<DocContent>,
}

impl DocInternal {
    pub const SHAPE: &'static str = "docInternalType";

    fn parse(node: &XmlNode, sect_level: u8) -> Result<Self> {
        Attrs::new(node, Self::SHAPE).finish()?;
        let model = ContentModel::Body {
            sect_level,
            internal: false,
        };
        Ok(Self {
            content: parse_mixed(node, model, Self::SHAPE)?,
        })
    }
}

//! quick-xml event loop producing [`XmlNode`] trees.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::XmlNode;
use crate::error::{DoxyError, Result};

/// Parse a complete XML document and return its document element.
///
/// Comments, processing instructions and the XML declaration are dropped.
/// CDATA sections become ordinary text. Mismatched end tags are errors.
pub fn parse_document(input: &[u8]) -> Result<XmlNode> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(start_node(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = start_node(e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| DoxyError::xml("End tag without matching start tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(ref t)) => {
                if let Some(top) = stack.last_mut() {
                    let text = t.unescape().map_err(|e| {
                        DoxyError::xml(format!(
                            "Text error at position {}: {e}",
                            reader.buffer_position()
                        ))
                    })?;
                    top.push_text(&text);
                }
            }
            Ok(Event::CData(ref c)) => {
                if let Some(top) = stack.last_mut() {
                    top.push_text(&String::from_utf8_lossy(c.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DoxyError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(DoxyError::xml(format!("Unclosed element <{}>", open.name())));
    }
    root.ok_or_else(|| DoxyError::xml("Document has no root element"))
}

fn start_node(e: &BytesStart<'_>) -> Result<XmlNode> {
    let name_bytes = e.name();
    let tag_name = std::str::from_utf8(name_bytes.as_ref())
        .map_err(|e| DoxyError::xml(format!("Invalid tag name: {e}")))?;
    let mut node = XmlNode::new(tag_name);

    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| DoxyError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| DoxyError::xml(format!("Attribute key error: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| DoxyError::xml(format!("Attribute value error: {e}")))?;
        node.insert_attribute(key.to_string(), value.into_owned());
    }

    Ok(node)
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_element(node),
        None if root.is_none() => *root = Some(node),
        None => {
            return Err(DoxyError::xml(format!(
                "Second document element <{}>",
                node.name()
            )));
        }
    }
    Ok(())
}

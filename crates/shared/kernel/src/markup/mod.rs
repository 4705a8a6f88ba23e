//! XHTML reading and writing for [`Document`].
//!
//! Input must be well-formed XML. Whitespace-only text is dropped, comments,
//! declarations and processing instructions are ignored. Rendering is compact
//! (no added whitespace) and surfaces activation records as the reserved
//! [`ACTIVATION_RECORD_ATTR`] attribute. Reading that attribute back with
//! [`ACTIVATION_RECORD_VALUE`] restores the record, so rendered output can be
//! loaded again.

mod error;

pub use error::{MarkupError, MarkupErrorExt};

use crate::dom::{Document, NodeData, NodeId};
use mdf_domain::constants::{ACTIVATION_RECORD_ATTR, ACTIVATION_RECORD_VALUE};
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::fmt::Display;
use tracing::debug;

/// Parses a whole document; top-level nodes become children of the root.
///
/// # Errors
/// [`MarkupError::Syntax`] for malformed input and [`MarkupError::Document`]
/// when the reserved activation attribute carries any other value than
/// [`ACTIVATION_RECORD_VALUE`].
pub fn parse_document(input: &str) -> Result<Document, MarkupError> {
    let mut doc = Document::new();
    let root = doc.root();
    let top = parse_into(&mut doc, Some(root), input)?;
    debug!(top_level = top.len(), "Parsed document");
    Ok(doc)
}

/// Parses a fragment with exactly one top-level element into `doc`.
///
/// The returned subtree is detached; the caller decides where to attach it.
/// Nothing is left behind in `doc` on failure.
///
/// # Errors
/// As [`parse_document`], plus [`MarkupError::Fragment`] when the input does
/// not have exactly one top-level element.
pub fn parse_fragment(doc: &mut Document, input: &str) -> Result<NodeId, MarkupError> {
    let top = parse_into(doc, None, input)?;

    if let [single] = top.as_slice()
        && doc.element(*single).is_some()
    {
        return Ok(*single);
    }

    let found = top.len();
    discard(doc, top);
    Err(MarkupError::Fragment {
        message: format!("expected one top-level element, found {found} top-level nodes").into(),
        context: None,
    })
}

/// Renders every child of the document root.
#[must_use]
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for child in doc.children(doc.root()) {
        write_node(doc, *child, &mut out);
    }
    out
}

/// Renders a single node and its subtree; empty for dead ids.
#[must_use]
pub fn render_node(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn parse_into(
    doc: &mut Document,
    parent: Option<NodeId>,
    input: &str,
) -> Result<Vec<NodeId>, MarkupError> {
    let mut top = Vec::new();
    match read_events(doc, parent, input, &mut top) {
        Ok(()) => Ok(top),
        Err(err) => {
            discard(doc, top);
            Err(err)
        },
    }
}

fn read_events(
    doc: &mut Document,
    parent: Option<NodeId>,
    input: &str,
    top: &mut Vec<NodeId>,
) -> Result<(), MarkupError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut open: Vec<NodeId> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| syntax(e, reader.buffer_position()))?;
        match event {
            Event::Start(start) => {
                let id = element_from(doc, &start, &reader)?;
                attach(doc, open.last().copied().or(parent), id, &open, top)?;
                open.push(id);
            },
            Event::Empty(start) => {
                let id = element_from(doc, &start, &reader)?;
                attach(doc, open.last().copied().or(parent), id, &open, top)?;
            },
            Event::End(_) => {
                open.pop().ok_or_else(|| syntax("unexpected closing tag", reader.buffer_position()))?;
            },
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| syntax(e, reader.buffer_position()))?;
                if !text.trim().is_empty() {
                    let id = doc.create_text(text.into_owned());
                    attach(doc, open.last().copied().or(parent), id, &open, top)?;
                }
            },
            Event::CData(data) => {
                let text = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|e| syntax(e, reader.buffer_position()))?;
                let id = doc.create_text(text);
                attach(doc, open.last().copied().or(parent), id, &open, top)?;
            },
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {},
        }
    }

    if let Some(unclosed) = open.last() {
        let tag = doc.element(*unclosed).map_or("?", |e| e.tag()).to_owned();
        return Err(syntax(format!("unclosed element <{tag}>"), reader.buffer_position()));
    }
    Ok(())
}

fn element_from(
    doc: &mut Document,
    start: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<NodeId, MarkupError> {
    let at = reader.buffer_position();
    let tag = std::str::from_utf8(start.name().as_ref()).map_err(|e| syntax(e, at))?.to_owned();
    let id = doc.create_element(tag);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| syntax(e, at))?;
        let name = std::str::from_utf8(attr.key.as_ref()).map_err(|e| syntax(e, at))?.to_owned();
        let value = attr.unescape_value().map_err(|e| syntax(e, at))?.into_owned();
        if name.eq_ignore_ascii_case(ACTIVATION_RECORD_ATTR)
            && value == ACTIVATION_RECORD_VALUE
            && let Some(element) = doc.element(id)
        {
            element.activation().mark();
            continue;
        }
        if let Err(err) = doc.set_attribute(id, name, value) {
            let _ = doc.remove(id);
            return Err(MarkupError::Document { source: err, context: Some("Reading attributes".into()) });
        }
    }
    Ok(id)
}

fn attach(
    doc: &mut Document,
    parent: Option<NodeId>,
    id: NodeId,
    open: &[NodeId],
    top: &mut Vec<NodeId>,
) -> Result<(), MarkupError> {
    if open.is_empty() {
        top.push(id);
    }
    match parent {
        Some(parent) => doc.append_leaf(parent, id).context("Building tree"),
        None => Ok(()),
    }
}

fn discard(doc: &mut Document, nodes: Vec<NodeId>) {
    for id in nodes {
        let _ = doc.remove(id);
    }
}

fn syntax(err: impl Display, position: impl Display) -> MarkupError {
    MarkupError::Syntax { message: format!("{err} (at byte {position})").into(), context: None }
}

enum Frame<'d> {
    Open(NodeId),
    Close(&'d str),
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let mut stack = vec![Frame::Open(id)];

    while let Some(frame) = stack.pop() {
        let id = match frame {
            Frame::Open(id) => id,
            Frame::Close(tag) => {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                continue;
            },
        };
        let Some(node) = doc.node(id) else {
            continue;
        };

        match node.data() {
            NodeData::Text(text) => out.push_str(&escape(text.as_str())),
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(element.tag());
                for (name, value) in element.attributes() {
                    push_attribute(out, name, value);
                }
                if element.is_activated() {
                    push_attribute(out, ACTIVATION_RECORD_ATTR, ACTIVATION_RECORD_VALUE);
                }
                out.push('>');
                stack.push(Frame::Close(element.tag()));
                stack.extend(node.children().iter().rev().map(|child| Frame::Open(*child)));
            },
        }
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

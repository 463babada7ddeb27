// DOCX text extraction — paragraph text joined with newlines.
//
// A .docx file is a zip container; the body lives in `word/document.xml`.
// Only paragraphs that are direct children of `<w:body>` are read, so table
// cells and text boxes are left out. Within a paragraph, `<w:t>` text is
// concatenated, `<w:tab/>` becomes a tab and `<w:br/>` / `<w:cr/>` become
// line breaks.

use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::traits::TextExtractor;

const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).context("Not a valid DOCX container")?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .with_context(|| format!("DOCX is missing {DOCUMENT_PART}"))?
            .read_to_string(&mut xml)
            .context("Failed to read DOCX document body")?;

        Ok(paragraphs_from_xml(&xml)?.join("\n"))
    }
}

/// The body paragraph currently being collected.
struct OpenParagraph {
    depth: usize,
    text: String,
    /// Depth of an enclosing `<w:txbxContent>` whose text is ignored
    skip_from: Option<usize>,
}

/// Split a WordprocessingML document into its body paragraph texts, in order.
pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut open: Option<OpenParagraph> = None;
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event().context("Malformed DOCX document body")? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                let parent_is_body = stack.last().is_some_and(|p| p == b"body");
                stack.push(name);
                let depth = stack.len();

                if let Some(para) = open.as_mut() {
                    if para.skip_from.is_none() && is(&e, b"txbxContent") {
                        para.skip_from = Some(depth);
                    }
                } else if parent_is_body && is(&e, b"p") {
                    open = Some(OpenParagraph {
                        depth,
                        text: String::new(),
                        skip_from: None,
                    });
                }
            }
            Event::Empty(e) => {
                if open.is_none() {
                    if stack.last().is_some_and(|p| p == b"body") && is(&e, b"p") {
                        paragraphs.push(String::new());
                    }
                    continue;
                }
                let in_run = stack.last().is_some_and(|p| p == b"r");
                if let Some(para) = open.as_mut().filter(|p| p.skip_from.is_none()) {
                    if in_run {
                        push_run_marker(&e, &mut para.text);
                    }
                }
            }
            Event::Text(t) => {
                let in_text = stack.last().is_some_and(|p| p == b"t");
                if let Some(para) = open.as_mut().filter(|p| p.skip_from.is_none()) {
                    if in_text {
                        let text = t.unescape().context("Bad entity in DOCX text")?;
                        para.text.push_str(&text);
                    }
                }
            }
            Event::CData(c) => {
                let in_text = stack.last().is_some_and(|p| p == b"t");
                if let Some(para) = open.as_mut().filter(|p| p.skip_from.is_none()) {
                    if in_text {
                        para.text.push_str(&String::from_utf8_lossy(&c));
                    }
                }
            }
            Event::End(_) => {
                let depth = stack.len();
                if let Some(para) = open.as_mut() {
                    if para.skip_from == Some(depth) {
                        para.skip_from = None;
                    } else if para.depth == depth {
                        if let Some(done) = open.take() {
                            paragraphs.push(done.text);
                        }
                    }
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is(e: &BytesStart, local: &[u8]) -> bool {
    e.local_name().as_ref() == local
}

/// Text contributed by an empty element directly inside a `<w:r>` run.
fn push_run_marker(e: &BytesStart, text: &mut String) {
    match e.local_name().as_ref() {
        b"tab" => text.push('\t'),
        b"cr" => text.push('\n'),
        b"br" if !is_layout_break(e) => text.push('\n'),
        _ => {}
    }
}

/// Page and column breaks carry no line of text.
fn is_layout_break(e: &BytesStart) -> bool {
    e.attributes().flatten().any(|attr| {
        attr.key.local_name().as_ref() == b"type"
            && matches!(attr.value.as_ref(), b"page" | b"column")
    })
}

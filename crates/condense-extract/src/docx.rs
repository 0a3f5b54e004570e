use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use tracing::debug;

use crate::error::ExtractError;

/// Extract the text of a DOCX document.
///
/// Body paragraphs are taken in order, each followed by a blank line, and the
/// whole result is trimmed. Tables, headers and footers are not read. A
/// document without paragraphs yields an empty string.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes)?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        });

    let text = join_paragraphs(paragraphs);

    debug!(bytes = bytes.len(), text_len = text.len(), "extracted document text");

    Ok(text)
}

/// Join paragraph texts with blank lines and trim the result.
pub fn join_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for p in paragraphs {
        content.push_str(p.as_ref());
        content.push_str("\n\n");
    }
    content.trim().to_string()
}

/// Text of a single paragraph: its runs, including runs inside hyperlinks.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

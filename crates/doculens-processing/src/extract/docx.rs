//! DOCX raw-text extraction.
//!
//! Walks the document body's paragraphs and concatenates run text,
//! ignoring styling, tables-as-structure, and images.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractedText;

pub(crate) fn extract_docx(data: &[u8]) -> ExtractedText {
    let docx = match read_docx(data) {
        Ok(docx) => docx,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse DOCX document");
            return ExtractedText::NoText;
        }
    };

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    ExtractedText::from_raw(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    use super::*;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_extracts_paragraph_text() {
        let data = build_docx(&["First paragraph", "Second paragraph"]);
        assert_eq!(
            extract_docx(&data),
            ExtractedText::Text("First paragraph\nSecond paragraph".to_string())
        );
    }

    #[test]
    fn test_document_without_text_yields_no_text() {
        let data = build_docx(&[]);
        assert_eq!(extract_docx(&data), ExtractedText::NoText);
    }

    #[test]
    fn test_garbage_bytes_yield_no_text() {
        assert_eq!(extract_docx(b"PK\x03\x04 not actually a docx"), ExtractedText::NoText);
    }
}

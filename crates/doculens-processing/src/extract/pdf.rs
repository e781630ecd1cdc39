//! PDF text extraction.
//!
//! Pages are walked in ascending page order; within a page, text fragments
//! are joined with single spaces, and pages are joined with a newline. Both
//! separators and the page order are part of the observable contract.

use lopdf::Document;

use super::ExtractedText;

pub(crate) fn extract_pdf(data: &[u8]) -> ExtractedText {
    let doc = match Document::load_mem(data) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load PDF document");
            return ExtractedText::NoText;
        }
    };

    let pages = doc.get_pages();
    tracing::debug!(page_count = pages.len(), "Extracting PDF text");

    let mut page_texts = Vec::with_capacity(pages.len());
    // BTreeMap keys are page numbers; iteration is already in ascending order.
    for &page_number in pages.keys() {
        match doc.extract_text(&[page_number]) {
            Ok(content) => page_texts.push(join_fragments(&content)),
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "Failed to extract PDF page text");
                return ExtractedText::NoText;
            }
        }
    }

    ExtractedText::from_raw(page_texts.join("\n").trim().to_string())
}

/// Collapse the raw per-page text into space-separated fragments.
fn join_fragments(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_fragments_single_spaces() {
        assert_eq!(join_fragments("one\ntwo  three\n"), "one two three");
        assert_eq!(join_fragments(""), "");
    }

    #[test]
    fn test_empty_bytes_yield_no_text() {
        assert_eq!(extract_pdf(b""), ExtractedText::NoText);
    }

    #[test]
    fn test_truncated_header_yields_no_text() {
        assert_eq!(extract_pdf(b"%PDF-1.4\n"), ExtractedText::NoText);
    }
}

//! Extraction dispatcher and the uniform extraction result.

mod docx;
mod pdf;
mod text;

use std::path::Path;

use crate::detect::{detect, DocumentKind};

/// Outcome of a text extraction attempt.
///
/// Two cases only: usable text, or nothing. All extractor-internal failures
/// (corrupt content, decode errors, unsupported formats) collapse to
/// [`ExtractedText::NoText`]; no error variant crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    Text(String),
    NoText,
}

impl ExtractedText {
    /// Wrap raw extractor output, mapping whitespace-only text to `NoText`.
    pub(crate) fn from_raw(value: String) -> Self {
        if value.trim().is_empty() {
            ExtractedText::NoText
        } else {
            ExtractedText::Text(value)
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ExtractedText::Text(_))
    }

    /// Convert into the nullable form stored on a document record.
    pub fn into_option(self) -> Option<String> {
        match self {
            ExtractedText::Text(value) => Some(value),
            ExtractedText::NoText => None,
        }
    }
}

/// Extract plain text from document bytes, dispatching on the filename's
/// detected kind.
///
/// Never panics and never returns an error: unsupported kinds short-circuit
/// to [`ExtractedText::NoText`] without touching the bytes, and extractor
/// failures are absorbed here so the upload path can persist a record
/// regardless of extraction outcome.
pub fn extract(data: &[u8], filename: &str) -> ExtractedText {
    let kind = detect(filename);
    tracing::debug!(
        filename = %filename,
        kind = kind.as_str(),
        size = data.len(),
        "Dispatching text extraction"
    );

    let result = match kind {
        DocumentKind::Pdf => pdf::extract_pdf(data),
        DocumentKind::Docx => docx::extract_docx(data),
        DocumentKind::Txt => text::extract_txt(data),
        DocumentKind::Unsupported => {
            tracing::warn!(filename = %filename, "Unsupported file type, skipping extraction");
            ExtractedText::NoText
        }
    };

    match &result {
        ExtractedText::Text(content) => {
            tracing::debug!(filename = %filename, chars = content.len(), "Text extracted");
        }
        ExtractedText::NoText => {
            tracing::debug!(filename = %filename, "No text extracted");
        }
    }

    result
}

/// Extract from a file on disk. A missing or unreadable file maps to
/// [`ExtractedText::NoText`], like every other extraction failure.
pub fn extract_path(path: &Path, filename: &str) -> ExtractedText {
    match std::fs::read(path) {
        Ok(data) => extract(&data, filename),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read file for extraction");
            ExtractedText::NoText
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_short_circuits() {
        assert_eq!(extract(b"anything", "report.xyz"), ExtractedText::NoText);
        assert_eq!(extract(b"anything", "no_extension"), ExtractedText::NoText);
    }

    #[test]
    fn test_txt_passthrough() {
        let result = extract(b"plain body", "notes.txt");
        assert_eq!(result, ExtractedText::Text("plain body".to_string()));
    }

    #[test]
    fn test_corrupt_pdf_yields_no_text() {
        assert_eq!(extract(b"not a pdf at all", "broken.pdf"), ExtractedText::NoText);
    }

    #[test]
    fn test_corrupt_docx_yields_no_text() {
        assert_eq!(extract(b"not a zip archive", "broken.docx"), ExtractedText::NoText);
    }

    #[test]
    fn test_missing_path_yields_no_text() {
        let result = extract_path(Path::new("/nonexistent/file.txt"), "file.txt");
        assert_eq!(result, ExtractedText::NoText);
    }

    #[test]
    fn test_into_option() {
        assert_eq!(
            ExtractedText::Text("x".to_string()).into_option(),
            Some("x".to_string())
        );
        assert_eq!(ExtractedText::NoText.into_option(), None);
    }

    #[test]
    fn test_from_raw_maps_whitespace_to_no_text() {
        assert_eq!(ExtractedText::from_raw("  \n ".to_string()), ExtractedText::NoText);
        assert!(ExtractedText::from_raw(" x ".to_string()).is_text());
    }
}

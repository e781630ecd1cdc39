//! Filename-based format detection.

/// Supported document kinds, derived from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
    Unsupported,
}

impl DocumentKind {
    /// Uppercase label matching the `type` column of stored documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Txt => "TXT",
            DocumentKind::Unsupported => "UNSUPPORTED",
        }
    }
}

/// Classify a filename by its extension (text after the last `.`,
/// case-insensitive). Pure and total: unknown or missing extensions map to
/// [`DocumentKind::Unsupported`], never an error.
pub fn detect(filename: &str) -> DocumentKind {
    match extension(filename) {
        Some(ext) => match ext.to_ascii_uppercase().as_str() {
            "PDF" => DocumentKind::Pdf,
            "DOCX" => DocumentKind::Docx,
            "TXT" => DocumentKind::Txt,
            _ => DocumentKind::Unsupported,
        },
        None => DocumentKind::Unsupported,
    }
}

/// Extension of a filename: the non-empty text after the last `.`.
pub fn extension(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(detect("report.pdf"), DocumentKind::Pdf);
        assert_eq!(detect("notes.docx"), DocumentKind::Docx);
        assert_eq!(detect("readme.txt"), DocumentKind::Txt);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect("x.pdf"), detect("X.PDF"));
        assert_eq!(detect("a.Docx"), DocumentKind::Docx);
        assert_eq!(detect("b.TXT"), DocumentKind::Txt);
    }

    #[test]
    fn test_detect_unknown_extension() {
        assert_eq!(detect("report.xyz"), DocumentKind::Unsupported);
        assert_eq!(detect("archive.tar.gz"), DocumentKind::Unsupported);
    }

    #[test]
    fn test_detect_missing_extension() {
        assert_eq!(detect("Makefile"), DocumentKind::Unsupported);
        assert_eq!(detect(""), DocumentKind::Unsupported);
        assert_eq!(detect("trailing."), DocumentKind::Unsupported);
    }

    #[test]
    fn test_detect_uses_last_extension() {
        assert_eq!(detect("backup.txt.pdf"), DocumentKind::Pdf);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(DocumentKind::Pdf.as_str(), "PDF");
        assert_eq!(DocumentKind::Unsupported.as_str(), "UNSUPPORTED");
    }
}

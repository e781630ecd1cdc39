//! Plain-text extraction: strict UTF-8 passthrough.

use super::ExtractedText;

pub(crate) fn extract_txt(data: &[u8]) -> ExtractedText {
    match String::from_utf8(data.to_vec()) {
        Ok(content) => ExtractedText::from_raw(content),
        Err(e) => {
            tracing::warn!(error = %e, "Text file is not valid UTF-8");
            ExtractedText::NoText
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let result = extract_txt("héllo wörld\n".as_bytes());
        assert_eq!(result, ExtractedText::Text("héllo wörld\n".to_string()));
    }

    #[test]
    fn test_empty_input_yields_no_text() {
        assert_eq!(extract_txt(b""), ExtractedText::NoText);
        assert_eq!(extract_txt(b"   \n"), ExtractedText::NoText);
    }

    #[test]
    fn test_invalid_utf8_yields_no_text() {
        assert_eq!(extract_txt(&[0xff, 0xfe, 0x41]), ExtractedText::NoText);
    }
}

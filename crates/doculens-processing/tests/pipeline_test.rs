//! End-to-end tests for the extraction pipeline: detector, dispatcher,
//! extractors, and summarizer working against synthetic documents.

use std::io::Write;

use doculens_processing::{detect, extract, extract_path, summarize, DocumentKind, ExtractedText};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF where each entry in `page_texts` becomes one page containing
/// that text.
fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_texts.len());
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content stream encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let kid_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => kid_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("PDF serializes");
    buffer
}

#[test]
fn test_pdf_multi_page_order() {
    let data = build_pdf(&["A", "B", "C"]);
    assert_eq!(
        extract(&data, "three_pages.pdf"),
        ExtractedText::Text("A\nB\nC".to_string())
    );
}

#[test]
fn test_pdf_single_page() {
    let data = build_pdf(&["Hello World"]);
    assert_eq!(
        extract(&data, "one_page.pdf"),
        ExtractedText::Text("Hello World".to_string())
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let data = build_pdf(&["A", "B", "C"]);
    let first = extract(&data, "same.pdf");
    let second = extract(&data, "same.pdf");
    assert_eq!(first, second);
}

#[test]
fn test_txt_upload_then_summarize_scenario() {
    let content = "Hello world. This is a test. Third sentence. Fourth one. Fifth sentence.";

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upload.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    // Upload-side extraction: the stored text equals the file content.
    let extracted = extract_path(&path, "upload.txt");
    let stored_text = extracted.into_option();
    assert_eq!(stored_text.as_deref(), Some(content));

    // Later summarize call reads the stored text, never the file.
    let summary = summarize(stored_text.as_deref().unwrap()).unwrap();
    assert_eq!(summary.sentence_count, 4);
    assert_eq!(
        summary.text,
        "Hello world. This is a test. Third sentence. Fourth one."
    );
}

#[test]
fn test_unsupported_upload_persists_null_text() {
    // An unsupported extension still produces a persistable outcome.
    assert_eq!(detect("report.xyz"), DocumentKind::Unsupported);
    let extracted = extract(b"opaque bytes", "report.xyz");
    assert_eq!(extracted.into_option(), None);
}

#[test]
fn test_record_with_no_text_is_rejected_by_summarizer() {
    // A record whose extraction yielded NoText stores NULL; summarizing it
    // passes the empty string and must be rejected, not summarized.
    let stored: Option<String> = ExtractedText::NoText.into_option();
    assert!(summarize(stored.as_deref().unwrap_or("")).is_err());
}

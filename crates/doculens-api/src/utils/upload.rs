//! Common utilities for the file upload handler

use axum::extract::Multipart;
use doculens_core::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

/// Client-supplied metadata sent alongside the file as a JSON string.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UploadMetadata {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub project: Option<String>,
}

/// Extract file data, original filename, and metadata from the multipart
/// form. Exactly one field named "file" is required; an optional "metadata"
/// field carries a JSON object.
pub async fn extract_multipart_upload(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, String, UploadMetadata), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut metadata = UploadMetadata::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                if file_data.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                filename = field.file_name().map(|s: &str| s.to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;
                file_data = Some(data.to_vec());
            }
            "metadata" => {
                let raw = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read metadata field: {}", e))
                })?;
                metadata = serde_json::from_str(&raw)
                    .map_err(|e| AppError::InvalidInput(format!("Invalid metadata JSON: {}", e)))?;
            }
            _ => {}
        }
    }

    let file_data = file_data.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    let original_filename = filename.unwrap_or_else(|| "unknown".to_string());

    Ok((file_data, original_filename, metadata))
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// MIME type for a stored document's `type` column, used for downloads.
pub fn content_type_for(doc_type: &str) -> &'static str {
    match doc_type {
        "PDF" => "application/pdf",
        "DOCX" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "TXT" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(100, 1024).is_ok());
        assert!(validate_file_size(1024, 1024).is_ok());
        match validate_file_size(2 * 1024 * 1024, 1024 * 1024) {
            Err(AppError::PayloadTooLarge(msg)) => assert!(msg.contains("1 MB")),
            _ => panic!("Expected PayloadTooLarge"),
        }
    }

    #[test]
    fn test_content_type_for_known_types() {
        assert_eq!(content_type_for("PDF"), "application/pdf");
        assert_eq!(content_type_for("TXT"), "text/plain; charset=utf-8");
        assert_eq!(content_type_for("XYZ"), "application/octet-stream");
    }

    #[test]
    fn test_upload_metadata_parses_partial_json() {
        let metadata: UploadMetadata =
            serde_json::from_str(r#"{"title": "Q3 Report", "category": "Finance"}"#).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Q3 Report"));
        assert_eq!(metadata.category.as_deref(), Some("Finance"));
        assert!(metadata.description.is_none());
        assert!(metadata.project.is_none());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted document record.
///
/// `extracted_text` is populated once at upload time from the extraction
/// result (`None` when no text could be extracted) and is never rewritten
/// afterwards; summarization only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub doc_type: String,
    pub category: String,
    pub status: String,
    pub description: String,
    pub file_url: String,
    pub file_size: i64,
    pub project: Option<String>,
    pub extracted_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Filename component of `file_url` (the storage key of the stored file).
    pub fn storage_filename(&self) -> Option<&str> {
        self.file_url
            .rsplit_once('/')
            .map(|(_, name)| name)
            .filter(|name| !name.is_empty())
    }
}

/// Input for inserting a new document record.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub doc_type: String,
    pub category: String,
    pub status: String,
    pub description: String,
    pub file_url: String,
    pub file_size: i64,
    pub project: Option<String>,
    pub extracted_text: Option<String>,
}

/// Partial update of document metadata. `None` fields are left unchanged;
/// the extracted text cannot be updated through this path.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateDocument {
    pub title: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub project: Option<String>,
}

impl UpdateDocument {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.project.is_none()
    }
}

/// Paginated document listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentListResponse {
    pub documents: Vec<Document>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            id: Uuid::new_v4(),
            title: "report.pdf".to_string(),
            doc_type: "PDF".to_string(),
            category: "Other".to_string(),
            status: "pending".to_string(),
            description: String::new(),
            file_url: "/uploads/0a1b2c3d.pdf".to_string(),
            file_size: 2048,
            project: None,
            extracted_text: Some("Extracted body".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_storage_filename_from_file_url() {
        let doc = sample_document();
        assert_eq!(doc.storage_filename(), Some("0a1b2c3d.pdf"));
    }

    #[test]
    fn test_storage_filename_rejects_trailing_slash() {
        let mut doc = sample_document();
        doc.file_url = "/uploads/".to_string();
        assert_eq!(doc.storage_filename(), None);
    }

    #[test]
    fn test_document_serializes_type_field() {
        let doc = sample_document();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "PDF");
        assert_eq!(value["file_url"], "/uploads/0a1b2c3d.pdf");
        assert!(value.get("doc_type").is_none());
    }

    #[test]
    fn test_update_document_is_empty() {
        assert!(UpdateDocument::default().is_empty());
        let update = UpdateDocument {
            status: Some("analysed".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}

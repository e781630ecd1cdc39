use serde::Serialize;
use utoipa::ToSchema;

/// Result of summarizing a document's extracted text.
///
/// Recomputed on every request from the stored text; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Summary {
    /// Character count of the source text.
    pub source_length: usize,
    /// Number of sentences actually used (0..=4).
    pub sentence_count: usize,
    /// The summary text, always terminated with `.`.
    pub text: String,
}

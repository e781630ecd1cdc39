//! Dashboard and storage analytics.
//!
//! Aggregation happens in SQL (counts by status, summed file sizes); this
//! service shapes the results into the dashboard/storage responses.

use chrono::{DateTime, Utc};
use doculens_core::models::analytics::TOTAL_STORAGE_GB;
use doculens_core::models::{
    ActivityEntry, DashboardStats, RecentDocumentEntry, StorageSummary,
};
use doculens_core::AppError;
use doculens_db::DocumentRepository;

const RECENT_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct AnalyticsService {
    documents: DocumentRepository,
}

impl AnalyticsService {
    pub fn new(documents: DocumentRepository) -> Self {
        Self { documents }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let status_counts = self.documents.status_counts().await?;
        let (total_documents, storage_bytes) = self.documents.storage_totals().await?;
        let recent = self.documents.recent(RECENT_LIMIT).await?;
        let now = Utc::now();

        let count_for = |status: &str| {
            status_counts
                .iter()
                .find(|(name, _)| name == status)
                .map(|(_, count)| *count)
                .unwrap_or(0)
        };

        let recent_documents = recent
            .iter()
            .map(|doc| RecentDocumentEntry {
                id: doc.id,
                title: doc.title.clone(),
                doc_type: doc.doc_type.clone(),
                category: doc.category.clone(),
                status: display_status(&doc.status),
                date: doc.created_at,
                description: if doc.description.is_empty() {
                    "No description provided".to_string()
                } else {
                    doc.description.clone()
                },
            })
            .collect();

        let recent_activity = recent
            .iter()
            .map(|doc| ActivityEntry {
                id: format!("activity-{}", doc.id),
                user: "System".to_string(),
                activity_type: "upload".to_string(),
                document: doc.title.clone(),
                status: activity_status(&doc.status),
                time: relative_time(doc.created_at, now),
            })
            .collect();

        Ok(DashboardStats {
            total_documents,
            analysed_documents: count_for("analysed"),
            high_risk_documents: count_for("high-risk"),
            pending_documents: count_for("pending"),
            storage_used: bytes_to_gb(storage_bytes),
            total_storage: TOTAL_STORAGE_GB,
            recent_activity,
            recent_documents,
        })
    }

    pub async fn storage(&self) -> Result<StorageSummary, AppError> {
        let (_, storage_bytes) = self.documents.storage_totals().await?;
        let used = bytes_to_gb(storage_bytes);
        let total = TOTAL_STORAGE_GB;
        Ok(StorageSummary {
            used,
            total,
            percentage: round2(used / total * 100.0),
            available: round2(total - used),
        })
    }
}

/// Display casing for document statuses.
pub fn display_status(status: &str) -> String {
    match status {
        "high-risk" => "High Risk".to_string(),
        "analysed" => "Analysed".to_string(),
        "pending" => "Pending".to_string(),
        other => other.to_string(),
    }
}

/// Activity feed status: anything not analysed/high-risk reads as completed.
fn activity_status(status: &str) -> String {
    match status {
        "high-risk" => "High Risk".to_string(),
        "analysed" => "Analysed".to_string(),
        _ => "Completed".to_string(),
    }
}

fn bytes_to_gb(bytes: i64) -> f64 {
    round2(bytes as f64 / (1024.0 * 1024.0 * 1024.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human-readable relative time for the activity feed.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Total dashboard storage allowance, in gigabytes.
pub const TOTAL_STORAGE_GB: f64 = 10.0;

/// Dashboard overview: document counts by status, storage usage, and the
/// most recent documents/activity.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_documents: i64,
    pub analysed_documents: i64,
    pub high_risk_documents: i64,
    pub pending_documents: i64,
    /// Used storage in gigabytes, rounded to two decimals.
    pub storage_used: f64,
    pub total_storage: f64,
    pub recent_activity: Vec<ActivityEntry>,
    pub recent_documents: Vec<RecentDocumentEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentDocumentEntry {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub category: String,
    /// Display-cased status (e.g. "High Risk", not "high-risk").
    pub status: String,
    pub date: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityEntry {
    pub id: String,
    pub user: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub document: String,
    pub status: String,
    /// Human-readable relative time ("5 mins ago").
    pub time: String,
}

/// Storage usage summary in gigabytes.
#[derive(Debug, Serialize, ToSchema)]
pub struct StorageSummary {
    pub used: f64,
    pub total: f64,
    pub percentage: f64,
    pub available: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_camel_case_keys() {
        let stats = DashboardStats {
            total_documents: 3,
            analysed_documents: 1,
            high_risk_documents: 0,
            pending_documents: 2,
            storage_used: 0.02,
            total_storage: TOTAL_STORAGE_GB,
            recent_activity: vec![],
            recent_documents: vec![],
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalDocuments"], 3);
        assert_eq!(value["highRiskDocuments"], 0);
        assert_eq!(value["storageUsed"], 0.02);
        assert!(value.get("total_documents").is_none());
    }
}

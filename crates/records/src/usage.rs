//! Usage detail records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage consumption of one service for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDetailRecord {
    /// Unique identifier
    pub id: String,
    /// Owning customer id
    pub customer_id: String,
    /// Owning customer name (denormalized for search)
    pub customer_name: String,
    /// Service name (e.g. "Backup", "Disaster Recovery")
    pub service: String,
    /// Consumed storage in GB
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
    /// Purchased quota in GB
    #[serde(rename = "quotaGB", default, skip_serializing_if = "Option::is_none")]
    pub quota_gb: Option<f64>,
    /// Workloads consuming this service
    pub workloads: u64,
    /// Whether the service is active
    pub active: bool,
    /// When the usage sample was recorded
    pub recorded_at: DateTime<Utc>,
}

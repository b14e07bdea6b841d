//! Alert records
//!
//! Severity, category and alert type are closed sets on the dashboard, but
//! providers may send values we don't know yet. Those are kept verbatim in
//! an `Other` variant so they round-trip and still filter by exact string.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque provider payload attached to an alert, in original key order
pub type RawPayload = IndexMap<String, serde_json::Value>;

string_enum! {
    /// Alert severity
    Severity {
        /// Needs immediate attention
        Critical => "Critical",
        /// Operation failed
        Error => "Error",
        /// Degraded, not failed
        Warning => "Warning",
        /// Informational
        Info => "Info",
    }
}

string_enum! {
    /// Product area that raised the alert
    Category {
        /// Backup and recovery
        Backup => "Backup",
        /// Email security
        EmailSecurity => "EmailSecurity",
        /// Platform and agents
        System => "System",
        /// Endpoint detection and response
        Edr => "EDR",
        /// Network connectivity
        Network => "Network",
    }
}

string_enum! {
    /// What happened
    AlertType {
        /// A backup run failed
        BackupFailed => "BackupFailed",
        /// No successful backup for the configured number of days
        NoBackupForXDays => "NoBackupForXDays",
        /// Malware found during a scan
        MalwareDetected => "MalwareDetected",
        /// Backup storage is full
        StorageFull => "StorageFull",
        /// Agent lost connection
        ConnectionLost => "ConnectionLost",
        /// License close to expiry
        LicenseExpiring => "LicenseExpiring",
    }
}

/// A protection alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    /// Unique identifier
    pub id: String,
    /// Alert type
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Severity
    pub severity: Severity,
    /// Category
    pub category: Category,
    /// Protection plan that raised the alert
    pub plan_name: String,
    /// Affected resource (machine, mailbox, ...)
    pub resource_name: String,
    /// When the alert was raised
    pub created_date: DateTime<Utc>,
    /// Provider payload, never inspected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_payload: Option<RawPayload>,
}

impl AlertRecord {
    /// Create an alert without a raw payload
    pub fn new(
        id: impl Into<String>,
        alert_type: AlertType,
        severity: Severity,
        category: Category,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            alert_type,
            severity,
            category,
            plan_name: String::new(),
            resource_name: String::new(),
            created_date,
            raw_payload: None,
        }
    }

    /// Set the plan and resource names
    pub fn with_target(mut self, plan_name: impl Into<String>, resource_name: impl Into<String>) -> Self {
        self.plan_name = plan_name.into();
        self.resource_name = resource_name.into();
        self
    }

    /// Attach a raw payload
    pub fn with_payload(mut self, payload: RawPayload) -> Self {
        self.raw_payload = Some(payload);
        self
    }
}

//! Built-in sample data
//!
//! The mock tenant set the dashboard ships with. Used by the memory provider
//! and handy for demos without a snapshot file.

use chrono::{DateTime, TimeZone, Utc};
use warden_records::{
    AlertEmailRecord, AlertRecord, AlertType, Category, CustomerRecord, EmailStatus, RawPayload,
    Severity, Snapshot, UsageDetailRecord,
};

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Complete sample snapshot
pub fn snapshot() -> Snapshot {
    Snapshot {
        customers: customers(),
        alerts: alerts(),
        usage_details: usage_details(),
        alert_emails: alert_emails(),
    }
}

/// Six sample customers; TechCorp Solutions is disabled
pub fn customers() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord::new("cust-001", "LAITH EMC", 9390.0, ts(2022, 11, 3, 9, 0))
            .with_production_start(ts(2023, 1, 15, 0, 0))
            .with_workloads(14, 42, 96)
            .with_utilization(78.4),
        CustomerRecord::new("cust-002", "TechCorp Solutions", 12500.0, ts(2022, 6, 21, 10, 30))
            .with_enabled(false)
            .with_production_start(ts(2022, 8, 1, 0, 0))
            .with_workloads(32, 85, 140)
            .with_utilization(92.1),
        CustomerRecord::new("cust-003", "Global Trading LLC", 6780.0, ts(2023, 2, 14, 8, 15))
            .with_production_start(ts(2023, 3, 1, 0, 0))
            .with_workloads(9, 27, 64)
            .with_utilization(66.0),
        CustomerRecord::new("cust-004", "Al Mahtab", 2150.0, ts(2023, 9, 5, 11, 45))
            .with_production_start(ts(2023, 10, 1, 0, 0))
            .with_workloads(3, 7, 21)
            .with_utilization(38.5),
        CustomerRecord::new("cust-005", "AL AYAAN", 4020.0, ts(2024, 1, 22, 14, 0))
            .with_production_start(ts(2024, 2, 12, 0, 0))
            .with_workloads(5, 14, 33)
            .with_utilization(54.2),
        CustomerRecord::new("cust-006", "Desert Logistics", 780.0, ts(2024, 6, 30, 16, 20)),
    ]
}

/// Six sample alerts, two of them Critical
pub fn alerts() -> Vec<AlertRecord> {
    let mut payload = RawPayload::new();
    payload.insert("jobId".to_string(), serde_json::json!("job-88213"));
    payload.insert("exitCode".to_string(), serde_json::json!(17));
    payload.insert("retries".to_string(), serde_json::json!(3));

    vec![
        AlertRecord::new(
            "alert-001",
            AlertType::BackupFailed,
            Severity::Critical,
            Category::Backup,
            ts(2024, 7, 1, 2, 14),
        )
        .with_target("Nightly Server Backup", "SRV-DC01")
        .with_payload(payload),
        AlertRecord::new(
            "alert-002",
            AlertType::MalwareDetected,
            Severity::Error,
            Category::Edr,
            ts(2024, 7, 1, 9, 42),
        )
        .with_target("Endpoint Protection", "WS-FIN-017"),
        AlertRecord::new(
            "alert-003",
            AlertType::StorageFull,
            Severity::Critical,
            Category::Backup,
            ts(2024, 7, 2, 3, 5),
        )
        .with_target("Cloud Vault Policy", "Vault-EU-02"),
        AlertRecord::new(
            "alert-004",
            AlertType::ConnectionLost,
            Severity::Warning,
            Category::Network,
            ts(2024, 7, 2, 13, 30),
        )
        .with_target("Nightly Server Backup", "SRV-APP03"),
        AlertRecord::new(
            "alert-005",
            AlertType::LicenseExpiring,
            Severity::Info,
            Category::System,
            ts(2024, 7, 3, 8, 0),
        )
        .with_target("Licensing", "TechCorp Solutions"),
        AlertRecord::new(
            "alert-006",
            AlertType::NoBackupForXDays,
            Severity::Warning,
            Category::Backup,
            ts(2024, 7, 3, 18, 55),
        )
        .with_target("Workstation Backup", "WS-HR-002"),
    ]
}

/// Per-service storage usage
pub fn usage_details() -> Vec<UsageDetailRecord> {
    let laith = ("cust-001", "LAITH EMC");
    let techcorp = ("cust-002", "TechCorp Solutions");
    let global = ("cust-003", "Global Trading LLC");
    let mahtab = ("cust-004", "Al Mahtab");
    let ayaan = ("cust-005", "AL AYAAN");

    vec![
        usage("usage-001", laith, "Backup", 7120.0, Some(10000.0), 152, true),
        usage("usage-002", laith, "Disaster Recovery", 2270.0, Some(3000.0), 18, true),
        usage("usage-003", techcorp, "Backup", 12500.0, Some(12000.0), 257, false),
        usage("usage-004", global, "Backup", 5480.0, Some(8000.0), 100, true),
        usage("usage-005", global, "File Sync & Share", 1300.0, None, 64, true),
        usage("usage-006", mahtab, "Backup", 2150.0, Some(2500.0), 31, true),
        usage("usage-007", ayaan, "Backup", 3620.0, Some(5000.0), 52, true),
        usage("usage-008", ayaan, "Email Archiving", 400.0, None, 33, false),
    ]
}

fn usage(
    id: &str,
    (customer_id, customer_name): (&str, &str),
    service: &str,
    storage_gb: f64,
    quota_gb: Option<f64>,
    workloads: u64,
    active: bool,
) -> UsageDetailRecord {
    UsageDetailRecord {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        service: service.to_string(),
        storage_gb,
        quota_gb,
        workloads,
        active,
        recorded_at: ts(2024, 7, 1, 0, 0),
    }
}

/// Alert notification audit log
pub fn alert_emails() -> Vec<AlertEmailRecord> {
    vec![
        email(
            "mail-001",
            "alert-001",
            "it-ops@laithemc.example",
            "[Critical] Backup failed on SRV-DC01",
            EmailStatus::Sent,
            ts(2024, 7, 1, 2, 15),
        ),
        email(
            "mail-002",
            "alert-002",
            "security@globaltrading.example",
            "[Error] Malware detected on WS-FIN-017",
            EmailStatus::Sent,
            ts(2024, 7, 1, 9, 43),
        ),
        email(
            "mail-003",
            "alert-003",
            "storage-admins@techcorp.example",
            "[Critical] Cloud vault Vault-EU-02 is full",
            EmailStatus::Failed,
            ts(2024, 7, 2, 3, 6),
        ),
        email(
            "mail-004",
            "alert-003",
            "storage-admins@techcorp.example",
            "[Critical] Cloud vault Vault-EU-02 is full",
            EmailStatus::Sent,
            ts(2024, 7, 2, 3, 21),
        ),
        email(
            "mail-005",
            "alert-005",
            "billing@techcorp.example",
            "[Info] License expires in 14 days",
            EmailStatus::Pending,
            ts(2024, 7, 3, 8, 1),
        ),
    ]
}

fn email(
    id: &str,
    alert_id: &str,
    recipient: &str,
    subject: &str,
    status: EmailStatus,
    sent_at: DateTime<Utc>,
) -> AlertEmailRecord {
    AlertEmailRecord {
        id: id.to_string(),
        alert_id: alert_id.to_string(),
        recipient: recipient.to_string(),
        subject: subject.to_string(),
        status,
        sent_at,
    }
}

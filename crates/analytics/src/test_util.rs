//! Shared fixtures for pipeline tests

use chrono::{DateTime, TimeZone, Utc};
use warden_records::{AlertRecord, AlertType, Category, CustomerRecord, Severity};

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Six customers; TechCorp is disabled, Desert Logistics has no optional counters
pub fn customers() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord::new("c-1", "LAITH EMC", 9390.0, at(2023, 1, 10))
            .with_workloads(12, 40, 85)
            .with_utilization(78.5),
        CustomerRecord::new("c-2", "TechCorp Solutions", 12500.0, at(2023, 3, 5))
            .with_enabled(false)
            .with_workloads(30, 80, 120)
            .with_utilization(91.0),
        CustomerRecord::new("c-3", "Global Trading LLC", 6780.0, at(2023, 6, 20))
            .with_workloads(8, 25, 60)
            .with_utilization(64.2),
        CustomerRecord::new("c-4", "Al Mahtab", 2150.0, at(2024, 2, 1))
            .with_workloads(2, 6, 18)
            .with_utilization(35.0),
        CustomerRecord::new("c-5", "AL AYAAN", 4020.0, at(2024, 4, 15))
            .with_workloads(5, 12, 30)
            .with_utilization(52.8),
        CustomerRecord::new("c-6", "Desert Logistics", 780.0, at(2024, 7, 30)),
    ]
}

/// Six alerts, two of them Critical
pub fn alerts() -> Vec<AlertRecord> {
    vec![
        AlertRecord::new("a-1", AlertType::BackupFailed, Severity::Critical, Category::Backup, at(2024, 5, 1))
            .with_target("Daily Servers", "SRV-DC01"),
        AlertRecord::new("a-2", AlertType::MalwareDetected, Severity::Error, Category::Edr, at(2024, 5, 2))
            .with_target("Endpoint Protection", "WS-FIN-17"),
        AlertRecord::new("a-3", AlertType::StorageFull, Severity::Critical, Category::Backup, at(2024, 5, 3))
            .with_target("Cloud Storage", "Vault-02"),
        AlertRecord::new("a-4", AlertType::ConnectionLost, Severity::Warning, Category::Network, at(2024, 5, 4))
            .with_target("Daily Servers", "SRV-APP03"),
        AlertRecord::new("a-5", AlertType::LicenseExpiring, Severity::Info, Category::System, at(2024, 5, 5))
            .with_target("Licensing", "Tenant"),
        AlertRecord::new("a-6", AlertType::NoBackupForXDays, Severity::Warning, Category::Backup, at(2024, 5, 6))
            .with_target("Workstations", "WS-HR-02"),
    ]
}

pub fn ids<R: HasId>(records: &[&R]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for CustomerRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for AlertRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn names(records: &[&CustomerRecord]) -> Vec<String> {
    records.iter().map(|c| c.name.clone()).collect()
}

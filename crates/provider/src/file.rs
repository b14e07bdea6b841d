//! JSON snapshot file provider
//!
//! Reads a [`Snapshot`] from disk on every fetch so edits to the file show up
//! without a restart. Missing collections in the file are treated as empty.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};
use warden_records::{AlertEmailRecord, AlertRecord, CustomerRecord, Snapshot, UsageDetailRecord};

use crate::DataProvider;
use crate::error::{ProviderError, Result};

/// Serves records from a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Read snapshots from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the whole snapshot
    pub async fn load(&self) -> Result<Snapshot> {
        let path = self.path.display().to_string();

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            warn!(path = %path, error = %source, "snapshot read failed");
            ProviderError::Io {
                path: path.clone(),
                source,
            }
        })?;

        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(|source| {
            warn!(path = %path, error = %source, "snapshot parse failed");
            ProviderError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        debug!(path = %path, records = snapshot.len(), "snapshot loaded");
        Ok(snapshot)
    }
}

#[async_trait]
impl DataProvider for JsonFileProvider {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>> {
        Ok(self.load().await?.customers)
    }

    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>> {
        Ok(self.load().await?.alerts)
    }

    async fn fetch_usage_details(&self) -> Result<Vec<UsageDetailRecord>> {
        Ok(self.load().await?.usage_details)
    }

    async fn fetch_alert_emails(&self) -> Result<Vec<AlertEmailRecord>> {
        Ok(self.load().await?.alert_emails)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use warden_records::{AlertType, EmailStatus};

    use super::*;
    use crate::sample;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_roundtrip_sample_snapshot() {
        let json = serde_json::to_string_pretty(&sample::snapshot()).unwrap();
        let file = write_temp(&json);
        let provider = JsonFileProvider::new(file.path());

        let customers = provider.fetch_customers().await.unwrap();
        assert_eq!(customers, sample::customers());
        assert_eq!(provider.fetch_alerts().await.unwrap(), sample::alerts());
        assert_eq!(provider.fetch_alert_emails().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_missing_collections_are_empty() {
        let file = write_temp(
            r#"{
                "customers": [{
                    "id": "c-1",
                    "name": "Solo",
                    "totalProtectedWorkloads": 4,
                    "localStorageGB": 120.5,
                    "enabled": true,
                    "createdAt": "2024-01-01T00:00:00Z",
                    "productionStartDate": "2024-02-01T00:00:00Z"
                }]
            }"#,
        );
        let provider = JsonFileProvider::new(file.path());

        let customers = provider.fetch_customers().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].local_storage_gb, 120.5);
        assert_eq!(customers[0].utilization_rate, None);
        assert!(provider.fetch_alerts().await.unwrap().is_empty());
        assert!(provider.fetch_usage_details().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_enum_values_are_kept() {
        let file = write_temp(
            r#"{
                "alerts": [{
                    "id": "a-1",
                    "type": "QuotaExceeded",
                    "severity": "Warning",
                    "category": "Backup",
                    "planName": "Plan",
                    "resourceName": "SRV",
                    "createdDate": "2024-07-01T00:00:00Z"
                }],
                "alertEmails": [{
                    "id": "m-1",
                    "alertId": "a-1",
                    "recipient": "ops@example.com",
                    "subject": "hi",
                    "status": "Bounced",
                    "sentAt": "2024-07-01T00:01:00Z"
                }]
            }"#,
        );
        let provider = JsonFileProvider::new(file.path());

        let alerts = provider.fetch_alerts().await.unwrap();
        assert_eq!(alerts[0].alert_type, AlertType::Other("QuotaExceeded".to_string()));
        let emails = provider.fetch_alert_emails().await.unwrap();
        assert_eq!(emails[0].status, EmailStatus::Other("Bounced".to_string()));
    }

    #[tokio::test]
    async fn test_file_is_reread_on_every_fetch() {
        let file = write_temp(r#"{"customers": []}"#);
        let provider = JsonFileProvider::new(file.path());
        assert!(provider.fetch_customers().await.unwrap().is_empty());

        let json = serde_json::to_string(&sample::snapshot()).unwrap();
        std::fs::write(file.path(), json).unwrap();

        assert_eq!(provider.fetch_customers().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonFileProvider::new(dir.path().join("nope.json"));

        let err = provider.fetch_customers().await.unwrap_err();
        assert!(matches!(err, ProviderError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let file = write_temp("{ not json");
        let provider = JsonFileProvider::new(file.path());

        let err = provider.fetch_alerts().await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }
}

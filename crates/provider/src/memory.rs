//! In-memory provider

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use warden_records::{AlertEmailRecord, AlertRecord, CustomerRecord, Snapshot, UsageDetailRecord};

use crate::error::Result;
use crate::{DataProvider, sample};

/// Serves clones of a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    snapshot: Snapshot,
    latency: Duration,
}

impl MemoryProvider {
    /// Serve the given snapshot
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            latency: Duration::ZERO,
        }
    }

    /// Serve the built-in sample data
    pub fn sample() -> Self {
        Self::new(sample::snapshot())
    }

    /// Delay every fetch, like a slow service would
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The snapshot being served
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    async fn delay(&self, collection: &'static str) {
        if !self.latency.is_zero() {
            debug!(collection, latency_ms = self.latency.as_millis() as u64, "simulating latency");
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>> {
        self.delay("customers").await;
        Ok(self.snapshot.customers.clone())
    }

    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>> {
        self.delay("alerts").await;
        Ok(self.snapshot.alerts.clone())
    }

    async fn fetch_usage_details(&self) -> Result<Vec<UsageDetailRecord>> {
        self.delay("usage_details").await;
        Ok(self.snapshot.usage_details.clone())
    }

    async fn fetch_alert_emails(&self) -> Result<Vec<AlertEmailRecord>> {
        self.delay("alert_emails").await;
        Ok(self.snapshot.alert_emails.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

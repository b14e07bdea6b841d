//! Customer records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A protected customer tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Number of protected workloads
    pub total_protected_workloads: u64,
    /// Local storage in GB
    #[serde(rename = "localStorageGB")]
    pub local_storage_gb: f64,
    /// Whether the tenant is enabled
    pub enabled: bool,
    /// When the tenant was created
    pub created_at: DateTime<Utc>,
    /// When the tenant went into production
    pub production_start_date: DateTime<Utc>,
    /// Utilization in percent (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization_rate: Option<f64>,
    /// Protected servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<u64>,
    /// Protected virtual machines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vms: Option<u64>,
    /// Protected workstations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workstations: Option<u64>,
}

impl CustomerRecord {
    /// Create an enabled customer with no optional counters set
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        local_storage_gb: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            total_protected_workloads: 0,
            local_storage_gb,
            enabled: true,
            created_at,
            production_start_date: created_at,
            utilization_rate: None,
            servers: None,
            vms: None,
            workstations: None,
        }
    }

    /// Set the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the workload breakdown; the total is derived from the parts
    pub fn with_workloads(mut self, servers: u64, vms: u64, workstations: u64) -> Self {
        self.servers = Some(servers);
        self.vms = Some(vms);
        self.workstations = Some(workstations);
        self.total_protected_workloads = servers + vms + workstations;
        self
    }

    /// Set the utilization rate
    pub fn with_utilization(mut self, rate: f64) -> Self {
        self.utilization_rate = Some(rate);
        self
    }

    /// Set the production start date
    pub fn with_production_start(mut self, date: DateTime<Utc>) -> Self {
        self.production_start_date = date;
        self
    }
}

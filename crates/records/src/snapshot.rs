//! Complete data snapshot
//!
//! The on-disk shape read by file-backed providers:
//!
//! ```json
//! {
//!   "customers": [...],
//!   "alerts": [...],
//!   "usageDetails": [...],
//!   "alertEmails": [...]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::alert::AlertRecord;
use crate::customer::CustomerRecord;
use crate::email::AlertEmailRecord;
use crate::usage::UsageDetailRecord;

/// All collections served by a provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Customers
    pub customers: Vec<CustomerRecord>,
    /// Alerts
    pub alerts: Vec<AlertRecord>,
    /// Usage details
    pub usage_details: Vec<UsageDetailRecord>,
    /// Alert email audit log
    pub alert_emails: Vec<AlertEmailRecord>,
}

impl Snapshot {
    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        self.customers.len() + self.alerts.len() + self.usage_details.len() + self.alert_emails.len()
    }

    /// Check if every collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Alert email audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Delivery status of an alert email
    EmailStatus {
        /// Accepted by the mail relay
        Sent => "Sent",
        /// Rejected or bounced
        Failed => "Failed",
        /// Queued, not yet delivered
        Pending => "Pending",
    }
}

/// One alert notification email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEmailRecord {
    /// Unique identifier
    pub id: String,
    /// Alert that triggered the email
    pub alert_id: String,
    /// Recipient address
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Delivery status
    pub status: EmailStatus,
    /// When the email was sent (or queued)
    pub sent_at: DateTime<Utc>,
}

//! Schemas for the dashboard record types
//!
//! Field names match the wire names of the records.

use warden_records::{AlertEmailRecord, AlertRecord, CustomerRecord, UsageDetailRecord};

use crate::schema::{Field, Record, Schema};

type CustomerField = Field<CustomerRecord>;
type AlertField = Field<AlertRecord>;
type UsageField = Field<UsageDetailRecord>;
type EmailField = Field<AlertEmailRecord>;

static CUSTOMER_SCHEMA: Schema<CustomerRecord> = Schema {
    record: "customer",
    fields: &[
        CustomerField::text("id", |c| c.id.as_str()),
        CustomerField::text("name", |c| c.name.as_str()),
        CustomerField::number("totalProtectedWorkloads", |c| c.total_protected_workloads as f64),
        CustomerField::number("localStorageGB", |c| c.local_storage_gb),
        CustomerField::bool("enabled", |c| c.enabled),
        CustomerField::timestamp("createdAt", |c| c.created_at),
        CustomerField::timestamp("productionStartDate", |c| c.production_start_date),
        CustomerField::number("utilizationRate", |c| c.utilization_rate.unwrap_or(0.0)),
        CustomerField::number("servers", |c| c.servers.unwrap_or(0) as f64),
        CustomerField::number("vms", |c| c.vms.unwrap_or(0) as f64),
        CustomerField::number("workstations", |c| c.workstations.unwrap_or(0) as f64),
    ],
    search_fields: &["name"],
    date_field: Some("createdAt"),
    toggle_field: Some("enabled"),
};

static ALERT_SCHEMA: Schema<AlertRecord> = Schema {
    record: "alert",
    fields: &[
        AlertField::text("id", |a| a.id.as_str()),
        AlertField::text("type", |a| a.alert_type.as_str()),
        AlertField::text("severity", |a| a.severity.as_str()),
        AlertField::text("category", |a| a.category.as_str()),
        AlertField::text("planName", |a| a.plan_name.as_str()),
        AlertField::text("resourceName", |a| a.resource_name.as_str()),
        AlertField::timestamp("createdDate", |a| a.created_date),
    ],
    search_fields: &["resourceName", "planName"],
    date_field: Some("createdDate"),
    toggle_field: None,
};

static USAGE_SCHEMA: Schema<UsageDetailRecord> = Schema {
    record: "usage detail",
    fields: &[
        UsageField::text("id", |u| u.id.as_str()),
        UsageField::text("customerId", |u| u.customer_id.as_str()),
        UsageField::text("customerName", |u| u.customer_name.as_str()),
        UsageField::text("service", |u| u.service.as_str()),
        UsageField::number("storageGB", |u| u.storage_gb),
        UsageField::number("quotaGB", |u| u.quota_gb.unwrap_or(0.0)),
        UsageField::number("workloads", |u| u.workloads as f64),
        UsageField::bool("active", |u| u.active),
        UsageField::timestamp("recordedAt", |u| u.recorded_at),
    ],
    search_fields: &["customerName", "service"],
    date_field: Some("recordedAt"),
    toggle_field: Some("active"),
};

static ALERT_EMAIL_SCHEMA: Schema<AlertEmailRecord> = Schema {
    record: "alert email",
    fields: &[
        EmailField::text("id", |e| e.id.as_str()),
        EmailField::text("alertId", |e| e.alert_id.as_str()),
        EmailField::text("recipient", |e| e.recipient.as_str()),
        EmailField::text("subject", |e| e.subject.as_str()),
        EmailField::text("status", |e| e.status.as_str()),
        EmailField::timestamp("sentAt", |e| e.sent_at),
    ],
    search_fields: &["recipient", "subject"],
    date_field: Some("sentAt"),
    toggle_field: None,
};

impl Record for CustomerRecord {
    fn schema() -> &'static Schema<Self> {
        &CUSTOMER_SCHEMA
    }
}

impl Record for AlertRecord {
    fn schema() -> &'static Schema<Self> {
        &ALERT_SCHEMA
    }
}

impl Record for UsageDetailRecord {
    fn schema() -> &'static Schema<Self> {
        &USAGE_SCHEMA
    }
}

impl Record for AlertEmailRecord {
    fn schema() -> &'static Schema<Self> {
        &ALERT_EMAIL_SCHEMA
    }
}

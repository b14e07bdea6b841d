//! Warden Records
//!
//! Domain records served by the data provider and shaped by the analytics
//! pipeline:
//!
//! - **Customers**: tenants with protected workloads and local storage
//! - **Alerts**: protection alerts with severity and category
//! - **Usage details**: per-service storage consumption rows
//! - **Alert emails**: audit log of alert notification emails
//!
//! Records are plain data. They are owned by the provider and treated as
//! read-only snapshots by everything downstream.

#[macro_use]
mod macros;

pub mod alert;
pub mod customer;
pub mod email;
pub mod snapshot;
pub mod usage;


pub use alert::{AlertRecord, AlertType, Category, RawPayload, Severity};
pub use customer::CustomerRecord;
pub use email::{AlertEmailRecord, EmailStatus};
pub use snapshot::Snapshot;
pub use usage::UsageDetailRecord;

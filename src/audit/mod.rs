//! Audit code catalog and log entry construction

mod catalog;

pub use catalog::{
    is_audit_code_format, AuditActionDetails, AuditCatalog, AuditCategory, AuditLogEntry,
};

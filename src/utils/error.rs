//! Error handling for the permission engine
//!
//! This module defines all error types used throughout the crate.

use crate::core::entity::EntityName;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for the permission engine
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main error type for the permission engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Permission schema missing for an entity the caller asked about
    #[error("Permission schema not found for entity: {0}")]
    SchemaNotFound(EntityName),

    /// Schema registry failed startup validation
    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    /// Tenant code not in the closed tenant catalog
    #[error("Unknown tenant: {0}")]
    UnknownTenant(String),

    /// Entity name not in the closed entity catalog
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// Permission name not in the field/entity vocabulary
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// Feature permission name not in the feature catalog
    #[error("Unknown feature permission: {0}")]
    UnknownFeaturePermission(String),

    /// Permission category outside the closed set
    #[error("Unknown permission category: {0}")]
    UnknownPermissionCategory(String),

    /// Role name not in the system role catalog
    #[error("Unknown system role: {0}")]
    UnknownSystemRole(String),

    /// A role references a parent that is not in the snapshot
    #[error("Parent role not found: {0}")]
    ParentRoleNotFound(Uuid),

    /// A role references a parent that has been soft-deleted
    #[error("Parent role is inactive: {0}")]
    ParentRoleInactive(String),

    /// Role inheritance chain loops back on itself
    #[error("Cyclic role inheritance detected at role: {0}")]
    RoleInheritanceCycle(String),

    /// Audit category not present in the audit code catalog
    #[error("Unknown audit category: {0}")]
    UnknownAuditCategory(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a schema validation error
    pub fn schema_validation<S: Into<String>>(message: S) -> Self {
        Self::SchemaValidation(message.into())
    }

    /// Whether this error indicates inconsistent static configuration
    /// rather than a bad request against valid configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::SchemaNotFound(_)
                | Self::SchemaValidation(_)
                | Self::UnknownAuditCategory(_)
        )
    }
}

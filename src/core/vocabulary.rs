//! Permission vocabulary and presets
//!
//! Closed catalogs of field-level and entity-level permission actions, the
//! feature permission catalog, and the named presets that bundle atomic
//! actions into reusable sets.
//!
//! Presets are constructor functions returning fresh owned sets. Every call
//! allocates a new set, so no two schema entries ever share a backing
//! collection.

use crate::utils::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Atomic field-level permission actions.
///
/// `View` contractually implies `Fetch`; the registry validation pass
/// enforces this when strict mode is enabled (see
/// [`crate::core::schema::PermissionRegistry::validate`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldPermission {
    /// Field may be retrieved by backend logic (GET)
    Fetch,
    /// Field may be rendered in UI (requires fetch)
    View,
    /// Field may be modified via a write operation (PATCH)
    Update,
}

impl FieldPermission {
    /// All field permission actions, in canonical order
    pub const ALL: [FieldPermission; 3] = [
        FieldPermission::Fetch,
        FieldPermission::View,
        FieldPermission::Update,
    ];

    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPermission::Fetch => "fetch",
            FieldPermission::View => "view",
            FieldPermission::Update => "update",
        }
    }

    /// Suffix form used in persisted per-field action lists
    pub fn suffix(&self) -> &'static str {
        match self {
            FieldPermission::Fetch => "_fetch",
            FieldPermission::View => "_view",
            FieldPermission::Update => "_update",
        }
    }
}

impl fmt::Display for FieldPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPermission {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fetch" => Ok(FieldPermission::Fetch),
            "view" => Ok(FieldPermission::View),
            "update" => Ok(FieldPermission::Update),
            other => Err(EngineError::UnknownPermission(other.to_string())),
        }
    }
}

/// A field's permission state; the empty set means no access at all
pub type FieldPermissionSet = BTreeSet<FieldPermission>;

/// Atomic entity-level permission actions.
///
/// The `full_access` shorthand is a string-level concept only (see
/// [`crate::core::strings`]); it expands to all four actions and is never
/// stored in a resolved set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityPermission {
    /// Create new records (POST)
    Create,
    /// Modify existing records (PATCH)
    Edit,
    /// Remove records (DELETE)
    Delete,
    /// Read records (GET)
    Access,
}

impl EntityPermission {
    /// All entity permission actions, in canonical order
    pub const ALL: [EntityPermission; 4] = [
        EntityPermission::Create,
        EntityPermission::Edit,
        EntityPermission::Delete,
        EntityPermission::Access,
    ];

    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPermission::Create => "create",
            EntityPermission::Edit => "edit",
            EntityPermission::Delete => "delete",
            EntityPermission::Access => "access",
        }
    }

    /// Suffix appended to an entity name to build a permission string
    pub fn suffix(&self) -> &'static str {
        match self {
            EntityPermission::Create => "_create",
            EntityPermission::Edit => "_edit",
            EntityPermission::Delete => "_delete",
            EntityPermission::Access => "_access",
        }
    }
}

impl fmt::Display for EntityPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityPermission {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(EntityPermission::Create),
            "edit" => Ok(EntityPermission::Edit),
            "delete" => Ok(EntityPermission::Delete),
            "access" => Ok(EntityPermission::Access),
            other => Err(EngineError::UnknownPermission(other.to_string())),
        }
    }
}

/// An entity's permission state; the empty set means no operations allowed
pub type EntityPermissionSet = BTreeSet<EntityPermission>;

/// Predefined field permission presets
pub mod field_presets {
    use super::{FieldPermission, FieldPermissionSet};

    /// Fetch and view, no updates
    pub fn read_only() -> FieldPermissionSet {
        [FieldPermission::Fetch, FieldPermission::View]
            .into_iter()
            .collect()
    }

    /// Fetch, view and update
    pub fn full_access() -> FieldPermissionSet {
        [
            FieldPermission::Fetch,
            FieldPermission::View,
            FieldPermission::Update,
        ]
        .into_iter()
        .collect()
    }

    /// Backend retrieval only, never rendered
    pub fn fetch_only() -> FieldPermissionSet {
        [FieldPermission::Fetch].into_iter().collect()
    }

    /// No access at all
    pub fn no_access() -> FieldPermissionSet {
        FieldPermissionSet::new()
    }
}

/// Predefined entity permission presets
pub mod entity_presets {
    use super::{EntityPermission, EntityPermissionSet};

    /// Read access only
    pub fn read_only() -> EntityPermissionSet {
        [EntityPermission::Access].into_iter().collect()
    }

    /// All four entity operations
    pub fn full_access() -> EntityPermissionSet {
        EntityPermission::ALL.into_iter().collect()
    }

    /// Read, create and edit, but no deletes
    pub fn create_edit() -> EntityPermissionSet {
        [
            EntityPermission::Access,
            EntityPermission::Create,
            EntityPermission::Edit,
        ]
        .into_iter()
        .collect()
    }

    /// No operations allowed
    pub fn no_access() -> EntityPermissionSet {
        EntityPermissionSet::new()
    }
}

/// Closed catalog of feature permissions (business capabilities)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeaturePermission {
    AnalyticsDashboard,
    BulkImport,
    AdvancedSearch,
    UserManagement,
    TenantManagement,
    RoleManagement,
    PermissionManagement,
    AuditLogs,
    SystemSettings,
    BackupRestore,
    ApiAccess,
    WebhookManagement,
    IntegrationManagement,
}

impl FeaturePermission {
    /// All feature permissions, in canonical order
    pub const ALL: [FeaturePermission; 13] = [
        FeaturePermission::AnalyticsDashboard,
        FeaturePermission::BulkImport,
        FeaturePermission::AdvancedSearch,
        FeaturePermission::UserManagement,
        FeaturePermission::TenantManagement,
        FeaturePermission::RoleManagement,
        FeaturePermission::PermissionManagement,
        FeaturePermission::AuditLogs,
        FeaturePermission::SystemSettings,
        FeaturePermission::BackupRestore,
        FeaturePermission::ApiAccess,
        FeaturePermission::WebhookManagement,
        FeaturePermission::IntegrationManagement,
    ];

    /// Canonical snake_case name, as stored in role permission lists
    pub fn as_str(&self) -> &'static str {
        match self {
            FeaturePermission::AnalyticsDashboard => "analytics_dashboard",
            FeaturePermission::BulkImport => "bulk_import",
            FeaturePermission::AdvancedSearch => "advanced_search",
            FeaturePermission::UserManagement => "user_management",
            FeaturePermission::TenantManagement => "tenant_management",
            FeaturePermission::RoleManagement => "role_management",
            FeaturePermission::PermissionManagement => "permission_management",
            FeaturePermission::AuditLogs => "audit_logs",
            FeaturePermission::SystemSettings => "system_settings",
            FeaturePermission::BackupRestore => "backup_restore",
            FeaturePermission::ApiAccess => "api_access",
            FeaturePermission::WebhookManagement => "webhook_management",
            FeaturePermission::IntegrationManagement => "integration_management",
        }
    }
}

impl fmt::Display for FeaturePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeaturePermission {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| EngineError::UnknownFeaturePermission(s.to_string()))
    }
}

/// Permission categories, used by the audit catalog and admin tooling
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    EntityPermissions,
    FieldPermissions,
    FeaturePermissions,
}

impl PermissionCategory {
    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionCategory::EntityPermissions => "entity_permissions",
            PermissionCategory::FieldPermissions => "field_permissions",
            PermissionCategory::FeaturePermissions => "feature_permissions",
        }
    }
}

impl fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entity_permissions" => Ok(PermissionCategory::EntityPermissions),
            "field_permissions" => Ok(PermissionCategory::FieldPermissions),
            "feature_permissions" => Ok(PermissionCategory::FeaturePermissions),
            other => Err(EngineError::UnknownPermissionCategory(other.to_string())),
        }
    }
}

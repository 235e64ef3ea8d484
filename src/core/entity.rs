//! Entity catalog
//!
//! The closed set of business entity names and the authoritative persisted
//! field catalog per entity. Permission schemas are validated against these
//! field lists at startup, so a hand-authored schema that drifts from the
//! persisted shape fails fast instead of surfacing as a runtime
//! authorization bug.

use crate::utils::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Valid entity names.
///
/// Adding an entity requires extending this enumeration; the resolver never
/// accepts a free-form string. At rest the name is stored as its snake_case
/// string form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityName {
    Products,
    Users,
    Tenants,
    Roles,
    UserTenantRoles,
    EntityPermissions,
    FieldPermissions,
    FeaturePermissions,
    AuditLogs,
    Sessions,
}

impl EntityName {
    /// All known entities, in canonical order
    pub const ALL: [EntityName; 10] = [
        EntityName::Products,
        EntityName::Users,
        EntityName::Tenants,
        EntityName::Roles,
        EntityName::UserTenantRoles,
        EntityName::EntityPermissions,
        EntityName::FieldPermissions,
        EntityName::FeaturePermissions,
        EntityName::AuditLogs,
        EntityName::Sessions,
    ];

    /// Canonical snake_case name, as stored at rest and used in permission
    /// strings
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityName::Products => "products",
            EntityName::Users => "users",
            EntityName::Tenants => "tenants",
            EntityName::Roles => "roles",
            EntityName::UserTenantRoles => "user_tenant_roles",
            EntityName::EntityPermissions => "entity_permissions",
            EntityName::FieldPermissions => "field_permissions",
            EntityName::FeaturePermissions => "feature_permissions",
            EntityName::AuditLogs => "audit_logs",
            EntityName::Sessions => "sessions",
        }
    }

    /// The entity's persisted field set.
    ///
    /// A permission schema for an entity must declare exactly these fields,
    /// no extra and no missing.
    pub fn persisted_fields(&self) -> &'static [&'static str] {
        match self {
            EntityName::Products => &[
                "id",
                "name",
                "price",
                "cost",
                "description",
                "category",
                "internal_notes",
                "tenant_id",
                "created_at",
                "updated_at",
                "is_active",
            ],
            EntityName::Users => &[
                "id",
                "auth_subject",
                "email",
                "first_name",
                "last_name",
                "image_url",
                "created_at",
                "updated_at",
                "is_active",
            ],
            EntityName::Tenants => &[
                "id",
                "subdomain",
                "name",
                "description",
                "settings",
                "created_at",
                "updated_at",
                "is_active",
            ],
            EntityName::Roles => &[
                "id",
                "name",
                "display_name",
                "description",
                "is_system_role",
                "inherits_from",
                "entity_permissions",
                "feature_permissions",
                "added_entity_permissions",
                "removed_entity_permissions",
                "added_feature_permissions",
                "removed_feature_permissions",
                "custom_permissions",
                "tenant_scope",
                "created_at",
                "updated_at",
                "is_active",
            ],
            EntityName::UserTenantRoles => &[
                "id",
                "user_id",
                "tenant_id",
                "role_id",
                "assigned_by",
                "assigned_at",
                "expires_at",
                "is_active",
            ],
            EntityName::EntityPermissions => &[
                "id",
                "entity",
                "action",
                "tenant_id",
                "created_at",
                "is_active",
            ],
            EntityName::FieldPermissions => &[
                "id",
                "entity",
                "field",
                "tenant_id",
                "actions",
                "created_at",
                "is_active",
            ],
            EntityName::FeaturePermissions => &[
                "id",
                "name",
                "display_name",
                "description",
                "category",
                "created_at",
                "is_active",
            ],
            EntityName::AuditLogs => &[
                "id",
                "user_id",
                "tenant_id",
                "action",
                "resource",
                "resource_id",
                "metadata",
                "timestamp",
            ],
            EntityName::Sessions => &[
                "id",
                "user_id",
                "tenant_id",
                "session_token",
                "last_activity",
                "user_agent",
                "ip_address",
                "is_active",
            ],
        }
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| EngineError::UnknownEntity(s.to_string()))
    }
}

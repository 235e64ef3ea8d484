//! RBAC type definitions

use crate::core::strings::expand_full_access_permission;
use crate::core::tenant::TenantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Role record, mirroring the persisted shape.
///
/// Two shapes share this record: standalone roles carry explicit permission
/// lists and no parent; inherited roles reference a parent plus
/// added/removed deltas. A non-empty `custom_permissions` list bypasses both
/// shapes entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Role id
    pub id: Uuid,
    /// Role name, e.g. "SUPER_ADMIN"
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// Role description
    pub description: Option<String>,
    /// Whether this is a built-in system role
    pub is_system_role: bool,
    /// Parent role id; `None` for standalone roles
    pub inherits_from: Option<Uuid>,
    /// Base entity permission strings (standalone roles)
    pub entity_permissions: BTreeSet<String>,
    /// Base feature permission strings (standalone roles)
    pub feature_permissions: BTreeSet<String>,
    /// Entity permissions added on top of the parent (inherited roles)
    #[serde(default)]
    pub added_entity_permissions: BTreeSet<String>,
    /// Entity permissions removed from the parent (inherited roles)
    #[serde(default)]
    pub removed_entity_permissions: BTreeSet<String>,
    /// Feature permissions added on top of the parent (inherited roles)
    #[serde(default)]
    pub added_feature_permissions: BTreeSet<String>,
    /// Feature permissions removed from the parent (inherited roles)
    #[serde(default)]
    pub removed_feature_permissions: BTreeSet<String>,
    /// Escape hatch: when present and non-empty, resolution returns exactly
    /// this list and ignores inheritance and base lists
    #[serde(default)]
    pub custom_permissions: Option<Vec<String>>,
    /// Tenant this role is restricted to; `None` means global
    pub tenant_scope: Option<TenantId>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag; inactive roles are never physically removed
    pub is_active: bool,
}

impl Role {
    /// Create a standalone role with explicit permission lists
    pub fn standalone(
        name: &str,
        display_name: &str,
        entity_permissions: BTreeSet<String>,
        feature_permissions: BTreeSet<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            display_name: display_name.to_string(),
            description: None,
            is_system_role: false,
            inherits_from: None,
            entity_permissions,
            feature_permissions,
            added_entity_permissions: BTreeSet::new(),
            removed_entity_permissions: BTreeSet::new(),
            added_feature_permissions: BTreeSet::new(),
            removed_feature_permissions: BTreeSet::new(),
            custom_permissions: None,
            tenant_scope: None,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    /// Create an inherited role referencing a parent
    pub fn inherited(name: &str, display_name: &str, parent: Uuid) -> Self {
        let mut role = Self::standalone(name, display_name, BTreeSet::new(), BTreeSet::new());
        role.inherits_from = Some(parent);
        role
    }

    /// Set the added entity permission delta
    pub fn with_added_entity_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.added_entity_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the removed entity permission delta
    pub fn with_removed_entity_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.removed_entity_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the added feature permission delta
    pub fn with_added_feature_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.added_feature_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the removed feature permission delta
    pub fn with_removed_feature_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.removed_feature_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the custom permission escape hatch
    pub fn with_custom_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the role to one tenant
    pub fn with_tenant_scope(mut self, tenant: TenantId) -> Self {
        self.tenant_scope = Some(tenant);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Mark as a built-in system role
    pub fn as_system_role(mut self) -> Self {
        self.is_system_role = true;
        self
    }

    /// Whether this role inherits from a parent
    pub fn is_inherited(&self) -> bool {
        self.inherits_from.is_some()
    }

    /// Whether the custom permission escape hatch is populated
    pub fn has_custom_permissions(&self) -> bool {
        self.custom_permissions
            .as_ref()
            .is_some_and(|custom| !custom.is_empty())
    }
}

/// Effective permission sets computed for a role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRolePermissions {
    /// Effective entity permission strings (may contain full-access
    /// shorthand, interpreted at check time)
    pub entity_permissions: BTreeSet<String>,
    /// Effective feature permission strings
    pub feature_permissions: BTreeSet<String>,
}

impl ResolvedRolePermissions {
    /// Whether the resolved set grants an atomic entity permission string,
    /// interpreting any stored full-access shorthand
    pub fn grants_entity_permission(&self, permission: &str) -> bool {
        self.entity_permissions.iter().any(|stored| {
            stored == permission
                || expand_full_access_permission(stored)
                    .iter()
                    .any(|expanded| expanded == permission)
        })
    }

    /// Whether the resolved set grants a feature permission string
    pub fn grants_feature_permission(&self, permission: &str) -> bool {
        self.feature_permissions.contains(permission)
    }
}

/// Injected capability for fetching a parent role by id.
///
/// Implementations hand the engine an already-materialized, consistent
/// snapshot; the engine itself never touches storage.
pub trait RoleLookup {
    /// Fetch a role by id, or `None` when the id is unknown
    fn role_by_id(&self, id: Uuid) -> Option<Role>;
}

//! System roles and the in-memory role store

use crate::auth::rbac::types::{Role, RoleLookup};
use crate::core::entity::EntityName;
use crate::core::strings::{entity_permission, full_access_permission};
use crate::core::tenant::TenantId;
use crate::core::vocabulary::{EntityPermission, FeaturePermission};
use crate::utils::error::EngineError;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Built-in system role names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemRole {
    SuperAdmin,
    PortalScubadivingAdmin,
    PortalScubadivingUser,
    PortalSkydivingAdmin,
    PortalSkydivingUser,
}

impl SystemRole {
    /// All system roles
    pub const ALL: [SystemRole; 5] = [
        SystemRole::SuperAdmin,
        SystemRole::PortalScubadivingAdmin,
        SystemRole::PortalScubadivingUser,
        SystemRole::PortalSkydivingAdmin,
        SystemRole::PortalSkydivingUser,
    ];

    /// Canonical role name, as stored on role records
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemRole::SuperAdmin => "SUPER_ADMIN",
            SystemRole::PortalScubadivingAdmin => "PORTAL_SCUBADIVING_ADMIN",
            SystemRole::PortalScubadivingUser => "PORTAL_SCUBADIVING_USER",
            SystemRole::PortalSkydivingAdmin => "PORTAL_SKYDIVING_ADMIN",
            SystemRole::PortalSkydivingUser => "PORTAL_SKYDIVING_USER",
        }
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemRole {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| EngineError::UnknownSystemRole(s.to_string()))
    }
}

/// In-memory role snapshot.
///
/// Embedding services materialize their persisted role records into one of
/// these per resolution pass; the engine treats it as read-only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleStore {
    roles: HashMap<Uuid, Role>,
}

impl InMemoryRoleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the built-in system roles
    pub fn with_builtin_roles() -> Self {
        let mut store = Self::new();
        for role in builtin_system_roles() {
            store.insert(role);
        }
        store
    }

    /// Insert a role, returning its id
    pub fn insert(&mut self, role: Role) -> Uuid {
        let id = role.id;
        self.roles.insert(id, role);
        id
    }

    /// Look up a role by name
    pub fn role_by_name(&self, name: &str) -> Option<&Role> {
        self.roles.values().find(|role| role.name == name)
    }

    /// Number of roles in the snapshot
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleLookup for InMemoryRoleStore {
    fn role_by_id(&self, id: Uuid) -> Option<Role> {
        self.roles.get(&id).cloned()
    }
}

/// Build the built-in system roles.
///
/// SUPER_ADMIN holds the full-access shorthand for every entity plus every
/// feature permission. Portal admins are tenant-scoped standalone roles;
/// portal users inherit from their admin with write-side permissions
/// removed.
pub fn builtin_system_roles() -> Vec<Role> {
    let mut roles = Vec::new();

    let all_entities: BTreeSet<String> = EntityName::ALL
        .into_iter()
        .map(full_access_permission)
        .collect();
    let all_features: BTreeSet<String> = FeaturePermission::ALL
        .into_iter()
        .map(|feature| feature.to_string())
        .collect();

    roles.push(
        Role::standalone("SUPER_ADMIN", "Super Administrator", all_entities, all_features)
            .with_description("Full access to every entity and feature across all tenants")
            .as_system_role(),
    );

    for (tenant, admin_name, user_name) in [
        (
            TenantId::Scubadiving,
            SystemRole::PortalScubadivingAdmin,
            SystemRole::PortalScubadivingUser,
        ),
        (
            TenantId::Skydiving,
            SystemRole::PortalSkydivingAdmin,
            SystemRole::PortalSkydivingUser,
        ),
    ] {
        let admin_entities: BTreeSet<String> = [
            full_access_permission(EntityName::Products),
            entity_permission(EntityName::Users, EntityPermission::Access),
        ]
        .into_iter()
        .collect();
        let admin_features: BTreeSet<String> = [
            FeaturePermission::AnalyticsDashboard.to_string(),
            FeaturePermission::BulkImport.to_string(),
            FeaturePermission::AdvancedSearch.to_string(),
        ]
        .into_iter()
        .collect();

        let admin = Role::standalone(
            admin_name.as_str(),
            &format!("{} Portal Administrator", tenant.config().name),
            admin_entities,
            admin_features,
        )
        .with_tenant_scope(tenant)
        .as_system_role();
        let admin_id = admin.id;
        roles.push(admin);

        // Portal users keep read access only: the full-access shorthand is
        // removed and plain access added back.
        let user = Role::inherited(
            user_name.as_str(),
            &format!("{} Portal User", tenant.config().name),
            admin_id,
        )
        .with_added_entity_permissions([entity_permission(
            EntityName::Products,
            EntityPermission::Access,
        )])
        .with_removed_entity_permissions([full_access_permission(EntityName::Products)])
        .with_removed_feature_permissions([FeaturePermission::BulkImport.to_string()])
        .with_tenant_scope(tenant)
        .as_system_role();
        roles.push(user);
    }

    roles
}

//! Test fixtures and data factories
//!
//! Factory methods for creating role records with sensible defaults.
//! All factories create real objects, not mocks.

use std::collections::BTreeSet;
use tenantgate::auth::rbac::{InMemoryRoleStore, Role};
use tenantgate::core::TenantId;
use uuid::Uuid;

/// Factory for creating test roles
pub struct RoleFactory;

impl RoleFactory {
    /// Create a standalone role holding the given entity permissions
    pub fn standalone(name: &str, entity_permissions: &[&str]) -> Role {
        Role::standalone(
            name,
            &format!("{name} (test)"),
            entity_permissions.iter().map(|p| p.to_string()).collect(),
            BTreeSet::new(),
        )
    }

    /// Create a standalone role with entity and feature permissions
    pub fn with_features(
        name: &str,
        entity_permissions: &[&str],
        feature_permissions: &[&str],
    ) -> Role {
        Role::standalone(
            name,
            &format!("{name} (test)"),
            entity_permissions.iter().map(|p| p.to_string()).collect(),
            feature_permissions.iter().map(|p| p.to_string()).collect(),
        )
    }

    /// Create a role inheriting from a parent with add/remove deltas
    pub fn inherited(name: &str, parent: Uuid, added: &[&str], removed: &[&str]) -> Role {
        Role::inherited(name, &format!("{name} (test)"), parent)
            .with_added_entity_permissions(added.iter().copied())
            .with_removed_entity_permissions(removed.iter().copied())
    }

    /// Create a role scoped to a tenant
    pub fn scoped(name: &str, tenant: TenantId, entity_permissions: &[&str]) -> Role {
        Self::standalone(name, entity_permissions).with_tenant_scope(tenant)
    }
}

/// Build a store from a list of roles
pub fn store_with(roles: impl IntoIterator<Item = Role>) -> InMemoryRoleStore {
    let mut store = InMemoryRoleStore::new();
    for role in roles {
        store.insert(role);
    }
    store
}

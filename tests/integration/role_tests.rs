//! Role composition against populated stores

use crate::common::fixtures::{store_with, RoleFactory};
use tenantgate::auth::rbac::{resolve_role_permissions, InMemoryRoleStore, SystemRole};
use tenantgate::auth::AuthzEngine;
use tenantgate::config::AuthzConfig;
use tenantgate::core::{EntityName, EntityPermission, TenantId};
use tenantgate::EngineError;

#[test]
fn test_three_level_inheritance_chain() {
    let grandparent = RoleFactory::standalone(
        "ORG_ADMIN",
        &["products_full_access", "users_full_access", "roles_access"],
    );
    let grandparent_id = grandparent.id;
    let parent = RoleFactory::inherited(
        "TEAM_LEAD",
        grandparent_id,
        &[],
        &["users_full_access"],
    );
    let parent_id = parent.id;
    let child = RoleFactory::inherited(
        "MEMBER",
        parent_id,
        &["users_access"],
        &["roles_access"],
    );

    let store = store_with([grandparent, parent, child.clone()]);
    let resolved = resolve_role_permissions(&child, &store).unwrap();

    let expected: std::collections::BTreeSet<String> =
        ["products_full_access", "users_access"]
            .into_iter()
            .map(String::from)
            .collect();
    assert_eq!(resolved.entity_permissions, expected);
}

#[test]
fn test_deep_cycle_detected_through_store() {
    let mut a = RoleFactory::standalone("A", &[]);
    let mut b = RoleFactory::standalone("B", &[]);
    let mut c = RoleFactory::standalone("C", &[]);
    a.inherits_from = Some(c.id);
    b.inherits_from = Some(a.id);
    c.inherits_from = Some(b.id);
    let b_probe = b.clone();
    let store = store_with([a, b, c]);

    let err = resolve_role_permissions(&b_probe, &store).unwrap_err();
    assert!(matches!(err, EngineError::RoleInheritanceCycle(_)));
}

#[test]
fn test_custom_permissions_win_over_a_populated_chain() {
    let parent = RoleFactory::standalone("BASE", &["products_full_access"]);
    let parent_id = parent.id;
    let child = RoleFactory::inherited("INTEGRATION", parent_id, &["users_access"], &[])
        .with_custom_permissions(["webhook_receive", "api_access"]);

    let store = store_with([parent, child.clone()]);
    let resolved = resolve_role_permissions(&child, &store).unwrap();
    assert!(resolved.entity_permissions.contains("webhook_receive"));
    assert!(!resolved.entity_permissions.contains("products_full_access"));
    assert!(!resolved.entity_permissions.contains("users_access"));
}

#[test]
fn test_authorize_against_custom_store() {
    let engine = AuthzEngine::new(AuthzConfig::default()).unwrap();
    let viewer = RoleFactory::scoped("VIEWER", TenantId::Main, &["products_access"]);
    let store = store_with([viewer.clone()]);

    let allowed = engine
        .authorize(
            &viewer,
            &store,
            EntityName::Products,
            TenantId::Main,
            EntityPermission::Access,
        )
        .unwrap();
    assert!(allowed.allowed);

    let denied = engine
        .authorize(
            &viewer,
            &store,
            EntityName::Products,
            TenantId::Main,
            EntityPermission::Create,
        )
        .unwrap();
    assert!(!denied.allowed);
    assert_eq!(denied.required_permission, "products_create");
}

#[test]
fn test_configured_admin_roles_bypass_role_check_only() {
    let config = AuthzConfig {
        admin_roles: vec!["OPS".to_string()],
        ..AuthzConfig::default()
    };
    let engine = AuthzEngine::new(config).unwrap();
    let ops = RoleFactory::standalone("OPS", &[]);
    let store = store_with([ops.clone()]);

    // No role permissions at all, but the bypass applies within the
    // tenant ceiling.
    let allowed = engine
        .authorize(
            &ops,
            &store,
            EntityName::Products,
            TenantId::Admin,
            EntityPermission::Delete,
        )
        .unwrap();
    assert!(allowed.allowed);

    let capped = engine
        .authorize(
            &ops,
            &store,
            EntityName::Products,
            TenantId::Main,
            EntityPermission::Delete,
        )
        .unwrap();
    assert!(!capped.allowed);
}

#[test]
fn test_builtin_portal_pairs_resolve_consistently() {
    let store = InMemoryRoleStore::with_builtin_roles();

    for (admin_name, user_name) in [
        (
            SystemRole::PortalScubadivingAdmin,
            SystemRole::PortalScubadivingUser,
        ),
        (
            SystemRole::PortalSkydivingAdmin,
            SystemRole::PortalSkydivingUser,
        ),
    ] {
        let admin = store.role_by_name(admin_name.as_str()).unwrap();
        let user = store.role_by_name(user_name.as_str()).unwrap();

        let admin_resolved = resolve_role_permissions(admin, &store).unwrap();
        let user_resolved = resolve_role_permissions(user, &store).unwrap();

        assert!(admin_resolved.grants_entity_permission("products_delete"));
        assert!(!user_resolved.grants_entity_permission("products_delete"));
        assert!(user_resolved.grants_entity_permission("products_access"));
        assert!(user_resolved.grants_entity_permission("users_access"));
    }
}

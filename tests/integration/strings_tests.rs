//! Permission string generation and expansion

use tenantgate::core::{
    entity_permission, entity_permission_strings, expand_full_access_permission,
    full_access_permission, EntityName, EntityPermission, FULL_ACCESS_SUFFIX,
};

#[test]
fn test_every_entity_generates_four_atomic_strings() {
    for entity in EntityName::ALL {
        let strings = entity_permission_strings(entity);
        assert_eq!(strings.len(), 4);
        for (string, action) in strings.iter().zip(EntityPermission::ALL) {
            assert_eq!(*string, format!("{}_{}", entity.as_str(), action.as_str()));
        }
    }
}

#[test]
fn test_full_access_expands_to_the_atomic_strings() {
    for entity in EntityName::ALL {
        let shorthand = full_access_permission(entity);
        assert!(shorthand.ends_with(FULL_ACCESS_SUFFIX));

        let expanded = expand_full_access_permission(&shorthand);
        assert_eq!(expanded, entity_permission_strings(entity).to_vec());
    }
}

#[test]
fn test_unrecognized_strings_pass_through() {
    // Feature permission strings are not entity shorthands
    assert_eq!(
        expand_full_access_permission("analytics_dashboard"),
        vec!["analytics_dashboard".to_string()]
    );
    // A full_access suffix on an unknown entity passes through too
    assert_eq!(
        expand_full_access_permission("orders_full_access"),
        vec!["orders_full_access".to_string()]
    );
    assert_eq!(expand_full_access_permission(""), vec![String::new()]);
}

#[test]
fn test_generated_strings_match_stored_role_vocabulary() {
    assert_eq!(
        entity_permission(EntityName::Products, EntityPermission::Access),
        "products_access"
    );
    assert_eq!(
        entity_permission(EntityName::UserTenantRoles, EntityPermission::Edit),
        "user_tenant_roles_edit"
    );
    assert_eq!(
        full_access_permission(EntityName::AuditLogs),
        "audit_logs_full_access"
    );
}

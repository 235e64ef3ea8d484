//! Schema resolution across tenants

use tenantgate::auth::AuthzEngine;
use tenantgate::config::AuthzConfig;
use tenantgate::core::{
    entity_presets, field_presets, EntityName, EntityPermission, EntityPermissionSchema,
    FieldPermissionRule, PermissionRegistry, TenantId,
};
use tenantgate::EngineError;

fn engine() -> AuthzEngine {
    AuthzEngine::new(AuthzConfig::default()).unwrap()
}

#[test]
fn test_field_permissions_vary_by_tenant() {
    let engine = engine();

    let main = engine
        .field_permissions(EntityName::Products, TenantId::Main)
        .unwrap();
    assert_eq!(main["name"], field_presets::full_access());
    assert_eq!(main["internal_notes"], field_presets::no_access());

    let admin = engine
        .field_permissions(EntityName::Products, TenantId::Admin)
        .unwrap();
    assert_eq!(admin["internal_notes"], field_presets::full_access());

    let scubadiving = engine
        .field_permissions(EntityName::Products, TenantId::Scubadiving)
        .unwrap();
    assert_eq!(scubadiving["name"], field_presets::read_only());
}

#[test]
fn test_resolution_covers_every_persisted_field() {
    let engine = engine();

    for entity in [EntityName::Products, EntityName::Users] {
        for tenant in TenantId::ALL {
            let fields = engine.field_permissions(entity, tenant).unwrap();
            for field in entity.persisted_fields() {
                assert!(
                    fields.contains_key(*field),
                    "{entity} field {field} missing for tenant {tenant}"
                );
            }
            assert_eq!(fields.len(), entity.persisted_fields().len());
        }
    }
}

#[test]
fn test_entity_ceiling_varies_by_tenant() {
    let engine = engine();

    let portal = engine
        .entity_permissions(EntityName::Products, TenantId::Skydiving)
        .unwrap();
    assert!(portal.contains(&EntityPermission::Access));
    assert!(!portal.contains(&EntityPermission::Delete));

    let admin = engine
        .entity_permissions(EntityName::Products, TenantId::Admin)
        .unwrap();
    assert_eq!(admin, entity_presets::full_access());
}

#[test]
fn test_unregistered_entity_fails_resolution() {
    let engine = engine();

    let err = engine
        .field_permissions(EntityName::AuditLogs, TenantId::Main)
        .unwrap_err();
    assert!(matches!(err, EngineError::SchemaNotFound(EntityName::AuditLogs)));
}

#[test]
fn test_custom_registry_with_empty_override() {
    let schema = EntityPermissionSchema::new(EntityName::Products, entity_presets::read_only())
        .with_entity_override(TenantId::Status, entity_presets::no_access())
        .with_field("id", FieldPermissionRule::new(field_presets::read_only()))
        .with_field("name", FieldPermissionRule::new(field_presets::full_access()))
        .with_field("price", FieldPermissionRule::new(field_presets::full_access()))
        .with_field("cost", FieldPermissionRule::new(field_presets::read_only()))
        .with_field(
            "description",
            FieldPermissionRule::new(field_presets::full_access()),
        )
        .with_field(
            "category",
            FieldPermissionRule::new(field_presets::full_access()),
        )
        .with_field(
            "internal_notes",
            FieldPermissionRule::new(field_presets::no_access()),
        )
        .with_field("tenant_id", FieldPermissionRule::new(field_presets::read_only()))
        .with_field(
            "created_at",
            FieldPermissionRule::new(field_presets::read_only()),
        )
        .with_field(
            "updated_at",
            FieldPermissionRule::new(field_presets::read_only()),
        )
        .with_field(
            "is_active",
            FieldPermissionRule::new(field_presets::read_only()),
        );

    let mut registry = PermissionRegistry::new();
    registry.insert(schema);
    let engine = AuthzEngine::with_registry(AuthzConfig::default(), registry).unwrap();

    // Present-but-empty override means the tenant sees nothing; other
    // tenants still fall back to the default.
    let status = engine
        .entity_permissions(EntityName::Products, TenantId::Status)
        .unwrap();
    assert!(status.is_empty());

    let main = engine
        .entity_permissions(EntityName::Products, TenantId::Main)
        .unwrap();
    assert_eq!(main, entity_presets::read_only());
}

#[test]
fn test_invalid_registry_rejected_at_engine_construction() {
    let schema = EntityPermissionSchema::new(EntityName::Users, entity_presets::read_only())
        .with_field("id", FieldPermissionRule::new(field_presets::read_only()));
    let mut registry = PermissionRegistry::new();
    registry.insert(schema);

    let err = AuthzEngine::with_registry(AuthzConfig::default(), registry).unwrap_err();
    assert!(err.is_configuration_error());
}

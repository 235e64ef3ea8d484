//! Audit catalog lookups and entry construction

use tenantgate::audit::AuditCatalog;
use tenantgate::core::{EntityName, EntityPermission, FeaturePermission, TenantId};
use tenantgate::EngineError;

#[test]
fn test_builtin_catalog_loads_and_checks() {
    let catalog = AuditCatalog::builtin().unwrap();
    assert!(catalog.is_valid_code("A0101"));
    assert!(!catalog.is_valid_code("X0101"));
}

#[test]
fn test_entity_and_feature_codes_stay_aligned_with_actions() {
    let catalog = AuditCatalog::builtin().unwrap();

    let code = catalog
        .entity_audit_code(EntityName::Users, EntityPermission::Delete)
        .unwrap();
    let details = catalog.action_by_code(code).unwrap();
    assert_eq!(details.action, "users_delete");

    let code = catalog
        .feature_audit_code(FeaturePermission::SystemSettings)
        .unwrap();
    let details = catalog.action_by_code(code).unwrap();
    assert_eq!(details.action, "system_settings");
}

#[test]
fn test_entry_round_trip_serializes() {
    let catalog = AuditCatalog::builtin().unwrap();
    let entry = catalog
        .entity_entry(
            EntityName::Products,
            EntityPermission::Create,
            "user-7",
            "prod-1",
            Some(TenantId::Main),
        )
        .unwrap();

    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"A0101\""));
    assert!(json.contains("\"products_create\""));
    assert!(json.contains("\"main\""));
}

#[test]
fn test_unknown_category_is_typed_error() {
    let catalog = AuditCatalog::builtin().unwrap();
    let err = catalog.codes_by_category("telemetry").unwrap_err();
    assert!(matches!(err, EngineError::UnknownAuditCategory(name) if name == "telemetry"));
}

#[test]
fn test_next_code_after_gap() {
    let catalog = AuditCatalog::builtin().unwrap();
    // entity_management tops out at A0116
    assert_eq!(
        catalog.next_code_in_category("entity_management").unwrap(),
        "A0117"
    );
}

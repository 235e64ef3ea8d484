//! Entity permission schema registry
//!
//! One [`EntityPermissionSchema`] per entity declares default field and
//! entity permissions plus tenant-specific overrides. The registry is static
//! configuration: built once at startup, validated, then only read.
//!
//! Overrides REPLACE defaults outright. This is deliberately different from
//! the additive/subtractive deltas of role inheritance
//! ([`crate::auth::rbac`]); the two algorithms must not be unified.

use crate::core::entity::EntityName;
use crate::core::tenant::TenantId;
use crate::core::vocabulary::{
    entity_presets, field_presets, EntityPermissionSet, FieldPermission, FieldPermissionSet,
};
use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Permission rule for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPermissionRule {
    /// Default field permissions across all tenants
    pub default_permissions: FieldPermissionSet,
    /// Tenant-specific overrides; a present key replaces the default
    /// entirely, even when its set is empty
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tenant_overrides: BTreeMap<TenantId, FieldPermissionSet>,
}

impl FieldPermissionRule {
    /// Create a rule with the given defaults and no overrides
    pub fn new(default_permissions: FieldPermissionSet) -> Self {
        Self {
            default_permissions,
            tenant_overrides: BTreeMap::new(),
        }
    }

    /// Add a tenant override, replacing any previous override for the tenant
    pub fn with_override(mut self, tenant: TenantId, permissions: FieldPermissionSet) -> Self {
        self.tenant_overrides.insert(tenant, permissions);
        self
    }
}

/// Permission schema for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPermissionSchema {
    /// The entity this schema describes
    pub entity: EntityName,
    /// Field permission rules, one per persisted field
    pub fields: BTreeMap<String, FieldPermissionRule>,
    /// Default entity-level permissions for all tenants
    pub default_entity_permissions: EntityPermissionSet,
    /// Tenant-specific entity permission overrides (replace semantics)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tenant_entity_overrides: BTreeMap<TenantId, EntityPermissionSet>,
}

impl EntityPermissionSchema {
    /// Create an empty schema with the given entity defaults
    pub fn new(entity: EntityName, default_entity_permissions: EntityPermissionSet) -> Self {
        Self {
            entity,
            fields: BTreeMap::new(),
            default_entity_permissions,
            tenant_entity_overrides: BTreeMap::new(),
        }
    }

    /// Add a field rule
    pub fn with_field(mut self, name: &str, rule: FieldPermissionRule) -> Self {
        self.fields.insert(name.to_string(), rule);
        self
    }

    /// Add a tenant-level entity permission override
    pub fn with_entity_override(
        mut self,
        tenant: TenantId,
        permissions: EntityPermissionSet,
    ) -> Self {
        self.tenant_entity_overrides.insert(tenant, permissions);
        self
    }

    /// Validate this schema against the entity's persisted field catalog.
    ///
    /// `enforce_view_implies_fetch` additionally rejects any permission set
    /// granting `view` without `fetch`.
    pub fn validate(&self, enforce_view_implies_fetch: bool) -> Result<()> {
        let persisted: BTreeSet<&str> = self.entity.persisted_fields().iter().copied().collect();
        let declared: BTreeSet<&str> = self.fields.keys().map(String::as_str).collect();

        let missing: Vec<&&str> = persisted.iter().filter(|f| !declared.contains(**f)).collect();
        if !missing.is_empty() {
            return Err(EngineError::schema_validation(format!(
                "schema for {} is missing persisted fields: {:?}",
                self.entity, missing
            )));
        }

        let extra: Vec<&&str> = declared.iter().filter(|f| !persisted.contains(**f)).collect();
        if !extra.is_empty() {
            return Err(EngineError::schema_validation(format!(
                "schema for {} declares unknown fields: {:?}",
                self.entity, extra
            )));
        }

        if enforce_view_implies_fetch {
            for (field, rule) in &self.fields {
                check_view_implies_fetch(self.entity, field, "default", &rule.default_permissions)?;
                for (tenant, permissions) in &rule.tenant_overrides {
                    check_view_implies_fetch(self.entity, field, tenant.as_str(), permissions)?;
                }
            }
        }

        Ok(())
    }
}

fn check_view_implies_fetch(
    entity: EntityName,
    field: &str,
    scope: &str,
    permissions: &FieldPermissionSet,
) -> Result<()> {
    if permissions.contains(&FieldPermission::View) && !permissions.contains(&FieldPermission::Fetch)
    {
        return Err(EngineError::schema_validation(format!(
            "{}.{} grants view without fetch in {} permissions",
            entity, field, scope
        )));
    }
    Ok(())
}

/// Static mapping from entity to its permission schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionRegistry {
    schemas: BTreeMap<EntityName, EntityPermissionSchema>,
}

impl PermissionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shipped with the platform: products and users
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(products_schema());
        registry.insert(users_schema());
        registry
    }

    /// Insert a schema, replacing any existing schema for the same entity
    pub fn insert(&mut self, schema: EntityPermissionSchema) {
        self.schemas.insert(schema.entity, schema);
    }

    /// Look up the schema for an entity
    pub fn schema(&self, entity: EntityName) -> Option<&EntityPermissionSchema> {
        self.schemas.get(&entity)
    }

    /// Entities with a registered schema
    pub fn entities(&self) -> impl Iterator<Item = EntityName> + '_ {
        self.schemas.keys().copied()
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry has no schemas
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validate every schema against the persisted field catalogs.
    ///
    /// Run once at startup; a failure here is a configuration error, not a
    /// request-time authorization failure.
    pub fn validate(&self, enforce_view_implies_fetch: bool) -> Result<()> {
        for schema in self.schemas.values() {
            schema.validate(enforce_view_implies_fetch)?;
        }
        debug!(schemas = self.schemas.len(), "permission registry validated");
        Ok(())
    }
}

/// Shipped permission schema for the products entity
fn products_schema() -> EntityPermissionSchema {
    EntityPermissionSchema::new(EntityName::Products, entity_presets::read_only())
        .with_entity_override(TenantId::Admin, entity_presets::full_access())
        .with_field("id", FieldPermissionRule::new(field_presets::read_only()))
        .with_field(
            "name",
            FieldPermissionRule::new(field_presets::full_access())
                .with_override(TenantId::Scubadiving, field_presets::read_only()),
        )
        .with_field("price", FieldPermissionRule::new(field_presets::full_access()))
        .with_field(
            "cost",
            FieldPermissionRule::new(field_presets::read_only())
                .with_override(TenantId::Admin, field_presets::full_access()),
        )
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
            FieldPermissionRule::new(field_presets::no_access())
                .with_override(TenantId::Admin, field_presets::full_access()),
        )
        .with_field(
            "tenant_id",
            FieldPermissionRule::new(field_presets::read_only()),
        )
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
            FieldPermissionRule::new(field_presets::read_only())
                .with_override(TenantId::Admin, field_presets::full_access()),
        )
}

/// Shipped permission schema for the users entity
fn users_schema() -> EntityPermissionSchema {
    EntityPermissionSchema::new(EntityName::Users, entity_presets::read_only())
        .with_entity_override(TenantId::Admin, entity_presets::full_access())
        .with_field("id", FieldPermissionRule::new(field_presets::read_only()))
        .with_field(
            "auth_subject",
            FieldPermissionRule::new(field_presets::read_only())
                .with_override(TenantId::Admin, field_presets::full_access()),
        )
        .with_field("email", FieldPermissionRule::new(field_presets::read_only()))
        .with_field(
            "first_name",
            FieldPermissionRule::new(field_presets::full_access()),
        )
        .with_field(
            "last_name",
            FieldPermissionRule::new(field_presets::full_access()),
        )
        .with_field(
            "image_url",
            FieldPermissionRule::new(field_presets::full_access()),
        )
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
            FieldPermissionRule::new(field_presets::read_only())
                .with_override(TenantId::Admin, field_presets::full_access()),
        )
}

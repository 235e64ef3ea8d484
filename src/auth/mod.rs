//! Authorization facade
//!
//! [`AuthzEngine`] ties the schema registry and the role composition
//! engine together: one call answers whether a role may perform an entity
//! action at a tenant, checking the tenant ceiling first and the role's
//! resolved permissions second.

pub mod rbac;

use crate::config::AuthzConfig;
use crate::core::entity::EntityName;
use crate::core::schema::PermissionRegistry;
use crate::core::strings::entity_permission;
use crate::core::tenant::TenantId;
use crate::core::vocabulary::{EntityPermission, EntityPermissionSet, FieldPermissionSet};
use crate::utils::error::Result;
use self::rbac::{resolve_role_permissions, ResolvedRolePermissions, Role, RoleLookup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outcome of one authorization check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthzDecision {
    /// Whether the action is allowed
    pub allowed: bool,
    /// The permission string the check required
    pub required_permission: String,
    /// Human-readable explanation of the outcome
    pub reason: String,
}

impl AuthzDecision {
    fn allow(required_permission: String, reason: &str) -> Self {
        Self {
            allowed: true,
            required_permission,
            reason: reason.to_string(),
        }
    }

    fn deny(required_permission: String, reason: String) -> Self {
        Self {
            allowed: false,
            required_permission,
            reason,
        }
    }
}

/// Permission resolution and authorization engine
#[derive(Debug, Clone)]
pub struct AuthzEngine {
    config: AuthzConfig,
    registry: PermissionRegistry,
}

impl AuthzEngine {
    /// Create an engine over the built-in registry
    pub fn new(config: AuthzConfig) -> Result<Self> {
        Self::with_registry(config, PermissionRegistry::builtin())
    }

    /// Create an engine over a caller-supplied registry.
    ///
    /// The registry is validated up front so a misconfigured schema fails
    /// at startup rather than on the first check.
    pub fn with_registry(config: AuthzConfig, registry: PermissionRegistry) -> Result<Self> {
        registry.validate(config.enforce_view_implies_fetch)?;
        info!(
            entities = registry.len(),
            enabled = config.enabled,
            "authorization engine initialized"
        );
        Ok(Self { config, registry })
    }

    /// The engine's configuration
    pub fn config(&self) -> &AuthzConfig {
        &self.config
    }

    /// The underlying schema registry
    pub fn registry(&self) -> &PermissionRegistry {
        &self.registry
    }

    /// Effective field permissions for `(entity, tenant)`
    pub fn field_permissions(
        &self,
        entity: EntityName,
        tenant: TenantId,
    ) -> Result<BTreeMap<String, FieldPermissionSet>> {
        self.registry.resolve_field_permissions(entity, tenant)
    }

    /// Effective entity-level permissions for `(entity, tenant)`
    pub fn entity_permissions(
        &self,
        entity: EntityName,
        tenant: TenantId,
    ) -> Result<EntityPermissionSet> {
        self.registry.resolve_entity_permissions(entity, tenant)
    }

    /// Resolve a role's effective permission sets
    pub fn resolve_role(
        &self,
        role: &Role,
        lookup: &dyn RoleLookup,
    ) -> Result<ResolvedRolePermissions> {
        resolve_role_permissions(role, lookup)
    }

    /// Check whether `role` may perform `action` on `entity` at `tenant`.
    ///
    /// The tenant's entity-level ceiling applies before the role is even
    /// consulted: no role, admin or otherwise, can exceed what the tenant
    /// exposes. Admin roles named in the configuration bypass the role
    /// permission check only.
    pub fn authorize(
        &self,
        role: &Role,
        lookup: &dyn RoleLookup,
        entity: EntityName,
        tenant: TenantId,
        action: EntityPermission,
    ) -> Result<AuthzDecision> {
        let required = entity_permission(entity, action);

        if !self.config.enabled {
            return Ok(AuthzDecision::allow(required, "authorization disabled"));
        }

        if let Some(scope) = role.tenant_scope {
            if scope != tenant {
                debug!(role = %role.name, %tenant, "role tenant scope mismatch");
                return Ok(AuthzDecision::deny(
                    required,
                    format!("role {} is scoped to tenant {}", role.name, scope),
                ));
            }
        }

        let ceiling = self.registry.resolve_entity_permissions(entity, tenant)?;
        if !ceiling.contains(&action) {
            return Ok(AuthzDecision::deny(
                required,
                format!("tenant {tenant} does not expose {entity} {action}"),
            ));
        }

        if self.config.is_admin_role(&role.name) {
            return Ok(AuthzDecision::allow(required, "admin role bypass"));
        }

        let resolved = resolve_role_permissions(role, lookup)?;
        if resolved.grants_entity_permission(&required) {
            Ok(AuthzDecision::allow(required, "granted by role"))
        } else {
            Ok(AuthzDecision::deny(
                required.clone(),
                format!("role {} does not grant {required}", role.name),
            ))
        }
    }

    /// Check whether `role` grants a feature permission at `tenant`
    pub fn authorize_feature(
        &self,
        role: &Role,
        lookup: &dyn RoleLookup,
        tenant: TenantId,
        feature: &str,
    ) -> Result<AuthzDecision> {
        let required = feature.to_string();

        if !self.config.enabled {
            return Ok(AuthzDecision::allow(required, "authorization disabled"));
        }

        if let Some(scope) = role.tenant_scope {
            if scope != tenant {
                return Ok(AuthzDecision::deny(
                    required,
                    format!("role {} is scoped to tenant {}", role.name, scope),
                ));
            }
        }

        if self.config.is_admin_role(&role.name) {
            return Ok(AuthzDecision::allow(required, "admin role bypass"));
        }

        let resolved = resolve_role_permissions(role, lookup)?;
        if resolved.grants_feature_permission(feature) {
            Ok(AuthzDecision::allow(required, "granted by role"))
        } else {
            Ok(AuthzDecision::deny(
                required,
                format!("role {} does not grant feature {feature}", role.name),
            ))
        }
    }
}

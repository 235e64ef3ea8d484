//! Role composition engine
//!
//! Resolves a role's effective entity and feature permission sets.
//! Inherited roles resolve the parent first, then apply
//! `(parent ∪ added) \ removed` independently per permission kind, so a
//! permission named in both deltas is removed. A non-empty
//! `custom_permissions` list short-circuits everything.
//!
//! Role deltas are additive/subtractive; this is deliberately different
//! from the replace-on-override layering of the schema resolver
//! ([`crate::core::resolver`]).

use crate::auth::rbac::types::{ResolvedRolePermissions, Role, RoleLookup};
use crate::utils::error::{EngineError, Result};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;
use uuid::Uuid;

/// Resolve a role's effective permission sets.
///
/// Fails with [`EngineError::RoleInheritanceCycle`] on a cyclic chain,
/// [`EngineError::ParentRoleNotFound`] on a dangling parent reference and
/// [`EngineError::ParentRoleInactive`] on a soft-deleted ancestor. Callers
/// must treat all three as a denial; none is retriable against unchanged
/// data.
pub fn resolve_role_permissions(
    role: &Role,
    lookup: &dyn RoleLookup,
) -> Result<ResolvedRolePermissions> {
    let mut visited = HashSet::new();
    resolve_with_visited(role, lookup, &mut visited)
}

fn resolve_with_visited(
    role: &Role,
    lookup: &dyn RoleLookup,
    visited: &mut HashSet<Uuid>,
) -> Result<ResolvedRolePermissions> {
    if !visited.insert(role.id) {
        return Err(EngineError::RoleInheritanceCycle(role.name.clone()));
    }

    // Escape hatch: custom permissions win over everything
    if role.has_custom_permissions() {
        debug!(role = %role.name, "resolving via custom permissions escape hatch");
        let custom: BTreeSet<String> = role
            .custom_permissions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .cloned()
            .collect();
        return Ok(ResolvedRolePermissions {
            entity_permissions: custom.clone(),
            feature_permissions: custom,
        });
    }

    let Some(parent_id) = role.inherits_from else {
        return Ok(ResolvedRolePermissions {
            entity_permissions: role.entity_permissions.clone(),
            feature_permissions: role.feature_permissions.clone(),
        });
    };

    let parent = lookup
        .role_by_id(parent_id)
        .ok_or(EngineError::ParentRoleNotFound(parent_id))?;
    if !parent.is_active {
        return Err(EngineError::ParentRoleInactive(parent.name.clone()));
    }

    let base = resolve_with_visited(&parent, lookup, visited)?;

    Ok(ResolvedRolePermissions {
        entity_permissions: apply_deltas(
            base.entity_permissions,
            &role.added_entity_permissions,
            &role.removed_entity_permissions,
        ),
        feature_permissions: apply_deltas(
            base.feature_permissions,
            &role.added_feature_permissions,
            &role.removed_feature_permissions,
        ),
    })
}

// Union first, difference last: removal wins when both deltas name the same
// permission string.
fn apply_deltas(
    base: BTreeSet<String>,
    added: &BTreeSet<String>,
    removed: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut effective = base;
    effective.extend(added.iter().cloned());
    for permission in removed {
        effective.remove(permission);
    }
    effective
}

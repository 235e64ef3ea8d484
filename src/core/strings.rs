//! Permission-string generation and expansion
//!
//! Canonical permission identifier strings are `<entity><suffix>` where the
//! suffix is one of `_create`, `_edit`, `_delete`, `_access` or the
//! `_full_access` shorthand. These are the values stored in role permission
//! lists and compared against at authorization time.
//!
//! The full-access expansion table is generated once per process and cached.

use crate::core::entity::EntityName;
use crate::core::vocabulary::EntityPermission;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Suffix marking the full-access shorthand
pub const FULL_ACCESS_SUFFIX: &str = "_full_access";

/// Canonical permission string for one entity action
pub fn entity_permission(entity: EntityName, action: EntityPermission) -> String {
    format!("{}{}", entity.as_str(), action.suffix())
}

/// The four atomic permission strings for an entity
pub fn entity_permission_strings(entity: EntityName) -> [String; 4] {
    EntityPermission::ALL.map(|action| entity_permission(entity, action))
}

/// The full-access shorthand string for an entity
pub fn full_access_permission(entity: EntityName) -> String {
    format!("{}{}", entity.as_str(), FULL_ACCESS_SUFFIX)
}

/// Full-access shorthand name mapped to its four-element expansion, for
/// every known entity. Built once at first use.
static FULL_ACCESS_EXPANSIONS: Lazy<HashMap<String, [String; 4]>> = Lazy::new(|| {
    EntityName::ALL
        .into_iter()
        .map(|entity| (full_access_permission(entity), entity_permission_strings(entity)))
        .collect()
});

/// Expand a full-access shorthand into its atomic permission strings.
///
/// Anything that is not a recognized `<entity>_full_access` string passes
/// through unchanged as a single-element list. This never fails, so the
/// function double-duties for feature permission strings and unrecognized
/// input.
pub fn expand_full_access_permission(permission: &str) -> Vec<String> {
    if permission.ends_with(FULL_ACCESS_SUFFIX) {
        if let Some(expanded) = FULL_ACCESS_EXPANSIONS.get(permission) {
            return expanded.to_vec();
        }
    }
    vec![permission.to_string()]
}

//! Core permission model
//!
//! The static configuration the rest of the engine reads: permission
//! vocabulary and presets, the tenant and entity catalogs, the per-entity
//! permission schema registry, tenant-aware resolution, and permission
//! string generation.

pub mod entity;
pub mod resolver;
pub mod schema;
pub mod strings;
pub mod tenant;
pub mod vocabulary;

// Re-export commonly used types
pub use entity::EntityName;
pub use schema::{EntityPermissionSchema, FieldPermissionRule, PermissionRegistry};
pub use strings::{
    entity_permission, entity_permission_strings, expand_full_access_permission,
    full_access_permission, FULL_ACCESS_SUFFIX,
};
pub use tenant::{TenantConfig, TenantId, TenantType};
pub use vocabulary::{
    entity_presets, field_presets, EntityPermission, EntityPermissionSet, FeaturePermission,
    FieldPermission, FieldPermissionSet, PermissionCategory,
};

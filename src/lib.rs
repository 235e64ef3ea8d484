//! # TenantGate
//!
//! Tenant-aware permission resolution for multi-tenant applications.
//! One engine answers what a role may do with an entity, down to the
//! individual field, as seen from a specific tenant.
//!
//! ## Features
//!
//! - **Closed permission vocabulary**: field actions (`fetch`, `view`,
//!   `update`) and entity actions (`create`, `edit`, `delete`, `access`)
//!   as enums, with the common combinations available as presets
//! - **Per-tenant field rules**: every entity field carries a default
//!   permission set plus tenant overrides that replace it outright
//! - **Role composition**: standalone roles, inherited roles with
//!   added/removed deltas, cycle detection, and a custom-permission
//!   escape hatch
//! - **Canonical permission strings**: `products_create` and friends,
//!   with `_full_access` shorthand expansion
//! - **Audit code catalog**: stable `A`-prefixed codes for entity,
//!   feature and authentication events
//!
//! ## Quick Start
//!
//! ```rust
//! use tenantgate::auth::rbac::{InMemoryRoleStore, SystemRole};
//! use tenantgate::auth::AuthzEngine;
//! use tenantgate::config::AuthzConfig;
//! use tenantgate::core::{EntityName, EntityPermission, TenantId};
//!
//! fn main() -> tenantgate::Result<()> {
//!     let engine = AuthzEngine::new(AuthzConfig::default())?;
//!     let roles = InMemoryRoleStore::with_builtin_roles();
//!     let admin = roles
//!         .role_by_name(SystemRole::SuperAdmin.as_str())
//!         .ok_or_else(|| tenantgate::EngineError::config("missing built-in role"))?;
//!
//!     let decision = engine.authorize(
//!         admin,
//!         &roles,
//!         EntityName::Products,
//!         TenantId::Admin,
//!         EntityPermission::Edit,
//!     )?;
//!     assert!(decision.allowed);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod audit;
pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use audit::{AuditCatalog, AuditLogEntry};
pub use auth::rbac::{ResolvedRolePermissions, Role, RoleLookup};
pub use auth::{AuthzDecision, AuthzEngine};
pub use config::{AuthzConfig, Config};
pub use core::{EntityName, EntityPermission, FieldPermission, PermissionRegistry, TenantId};
pub use utils::error::{EngineError, Result};
pub use utils::logging::init_logging;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

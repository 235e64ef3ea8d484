//! Role-Based Access Control
//!
//! Role records, the role composition engine (standalone roles, inherited
//! roles with added/removed deltas, and the custom-permission escape
//! hatch), and the built-in system role catalog.

mod engine;
mod system;
mod types;

// Re-export public types and functions
pub use engine::resolve_role_permissions;
pub use system::{builtin_system_roles, InMemoryRoleStore, SystemRole};
pub use types::{ResolvedRolePermissions, Role, RoleLookup};

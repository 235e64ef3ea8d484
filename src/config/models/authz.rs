//! Authorization configuration

use serde::{Deserialize, Serialize};

/// Authorization engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Whether authorization checks are enforced at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Role names that bypass the role permission check. The tenant
    /// ceiling still applies to them.
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
    /// Whether schema validation rejects fields granting `view` without
    /// `fetch`
    #[serde(default = "default_true")]
    pub enforce_view_implies_fetch: bool,
}

fn default_true() -> bool {
    true
}

fn default_admin_roles() -> Vec<String> {
    vec!["SUPER_ADMIN".to_string()]
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            admin_roles: default_admin_roles(),
            enforce_view_implies_fetch: default_true(),
        }
    }
}

impl AuthzConfig {
    /// Whether a role name is configured for the admin bypass
    pub fn is_admin_role(&self, name: &str) -> bool {
        self.admin_roles.iter().any(|role| role == name)
    }

    /// Merge another configuration into this one
    pub fn merge(&mut self, other: AuthzConfig) {
        self.enabled = other.enabled;
        self.enforce_view_implies_fetch = other.enforce_view_implies_fetch;
        if !other.admin_roles.is_empty() {
            self.admin_roles = other.admin_roles;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for role in &self.admin_roles {
            if role.trim().is_empty() {
                return Err("admin_roles must not contain empty names".to_string());
            }
        }
        Ok(())
    }
}

//! Tenant catalog
//!
//! The closed set of known tenant codes and their routing configuration.
//! Tenant categorization governs routing, not permissions; the resolver only
//! ever uses [`TenantId`] as an opaque override key.

use crate::utils::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Valid tenant identifiers (subdomains)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TenantId {
    /// Main domain, no subdomain
    Main,
    /// Portal tenant: shared structure, distinct data and styling
    Scubadiving,
    /// Portal tenant: shared structure, distinct data and styling
    Skydiving,
    /// Standalone tenant with authentication
    Admin,
    /// Standalone tenant with authentication
    Integrators,
    /// Standalone tenant with authentication
    Validators,
    /// Standalone tenant with authentication
    Testers,
    /// Public standalone tenant, no authentication
    Status,
    /// API-only tenant, no UI pages
    Api,
    /// API-only tenant, no UI pages
    ExternalApi,
}

impl TenantId {
    /// All known tenants, in canonical order
    pub const ALL: [TenantId; 10] = [
        TenantId::Main,
        TenantId::Scubadiving,
        TenantId::Skydiving,
        TenantId::Admin,
        TenantId::Integrators,
        TenantId::Validators,
        TenantId::Testers,
        TenantId::Status,
        TenantId::Api,
        TenantId::ExternalApi,
    ];

    /// Canonical tenant code (the subdomain)
    pub fn as_str(&self) -> &'static str {
        self.config().subdomain
    }

    /// Routing configuration for this tenant.
    ///
    /// Exhaustive by construction; there is no tenant without configuration.
    pub fn config(&self) -> &'static TenantConfig {
        match self {
            TenantId::Main => &TenantConfig {
                name: "Main Site",
                subdomain: "main",
                primary_color: "#6366F1",
                tenant_type: TenantType::PublicStandalone,
            },
            TenantId::Scubadiving => &TenantConfig {
                name: "Scuba Diving Portal",
                subdomain: "scubadiving",
                primary_color: "#0066CC",
                tenant_type: TenantType::Portal,
            },
            TenantId::Skydiving => &TenantConfig {
                name: "Skydiving Portal",
                subdomain: "skydiving",
                primary_color: "#FF6600",
                tenant_type: TenantType::Portal,
            },
            TenantId::Admin => &TenantConfig {
                name: "Admin Portal",
                subdomain: "admin",
                primary_color: "#333333",
                tenant_type: TenantType::Standalone,
            },
            TenantId::Integrators => &TenantConfig {
                name: "Integrators Portal",
                subdomain: "integrators",
                primary_color: "#4CAF50",
                tenant_type: TenantType::Standalone,
            },
            TenantId::Validators => &TenantConfig {
                name: "Validators Portal",
                subdomain: "validators",
                primary_color: "#FF9800",
                tenant_type: TenantType::Standalone,
            },
            TenantId::Testers => &TenantConfig {
                name: "Testers Portal",
                subdomain: "testers",
                primary_color: "#9C27B0",
                tenant_type: TenantType::Standalone,
            },
            TenantId::Status => &TenantConfig {
                name: "Status Page",
                subdomain: "status",
                primary_color: "#10B981",
                tenant_type: TenantType::PublicStandalone,
            },
            TenantId::Api => &TenantConfig {
                name: "API Services",
                subdomain: "api",
                primary_color: "#059669",
                tenant_type: TenantType::ApiOnly,
            },
            TenantId::ExternalApi => &TenantConfig {
                name: "External API Services",
                subdomain: "external-api",
                primary_color: "#DC2626",
                tenant_type: TenantType::ApiOnly,
            },
        }
    }

    /// Routing category for this tenant
    pub fn tenant_type(&self) -> TenantType {
        self.config().tenant_type
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenantId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tenant| tenant.as_str() == s)
            .ok_or_else(|| EngineError::UnknownTenant(s.to_string()))
    }
}

/// Tenant routing categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TenantType {
    /// Shared page structure, different data and styling
    Portal,
    /// Own page structure with authentication
    Standalone,
    /// Own page structure without authentication
    PublicStandalone,
    /// API routes only, no UI pages
    ApiOnly,
}

impl TenantType {
    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantType::Portal => "portal",
            TenantType::Standalone => "standalone",
            TenantType::PublicStandalone => "public_standalone",
            TenantType::ApiOnly => "api_only",
        }
    }

    /// Whether requests under this tenant category pass through authentication
    pub fn requires_auth(&self) -> bool {
        matches!(self, TenantType::Portal | TenantType::Standalone)
    }
}

impl fmt::Display for TenantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static routing configuration for a single tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantConfig {
    /// Display name
    pub name: &'static str,
    /// Subdomain the tenant is served under
    pub subdomain: &'static str,
    /// Primary styling color
    pub primary_color: &'static str,
    /// Routing category
    pub tenant_type: TenantType,
}

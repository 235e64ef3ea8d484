//! Audit code catalog
//!
//! Audit events carry stable `A`-prefixed four-digit codes grouped into
//! categories. The catalog is embedded as JSON and checked for internal
//! consistency at load time: every mapped code must exist in a category,
//! and entity/feature mapping keys must name known entities and features.

use crate::core::entity::EntityName;
use crate::core::tenant::TenantId;
use crate::core::vocabulary::{EntityPermission, FeaturePermission};
use crate::utils::error::{EngineError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

static CODE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^A\d{4}$").expect("audit code pattern is valid"));

/// Whether a string has the `A0000` audit code shape
pub fn is_audit_code_format(code: &str) -> bool {
    CODE_FORMAT.is_match(code)
}

/// One category of audit codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditCategory {
    /// Code prefix letter
    pub prefix: String,
    /// Category description, copied onto entries
    pub description: String,
    /// Code to action-name table
    pub actions: BTreeMap<String, String>,
}

/// Details resolved from an audit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditActionDetails<'a> {
    /// Action name
    pub action: &'a str,
    /// Category name
    pub category: &'a str,
    /// Category description
    pub description: &'a str,
}

/// The embedded audit code catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditCatalog {
    categories: BTreeMap<String, AuditCategory>,
    entity_mappings: BTreeMap<String, BTreeMap<String, String>>,
    feature_mappings: BTreeMap<String, String>,
}

impl AuditCatalog {
    /// Parse and check the embedded catalog
    pub fn builtin() -> Result<Self> {
        let catalog: AuditCatalog = serde_json::from_str(include_str!("audit_codes.json"))?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Verify internal consistency of the catalog
    pub fn check(&self) -> Result<()> {
        for (name, category) in &self.categories {
            for code in category.actions.keys() {
                if !is_audit_code_format(code) {
                    return Err(EngineError::config(format!(
                        "audit code {code} in category {name} is malformed"
                    )));
                }
                if !code.starts_with(&category.prefix) {
                    return Err(EngineError::config(format!(
                        "audit code {code} does not carry category {name} prefix {}",
                        category.prefix
                    )));
                }
            }
        }

        for (entity, actions) in &self.entity_mappings {
            EntityName::from_str(entity)?;
            for (action, code) in actions {
                EntityPermission::from_str(action)?;
                if self.action_by_code(code).is_none() {
                    return Err(EngineError::config(format!(
                        "entity mapping {entity}.{action} references unknown code {code}"
                    )));
                }
            }
        }

        for (feature, code) in &self.feature_mappings {
            FeaturePermission::from_str(feature)?;
            if self.action_by_code(code).is_none() {
                return Err(EngineError::config(format!(
                    "feature mapping {feature} references unknown code {code}"
                )));
            }
        }

        Ok(())
    }

    /// Audit code for one entity action, if the entity is mapped
    pub fn entity_audit_code(
        &self,
        entity: EntityName,
        action: EntityPermission,
    ) -> Option<&str> {
        self.entity_mappings
            .get(entity.as_str())?
            .get(action.as_str())
            .map(String::as_str)
    }

    /// Audit code for a feature permission, if mapped
    pub fn feature_audit_code(&self, feature: FeaturePermission) -> Option<&str> {
        self.feature_mappings.get(feature.as_str()).map(String::as_str)
    }

    /// Reverse lookup: audit code carrying an action name
    pub fn code_by_action(&self, action: &str) -> Option<&str> {
        self.categories.values().find_map(|category| {
            category
                .actions
                .iter()
                .find(|(_, name)| name.as_str() == action)
                .map(|(code, _)| code.as_str())
        })
    }

    /// Action details for an audit code
    pub fn action_by_code(&self, code: &str) -> Option<AuditActionDetails<'_>> {
        self.categories.iter().find_map(|(name, category)| {
            category.actions.get(code).map(|action| AuditActionDetails {
                action,
                category: name,
                description: &category.description,
            })
        })
    }

    /// All codes in a category
    pub fn codes_by_category(&self, category: &str) -> Result<&BTreeMap<String, String>> {
        self.categories
            .get(category)
            .map(|c| &c.actions)
            .ok_or_else(|| EngineError::UnknownAuditCategory(category.to_string()))
    }

    /// Whether a code is well-formed and present in the catalog
    pub fn is_valid_code(&self, code: &str) -> bool {
        is_audit_code_format(code) && self.action_by_code(code).is_some()
    }

    /// Next unassigned code in a category
    pub fn next_code_in_category(&self, category: &str) -> Result<String> {
        let actions = self.codes_by_category(category)?;
        let max = actions
            .keys()
            .filter_map(|code| code[1..].parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        Ok(format!("A{:04}", max + 1))
    }

    /// Build an entry for a code, or `None` when the code is unknown
    pub fn entry(&self, code: &str, user_id: &str) -> Option<AuditLogEntry> {
        let details = self.action_by_code(code)?;
        Some(AuditLogEntry {
            code: code.to_string(),
            action: details.action.to_string(),
            category: details.category.to_string(),
            description: Some(details.description.to_string()),
            entity_id: None,
            entity_type: None,
            user_id: user_id.to_string(),
            tenant_id: None,
            metadata: None,
            created_at: Utc::now(),
        })
    }

    /// Build an entity-action entry, or `None` when the entity is unmapped
    pub fn entity_entry(
        &self,
        entity: EntityName,
        action: EntityPermission,
        user_id: &str,
        entity_id: &str,
        tenant: Option<TenantId>,
    ) -> Option<AuditLogEntry> {
        let code = self.entity_audit_code(entity, action)?.to_string();
        let mut entry = self.entry(&code, user_id)?;
        entry.entity_id = Some(entity_id.to_string());
        entry.entity_type = Some(entity);
        entry.tenant_id = tenant;
        Some(entry)
    }

    /// Build a feature-usage entry, or `None` when the feature is unmapped
    pub fn feature_entry(
        &self,
        feature: FeaturePermission,
        user_id: &str,
        tenant: Option<TenantId>,
    ) -> Option<AuditLogEntry> {
        let code = self.feature_audit_code(feature)?.to_string();
        let mut entry = self.entry(&code, user_id)?;
        entry.tenant_id = tenant;
        Some(entry)
    }
}

/// One audit log entry, ready for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Stable audit code
    pub code: String,
    /// Action name the code resolves to
    pub action: String,
    /// Category name
    pub category: String,
    /// Category description
    pub description: Option<String>,
    /// Affected record id, for entity events
    pub entity_id: Option<String>,
    /// Affected entity, for entity events
    pub entity_type: Option<EntityName>,
    /// Acting user
    pub user_id: String,
    /// Tenant the event happened at
    pub tenant_id: Option<TenantId>,
    /// Free-form structured context
    pub metadata: Option<serde_json::Value>,
    /// Event timestamp
    pub created_at: DateTime<Utc>,
}

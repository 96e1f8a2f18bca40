//! Detection rules, managed through `/rules`.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Fields of a rule that create and update may set.
///
/// Optional fields are left out of the request when empty. `enabled` is
/// always sent so that a rule can be disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleModifiableAttributes {
    /// Human readable rule name.
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    /// Python source of the rule.
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub severity: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub log_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub references: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub runbook: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub dedup_period_minutes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// A rule as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(flatten)]
    pub attributes: RuleModifiableAttributes,
}

/// Input for creating a rule.
///
/// The rule id is chosen by the caller and passed to `create_rule`
/// alongside this input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateRuleInput {
    #[serde(flatten)]
    pub attributes: RuleModifiableAttributes,
}

/// Input for updating a rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: RuleModifiableAttributes,
}

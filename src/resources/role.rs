//! User roles.
//!
//! The API grants `<X>Read` implicitly with `<X>Modify` and leaves it out
//! of the permissions it returns. See
//! [`provider::permissions`](crate::provider::permissions) for how the
//! role handler reconciles the two lists.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Fields of a role that create and update may set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleModifiableAttributes {
    /// Unique display name of the role.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Permission names such as `RuleRead` or `UserModify`.
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
}

/// A role as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: RoleModifiableAttributes,
}

/// Input of the `createRole` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateRoleInput {
    #[serde(flatten)]
    pub attributes: RoleModifiableAttributes,
}

/// Input of the `updateRole` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRoleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: RoleModifiableAttributes,
}

/// Result of `createRole`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreateRoleOutput {
    #[serde(default)]
    pub role: Option<Role>,
}

/// Result of `updateRole`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateRoleOutput {
    #[serde(default)]
    pub role: Option<Role>,
}

/// Input of the `deleteRole` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteRoleInput {
    pub id: String,
}

/// Result of `deleteRole`. The API returns no fields of the deleted role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteRoleOutput;

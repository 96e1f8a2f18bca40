//! Global helpers: named Python snippets shared by rules, managed through
//! `/globals`.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Fields of a global helper that create and update may set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalModifiableAttributes {
    /// Module name rules import the helper under.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Python source of the helper.
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A global helper as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Global {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: GlobalModifiableAttributes,
}

/// Input for creating a global helper. The API derives the id from `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateGlobalInput {
    #[serde(flatten)]
    pub attributes: GlobalModifiableAttributes,
}

/// Input for updating a global helper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGlobalInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: GlobalModifiableAttributes,
}

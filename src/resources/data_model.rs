//! Data models, managed through `/data-models`.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Maps a unified field name onto a path in a log type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataModelMapping {
    /// Unified field name, e.g. `source_ip`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// JSON path of the field in the log type.
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
}

/// Fields of a data model that create and update may set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataModelModifiableAttributes {
    /// The log type the model applies to. One model per log type.
    #[serde(deserialize_with = "null_as_default")]
    pub log_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub mappings: Vec<DataModelMapping>,
    /// Optional Python source for computed fields.
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

/// A data model as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataModel {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: DataModelModifiableAttributes,
}

/// Input for creating a data model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateDataModelInput {
    #[serde(flatten)]
    pub attributes: DataModelModifiableAttributes,
}

/// Input for updating a data model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDataModelInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: DataModelModifiableAttributes,
}

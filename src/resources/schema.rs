//! Custom log schemas.
//!
//! Schemas are keyed by name. The API has a single `createOrUpdateSchema`
//! mutation, no fetch by key and no hard delete, so the GraphQL client maps
//! the CRUD operations onto it, a paged `schemas` listing and an archive
//! status update.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaModifiableAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// The schema definition as YAML.
    #[serde(deserialize_with = "null_as_default")]
    pub spec: String,
    #[serde(
        rename = "referenceURL",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub reference_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_field_discovery_enabled: bool,
}

/// A schema as returned by the API.
///
/// `revision` must be sent back unchanged on update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(flatten)]
    pub attributes: SchemaModifiableAttributes,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub revision: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_archived: bool,
    /// `true` for schemas shipped by Panther.
    #[serde(deserialize_with = "null_as_default")]
    pub is_managed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Input for creating a schema. The name is passed to `create_schema`
/// alongside this input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateSchemaInput {
    #[serde(flatten)]
    pub attributes: SchemaModifiableAttributes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSchemaInput {
    pub name: String,
    /// The revision last read from the API.
    pub revision: i64,
    #[serde(flatten)]
    pub attributes: SchemaModifiableAttributes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreateSchemaOutput {
    #[serde(default)]
    pub schema: Option<Schema>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateSchemaOutput {
    #[serde(default)]
    pub schema: Option<Schema>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSchemaInput {
    pub name: String,
}

/// Result of archiving a schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteSchemaOutput {
    /// Name of the archived schema, as reported by the API.
    pub name: String,
}

/// Body of `createOrUpdateSchema`. `revision` is absent on create.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrUpdateSchemaInput<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
    #[serde(flatten)]
    pub attributes: &'a SchemaModifiableAttributes,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchemasInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateSchemaStatusInput<'a> {
    pub name: &'a str,
    pub is_archived: bool,
}

#[derive(Deserialize)]
pub(crate) struct SchemaConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<SchemaEdge>,
    #[serde(rename = "pageInfo", default, deserialize_with = "null_as_default")]
    pub page_info: PageInfo,
}

#[derive(Deserialize)]
pub(crate) struct SchemaEdge {
    pub node: Schema,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PageInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SchemaName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Deserialize)]
pub(crate) struct UpdateSchemaStatusOutput {
    pub schema: Option<SchemaName>,
}

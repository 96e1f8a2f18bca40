//! The schema resource handler.

use crate::clients::GraphqlOperations;
use crate::provider::Diagnostic;
use crate::resources::{
    CreateSchemaInput, DeleteSchemaInput, Schema, SchemaModifiableAttributes, UpdateSchemaInput,
};

const CLIENT_ERROR: &str = "Client Error";

/// Stored state of one schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaModel {
    pub name: String,
    pub attributes: SchemaModifiableAttributes,
    /// Set by the API; sent back unchanged on update.
    pub revision: i64,
    pub version: i64,
}

impl From<Schema> for SchemaModel {
    fn from(schema: Schema) -> Self {
        Self {
            name: schema.name,
            attributes: schema.attributes,
            revision: schema.revision,
            version: schema.version,
        }
    }
}

/// Create, read, update and delete for custom schemas.
///
/// Deleting a schema archives it.
pub struct SchemaResource<'a, C: GraphqlOperations + ?Sized> {
    client: &'a C,
}

impl<'a, C: GraphqlOperations + ?Sized> SchemaResource<'a, C> {
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Creates the schema described by `plan`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails or returns no schema.
    pub async fn create(&self, plan: &SchemaModel) -> Result<SchemaModel, Diagnostic> {
        let input = CreateSchemaInput {
            attributes: plan.attributes.clone(),
        };

        let output = self
            .client
            .create_schema(&plan.name, &input)
            .await
            .map_err(|e| {
                Diagnostic::error(
                    CLIENT_ERROR,
                    format!("Unable to create schema, got error: {e}"),
                )
            })?;

        output
            .schema
            .map(SchemaModel::from)
            .ok_or_else(|| Diagnostic::error(CLIENT_ERROR, "Create schema response was nil"))
    }

    /// Refreshes `state` from the API.
    ///
    /// `Ok(None)` means the schema no longer exists and should be dropped
    /// from state.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the schemas cannot be listed.
    pub async fn read(&self, state: &SchemaModel) -> Result<Option<SchemaModel>, Diagnostic> {
        let schema = self.client.get_schema(&state.name).await.map_err(|e| {
            Diagnostic::error(CLIENT_ERROR, format!("Unable to read schema, got error: {e}"))
        })?;

        if schema.is_none() {
            tracing::debug!(name = %state.name, "Schema is gone, removing it from state");
        }
        Ok(schema.map(SchemaModel::from))
    }

    /// Applies `plan` to the schema, sending the revision held in `state`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails or returns no schema.
    pub async fn update(
        &self,
        plan: &SchemaModel,
        state: &SchemaModel,
    ) -> Result<SchemaModel, Diagnostic> {
        let input = UpdateSchemaInput {
            name: plan.name.clone(),
            revision: state.revision,
            attributes: plan.attributes.clone(),
        };

        let output = self.client.update_schema(&input).await.map_err(|e| {
            Diagnostic::error(
                CLIENT_ERROR,
                format!("Unable to update schema, got error: {e}"),
            )
        })?;

        output
            .schema
            .map(SchemaModel::from)
            .ok_or_else(|| Diagnostic::error(CLIENT_ERROR, "Update schema response was nil"))
    }

    /// Archives the schema `state.name`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails.
    pub async fn delete(&self, state: &SchemaModel) -> Result<(), Diagnostic> {
        let input = DeleteSchemaInput {
            name: state.name.clone(),
        };

        self.client.delete_schema(&input).await.map(drop).map_err(|e| {
            Diagnostic::error(
                CLIENT_ERROR,
                format!("Unable to delete schema, got error: {e}"),
            )
        })
    }
}

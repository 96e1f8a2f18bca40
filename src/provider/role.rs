//! The role resource handler.

use crate::clients::{GraphqlError, GraphqlOperations};
use crate::provider::permissions::{filter_implied_permissions, restore_implied_permissions};
use crate::provider::Diagnostic;
use crate::resources::{CreateRoleInput, DeleteRoleInput, RoleModifiableAttributes, UpdateRoleInput};

/// Stored state of one role.
///
/// `permissions` is `None` when the role has none, never `Some(vec![])`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleModel {
    /// Empty until the role has been created.
    pub id: String,
    pub name: String,
    pub permissions: Option<Vec<String>>,
}

/// Sorted copy of `permissions`, or `None` if there are none.
fn stored_permissions(mut permissions: Vec<String>) -> Option<Vec<String>> {
    if permissions.is_empty() {
        return None;
    }
    permissions.sort();
    Some(permissions)
}

/// Create, read, update and delete for roles.
///
/// The configured permission list is what gets stored, even though the API
/// returns roles without the `<X>Read` permissions implied by a `<X>Modify`.
pub struct RoleResource<'a, C: GraphqlOperations + ?Sized> {
    client: &'a C,
}

impl<'a, C: GraphqlOperations + ?Sized> RoleResource<'a, C> {
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Creates the role described by `plan`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails or returns no role.
    pub async fn create(&self, plan: &RoleModel) -> Result<RoleModel, Diagnostic> {
        let configured = plan.permissions.clone().unwrap_or_default();
        let input = CreateRoleInput {
            attributes: RoleModifiableAttributes {
                name: plan.name.clone(),
                permissions: filter_implied_permissions(&configured),
            },
        };
        tracing::debug!(name = %plan.name, "Creating role");

        let role = self
            .client
            .create_role(&input)
            .await
            .and_then(|output| {
                output.role.ok_or(GraphqlError::MissingData {
                    operation: "CreateRole",
                })
            })
            .map_err(|e| {
                Diagnostic::error(
                    "Error creating Role",
                    format!("Could not create role, unexpected error: {e}"),
                )
            })?;

        Ok(RoleModel {
            id: role.id,
            name: role.attributes.name,
            permissions: stored_permissions(configured),
        })
    }

    /// Refreshes `state` from the API.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the role cannot be read.
    pub async fn read(&self, state: &RoleModel) -> Result<RoleModel, Diagnostic> {
        let role = self.client.get_role_by_id(&state.id).await.map_err(|e| {
            Diagnostic::error(
                "Error reading Role",
                format!(
                    "Could not read role with id {}, unexpected error: {e}",
                    state.id
                ),
            )
        })?;

        let prior = state.permissions.as_deref().unwrap_or_default();
        let permissions = restore_implied_permissions(&role.attributes.permissions, prior);

        Ok(RoleModel {
            id: role.id,
            name: role.attributes.name,
            permissions: stored_permissions(permissions),
        })
    }

    /// Applies `plan` to the existing role `plan.id`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails or returns no role.
    pub async fn update(&self, plan: &RoleModel) -> Result<RoleModel, Diagnostic> {
        let configured = plan.permissions.clone().unwrap_or_default();
        let input = UpdateRoleInput {
            id: plan.id.clone(),
            attributes: RoleModifiableAttributes {
                name: plan.name.clone(),
                permissions: filter_implied_permissions(&configured),
            },
        };
        tracing::debug!(id = %plan.id, "Updating role");

        let role = self
            .client
            .update_role(&input)
            .await
            .and_then(|output| {
                output.role.ok_or(GraphqlError::MissingData {
                    operation: "UpdateRole",
                })
            })
            .map_err(|e| {
                Diagnostic::error(
                    "Error updating Role",
                    format!(
                        "Could not update role with id {}, unexpected error: {e}",
                        plan.id
                    ),
                )
            })?;

        Ok(RoleModel {
            id: role.id,
            name: role.attributes.name,
            permissions: stored_permissions(configured),
        })
    }

    /// Deletes the role `state.id`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails.
    pub async fn delete(&self, state: &RoleModel) -> Result<(), Diagnostic> {
        let input = DeleteRoleInput {
            id: state.id.clone(),
        };
        tracing::debug!(id = %state.id, "Deleting role");

        self.client.delete_role(&input).await.map(drop).map_err(|e| {
            Diagnostic::error(
                "Error deleting Role",
                format!(
                    "Could not delete role with id {}, unexpected error: {e}",
                    state.id
                ),
            )
        })
    }

    /// Reads the role `id` into a fresh state, as when importing it.
    ///
    /// With no prior configuration nothing is restored, so the stored list
    /// is what the API returns.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the role cannot be read.
    pub async fn import(&self, id: &str) -> Result<RoleModel, Diagnostic> {
        self.read(&RoleModel {
            id: id.to_string(),
            ..RoleModel::default()
        })
        .await
    }
}

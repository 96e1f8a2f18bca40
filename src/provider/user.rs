//! The user resource handler.

use crate::clients::{GraphqlError, GraphqlOperations};
use crate::provider::Diagnostic;
use crate::resources::{
    DeleteUserInput, InviteUserInput, UpdateUserInput, User, UserModifiableAttributes,
    UserRoleInput,
};

const MISSING_FIELD: &str = "Missing required field";

/// Stored state of one user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserModel {
    /// Empty until the user has been invited.
    pub id: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    /// Name of the assigned role. `None` when the API reports no role.
    pub role: Option<String>,
}

impl From<User> for UserModel {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.attributes.email,
            given_name: user.attributes.given_name,
            family_name: user.attributes.family_name,
            role: user.role.map(|role| role.attributes.name),
        }
    }
}

impl UserModel {
    fn attributes(&self) -> UserModifiableAttributes {
        UserModifiableAttributes {
            email: self.email.clone(),
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
        }
    }

    /// The configured role as a by-name reference, if one is set.
    fn role_input(&self) -> Option<UserRoleInput> {
        self.role
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(UserRoleInput::name)
    }
}

/// Invite, read, update and delete for console users.
///
/// The API requires a role on every user, so create and update refuse a
/// plan without one before calling it.
pub struct UserResource<'a, C: GraphqlOperations + ?Sized> {
    client: &'a C,
}

impl<'a, C: GraphqlOperations + ?Sized> UserResource<'a, C> {
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Invites the user described by `plan`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if `plan` has no role, or if the API call
    /// fails or returns no user.
    pub async fn create(&self, plan: &UserModel) -> Result<UserModel, Diagnostic> {
        let role = plan.role_input().ok_or_else(|| {
            Diagnostic::error(
                MISSING_FIELD,
                "Role is required to create a user. Please specify a role.",
            )
        })?;
        let input = InviteUserInput {
            attributes: plan.attributes(),
            role,
        };

        let user = self
            .client
            .invite_user(&input)
            .await
            .and_then(|output| {
                output.user.ok_or(GraphqlError::MissingData {
                    operation: "InviteUser",
                })
            })
            .map_err(|e| {
                Diagnostic::error(
                    "Error creating User",
                    format!("Could not create user, unexpected error: {e}"),
                )
            })?;

        tracing::debug!(id = %user.id, "Created user");
        Ok(user.into())
    }

    /// Refreshes `state` from the API.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the user cannot be read.
    pub async fn read(&self, state: &UserModel) -> Result<UserModel, Diagnostic> {
        let user = self.client.get_user_by_id(&state.id).await.map_err(|e| {
            Diagnostic::error(
                "Error reading User",
                format!(
                    "Could not read user with id {}, unexpected error: {e}",
                    state.id
                ),
            )
        })?;

        Ok(user.into())
    }

    /// Applies `plan` to the existing user `plan.id`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if `plan` has no role, or if the API call
    /// fails or returns no user.
    pub async fn update(&self, plan: &UserModel) -> Result<UserModel, Diagnostic> {
        let role = plan.role_input().ok_or_else(|| {
            Diagnostic::error(
                MISSING_FIELD,
                "Role is required to update a user. Please specify a role.",
            )
        })?;
        let input = UpdateUserInput {
            id: plan.id.clone(),
            attributes: plan.attributes(),
            role,
        };

        let user = self
            .client
            .update_user(&input)
            .await
            .and_then(|output| {
                output.user.ok_or(GraphqlError::MissingData {
                    operation: "UpdateUser",
                })
            })
            .map_err(|e| {
                Diagnostic::error(
                    "Error updating User",
                    format!(
                        "Could not update user with id {}, unexpected error: {e}",
                        plan.id
                    ),
                )
            })?;

        tracing::debug!(id = %user.id, "Updated user");
        Ok(user.into())
    }

    /// Deletes the user `state.id`.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the API call fails.
    pub async fn delete(&self, state: &UserModel) -> Result<(), Diagnostic> {
        let input = DeleteUserInput {
            id: state.id.clone(),
        };

        self.client.delete_user(&input).await.map(drop).map_err(|e| {
            Diagnostic::error(
                "Error deleting User",
                format!(
                    "Could not delete user with id {}, unexpected error: {e}",
                    state.id
                ),
            )
        })?;

        tracing::debug!(id = %state.id, "Deleted user");
        Ok(())
    }

    /// Reads the user `id` into a fresh state.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] if the user cannot be read.
    pub async fn import(&self, id: &str) -> Result<UserModel, Diagnostic> {
        self.read(&UserModel {
            id: id.to_string(),
            ..UserModel::default()
        })
        .await
    }
}

//! Console users.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::role::Role;

/// How [`UserRoleInput::value`] identifies the role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRoleInputKind {
    /// `value` is a role id.
    #[default]
    Id,
    /// `value` is a role name.
    Name,
}

/// Reference to the role a user is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleInput {
    pub kind: UserRoleInputKind,
    /// Role id or name, depending on `kind`.
    pub value: String,
}

impl UserRoleInput {
    /// Refers to a role by id.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            kind: UserRoleInputKind::Id,
            value: id.into(),
        }
    }

    /// Refers to a role by name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            kind: UserRoleInputKind::Name,
            value: name.into(),
        }
    }
}

/// Profile fields shared by the inputs and the returned user.
///
/// The role is not part of it: inputs reference a role with
/// [`UserRoleInput`] while the API returns the full [`Role`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserModifiableAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub given_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub family_name: String,
}

/// A console user as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: UserModifiableAttributes,
    /// Account status, e.g. `ACTIVE` or `FORCE_CHANGE_PASSWORD`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub role: Option<Role>,
}

/// Input of the `inviteUser` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InviteUserInput {
    #[serde(flatten)]
    pub attributes: UserModifiableAttributes,
    pub role: UserRoleInput,
}

/// Input of the `updateUser` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: UserModifiableAttributes,
    pub role: UserRoleInput,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InviteUserOutput {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUserOutput {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteUserInput {
    pub id: String,
}

/// Result of `deleteUser`. The API returns no fields of the deleted user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteUserOutput;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_input_kind_wire_values() {
        assert_eq!(
            serde_json::to_value(UserRoleInput::id("r-1")).unwrap(),
            json!({"kind": "ID", "value": "r-1"})
        );
        assert_eq!(
            serde_json::to_value(UserRoleInput::name("Admin")).unwrap(),
            json!({"kind": "NAME", "value": "Admin"})
        );
    }

    #[test]
    fn test_invite_input_shape() {
        let input = InviteUserInput {
            attributes: UserModifiableAttributes {
                email: "ada@example.com".to_string(),
                given_name: "Ada".to_string(),
                family_name: "Lovelace".to_string(),
            },
            role: UserRoleInput::name("Analyst"),
        };

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "email": "ada@example.com",
                "givenName": "Ada",
                "familyName": "Lovelace",
                "role": {"kind": "NAME", "value": "Analyst"}
            })
        );
    }

    #[test]
    fn test_user_deserializes_nested_role() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "email": "ada@example.com",
            "givenName": "Ada",
            "familyName": "Lovelace",
            "status": "ACTIVE",
            "createdAt": "2024-01-01T00:00:00Z",
            "role": {"id": "r-1", "name": "Analyst", "permissions": ["RuleRead"]}
        }))
        .unwrap();

        let role = user.role.unwrap();
        assert_eq!(role.attributes.name, "Analyst");
        assert_eq!(role.attributes.permissions, vec!["RuleRead".to_string()]);
    }

    #[test]
    fn test_user_accepts_null_names_and_role() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "email": "ada@example.com",
            "givenName": null,
            "familyName": null,
            "status": null,
            "role": null
        }))
        .unwrap();

        assert_eq!(user.attributes.given_name, "");
        assert_eq!(user.attributes.family_name, "");
        assert!(user.role.is_none());
    }
}

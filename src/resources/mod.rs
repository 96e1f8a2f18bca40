//! Request and response types for every Panther resource.
//!
//! Each resource has a full representation (what the API returns), a
//! create input and an update input. The fields callers may set live in a
//! `*ModifiableAttributes` struct that is flattened into the inputs and,
//! where the API returns the same shape, into the full representation as
//! well. Create inputs carry no identifier; update inputs always do.
//!
//! | Resource | Protocol | Key |
//! |---|---|---|
//! | [`S3LogIntegration`] | GraphQL | `integrationId` |
//! | [`HttpSource`] | REST | `IntegrationId` |
//! | [`CloudAccount`] | GraphQL | `id` |
//! | [`Schema`] | GraphQL | `name` |
//! | [`Role`] | GraphQL | `id` |
//! | [`User`] | GraphQL | `id` |
//! | [`Rule`] | REST | `id` |
//! | [`DataModel`] | REST | `id` |
//! | [`Global`] | REST | `id` |

pub mod cloud_account;
pub mod data_model;
pub mod global;
pub mod http_source;
pub mod role;
pub mod rule;
pub mod s3_source;
pub mod schema;
pub mod user;

pub use cloud_account::{
    AwsScanConfig, CloudAccount, CloudAccountModifiableAttributes, CreateCloudAccountInput,
    CreateCloudAccountOutput, DeleteCloudAccountInput, DeleteCloudAccountOutput,
    UpdateCloudAccountInput, UpdateCloudAccountOutput,
};
pub use data_model::{
    CreateDataModelInput, DataModel, DataModelMapping, DataModelModifiableAttributes,
    UpdateDataModelInput,
};
pub use global::{CreateGlobalInput, Global, GlobalModifiableAttributes, UpdateGlobalInput};
pub use http_source::{
    CreateHttpSourceInput, HttpSource, HttpSourceModifiableAttributes, LogStreamTypeOptions,
    UpdateHttpSourceInput,
};
pub use role::{
    CreateRoleInput, CreateRoleOutput, DeleteRoleInput, DeleteRoleOutput, Role,
    RoleModifiableAttributes, UpdateRoleInput, UpdateRoleOutput,
};
pub use rule::{CreateRuleInput, Rule, RuleModifiableAttributes, UpdateRuleInput};
pub use s3_source::{
    CreateS3SourceInput, CreateS3SourceOutput, DeleteSourceInput, DeleteSourceOutput,
    S3LogIntegration, S3PrefixLogTypes, S3SourceModifiableAttributes, UpdateS3SourceInput,
    UpdateS3SourceOutput,
};
pub use schema::{
    CreateSchemaInput, CreateSchemaOutput, DeleteSchemaInput, DeleteSchemaOutput, Schema,
    SchemaModifiableAttributes, UpdateSchemaInput, UpdateSchemaOutput,
};
pub use user::{
    DeleteUserInput, DeleteUserOutput, InviteUserInput, InviteUserOutput, UpdateUserInput,
    UpdateUserOutput, User, UserModifiableAttributes, UserRoleInput, UserRoleInputKind,
};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// The API returns `null` rather than `[]` for unset lists.
/// Reads a JSON `null` as `T::default()`. Used on every field the API may
/// send as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

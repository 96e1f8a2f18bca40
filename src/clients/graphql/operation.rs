//! The fixed catalogue of GraphQL operations.
//!
//! Each operation is a unit type implementing [`GraphqlOperation`]: its
//! operation name, the document sent to the server, the `data` field the
//! result is read from and the type that field decodes into.

use crate::resources::schema::{SchemaConnection, UpdateSchemaStatusOutput};
use crate::resources::{
    CloudAccount, CreateCloudAccountOutput, CreateRoleOutput, CreateS3SourceOutput,
    CreateSchemaOutput, DeleteCloudAccountOutput, DeleteRoleOutput, DeleteSourceOutput,
    DeleteUserOutput, InviteUserOutput, Role, UpdateCloudAccountOutput, UpdateRoleOutput,
    UpdateS3SourceOutput, UpdateSchemaOutput, UpdateUserOutput, User,
};

/// GraphQL operation contract.
pub trait GraphqlOperation {
    /// Operation name, sent as `operationName` and used in errors.
    const NAME: &'static str;
    /// GraphQL query or mutation document.
    const DOCUMENT: &'static str;
    /// Field of `data` holding the result.
    const FIELD: &'static str;
    /// Type the result decodes into.
    type Output;
}

macro_rules! s3_log_integration_fields {
    () => {
        "awsAccountId integrationId integrationLabel integrationType isEditable kmsKey \
         logProcessingRole logStreamType managedBucketNotifications s3Bucket s3Prefix \
         s3PrefixLogTypes { excludedPrefixes logTypes prefix }"
    };
}

macro_rules! cloud_account_fields {
    () => {
        "id awsAccountId label awsStackName awsScanConfig { auditRole } awsRegionIgnoreList \
         resourceRegexIgnoreList resourceTypeIgnoreList isEditable"
    };
}

macro_rules! schema_fields {
    () => {
        "name description spec version revision isArchived isManaged referenceURL \
         isFieldDiscoveryEnabled createdAt updatedAt"
    };
}

macro_rules! role_fields {
    () => {
        "id name permissions"
    };
}

macro_rules! user_fields {
    () => {
        concat!(
            "id email givenName familyName status createdAt role { ",
            role_fields!(),
            " }"
        )
    };
}

macro_rules! operation {
    ($(#[$meta:meta])* $op:ident, $name:literal, $field:literal, $output:ty, $document:expr) => {
        $(#[$meta])*
        pub(crate) struct $op;

        impl GraphqlOperation for $op {
            const NAME: &'static str = $name;
            const DOCUMENT: &'static str = $document;
            const FIELD: &'static str = $field;
            type Output = $output;
        }
    };
}

operation!(
    CreateS3Source,
    "CreateS3Source",
    "createS3Source",
    CreateS3SourceOutput,
    concat!(
        "mutation CreateS3Source($input: CreateS3LogSourceInput!) { createS3Source(input: $input) { logSource { ",
        s3_log_integration_fields!(),
        " } } }"
    )
);

operation!(
    UpdateS3Source,
    "UpdateS3Source",
    "updateS3Source",
    UpdateS3SourceOutput,
    concat!(
        "mutation UpdateS3Source($input: UpdateS3LogSourceInput!) { updateS3Source(input: $input) { logSource { ",
        s3_log_integration_fields!(),
        " } } }"
    )
);

operation!(
    /// `source` returns a union over every source kind; only the S3 arm is selected.
    GetS3Source,
    "Source",
    "source",
    crate::resources::S3LogIntegration,
    concat!(
        "query Source($id: ID!) { source(id: $id) { ... on S3LogIntegration { ",
        s3_log_integration_fields!(),
        " } } }"
    )
);

operation!(
    DeleteSource,
    "DeleteSource",
    "deleteSource",
    DeleteSourceOutput,
    "mutation DeleteSource($input: DeleteSourceInput!) { deleteSource(input: $input) { __typename } }"
);

operation!(
    CreateCloudAccount,
    "CreateCloudAccount",
    "createCloudAccount",
    CreateCloudAccountOutput,
    concat!(
        "mutation CreateCloudAccount($input: CreateCloudAccountInput!) { createCloudAccount(input: $input) { cloudAccount { ",
        cloud_account_fields!(),
        " } } }"
    )
);

operation!(
    UpdateCloudAccount,
    "UpdateCloudAccount",
    "updateCloudAccount",
    UpdateCloudAccountOutput,
    concat!(
        "mutation UpdateCloudAccount($input: UpdateCloudAccountInput!) { updateCloudAccount(input: $input) { cloudAccount { ",
        cloud_account_fields!(),
        " } } }"
    )
);

operation!(
    GetCloudAccount,
    "CloudAccount",
    "cloudAccount",
    CloudAccount,
    concat!(
        "query CloudAccount($id: ID!) { cloudAccount(id: $id) { ",
        cloud_account_fields!(),
        " } }"
    )
);

operation!(
    DeleteCloudAccount,
    "DeleteCloudAccount",
    "deleteCloudAccount",
    DeleteCloudAccountOutput,
    "mutation DeleteCloudAccount($input: DeleteCloudAccountInput!) { deleteCloudAccount(input: $input) { id } }"
);

operation!(
    CreateSchema,
    "CreateOrUpdateSchema",
    "createOrUpdateSchema",
    CreateSchemaOutput,
    concat!(
        "mutation CreateOrUpdateSchema($input: CreateOrUpdateSchemaInput!) { createOrUpdateSchema(input: $input) { schema { ",
        schema_fields!(),
        " } } }"
    )
);

operation!(
    /// Same mutation as [`CreateSchema`]; the input carries a revision.
    UpdateSchema,
    "CreateOrUpdateSchema",
    "createOrUpdateSchema",
    UpdateSchemaOutput,
    <CreateSchema as GraphqlOperation>::DOCUMENT
);

operation!(
    ListSchemas,
    "Schemas",
    "schemas",
    SchemaConnection,
    concat!(
        "query Schemas($input: SchemasInput) { schemas(input: $input) { edges { node { ",
        schema_fields!(),
        " } } pageInfo { hasNextPage endCursor } } }"
    )
);

operation!(
    ArchiveSchema,
    "UpdateSchemaStatus",
    "updateSchemaStatus",
    UpdateSchemaStatusOutput,
    "mutation UpdateSchemaStatus($input: UpdateSchemaStatusInput!) { updateSchemaStatus(input: $input) { schema { name } } }"
);

operation!(
    CreateRole,
    "CreateRole",
    "createRole",
    CreateRoleOutput,
    concat!(
        "mutation CreateRole($input: CreateRoleInput!) { createRole(input: $input) { role { ",
        role_fields!(),
        " } } }"
    )
);

operation!(
    UpdateRole,
    "UpdateRole",
    "updateRole",
    UpdateRoleOutput,
    concat!(
        "mutation UpdateRole($input: UpdateRoleInput!) { updateRole(input: $input) { role { ",
        role_fields!(),
        " } } }"
    )
);

operation!(
    GetRoleById,
    "RoleById",
    "roleById",
    Role,
    concat!(
        "query RoleById($id: ID!) { roleById(id: $id) { ",
        role_fields!(),
        " } }"
    )
);

operation!(
    GetRoleByName,
    "RoleByName",
    "roleByName",
    Role,
    concat!(
        "query RoleByName($name: String!) { roleByName(name: $name) { ",
        role_fields!(),
        " } }"
    )
);

operation!(
    DeleteRole,
    "DeleteRole",
    "deleteRole",
    DeleteRoleOutput,
    "mutation DeleteRole($input: DeleteRoleInput!) { deleteRole(input: $input) { __typename } }"
);

operation!(
    InviteUser,
    "InviteUser",
    "inviteUser",
    InviteUserOutput,
    concat!(
        "mutation InviteUser($input: InviteUserInput!) { inviteUser(input: $input) { user { ",
        user_fields!(),
        " } } }"
    )
);

operation!(
    UpdateUser,
    "UpdateUser",
    "updateUser",
    UpdateUserOutput,
    concat!(
        "mutation UpdateUser($input: UpdateUserInput!) { updateUser(input: $input) { user { ",
        user_fields!(),
        " } } }"
    )
);

operation!(
    GetUserById,
    "UserById",
    "userById",
    User,
    concat!(
        "query UserById($id: ID!) { userById(id: $id) { ",
        user_fields!(),
        " } }"
    )
);

operation!(
    GetUserByEmail,
    "UserByEmail",
    "userByEmail",
    User,
    concat!(
        "query UserByEmail($email: String!) { userByEmail(email: $email) { ",
        user_fields!(),
        " } }"
    )
);

operation!(
    DeleteUser,
    "DeleteUser",
    "deleteUser",
    DeleteUserOutput,
    "mutation DeleteUser($input: DeleteUserInput!) { deleteUser(input: $input) { __typename } }"
);

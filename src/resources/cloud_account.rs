//! AWS cloud accounts scanned by Panther.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// How Panther reaches into the account to scan it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsScanConfig {
    /// IAM role Panther assumes to scan the account.
    #[serde(deserialize_with = "null_as_default")]
    pub audit_role: String,
}

/// Fields of a cloud account that create and update may set.
///
/// The ignore lists are left out of the request when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudAccountModifiableAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub aws_scan_config: AwsScanConfig,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub aws_region_ignore_list: Vec<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub resource_regex_ignore_list: Vec<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub resource_type_ignore_list: Vec<String>,
}

/// A cloud account as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub aws_account_id: String,
    /// CloudFormation stack that provisioned the audit role.
    #[serde(deserialize_with = "null_as_default")]
    pub aws_stack_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_editable: bool,
    #[serde(flatten)]
    pub attributes: CloudAccountModifiableAttributes,
}

/// Input of the `createCloudAccount` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCloudAccountInput {
    pub aws_account_id: String,
    #[serde(flatten)]
    pub attributes: CloudAccountModifiableAttributes,
}

/// Input of the `updateCloudAccount` mutation. The account id cannot change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCloudAccountInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: CloudAccountModifiableAttributes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCloudAccountOutput {
    #[serde(default)]
    pub cloud_account: Option<CloudAccount>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCloudAccountOutput {
    #[serde(default)]
    pub cloud_account: Option<CloudAccount>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteCloudAccountInput {
    pub id: String,
}

/// Result of `deleteCloudAccount`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteCloudAccountOutput {
    /// Id of the deleted account.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

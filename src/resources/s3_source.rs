//! S3 log sources, managed through GraphQL.
//!
//! The input shape and the returned `S3LogIntegration` diverge: inputs use
//! `label` and `id`, the integration reports `integrationLabel` and
//! `integrationId`.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Maps an S3 prefix to the log types stored under it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3PrefixLogTypes {
    /// Prefixes below `prefix` that are not ingested.
    #[serde(deserialize_with = "null_as_default")]
    pub excluded_prefixes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub log_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub prefix: String,
}

/// Fields shared by the create and update inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3SourceModifiableAttributes {
    /// KMS key used to decrypt the bucket's objects, if any.
    pub kms_key: String,
    /// Display name of the source.
    pub label: String,
    /// IAM role Panther assumes to read the bucket.
    pub log_processing_role: String,
    pub log_stream_type: String,
    pub managed_bucket_notifications: bool,
    pub s3_prefix_log_types: Vec<S3PrefixLogTypes>,
}

/// Input of the `createS3Source` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateS3SourceInput {
    pub aws_account_id: String,
    pub s3_bucket: String,
    #[serde(flatten)]
    pub attributes: S3SourceModifiableAttributes,
}

/// Input of the `updateS3Source` mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateS3SourceInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: S3SourceModifiableAttributes,
}

/// An S3 log source as reported by the API.
///
/// Nullable scalars read as their default value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3LogIntegration {
    /// AWS account owning the bucket.
    #[serde(deserialize_with = "null_as_default")]
    pub aws_account_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub integration_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub integration_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub integration_type: String,
    /// `false` for sources managed outside the console.
    #[serde(deserialize_with = "null_as_default")]
    pub is_editable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub kms_key: String,
    pub log_processing_role: Option<String>,
    pub log_stream_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub managed_bucket_notifications: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub s3_bucket: String,
    pub s3_prefix: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub s3_prefix_log_types: Vec<S3PrefixLogTypes>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateS3SourceOutput {
    #[serde(default)]
    pub log_source: Option<S3LogIntegration>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateS3SourceOutput {
    #[serde(default)]
    pub log_source: Option<S3LogIntegration>,
}

/// Input of the `deleteSource` mutation, which removes a log source of
/// any kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSourceInput {
    pub id: String,
}

/// Result of `deleteSource`. The API returns no fields of the deleted source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteSourceOutput;

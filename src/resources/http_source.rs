//! HTTP log sources, managed through `/log-sources/http`.
//!
//! This endpoint predates the camelCase REST API. Its bodies use PascalCase
//! field names and every field is always present.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Options that depend on the log stream type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LogStreamTypeOptions {
    /// Field holding the event array when `LogStreamType` is `JsonArray`.
    #[serde(deserialize_with = "null_as_default")]
    pub json_array_envelope_field: String,
}

/// Fields of an HTTP source that create and update may set.
///
/// Which `auth_*` fields apply depends on `auth_method`: `SharedSecret`
/// uses the header key and secret value, `HMAC` adds the algorithm,
/// `Basic` uses username and password and `Bearer` the bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HttpSourceModifiableAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub integration_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub log_stream_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub log_types: Vec<String>,
    pub log_stream_type_options: Option<LogStreamTypeOptions>,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_hmac_alg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_header_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_password: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_secret_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_bearer_token: String,
}

/// An HTTP source as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HttpSource {
    #[serde(deserialize_with = "null_as_default")]
    pub integration_id: String,
    #[serde(flatten)]
    pub attributes: HttpSourceModifiableAttributes,
}

/// Input for creating an HTTP source. The API assigns the integration id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateHttpSourceInput {
    #[serde(flatten)]
    pub attributes: HttpSourceModifiableAttributes,
}

/// Input for updating an HTTP source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateHttpSourceInput {
    pub integration_id: String,
    #[serde(flatten)]
    pub attributes: HttpSourceModifiableAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_input_uses_pascal_case() {
        let input = UpdateHttpSourceInput {
            integration_id: "src-1".to_string(),
            attributes: HttpSourceModifiableAttributes {
                integration_label: "okta".to_string(),
                log_stream_type: "JsonArray".to_string(),
                log_types: vec!["Okta.SystemLog".to_string()],
                log_stream_type_options: Some(LogStreamTypeOptions {
                    json_array_envelope_field: "records".to_string(),
                }),
                auth_method: "Bearer".to_string(),
                auth_bearer_token: "t0k3n".to_string(),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["IntegrationId"], "src-1");
        assert_eq!(value["IntegrationLabel"], "okta");
        assert_eq!(value["LogTypes"], json!(["Okta.SystemLog"]));
        assert_eq!(
            value["LogStreamTypeOptions"],
            json!({"JsonArrayEnvelopeField": "records"})
        );
        assert_eq!(value["AuthBearerToken"], "t0k3n");
        assert_eq!(value["AuthHmacAlg"], "");
    }

    #[test]
    fn test_source_deserializes_without_options() {
        let source: HttpSource = serde_json::from_value(json!({
            "IntegrationId": "src-1",
            "IntegrationLabel": "okta",
            "LogStreamType": "JSON",
            "LogTypes": null,
            "LogStreamTypeOptions": null,
            "AuthMethod": "None",
            "AuthBearerToken": null
        }))
        .unwrap();

        assert_eq!(source.integration_id, "src-1");
        assert!(source.attributes.log_types.is_empty());
        assert!(source.attributes.log_stream_type_options.is_none());
        assert_eq!(source.attributes.auth_method, "None");
        assert_eq!(source.attributes.auth_bearer_token, "");
    }
}

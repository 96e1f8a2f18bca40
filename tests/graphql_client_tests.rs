//! Integration tests for the GraphQL API client.
//!
//! These tests verify the request envelope, the handling of the `errors`
//! array, missing results, type-marker deletes and schema lookup across
//! pages.

use panther_api::clients::{GraphqlClient, GraphqlError, GraphqlOperations, API_KEY_HEADER};
use panther_api::resources::{
    AwsScanConfig, CloudAccountModifiableAttributes, CreateCloudAccountInput,
    CreateS3SourceInput, CreateSchemaInput, DeleteCloudAccountInput, DeleteRoleInput,
    DeleteSchemaInput, DeleteSourceInput, DeleteUserInput, DeleteUserOutput, InviteUserInput,
    RoleModifiableAttributes, S3PrefixLogTypes, S3SourceModifiableAttributes,
    SchemaModifiableAttributes, UpdateCloudAccountInput, UpdateRoleInput, UpdateS3SourceInput,
    UpdateSchemaInput, UpdateUserInput, UserModifiableAttributes, UserRoleInput,
};
use panther_api::PantherConfig;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-api-token";
const GRAPHQL: &str = "/public/graphql";

fn create_client(server: &MockServer) -> GraphqlClient {
    let config = PantherConfig::new(server.uri(), TOKEN).unwrap();
    GraphqlClient::new(&config).unwrap()
}

fn schema_node(name: &str, revision: i64) -> Value {
    json!({
        "name": name,
        "description": "",
        "spec": "fields: []",
        "version": 1,
        "revision": revision,
        "isArchived": false,
        "isManaged": false,
        "referenceURL": null,
        "isFieldDiscoveryEnabled": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn schemas_page(names: &[&str], end_cursor: Option<&str>) -> Value {
    let edges: Vec<Value> = names
        .iter()
        .map(|name| json!({ "node": schema_node(name, 1) }))
        .collect();
    json!({
        "data": {
            "schemas": {
                "edges": edges,
                "pageInfo": {
                    "hasNextPage": end_cursor.is_some(),
                    "endCursor": end_cursor
                }
            }
        }
    })
}

// ============================================================================
// Request Envelope
// ============================================================================

#[tokio::test]
async fn test_query_posts_document_operation_name_and_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(header(API_KEY_HEADER, TOKEN))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "operationName": "RoleById",
            "variables": {"id": "r-1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "roleById": {"id": "r-1", "name": "Analyst", "permissions": ["RuleRead"]}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let role = client.get_role_by_id("r-1").await.unwrap();

    assert_eq!(role.id, "r-1");
    assert_eq!(role.attributes.name, "Analyst");
    assert_eq!(role.attributes.permissions, vec!["RuleRead".to_string()]);
}

#[tokio::test]
async fn test_mutation_wraps_input() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "UpdateRole",
            "variables": {
                "input": {"id": "r-1", "name": "Analyst", "permissions": ["RuleModify"]}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "updateRole": {
                    "role": {"id": "r-1", "name": "Analyst", "permissions": ["RuleModify"]}
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .update_role(&UpdateRoleInput {
            id: "r-1".to_string(),
            attributes: RoleModifiableAttributes {
                name: "Analyst".to_string(),
                permissions: vec!["RuleModify".to_string()],
            },
        })
        .await
        .unwrap();

    assert_eq!(output.role.unwrap().attributes.permissions, vec!["RuleModify"]);
}

#[tokio::test]
async fn test_invite_user_sends_role_reference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "InviteUser",
            "variables": {
                "input": {
                    "email": "ada@example.com",
                    "role": {"kind": "NAME", "value": "Admin"}
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "inviteUser": {
                    "user": {
                        "id": "u-1",
                        "email": "ada@example.com",
                        "givenName": "Ada",
                        "familyName": "Lovelace",
                        "status": "FORCE_CHANGE_PASSWORD",
                        "createdAt": "2024-01-01T00:00:00Z",
                        "role": {"id": "r-admin", "name": "Admin", "permissions": null}
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .invite_user(&InviteUserInput {
            attributes: UserModifiableAttributes {
                email: "ada@example.com".to_string(),
                given_name: "Ada".to_string(),
                family_name: "Lovelace".to_string(),
            },
            role: UserRoleInput::name("Admin"),
        })
        .await
        .unwrap();

    let user = output.user.unwrap();
    assert_eq!(user.status, "FORCE_CHANGE_PASSWORD");
    let role = user.role.unwrap();
    assert_eq!(role.id, "r-admin");
    assert!(role.attributes.permissions.is_empty());
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_errors_array_fails_even_with_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "roleByName": {"id": "r-1", "name": "Analyst", "permissions": []}
            },
            "errors": [
                {"message": "access denied", "path": ["roleByName"]},
                {"message": "second problem"}
            ]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_role_by_name("Analyst").await.unwrap_err();

    match &error {
        GraphqlError::Graphql {
            operation,
            message,
            errors,
        } => {
            assert_eq!(*operation, "RoleByName");
            assert_eq!(message, "access denied");
            assert_eq!(errors.len(), 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        "RoleByName: GraphQL request failed: access denied"
    );
}

#[tokio::test]
async fn test_null_result_is_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"userById": null}})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_user_by_id("u-404").await.unwrap_err();

    assert!(matches!(
        error,
        GraphqlError::MissingData {
            operation: "UserById"
        }
    ));
}

#[tokio::test]
async fn test_null_data_is_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_cloud_account("123").await.unwrap_err();

    assert_eq!(error.operation(), "CloudAccount");
    assert!(matches!(error, GraphqlError::MissingData { .. }));
}

#[tokio::test]
async fn test_non_2xx_is_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_s3_source("src-1").await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(matches!(error, GraphqlError::Http { operation: "Source", .. }));
    assert!(error.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_unexpected_shape_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"roleById": {"name": 42}}})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_role_by_id("r-1").await.unwrap_err();

    assert!(matches!(
        error,
        GraphqlError::Deserialize {
            operation: "RoleById",
            ..
        }
    ));
}

// ============================================================================
// Type-Marker Deletes
// ============================================================================

#[tokio::test]
async fn test_marker_deletes_return_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"operationName": "DeleteUser"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deleteUser": {"__typename": "DeleteUserOutput"}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"operationName": "DeleteRole"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deleteRole": null}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"operationName": "DeleteSource"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let user = client
        .delete_user(&DeleteUserInput {
            id: "u-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user, DeleteUserOutput);

    client
        .delete_role(&DeleteRoleInput {
            id: "r-1".to_string(),
        })
        .await
        .unwrap();
    client
        .delete_source(&DeleteSourceInput {
            id: "src-1".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_marker_delete_still_fails_on_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "role is assigned to users"}]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .delete_role(&DeleteRoleInput {
            id: "r-1".to_string(),
        })
        .await
        .unwrap_err();

    assert!(error.to_string().contains("role is assigned to users"));
}

// ============================================================================
// Schemas
// ============================================================================

#[tokio::test]
async fn test_get_schema_follows_cursor_to_match() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"variables": {"input": {"cursor": "page-2"}}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(schemas_page(&["Custom.Other", "Custom.MyLogs"], None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"operationName": "Schemas"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(schemas_page(&["AWS.CloudTrail", "Custom.MyLogsV2"], Some("page-2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let schema = client.get_schema("Custom.MyLogs").await.unwrap().unwrap();

    assert_eq!(schema.name, "Custom.MyLogs");
    assert!(schema.attributes.reference_url.is_empty());
}

#[tokio::test]
async fn test_get_schema_absent_from_every_page_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"variables": {"input": {"cursor": "page-2"}}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(schemas_page(&["Custom.B"], None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(schemas_page(&["Custom.A"], Some("page-2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let schema = client.get_schema("Custom.Missing").await.unwrap();

    assert!(schema.is_none());
}

#[tokio::test]
async fn test_get_schema_stops_on_repeated_cursor() {
    let server = MockServer::start().await;

    // A server that keeps handing back the cursor it was given.
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"variables": {"input": {"cursor": "same"}}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(schemas_page(&[], Some("same"))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(schemas_page(&[], Some("same"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert!(client.get_schema("Custom.MyLogs").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_schema_tolerates_null_fields_on_other_schemas() {
    let server = MockServer::start().await;

    let mut managed = schema_node("AWS.CloudTrail", 4);
    managed["description"] = Value::Null;
    managed["spec"] = Value::Null;
    managed["isFieldDiscoveryEnabled"] = Value::Null;
    managed["updatedAt"] = Value::Null;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "schemas": {
                    "edges": [
                        {"node": managed},
                        {"node": schema_node("Custom.MyLogs", 2)}
                    ],
                    "pageInfo": {"hasNextPage": false, "endCursor": null}
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let schema = client.get_schema("Custom.MyLogs").await.unwrap().unwrap();

    assert_eq!(schema.name, "Custom.MyLogs");
    assert_eq!(schema.revision, 2);
}

#[tokio::test]
async fn test_create_and_update_schema_share_one_mutation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "CreateOrUpdateSchema",
            "variables": {"input": {"name": "Custom.MyLogs", "revision": 4}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createOrUpdateSchema": {"schema": schema_node("Custom.MyLogs", 5)}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "CreateOrUpdateSchema",
            "variables": {"input": {"name": "Custom.MyLogs", "spec": "fields: []"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createOrUpdateSchema": {"schema": schema_node("Custom.MyLogs", 1)}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let attributes = SchemaModifiableAttributes {
        spec: "fields: []".to_string(),
        ..Default::default()
    };

    let created = client
        .create_schema(
            "Custom.MyLogs",
            &CreateSchemaInput {
                attributes: attributes.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.schema.unwrap().revision, 1);

    let updated = client
        .update_schema(&UpdateSchemaInput {
            name: "Custom.MyLogs".to_string(),
            revision: 4,
            attributes,
        })
        .await
        .unwrap();
    assert_eq!(updated.schema.unwrap().revision, 5);
}

#[tokio::test]
async fn test_delete_schema_archives_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "UpdateSchemaStatus",
            "variables": {"input": {"name": "Custom.MyLogs", "isArchived": true}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateSchemaStatus": {"schema": {"name": "Custom.MyLogs"}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .delete_schema(&DeleteSchemaInput {
            name: "Custom.MyLogs".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.name, "Custom.MyLogs");
}

// ============================================================================
// S3 Sources
// ============================================================================

fn s3_integration(id: &str, label: &str) -> Value {
    json!({
        "awsAccountId": "123456789012",
        "integrationId": id,
        "integrationLabel": label,
        "integrationType": "aws-s3",
        "isEditable": true,
        "kmsKey": null,
        "logProcessingRole": "arn:aws:iam::123456789012:role/read",
        "logStreamType": "Auto",
        "managedBucketNotifications": false,
        "s3Bucket": "logs",
        "s3Prefix": null,
        "s3PrefixLogTypes": [{"prefix": "AWSLogs/", "logTypes": ["AWS.CloudTrail"], "excludedPrefixes": []}]
    })
}

fn s3_attributes(label: &str) -> S3SourceModifiableAttributes {
    S3SourceModifiableAttributes {
        label: label.to_string(),
        log_processing_role: "arn:aws:iam::123456789012:role/read".to_string(),
        log_stream_type: "Auto".to_string(),
        s3_prefix_log_types: vec![S3PrefixLogTypes {
            prefix: "AWSLogs/".to_string(),
            log_types: vec!["AWS.CloudTrail".to_string()],
            excluded_prefixes: vec![],
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_s3_source_sends_input_and_decodes_log_source() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "CreateS3Source",
            "variables": {
                "input": {
                    "awsAccountId": "123456789012",
                    "s3Bucket": "logs",
                    "label": "cloudtrail",
                    "logStreamType": "Auto",
                    "s3PrefixLogTypes": [{"prefix": "AWSLogs/", "logTypes": ["AWS.CloudTrail"]}]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createS3Source": {"logSource": s3_integration("src-1", "cloudtrail")}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .create_s3_source(&CreateS3SourceInput {
            aws_account_id: "123456789012".to_string(),
            s3_bucket: "logs".to_string(),
            attributes: s3_attributes("cloudtrail"),
        })
        .await
        .unwrap();

    let source = output.log_source.unwrap();
    assert_eq!(source.integration_id, "src-1");
    assert_eq!(source.kms_key, "");
    assert_eq!(source.s3_prefix_log_types[0].log_types, vec!["AWS.CloudTrail"]);
}

#[tokio::test]
async fn test_update_s3_source_sends_id_and_label() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "UpdateS3Source",
            "variables": {"input": {"id": "src-1", "label": "renamed"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateS3Source": {"logSource": s3_integration("src-1", "renamed")}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .update_s3_source(&UpdateS3SourceInput {
            id: "src-1".to_string(),
            attributes: s3_attributes("renamed"),
        })
        .await
        .unwrap();

    assert_eq!(output.log_source.unwrap().integration_label, "renamed");
}

#[tokio::test]
async fn test_get_s3_source_accepts_null_scalars() {
    let server = MockServer::start().await;

    let mut integration = s3_integration("src-1", "cloudtrail");
    integration["kmsKey"] = Value::Null;
    integration["integrationLabel"] = Value::Null;
    integration["s3Bucket"] = Value::Null;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "Source",
            "variables": {"id": "src-1"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"source": integration}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let source = client.get_s3_source("src-1").await.unwrap();

    assert_eq!(source.integration_id, "src-1");
    assert_eq!(source.kms_key, "");
    assert_eq!(source.s3_bucket, "");
}

// ============================================================================
// Cloud Accounts
// ============================================================================

fn cloud_account_json(label: &str) -> Value {
    json!({
        "id": "acct-1",
        "awsAccountId": "123456789012",
        "awsStackName": null,
        "isEditable": true,
        "label": label,
        "awsScanConfig": {"auditRole": "arn:aws:iam::123456789012:role/audit"},
        "awsRegionIgnoreList": null,
        "resourceRegexIgnoreList": [],
        "resourceTypeIgnoreList": null
    })
}

fn cloud_account_attributes(label: &str) -> CloudAccountModifiableAttributes {
    CloudAccountModifiableAttributes {
        label: label.to_string(),
        aws_scan_config: AwsScanConfig {
            audit_role: "arn:aws:iam::123456789012:role/audit".to_string(),
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_cloud_account_omits_empty_ignore_lists() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({"operationName": "CreateCloudAccount"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createCloudAccount": {"cloudAccount": cloud_account_json("prod")}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .create_cloud_account(&CreateCloudAccountInput {
            aws_account_id: "123456789012".to_string(),
            attributes: cloud_account_attributes("prod"),
        })
        .await
        .unwrap();

    let account = output.cloud_account.unwrap();
    assert_eq!(account.id, "acct-1");
    assert_eq!(account.aws_stack_name, "");
    assert!(account.attributes.aws_region_ignore_list.is_empty());

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body["variables"]["input"],
        json!({
            "awsAccountId": "123456789012",
            "label": "prod",
            "awsScanConfig": {"auditRole": "arn:aws:iam::123456789012:role/audit"}
        })
    );
}

#[tokio::test]
async fn test_update_cloud_account_sends_id_and_ignore_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "UpdateCloudAccount",
            "variables": {
                "input": {"id": "acct-1", "label": "staging", "awsRegionIgnoreList": ["ap-east-1"]}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateCloudAccount": {"cloudAccount": cloud_account_json("staging")}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut attributes = cloud_account_attributes("staging");
    attributes.aws_region_ignore_list = vec!["ap-east-1".to_string()];
    let output = client
        .update_cloud_account(&UpdateCloudAccountInput {
            id: "acct-1".to_string(),
            attributes,
        })
        .await
        .unwrap();

    assert_eq!(output.cloud_account.unwrap().attributes.label, "staging");
}

#[tokio::test]
async fn test_delete_cloud_account_returns_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "DeleteCloudAccount",
            "variables": {"input": {"id": "acct-1"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deleteCloudAccount": {"id": "acct-1"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .delete_cloud_account(&DeleteCloudAccountInput {
            id: "acct-1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.id, "acct-1");
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_update_user_sends_id_and_role_reference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "UpdateUser",
            "variables": {
                "input": {
                    "id": "u-1",
                    "givenName": "Ada",
                    "role": {"kind": "NAME", "value": "Analyst"}
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "updateUser": {
                    "user": {
                        "id": "u-1",
                        "email": "ada@example.com",
                        "givenName": "Ada",
                        "familyName": null,
                        "role": {"id": "r-2", "name": "Analyst", "permissions": ["AlertRead"]}
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let output = client
        .update_user(&UpdateUserInput {
            id: "u-1".to_string(),
            attributes: UserModifiableAttributes {
                email: "ada@example.com".to_string(),
                given_name: "Ada".to_string(),
                family_name: String::new(),
            },
            role: UserRoleInput::name("Analyst"),
        })
        .await
        .unwrap();

    let user = output.user.unwrap();
    assert_eq!(user.attributes.family_name, "");
    assert_eq!(user.role.unwrap().attributes.name, "Analyst");
}

#[tokio::test]
async fn test_get_user_by_email_sends_email_variable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(body_partial_json(json!({
            "operationName": "UserByEmail",
            "variables": {"email": "ada@example.com"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "userByEmail": {
                    "id": "u-1",
                    "email": "ada@example.com",
                    "givenName": "Ada",
                    "familyName": "Lovelace",
                    "status": "ACTIVE",
                    "role": null
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let user = client.get_user_by_email("ada@example.com").await.unwrap();

    assert_eq!(user.id, "u-1");
    assert!(user.role.is_none());
}

//! Integration tests for the combined client.
//!
//! These tests verify that one [`ApiClient`] routes GraphQL and REST
//! operations to the endpoints resolved from a single URL.

use panther_api::clients::API_KEY_HEADER;
use panther_api::resources::{CreateGlobalInput, GlobalModifiableAttributes};
use panther_api::{ApiClient, Error, GraphqlOperations, PantherApi, RestOperations};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "facade-token";

async fn mount_role(server: &MockServer, graphql_path: &str) {
    Mock::given(method("POST"))
        .and(path(graphql_path))
        .and(header(API_KEY_HEADER, TOKEN))
        .and(body_partial_json(json!({"operationName": "RoleById"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"roleById": {"id": "r-1", "name": "Admin", "permissions": ["UserModify"]}}
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_global(server: &MockServer, global_path: &str) {
    Mock::given(method("GET"))
        .and(path(global_path))
        .and(header(API_KEY_HEADER, TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "panther_helpers",
            "name": "panther_helpers",
            "body": "def helper(): pass",
            "tags": []
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Any `PantherApi` can serve both protocols through one value.
async fn role_and_global(api: &impl PantherApi) -> (String, String) {
    let role = api.get_role_by_id("r-1").await.unwrap();
    let global = api.get_global("panther_helpers").await.unwrap();
    (role.attributes.name, global.attributes.body)
}

#[tokio::test]
async fn test_bare_host_routes_both_protocols() {
    let server = MockServer::start().await;
    mount_role(&server, "/public/graphql").await;
    mount_global(&server, "/globals/panther_helpers").await;

    let client = ApiClient::connect(server.uri(), TOKEN).unwrap();
    let (role, body) = role_and_global(&client).await;

    assert_eq!(role, "Admin");
    assert_eq!(body, "def helper(): pass");
}

#[tokio::test]
async fn test_gateway_url_with_graphql_suffix_routes_both_protocols() {
    let server = MockServer::start().await;
    mount_role(&server, "/v1/public/graphql").await;
    mount_global(&server, "/v1/globals/panther_helpers").await;

    let url = format!("{}/v1/public/graphql", server.uri());
    let client = ApiClient::connect(url, TOKEN).unwrap();
    let (role, _) = role_and_global(&client).await;

    assert_eq!(role, "Admin");
    assert_eq!(
        client.endpoints().rest_base(),
        format!("{}/v1", server.uri())
    );
}

#[tokio::test]
async fn test_legacy_graphql_suffix_is_stripped_for_rest() {
    let server = MockServer::start().await;
    mount_role(&server, "/public/graphql").await;
    mount_global(&server, "/globals/panther_helpers").await;

    let url = format!("{}/public/graphql", server.uri());
    let client = ApiClient::connect(url, TOKEN).unwrap();
    let (role, body) = role_and_global(&client).await;

    assert_eq!(role, "Admin");
    assert_eq!(body, "def helper(): pass");
}

#[tokio::test]
async fn test_layer_errors_convert_into_crate_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/globals"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "forbidden"})))
        .mount(&server)
        .await;

    let client = ApiClient::connect(server.uri(), TOKEN).unwrap();

    let result: Result<(), Error> = async {
        client
            .create_global(&CreateGlobalInput {
                attributes: GlobalModifiableAttributes {
                    name: "panther_helpers".to_string(),
                    ..Default::default()
                },
            })
            .await?;
        Ok(())
    }
    .await;

    let error = result.unwrap_err();
    assert!(matches!(error, Error::Rest(_)));
    assert!(error.is_auth_error());
    assert_eq!(error.status(), Some(403));
}

#[test]
fn test_facade_works_from_a_blocking_context() {
    tokio_test::block_on(async {
        let server = MockServer::start().await;
        mount_role(&server, "/public/graphql").await;

        let client = ApiClient::connect(server.uri(), TOKEN).unwrap();
        let role = client.get_role_by_id("r-1").await.unwrap();

        assert_eq!(role.attributes.permissions, vec!["UserModify".to_string()]);
    });
}

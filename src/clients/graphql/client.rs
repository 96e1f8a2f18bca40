//! GraphQL client implementation for the Panther API.
//!
//! This module provides the [`GraphqlClient`] type, which serves S3 log
//! sources, cloud accounts, schemas, roles and users from the public
//! GraphQL endpoint.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::graphql::operation::{
    ArchiveSchema, CreateCloudAccount, CreateRole, CreateS3Source, CreateSchema,
    DeleteCloudAccount, DeleteRole, DeleteSource, DeleteUser, GetCloudAccount, GetRoleById,
    GetRoleByName, GetS3Source, GetUserByEmail, GetUserById, GraphqlOperation, InviteUser,
    ListSchemas, UpdateCloudAccount, UpdateRole, UpdateS3Source, UpdateSchema, UpdateUser,
};
use crate::clients::graphql::response::{GraphqlRequest, GraphqlResponse};
use crate::clients::graphql::GraphqlError;
use crate::clients::traits::GraphqlOperations;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{PantherConfig, GRAPHQL_PATH};
use crate::resources::schema::{CreateOrUpdateSchemaInput, SchemasInput, UpdateSchemaStatusInput};
use crate::resources::{
    CloudAccount, CreateCloudAccountInput, CreateCloudAccountOutput, CreateRoleInput,
    CreateRoleOutput, CreateS3SourceInput, CreateS3SourceOutput, CreateSchemaInput,
    CreateSchemaOutput, DeleteCloudAccountInput, DeleteCloudAccountOutput, DeleteRoleInput,
    DeleteRoleOutput, DeleteSchemaInput, DeleteSchemaOutput, DeleteSourceInput,
    DeleteSourceOutput, DeleteUserInput, DeleteUserOutput, InviteUserInput, InviteUserOutput,
    Role, S3LogIntegration, Schema, UpdateCloudAccountInput, UpdateCloudAccountOutput,
    UpdateRoleInput, UpdateRoleOutput, UpdateS3SourceInput, UpdateS3SourceOutput,
    UpdateSchemaInput, UpdateSchemaOutput, UpdateUserInput, UpdateUserOutput, User,
};

/// GraphQL API client for Panther.
///
/// Every operation is a POST of `{query, operationName, variables}` to
/// `{host}/public/graphql`. Any entry in the response's `errors` array
/// fails the operation, even when `data` is also present.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use panther_api::clients::{GraphqlClient, GraphqlOperations};
/// use panther_api::PantherConfig;
///
/// let config = PantherConfig::new("https://api.acme.runpanther.net", "token")?;
/// let client = GraphqlClient::new(&config)?;
///
/// let role = client.get_role_by_name("Analyst").await?;
/// println!("{:?}", role.attributes.permissions);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &PantherConfig) -> Result<Self, HttpError> {
        let host = config.endpoints().host();
        tracing::debug!("Creating GraphQL client for {}{}", host, GRAPHQL_PATH);

        Ok(Self {
            http_client: HttpClient::new(host, config)?,
        })
    }

    /// Returns the URL operations are POSTed to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{GRAPHQL_PATH}", self.http_client.base_url())
    }

    /// Sends an arbitrary document and returns the decoded envelope.
    ///
    /// Unlike the typed operations, the `errors` array is returned to the
    /// caller instead of failing the call.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] on a transport failure or a non-2xx
    /// status, and [`GraphqlError::Deserialize`] if the body is not a
    /// GraphQL response holding `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        document: &str,
        variables: Value,
    ) -> Result<GraphqlResponse<T>, GraphqlError> {
        let request = GraphqlRequest {
            query: document,
            operation_name: operation,
            variables,
        };
        let request = HttpRequest::builder(HttpMethod::Post, GRAPHQL_PATH)
            .operation(operation)
            .json(&request)
            .and_then(|builder| builder.build().map_err(HttpError::from))
            .map_err(|source| GraphqlError::Http { operation, source })?;

        let response = self
            .http_client
            .request(request)
            .await
            .map_err(|source| GraphqlError::Http { operation, source })?;

        response
            .json()
            .map_err(|source| GraphqlError::Deserialize { operation, source })
    }

    /// Runs `O` and returns `data.<O::FIELD>`, or `None` when it is absent
    /// or null.
    async fn send<O: GraphqlOperation>(
        &self,
        variables: Value,
    ) -> Result<Option<Value>, GraphqlError> {
        let response: GraphqlResponse<Map<String, Value>> =
            self.query(O::NAME, O::DOCUMENT, variables).await?;

        if let Some(first) = response.errors.first() {
            tracing::debug!(
                operation = O::NAME,
                count = response.errors.len(),
                "GraphQL response carried errors"
            );
            return Err(GraphqlError::Graphql {
                operation: O::NAME,
                message: first.message.clone(),
                errors: response.errors,
            });
        }

        Ok(response
            .data
            .and_then(|mut data| data.remove(O::FIELD))
            .filter(|field| !field.is_null()))
    }

    /// Runs `O` and decodes its result field.
    async fn execute<O>(&self, variables: Value) -> Result<O::Output, GraphqlError>
    where
        O: GraphqlOperation,
        O::Output: DeserializeOwned,
    {
        let field = self
            .send::<O>(variables)
            .await?
            .ok_or(GraphqlError::MissingData { operation: O::NAME })?;

        serde_json::from_value(field).map_err(|source| GraphqlError::Deserialize {
            operation: O::NAME,
            source,
        })
    }

    /// Runs `O` and ignores whatever payload an error-free reply carries.
    async fn execute_marker<O>(&self, variables: Value) -> Result<O::Output, GraphqlError>
    where
        O: GraphqlOperation,
        O::Output: Default,
    {
        self.send::<O>(variables).await?;
        Ok(O::Output::default())
    }
}

/// Builds the `{ "<name>": value }` variables object.
fn variables<O, T>(name: &str, value: &T) -> Result<Value, GraphqlError>
where
    O: GraphqlOperation,
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value).map_err(|e| GraphqlError::Http {
        operation: O::NAME,
        source: HttpError::Serialize(e),
    })?;
    let mut map = Map::new();
    map.insert(name.to_string(), value);
    Ok(Value::Object(map))
}

fn input_variables<O, T>(value: &T) -> Result<Value, GraphqlError>
where
    O: GraphqlOperation,
    T: Serialize + ?Sized,
{
    variables::<O, T>("input", value)
}

#[async_trait]
impl GraphqlOperations for GraphqlClient {
    async fn create_s3_source(
        &self,
        input: &CreateS3SourceInput,
    ) -> Result<CreateS3SourceOutput, GraphqlError> {
        self.execute::<CreateS3Source>(input_variables::<CreateS3Source, _>(input)?)
            .await
    }

    async fn update_s3_source(
        &self,
        input: &UpdateS3SourceInput,
    ) -> Result<UpdateS3SourceOutput, GraphqlError> {
        self.execute::<UpdateS3Source>(input_variables::<UpdateS3Source, _>(input)?)
            .await
    }

    async fn get_s3_source(&self, id: &str) -> Result<S3LogIntegration, GraphqlError> {
        self.execute::<GetS3Source>(variables::<GetS3Source, _>("id", id)?)
            .await
    }

    async fn delete_source(
        &self,
        input: &DeleteSourceInput,
    ) -> Result<DeleteSourceOutput, GraphqlError> {
        self.execute_marker::<DeleteSource>(input_variables::<DeleteSource, _>(input)?)
            .await
    }

    async fn create_cloud_account(
        &self,
        input: &CreateCloudAccountInput,
    ) -> Result<CreateCloudAccountOutput, GraphqlError> {
        self.execute::<CreateCloudAccount>(input_variables::<CreateCloudAccount, _>(input)?)
            .await
    }

    async fn update_cloud_account(
        &self,
        input: &UpdateCloudAccountInput,
    ) -> Result<UpdateCloudAccountOutput, GraphqlError> {
        self.execute::<UpdateCloudAccount>(input_variables::<UpdateCloudAccount, _>(input)?)
            .await
    }

    async fn get_cloud_account(&self, id: &str) -> Result<CloudAccount, GraphqlError> {
        self.execute::<GetCloudAccount>(variables::<GetCloudAccount, _>("id", id)?)
            .await
    }

    async fn delete_cloud_account(
        &self,
        input: &DeleteCloudAccountInput,
    ) -> Result<DeleteCloudAccountOutput, GraphqlError> {
        self.execute::<DeleteCloudAccount>(input_variables::<DeleteCloudAccount, _>(input)?)
            .await
    }

    async fn create_schema(
        &self,
        name: &str,
        input: &CreateSchemaInput,
    ) -> Result<CreateSchemaOutput, GraphqlError> {
        let body = CreateOrUpdateSchemaInput {
            name,
            revision: None,
            attributes: &input.attributes,
        };
        self.execute::<CreateSchema>(input_variables::<CreateSchema, _>(&body)?)
            .await
    }

    async fn update_schema(
        &self,
        input: &UpdateSchemaInput,
    ) -> Result<UpdateSchemaOutput, GraphqlError> {
        let body = CreateOrUpdateSchemaInput {
            name: &input.name,
            revision: Some(input.revision),
            attributes: &input.attributes,
        };
        self.execute::<UpdateSchema>(input_variables::<UpdateSchema, _>(&body)?)
            .await
    }

    async fn get_schema(&self, name: &str) -> Result<Option<Schema>, GraphqlError> {
        let mut cursor: Option<String> = None;
        let mut pages = 0_usize;

        loop {
            let page = self
                .execute::<ListSchemas>(input_variables::<ListSchemas, _>(&SchemasInput {
                    cursor: cursor.clone(),
                })?)
                .await?;
            pages += 1;

            if let Some(edge) = page.edges.into_iter().find(|edge| edge.node.name == name) {
                tracing::debug!(name, pages, "Found schema");
                return Ok(Some(edge.node));
            }

            let next = match page.page_info.end_cursor {
                Some(next) if page.page_info.has_next_page && cursor.as_ref() != Some(&next) => {
                    next
                }
                _ => break,
            };
            cursor = Some(next);
        }

        tracing::debug!(name, pages, "No schema with that name");
        Ok(None)
    }

    async fn delete_schema(
        &self,
        input: &DeleteSchemaInput,
    ) -> Result<DeleteSchemaOutput, GraphqlError> {
        let body = UpdateSchemaStatusInput {
            name: &input.name,
            is_archived: true,
        };
        let output = self
            .execute::<ArchiveSchema>(input_variables::<ArchiveSchema, _>(&body)?)
            .await?;

        output
            .schema
            .map(|schema| DeleteSchemaOutput { name: schema.name })
            .ok_or(GraphqlError::MissingData {
                operation: ArchiveSchema::NAME,
            })
    }

    async fn create_role(&self, input: &CreateRoleInput) -> Result<CreateRoleOutput, GraphqlError> {
        self.execute::<CreateRole>(input_variables::<CreateRole, _>(input)?)
            .await
    }

    async fn update_role(&self, input: &UpdateRoleInput) -> Result<UpdateRoleOutput, GraphqlError> {
        self.execute::<UpdateRole>(input_variables::<UpdateRole, _>(input)?)
            .await
    }

    async fn get_role_by_id(&self, id: &str) -> Result<Role, GraphqlError> {
        self.execute::<GetRoleById>(variables::<GetRoleById, _>("id", id)?)
            .await
    }

    async fn get_role_by_name(&self, name: &str) -> Result<Role, GraphqlError> {
        self.execute::<GetRoleByName>(variables::<GetRoleByName, _>("name", name)?)
            .await
    }

    async fn delete_role(&self, input: &DeleteRoleInput) -> Result<DeleteRoleOutput, GraphqlError> {
        self.execute_marker::<DeleteRole>(input_variables::<DeleteRole, _>(input)?)
            .await
    }

    async fn invite_user(&self, input: &InviteUserInput) -> Result<InviteUserOutput, GraphqlError> {
        self.execute::<InviteUser>(input_variables::<InviteUser, _>(input)?)
            .await
    }

    async fn update_user(&self, input: &UpdateUserInput) -> Result<UpdateUserOutput, GraphqlError> {
        self.execute::<UpdateUser>(input_variables::<UpdateUser, _>(input)?)
            .await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<User, GraphqlError> {
        self.execute::<GetUserById>(variables::<GetUserById, _>("id", id)?)
            .await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, GraphqlError> {
        self.execute::<GetUserByEmail>(variables::<GetUserByEmail, _>("email", email)?)
            .await
    }

    async fn delete_user(&self, input: &DeleteUserInput) -> Result<DeleteUserOutput, GraphqlError> {
        self.execute_marker::<DeleteUser>(input_variables::<DeleteUser, _>(input)?)
            .await
    }
}

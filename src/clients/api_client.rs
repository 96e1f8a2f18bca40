//! The combined Panther API client.

use async_trait::async_trait;

use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::clients::rest::{RestClient, RestError};
use crate::clients::traits::{GraphqlOperations, RestOperations};
use crate::config::{Endpoints, PantherConfig};
use crate::error::Error;
use crate::resources::{
    CloudAccount, CreateCloudAccountInput, CreateCloudAccountOutput, CreateDataModelInput,
    CreateGlobalInput, CreateHttpSourceInput, CreateRoleInput, CreateRoleOutput, CreateRuleInput,
    CreateS3SourceInput, CreateS3SourceOutput, CreateSchemaInput, CreateSchemaOutput, DataModel,
    DeleteCloudAccountInput, DeleteCloudAccountOutput, DeleteRoleInput, DeleteRoleOutput,
    DeleteSchemaInput, DeleteSchemaOutput, DeleteSourceInput, DeleteSourceOutput, DeleteUserInput,
    DeleteUserOutput, Global, HttpSource, InviteUserInput, InviteUserOutput, Role, Rule,
    S3LogIntegration, Schema, UpdateCloudAccountInput, UpdateCloudAccountOutput,
    UpdateDataModelInput, UpdateGlobalInput, UpdateHttpSourceInput, UpdateRoleInput,
    UpdateRoleOutput, UpdateRuleInput, UpdateS3SourceInput, UpdateS3SourceOutput,
    UpdateSchemaInput, UpdateSchemaOutput, UpdateUserInput, UpdateUserOutput, User,
};

/// Client for every Panther operation.
///
/// Holds one [`GraphqlClient`] and one [`RestClient`], both built from the
/// same [`PantherConfig`], and implements [`GraphqlOperations`] and
/// [`RestOperations`] by forwarding each method to the sub-client that
/// serves it.
///
/// # Example
///
/// ```rust,ignore
/// use panther_api::{ApiClient, GraphqlOperations, RestOperations};
///
/// let client = ApiClient::connect("https://api.acme.runpanther.net", "token")?;
///
/// let rule = client.get_rule("AWS.Root.Login").await?;
/// let role = client.get_role_by_name("Analyst").await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    endpoints: Endpoints,
    graphql: GraphqlClient,
    rest: RestClient,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates both sub-clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if an HTTP client cannot be created.
    pub fn new(config: &PantherConfig) -> Result<Self, Error> {
        let endpoints = config.endpoints().clone();
        tracing::debug!(
            graphql = %endpoints.graphql_endpoint(),
            rest = endpoints.rest_base(),
            "Creating Panther API client"
        );

        Ok(Self {
            graphql: GraphqlClient::new(config)?,
            rest: RestClient::new(config)?,
            endpoints,
        })
    }

    /// Validates `api_url` and `api_token` and creates the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either value is invalid, or
    /// [`Error::Http`] if an HTTP client cannot be created.
    pub fn connect(
        api_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, Error> {
        let config = PantherConfig::new(api_url, api_token)?;
        Self::new(&config)
    }

    /// Combines separately built sub-clients.
    ///
    /// `endpoints` is reported by [`ApiClient::endpoints`] only; each
    /// sub-client keeps the URL it was built with.
    #[must_use]
    pub const fn from_parts(
        endpoints: Endpoints,
        graphql: GraphqlClient,
        rest: RestClient,
    ) -> Self {
        Self {
            endpoints,
            graphql,
            rest,
        }
    }

    /// The endpoints resolved from the configured URL.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The GraphQL sub-client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// The REST sub-client.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }
}

#[async_trait]
impl GraphqlOperations for ApiClient {
    async fn create_s3_source(
        &self,
        input: &CreateS3SourceInput,
    ) -> Result<CreateS3SourceOutput, GraphqlError> {
        self.graphql.create_s3_source(input).await
    }

    async fn update_s3_source(
        &self,
        input: &UpdateS3SourceInput,
    ) -> Result<UpdateS3SourceOutput, GraphqlError> {
        self.graphql.update_s3_source(input).await
    }

    async fn get_s3_source(&self, id: &str) -> Result<S3LogIntegration, GraphqlError> {
        self.graphql.get_s3_source(id).await
    }

    async fn delete_source(
        &self,
        input: &DeleteSourceInput,
    ) -> Result<DeleteSourceOutput, GraphqlError> {
        self.graphql.delete_source(input).await
    }

    async fn create_cloud_account(
        &self,
        input: &CreateCloudAccountInput,
    ) -> Result<CreateCloudAccountOutput, GraphqlError> {
        self.graphql.create_cloud_account(input).await
    }

    async fn update_cloud_account(
        &self,
        input: &UpdateCloudAccountInput,
    ) -> Result<UpdateCloudAccountOutput, GraphqlError> {
        self.graphql.update_cloud_account(input).await
    }

    async fn get_cloud_account(&self, id: &str) -> Result<CloudAccount, GraphqlError> {
        self.graphql.get_cloud_account(id).await
    }

    async fn delete_cloud_account(
        &self,
        input: &DeleteCloudAccountInput,
    ) -> Result<DeleteCloudAccountOutput, GraphqlError> {
        self.graphql.delete_cloud_account(input).await
    }

    async fn create_schema(
        &self,
        name: &str,
        input: &CreateSchemaInput,
    ) -> Result<CreateSchemaOutput, GraphqlError> {
        self.graphql.create_schema(name, input).await
    }

    async fn update_schema(
        &self,
        input: &UpdateSchemaInput,
    ) -> Result<UpdateSchemaOutput, GraphqlError> {
        self.graphql.update_schema(input).await
    }

    async fn get_schema(&self, name: &str) -> Result<Option<Schema>, GraphqlError> {
        self.graphql.get_schema(name).await
    }

    async fn delete_schema(
        &self,
        input: &DeleteSchemaInput,
    ) -> Result<DeleteSchemaOutput, GraphqlError> {
        self.graphql.delete_schema(input).await
    }

    async fn create_role(&self, input: &CreateRoleInput) -> Result<CreateRoleOutput, GraphqlError> {
        self.graphql.create_role(input).await
    }

    async fn update_role(&self, input: &UpdateRoleInput) -> Result<UpdateRoleOutput, GraphqlError> {
        self.graphql.update_role(input).await
    }

    async fn get_role_by_id(&self, id: &str) -> Result<Role, GraphqlError> {
        self.graphql.get_role_by_id(id).await
    }

    async fn get_role_by_name(&self, name: &str) -> Result<Role, GraphqlError> {
        self.graphql.get_role_by_name(name).await
    }

    async fn delete_role(&self, input: &DeleteRoleInput) -> Result<DeleteRoleOutput, GraphqlError> {
        self.graphql.delete_role(input).await
    }

    async fn invite_user(&self, input: &InviteUserInput) -> Result<InviteUserOutput, GraphqlError> {
        self.graphql.invite_user(input).await
    }

    async fn update_user(&self, input: &UpdateUserInput) -> Result<UpdateUserOutput, GraphqlError> {
        self.graphql.update_user(input).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<User, GraphqlError> {
        self.graphql.get_user_by_id(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, GraphqlError> {
        self.graphql.get_user_by_email(email).await
    }

    async fn delete_user(&self, input: &DeleteUserInput) -> Result<DeleteUserOutput, GraphqlError> {
        self.graphql.delete_user(input).await
    }
}

#[async_trait]
impl RestOperations for ApiClient {
    async fn create_http_source(
        &self,
        input: &CreateHttpSourceInput,
    ) -> Result<HttpSource, RestError> {
        self.rest.create_http_source(input).await
    }

    async fn update_http_source(
        &self,
        input: &UpdateHttpSourceInput,
    ) -> Result<HttpSource, RestError> {
        self.rest.update_http_source(input).await
    }

    async fn get_http_source(&self, id: &str) -> Result<HttpSource, RestError> {
        self.rest.get_http_source(id).await
    }

    async fn delete_http_source(&self, id: &str) -> Result<(), RestError> {
        self.rest.delete_http_source(id).await
    }

    async fn create_rule(&self, id: &str, input: &CreateRuleInput) -> Result<Rule, RestError> {
        self.rest.create_rule(id, input).await
    }

    async fn update_rule(&self, input: &UpdateRuleInput) -> Result<Rule, RestError> {
        self.rest.update_rule(input).await
    }

    async fn get_rule(&self, id: &str) -> Result<Rule, RestError> {
        self.rest.get_rule(id).await
    }

    async fn delete_rule(&self, id: &str) -> Result<(), RestError> {
        self.rest.delete_rule(id).await
    }

    async fn create_data_model(
        &self,
        input: &CreateDataModelInput,
    ) -> Result<DataModel, RestError> {
        self.rest.create_data_model(input).await
    }

    async fn update_data_model(
        &self,
        input: &UpdateDataModelInput,
    ) -> Result<DataModel, RestError> {
        self.rest.update_data_model(input).await
    }

    async fn get_data_model(&self, id: &str) -> Result<DataModel, RestError> {
        self.rest.get_data_model(id).await
    }

    async fn delete_data_model(&self, id: &str) -> Result<(), RestError> {
        self.rest.delete_data_model(id).await
    }

    async fn create_global(&self, input: &CreateGlobalInput) -> Result<Global, RestError> {
        self.rest.create_global(input).await
    }

    async fn update_global(&self, input: &UpdateGlobalInput) -> Result<Global, RestError> {
        self.rest.update_global(input).await
    }

    async fn get_global(&self, id: &str) -> Result<Global, RestError> {
        self.rest.get_global(id).await
    }

    async fn delete_global(&self, id: &str) -> Result<(), RestError> {
        self.rest.delete_global(id).await
    }
}

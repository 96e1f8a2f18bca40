//! Capability traits implemented by the sub-clients and the facade.
//!
//! [`GraphqlOperations`] and [`RestOperations`] have disjoint method sets.
//! [`GraphqlClient`](crate::clients::GraphqlClient) and
//! [`RestClient`](crate::clients::RestClient) each implement one of them,
//! and [`ApiClient`](crate::ApiClient) implements both by delegation.
//! Code that works with any client should take `impl PantherApi`, or the
//! narrower trait it needs, so it can be tested against a fake.

use async_trait::async_trait;

use crate::clients::graphql::GraphqlError;
use crate::clients::rest::RestError;
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

/// Operations served by the GraphQL endpoint.
#[async_trait]
pub trait GraphqlOperations: Send + Sync {
    async fn create_s3_source(
        &self,
        input: &CreateS3SourceInput,
    ) -> Result<CreateS3SourceOutput, GraphqlError>;
    async fn update_s3_source(
        &self,
        input: &UpdateS3SourceInput,
    ) -> Result<UpdateS3SourceOutput, GraphqlError>;
    async fn get_s3_source(&self, id: &str) -> Result<S3LogIntegration, GraphqlError>;
    /// Deletes a log source of any kind.
    async fn delete_source(
        &self,
        input: &DeleteSourceInput,
    ) -> Result<DeleteSourceOutput, GraphqlError>;

    async fn create_cloud_account(
        &self,
        input: &CreateCloudAccountInput,
    ) -> Result<CreateCloudAccountOutput, GraphqlError>;
    async fn update_cloud_account(
        &self,
        input: &UpdateCloudAccountInput,
    ) -> Result<UpdateCloudAccountOutput, GraphqlError>;
    async fn get_cloud_account(&self, id: &str) -> Result<CloudAccount, GraphqlError>;
    async fn delete_cloud_account(
        &self,
        input: &DeleteCloudAccountInput,
    ) -> Result<DeleteCloudAccountOutput, GraphqlError>;

    async fn create_schema(
        &self,
        name: &str,
        input: &CreateSchemaInput,
    ) -> Result<CreateSchemaOutput, GraphqlError>;
    async fn update_schema(
        &self,
        input: &UpdateSchemaInput,
    ) -> Result<UpdateSchemaOutput, GraphqlError>;
    /// Looks a schema up by name. `Ok(None)` means no schema has that name.
    async fn get_schema(&self, name: &str) -> Result<Option<Schema>, GraphqlError>;
    /// Archives a schema. The API cannot hard-delete schemas.
    async fn delete_schema(
        &self,
        input: &DeleteSchemaInput,
    ) -> Result<DeleteSchemaOutput, GraphqlError>;

    async fn create_role(&self, input: &CreateRoleInput) -> Result<CreateRoleOutput, GraphqlError>;
    async fn update_role(&self, input: &UpdateRoleInput) -> Result<UpdateRoleOutput, GraphqlError>;
    async fn get_role_by_id(&self, id: &str) -> Result<Role, GraphqlError>;
    async fn get_role_by_name(&self, name: &str) -> Result<Role, GraphqlError>;
    async fn delete_role(&self, input: &DeleteRoleInput) -> Result<DeleteRoleOutput, GraphqlError>;

    async fn invite_user(&self, input: &InviteUserInput) -> Result<InviteUserOutput, GraphqlError>;
    async fn update_user(&self, input: &UpdateUserInput) -> Result<UpdateUserOutput, GraphqlError>;
    async fn get_user_by_id(&self, id: &str) -> Result<User, GraphqlError>;
    async fn get_user_by_email(&self, email: &str) -> Result<User, GraphqlError>;
    async fn delete_user(&self, input: &DeleteUserInput) -> Result<DeleteUserOutput, GraphqlError>;
}

/// Operations served by the REST API.
#[async_trait]
pub trait RestOperations: Send + Sync {
    async fn create_http_source(&self, input: &CreateHttpSourceInput)
        -> Result<HttpSource, RestError>;
    async fn update_http_source(&self, input: &UpdateHttpSourceInput)
        -> Result<HttpSource, RestError>;
    async fn get_http_source(&self, id: &str) -> Result<HttpSource, RestError>;
    async fn delete_http_source(&self, id: &str) -> Result<(), RestError>;

    /// Creates the rule `id`.
    async fn create_rule(&self, id: &str, input: &CreateRuleInput) -> Result<Rule, RestError>;
    async fn update_rule(&self, input: &UpdateRuleInput) -> Result<Rule, RestError>;
    async fn get_rule(&self, id: &str) -> Result<Rule, RestError>;
    async fn delete_rule(&self, id: &str) -> Result<(), RestError>;

    async fn create_data_model(&self, input: &CreateDataModelInput)
        -> Result<DataModel, RestError>;
    async fn update_data_model(&self, input: &UpdateDataModelInput)
        -> Result<DataModel, RestError>;
    async fn get_data_model(&self, id: &str) -> Result<DataModel, RestError>;
    async fn delete_data_model(&self, id: &str) -> Result<(), RestError>;

    async fn create_global(&self, input: &CreateGlobalInput) -> Result<Global, RestError>;
    async fn update_global(&self, input: &UpdateGlobalInput) -> Result<Global, RestError>;
    async fn get_global(&self, id: &str) -> Result<Global, RestError>;
    async fn delete_global(&self, id: &str) -> Result<(), RestError>;
}

/// Every Panther operation, over both protocols.
pub trait PantherApi: GraphqlOperations + RestOperations {}

impl<T: GraphqlOperations + RestOperations> PantherApi for T {}

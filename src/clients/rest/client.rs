//! REST client implementation for the Panther API.
//!
//! This module provides the [`RestClient`] type, which serves HTTP log
//! sources, rules, data models and globals from the resolved REST base.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::RestError;
use crate::clients::traits::RestOperations;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{PantherConfig, HTTP_SOURCE_PATH};
use crate::resources::{
    CreateDataModelInput, CreateGlobalInput, CreateHttpSourceInput, CreateRuleInput, DataModel,
    Global, HttpSource, Rule, UpdateDataModelInput, UpdateGlobalInput, UpdateHttpSourceInput,
    UpdateRuleInput,
};

const RULES_PATH: &str = "/rules";
const DATA_MODELS_PATH: &str = "/data-models";
const GLOBALS_PATH: &str = "/globals";

/// REST API client for Panther.
///
/// All paths are relative to the REST base resolved from the configured
/// URL (see [`Endpoints`](crate::config::Endpoints)). Each operation
/// requires one exact status code:
///
/// | Resource | create | update | get | delete |
/// |---|---|---|---|---|
/// | rule | 200 | 200 | 200 | 204 |
/// | data model | 201 | 200 | 200 | 204 |
/// | global | 201 | 200 | 200 | 204 |
/// | HTTP source | 201 | 200 | 200 | 204 |
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use panther_api::clients::{RestClient, RestOperations};
/// use panther_api::PantherConfig;
///
/// let config = PantherConfig::new("https://api.acme.runpanther.net", "token")?;
/// let client = RestClient::new(&config)?;
///
/// let global = client.get_global("panther_helpers").await?;
/// println!("{}", global.attributes.body);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

/// Body of `POST /rules`: the caller chosen id next to the rule fields.
#[derive(Serialize)]
struct CreateRuleBody<'a> {
    id: &'a str,
    #[serde(flatten)]
    input: &'a CreateRuleInput,
}

impl RestClient {
    /// Creates a new REST client rooted at the configured REST base.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &PantherConfig) -> Result<Self, HttpError> {
        let rest_base = config.endpoints().rest_base();
        tracing::debug!("Creating REST client for {}", rest_base);

        Ok(Self {
            http_client: HttpClient::new(rest_base, config)?,
        })
    }

    /// Returns the REST base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Sends one request and returns the raw response body.
    ///
    /// The body, when present, is sent as JSON. Any status other than
    /// `expected_status` is an error carrying both codes and the `message`
    /// of the error body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request cannot be sent, or the
    /// server answers with a status other than `expected_status`.
    pub async fn do_request(
        &self,
        operation: &'static str,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        expected_status: u16,
    ) -> Result<String, RestError> {
        let mut builder = HttpRequest::builder(method, path)
            .expected_status(expected_status)
            .operation(operation);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder
            .build()
            .map_err(|e| RestError::http(operation, e.into()))?;

        let response = self
            .http_client
            .request(request)
            .await
            .map_err(|e| RestError::http(operation, e))?;

        Ok(response.body)
    }

    /// Sends `input` as the body and decodes the response.
    async fn send_json<B, T>(
        &self,
        operation: &'static str,
        method: HttpMethod,
        path: &str,
        input: &B,
        expected_status: u16,
    ) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(input)
            .map_err(|e| RestError::http(operation, HttpError::Serialize(e)))?;
        let text = self
            .do_request(operation, method, path, Some(body), expected_status)
            .await?;
        decode(operation, &text)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, RestError> {
        let text = self
            .do_request(operation, HttpMethod::Get, path, None, 200)
            .await?;
        decode(operation, &text)
    }

    async fn remove(&self, operation: &'static str, path: &str) -> Result<(), RestError> {
        self.do_request(operation, HttpMethod::Delete, path, None, 204)
            .await
            .map(drop)
    }
}

fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T, RestError> {
    serde_json::from_str(body).map_err(|source| RestError::Deserialize { operation, source })
}

/// Joins a collection path and an item id.
fn item_path(collection: &str, id: &str) -> Result<String, RestError> {
    let path = format!("{collection}/{id}");
    if id.is_empty() || id.contains('/') {
        return Err(RestError::InvalidPath { path });
    }
    Ok(path)
}

/// Path of the HTTP source collection, or of one source, below the REST base.
///
/// The same path is used whichever URL convention the REST base was
/// resolved from.
///
/// # Errors
///
/// Returns [`RestError::InvalidPath`] if `id` is empty or contains a `/`.
pub fn http_source_path(id: Option<&str>) -> Result<String, RestError> {
    id.map_or_else(
        || Ok(HTTP_SOURCE_PATH.to_string()),
        |id| item_path(HTTP_SOURCE_PATH, id),
    )
}

#[async_trait]
impl RestOperations for RestClient {
    async fn create_http_source(
        &self,
        input: &CreateHttpSourceInput,
    ) -> Result<HttpSource, RestError> {
        let path = http_source_path(None)?;
        self.send_json("CreateHttpSource", HttpMethod::Post, &path, input, 201)
            .await
    }

    async fn update_http_source(
        &self,
        input: &UpdateHttpSourceInput,
    ) -> Result<HttpSource, RestError> {
        let path = http_source_path(Some(&input.integration_id))?;
        self.send_json("UpdateHttpSource", HttpMethod::Put, &path, input, 200)
            .await
    }

    async fn get_http_source(&self, id: &str) -> Result<HttpSource, RestError> {
        let path = http_source_path(Some(id))?;
        self.fetch("GetHttpSource", &path).await
    }

    async fn delete_http_source(&self, id: &str) -> Result<(), RestError> {
        let path = http_source_path(Some(id))?;
        self.remove("DeleteHttpSource", &path).await
    }

    async fn create_rule(&self, id: &str, input: &CreateRuleInput) -> Result<Rule, RestError> {
        let body = CreateRuleBody { id, input };
        self.send_json("CreateRule", HttpMethod::Post, RULES_PATH, &body, 200)
            .await
    }

    async fn update_rule(&self, input: &UpdateRuleInput) -> Result<Rule, RestError> {
        let path = item_path(RULES_PATH, &input.id)?;
        self.send_json("UpdateRule", HttpMethod::Put, &path, input, 200)
            .await
    }

    async fn get_rule(&self, id: &str) -> Result<Rule, RestError> {
        let path = item_path(RULES_PATH, id)?;
        self.fetch("GetRule", &path).await
    }

    async fn delete_rule(&self, id: &str) -> Result<(), RestError> {
        let path = item_path(RULES_PATH, id)?;
        self.remove("DeleteRule", &path).await
    }

    async fn create_data_model(
        &self,
        input: &CreateDataModelInput,
    ) -> Result<DataModel, RestError> {
        self.send_json(
            "CreateDataModel",
            HttpMethod::Post,
            DATA_MODELS_PATH,
            input,
            201,
        )
        .await
    }

    async fn update_data_model(
        &self,
        input: &UpdateDataModelInput,
    ) -> Result<DataModel, RestError> {
        let path = item_path(DATA_MODELS_PATH, &input.id)?;
        self.send_json("UpdateDataModel", HttpMethod::Put, &path, input, 200)
            .await
    }

    async fn get_data_model(&self, id: &str) -> Result<DataModel, RestError> {
        let path = item_path(DATA_MODELS_PATH, id)?;
        self.fetch("GetDataModel", &path).await
    }

    async fn delete_data_model(&self, id: &str) -> Result<(), RestError> {
        let path = item_path(DATA_MODELS_PATH, id)?;
        self.remove("DeleteDataModel", &path).await
    }

    async fn create_global(&self, input: &CreateGlobalInput) -> Result<Global, RestError> {
        self.send_json("CreateGlobal", HttpMethod::Post, GLOBALS_PATH, input, 201)
            .await
    }

    async fn update_global(&self, input: &UpdateGlobalInput) -> Result<Global, RestError> {
        let path = item_path(GLOBALS_PATH, &input.id)?;
        self.send_json("UpdateGlobal", HttpMethod::Put, &path, input, 200)
            .await
    }

    async fn get_global(&self, id: &str) -> Result<Global, RestError> {
        let path = item_path(GLOBALS_PATH, id)?;
        self.fetch("GetGlobal", &path).await
    }

    async fn delete_global(&self, id: &str) -> Result<(), RestError> {
        let path = item_path(GLOBALS_PATH, id)?;
        self.remove("DeleteGlobal", &path).await
    }
}

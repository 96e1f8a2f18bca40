//! HTTP client types for Panther API communication.
//!
//! This module provides the transport layer shared by both protocols and
//! the clients built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client carrying the `X-API-Key` credential
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response received from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`graphql::GraphqlClient`]: S3 sources, cloud accounts, schemas, roles and users
//! - [`rest::RestClient`]: HTTP sources, rules, data models and globals
//! - [`ApiClient`]: Both of the above behind one value
//!
//! The operations themselves are declared by the [`GraphqlOperations`] and
//! [`RestOperations`] traits. [`PantherApi`] is their union.
//!
//! # Example
//!
//! ```rust,ignore
//! use panther_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use panther_api::PantherConfig;
//!
//! let config = PantherConfig::new("https://api.acme.runpanther.net", "token")?;
//! let client = HttpClient::new(config.endpoints().rest_base(), &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/rules/AWS.Root.Login")
//!     .expected_status(200)
//!     .build()?;
//! let response = client.request(request).await?;
//! ```

mod api_client;
mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod traits;

pub use api_client::ApiClient;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use traits::{GraphqlOperations, PantherApi, RestOperations};

pub use rest::{http_source_path, RestClient, RestError};

pub use graphql::{GraphqlClient, GraphqlError};

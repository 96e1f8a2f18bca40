//! GraphQL API client for the Panther public API.
//!
//! This module provides the [`GraphqlClient`], which serves S3 log sources,
//! cloud accounts, schemas, roles and users, built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: Implements
//!   [`GraphqlOperations`](crate::clients::GraphqlOperations) with one fixed
//!   document per method
//! - [`GraphqlOperation`]: The name, document, result field and output type
//!   of one operation
//! - [`GraphqlResponse`]: The `{data, errors}` envelope
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Errors in the Response Body
//!
//! Panther reports GraphQL failures with HTTP 200 and an `errors` array.
//! The typed operations fail on any entry, keeping the first message, even
//! when `data` is present. [`GraphqlClient::query`] hands the envelope back
//! unchanged for callers that want to inspect it.
//!
//! # Example
//!
//! ```rust,ignore
//! use panther_api::clients::{GraphqlClient, GraphqlOperations};
//! use panther_api::resources::DeleteRoleInput;
//! use panther_api::PantherConfig;
//!
//! let config = PantherConfig::new("https://api.acme.runpanther.net", "token")?;
//! let client = GraphqlClient::new(&config)?;
//!
//! match client.get_schema("Custom.MyLogs").await? {
//!     Some(schema) => println!("revision {}", schema.revision),
//!     None => println!("no such schema"),
//! }
//!
//! client.delete_role(&DeleteRoleInput { id: "r-1".into() }).await?;
//! ```

mod client;
mod errors;
mod operation;
mod response;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use operation::GraphqlOperation;
pub use response::{GraphqlErrorEntry, GraphqlLocation, GraphqlResponse};

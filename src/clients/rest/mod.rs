//! REST API client for Panther.
//!
//! This module provides a REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that serves the resources
//! Panther exposes over REST: HTTP log sources, rules, data models and
//! globals.
//!
//! # Overview
//!
//! - [`RestClient`]: Implements [`RestOperations`](crate::clients::RestOperations)
//! - [`RestError`]: Error type for REST API operations
//! - [`http_source_path`]: Path composition for HTTP log sources
//!
//! # Paths
//!
//! Collections live directly below the REST base: `/rules`, `/data-models`,
//! `/globals` and `/log-sources/http`, with `/{id}` appended for item-scoped
//! operations. Identifiers that are empty or contain `/` are rejected with
//! [`RestError::InvalidPath`] before a request is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use panther_api::clients::{RestClient, RestOperations};
//! use panther_api::PantherConfig;
//!
//! let config = PantherConfig::new("https://gw.example.com/v1", "token")?;
//! let client = RestClient::new(&config)?;
//!
//! client.delete_rule("aws.root.login").await?;
//! ```

mod client;
mod errors;

pub use client::{http_source_path, RestClient};
pub use errors::RestError;

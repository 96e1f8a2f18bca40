//! REST-specific error types for the Panther API client.
//!
//! This module contains error types for REST API operations: transport
//! failures, undecodable response bodies and invalid resource paths.
//!
//! # Error Handling
//!
//! - [`RestError::Http`]: The request failed or the server answered with an unexpected status
//! - [`RestError::Deserialize`]: The server answered successfully but the body had an unexpected shape
//! - [`RestError::InvalidPath`]: A resource identifier cannot be used as a path segment
//!
//! Every variant that concerns a request names the operation that issued it.
//!
//! # Example
//!
//! ```rust,ignore
//! use panther_api::clients::rest::RestError;
//!
//! match client.get_rule("my.rule").await {
//!     Ok(rule) => println!("Rule: {}", rule.attributes.display_name),
//!     Err(e) if e.is_not_found() => println!("Rule is gone"),
//!     Err(RestError::Deserialize { operation, source }) => {
//!         println!("{operation} returned an unexpected body: {source}");
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use panther_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/rules/".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The request could not be completed or returned an unexpected status.
    #[error("{operation}: {source}")]
    Http {
        /// Name of the failed operation, e.g. `CreateRule`.
        operation: &'static str,
        /// The underlying transport error.
        #[source]
        source: HttpError,
    },

    /// The response body did not match the expected shape.
    #[error("{operation}: failed to unmarshal response body: {source}")]
    Deserialize {
        /// Name of the failed operation.
        operation: &'static str,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The REST API path is invalid.
    ///
    /// Returned before any request is sent when an identifier is empty or
    /// contains a `/`.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was composed.
        path: String,
    },
}

impl RestError {
    pub(crate) const fn http(operation: &'static str, source: HttpError) -> Self {
        Self::Http { operation, source }
    }

    /// The HTTP status code of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { source, .. } => source.status(),
            Self::Deserialize { .. } | Self::InvalidPath { .. } => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

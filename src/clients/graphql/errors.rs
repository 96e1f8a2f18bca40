//! GraphQL-specific error types for the Panther API client.
//!
//! This module contains error types for GraphQL API operations.
//!
//! # Error Handling
//!
//! Panther reports most GraphQL failures with HTTP 200 and an `errors`
//! array. Any entry in that array fails the operation, even when `data` is
//! also present.
//!
//! - [`GraphqlError::Http`]: Transport failure or non-2xx response
//! - [`GraphqlError::Graphql`]: The response carried an `errors` array
//! - [`GraphqlError::Deserialize`]: The response had an unexpected shape
//! - [`GraphqlError::MissingData`]: The response carried no result for the operation
//!
//! # Example
//!
//! ```rust,ignore
//! use panther_api::clients::graphql::GraphqlError;
//!
//! match client.get_role_by_id("r-1").await {
//!     Ok(role) => println!("Role: {}", role.attributes.name),
//!     Err(GraphqlError::Graphql { message, .. }) => println!("Rejected: {message}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::graphql::response::GraphqlErrorEntry;
use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// Every variant names the operation that failed, e.g. `CreateRole`.
///
/// # Example
///
/// ```rust
/// use panther_api::clients::graphql::GraphqlError;
///
/// let error = GraphqlError::MissingData { operation: "RoleById" };
/// assert_eq!(error.to_string(), "RoleById: response contained no data");
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request failed below the GraphQL layer.
    #[error("{operation}: {source}")]
    Http {
        /// Name of the failed operation.
        operation: &'static str,
        /// The underlying transport error.
        #[source]
        source: HttpError,
    },

    /// The server returned GraphQL errors.
    #[error("{operation}: GraphQL request failed: {message}")]
    Graphql {
        /// Name of the failed operation.
        operation: &'static str,
        /// Message of the first error.
        message: String,
        /// All errors the server returned.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// The response did not match the expected shape.
    #[error("{operation}: failed to unmarshal response body: {source}")]
    Deserialize {
        /// Name of the failed operation.
        operation: &'static str,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The response held no result for the operation.
    #[error("{operation}: response contained no data")]
    MissingData {
        /// Name of the failed operation.
        operation: &'static str,
    },
}

impl GraphqlError {
    /// Name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Http { operation, .. }
            | Self::Graphql { operation, .. }
            | Self::Deserialize { operation, .. }
            | Self::MissingData { operation } => operation,
        }
    }

    /// The HTTP status code of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { source, .. } => source.status(),
            Self::Graphql { .. } | Self::Deserialize { .. } | Self::MissingData { .. } => None,
        }
    }

    /// Returns `true` if the server reported that the entity does not exist.
    ///
    /// GraphQL has no status for this, so the first error message is
    /// checked for "not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Graphql { message, .. } => message.to_lowercase().contains("not found"),
            _ => self.status() == Some(404),
        }
    }
}

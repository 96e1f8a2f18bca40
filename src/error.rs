//! Error types for the Panther API client.
//!
//! This module contains the configuration error type and [`Error`], the
//! umbrella type for callers that do not need to know which layer failed.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Client operations return the error type of the
//! sub-client that serves them ([`RestError`] or [`GraphqlError`]); both
//! convert into [`Error`] with `?`.
//!
//! # Example
//!
//! ```rust
//! use panther_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

use crate::clients::graphql::GraphqlError;
use crate::clients::rest::RestError;
use crate::clients::HttpError;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API URL cannot be empty.
    #[error("API URL cannot be empty. Please provide the Panther API URL.")]
    EmptyApiUrl,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Panther API token.")]
    EmptyApiToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The API token cannot be sent as a header value.
    #[error("API token contains characters that are not valid in an HTTP header.")]
    InvalidApiToken,
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport-level failure outside of a named operation.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST operation failed.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// A GraphQL operation failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}

impl Error {
    /// The HTTP status code of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Config(_) => None,
            Self::Http(e) => e.status(),
            Self::Rest(e) => e.status(),
            Self::Graphql(e) => e.status(),
        }
    }

    /// Returns `true` if the server reported that the entity does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Config(_) => false,
            Self::Http(e) => e.status() == Some(404),
            Self::Rest(e) => e.is_not_found(),
            Self::Graphql(e) => e.is_not_found(),
        }
    }

    /// Returns `true` if the server rejected the credential.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

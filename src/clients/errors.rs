//! HTTP-specific error types for the Panther API client.
//!
//! This module contains error types for transport operations: unexpected
//! response statuses, request validation failures and network errors.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: The server answered with a status other than the expected one
//! - [`InvalidHttpRequestError`]: A request failed validation before it was sent
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use panther_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a response carries an unexpected status code.
///
/// `message` is the `message` field of the JSON error body, or a note
/// explaining why it could not be extracted.
///
/// # Example
///
/// ```rust
/// use panther_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 200,
///     expected: Some(201),
///     message: "ok".to_string(),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "failed to make request, status: 200 (expected 201), message: ok"
/// );
/// ```
#[derive(Debug, Error)]
#[error("failed to make request, status: {code}{}, message: {message}", expected_note(.expected))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The status code the operation required, if it required an exact one.
    pub expected: Option<u16>,
    /// Message extracted from the response body.
    pub message: String,
}

fn expected_note(expected: &Option<u16>) -> String {
    expected.map_or_else(String::new, |code| format!(" (expected {code})"))
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use panther_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path does not start with `/`.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The offending path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with an unexpected status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be encoded.
    #[error("error marshaling data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network or connection error, including timeouts.
    #[error("failed to make request: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// The HTTP status code of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Serialize(_) => None,
        }
    }

    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

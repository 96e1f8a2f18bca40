//! HTTP response types for the Panther API client.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and body of a Panther API response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Message reported when an error body cannot be decoded.
const UNREADABLE_ERROR_BODY: &str = "failed to unmarshal response body to get error response";

/// Shape of the JSON error body returned by the REST API.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "Message")]
    message: String,
}

/// A response from the Panther API.
///
/// The body is kept as text. Successful REST responses are decoded on
/// demand with [`HttpResponse::json`]; deletes answer with an empty body.
///
/// # Example
///
/// ```rust
/// use panther_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(400, HashMap::new(), r#"{"message":"bad rule"}"#);
/// assert!(!response.is_ok());
/// assert_eq!(response.error_message(), "bad rule");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response has a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Extracts the human readable message from an error body.
    ///
    /// Panther reports REST failures as `{"message": "..."}`. Any other body
    /// yields a note carrying the decoding error instead.
    #[must_use]
    pub fn error_message(&self) -> String {
        match serde_json::from_str::<ErrorBody>(&self.body) {
            Ok(body) => body.message,
            Err(e) => format!("{UNREADABLE_ERROR_BODY}: {e}"),
        }
    }
}

//! HTTP request types for the Panther API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Panther API.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};

/// HTTP methods used by the Panther API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An HTTP request to be sent to the Panther API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use panther_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// // GET request that must answer 200
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/rules/my.rule")
///     .expected_status(200)
///     .build()
///     .unwrap();
///
/// // POST request with JSON body that must answer 201
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/globals")
///     .body(json!({"name": "panther_helpers"}))
///     .expected_status(201)
///     .operation("CreateGlobal")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the client's base URL. Starts with `/`.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// The only status code treated as success. `None` accepts any 2xx.
    pub expected_status: Option<u16>,
    /// Name of the API operation this request belongs to, used in logs.
    pub operation: &'static str,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `path` does not start with `/`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::RelativePath {
                path: self.path.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if `code` counts as success for this request.
    #[must_use]
    pub fn accepts(&self, code: u16) -> bool {
        self.expected_status
            .map_or_else(|| (200..300).contains(&code), |expected| expected == code)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    expected_status: Option<u16>,
    operation: &'static str,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            expected_status: None,
            operation: "request",
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `input` and uses it as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `input` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, input: &T) -> Result<Self, HttpError> {
        self.body = Some(serde_json::to_value(input).map_err(HttpError::Serialize)?);
        Ok(self)
    }

    /// Requires the response to carry exactly this status code.
    #[must_use]
    pub const fn expected_status(mut self, code: u16) -> Self {
        self.expected_status = Some(code);
        self
    }

    /// Names the API operation for logging.
    #[must_use]
    pub const fn operation(mut self, operation: &'static str) -> Self {
        self.operation = operation;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            expected_status: self.expected_status,
            operation: self.operation,
        };
        request.verify()?;
        Ok(request)
    }
}

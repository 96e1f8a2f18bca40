//! HTTP client for Panther API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against a single Panther base URL.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::PantherConfig;

/// Crate version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Panther API token.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client for making requests to one Panther base URL.
///
/// The client handles:
/// - URL construction from the base URL and the request path
/// - Default headers including User-Agent and the `X-API-Key` credential
/// - Status checking against the status the request expects
///
/// Requests are sent exactly once. There is no retry loop.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use panther_api::clients::{HttpClient, HttpMethod, HttpRequest};
/// use panther_api::PantherConfig;
///
/// let config = PantherConfig::new("https://api.acme.runpanther.net", "token")?;
/// let client = HttpClient::new(config.endpoints().rest_base(), &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/globals/panther_helpers")
///     .expected_status(200)
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is appended to.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client rooted at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The URL request paths are appended to, without a trailing `/`
    /// * `config` - Supplies the API token, timeout and user agent prefix
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (for example when TLS initialization fails).
    pub fn new(base_url: impl Into<String>, config: &PantherConfig) -> Result<Self, HttpError> {
        let base_url = base_url.into();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}panther-api v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Panther API.
    ///
    /// `Content-Type: application/json` is set only when the request has a
    /// body. The response succeeds when its status is the one the request
    /// expects, or any 2xx status if it expects none in particular.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs, including a timeout (`Network`)
    /// - The response status is not accepted (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);

        let mut req_builder = self
            .client
            .request(request.http_method.into(), &url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            operation = request.operation,
            method = %request.http_method,
            %url,
            "Sending Panther API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, headers, body);

        if request.accepts(code) {
            tracing::debug!(operation = request.operation, code, "Panther API request succeeded");
            return Ok(response);
        }

        let message = response.error_message();
        tracing::warn!(
            operation = request.operation,
            code,
            expected = ?request.expected_status,
            %message,
            "Panther API request failed"
        );
        Err(HttpError::Response(HttpResponseError {
            code,
            expected: request.expected_status,
            message,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

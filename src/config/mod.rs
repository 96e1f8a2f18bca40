//! Configuration types for the Panther API client.
//!
//! This module provides the core configuration types used to construct
//! an [`ApiClient`](crate::ApiClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PantherConfig`]: The configuration struct holding all client settings
//! - [`PantherConfigBuilder`]: A builder for constructing [`PantherConfig`] instances
//! - [`ApiUrl`]: A validated Panther API URL
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`Endpoints`]: The REST base and GraphQL endpoint resolved from an [`ApiUrl`]
//!
//! # Example
//!
//! ```rust
//! use panther_api::{ApiToken, ApiUrl, PantherConfig};
//! use std::time::Duration;
//!
//! let config = PantherConfig::builder()
//!     .api_url(ApiUrl::new("https://api.acme.runpanther.net").unwrap())
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoints().rest_base(), "https://api.acme.runpanther.net");
//! ```

mod endpoints;
mod newtypes;

pub use endpoints::{Endpoints, GRAPHQL_PATH, HTTP_SOURCE_PATH, REST_BASE_PATH};
pub use newtypes::{ApiToken, ApiUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Panther API client.
///
/// The configuration is immutable once built. Clients constructed from it
/// copy what they need, so one configuration can back any number of clients.
///
/// # Thread Safety
///
/// `PantherConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PantherConfig {
    api_url: ApiUrl,
    api_token: ApiToken,
    endpoints: Endpoints,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl PantherConfig {
    /// Creates a new builder for constructing a `PantherConfig`.
    #[must_use]
    pub fn builder() -> PantherConfigBuilder {
        PantherConfigBuilder::new()
    }

    /// Shorthand for a configuration with only the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiUrl`] or [`ConfigError::EmptyApiToken`]
    /// if either value is empty.
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder()
            .api_url(ApiUrl::new(api_url)?)
            .api_token(ApiToken::new(api_token)?)
            .build()
    }

    /// Returns the API URL as configured.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the endpoints resolved from the API URL.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PantherConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PantherConfig>();
};

/// Builder for constructing [`PantherConfig`] instances.
///
/// Required fields are `api_url` and `api_token`.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PantherConfigBuilder {
    api_url: Option<ApiUrl>,
    api_token: Option<ApiToken>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl PantherConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PantherConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_url` or
    /// `api_token` are not set.
    pub fn build(self) -> Result<PantherConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        let endpoints = Endpoints::resolve(api_url.as_ref());
        tracing::debug!(
            rest_base = endpoints.rest_base(),
            graphql = %endpoints.graphql_endpoint(),
            "Resolved Panther endpoints from {}",
            api_url
        );

        Ok(PantherConfig {
            api_url,
            api_token,
            endpoints,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

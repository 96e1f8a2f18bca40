//! Endpoint resolution for the Panther API.
//!
//! Panther is reachable through three historical URL conventions:
//!
//! - the bare Panther URL (`https://api.acme.runpanther.net`)
//! - an API Gateway URL carrying the `/v1` stage (`https://gw.example.com/v1`)
//! - either of the above with `/public/graphql` already appended, which is how
//!   older configurations supplied the URL
//!
//! [`Endpoints::resolve`] maps any of them onto the REST base and the GraphQL
//! endpoint without touching the network.

/// Path of the single GraphQL endpoint, relative to the Panther host.
pub const GRAPHQL_PATH: &str = "/public/graphql";

/// The API Gateway stage segment.
pub const REST_BASE_PATH: &str = "/v1";

/// Collection path of HTTP log sources, relative to the REST base.
pub const HTTP_SOURCE_PATH: &str = "/log-sources/http";

/// The two addressable forms of a Panther deployment.
///
/// # Example
///
/// ```rust
/// use panther_api::Endpoints;
///
/// let endpoints = Endpoints::resolve("https://gw.example.com/v1/public/graphql");
/// assert_eq!(endpoints.rest_base(), "https://gw.example.com/v1");
/// assert_eq!(
///     endpoints.graphql_endpoint(),
///     "https://gw.example.com/v1/public/graphql"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    host: String,
    rest_base: String,
}

impl Endpoints {
    /// Resolves a user supplied URL into the REST base and GraphQL endpoint.
    ///
    /// The gateway is detected purely by the presence of `/v1` in the URL.
    /// A URL containing `/v1` somewhere other than at the end gets `/v1`
    /// appended to form the REST base.
    #[must_use]
    pub fn resolve(raw_url: &str) -> Self {
        let host = raw_url.strip_suffix(GRAPHQL_PATH).unwrap_or(raw_url);

        let rest_base = if host.contains(REST_BASE_PATH) {
            if host.ends_with(REST_BASE_PATH) {
                host.to_string()
            } else {
                format!("{host}{REST_BASE_PATH}")
            }
        } else {
            host.to_string()
        };

        Self {
            host: host.to_string(),
            rest_base,
        }
    }

    /// The URL with any legacy GraphQL suffix removed.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Base URL for REST collection endpoints (`/rules`, `/globals`, ...).
    #[must_use]
    pub fn rest_base(&self) -> &str {
        &self.rest_base
    }

    /// The full GraphQL endpoint URL.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        format!("{}{GRAPHQL_PATH}", self.host)
    }

    /// URL of the HTTP log source collection.
    #[must_use]
    pub fn http_source_url(&self) -> String {
        format!("{}{HTTP_SOURCE_PATH}", self.rest_base)
    }
}

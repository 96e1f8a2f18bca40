//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Panther API URL.
///
/// The URL is kept exactly as supplied apart from trailing `/` characters,
/// which are trimmed. It may be a bare host, an API Gateway URL ending in
/// `/v1`, or a legacy URL that already ends in `/public/graphql`; see
/// [`Endpoints::resolve`](crate::config::Endpoints::resolve) for how each
/// form is interpreted.
///
/// # Example
///
/// ```rust
/// use panther_api::ApiUrl;
///
/// let url = ApiUrl::new("https://api.acme.runpanther.net/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.acme.runpanther.net");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiUrl`] if the URL is empty or blank.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Panther API token.
///
/// The token is sent as the `X-API-Key` header on every request.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use panther_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty, or
    /// [`ConfigError::InvalidApiToken`] if it contains characters that
    /// cannot appear in a header value.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        if !token.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b)) {
            return Err(ConfigError::InvalidApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_trims_trailing_slashes() {
        let url = ApiUrl::new("https://panther.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://panther.example.com");
    }

    #[test]
    fn test_api_url_keeps_path_segments() {
        let url = ApiUrl::new("https://gw.example.com/v1/public/graphql").unwrap();
        assert_eq!(url.as_ref(), "https://gw.example.com/v1/public/graphql");
    }

    #[test]
    fn test_api_url_rejects_empty() {
        assert!(matches!(ApiUrl::new(""), Err(ConfigError::EmptyApiUrl)));
        assert!(matches!(ApiUrl::new("  / "), Err(ConfigError::EmptyApiUrl)));
    }

    #[test]
    fn test_api_token_rejects_empty() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_rejects_control_characters() {
        assert!(matches!(
            ApiToken::new("abc\ndef"),
            Err(ConfigError::InvalidApiToken)
        ));
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "ApiToken(*****)");
        assert!(!debug.contains("super-secret"));
    }
}

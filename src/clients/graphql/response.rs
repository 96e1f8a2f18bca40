//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};

use crate::resources::null_as_default;

/// Body POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: serde_json::Value,
}

/// GraphQL response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Response data, or `None` if the server returned none.
    pub data: Option<T>,
    /// GraphQL errors array.
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphqlErrorEntry>,
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if the response contains GraphQL errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Error message.
    pub message: String,
    /// Error locations in the document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<GraphqlLocation>,
    /// Response path the error applies to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: Vec<serde_json::Value>,
    /// Optional extensions payload, e.g. an error code.
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

/// Position of an error in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlLocation {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

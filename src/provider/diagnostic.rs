use thiserror::Error;

/// A user-facing failure reported by a resource handler.
///
/// `summary` names the failed action, `detail` carries the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{summary}: {detail}")]
pub struct Diagnostic {
    /// A short summary of the issue.
    pub summary: String,
    /// A detailed description of the issue.
    pub detail: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

use thiserror::Error;

/// Rejected status configuration (aliases or ranks)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusConfigError {
    #[error("Alias must not be empty")]
    EmptyAlias,

    #[error("Unknown status code: {code}")]
    UnknownStatusCode { code: String },
}

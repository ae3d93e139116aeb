use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation failed: {message}")]
    Validation { message: &'static str },

    #[error("resource not found: {message}")]
    NotFound { message: &'static str },
}

impl DomainError {
    /// Client-facing message carried in the response envelope.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation { message } | Self::NotFound { message } => message,
        }
    }
}

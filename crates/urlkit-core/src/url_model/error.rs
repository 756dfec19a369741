//! The single error type for rejected URLs and rejected mutations.

use thiserror::Error;

/// A URL (or the URL a mutation would have produced) failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("url ({url}) is not valid: {kind}")]
pub struct ValidationError {
    /// The rejected URL in header form: the normalized input for `parse`,
    /// the candidate serialization for a mutator.
    pub url: String,
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Nothing is left once the fragment is stripped.
    #[error("nothing to parse before the fragment")]
    Empty,
    /// Generic URL syntax check failed.
    #[error("malformed url syntax")]
    Malformed,
    #[error("domain {0:?} may only contain letters, digits, '_', '.' and '-'")]
    Domain(String),
    #[error("port {0:?} must be empty or all digits")]
    Port(String),
    #[error("protocol {0:?} must be one or more letters")]
    Protocol(String),
}

impl ValidationError {
    pub fn new(url: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    pub(crate) fn malformed(url: impl Into<String>) -> Self {
        Self::new(url, ValidationErrorKind::Malformed)
    }
}

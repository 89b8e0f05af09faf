//! Resolution errors

use thiserror::Error;

/// Errors from a spatial-reference backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The registry has no definition for the requested code. Carries no
    /// backend diagnostic; callers fall back to their own wording.
    #[error("EPSG code {0} is not defined in this registry")]
    UnknownCode(u32),

    /// The backend rejected the request with its own diagnostic text.
    #[error("{0}")]
    Backend(String),
}

impl ResolveError {
    /// The backend's own diagnostic, if it produced a non-empty one.
    ///
    /// The protocol surfaces this text verbatim to the client when
    /// present, and substitutes a fixed fallback message when absent.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ResolveError::UnknownCode(_) => None,
            ResolveError::Backend(message) if message.is_empty() => None,
            ResolveError::Backend(message) => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_has_no_diagnostic() {
        assert_eq!(ResolveError::UnknownCode(99999).diagnostic(), None);
    }

    #[test]
    fn test_backend_diagnostic_is_surfaced() {
        let err = ResolveError::Backend("registry offline".to_string());
        assert_eq!(err.diagnostic(), Some("registry offline"));
    }

    #[test]
    fn test_empty_backend_diagnostic_counts_as_absent() {
        assert_eq!(ResolveError::Backend(String::new()).diagnostic(), None);
    }
}

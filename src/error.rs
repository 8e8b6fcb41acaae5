//! Custom error types for clinab
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ids::EntityKind;
use crate::models::money::MoneyError;

/// The main error type for clinab operations
#[derive(Error, Debug)]
pub enum ClinabError {
    /// Configuration-related errors (missing token, unreadable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Transport-level failures (connection refused, timeouts, TLS)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a non-success status
    #[error("API Error ({status}): {detail}")]
    Api {
        status: u16,
        id: String,
        name: String,
        detail: String,
    },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A name or ID did not match any candidate
    #[error(
        "{kind} \"{identifier}\" not found. Available {}: {}",
        .kind.plural(),
        .available.join(", ")
    )]
    NotFound {
        kind: EntityKind,
        identifier: String,
        available: Vec<String>,
    },

    /// Money conversion errors
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Output rendering errors
    #[error("Output error: {0}")]
    Output(String),
}

impl ClinabError {
    /// Create a "not found" error carrying the names that were available
    pub fn not_found(
        kind: EntityKind,
        identifier: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::NotFound {
            kind,
            identifier: identifier.into(),
            available,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status code of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ClinabError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClinabError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ClinabError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<reqwest::Error> for ClinabError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for clinab operations
pub type ClinabResult<T> = Result<T, ClinabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClinabError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ClinabError::not_found(
            EntityKind::Account,
            "Chekcing",
            vec!["Checking".into(), "Savings".into()],
        );
        assert_eq!(
            err.to_string(),
            "Account \"Chekcing\" not found. Available accounts: Checking, Savings"
        );
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_not_found_with_no_candidates() {
        let err = ClinabError::not_found(EntityKind::Payee, "Walmart", Vec::new());
        assert_eq!(
            err.to_string(),
            "Payee \"Walmart\" not found. Available payees: "
        );
    }

    #[test]
    fn test_api_error() {
        let err = ClinabError::Api {
            status: 404,
            id: "404.2".into(),
            name: "resource_not_found".into(),
            detail: "Resource not found".into(),
        };
        assert_eq!(err.to_string(), "API Error (404): Resource not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let clinab_err: ClinabError = io_err.into();
        assert!(matches!(clinab_err, ClinabError::Io(_)));
    }
}

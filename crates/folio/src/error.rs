//! Error types for folio.
//!
//! Content compiled into the crate cannot fail at runtime. Every variant here
//! belongs to one of the outer paths: loading configuration, loading an
//! external content document, validating it, or writing it back out.

use std::path::PathBuf;
use thiserror::Error;

use crate::validate::Issue;

/// The main error type for folio operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Content Errors ===
    /// A content document could not be read or did not match the schema.
    #[error("failed to load content from {path}: {source}")]
    ContentLoad {
        /// Path to the content document.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<figment::Error>,
    },

    /// The content document has an extension we don't know how to parse.
    #[error("unsupported content format for {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Path to the content document.
        path: PathBuf,
    },

    // === Validation Errors ===
    /// Content failed validation.
    #[error("content failed validation with {} issue(s): {}", .issues.len(), summarize(.issues))]
    Validation {
        /// Every issue that caused the failure.
        issues: Vec<Issue>,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

fn summarize(issues: &[Issue]) -> String {
    match issues.first() {
        Some(first) if issues.len() > 1 => format!("{first} (and {} more)", issues.len() - 1),
        Some(first) => first.to_string(),
        None => "no details".to_string(),
    }
}

impl Error {
    /// Create a content load error for the given document.
    #[must_use]
    pub fn content_load(path: impl Into<PathBuf>, source: figment::Error) -> Self {
        Self::ContentLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from content validation.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Issues carried by a validation error, empty for every other kind.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Validation { issues } => issues,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Severity;

    fn issue(path: &str, message: &str) -> Issue {
        Issue {
            severity: Severity::Error,
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::config_validation("bad extension");
        assert_eq!(err.to_string(), "invalid configuration: bad extension");
    }

    #[test]
    fn test_validation_error_single_issue() {
        let err = Error::Validation {
            issues: vec![issue("work[0].company", "must not be empty")],
        };
        let msg = err.to_string();
        assert!(msg.contains("1 issue(s)"));
        assert!(msg.contains("work[0].company"));
        assert!(!msg.contains("more"));
    }

    #[test]
    fn test_validation_error_many_issues() {
        let err = Error::Validation {
            issues: vec![
                issue("profile.name", "must not be empty"),
                issue("profile.url", "not a URL"),
                issue("contact.email", "malformed"),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("3 issue(s)"));
        assert!(msg.contains("profile.name"));
        assert!(msg.contains("and 2 more"));
    }

    #[test]
    fn test_is_validation_error() {
        let err = Error::Validation { issues: vec![] };
        assert!(err.is_validation_error());
        assert!(!Error::config_validation("x").is_validation_error());
    }

    #[test]
    fn test_issues_accessor() {
        let err = Error::Validation {
            issues: vec![issue("a", "b")],
        };
        assert_eq!(err.issues().len(), 1);
        assert!(Error::config_validation("x").issues().is_empty());
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = Error::UnsupportedFormat {
            path: PathBuf::from("/tmp/content.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/content.yaml"));
        assert!(msg.contains(".toml"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::Write {
            path: PathBuf::from("/root/forbidden.json"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden.json"));
    }
}

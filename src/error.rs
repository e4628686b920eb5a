//! Unified error types for maturity-roadmap.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages. Recoverable conditions
//! that never abort a computation are modelled separately as
//! [`MaturityWarning`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for maturity-roadmap operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaturityError {
    /// A raw score outside the 1-5 scale reached the level mapper
    #[error("Invalid score {score}: must be a finite value between 1 and 5")]
    InvalidScore { score: f64 },

    /// A letter grade outside A-E
    #[error("Invalid grade '{grade}': expected one of A, B, C, D, E")]
    InvalidGrade { grade: String },

    /// No scored answers exist for a required scope
    #[error("No data for {scope}")]
    NoData { scope: String },

    /// Errors while reading answer or recommendation files
    #[error("Failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors (inconsistent questionnaire hierarchy etc.)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Non-fatal conditions recorded while building a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum MaturityWarning {
    /// The recommendation table had no entry for this transition; fallback
    /// text was used instead.
    MissingRecommendation {
        sub_dimension: String,
        current_level: u8,
        target_level: u8,
    },
}

impl std::fmt::Display for MaturityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRecommendation {
                sub_dimension,
                current_level,
                target_level,
            } => write!(
                f,
                "No recommendation for {sub_dimension} L{current_level}→L{target_level}; using generic text"
            ),
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for maturity-roadmap operations
pub type Result<T> = std::result::Result<T, MaturityError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MaturityError {
    /// Create an invalid score error
    #[must_use]
    pub const fn invalid_score(score: f64) -> Self {
        Self::InvalidScore { score }
    }

    /// Create a no-data error for the given scope
    pub fn no_data(scope: impl Into<String>) -> Self {
        Self::NoData {
            scope: scope.into(),
        }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error means the requested data is absent rather than broken
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MaturityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MaturityError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON document", err.to_string())
    }
}

impl From<serde_yaml::Error> for MaturityError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse("YAML document", err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure deep inside
/// answer loading reads like `loading answers: answers.yaml: YAML document`.
///
/// # Example
///
/// ```ignore
/// use maturity_roadmap::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<AnswerFile> {
///     let content = std::fs::read_to_string(path).context("reading answer file")?;
///     serde_yaml::from_str(&content)
///         .with_context(|| format!("parsing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MaturityError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MaturityError, new_ctx: &str) -> MaturityError {
    match err {
        MaturityError::Parse { context, message } => MaturityError::Parse {
            context: chain_context(new_ctx, &context),
            message,
        },
        MaturityError::NoData { scope } => MaturityError::NoData {
            scope: chain_context(new_ctx, &scope),
        },
        MaturityError::Io {
            path,
            message,
            source,
        } => MaturityError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MaturityError::Config(msg) => MaturityError::Config(chain_context(new_ctx, &msg)),
        MaturityError::Validation(msg) => {
            MaturityError::Validation(chain_context(new_ctx, &msg))
        }
        // Score and grade errors carry the offending value only
        other @ (MaturityError::InvalidScore { .. } | MaturityError::InvalidGrade { .. }) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a no-data error for the given scope.
    fn context_none(self, scope: impl Into<String>) -> Result<T>;

    /// Convert None to a no-data error with the scope from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, scope: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| MaturityError::no_data(scope))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| MaturityError::no_data(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaturityError::invalid_score(7.5);
        assert!(err.to_string().contains("7.5"));

        let err = MaturityError::no_data("sub-dimension 'Build'");
        assert_eq!(err.to_string(), "No data for sub-dimension 'Build'");
        assert!(err.is_no_data());
    }

    #[test]
    fn test_io_error_has_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MaturityError::io("/path/to/answers.json", io_err);

        assert!(err.to_string().contains("/path/to/answers.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(MaturityError::parse("answers.yaml", "bad indentation"))
        }

        fn middle() -> Result<()> {
            inner().context("loading answers")
        }

        fn outer() -> Result<()> {
            middle().context("roadmap command")
        }

        match outer() {
            Err(MaturityError::Parse { context, message }) => {
                assert_eq!(context, "roadmap command: loading answers: answers.yaml");
                assert_eq!(message, "bad indentation");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_leaves_score_errors_alone() {
        let result: Result<()> = Err(MaturityError::invalid_score(0.0));
        match result.context("aggregating") {
            Err(MaturityError::InvalidScore { score }) => assert_eq!(score, 0.0),
            other => panic!("Expected InvalidScore, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(MaturityError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context_is_no_data() {
        let none_value: Option<f64> = None;
        match none_value.context_none("dimension 'Culture'") {
            Err(MaturityError::NoData { scope }) => assert_eq!(scope, "dimension 'Culture'"),
            other => panic!("Expected NoData error, got {other:?}"),
        }
        assert_eq!(Some(3).context_none("unused").ok(), Some(3));
    }

    #[test]
    fn test_warning_display() {
        let warning = MaturityWarning::MissingRecommendation {
            sub_dimension: "Build".to_string(),
            current_level: 2,
            target_level: 3,
        };
        assert_eq!(
            warning.to_string(),
            "No recommendation for Build L2→L3; using generic text"
        );
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}

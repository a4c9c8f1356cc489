//! Error taxonomy for the audit engine and its collaborators

use thiserror::Error;

/// Errors surfaced by texaudit
///
/// An audit itself never fails once scanning begins. Every variant here is
/// raised either before scanning (input resolution) or at startup (registry
/// and configuration checks).
#[derive(Error, Debug)]
pub enum AuditError {
    /// The requested document does not exist
    #[error("File does not exist: {path}")]
    NotFound { path: String },

    /// Document text is absent or unreadable
    #[error("Cannot read {path}: {message}")]
    Input { path: String, message: String },

    /// Rule weights do not add up to the fixed total
    #[error("Rule registry invariant violated: weights sum to {total}, expected {expected}")]
    ConfigInvariant { total: u32, expected: u32 },

    /// A category owns rules but has no evaluator (or has two)
    #[error("Evaluator set is inconsistent for category '{category}': {message}")]
    EvaluatorCoverage { category: String, message: String },

    /// A configuration file could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: String, message: String },
}

impl AuditError {
    pub fn input(path: impl Into<String>, message: impl Into<String>) -> Self {
        AuditError::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        AuditError::NotFound { path: path.into() }
    }

    /// Whether this is an input error (the request failed before scanning)
    pub fn is_input(&self) -> bool {
        matches!(self, AuditError::NotFound { .. } | AuditError::Input { .. })
    }
}

pub type AuditResult<T> = Result<T, AuditError>;

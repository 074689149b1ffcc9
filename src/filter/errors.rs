//! Filter error types
//!
//! Error codes:
//! - VM_INVALID_ARGUMENT (REJECT)

use std::fmt;

use thiserror::Error;

/// Severity levels for filter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Filter error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorCode {
    /// A required argument was absent
    VmInvalidArgument,
}

impl FilterErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            FilterErrorCode::VmInvalidArgument => "VM_INVALID_ARGUMENT",
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for FilterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while building filters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A required argument was absent
    #[error(
        "[{}] {}: {}",
        FilterErrorCode::VmInvalidArgument.severity(),
        FilterErrorCode::VmInvalidArgument,
        .0
    )]
    InvalidArgument(String),
}

impl FilterError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        FilterError::InvalidArgument(reason.into())
    }

    pub fn code(&self) -> FilterErrorCode {
        match self {
            FilterError::InvalidArgument(_) => FilterErrorCode::VmInvalidArgument,
        }
    }

    pub fn severity(&self) -> Severity {
        self.code().severity()
    }

    pub fn message(&self) -> &str {
        match self {
            FilterError::InvalidArgument(message) => message,
        }
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_matches() {
        let err = FilterError::invalid_argument("missing record");
        assert_eq!(err.code(), FilterErrorCode::VmInvalidArgument);
        assert_eq!(err.code().code(), "VM_INVALID_ARGUMENT");
        assert_eq!(err.severity(), Severity::Reject);
        assert_eq!(err.message(), "missing record");
    }

    #[test]
    fn test_error_display() {
        let err = FilterError::invalid_argument("missing record");
        let display = err.to_string();
        assert!(display.contains("REJECT"));
        assert!(display.contains("VM_INVALID_ARGUMENT"));
        assert!(display.contains("missing record"));
    }

    #[test]
    fn test_display_follows_code_and_severity() {
        let err = FilterError::invalid_argument("missing record");
        assert_eq!(
            err.to_string(),
            format!("[{}] {}: {}", err.severity(), err.code(), err.message())
        );
        assert_eq!(err.to_string(), "[REJECT] VM_INVALID_ARGUMENT: missing record");
    }
}

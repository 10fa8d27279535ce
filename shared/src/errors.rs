//! Error types for the Fitness Tracker

use thiserror::Error;

/// Outcome of a tracker operation that could not be applied.
///
/// None of these are fatal: removing an unknown id or reporting over an
/// empty log leaves every store untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No data available: {0}")]
    EmptyData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TrackerError {
    /// Short machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::NotFound(_) => "NOT_FOUND",
            TrackerError::EmptyData(_) => "EMPTY_DATA",
            TrackerError::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

/// Result alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TrackerError::NotFound("workout 3".to_string());
        assert_eq!(err.to_string(), "Not found: workout 3");

        let err = TrackerError::EmptyData("weight log".to_string());
        assert_eq!(err.to_string(), "No data available: weight log");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TrackerError::NotFound(String::new()).code(), "NOT_FOUND");
        assert_eq!(TrackerError::EmptyData(String::new()).code(), "EMPTY_DATA");
        assert_eq!(TrackerError::InvalidInput(String::new()).code(), "INVALID_INPUT");
    }
}

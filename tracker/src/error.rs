//! Reporting error handling
//!
//! This module wraps tracker outcomes together with the failures of the
//! collaborators (CSV writer, chart renderer) behind one error type.

use fitness_tracker_shared::TrackerError;
use thiserror::Error;
use tracing::{error, warn};

/// Error type for reporting, export and rendering
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl ReportError {
    /// Whether this is a soft outcome (missing data, unknown key, bad tag)
    /// rather than a collaborator failure
    pub fn is_notice(&self) -> bool {
        matches!(self, ReportError::Tracker(_))
    }

    /// Short machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::Tracker(err) => err.code(),
            ReportError::Io(_) => "IO_ERROR",
            ReportError::Csv(_) => "CSV_ERROR",
            ReportError::Json(_) => "JSON_ERROR",
            ReportError::Render(_) => "RENDER_ERROR",
        }
    }

    /// Log at the level matching the severity and hand the error back
    pub fn logged(self) -> Self {
        if self.is_notice() {
            warn!(code = self.code(), "{}", self);
        } else {
            error!(code = self.code(), "{}", self);
        }
        self
    }
}

/// Result type alias for reporting operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_errors_are_notices() {
        let error = ReportError::from(TrackerError::EmptyData("workouts".to_string()));
        assert!(error.is_notice());
        assert_eq!(error.code(), "EMPTY_DATA");
        assert_eq!(error.to_string(), "No data available: workouts");
    }

    #[test]
    fn test_io_error_is_not_a_notice() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error = ReportError::from(io);
        assert!(!error.is_notice());
        assert_eq!(error.code(), "IO_ERROR");
    }

    #[test]
    fn test_invalid_input_code() {
        let error = ReportError::from(TrackerError::InvalidInput("bogus".to_string()));
        assert_eq!(error.code(), "INVALID_INPUT");
    }
}

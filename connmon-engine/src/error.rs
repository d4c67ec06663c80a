//! Error handling for the monitoring engine
//!
//! Ranking itself never fails. Errors only come from parsing sort
//! selections and loading ranking configuration.

use thiserror::Error;

use crate::ranking::SortOption;

/// Main error type for the connmon engine
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("unknown sort option: {0:?}")]
    UnknownSortOption(String),

    #[error("unknown sort direction: {0:?}")]
    UnknownDirection(String),

    #[error("sort by {0} is only valid on closed connections")]
    RequiresClosed(SortOption),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config file too large: {size} bytes (max {max} bytes)")]
    ConfigTooLarge { size: u64, max: u64 },
}

impl MonitorError {
    /// Check if this error was caused by a bad sort selection
    pub fn is_sort_error(&self) -> bool {
        matches!(
            self,
            MonitorError::UnknownSortOption(_)
                | MonitorError::UnknownDirection(_)
                | MonitorError::RequiresClosed(_)
        )
    }
}

/// Result type for monitoring operations
pub type MonitorResult<T> = Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_error_check() {
        assert!(MonitorError::UnknownSortOption("bogus".into()).is_sort_error());
        assert!(MonitorError::RequiresClosed(SortOption::Stop).is_sort_error());
        assert!(!MonitorError::ConfigTooLarge { size: 2, max: 1 }.is_sort_error());
    }

    #[test]
    fn test_display() {
        let err = MonitorError::RequiresClosed(SortOption::Reason);
        assert_eq!(
            err.to_string(),
            "sort by reason is only valid on closed connections"
        );

        let err = MonitorError::UnknownSortOption("foo".into());
        assert_eq!(err.to_string(), "unknown sort option: \"foo\"");
    }
}

//! Error type for the filter compiler
//!
//! Only hard failures live here. "Nothing usable to render" situations are
//! reported through `is_valid()` / `invalid_message()` on the condition types
//! and never become an error.

use thiserror::Error;

/// Hard failures raised while compiling filters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A literal could not be interpreted by the comparer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filter declares both or neither of its ID/value column names
    #[error("Filter '{display}' must declare exactly one of filter_id_name or filter_name")]
    AmbiguousColumn { display: String },

    /// Filter JSON is larger than the accepted payload
    #[error("Filter JSON exceeds maximum size of {max_bytes} bytes")]
    FilterJsonTooLarge { max_bytes: usize },

    /// Filter JSON is not a valid filter list
    #[error("Invalid filter JSON: {0}")]
    InvalidFilterJson(String),

    /// More filters than a single clause accepts
    #[error("Maximum {max} filters allowed, got {actual}")]
    TooManyFilters { max: usize, actual: usize },
}

impl FilterError {
    /// Create an invalid argument error naming the offending literal
    pub fn invalid_literal(value: &str, expected: &str) -> Self {
        Self::InvalidArgument(format!("'{}' is not a valid {}", value, expected))
    }

    /// Create an ambiguous column error
    pub fn ambiguous_column(display: impl Into<String>) -> Self {
        Self::AmbiguousColumn {
            display: display.into(),
        }
    }

    /// Whether the caller can fix this by changing the filter payload
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::FilterJsonTooLarge { .. }
                | Self::InvalidFilterJson(_)
                | Self::TooManyFilters { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_literal_names_value() {
        let err = FilterError::invalid_literal("2024-13-45", "date for format '%Y-%m-%d'");
        assert_eq!(
            err.to_string(),
            "Invalid argument: '2024-13-45' is not a valid date for format '%Y-%m-%d'"
        );
    }

    #[test]
    fn test_ambiguous_column_display() {
        let err = FilterError::ambiguous_column("Region");
        assert_eq!(
            err.to_string(),
            "Filter 'Region' must declare exactly one of filter_id_name or filter_name"
        );
    }

    #[test]
    fn test_too_many_filters_display() {
        let err = FilterError::TooManyFilters { max: 50, actual: 51 };
        assert_eq!(err.to_string(), "Maximum 50 filters allowed, got 51");
    }

    #[test]
    fn test_is_input_error() {
        assert!(FilterError::InvalidFilterJson("eof".into()).is_input_error());
        assert!(FilterError::FilterJsonTooLarge { max_bytes: 10 }.is_input_error());
        assert!(!FilterError::invalid_literal("x", "number").is_input_error());
        assert!(!FilterError::ambiguous_column("x").is_input_error());
    }
}

//! Error types for the Setoran Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while validating, calculating,
//! storing, or configuring shift reports.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Setoran Engine.
///
/// The calculation itself is infallible; every variant here is raised by
/// validation, the record store, or configuration loading.
///
/// # Example
///
/// ```
/// use setoran_engine::error::EngineError;
///
/// let error = EngineError::RecordNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Setoran record not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The closing meter reading is lower than the opening reading.
    #[error("Invalid meter range: meter_end {meter_end} is less than meter_start {meter_start}")]
    InvalidRange {
        /// The opening meter reading.
        meter_start: Decimal,
        /// The closing meter reading.
        meter_end: Decimal,
    },

    /// An expense or income line item was invalid.
    #[error("Invalid {list} item '{item_id}': {message}")]
    InvalidLineItem {
        /// Which list the item belongs to ("expense" or "income").
        list: String,
        /// The caller-assigned ID of the offending item.
        item_id: String,
        /// A description of what made the item invalid.
        message: String,
    },

    /// A scalar field of a shift report was invalid.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The referenced setoran record does not exist.
    #[error("Setoran record not found: {id}")]
    RecordNotFound {
        /// The record ID that was requested.
        id: u64,
    },

    /// Line items could not be encoded for storage.
    #[error("Failed to encode line items: {message}")]
    EncodeError {
        /// A description of the encoding failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/pricing.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/pricing.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_range_displays_both_readings() {
        let error = EngineError::InvalidRange {
            meter_start: Decimal::new(1050, 0),
            meter_end: Decimal::new(1000, 0),
        };
        assert_eq!(
            error.to_string(),
            "Invalid meter range: meter_end 1000 is less than meter_start 1050"
        );
    }

    #[test]
    fn test_invalid_line_item_displays_list_id_and_message() {
        let error = EngineError::InvalidLineItem {
            list: "expense".to_string(),
            item_id: "exp-1".to_string(),
            message: "amount must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid expense item 'exp-1': amount must not be negative"
        );
    }

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = EngineError::InvalidField {
            field: "clock_in".to_string(),
            message: "must be in HH:MM format".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid field 'clock_in': must be in HH:MM format"
        );
    }

    #[test]
    fn test_record_not_found_displays_id() {
        let error = EngineError::RecordNotFound { id: 7 };
        assert_eq!(error.to_string(), "Setoran record not found: 7");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::RecordNotFound { id: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

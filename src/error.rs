//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading a roster, computing pay,
//! and writing payslips.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidMonth { value: 13 };
/// assert_eq!(error.to_string(), "Month must be from 1 to 12, got 13");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A roster line did not contain both a name and a role.
    #[error("Malformed roster line {line_number}: '{line}' (expected '<name>, <role>')")]
    MalformedRosterLine {
        /// The 1-based line number within the roster file.
        line_number: usize,
        /// The offending line.
        line: String,
    },

    /// The roster file exists but could not be read.
    #[error("Failed to read roster '{path}': {message}")]
    RosterRead {
        /// The roster path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

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

    /// A pay month outside 1..=12 was supplied.
    #[error("Month must be from 1 to 12, got {value}")]
    InvalidMonth {
        /// The rejected month number.
        value: i64,
    },

    /// A payslip was requested for a staff member whose pay was never computed.
    #[error("Pay has not been calculated for '{name}'")]
    PayNotCalculated {
        /// The staff member's name.
        name: String,
    },

    /// A payslip file could not be written.
    #[error("Failed to write payslip '{path}': {message}")]
    PayslipWrite {
        /// The payslip path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// Console input ended while a prompt was still waiting for an answer.
    #[error("Console input closed before all answers were provided")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_roster_line_displays_line() {
        let error = PayrollError::MalformedRosterLine {
            line_number: 3,
            line: "Alice".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed roster line 3: 'Alice' (expected '<name>, <role>')"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "payroll.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'payroll.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = PayrollError::InvalidMonth { value: 0 };
        assert_eq!(error.to_string(), "Month must be from 1 to 12, got 0");
    }

    #[test]
    fn test_pay_not_calculated_displays_name() {
        let error = PayrollError::PayNotCalculated {
            name: "Carol".to_string(),
        };
        assert_eq!(error.to_string(), "Pay has not been calculated for 'Carol'");
    }

    #[test]
    fn test_io_error_converts_to_console() {
        fn fails() -> PayrollResult<()> {
            Err::<(), _>(std::io::Error::other("broken pipe"))?;
            Ok(())
        }

        match fails() {
            Err(PayrollError::Console(err)) => assert_eq!(err.to_string(), "broken pipe"),
            other => panic!("Expected Console error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }
}

//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the optional YAML configuration file. Every field
//! has a default, so an empty file is a valid configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Default roster file, relative to the working directory.
pub const DEFAULT_ROSTER_PATH: &str = "staff.txt";

/// How monetary amounts are printed on payslips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// The currency symbol placed before the amount.
    pub symbol: String,
    /// Number of digits after the decimal point.
    pub decimal_places: u32,
    /// Separator between groups of three integer digits.
    pub group_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_places: 3,
            group_separator: ",".to_string(),
        }
    }
}

/// Top-level payroll configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.roster_path.to_str(), Some("staff.txt"));
/// assert_eq!(config.currency.decimal_places, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// The roster file to read staff from.
    pub roster_path: PathBuf,
    /// The directory payslips are written to.
    pub output_dir: PathBuf,
    /// Currency formatting for basic pay.
    pub currency: CurrencyFormat,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            output_dir: PathBuf::from("."),
            currency: CurrencyFormat::default(),
        }
    }
}

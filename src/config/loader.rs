//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads payroll configuration from YAML.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load_or_default("payroll.yaml")?;
/// println!("Roster: {}", config.roster_path.display());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the configuration on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Loads configuration from the file if it exists, otherwise returns defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollConfig> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(PayrollConfig::default());
        }
        Self::load(path)
    }

    fn parse(content: &str) -> Result<PayrollConfig, String> {
        // An empty document deserializes as unit, not as a mapping.
        if content.trim().is_empty() {
            return Ok(PayrollConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

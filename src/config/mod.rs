//! Configuration loading for the payroll engine.
//!
//! Configuration covers where the roster is read from, where payslips are
//! written, and how currency is printed. Pay rates are fixed per role and are
//! not configurable.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Payslips go to {}", config.output_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CurrencyFormat, DEFAULT_ROSTER_PATH, PayrollConfig};

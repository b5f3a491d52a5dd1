//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod pay_period;
mod staff;

pub use calculation_result::{AuditStep, PayCalculation, PayComponent};
pub use pay_period::PayPeriod;
pub use staff::{Role, Staff};

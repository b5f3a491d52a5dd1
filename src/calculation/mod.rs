//! Calculation logic for the payroll engine.
//!
//! This module contains the pay rules: basic pay from the role's hourly rate,
//! the manager allowance, admin overtime, and the dispatcher that combines
//! them per role.

mod admin_overtime;
mod base_pay;
mod manager_allowance;
mod pay_rules;

pub use admin_overtime::{AdminOvertimeResult, OVERTIME_RATE, calculate_admin_overtime};
pub use base_pay::{ADMIN_HOURLY_RATE, BasePayResult, MANAGER_HOURLY_RATE, calculate_base_pay};
pub use manager_allowance::{MANAGER_ALLOWANCE, ManagerAllowanceResult, calculate_manager_allowance};
pub use pay_rules::{MONTHLY_HOURS_THRESHOLD, calculate_pay};

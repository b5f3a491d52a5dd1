//! Basic pay calculation.
//!
//! Basic pay is the role's fixed hourly rate multiplied by hours worked,
//! before any allowance or overtime.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Role};

/// Hourly rate paid to managers.
pub const MANAGER_HOURLY_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Hourly rate paid to admin staff.
pub const ADMIN_HOURLY_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The result of calculating basic pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BasePayResult {
    /// Hourly rate multiplied by hours worked.
    pub basic_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates basic pay for a role and a number of hours.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_base_pay;
/// use payroll_engine::models::Role;
/// use rust_decimal::Decimal;
///
/// let result = calculate_base_pay(Role::Admin, 170, 1);
/// assert_eq!(result.basic_pay, Decimal::from(5100));
/// ```
pub fn calculate_base_pay(role: Role, hours_worked: u32, step_number: u32) -> BasePayResult {
    let rate = role.hourly_rate();
    let basic_pay = rate * Decimal::from(hours_worked);

    let audit_step = AuditStep {
        step_number,
        rule_id: "basic_pay".to_string(),
        rule_name: "Basic Pay".to_string(),
        input: serde_json::json!({
            "role": role,
            "hourly_rate": rate.normalize().to_string(),
            "hours_worked": hours_worked
        }),
        output: serde_json::json!({
            "basic_pay": basic_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours × ${} = ${}",
            hours_worked,
            rate.normalize(),
            basic_pay.normalize()
        ),
    };

    BasePayResult {
        basic_pay,
        audit_step,
    }
}

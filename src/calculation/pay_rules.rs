//! Role dispatch for pay calculation.
//!
//! [`calculate_pay`] runs basic pay and then the single rule that belongs to
//! the role, collecting each step into the audit trail.

use tracing::debug;

use super::{calculate_admin_overtime, calculate_base_pay, calculate_manager_allowance};
use crate::models::{PayCalculation, PayComponent, Role};

/// Hours per month above which allowance or overtime is paid.
pub const MONTHLY_HOURS_THRESHOLD: u32 = 160;

/// Calculates basic pay, the role component and total pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::models::{PayComponent, Role};
/// use rust_decimal::Decimal;
///
/// let pay = calculate_pay(Role::Manager, 100);
/// assert_eq!(pay.total_pay, Decimal::from(5000));
/// assert_eq!(pay.component, PayComponent::Allowance(Decimal::from(1000)));
/// assert!(!pay.component_applied);
/// ```
pub fn calculate_pay(role: Role, hours_worked: u32) -> PayCalculation {
    let base = calculate_base_pay(role, hours_worked, 1);
    let basic_pay = base.basic_pay;
    let mut audit_steps = vec![base.audit_step];

    let (component, component_applied) = match role {
        Role::Manager => {
            let result = calculate_manager_allowance(hours_worked, 2);
            audit_steps.push(result.audit_step);
            (PayComponent::Allowance(result.allowance), result.applied)
        }
        Role::Admin => {
            let result = calculate_admin_overtime(hours_worked, 2);
            audit_steps.push(result.audit_step);
            (PayComponent::OverTime(result.overtime), result.applied)
        }
    };

    let total_pay = if component_applied {
        basic_pay + component.amount()
    } else {
        basic_pay
    };

    debug!(
        role = ?role,
        hours_worked,
        basic_pay = %basic_pay.normalize(),
        total_pay = %total_pay.normalize(),
        "Calculated pay"
    );

    PayCalculation {
        hours_worked,
        hourly_rate: role.hourly_rate(),
        basic_pay,
        component,
        component_applied,
        total_pay,
        audit_steps,
    }
}

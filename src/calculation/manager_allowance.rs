//! Manager allowance calculation.
//!
//! Managers receive a fixed allowance once they work more than the monthly
//! hours threshold. The allowance amount is reported regardless of whether
//! it was paid.

use rust_decimal::Decimal;

use super::MONTHLY_HOURS_THRESHOLD;
use crate::models::AuditStep;

/// The fixed manager allowance.
pub const MANAGER_ALLOWANCE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// The result of calculating the manager allowance.
#[derive(Debug, Clone)]
pub struct ManagerAllowanceResult {
    /// The allowance amount. Always [`MANAGER_ALLOWANCE`].
    pub allowance: Decimal,
    /// Whether the allowance is added to total pay.
    pub applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the manager allowance for a number of hours worked.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_manager_allowance, MANAGER_ALLOWANCE};
///
/// let result = calculate_manager_allowance(161, 1);
/// assert!(result.applied);
///
/// let result = calculate_manager_allowance(160, 1);
/// assert!(!result.applied);
/// assert_eq!(result.allowance, MANAGER_ALLOWANCE);
/// ```
pub fn calculate_manager_allowance(hours_worked: u32, step_number: u32) -> ManagerAllowanceResult {
    let allowance = MANAGER_ALLOWANCE;
    let applied = hours_worked > MONTHLY_HOURS_THRESHOLD;

    let reasoning = if applied {
        format!(
            "{} hours exceeds {} - allowance ${} added",
            hours_worked, MONTHLY_HOURS_THRESHOLD, allowance
        )
    } else {
        format!(
            "{} hours does not exceed {} - allowance not added",
            hours_worked, MONTHLY_HOURS_THRESHOLD
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "manager_allowance".to_string(),
        rule_name: "Manager Allowance".to_string(),
        input: serde_json::json!({
            "hours_worked": hours_worked,
            "threshold_hours": MONTHLY_HOURS_THRESHOLD
        }),
        output: serde_json::json!({
            "allowance": allowance.to_string(),
            "applied": applied
        }),
        reasoning,
    };

    ManagerAllowanceResult {
        allowance,
        applied,
        audit_step,
    }
}

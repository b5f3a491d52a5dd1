//! Admin overtime calculation.
//!
//! Overtime is `15.5 × (hours − 160)`. The amount is always computed, so it
//! is negative below the threshold, but it is only added to total pay when
//! hours exceed the threshold. Payslips print the computed amount either way.

use rust_decimal::Decimal;

use super::MONTHLY_HOURS_THRESHOLD;
use crate::models::AuditStep;

/// Pay per overtime hour for admin staff.
pub const OVERTIME_RATE: Decimal = Decimal::from_parts(155, 0, 0, false, 1);

/// The result of calculating admin overtime.
#[derive(Debug, Clone)]
pub struct AdminOvertimeResult {
    /// The computed overtime, negative when under the threshold.
    pub overtime: Decimal,
    /// Whether the overtime is added to total pay.
    pub applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates admin overtime for a number of hours worked.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_admin_overtime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_admin_overtime(170, 2);
/// assert!(result.applied);
/// assert_eq!(result.overtime, Decimal::from(155));
///
/// // Known quirk: below the threshold the amount is negative but unused.
/// let result = calculate_admin_overtime(100, 2);
/// assert!(!result.applied);
/// assert_eq!(result.overtime, Decimal::from(-930));
/// ```
pub fn calculate_admin_overtime(hours_worked: u32, step_number: u32) -> AdminOvertimeResult {
    let extra_hours = i64::from(hours_worked) - i64::from(MONTHLY_HOURS_THRESHOLD);
    // Computed unconditionally; only the `applied` flag guards total pay.
    let overtime = OVERTIME_RATE * Decimal::from(extra_hours);
    let applied = hours_worked > MONTHLY_HOURS_THRESHOLD;

    let reasoning = if applied {
        format!(
            "{} extra hours × ${} = ${} added",
            extra_hours,
            OVERTIME_RATE.normalize(),
            overtime.normalize()
        )
    } else {
        format!(
            "{} hours does not exceed {} - overtime ${} computed but not added",
            hours_worked,
            MONTHLY_HOURS_THRESHOLD,
            overtime.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "admin_overtime".to_string(),
        rule_name: "Admin Overtime".to_string(),
        input: serde_json::json!({
            "hours_worked": hours_worked,
            "threshold_hours": MONTHLY_HOURS_THRESHOLD,
            "overtime_rate": OVERTIME_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "extra_hours": extra_hours,
            "overtime": overtime.normalize().to_string(),
            "applied": applied
        }),
        reasoning,
    };

    AdminOvertimeResult {
        overtime,
        applied,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_overtime_above_threshold() {
        let result = calculate_admin_overtime(170, 2);
        assert!(result.applied);
        assert_eq!(result.overtime, dec("155"));
        assert_eq!(result.audit_step.output["extra_hours"], 10);
    }

    #[test]
    fn test_fractional_overtime() {
        let result = calculate_admin_overtime(161, 2);
        assert_eq!(result.overtime, dec("15.5"));
        assert_eq!(result.audit_step.output["overtime"], "15.5");
    }

    #[test]
    fn test_overtime_zero_at_threshold() {
        let result = calculate_admin_overtime(160, 2);
        assert!(!result.applied);
        assert_eq!(result.overtime, Decimal::ZERO);
    }

    #[test]
    fn test_negative_overtime_below_threshold_is_kept() {
        let result = calculate_admin_overtime(0, 2);
        assert!(!result.applied);
        assert_eq!(result.overtime, dec("-2480"));
        assert!(result.audit_step.reasoning.contains("computed but not added"));
    }
}

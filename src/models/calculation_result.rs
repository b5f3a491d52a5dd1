//! Calculation result models for the payroll engine.
//!
//! This module contains the [`PayCalculation`] type and its associated structures
//! that capture all outputs from a pay calculation: basic pay, the role-specific
//! pay component, the total, and an audit trail of the rules applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role-specific component shown on a payslip beneath basic pay.
///
/// Each role has exactly one component, so rendering asks the component
/// for its label instead of inspecting the role.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayComponent;
/// use rust_decimal::Decimal;
///
/// let component = PayComponent::Allowance(Decimal::from(1000));
/// assert_eq!(component.label(), "Allowance");
/// assert_eq!(component.amount(), Decimal::from(1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum PayComponent {
    /// Fixed monthly allowance paid to managers above the hours threshold.
    Allowance(Decimal),
    /// Overtime pay for admin staff.
    OverTime(Decimal),
}

impl PayComponent {
    /// The payslip label for this component.
    pub fn label(&self) -> &'static str {
        match self {
            PayComponent::Allowance(_) => "Allowance",
            PayComponent::OverTime(_) => "Over Time Pay",
        }
    }

    /// The computed amount, whether or not it was added to total pay.
    pub fn amount(&self) -> Decimal {
        match self {
            PayComponent::Allowance(amount) | PayComponent::OverTime(amount) => *amount,
        }
    }
}

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a pay calculation for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// Hours the calculation was based on.
    pub hours_worked: u32,
    /// The role's hourly rate.
    pub hourly_rate: Decimal,
    /// Hourly rate multiplied by hours worked.
    pub basic_pay: Decimal,
    /// The role-specific component (allowance or overtime).
    pub component: PayComponent,
    /// Whether the component was added to total pay.
    pub component_applied: bool,
    /// Basic pay plus the component when it applies.
    pub total_pay: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

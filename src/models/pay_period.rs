//! Pay period model.
//!
//! A [`PayPeriod`] is the month and year printed in every payslip header.

use std::fmt;

use chrono::Month;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{PayrollError, PayrollResult};

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// The calendar month a payroll run covers.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(3, 2024).unwrap();
/// assert_eq!(period.to_string(), "MAR 2024");
/// assert!(PayPeriod::new(13, 2024).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    month: Month,
    year: i32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting month numbers outside 1..=12.
    pub fn new(month_number: i64, year: i32) -> PayrollResult<Self> {
        let month = usize::try_from(month_number)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|index| MONTHS.get(index).copied())
            .ok_or(PayrollError::InvalidMonth {
                value: month_number,
            })?;

        Ok(Self { month, year })
    }

    /// The pay month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The month as a number from 1 to 12.
    pub fn month_number(&self) -> u32 {
        self.month.number_from_month()
    }

    /// The pay year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Three-letter upper-case month label, e.g. `JAN`.
    pub fn month_label(&self) -> String {
        self.month.name()[..3].to_uppercase()
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_label(), self.year)
    }
}

impl Serialize for PayPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PayPeriod", 2)?;
        state.serialize_field("month", &self.month_number())?;
        state.serialize_field("year", &self.year)?;
        state.end()
    }
}

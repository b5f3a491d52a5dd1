//! Staff model and related types.
//!
//! This module defines the [`Staff`] record and the closed [`Role`] enum
//! that selects which pay rule applies to it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayCalculation;
use crate::calculation;

/// The pay rule a staff member is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Paid a fixed allowance when working beyond the hours threshold.
    Manager,
    /// Paid overtime for hours beyond the threshold.
    Admin,
}

impl Role {
    /// The exact roster tag that selects [`Role::Admin`].
    pub const ADMIN_TAG: &'static str = "Admin";

    /// Maps a roster role tag to a role.
    ///
    /// Only the exact tag `Admin` yields [`Role::Admin`]; every other value,
    /// including misspellings and different casing, yields [`Role::Manager`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Role;
    ///
    /// assert_eq!(Role::from_roster_tag("Admin"), Role::Admin);
    /// assert_eq!(Role::from_roster_tag("admin"), Role::Manager);
    /// assert_eq!(Role::from_roster_tag("Foo"), Role::Manager);
    /// ```
    pub fn from_roster_tag(tag: &str) -> Self {
        if tag == Self::ADMIN_TAG {
            Role::Admin
        } else {
            Role::Manager
        }
    }

    /// The fixed hourly rate for this role.
    pub fn hourly_rate(self) -> Decimal {
        match self {
            Role::Manager => calculation::MANAGER_HOURLY_RATE,
            Role::Admin => calculation::ADMIN_HOURLY_RATE,
        }
    }
}

/// One staff member on the roster.
///
/// Hours are set once from the console, after which [`Staff::calculate_pay`]
/// derives basic and total pay. Changing the hours discards any earlier
/// calculation so derived pay never disagrees with the stored hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staff {
    name: String,
    role: Role,
    hours_worked: u32,
    pay: Option<PayCalculation>,
}

impl Staff {
    /// Creates a staff record with zero hours worked.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            hours_worked: 0,
            pay: None,
        }
    }

    /// Creates a manager.
    pub fn manager(name: impl Into<String>) -> Self {
        Self::new(name, Role::Manager)
    }

    /// Creates an admin.
    pub fn admin(name: impl Into<String>) -> Self {
        Self::new(name, Role::Admin)
    }

    /// The staff member's name, also used as the payslip file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The staff member's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The role's fixed hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.role.hourly_rate()
    }

    /// Hours worked in the pay period.
    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }

    /// Sets hours worked. Zero and negative values are stored as 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Staff;
    ///
    /// let mut staff = Staff::admin("Alice");
    /// staff.set_hours_worked(-5);
    /// assert_eq!(staff.hours_worked(), 0);
    /// staff.set_hours_worked(170);
    /// assert_eq!(staff.hours_worked(), 170);
    /// ```
    pub fn set_hours_worked(&mut self, hours: i32) {
        self.hours_worked = u32::try_from(hours).unwrap_or(0);
        self.pay = None;
    }

    /// Computes pay from the current hours under this staff member's role.
    pub fn calculate_pay(&mut self) -> &PayCalculation {
        self.pay
            .insert(calculation::calculate_pay(self.role, self.hours_worked))
    }

    /// The most recent pay calculation, if pay has been computed.
    pub fn pay(&self) -> Option<&PayCalculation> {
        self.pay.as_ref()
    }

    /// Basic pay, or zero before pay has been computed.
    pub fn basic_pay(&self) -> Decimal {
        self.pay.as_ref().map_or(Decimal::ZERO, |pay| pay.basic_pay)
    }

    /// Total pay, or zero before pay has been computed.
    pub fn total_pay(&self) -> Decimal {
        self.pay.as_ref().map_or(Decimal::ZERO, |pay| pay.total_pay)
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nTotal Pay: {}",
            self.name,
            self.total_pay().normalize()
        )
    }
}

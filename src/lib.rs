//! Payroll engine for a small staff roster.
//!
//! This crate reads a roster of managers and admin staff, computes each
//! person's monthly pay from the hours they worked, and writes a plain text
//! payslip per person.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payslip;
pub mod roster;
pub mod session;

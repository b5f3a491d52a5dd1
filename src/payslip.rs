//! Payslip rendering.
//!
//! Each staff member gets a plain text payslip written to `<name>.txt` in the
//! output directory. Existing files with the same name are overwritten.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::config::CurrencyFormat;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayPeriod, Staff};

const RULE: &str = "==========================";

/// Formats an amount as currency with grouped integer digits.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::CurrencyFormat;
/// use payroll_engine::payslip::format_currency;
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format_currency(Decimal::from(5100), &format), "$5,100.000");
/// ```
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let places = format.decimal_places as usize;
    let rounded = amount
        .abs()
        .round_dp_with_strategy(format.decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", places, rounded);

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::new();
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push_str(&format.group_separator);
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, format.symbol, grouped, fraction),
        None => format!("{}{}{}", sign, format.symbol, grouped),
    }
}

/// Renders and writes payslips for one pay period.
#[derive(Debug, Clone)]
pub struct PaySlip {
    period: PayPeriod,
    currency: CurrencyFormat,
}

impl PaySlip {
    /// Creates a payslip writer for a pay period.
    pub fn new(period: PayPeriod, currency: CurrencyFormat) -> Self {
        Self { period, currency }
    }

    /// The pay period printed in every header.
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// Renders the payslip text for one staff member.
    ///
    /// Fails with `PayNotCalculated` if the staff member's pay was never computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::CurrencyFormat;
    /// use payroll_engine::models::{PayPeriod, Staff};
    /// use payroll_engine::payslip::PaySlip;
    ///
    /// let mut staff = Staff::admin("Carol");
    /// staff.set_hours_worked(170);
    /// staff.calculate_pay();
    ///
    /// let slip = PaySlip::new(PayPeriod::new(1, 2024).unwrap(), CurrencyFormat::default());
    /// let text = slip.render(&staff).unwrap();
    /// assert!(text.starts_with("PAYSLIP FOR JAN 2024\n"));
    /// assert!(text.ends_with("Total Pay: 5255\n"));
    /// ```
    pub fn render(&self, staff: &Staff) -> PayrollResult<String> {
        let pay = staff.pay().ok_or_else(|| PayrollError::PayNotCalculated {
            name: staff.name().to_string(),
        })?;

        let lines = [
            format!("PAYSLIP FOR {}", self.period),
            RULE.to_string(),
            format!("Name of Staff: {}", staff.name()),
            format!("Hours Worked: {}", pay.hours_worked),
            String::new(),
            format!(
                "Basic Pay: {}",
                format_currency(pay.basic_pay, &self.currency)
            ),
            format!(
                "{}: {}",
                pay.component.label(),
                pay.component.amount().normalize()
            ),
            String::new(),
            RULE.to_string(),
            format!("Total Pay: {}", pay.total_pay.normalize()),
        ];

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }

    /// The file a staff member's payslip is written to.
    pub fn path_for(output_dir: &Path, staff: &Staff) -> PathBuf {
        output_dir.join(format!("{}.txt", staff.name()))
    }

    /// Writes one payslip file per staff member, in roster order.
    ///
    /// The first failure aborts the remaining writes. Returns the paths written.
    pub fn generate(&self, staff: &[Staff], output_dir: &Path) -> PayrollResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(staff.len());

        for member in staff {
            let path = Self::path_for(output_dir, member);
            let text = self.render(member)?;
            Self::write_file(&path, &text)?;
            info!(name = member.name(), path = %path.display(), "Wrote payslip");
            written.push(path);
        }

        Ok(written)
    }

    fn write_file(path: &Path, text: &str) -> PayrollResult<()> {
        let to_error = |err: std::io::Error| PayrollError::PayslipWrite {
            path: path.display().to_string(),
            message: err.to_string(),
        };

        let file = File::create(path).map_err(to_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes()).map_err(to_error)?;
        writer.flush().map_err(to_error)
    }
}

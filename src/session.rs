//! Interactive payroll session.
//!
//! A [`Session`] walks through one payroll run on a console: it asks for the
//! year and month, loads the roster, asks for each staff member's hours,
//! prints their pay summary, writes payslips and then waits for a final
//! keypress. Input and output are generic so runs can be driven from memory.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayPeriod, Staff};
use crate::payslip::PaySlip;
use crate::roster::load_roster;

/// Printed before each staff member's pay summary.
pub const CALCULATING_MESSAGE: &str = "Calculating pay........";

/// Outcome of a completed payroll run.
#[derive(Debug, Clone, Serialize)]
pub struct PayRunSummary {
    /// Identifier recorded on the `payroll_run` span around every log line of the run.
    pub run_id: Uuid,
    /// The month and year paid.
    pub period: PayPeriod,
    /// The staff records with computed pay, in roster order.
    pub staff: Vec<Staff>,
    /// Payslip files written, in roster order.
    pub payslips: Vec<PathBuf>,
}

/// A console payroll run over any line reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: PayrollConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and printing to `output`.
    pub fn new(input: R, output: W, config: PayrollConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the session, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a full payroll session.
    pub fn run(&mut self) -> PayrollResult<PayRunSummary> {
        let run_id = Uuid::new_v4();
        let _run = info_span!("payroll_run", run_id = %run_id).entered();
        info!("Starting payroll run");

        let year = self.prompt_year()?;
        let month = self.prompt_month()?;
        let period = PayPeriod::new(month, year)?;

        let mut staff = load_roster(&self.config.roster_path)?;
        for member in &mut staff {
            self.prompt_hours(member)?;
        }

        let payslip = PaySlip::new(period, self.config.currency.clone());
        let payslips = payslip.generate(&staff, &self.config.output_dir)?;
        info!(
            period = %period,
            payslips = payslips.len(),
            "Payroll run complete"
        );

        self.pause()?;

        Ok(PayRunSummary {
            run_id,
            period,
            staff,
            payslips,
        })
    }

    /// Prompts until a year is entered.
    pub fn prompt_year(&mut self) -> PayrollResult<i32> {
        loop {
            write!(self.output, "\nPlease enter the year: ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match answer.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "{}. Please try again.", capitalize(&err))?,
            }
        }
    }

    /// Prompts until a month number from 1 to 12 is entered.
    pub fn prompt_month(&mut self) -> PayrollResult<i64> {
        loop {
            write!(self.output, "\nPlease enter the month: ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match answer.trim().parse::<i64>() {
                Ok(value) if (1..=12).contains(&value) => return Ok(value),
                Ok(value) => {
                    debug!(value, "Rejected month");
                    writeln!(self.output, "Month must be from 1 to 12. Please try again.")?;
                }
                Err(err) => writeln!(self.output, "{}. Please try again.", capitalize(&err))?,
            }
        }
    }

    /// Prompts for one staff member's hours, computes and prints their pay.
    ///
    /// Invalid input re-asks the same staff member.
    pub fn prompt_hours(&mut self, staff: &mut Staff) -> PayrollResult<()> {
        loop {
            write!(self.output, "\nEnter hours worked for {}: ", staff.name())?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match answer.trim().parse::<i32>() {
                Ok(hours) => {
                    staff.set_hours_worked(hours);
                    writeln!(self.output, "{}", CALCULATING_MESSAGE)?;
                    let audit = serde_json::to_string(&staff.calculate_pay().audit_steps);
                    match audit {
                        Ok(audit) => {
                            debug!(name = staff.name(), audit = %audit, "Pay audit trail");
                        }
                        Err(err) => {
                            warn!(
                                name = staff.name(),
                                error = %err,
                                "Failed to serialize pay audit trail"
                            );
                        }
                    }
                    writeln!(self.output, "{}", staff)?;
                    return Ok(());
                }
                Err(err) => {
                    warn!(name = staff.name(), input = answer.trim(), "Invalid hours");
                    writeln!(self.output, "{}", capitalize(&err))?;
                }
            }
        }
    }

    /// Blocks on one more line so a console window stays open.
    fn pause(&mut self) -> PayrollResult<()> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn read_answer(&mut self) -> PayrollResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::InputClosed);
        }
        Ok(line)
    }
}

fn capitalize(err: &impl std::fmt::Display) -> String {
    let message = err.to_string();
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            PayrollConfig::default(),
        )
    }

    fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_year_retries_after_invalid_input() {
        let mut session = session("abc\n2024\n");
        assert_eq!(session.prompt_year().unwrap(), 2024);

        let output = output_of(session);
        assert_eq!(output.matches("Please enter the year: ").count(), 2);
        assert!(output.contains("Invalid digit found in string. Please try again."));
    }

    #[test]
    fn test_year_zero_is_accepted() {
        let mut session = session("0\n");
        assert_eq!(session.prompt_year().unwrap(), 0);
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        let mut session = session("0\n13\n7\n");
        assert_eq!(session.prompt_month().unwrap(), 7);

        let output = output_of(session);
        assert_eq!(
            output
                .matches("Month must be from 1 to 12. Please try again.")
                .count(),
            2
        );
        assert_eq!(output.matches("Please enter the month: ").count(), 3);
    }

    #[test]
    fn test_month_accepted_on_first_valid_answer() {
        for month in 1..=12 {
            let mut session = session(&format!("{}\n", month));
            assert_eq!(session.prompt_month().unwrap(), month);
            assert_eq!(output_of(session).matches("Please enter the month: ").count(), 1);
        }
    }

    #[test]
    fn test_hours_retry_same_staff_member() {
        let mut session = session("lots\n170\n");
        let mut staff = Staff::admin("Carol");
        session.prompt_hours(&mut staff).unwrap();

        assert_eq!(staff.hours_worked(), 170);
        let output = output_of(session);
        assert_eq!(output.matches("Enter hours worked for Carol: ").count(), 2);
        assert_eq!(output.matches(CALCULATING_MESSAGE).count(), 1);
        assert!(output.ends_with("Calculating pay........\nName: Carol\nTotal Pay: 5255\n"));
    }

    #[test]
    fn test_negative_hours_are_clamped() {
        let mut session = session("-20\n");
        let mut staff = Staff::manager("Dan");
        session.prompt_hours(&mut staff).unwrap();
        assert_eq!(staff.hours_worked(), 0);
        assert_eq!(staff.total_pay(), rust_decimal::Decimal::ZERO);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut session = session("abc\n");
        match session.prompt_year() {
            Err(PayrollError::InputClosed) => {}
            other => panic!("Expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_run_with_missing_roster_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = PayrollConfig {
            roster_path: dir.path().join("staff.txt"),
            output_dir: dir.path().to_path_buf(),
            ..PayrollConfig::default()
        };
        let mut session = Session::new(Cursor::new(b"2024\n5\n".to_vec()), Vec::new(), config);

        let summary = session.run().unwrap();
        assert!(summary.staff.is_empty());
        assert!(summary.payslips.is_empty());
        assert_eq!(summary.period.to_string(), "MAY 2024");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_every_run_log_line_carries_run_id() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("staff.txt"), "Carol, Admin\n").unwrap();
        let config = PayrollConfig {
            roster_path: dir.path().join("staff.txt"),
            output_dir: dir.path().to_path_buf(),
            ..PayrollConfig::default()
        };
        let mut session = Session::new(
            Cursor::new(b"2024\n1\nx\n170\n\n".to_vec()),
            Vec::new(),
            config,
        );

        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let summary = tracing::subscriber::with_default(subscriber, || session.run()).unwrap();

        let output = logs.contents();
        let lines: Vec<_> = output.lines().filter(|line| !line.is_empty()).collect();
        let run_id = format!("run_id={}", summary.run_id);
        for message in [
            "Starting payroll run",
            "Loaded roster",
            "Invalid hours",
            "Calculated pay",
            "Pay audit trail",
            "Wrote payslip",
            "Payroll run complete",
        ] {
            assert!(
                lines.iter().any(|line| line.contains(message)),
                "missing log line '{}' in:\n{}",
                message,
                output
            );
        }
        for line in &lines {
            assert!(line.contains(&run_id), "line without run id: {}", line);
        }
    }

    #[test]
    fn test_run_summary_serializes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("staff.txt"), "Dan, Manager\n").unwrap();
        let config = PayrollConfig {
            roster_path: dir.path().join("staff.txt"),
            output_dir: dir.path().to_path_buf(),
            ..PayrollConfig::default()
        };
        let mut session = Session::new(
            Cursor::new(b"2024\n2\n100\n".to_vec()),
            Vec::new(),
            config,
        );
        let summary = session.run().unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["run_id"], summary.run_id.to_string());
        assert_eq!(json["period"]["month"], 2);
        assert_eq!(json["period"]["year"], 2024);
        assert_eq!(json["staff"][0]["name"], "Dan");
        assert_eq!(json["staff"][0]["role"], "manager");
        assert_eq!(json["staff"][0]["pay"]["total_pay"], "5000");
        assert_eq!(json["payslips"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(&"invalid digit"), "Invalid digit");
        assert_eq!(capitalize(&""), "");
    }
}

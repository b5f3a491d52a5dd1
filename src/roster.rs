//! Roster file parsing.
//!
//! A roster is a plain text file with one `<name>, <role>` entry per line.
//! Fields are separated by the literal `", "`; anything after the second
//! field is ignored. A missing roster file is treated as an empty roster.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Role, Staff};

/// Separator between the name and role fields.
pub const FIELD_SEPARATOR: &str = ", ";

/// Parses a single roster line.
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::Role;
/// use payroll_engine::roster::parse_roster_line;
///
/// let staff = parse_roster_line("Alice, Admin", 1).unwrap();
/// assert_eq!(staff.name(), "Alice");
/// assert_eq!(staff.role(), Role::Admin);
///
/// assert!(parse_roster_line("Alice", 1).is_err());
/// ```
pub fn parse_roster_line(line: &str, line_number: usize) -> PayrollResult<Staff> {
    let mut fields = line.split(FIELD_SEPARATOR);

    match (fields.next(), fields.next()) {
        (Some(name), Some(role_tag)) => {
            if name.is_empty() {
                warn!(line_number, "Roster entry has an empty name");
            }
            Ok(Staff::new(name, Role::from_roster_tag(role_tag)))
        }
        _ => Err(PayrollError::MalformedRosterLine {
            line_number,
            line: line.to_string(),
        }),
    }
}

/// Parses roster text into staff records, in file order.
///
/// The first malformed line aborts parsing.
pub fn parse_roster(content: &str) -> PayrollResult<Vec<Staff>> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| parse_roster_line(line, index + 1))
        .collect()
}

/// Loads the roster at `path`.
///
/// Returns an empty roster when the file does not exist. Any other read
/// failure, and any malformed line, is an error.
pub fn load_roster<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<Staff>> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Roster file not found, continuing with no staff");
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(PayrollError::RosterRead {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let staff = parse_roster(&content)?;
    info!(path = %path.display(), count = staff.len(), "Loaded roster");
    for member in &staff {
        debug!(name = member.name(), role = ?member.role(), "Roster entry");
    }
    Ok(staff)
}

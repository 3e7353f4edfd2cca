//! The CSV line produced for one temperature reading.

use std::fmt;

pub const DELIMITER: char = ',';

/// Drive serial used when `ComponentName` has no serial token.
pub const UNKNOWN_SERIAL: &str = "unknown";

/// One output row.
///
/// Fields are written in declaration order, joined by [`DELIMITER`], with
/// no quoting or escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub date: String,
    pub system_serial: String,
    pub component_type: String,
    pub drive_serial: String,
    pub status: String,
    pub severity: String,
    pub units: String,
    pub value: String,
}

impl OutputLine {
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.date,
            &self.system_serial,
            &self.component_type,
            &self.drive_serial,
            &self.status,
            &self.severity,
            &self.units,
            &self.value,
        ]
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

/// Drive serial from a `"<make> <serial>"` component name.
///
/// The second whitespace-separated token wins; anything shorter yields
/// [`UNKNOWN_SERIAL`].
pub fn drive_serial(component_name: &str) -> &str {
    component_name
        .split_whitespace()
        .nth(1)
        .unwrap_or(UNKNOWN_SERIAL)
}

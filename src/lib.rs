//! # drive-temps
//!
//! Extracts drive temperature readings from a storage appliance health dump
//! and renders them as CSV lines.
//!
//! ## Overview
//!
//! A health dump is a JSON array of loosely structured observations. Each
//! observation names its resource with an HRI, a slash-delimited path such
//! as `/appliance/SYS123/naa.5000C5001/drive/temperature`. Processing has
//! two stages:
//! - **Select**: keep records whose HRI ends with `/temperature`
//! - **Format**: validate one record and render
//!   `Date,system serial,ComponentType,drive serial,Status,Severity,Units,Value`
//!
//! Records that cannot be rendered produce no line. Any required field that
//! is absent, empty or zero counts as missing, so a genuine 0-degree reading
//! is dropped along with incomplete records.
//!
//! ## Example
//!
//! ```
//! use drive_temps::{Pipeline, parse_dump};
//!
//! let records = parse_dump(r#"[
//!     {"HRI": "/appliance/SYS123/naa.5000C5001/drive/temperature",
//!      "Date": "2023-01-01T00:00:00.000000000Z", "Value": 42,
//!      "ComponentName": "Seagate ST1000", "ComponentType": "Drive",
//!      "Severity": "OK", "Status": "Normal", "Units": "Celsius"},
//!     {"HRI": "/appliance/SYS123/naa.5000C5001/drive/voltage", "Value": 12}
//! ]"#).unwrap();
//!
//! let lines: Vec<String> = Pipeline::new().lines(&records).flatten().collect();
//! assert_eq!(
//!     lines,
//!     vec!["2023-01-01T00:00:00.000000000Z,SYS123,Drive,ST1000,Normal,OK,Celsius,42"]
//! );
//! ```

pub mod diagnostics;
pub mod dump;
pub mod error;
pub mod hri;
pub mod line;
pub mod pipeline;
pub mod record;
pub mod stage;

pub use diagnostics::SkipReport;
pub use dump::{load_dump, parse_dump, read_dump};
pub use error::{DumpError, SkipReason};
pub use hri::{HriPath, strip_wwn_prefix};
pub use line::OutputLine;
pub use pipeline::{Pipeline, elements_to_lines};
pub use record::HealthRecord;
pub use stage::{CsvLineFormatter, LineFormatter, Selector, TemperatureSelector};

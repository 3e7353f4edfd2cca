//! Pluggable pipeline stages.
//!
//! A pipeline has two seams: a [`Selector`] decides which records are
//! temperature readings, and a [`LineFormatter`] renders one selected record.
//! The default strategies are [`TemperatureSelector`] and
//! [`CsvLineFormatter`]. Plain closures implement both traits, so callers
//! can swap either stage without writing a type.

use crate::error::SkipReason;
use crate::hri::{self, HriPath};
use crate::line::{self, OutputLine};
use crate::record::{
    COMPONENT_NAME, COMPONENT_TYPE, DATE, HRI, HealthRecord, SEVERITY, STATUS, UNITS, VALUE,
    render_value,
};

/// Chooses which records enter the formatting stage.
pub trait Selector {
    /// Whether one record should be kept.
    fn accepts(&self, record: &HealthRecord) -> bool;

    /// Lazily filter a sequence of records, preserving order.
    fn select<'a, I>(&'a self, records: I) -> impl Iterator<Item = &'a HealthRecord>
    where
        I: IntoIterator<Item = &'a HealthRecord>,
        Self: Sized,
    {
        records.into_iter().filter(move |record| self.accepts(record))
    }

    /// The display name of this stage.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Renders a single selected record.
pub trait LineFormatter {
    /// Produce the line for `record`, or the reason it has none.
    ///
    /// Must be a pure function of the record.
    fn format(&self, record: &HealthRecord) -> Result<String, SkipReason>;

    /// The display name of this stage.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Selector for F
where
    F: Fn(&HealthRecord) -> bool,
{
    fn accepts(&self, record: &HealthRecord) -> bool {
        self(record)
    }
}

impl<F> LineFormatter for F
where
    F: Fn(&HealthRecord) -> Result<String, SkipReason>,
{
    fn format(&self, record: &HealthRecord) -> Result<String, SkipReason> {
        self(record)
    }
}

/// Keeps records whose HRI ends with `/temperature`.
///
/// A missing or non-string HRI never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureSelector;

impl Selector for TemperatureSelector {
    fn accepts(&self, record: &HealthRecord) -> bool {
        hri::is_temperature(record.hri())
    }

    fn name(&self) -> &str {
        "temperature"
    }
}

/// Fields that must be truthy before a line is formed, in check order.
pub const REQUIRED_FIELDS: [&str; 8] = [
    HRI,
    COMPONENT_NAME,
    COMPONENT_TYPE,
    DATE,
    SEVERITY,
    STATUS,
    UNITS,
    VALUE,
];

/// Formats drive temperature records as comma-separated lines.
///
/// Any required field that is absent, empty, `false` or numerically zero
/// rejects the record. A 0-degree reading is rejected too.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLineFormatter;

impl CsvLineFormatter {
    /// Validate `record` and build its [`OutputLine`].
    pub fn output_line(&self, record: &HealthRecord) -> Result<OutputLine, SkipReason> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| !record.has_value(key)) {
            return Err(SkipReason::MissingField(*missing));
        }

        let hri = record.get_str(HRI).ok_or(SkipReason::NotText(HRI))?;
        let path = HriPath::parse(hri)?;
        let component_name = record
            .get_str(COMPONENT_NAME)
            .ok_or(SkipReason::NotText(COMPONENT_NAME))?;

        Ok(OutputLine {
            date: text(record, DATE),
            system_serial: path.system_serial().to_string(),
            component_type: text(record, COMPONENT_TYPE),
            drive_serial: line::drive_serial(component_name).to_string(),
            status: text(record, STATUS),
            severity: text(record, SEVERITY),
            units: text(record, UNITS),
            value: text(record, VALUE),
        })
    }
}

impl LineFormatter for CsvLineFormatter {
    fn format(&self, record: &HealthRecord) -> Result<String, SkipReason> {
        self.output_line(record).map(|line| line.to_string())
    }

    fn name(&self) -> &str {
        "csv"
    }
}

fn text(record: &HealthRecord, key: &str) -> String {
    record.get(key).map(render_value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn drive_record() -> HealthRecord {
        serde_json::from_value(json!({
            "HRI": "/appliance/SYS123/naa.5000C5001/drive/temperature",
            "Date": "2023-01-01T00:00:00.000000000Z",
            "Value": 42,
            "ComponentName": "Seagate ST1000",
            "ComponentType": "Drive",
            "Severity": "OK",
            "Status": "Normal",
            "Units": "Celsius"
        }))
        .unwrap()
    }

    #[test]
    fn test_temperature_selector_accepts() {
        assert!(TemperatureSelector.accepts(&drive_record()));
        let voltage = drive_record().with(HRI, "/appliance/SYS123/naa.1/drive/voltage");
        assert!(!TemperatureSelector.accepts(&voltage));
        assert!(!TemperatureSelector.accepts(&HealthRecord::new()));
    }

    #[test]
    fn test_select_preserves_order() {
        let records = vec![
            drive_record().with(DATE, "first"),
            drive_record().with(HRI, "/x/y/z/fan/speed"),
            drive_record().with(DATE, "second"),
            HealthRecord::new(),
        ];
        let dates: Vec<&str> = TemperatureSelector
            .select(&records)
            .map(|r| r.get_str(DATE).unwrap())
            .collect();
        assert_eq!(dates, vec!["first", "second"]);
    }

    #[test]
    fn test_closure_selector() {
        let records = vec![drive_record(), drive_record().with(VALUE, 30)];
        let hot = |r: &HealthRecord| r.get(VALUE).and_then(Value::as_i64) > Some(40);
        assert_eq!(hot.select(&records).count(), 1);
        assert_eq!(Selector::name(&hot), "custom");
    }

    #[test]
    fn test_format_drive_record() {
        assert_eq!(
            CsvLineFormatter.format(&drive_record()).unwrap(),
            "2023-01-01T00:00:00.000000000Z,SYS123,Drive,ST1000,Normal,OK,Celsius,42"
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let record = drive_record();
        assert_eq!(
            CsvLineFormatter.format(&record),
            CsvLineFormatter.format(&record)
        );
    }

    #[test]
    fn test_format_rejects_each_missing_field() {
        for key in REQUIRED_FIELDS {
            let mut record = drive_record();
            record.insert(key, Value::Null);
            assert_eq!(
                CsvLineFormatter.format(&record),
                Err(SkipReason::MissingField(key)),
                "null {key}"
            );

            let record = drive_record().with(key, "");
            assert_eq!(
                CsvLineFormatter.format(&record),
                Err(SkipReason::MissingField(key)),
                "empty {key}"
            );
        }
    }

    #[test]
    fn test_format_rejects_absent_field() {
        let mut fields = serde_json::Map::new();
        for (key, value) in [("HRI", "/a/b/c/d/temperature"), ("Date", "now")] {
            fields.insert(key.to_string(), json!(value));
        }
        let record = HealthRecord::from(fields);
        assert_eq!(
            CsvLineFormatter.format(&record),
            Err(SkipReason::MissingField(COMPONENT_NAME))
        );
    }

    #[test]
    fn test_format_rejects_zero_value() {
        let record = drive_record().with(VALUE, 0);
        assert_eq!(
            CsvLineFormatter.format(&record),
            Err(SkipReason::MissingField(VALUE))
        );
        let record = drive_record().with(VALUE, 0.0);
        assert!(CsvLineFormatter.format(&record).is_err());
    }

    #[test]
    fn test_format_rejects_false() {
        let record = drive_record().with(STATUS, false);
        assert_eq!(
            CsvLineFormatter.format(&record),
            Err(SkipReason::MissingField(STATUS))
        );
    }

    #[test]
    fn test_format_rejects_short_hri() {
        let record = drive_record().with(HRI, "/SYS123/drive/temperature");
        assert_eq!(
            CsvLineFormatter.format(&record),
            Err(SkipReason::ShortPath(3))
        );
    }

    #[test]
    fn test_format_rejects_non_text_paths() {
        let record = drive_record().with(HRI, 12345);
        assert_eq!(CsvLineFormatter.format(&record), Err(SkipReason::NotText(HRI)));
        let record = drive_record().with(COMPONENT_NAME, json!(["Seagate", "ST1000"]));
        assert_eq!(
            CsvLineFormatter.format(&record),
            Err(SkipReason::NotText(COMPONENT_NAME))
        );
    }

    #[test]
    fn test_format_unknown_drive_serial() {
        let record = drive_record().with(COMPONENT_NAME, "SingleToken");
        let line = CsvLineFormatter.output_line(&record).unwrap();
        assert_eq!(line.drive_serial, "unknown");
    }

    #[test]
    fn test_format_renders_values_naturally() {
        let record = drive_record().with(VALUE, 41.5);
        assert!(CsvLineFormatter.format(&record).unwrap().ends_with(",Celsius,41.5"));
        let record = drive_record().with(VALUE, "38");
        assert!(CsvLineFormatter.format(&record).unwrap().ends_with(",Celsius,38"));
    }

    #[test]
    fn test_format_does_not_emit_wwn() {
        let line = CsvLineFormatter.format(&drive_record()).unwrap();
        assert!(!line.contains("5000C5001"));
    }

    #[test]
    fn test_closure_formatter() {
        let fmt = |r: &HealthRecord| -> Result<String, SkipReason> {
            r.get_str(DATE)
                .map(str::to_string)
                .ok_or(SkipReason::MissingField(DATE))
        };
        assert_eq!(
            fmt.format(&drive_record()).unwrap(),
            "2023-01-01T00:00:00.000000000Z"
        );
        assert_eq!(LineFormatter::name(&fmt), "custom");
        assert_eq!(LineFormatter::name(&CsvLineFormatter), "csv");
    }
}

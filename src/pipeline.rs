//! Composition of a selector and a formatter over a sequence of records.
//!
//! Records are pulled one at a time: each is checked by the selector and,
//! if kept, formatted before the next one is read.

use tracing::debug;

use crate::diagnostics::SkipReport;
use crate::error::SkipReason;
use crate::record::HealthRecord;
use crate::stage::{CsvLineFormatter, LineFormatter, Selector, TemperatureSelector};

/// A selector followed by a line formatter.
///
/// The default pipeline keeps temperature readings and renders them as CSV.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<S = TemperatureSelector, F = CsvLineFormatter> {
    selector: S,
    formatter: F,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Selector, F: LineFormatter> Pipeline<S, F> {
    /// Build a pipeline from explicit stages.
    pub fn from_stages(selector: S, formatter: F) -> Self {
        Self {
            selector,
            formatter,
        }
    }

    /// Replace the selector, keeping the formatter.
    pub fn with_selector<S2: Selector>(self, selector: S2) -> Pipeline<S2, F> {
        Pipeline {
            selector,
            formatter: self.formatter,
        }
    }

    /// Replace the formatter, keeping the selector.
    pub fn with_formatter<F2: LineFormatter>(self, formatter: F2) -> Pipeline<S, F2> {
        Pipeline {
            selector: self.selector,
            formatter,
        }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Lazily format every selected record, keeping the skip reason.
    pub fn outcomes<'a, I>(&'a self, records: I) -> impl Iterator<Item = Result<String, SkipReason>>
    where
        I: IntoIterator<Item = &'a HealthRecord>,
    {
        compose(&self.selector, &self.formatter, records)
    }

    /// Lazily format every selected record, `None` marking a record that
    /// could not be rendered. Output follows input order.
    pub fn lines<'a, I>(&'a self, records: I) -> impl Iterator<Item = Option<String>>
    where
        I: IntoIterator<Item = &'a HealthRecord>,
    {
        self.outcomes(records).map(Result::ok)
    }

    /// Drive the pipeline to completion, handing each line to `emit`.
    ///
    /// Stops at the first error returned by `emit`. Records that produce no
    /// line are only counted. Records are composed exactly as in
    /// [`outcomes`](Self::outcomes), so `seen` counts the records the
    /// selector actually pulled from the input.
    pub fn run<'a, I, W, E>(&'a self, records: I, mut emit: W) -> Result<SkipReport, E>
    where
        I: IntoIterator<Item = &'a HealthRecord>,
        W: FnMut(String) -> Result<(), E>,
    {
        let mut report = SkipReport::new();
        let mut seen = 0;
        let counted = records.into_iter().inspect(|_| seen += 1);
        for outcome in compose(&self.selector, &self.formatter, counted) {
            report.selected += 1;
            match outcome {
                Ok(line) => {
                    emit(line)?;
                    report.emitted += 1;
                }
                Err(reason) => report.record_skip(reason),
            }
        }
        report.seen = seen;

        debug!(
            selector = self.selector.name(),
            formatter = self.formatter.name(),
            seen = report.seen,
            selected = report.selected,
            emitted = report.emitted,
            "pipeline finished"
        );
        Ok(report)
    }
}

/// Select with `selector`, then format each survivor with `formatter`.
fn compose<'a, S, F, I>(
    selector: &'a S,
    formatter: &'a F,
    records: I,
) -> impl Iterator<Item = Result<String, SkipReason>>
where
    S: Selector,
    F: LineFormatter,
    I: IntoIterator<Item = &'a HealthRecord>,
{
    selector
        .select(records)
        .map(move |record| formatter.format(record))
}

/// Format the temperature readings in `records` with the default stages.
pub fn elements_to_lines(records: &[HealthRecord]) -> impl Iterator<Item = Option<String>> + '_ {
    compose(&TemperatureSelector, &CsvLineFormatter, records).map(Result::ok)
}

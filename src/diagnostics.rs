//! Counts of what a pipeline run kept and dropped.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SkipReason;

/// Summary of one [`Pipeline::run`](crate::Pipeline::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipReport {
    /// Records fed to the pipeline.
    pub seen: usize,
    /// Records accepted by the selector.
    pub selected: usize,
    /// Lines produced by the formatter.
    pub emitted: usize,
    /// Selected records that produced no line, by reason.
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl SkipReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    /// Records the selector turned away.
    pub fn excluded(&self) -> usize {
        self.seen.saturating_sub(self.selected)
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

impl fmt::Display for SkipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Records:  {} in -> {} selected -> {} out",
            self.seen, self.selected, self.emitted
        )?;
        for (reason, count) in &self.skipped {
            write!(f, "\nSkipped:  {count} ({reason})")?;
        }
        Ok(())
    }
}

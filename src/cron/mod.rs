//! Cron parsing, description and next-run computation.
//!
//! Schedules are interpreted in UTC, as the cloud scheduler runs them. The
//! next run is then shown in the configured report timezone.

use crate::config::ReportTimezone;
use crate::error::CronError;
use chrono::{DateTime, Utc};
use std::fmt;

mod description;
mod expression;
mod schedule;

pub use expression::{CronExpression, CronField, FieldItem, FieldKind};
pub use schedule::next_occurrence;

/// A described schedule: the recurrence sentence and its next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDescription {
    pub sentence: String,
    pub next_run: DateTime<Utc>,
    pub timezone: ReportTimezone,
}

impl ScheduleDescription {
    /// The next run as a 12-hour wall-clock time in the report timezone.
    pub fn local_time(&self) -> String {
        self.timezone.format_time(self.next_run)
    }
}

impl fmt::Display for ScheduleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (UTC) --- [ {} - ({}) ]",
            self.sentence,
            self.local_time(),
            self.timezone.label()
        )
    }
}

/// Describes cron expressions relative to a report timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct CronDescriber {
    timezone: ReportTimezone,
}

impl CronDescriber {
    pub fn new(timezone: ReportTimezone) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> ReportTimezone {
        self.timezone
    }

    /// Describes `expression` with its next run after the current instant.
    pub fn describe(&self, expression: &str) -> Result<ScheduleDescription, CronError> {
        self.describe_at(expression, Utc::now())
    }

    /// Describes `expression` with its next run after `now`.
    pub fn describe_at(
        &self,
        expression: &str,
        now: DateTime<Utc>,
    ) -> Result<ScheduleDescription, CronError> {
        let parsed = CronExpression::parse(expression)?;
        let next_run = next_occurrence(&parsed, now)?;
        Ok(ScheduleDescription {
            sentence: parsed.describe(),
            next_run,
            timezone: self.timezone,
        })
    }
}

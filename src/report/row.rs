use super::{ReportKind, SortKey};
use crate::cron::CronDescriber;
use crate::error::CronError;
use crate::model::FlowGroup;
use chrono::{DateTime, Utc};

/// Description column of a flow group without any clock.
pub const NOT_CONFIGURED: &str = "[!] - [Not Configured yet]";

/// Schedule sort key of a flow group without any clock.
pub const NO_SCHEDULE_SORT_KEY: &str = "N/A";

pub const ACTIVE_BADGE: &str = "[ YES ]";
pub const INACTIVE_BADGE: &str = "[-]";

/// A parameterized clock listed under its flow group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockLine {
    pub parameters: String,
    pub description: String,
}

/// One flow group as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Versioned name of the latest flow.
    pub workflow: String,
    /// Plain name of the latest flow.
    pub flow_name: String,
    pub project: String,
    pub active: bool,
    pub description: String,
    /// Description of the primary clock, or `N/A`.
    pub schedule_key: String,
    pub clock_lines: Vec<ClockLine>,
}

impl ReportRow {
    /// Builds the row, describing every clock of the flow group.
    ///
    /// Any malformed cron clock fails the row, even one that is not displayed.
    pub fn build(
        flow_group: &FlowGroup,
        kind: ReportKind,
        describer: &CronDescriber,
        now: DateTime<Utc>,
    ) -> Result<Self, CronError> {
        let latest = flow_group.latest_flow();
        let clocks = flow_group.schedules();
        let descriptions = clocks
            .iter()
            .map(|clock| clock.describe(describer, now))
            .collect::<Result<Vec<_>, _>>()?;

        let primary = descriptions.first().cloned();
        let mut clock_lines = Vec::new();

        let description = match kind {
            ReportKind::ActiveSchedules | ReportKind::ScheduleConfigurations => {
                primary.clone().unwrap_or_default()
            }
            ReportKind::General => match clocks {
                [] => NOT_CONFIGURED.to_string(),
                [clock] if !clock.has_parameters() => primary.clone().unwrap_or_default(),
                _ => {
                    clock_lines = clocks
                        .iter()
                        .zip(&descriptions)
                        .filter(|(clock, _)| clock.has_parameters())
                        .map(|(clock, description)| ClockLine {
                            parameters: clock.parameters_json(),
                            description: description.clone(),
                        })
                        .collect();
                    String::new()
                }
            },
        };

        Ok(Self {
            workflow: latest.versioned_name(),
            flow_name: latest.name.clone(),
            project: flow_group.project().name.clone(),
            active: latest.schedule_active,
            description,
            schedule_key: primary.unwrap_or_else(|| NO_SCHEDULE_SORT_KEY.to_string()),
            clock_lines,
        })
    }

    pub fn active_badge(&self) -> &'static str {
        if self.active {
            ACTIVE_BADGE
        } else {
            INACTIVE_BADGE
        }
    }
}

impl SortKey {
    /// Stable sort of the rows of one project.
    pub fn sort_rows(&self, rows: &mut [ReportRow]) {
        match self {
            SortKey::Name => rows.sort_by(|a, b| a.flow_name.cmp(&b.flow_name)),
            SortKey::Active => rows.sort_by_key(|row| !row.active),
            SortKey::Schedule => rows.sort_by(|a, b| a.schedule_key.cmp(&b.schedule_key)),
        }
    }
}

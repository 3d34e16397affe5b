//! Schedule reports over flow groups.
//!
//! Each report is a pipeline: fetch, model, filter, group by project,
//! describe, sort, render. Every fallible step completes before any output
//! is written, so a broken record fails the whole report instead of leaving
//! a partial one behind.

use crate::client::{CloudApiClient, extract_records, response_data};
use crate::config::Settings;
use crate::cron::CronDescriber;
use crate::error::{QueryError, ReportError};
use crate::model::{Flow, FlowGroup, RawFlow, RawFlowGroup};
use crate::query::{Entity, Mutation, NamedQuery};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info, warn};

mod grouping;
mod render;
mod row;

pub use grouping::{ProjectBucket, group_by_project};
pub use render::{ProjectSection, Report, SEPARATOR_WIDTH, SORT_MARKER};
pub use row::{
    ACTIVE_BADGE, ClockLine, INACTIVE_BADGE, NO_SCHEDULE_SORT_KEY, NOT_CONFIGURED, ReportRow,
};

/// The available reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Flow groups whose primary clock is a cron clock, with its description.
    ActiveSchedules,
    /// Like `ActiveSchedules`, plus the active badge of the latest flow.
    ScheduleConfigurations,
    /// Every flow group, including unscheduled and multi-clock ones.
    General,
}

impl ReportKind {
    /// Whether the report honours a sort key.
    pub fn supports_sort(&self) -> bool {
        !matches!(self, ReportKind::ActiveSchedules)
    }

    /// Whether a flow group is listed in this report.
    pub fn includes(&self, flow_group: &FlowGroup) -> bool {
        match self {
            ReportKind::ActiveSchedules | ReportKind::ScheduleConfigurations => {
                flow_group.has_cron_primary()
            }
            ReportKind::General => true,
        }
    }

    /// The query issued for one project filter.
    ///
    /// Both scheduled reports list flow groups with an active flow schedule.
    pub fn query<'a>(&self, project: Option<&'a str>) -> NamedQuery<'a> {
        match self {
            ReportKind::ActiveSchedules | ReportKind::ScheduleConfigurations => {
                NamedQuery::ScheduledWorkflows { project }
            }
            ReportKind::General => NamedQuery::AllFlowGroups { project },
        }
    }
}

/// Order of the rows within each project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Latest flow name, lexicographic.
    Name,
    /// Active schedules first.
    Active,
    /// Primary clock description, lexicographic.
    Schedule,
}

/// Result of activating the schedules of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationSummary {
    /// Versioned names of the flows whose schedule was turned on.
    pub activated: Vec<String>,
    pub already_active: usize,
    /// Versioned names of the flows the API refused to activate.
    pub rejected: Vec<String>,
}

/// Runs reports and schedule maintenance against a cloud API client.
pub struct Reporter<C: CloudApiClient> {
    client: C,
    describer: CronDescriber,
}

impl<C: CloudApiClient> Reporter<C> {
    pub fn new(client: C, settings: &Settings) -> Self {
        Self::with_describer(client, CronDescriber::new(settings.timezone))
    }

    pub fn with_describer(client: C, describer: CronDescriber) -> Self {
        Self { client, describer }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetches and models the flow groups a report is built from.
    ///
    /// One query per project filter, in the given order; a single unfiltered
    /// query when there are none.
    pub fn fetch_flow_groups(
        &self,
        kind: ReportKind,
        projects: &[String],
    ) -> Result<Vec<FlowGroup>, ReportError> {
        let filters: Vec<Option<&str>> = if projects.is_empty() {
            vec![None]
        } else {
            projects.iter().map(|p| Some(p.as_str())).collect()
        };

        let mut flow_groups = Vec::new();
        for project in filters {
            let query = kind.query(project).render();
            debug!(?kind, ?project, "Executing flow group query");
            let response = self.client.execute(&query)?;
            let records: Vec<RawFlowGroup> =
                extract_records(response, Entity::FlowGroup.field())?;
            debug!(count = records.len(), ?project, "Fetched flow group records");

            for record in records {
                flow_groups.push(FlowGroup::try_from(record)?);
            }
        }
        Ok(flow_groups)
    }

    /// Builds a report with next runs relative to the current instant.
    pub fn build(
        &self,
        kind: ReportKind,
        projects: &[String],
        sort: Option<SortKey>,
    ) -> Result<Report, ReportError> {
        self.build_at(kind, projects, sort, Utc::now())
    }

    /// Builds a report with next runs relative to `now`.
    pub fn build_at(
        &self,
        kind: ReportKind,
        projects: &[String],
        sort: Option<SortKey>,
        now: DateTime<Utc>,
    ) -> Result<Report, ReportError> {
        let sort = sort.filter(|_| kind.supports_sort());
        let fetched = self.fetch_flow_groups(kind, projects)?;
        let total = fetched.len();

        let included: Vec<FlowGroup> = fetched
            .into_iter()
            .filter(|flow_group| {
                let keep = kind.includes(flow_group);
                if !keep {
                    debug!(
                        flow_group = flow_group.name(),
                        "Skipping flow group without cron primary clock"
                    );
                }
                keep
            })
            .collect();
        info!(?kind, total, listed = included.len(), "Building report");

        let mut sections = Vec::new();
        for bucket in group_by_project(included) {
            let mut rows = bucket
                .flow_groups
                .iter()
                .map(|flow_group| ReportRow::build(flow_group, kind, &self.describer, now))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(sort) = sort {
                sort.sort_rows(&mut rows);
            }
            sections.push(ProjectSection {
                project: bucket.project,
                rows,
            });
        }

        Ok(Report {
            kind,
            sort,
            sections,
        })
    }

    /// Builds a report and writes it to `out`.
    pub fn write_report<W: Write>(
        &self,
        kind: ReportKind,
        projects: &[String],
        sort: Option<SortKey>,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let report = self.build(kind, projects, sort)?;
        report.render(out)?;
        Ok(())
    }

    /// Turns on the schedule of every flow of a project that is not active yet.
    pub fn activate_project_schedules(
        &self,
        project: &str,
    ) -> Result<ActivationSummary, ReportError> {
        let query = NamedQuery::flows(Some(project)).render();
        let response = self.client.execute(&query)?;
        let records: Vec<RawFlow> = extract_records(response, Entity::Flow.field())?;

        let mut summary = ActivationSummary::default();
        for record in records {
            let flow = Flow::try_from(record)?;
            if flow.schedule_active {
                summary.already_active += 1;
                continue;
            }

            let mutation = Mutation::set_schedule_active(&flow.id);
            if self.execute_mutation(&mutation)? {
                info!(flow = %flow.versioned_name(), "Activated schedule");
                summary.activated.push(flow.versioned_name());
            } else {
                warn!(flow = %flow.versioned_name(), "API refused to activate schedule");
                summary.rejected.push(flow.versioned_name());
            }
        }
        Ok(summary)
    }

    /// Replaces the schedule of a flow group with one cron clock.
    ///
    /// The expression is validated locally before anything is sent.
    pub fn set_cron_schedule(&self, flow_group_id: &str, cron: &str) -> Result<bool, ReportError> {
        let mutation = Mutation::set_flow_group_schedule(flow_group_id, cron)?;
        self.execute_mutation(&mutation)
    }

    fn execute_mutation(&self, mutation: &Mutation) -> Result<bool, ReportError> {
        let response = self.client.execute(&mutation.render())?;
        let data = response_data(response)?;
        data.get(mutation.name())
            .and_then(|result| result.get("success"))
            .and_then(Value::as_bool)
            .ok_or_else(|| QueryError::MissingField(mutation.name().to_string()).into())
    }
}

use super::flow::{Flow, Project};
use super::wire::{RawClock, RawFlowGroup};
use crate::cron::CronDescriber;
use crate::error::{CronError, ModelError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Clock type name the API uses for cron-based clocks.
pub const CRON_CLOCK: &str = "CronClock";

/// Rendered in place of a description for clocks that are not cron-based.
pub const NOT_DESCRIBABLE: &str = "NA";

/// The kind of trigger a clock represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockKind {
    Cron,
    /// Any other clock type, keeping the name the API reported.
    Unsupported(String),
}

/// One trigger definition within a flow group schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleClock {
    pub kind: ClockKind,
    /// Empty unless the clock is cron-based.
    pub cron_expression: String,
    /// Parameter overrides applied when this clock fires.
    pub parameters: Map<String, Value>,
}

impl ScheduleClock {
    pub fn is_cron(&self) -> bool {
        self.kind == ClockKind::Cron
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Human description of the clock, or `NA` when it is not cron-based.
    ///
    /// A cron-based clock with a malformed expression is an error, never `NA`.
    pub fn describe(
        &self,
        describer: &CronDescriber,
        now: DateTime<Utc>,
    ) -> Result<String, CronError> {
        if !self.is_cron() {
            return Ok(NOT_DESCRIBABLE.to_string());
        }
        describer
            .describe_at(&self.cron_expression, now)
            .map(|description| description.to_string())
    }

    /// The parameter mapping as compact JSON.
    pub fn parameters_json(&self) -> String {
        Value::Object(self.parameters.clone()).to_string()
    }
}

impl From<RawClock> for ScheduleClock {
    fn from(raw: RawClock) -> Self {
        let kind = match raw.kind.as_deref() {
            Some(CRON_CLOCK) => ClockKind::Cron,
            other => ClockKind::Unsupported(other.unwrap_or_default().to_string()),
        };
        let cron_expression = match kind {
            ClockKind::Cron => raw.cron.unwrap_or_default(),
            ClockKind::Unsupported(_) => String::new(),
        };
        Self {
            kind,
            cron_expression,
            parameters: raw.parameter_defaults.unwrap_or_default(),
        }
    }
}

/// The scheduling unit: a set of flow versions sharing one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGroup {
    id: String,
    name: String,
    labels: Vec<String>,
    schedules: Vec<ScheduleClock>,
    flows: Vec<Flow>,
    project: Project,
}

impl FlowGroup {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Clocks in the order the API returned them.
    pub fn schedules(&self) -> &[ScheduleClock] {
        &self.schedules
    }

    /// Flows sorted by version, highest first. Never empty.
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    /// Project of the highest-version flow.
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn latest_flow(&self) -> &Flow {
        &self.flows[0]
    }

    /// The first clock, authoritative when it is the only one.
    pub fn primary_clock(&self) -> Option<&ScheduleClock> {
        self.schedules.first()
    }

    pub fn has_cron_primary(&self) -> bool {
        self.primary_clock().is_some_and(ScheduleClock::is_cron)
    }

    pub fn is_schedule_active(&self) -> bool {
        self.latest_flow().schedule_active
    }
}

impl TryFrom<RawFlowGroup> for FlowGroup {
    type Error = ModelError;

    fn try_from(raw: RawFlowGroup) -> Result<Self, Self::Error> {
        let mut flows = raw
            .flows
            .into_iter()
            .map(Flow::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        flows.sort_by(|a, b| b.version.cmp(&a.version));

        let project = flows
            .first()
            .map(|flow| flow.project.clone())
            .ok_or_else(|| ModelError::EmptyFlowGroup {
                id: raw.id.clone(),
                name: raw.name.clone(),
            })?;

        let schedules = raw
            .schedule
            .and_then(|schedule| schedule.clocks)
            .unwrap_or_default()
            .into_iter()
            .map(ScheduleClock::from)
            .collect();

        Ok(Self {
            id: raw.id,
            name: raw.name,
            labels: raw.labels.unwrap_or_default(),
            schedules,
            flows,
            project,
        })
    }
}

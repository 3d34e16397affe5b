use super::builder::{Entity, GraphQlQuery, Mutation};
use super::clause::{Comparison, OrderByClause};
use super::value::GraphQlValue;
use crate::cron::CronExpression;
use crate::error::CronError;

/// Fields selected for every flow group query.
pub const FLOW_GROUP_FIELDS: &[&str] = &[
    "name",
    "id",
    "labels",
    "schedule",
    "flows { id name version is_schedule_active project { id name } }",
];

/// Fields selected for flow queries.
pub const FLOW_FIELDS: &[&str] = &[
    "name",
    "id",
    "is_schedule_active",
    "version",
    "project { id name }",
];

pub const DEFAULT_FLOW_ORDER: &str = "version";
pub const DEFAULT_FLOW_GROUP_ORDER: &str = "updated";
const CREATED: &str = "created";

const FLOW_PROJECT_NAME: &[&str] = &["project", "name"];
const FLOW_GROUP_PROJECT_NAME: &[&str] = &["flows", "project", "name"];

/// The read queries the reports and maintenance routines issue.
///
/// `Flows` and `FlowGroups` select one project by its exact name. The report
/// queries match project names as case-insensitive substrings. A blank
/// project selects every project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedQuery<'a> {
    /// Flows of a project.
    Flows {
        project: Option<&'a str>,
        order_by: Option<OrderByClause>,
    },
    /// Flow groups of a project.
    FlowGroups {
        project: Option<&'a str>,
        order_by: Option<OrderByClause>,
    },
    /// Flow groups with at least one flow whose schedule is active.
    ScheduledWorkflows { project: Option<&'a str> },
    /// Flow groups whose schedule carries clocks.
    ScheduledConfigurations { project: Option<&'a str> },
    /// Every flow group.
    AllFlowGroups { project: Option<&'a str> },
}

impl<'a> NamedQuery<'a> {
    /// Flows of a project, newest version first.
    pub fn flows(project: Option<&'a str>) -> Self {
        NamedQuery::Flows {
            project,
            order_by: Some(OrderByClause::desc(DEFAULT_FLOW_ORDER)),
        }
    }

    /// Flow groups of a project, most recently updated first.
    pub fn flow_groups(project: Option<&'a str>) -> Self {
        NamedQuery::FlowGroups {
            project,
            order_by: Some(OrderByClause::desc(DEFAULT_FLOW_GROUP_ORDER)),
        }
    }

    pub fn entity(&self) -> Entity {
        match self {
            NamedQuery::Flows { .. } => Entity::Flow,
            _ => Entity::FlowGroup,
        }
    }

    pub fn build(&self) -> GraphQlQuery {
        match self {
            NamedQuery::Flows { project, order_by } => GraphQlQuery::builder(Entity::Flow)
                .with_project_name(FLOW_PROJECT_NAME, *project)
                .with_order_by(order_by.clone())
                .with_fields(FLOW_FIELDS)
                .build(),
            NamedQuery::FlowGroups { project, order_by } => {
                GraphQlQuery::builder(Entity::FlowGroup)
                    .with_project_name(FLOW_GROUP_PROJECT_NAME, *project)
                    .with_order_by(order_by.clone())
                    .with_fields(FLOW_GROUP_FIELDS)
                    .build()
            }
            NamedQuery::ScheduledWorkflows { project } => GraphQlQuery::builder(Entity::FlowGroup)
                .with_filter(
                    &["flows", "is_schedule_active"],
                    Comparison::Equals(GraphQlValue::Bool(true)),
                )
                .with_project_filter(FLOW_GROUP_PROJECT_NAME, *project)
                .with_order_by(Some(OrderByClause::desc(CREATED)))
                .with_fields(FLOW_GROUP_FIELDS)
                .build(),
            NamedQuery::ScheduledConfigurations { project } => {
                GraphQlQuery::builder(Entity::FlowGroup)
                    .with_filter(&["schedule"], Comparison::HasAnyKey("clocks".to_string()))
                    .with_project_filter(FLOW_GROUP_PROJECT_NAME, *project)
                    .with_order_by(Some(OrderByClause::desc(CREATED)))
                    .with_fields(FLOW_GROUP_FIELDS)
                    .build()
            }
            NamedQuery::AllFlowGroups { project } => GraphQlQuery::builder(Entity::FlowGroup)
                .with_project_filter(FLOW_GROUP_PROJECT_NAME, *project)
                .with_order_by(Some(OrderByClause::desc(CREATED)))
                .with_fields(FLOW_GROUP_FIELDS)
                .build(),
        }
    }

    pub fn render(&self) -> String {
        self.build().render()
    }
}

impl Mutation {
    /// Turns on the schedule of a flow.
    pub fn set_schedule_active(flow_id: &str) -> Self {
        Mutation::new(
            "set_schedule_active",
            GraphQlValue::object([("flow_id", GraphQlValue::string(flow_id))]),
        )
    }

    /// Replaces the schedule of a flow group with a single cron clock.
    pub fn set_flow_group_schedule(flow_group_id: &str, cron: &str) -> Result<Self, CronError> {
        let expression = CronExpression::parse(cron)?;
        let clock = GraphQlValue::object([("cron", GraphQlValue::string(expression.source()))]);
        Ok(Mutation::new(
            "set_flow_group_schedule",
            GraphQlValue::object([
                ("flow_group_id", GraphQlValue::string(flow_group_id)),
                ("cron_clocks", GraphQlValue::List(vec![clock])),
            ]),
        ))
    }
}

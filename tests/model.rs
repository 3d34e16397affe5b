//! Tests for decoding API records into the domain model.
mod common;
use common::*;
use flowsched::cron::CronDescriber;
use flowsched::error::ModelError;
use flowsched::model::{
    CRON_CLOCK, ClockKind, Flow, FlowGroup, NOT_DESCRIBABLE, RawFlow, RawFlowGroup,
};
use serde_json::{Value, json};

fn flow_group(value: Value) -> Result<FlowGroup, ModelError> {
    let raw: RawFlowGroup = serde_json::from_value(value).unwrap();
    FlowGroup::try_from(raw)
}

#[test]
fn test_flows_sorted_by_version_descending() {
    let group = flow_group(flow_group_json(
        "ingest",
        vec![],
        vec![
            flow_json("ingest", 2, false, "alpha"),
            flow_json("ingest", 10, true, "beta"),
            flow_json("ingest", 7, false, "alpha"),
        ],
    ))
    .unwrap();

    let versions: Vec<u32> = group.flows().iter().map(|flow| flow.version).collect();
    assert_eq!(versions, vec![10, 7, 2]);
    assert_eq!(group.latest_flow().versioned_name(), "ingest::V10");
}

#[test]
fn test_project_comes_from_latest_flow() {
    let group = flow_group(flow_group_json(
        "ingest",
        vec![],
        vec![
            flow_json("ingest", 1, false, "old-project"),
            flow_json("ingest", 3, true, "new-project"),
        ],
    ))
    .unwrap();

    assert_eq!(group.project().name, "new-project");
    assert!(group.is_schedule_active());
}

#[test]
fn test_empty_flow_group_is_rejected() {
    let result = flow_group(flow_group_json("orphan", vec![], vec![]));
    assert!(matches!(
        result,
        Err(ModelError::EmptyFlowGroup { ref name, .. }) if name == "orphan"
    ));
}

#[test]
fn test_string_versions_are_accepted() {
    let raw: RawFlow = serde_json::from_value(json!({
        "id": "f1",
        "name": "sync",
        "version": "4",
        "project": { "id": "p", "name": "alpha" },
    }))
    .unwrap();

    let flow = Flow::try_from(raw).unwrap();
    assert_eq!(flow.version, 4);
    assert!(!flow.schedule_active);
}

#[test]
fn test_invalid_versions_are_rejected() {
    for version in [json!(0), json!(-3), json!("latest")] {
        let raw: RawFlow = serde_json::from_value(json!({
            "id": "f1",
            "name": "sync",
            "version": version,
            "project": { "id": "p", "name": "alpha" },
        }))
        .unwrap();
        assert!(matches!(
            Flow::try_from(raw),
            Err(ModelError::InvalidVersion { .. })
        ));
    }
}

#[test]
fn test_flow_without_project_is_rejected() {
    let raw: RawFlow = serde_json::from_value(json!({
        "id": "f1",
        "name": "sync",
        "version": 1,
    }))
    .unwrap();
    assert!(matches!(
        Flow::try_from(raw),
        Err(ModelError::MissingProject { .. })
    ));
}

#[test]
fn test_clocks_keep_api_order_and_parameters() {
    let group = flow_group(flow_group_json(
        "billing",
        vec![
            cron_clock("0 9 * * *", Some(json!({ "region": "east" }))),
            json!({ "type": "IntervalClock", "interval": 60 }),
            cron_clock("0 18 * * *", None),
        ],
        vec![flow_json("billing", 1, true, "alpha")],
    ))
    .unwrap();

    let clocks = group.schedules();
    assert_eq!(clocks.len(), 3);
    assert!(group.has_cron_primary());
    assert_eq!(clocks[0].cron_expression, "0 9 * * *");
    assert_eq!(clocks[0].parameters_json(), r#"{"region":"east"}"#);
    assert_eq!(clocks[1].kind, ClockKind::Unsupported("IntervalClock".to_string()));
    assert!(!clocks[2].has_parameters());
}

#[test]
fn test_building_twice_gives_equal_groups() {
    let raw: RawFlowGroup = serde_json::from_value(flow_group_json(
        "billing",
        vec![
            cron_clock("0 9 * * *", Some(json!({ "region": "east" }))),
            cron_clock("0 18 * * *", None),
        ],
        vec![
            flow_json("billing", 1, false, "alpha"),
            flow_json("billing", 3, true, "alpha"),
            flow_json("billing", 2, false, "alpha"),
        ],
    ))
    .unwrap();

    let first = FlowGroup::try_from(raw.clone()).unwrap();
    let second = FlowGroup::try_from(raw).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.latest_flow().version, 3);
}

#[test]
fn test_parameters_alias_is_accepted() {
    let group = flow_group(flow_group_json(
        "billing",
        vec![json!({
            "type": CRON_CLOCK,
            "cron": "0 9 * * *",
            "parameters": { "region": "west" },
        })],
        vec![flow_json("billing", 1, true, "alpha")],
    ))
    .unwrap();
    assert_eq!(group.schedules()[0].parameters["region"], "west");
}

#[test]
fn test_missing_schedule_means_no_clocks() {
    let group = flow_group(json!({
        "id": "fg",
        "name": "adhoc",
        "schedule": null,
        "flows": [flow_json("adhoc", 1, false, "alpha")],
    }))
    .unwrap();

    assert!(group.schedules().is_empty());
    assert!(group.primary_clock().is_none());
    assert!(!group.has_cron_primary());
    assert!(group.labels().is_empty());
}

#[test]
fn test_non_cron_clock_describes_as_na() {
    let group = flow_group(flow_group_json(
        "interval",
        vec![json!({ "type": "IntervalClock", "interval": 60 })],
        vec![flow_json("interval", 1, true, "alpha")],
    ))
    .unwrap();

    let describer = CronDescriber::new(utc_settings().timezone);
    let description = group.schedules()[0]
        .describe(&describer, reference_now())
        .unwrap();
    assert_eq!(description, NOT_DESCRIBABLE);
    assert!(!group.has_cron_primary());
}

#[test]
fn test_malformed_cron_clock_fails_to_describe() {
    let group = flow_group(flow_group_json(
        "broken",
        vec![cron_clock("61 * * * *", None)],
        vec![flow_json("broken", 1, true, "alpha")],
    ))
    .unwrap();

    let describer = CronDescriber::new(utc_settings().timezone);
    assert!(group.schedules()[0].describe(&describer, reference_now()).is_err());
}

#[test]
fn test_project_environment_checks() {
    let group = flow_group(flow_group_json(
        "reads",
        vec![],
        vec![flow_json("reads", 1, true, "electricity-amr-prod")],
    ))
    .unwrap();

    let project = group.project();
    assert!(project.is_electricity_amr());
    assert!(!project.is_electricity_ami());
    assert!(project.is_prod());
    assert!(!project.is_dev());
}

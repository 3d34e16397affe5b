//! Common test utilities for building API responses and fake clients.
use chrono::{DateTime, TimeZone, Utc};
use flowsched::prelude::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Monday, 1 January 2024, 00:00 UTC. A fixed "now" for next-run assertions.
#[allow(dead_code)]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Settings rendering times in UTC so assertions do not depend on the host.
#[allow(dead_code)]
pub fn utc_settings() -> Settings {
    let mut settings = Settings::default();
    settings.timezone = "UTC".parse().unwrap();
    settings
}

/// A flow record as the API returns it.
#[allow(dead_code)]
pub fn flow_json(name: &str, version: u32, active: bool, project: &str) -> Value {
    json!({
        "id": format!("{}-v{}", name, version),
        "name": name,
        "version": version,
        "is_schedule_active": active,
        "project": { "id": format!("id-{}", project), "name": project },
    })
}

/// A cron clock, optionally carrying parameter defaults.
#[allow(dead_code)]
pub fn cron_clock(cron: &str, parameters: Option<Value>) -> Value {
    match parameters {
        Some(parameters) => json!({ "type": "CronClock", "cron": cron, "parameter_defaults": parameters }),
        None => json!({ "type": "CronClock", "cron": cron }),
    }
}

/// A flow group record with the given clocks and flows.
#[allow(dead_code)]
pub fn flow_group_json(name: &str, clocks: Vec<Value>, flows: Vec<Value>) -> Value {
    json!({
        "id": format!("fg-{}", name),
        "name": name,
        "labels": [],
        "schedule": { "type": "Schedule", "clocks": clocks },
        "flows": flows,
    })
}

/// A single-flow group scheduled by one cron clock.
#[allow(dead_code)]
pub fn simple_flow_group(name: &str, cron: &str, active: bool, project: &str) -> Value {
    flow_group_json(
        name,
        vec![cron_clock(cron, None)],
        vec![flow_json(name, 1, active, project)],
    )
}

/// Wraps records in a successful GraphQL response under `field`.
#[allow(dead_code)]
pub fn response(field: &str, records: Vec<Value>) -> Value {
    json!({ "data": { field: records } })
}

#[allow(dead_code)]
pub fn flow_group_response(records: Vec<Value>) -> Value {
    response("flow_group", records)
}

#[allow(dead_code)]
pub fn mutation_response(name: &str, success: bool) -> Value {
    json!({ "data": { name: { "success": success } } })
}

/// Returns queued responses in order and records every query it receives.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockClient {
    responses: RefCell<VecDeque<Value>>,
    pub queries: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockClient {
    pub fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn query(&self, index: usize) -> String {
        self.queries.borrow()[index].clone()
    }
}

impl CloudApiClient for MockClient {
    fn execute(&self, query: &str) -> std::result::Result<Value, QueryError> {
        self.queries.borrow_mut().push(query.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| QueryError::Transport("no response queued".to_string()))
    }
}

/// A reporter over `client` rendering times in UTC.
#[allow(dead_code)]
pub fn utc_reporter(client: MockClient) -> Reporter<MockClient> {
    Reporter::new(client, &utc_settings())
}

//! Next-occurrence computation.
//!
//! The `cron` crate expects six fields (with seconds) and numbers weekdays
//! from 1, so parsed expressions are re-rendered with explicit value lists
//! and weekday names before being handed over.

use super::expression::{CronExpression, CronField};
use crate::error::CronError;
use chrono::{DateTime, Utc};
use ::cron::Schedule;
use itertools::Itertools;
use std::str::FromStr;

const SCHEDULER_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn render_field(field: &CronField) -> String {
    if field.is_any() {
        "*".to_string()
    } else {
        field.values().iter().join(",")
    }
}

fn render_weekdays(field: &CronField) -> String {
    if field.is_any() {
        "*".to_string()
    } else {
        field
            .values()
            .iter()
            .map(|day| SCHEDULER_WEEKDAYS[*day as usize])
            .join(",")
    }
}

/// Six-field expressions equivalent to `expr`.
///
/// When both day fields are restricted cron fires on either one, which the
/// `cron` crate cannot express in a single schedule, so two are produced.
pub(crate) fn scheduler_expressions(expr: &CronExpression) -> Vec<String> {
    let render = |day_of_month: String, day_of_week: String| {
        format!(
            "0 {} {} {} {} {}",
            render_field(&expr.minute),
            render_field(&expr.hour),
            day_of_month,
            render_field(&expr.month),
            day_of_week
        )
    };

    if !expr.day_of_month.is_any() && !expr.day_of_week.is_any() {
        vec![
            render(render_field(&expr.day_of_month), "*".to_string()),
            render("*".to_string(), render_weekdays(&expr.day_of_week)),
        ]
    } else {
        vec![render(
            render_field(&expr.day_of_month),
            render_weekdays(&expr.day_of_week),
        )]
    }
}

/// Computes the first occurrence strictly after `after`, in UTC.
pub fn next_occurrence(
    expr: &CronExpression,
    after: DateTime<Utc>,
) -> Result<DateTime<Utc>, CronError> {
    let mut earliest: Option<DateTime<Utc>> = None;

    for normalized in scheduler_expressions(expr) {
        let schedule = Schedule::from_str(&normalized).map_err(|e| CronError::Schedule {
            expression: expr.source().to_string(),
            message: e.to_string(),
        })?;
        if let Some(next) = schedule.after(&after).next() {
            earliest = Some(earliest.map_or(next, |current| current.min(next)));
        }
    }

    earliest.ok_or_else(|| CronError::NoUpcomingOccurrence(expr.source().to_string()))
}

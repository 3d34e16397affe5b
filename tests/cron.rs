//! Tests for cron parsing, description and next-run computation.
mod common;
use chrono::{TimeZone, Utc};
use common::*;
use flowsched::config::ReportTimezone;
use flowsched::cron::{CronDescriber, CronExpression, FieldItem, FieldKind, next_occurrence};
use flowsched::error::CronError;

fn describe(expression: &str) -> String {
    CronExpression::parse(expression).unwrap().describe()
}

fn utc_describer() -> CronDescriber {
    CronDescriber::new("UTC".parse().unwrap())
}

#[test]
fn test_describe_fixed_times() {
    assert_eq!(describe("0 9 * * *"), "At 09:00");
    assert_eq!(describe("30 2 * * 1-5"), "At 02:30, Monday through Friday");
    assert_eq!(describe("0 6,18 * * *"), "At 06:00 and 18:00");
    assert_eq!(describe("0 0 1 * *"), "At 00:00, on day 1 of the month");
}

#[test]
fn test_describe_intervals() {
    assert_eq!(describe("* * * * *"), "Every minute");
    assert_eq!(describe("0 * * * *"), "Every hour");
    assert_eq!(describe("0 */6 * * *"), "Every 6 hours");
    assert_eq!(
        describe("*/15 * * * 1-5"),
        "Every 15 minutes, Monday through Friday"
    );
}

#[test]
fn test_describe_names_and_macros() {
    assert_eq!(
        describe("0 9 * * sun,SAT"),
        "At 09:00, only on Sunday and Saturday"
    );
    assert_eq!(describe("0 0 1 jan *"), "At 00:00, on day 1 of the month, only in January");
    assert_eq!(describe("@daily"), describe("0 0 * * *"));
    assert_eq!(describe("@hourly"), "Every hour");
}

#[test]
fn test_describe_both_day_fields_reads_as_either() {
    assert_eq!(
        describe("0 12 15 * 1"),
        "At 12:00, on day 15 of the month, or only on Monday"
    );
}

#[test]
fn test_weekday_seven_is_sunday() {
    let expr = CronExpression::parse("0 0 * * 7").unwrap();
    assert_eq!(expr.day_of_week.values(), vec![0]);
    assert_eq!(expr.describe(), "At 00:00, only on Sunday");
}

#[test]
fn test_single_day_range_reads_as_one_day() {
    assert_eq!(describe("0 0 * * 7-7"), "At 00:00, only on Sunday");
    assert_eq!(describe("0 0 * * 0-0"), "At 00:00, only on Sunday");
    assert_eq!(describe("0 0 * * 3-3"), "At 00:00, only on Wednesday");
    assert_eq!(describe("0 0 * * 1,5-5"), "At 00:00, only on Monday and Friday");
}

#[test]
fn test_field_parsing() {
    let expr = CronExpression::parse("5-10/2 */3 1,15 * *").unwrap();
    assert_eq!(
        expr.minute.items,
        vec![FieldItem::RangeStep {
            start: 5,
            end: 10,
            step: 2
        }]
    );
    assert_eq!(expr.minute.values(), vec![5, 7, 9]);
    assert_eq!(expr.hour.items, vec![FieldItem::EveryStep(3)]);
    assert_eq!(expr.day_of_month.literal_values(), Some(vec![1, 15]));
    assert!(expr.month.is_any());
    assert_eq!(expr.source(), "5-10/2 */3 1,15 * *");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        CronExpression::parse("* * *"),
        Err(CronError::FieldCount { found: 3, .. })
    ));
    assert!(matches!(
        CronExpression::parse("0 9 * * * *"),
        Err(CronError::FieldCount { found: 6, .. })
    ));
    assert!(matches!(
        CronExpression::parse("60 * * * *"),
        Err(CronError::InvalidField { field, .. }) if field == FieldKind::Minute.name()
    ));
    assert!(matches!(
        CronExpression::parse("0 9 * * mon-xyz"),
        Err(CronError::InvalidField { .. })
    ));
    assert!(matches!(
        CronExpression::parse("*/0 * * * *"),
        Err(CronError::InvalidField { .. })
    ));
    assert!(matches!(
        CronExpression::parse("0 20-8 * * *"),
        Err(CronError::InvalidField { .. })
    ));
    assert!(matches!(
        CronExpression::parse("@reboot"),
        Err(CronError::UnsupportedMacro(_))
    ));
    assert!(CronExpression::parse("").is_err());
}

#[test]
fn test_next_occurrence_is_strictly_after() {
    let expr = CronExpression::parse("0 9 * * *").unwrap();
    let at_nine = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    let next = next_occurrence(&expr, reference_now()).unwrap();
    assert_eq!(next, at_nine);

    let after_nine = next_occurrence(&expr, at_nine).unwrap();
    assert_eq!(after_nine, Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap());
}

#[test]
fn test_next_occurrence_takes_earliest_day_field() {
    let expr = CronExpression::parse("0 12 15 * 1").unwrap();

    // 1 January 2024 is a Monday
    let monday = next_occurrence(&expr, reference_now()).unwrap();
    assert_eq!(monday, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());

    let from_tuesday = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let next_monday = next_occurrence(&expr, from_tuesday).unwrap();
    assert_eq!(next_monday, Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap());

    let third = CronExpression::parse("0 12 3 * 1").unwrap();
    let by_day_of_month = next_occurrence(&third, from_tuesday).unwrap();
    assert_eq!(by_day_of_month, Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap());
}

#[test]
fn test_next_occurrence_weekday_numbering() {
    // Friday is 5 in cron numbering
    let expr = CronExpression::parse("0 8 * * 5").unwrap();
    let next = next_occurrence(&expr, reference_now()).unwrap();
    assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap());
}

#[test]
fn test_next_occurrence_never_fires() {
    // 30 February does not exist
    let expr = CronExpression::parse("0 0 30 2 *").unwrap();
    assert!(matches!(
        next_occurrence(&expr, reference_now()),
        Err(CronError::NoUpcomingOccurrence(_))
    ));
}

#[test]
fn test_describe_at_renders_local_time() {
    let description = utc_describer()
        .describe_at("0 9 * * *", reference_now())
        .unwrap();

    assert_eq!(description.sentence, "At 09:00");
    assert!(description.local_time().contains("9:00 AM"));
    assert_eq!(
        description.to_string(),
        "At 09:00 (UTC) --- [ 9:00 AM - (UTC) ]"
    );
}

#[test]
fn test_describe_at_converts_timezone() {
    let timezone: ReportTimezone = "America/New_York".parse().unwrap();
    let description = CronDescriber::new(timezone)
        .describe_at("0 14 * * *", reference_now())
        .unwrap();

    // EST is UTC-5 in January
    assert_eq!(description.local_time(), "9:00 AM");
    assert!(description.to_string().ends_with("[ 9:00 AM - (America/New_York) ]"));
}

#[test]
fn test_describe_at_rejects_malformed_expression() {
    let result = utc_describer().describe_at("not a cron", reference_now());
    assert!(result.is_err());
}

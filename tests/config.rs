//! Tests for settings and timezone resolution.
use chrono::{TimeZone, Utc};
use flowsched::config::{DEFAULT_API_URL, ReportTimezone, Settings};
use flowsched::error::ConfigError;
use std::collections::HashMap;

fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let settings = settings_from(&[]).unwrap();

    assert_eq!(settings.api.url, DEFAULT_API_URL);
    assert_eq!(settings.api.api_key, None);
    assert_eq!(settings.timezone, ReportTimezone::Local);
    assert_eq!(settings, Settings::default());
    assert!(matches!(
        settings.require_api_key(),
        Err(ConfigError::MissingSetting("PREFECT_API_KEY"))
    ));
}

#[test]
fn test_reads_all_variables() {
    let settings = settings_from(&[
        ("PREFECT_API_KEY", "secret"),
        ("PREFECT_TENANT_ID", "tenant-1"),
        ("PREFECT_API_URL", "http://localhost:4200/graphql"),
        ("REPORT_TIMEZONE", "Europe/Amsterdam"),
    ])
    .unwrap();

    assert_eq!(settings.require_api_key().unwrap(), "secret");
    assert_eq!(settings.api.tenant_id.as_deref(), Some("tenant-1"));
    assert_eq!(settings.api.url, "http://localhost:4200/graphql");
    assert_eq!(settings.timezone.label(), "Europe/Amsterdam");
}

#[test]
fn test_blank_values_count_as_unset() {
    let settings = settings_from(&[("PREFECT_API_KEY", "  "), ("REPORT_TIMEZONE", "")]).unwrap();
    assert_eq!(settings.api.api_key, None);
    assert_eq!(settings.timezone, ReportTimezone::Local);
}

#[test]
fn test_invalid_settings_are_rejected() {
    assert!(matches!(
        settings_from(&[("REPORT_TIMEZONE", "Mars/Olympus_Mons")]),
        Err(ConfigError::InvalidTimezone(_))
    ));
    assert!(matches!(
        settings_from(&[("PREFECT_API_URL", "ftp://example.com")]),
        Err(ConfigError::InvalidSetting {
            name: "PREFECT_API_URL",
            ..
        })
    ));
}

#[test]
fn test_timezone_parsing() {
    assert_eq!("localtime".parse::<ReportTimezone>().unwrap(), ReportTimezone::Local);
    assert_eq!("LocalTime".parse::<ReportTimezone>().unwrap(), ReportTimezone::Local);
    assert_eq!(
        "Asia/Kolkata".parse::<ReportTimezone>().unwrap().to_string(),
        "Asia/Kolkata"
    );
}

#[test]
fn test_format_time_in_named_zone() {
    let timezone: ReportTimezone = "Asia/Kolkata".parse().unwrap();
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

    // UTC+05:30
    assert_eq!(timezone.format_time(instant), "2:30 PM");
}

//! Settings for a report run.
//!
//! Reads the following environment variables in [`Settings::from_env`]:
//! - `PREFECT_API_KEY`: bearer token for the HTTP client (optional here, required by the HTTP client)
//! - `PREFECT_TENANT_ID`: tenant to scope requests to (optional)
//! - `PREFECT_API_URL`: GraphQL endpoint (default: `https://api.prefect.io`)
//! - `REPORT_TIMEZONE`: IANA timezone name or `localtime` (default: `localtime`)

use crate::error::ConfigError;
use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default GraphQL endpoint of the cloud API.
pub const DEFAULT_API_URL: &str = "https://api.prefect.io";

/// Name used for the host's local timezone.
pub const LOCAL_TIMEZONE: &str = "localtime";

/// Timezone that next-run times are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTimezone {
    /// The host's local timezone.
    #[default]
    Local,
    /// A named IANA timezone.
    Named(Tz),
}

impl ReportTimezone {
    /// Label shown in the report next to a converted time.
    pub fn label(&self) -> &str {
        match self {
            ReportTimezone::Local => LOCAL_TIMEZONE,
            ReportTimezone::Named(tz) => tz.name(),
        }
    }

    /// Formats a UTC instant as a 12-hour wall-clock time in this timezone.
    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        const TIME_FORMAT: &str = "%-I:%M %p";
        match self {
            ReportTimezone::Local => instant.with_timezone(&Local).format(TIME_FORMAT).to_string(),
            ReportTimezone::Named(tz) => instant.with_timezone(tz).format(TIME_FORMAT).to_string(),
        }
    }
}

impl FromStr for ReportTimezone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(LOCAL_TIMEZONE) {
            return Ok(ReportTimezone::Local);
        }
        name.parse::<Tz>()
            .map(ReportTimezone::Named)
            .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
    }
}

impl fmt::Display for ReportTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Connection settings for the cloud API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub url: String,
    pub api_key: Option<String>,
    pub tenant_id: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            api_key: None,
            tenant_id: None,
        }
    }
}

/// Complete configuration handed to the report pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub api: ApiSettings,
    pub timezone: ReportTimezone,
}

impl Settings {
    pub fn new(api: ApiSettings, timezone: ReportTimezone) -> Self {
        Self { api, timezone }
    }

    /// Load settings from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let url = non_empty("PREFECT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidSetting {
                name: "PREFECT_API_URL",
                message: format!("'{}' is not an http(s) URL", url),
            });
        }

        let timezone = match non_empty("REPORT_TIMEZONE") {
            Some(name) => name.parse()?,
            None => ReportTimezone::Local,
        };

        Ok(Self {
            api: ApiSettings {
                url,
                api_key: non_empty("PREFECT_API_KEY"),
                tenant_id: non_empty("PREFECT_TENANT_ID"),
            },
            timezone,
        })
    }

    /// The API key, failing when it is not configured.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingSetting("PREFECT_API_KEY"))
    }
}

//! # flowsched - Schedule Reports for Prefect Cloud
//!
//! **flowsched** queries the Prefect Cloud GraphQL API for flow groups and
//! renders tabular reports about their schedules: which workflows are
//! scheduled, what each cron clock means in plain English, when it fires
//! next in your timezone, and which project it belongs to.
//!
//! ## Core Workflow
//!
//! 1.  **Configure**: Build [`config::Settings`] explicitly or load them with `Settings::from_env()`.
//! 2.  **Connect**: Pick a [`client::CloudApiClient`]: the HTTP client (feature `http`), a
//!     recorded response via `ReplayApiClient`, or your own implementation.
//! 3.  **Report**: Create a [`report::Reporter`] and build a [`report::Report`] for one of the
//!     [`report::ReportKind`]s, optionally filtered by project and sorted.
//! 4.  **Render**: Write the report to any `std::io::Write`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowsched::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let settings = Settings::from_env()?;
//!     let client = ReplayApiClient::from_file("flow_groups.json")?;
//!     let reporter = Reporter::new(client, &settings);
//!
//!     let projects = vec!["prod".to_string()];
//!     let report = reporter.build(ReportKind::General, &projects, Some(SortKey::Schedule))?;
//!     report.render(&mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! Cron expressions can also be described on their own:
//!
//! ```rust
//! use flowsched::cron::CronExpression;
//!
//! let expr = CronExpression::parse("*/15 * * * 1-5").unwrap();
//! assert_eq!(expr.describe(), "Every 15 minutes, Monday through Friday");
//! ```

pub mod client;
pub mod config;
pub mod cron;
pub mod error;
pub mod model;
pub mod prelude;
pub mod query;
pub mod report;

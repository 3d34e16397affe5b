//! Prelude module for convenient imports
//!
//! Re-exports the types needed to configure a client and build reports.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowsched::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let settings = Settings::from_env()?;
//! let reporter = Reporter::new(ReplayApiClient::from_file("response.json")?, &settings);
//! reporter.write_report(ReportKind::ActiveSchedules, &[], None, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

// Reports
pub use crate::report::{ActivationSummary, Report, ReportKind, ReportRow, Reporter, SortKey};

// Clients
#[cfg(feature = "http")]
pub use crate::client::HttpApiClient;
pub use crate::client::{CloudApiClient, ReplayApiClient};

// Configuration
pub use crate::config::{ReportTimezone, Settings};

// Domain model
pub use crate::model::{ClockKind, Flow, FlowGroup, Project, ScheduleClock};

// Cron engine
pub use crate::cron::{CronDescriber, CronExpression, ScheduleDescription};

// Queries
pub use crate::query::{GraphQlQuery, Mutation, NamedQuery};

// Error types
pub use crate::error::{ConfigError, CronError, ModelError, QueryError, ReportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

use thiserror::Error;

/// Errors raised while parsing or evaluating a cron expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    #[error("Cron expression '{expression}' has {found} fields, expected 5")]
    FieldCount { expression: String, found: usize },

    #[error("Invalid {field} field '{token}': {message}")]
    InvalidField {
        field: &'static str,
        token: String,
        message: String,
    },

    #[error("Unsupported cron macro '{0}'")]
    UnsupportedMacro(String),

    #[error("Cron expression '{expression}' was rejected by the scheduler: {message}")]
    Schedule { expression: String, message: String },

    #[error("Cron expression '{0}' has no upcoming occurrence")]
    NoUpcomingOccurrence(String),
}

/// Errors caused by missing or invalid settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required setting '{0}' is not set")]
    MissingSetting(&'static str),

    #[error("Timezone '{0}' could not be resolved")]
    InvalidTimezone(String),

    #[error("Setting '{name}' is invalid: {message}")]
    InvalidSetting { name: &'static str, message: String },
}

/// Errors raised while executing a query against the cloud API.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("API request failed: {0}")]
    Transport(String),

    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API returned GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("API response has no 'data' key")]
    MissingData,

    #[error("API response data has no '{0}' field")]
    MissingField(String),

    #[error("Failed to decode '{field}' records: {source}")]
    Decode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read recorded response '{path}': {message}")]
    Replay { path: String, message: String },
}

/// Errors raised when a record violates the domain model invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Flow group '{name}' ({id}) has no flows, its project cannot be derived")]
    EmptyFlowGroup { id: String, name: String },

    #[error("Flow '{name}' has an invalid version '{version}'")]
    InvalidVersion { name: String, version: String },

    #[error("Flow '{flow}' has no project")]
    MissingProject { flow: String },
}

/// Top-level error for a report invocation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Cron(#[from] CronError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("No report selected, pass at least one of --active, --configurations or --general")]
    NoReportSelected,
}

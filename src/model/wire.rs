use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Flow versions arrive as numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawVersion {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RawVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawVersion::Number(n) => write!(f, "{}", n),
            RawVersion::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Flow record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFlow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub version: RawVersion,
    #[serde(default)]
    pub is_schedule_active: Option<bool>,
    #[serde(default)]
    pub project: Option<RawProject>,
}

/// One clock of a flow group schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClock {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub cron: Option<String>,
    #[serde(default, alias = "parameters")]
    pub parameter_defaults: Option<Map<String, Value>>,
}

/// Schedule payload of a flow group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSchedule {
    #[serde(default)]
    pub clocks: Option<Vec<RawClock>>,
}

/// Flow group record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFlowGroup {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub schedule: Option<RawSchedule>,
    #[serde(default)]
    pub flows: Vec<RawFlow>,
}

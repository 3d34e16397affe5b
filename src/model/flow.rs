use super::wire::{RawFlow, RawProject, RawVersion};
use crate::error::ModelError;

/// Separator between a flow name and its version tag.
pub const VERSION_SEPARATOR: &str = "::";

/// Namespace that flows belong to, the report grouping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    pub fn is_electricity_amr(&self) -> bool {
        self.name.contains("electricity-amr")
    }

    pub fn is_electricity_ami(&self) -> bool {
        self.name.contains("electricity-ami")
    }

    pub fn is_dev(&self) -> bool {
        self.name.contains("dev")
    }

    pub fn is_prod(&self) -> bool {
        self.name.contains("prod")
    }
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
        }
    }
}

/// A single versioned workflow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    pub id: String,
    pub name: String,
    pub version: u32,
    pub schedule_active: bool,
    pub project: Project,
}

impl Flow {
    /// `name::V<version>`
    pub fn versioned_name(&self) -> String {
        format!("{}{}V{}", self.name, VERSION_SEPARATOR, self.version)
    }
}

fn parse_version(name: &str, raw: &RawVersion) -> Result<u32, ModelError> {
    let parsed = match raw {
        RawVersion::Number(n) => u32::try_from(*n).ok(),
        RawVersion::Text(s) => s.trim().parse::<u32>().ok(),
    };
    parsed
        .filter(|v| *v > 0)
        .ok_or_else(|| ModelError::InvalidVersion {
            name: name.to_string(),
            version: raw.to_string(),
        })
}

impl TryFrom<RawFlow> for Flow {
    type Error = ModelError;

    fn try_from(raw: RawFlow) -> Result<Self, Self::Error> {
        let version = parse_version(&raw.name, &raw.version)?;
        let project = raw.project.ok_or_else(|| ModelError::MissingProject {
            flow: raw.name.clone(),
        })?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            version,
            schedule_active: raw.is_schedule_active.unwrap_or(false),
            project: project.into(),
        })
    }
}

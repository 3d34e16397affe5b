use super::CloudApiClient;
use crate::error::QueryError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Answers every query with a previously recorded response.
///
/// Used to render reports offline from a saved API response. The query text
/// is not inspected, so project filters do not narrow the recorded records:
/// each filter receives the full response again.
#[derive(Debug, Clone)]
pub struct ReplayApiClient {
    response: Value,
}

impl ReplayApiClient {
    pub fn new(response: Value) -> Self {
        Self { response }
    }

    /// Loads the recorded response from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let replay_error = |message: String| QueryError::Replay {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| replay_error(e.to_string()))?;
        let response = serde_json::from_str(&content).map_err(|e| replay_error(e.to_string()))?;
        Ok(Self::new(response))
    }
}

impl CloudApiClient for ReplayApiClient {
    fn execute(&self, query: &str) -> Result<Value, QueryError> {
        debug!(query_len = query.len(), "Replaying recorded response");
        Ok(self.response.clone())
    }
}

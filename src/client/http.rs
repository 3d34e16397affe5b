use super::CloudApiClient;
use crate::config::Settings;
use crate::error::{ConfigError, QueryError};
use reqwest::blocking::Client;
use serde_json::{Value, json};
use tracing::debug;

/// Posts GraphQL documents to the cloud API over HTTPS.
pub struct HttpApiClient {
    http: Client,
    url: String,
    api_key: String,
    tenant_id: Option<String>,
}

impl HttpApiClient {
    /// Creates a client from settings, failing when no API key is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let api_key = settings.require_api_key()?.to_string();
        let http = Client::builder()
            .user_agent(concat!("flowsched/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::InvalidSetting {
                name: "PREFECT_API_URL",
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            url: settings.api.url.clone(),
            api_key,
            tenant_id: settings.api.tenant_id.clone(),
        })
    }
}

impl CloudApiClient for HttpApiClient {
    fn execute(&self, query: &str) -> Result<Value, QueryError> {
        debug!(url = %self.url, "Executing GraphQL request");

        let mut request = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "query": query }));
        if let Some(tenant_id) = &self.tenant_id {
            request = request.header("X-Prefect-Tenant-Id", tenant_id);
        }

        let response = request
            .send()
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .map_err(|e| QueryError::Transport(e.to_string()))
    }
}

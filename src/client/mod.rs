//! Access to the cloud GraphQL API.

use crate::error::QueryError;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(feature = "http")]
mod http;
mod replay;

#[cfg(feature = "http")]
pub use http::HttpApiClient;
pub use replay::ReplayApiClient;

/// Executes GraphQL documents against the cloud API.
///
/// Implementations return the decoded response body; interpreting `data`
/// and `errors` is left to [`extract_records`].
pub trait CloudApiClient {
    fn execute(&self, query: &str) -> Result<Value, QueryError>;
}

impl<C: CloudApiClient + ?Sized> CloudApiClient for &C {
    fn execute(&self, query: &str) -> Result<Value, QueryError> {
        (**self).execute(query)
    }
}

impl<C: CloudApiClient + ?Sized> CloudApiClient for Box<C> {
    fn execute(&self, query: &str) -> Result<Value, QueryError> {
        (**self).execute(query)
    }
}

/// Takes the `data` object out of a response, failing on GraphQL errors.
pub fn response_data(response: Value) -> Result<Value, QueryError> {
    let Value::Object(mut body) = response else {
        return Err(QueryError::MissingData);
    };

    if let Some(Value::Array(errors)) = body.get("errors") {
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| error.to_string())
                })
                .collect();
            return Err(QueryError::GraphQl(messages));
        }
    }

    match body.remove("data") {
        Some(Value::Null) | None => Err(QueryError::MissingData),
        Some(data) => Ok(data),
    }
}

/// Decodes the records listed under `data.<field>` of a response.
pub fn extract_records<T: DeserializeOwned>(
    response: Value,
    field: &str,
) -> Result<Vec<T>, QueryError> {
    let mut data = response_data(response)?;
    let records = data
        .get_mut(field)
        .map(Value::take)
        .filter(|records| !records.is_null())
        .ok_or_else(|| QueryError::MissingField(field.to_string()))?;

    serde_json::from_value(records).map_err(|source| QueryError::Decode {
        field: field.to_string(),
        source,
    })
}

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

use crate::error::PollError;

/// Source of homework status answers.
#[async_trait]
pub trait HomeworkApi {
    /// Fetches statuses changed since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Map<String, Value>, PollError>;
}

/// Homework status endpoint reached over HTTPS with an OAuth token.
#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint: endpoint.into(), token: token.into() })
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Map<String, Value>, PollError> {
        debug!("GET {} from_date={}", self.endpoint, from_date);
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PollError::Request(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PollError::Status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| PollError::Request(e.to_string()))?;
        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(PollError::shape(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            ))),
            Err(e) => Err(PollError::shape(format!("invalid JSON: {}", e))),
        }
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Client for the downstream data sync API.
//!
//! After a detail crawl is persisted the sync API is asked to propagate the app elsewhere
//! with `GET <DATA_SYNC_API>/?apk_name=<name>`. The API answers with a JSON body carrying a
//! `success` field.

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Clone)]
pub struct SyncClient {
    http: reqwest::Client,
    base_url: String,
}

/// Answer of the sync API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncResponse {
    pub status: StatusCode,
    /// True only for HTTP 200 with a truthy `success` field in the JSON body.
    pub success: bool,
}

impl SyncClient {
    /// Creates a new instance of [`SyncClient`]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Asks the sync API to propagate the app identified by `apk_name`
    ///
    /// # Returns
    /// - `Ok(SyncResponse)`: The API answered, whatever the status code
    /// - `Err(reqwest::Error)`: Connection, timeout or body read failure
    pub async fn notify(&self, apk_name: &str) -> Result<SyncResponse, reqwest::Error> {
        let url = format!("{}/", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(url)
            .query(&[("apk_name", apk_name)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("sync data response({}) : {}", status.as_u16(), body);

        let success = status == StatusCode::OK && body_reports_success(apk_name, &body);

        Ok(SyncResponse { status, success })
    }
}

fn body_reports_success(apk_name: &str, body: &str) -> bool {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value.get("success").is_some_and(is_truthy),
        Err(e) => {
            tracing::warn!(
                "Sync API answered with a non-JSON body for {}: {}",
                apk_name,
                e
            );
            false
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

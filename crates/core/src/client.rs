//! HTTP transport for the user API.
//!
//! [`Transport`] is the seam the panel talks through; [`HttpTransport`] is the
//! real implementation over a blocking reqwest client.

use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

/// Issues one GET against the user API and returns the decoded JSON body.
pub trait Transport {
    fn get_json(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError>;
}

/// Blocking HTTP client bound to a fixed base address.
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(url = url.as_str(), has_body = body.is_some(), "GET");

        let mut req = self.http.get(&url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: status_message(status, body),
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Response body for an error status, or the status' reason phrase when the body is blank.
fn status_message(status: reqwest::StatusCode, body: String) -> String {
    if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        body
    }
}

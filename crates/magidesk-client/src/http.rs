//! HTTP client for the settings backend.
//!
//! # Design
//! - Thin JSON transport over `GET`/`PUT /api/settings/{category}`.
//! - Backend failures surface as RFC9457-style problem documents folded into
//!   [`SettingsError::Backend`]; connection failures into
//!   [`SettingsError::Transport`].

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rand::{Rng, distr::Alphanumeric};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use magidesk_settings::{SettingsError, SettingsPayload};

use crate::api::SettingsApi;

/// Header carrying the per-client request correlation identifier.
pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// RFC9457-compatible problem document surfaced on backend errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Most specific human-readable message available in the document.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.title)
    }
}

/// Settings backend client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSettingsClient {
    client: Client,
    base_url: Url,
}

impl HttpSettingsClient {
    /// Construct a client for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments or the
    /// underlying HTTP client fails to build.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("base URL '{base_url}' cannot address the settings API"));
        }

        let trace_id: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(&trace_id)
            .map_err(|_| anyhow!("trace identifier contains invalid characters"))?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|err| anyhow!("failed to build HTTP client: {err}"))?;

        Ok(Self { client, base_url })
    }

    fn settings_url(&self, category_key: &str) -> Result<(Url, String)> {
        let key = category_key.trim().to_ascii_lowercase();
        if key.is_empty() || key.contains('/') {
            return Err(SettingsError::UnknownCategory {
                key: category_key.to_string(),
            }
            .into());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("base URL '{}' cannot address the settings API", self.base_url))?
            .pop_if_empty()
            .extend(["api", "settings", key.as_str()]);
        Ok((url, key))
    }
}

async fn backend_error(operation: &'static str, response: Response) -> SettingsError {
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<ProblemDetails>(&body).map_or_else(
            |_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            },
            |problem| problem.message().to_string(),
        ),
        Err(err) => {
            return SettingsError::Transport {
                operation,
                source: Box::new(err),
            };
        }
    };

    SettingsError::Backend {
        status: status.as_u16(),
        detail,
    }
}

#[async_trait]
impl SettingsApi for HttpSettingsClient {
    #[instrument(name = "settings_client.load", skip(self))]
    async fn load_settings(&self, category_key: &str) -> Result<SettingsPayload> {
        let (url, key) = self.settings_url(category_key)?;
        debug!(category = %key, "loading settings document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SettingsError::Transport {
                operation: "load_settings",
                source: Box::new(err),
            })?;

        if !response.status().is_success() {
            return Err(backend_error("load_settings", response).await.into());
        }

        let document: Value =
            response
                .json()
                .await
                .map_err(|err| SettingsError::Transport {
                    operation: "load_settings",
                    source: Box::new(err),
                })?;
        let payload = SettingsPayload::from_document(&key, document).map_err(|err| {
            SettingsError::Serialization {
                operation: "decoded",
                source: err,
            }
        })?;
        Ok(payload)
    }

    #[instrument(name = "settings_client.save", skip_all, fields(category = %payload.category_key()))]
    async fn save_settings(&self, payload: &SettingsPayload) -> Result<bool> {
        let (url, key) = self.settings_url(payload.category_key())?;
        let document = payload
            .to_document()
            .map_err(|err| SettingsError::Serialization {
                operation: "encoded",
                source: err,
            })?;

        let response = self
            .client
            .put(url)
            .json(&document)
            .send()
            .await
            .map_err(|err| SettingsError::Transport {
                operation: "save_settings",
                source: Box::new(err),
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(category = %key, "settings document saved");
            return Ok(true);
        }
        if matches!(
            status,
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            warn!(category = %key, status = %status, "settings backend declined the document");
            return Ok(false);
        }

        Err(backend_error("save_settings", response).await.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn settings_url_normalises_the_category_key() {
        let client = HttpSettingsClient::new(
            Url::parse("http://localhost:5080").expect("static URL"),
            Duration::from_secs(5),
        )
        .expect("client should build");

        let (url, key) = client.settings_url("  POS  ").expect("key should resolve");
        assert_eq!(url.as_str(), "http://localhost:5080/api/settings/pos");
        assert_eq!(key, "pos");
    }

    #[test]
    fn settings_url_rejects_empty_and_path_like_keys() {
        let client = HttpSettingsClient::new(
            Url::parse("http://localhost:5080").expect("static URL"),
            Duration::from_secs(5),
        )
        .expect("client should build");

        assert!(client.settings_url("").is_err());
        assert!(client.settings_url("pos/../admin").is_err());
    }

    #[test]
    fn problem_details_prefer_the_detail_field() {
        let problem: ProblemDetails = serde_json::from_value(json!({
            "type": "https://magidesk.dev/problems/conflict",
            "title": "Conflict",
            "status": 409,
            "detail": "settings were changed by another register"
        }))
        .expect("document should parse");
        assert_eq!(problem.message(), "settings were changed by another register");

        let bare: ProblemDetails =
            serde_json::from_value(json!({ "title": "Conflict" })).expect("document should parse");
        assert_eq!(bare.message(), "Conflict");
    }
}

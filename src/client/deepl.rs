/*!
 * DeepL HTTP transport.
 *
 * Executes translation requests against the DeepL v2 API. Auth goes through
 * the `Authorization: DeepL-Auth-Key` header; request bodies are the
 * form-encoded payloads built by the request builder. The client never
 * retries, a 429 is surfaced to the caller like any other non-200 status.
 */

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use super::{RawResponse, TranslationApi};
use crate::errors::ClientError;
use crate::translation::request::TranslationRequest;

/// Default DeepL API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.deepl.com";

/// DeepL client for the v2 HTTP API
pub struct DeepLApi {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

impl DeepLApi {
    /// Create a new DeepL client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
        }
    }
}

impl std::fmt::Debug for DeepLApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the credential
        f.debug_struct("DeepLApi")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranslationApi for DeepLApi {
    async fn execute(&self, request: &TranslationRequest) -> Result<RawResponse, ClientError> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Auth(
                "DeepL API key not specified".to_string(),
            ));
        }

        let url = format!("{}{}", self.endpoint.trim_end_matches('/'), request.path);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        // 401/403 mean the key itself was rejected
        if status == 401 || status == 403 {
            return Err(ClientError::Auth(format!(
                "service rejected the API key (status {})",
                status
            )));
        }

        if !(200..300).contains(&status) {
            return Err(ClientError::Http {
                status_code: status,
                body,
            });
        }

        if !content_type.contains("application/json") {
            return Err(ClientError::ContentType(content_type));
        }

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

/*!
 * Mock transport implementations for testing.
 *
 * This module provides mock transports that simulate different service
 * behaviors:
 * - `MockApi::working()` - Always succeeds with translated text
 * - `MockApi::failing(status)` - Every request fails with an HTTP error
 * - `MockApi::failing_nth(n, status)` - Only the n-th request fails
 * - `MockApi::empty_translations()` - Valid JSON with an empty list
 * - `MockApi::not_json()` - Responds with an HTML body
 */

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::form_urlencoded;

use super::{RawResponse, TranslationApi};
use crate::errors::ClientError;
use crate::translation::request::{TranslationRequest, USAGE_PATH};

/// Behavior mode for the mock transport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a translation per text parameter
    Working,
    /// Every request fails with the given HTTP status
    Failing {
        /// Simulated status code
        status_code: u16,
    },
    /// Only the nth request (zero-based, by arrival) fails
    FailingNth {
        /// Zero-based arrival index of the failing request
        nth: usize,
        /// Simulated status code
        status_code: u16,
    },
    /// Succeeds with a valid body whose translation list is empty
    EmptyTranslations,
    /// Simulates the transport rejecting a non-JSON response body
    NotJson,
    /// Rejects every request as unauthenticated
    AuthRejected,
    /// Simulates a slow service (for timeout testing)
    Slow {
        /// Delay before answering
        delay_ms: u64,
    },
}

/// Mock transport for testing pipeline behavior without a network
#[derive(Debug)]
pub struct MockApi {
    /// Behavior mode
    behavior: MockBehavior,
    /// Arrival counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Custom per-text translator (optional)
    translator: Option<fn(&str) -> String>,
}

impl MockApi {
    /// Create a new mock transport with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            translator: None,
        }
    }

    /// Create a working mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock where every request fails with the given status
    pub fn failing(status_code: u16) -> Self {
        Self::new(MockBehavior::Failing { status_code })
    }

    /// Create a mock where only the nth arriving request fails
    pub fn failing_nth(nth: usize, status_code: u16) -> Self {
        Self::new(MockBehavior::FailingNth { nth, status_code })
    }

    /// Create a mock that answers with an empty translation list
    pub fn empty_translations() -> Self {
        Self::new(MockBehavior::EmptyTranslations)
    }

    /// Create a mock that answers with a non-JSON body
    pub fn not_json() -> Self {
        Self::new(MockBehavior::NotJson)
    }

    /// Create a mock that rejects every request as unauthenticated
    pub fn auth_rejected() -> Self {
        Self::new(MockBehavior::AuthRejected)
    }

    /// Create a mock that answers correctly after the given delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom per-text translator
    pub fn with_translator(mut self, translator: fn(&str) -> String) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Number of requests seen so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Recover the text parameters and target language from a form body
    fn parse_body(body: &str) -> (Vec<String>, String) {
        let mut texts = Vec::new();
        let mut target = String::new();

        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            match key.as_ref() {
                "text" => texts.push(value.into_owned()),
                "target_lang" => target = value.into_owned(),
                _ => {}
            }
        }

        (texts, target)
    }

    fn translation_body(&self, request: &TranslationRequest) -> String {
        let (texts, target) = Self::parse_body(&request.body);

        let translations: Vec<_> = texts
            .iter()
            .map(|text| {
                let translated = match self.translator {
                    Some(translator) => translator(text),
                    None => format!("[{}] {}", target, text),
                };
                json!({"detected_source_language": "EN", "text": translated})
            })
            .collect();

        json!({ "translations": translations }).to_string()
    }
}

impl Clone for MockApi {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            translator: self.translator,
        }
    }
}

#[async_trait]
impl TranslationApi for MockApi {
    async fn execute(&self, request: &TranslationRequest) -> Result<RawResponse, ClientError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                if request.path == USAGE_PATH {
                    return Ok(RawResponse::json(
                        json!({"character_count": 180_118, "character_limit": 1_250_000})
                            .to_string(),
                    ));
                }
                Ok(RawResponse::json(self.translation_body(request)))
            }

            MockBehavior::Failing { status_code } => Err(ClientError::Http {
                status_code,
                body: "simulated service failure".to_string(),
            }),

            MockBehavior::FailingNth { nth, status_code } => {
                if count == nth {
                    Err(ClientError::Http {
                        status_code,
                        body: "simulated service failure".to_string(),
                    })
                } else {
                    Ok(RawResponse::json(self.translation_body(request)))
                }
            }

            MockBehavior::EmptyTranslations => {
                Ok(RawResponse::json(r#"{"translations":[]}"#))
            }

            MockBehavior::NotJson => Err(ClientError::ContentType(
                "text/html; charset=utf-8".to_string(),
            )),

            MockBehavior::AuthRejected => Err(ClientError::Auth(
                "simulated credential rejection".to_string(),
            )),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(RawResponse::json(self.translation_body(request)))
            }
        }
    }
}

/*!
 * Translation request building.
 *
 * Converts one batch of rows into a well-formed wire request: language pair,
 * percent-encoded text parameters, request path. Building is pure; the same
 * batch and languages always produce the same request descriptor.
 */

use url::form_urlencoded;

use super::MAX_TEXTS_PER_REQUEST;
use super::chunker::Batch;
use crate::errors::RequestError;

/// Path of the translation endpoint
pub const TRANSLATE_PATH: &str = "/v2/translate";

/// Path of the usage/quota endpoint
pub const USAGE_PATH: &str = "/v2/usage";

/// A ready-to-send request descriptor.
///
/// The body is `application/x-www-form-urlencoded`; credentials are not part
/// of the descriptor, the transport attaches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Endpoint path, relative to the service base URL
    pub path: String,
    /// Form-encoded request body, empty for parameterless calls
    pub body: String,
    /// Number of `text` parameters carried by the request
    pub text_count: usize,
}

/// Builder turning batches into translation requests
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    /// Default source language, used when the caller passes none
    source_lang: String,
    /// Default target language, used when the caller passes none
    target_lang: String,
}

impl RequestBuilder {
    /// Create a builder with the given default language pair
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Configured default source language
    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    /// Configured default target language
    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Build one translation request from a batch.
    ///
    /// Empty or missing languages fall back to the configured defaults. The
    /// batch must be non-empty and within the per-request item limit; the
    /// item check is deliberately independent of whatever produced the
    /// batch. Texts keep their batch order, position i of the batch becomes
    /// the i-th `text` parameter.
    pub fn build(
        &self,
        batch: &Batch,
        source_lang: Option<&str>,
        target_lang: Option<&str>,
    ) -> Result<TranslationRequest, RequestError> {
        if batch.is_empty() {
            return Err(RequestError::EmptyBatch);
        }

        let text_count = batch.texts().count();
        if text_count > MAX_TEXTS_PER_REQUEST {
            return Err(RequestError::BatchTooLarge {
                len: text_count,
                limit: MAX_TEXTS_PER_REQUEST,
            });
        }

        let source = source_lang.filter(|s| !s.is_empty()).unwrap_or(&self.source_lang);
        let target = target_lang.filter(|s| !s.is_empty()).unwrap_or(&self.target_lang);

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("source_lang", source);
        serializer.append_pair("target_lang", target);
        for text in batch.texts() {
            serializer.append_pair("text", text);
        }

        Ok(TranslationRequest {
            path: TRANSLATE_PATH.to_string(),
            body: serializer.finish(),
            text_count,
        })
    }

    /// Build the usage/quota request
    pub fn usage(&self) -> TranslationRequest {
        TranslationRequest {
            path: USAGE_PATH.to_string(),
            body: String::new(),
            text_count: 0,
        }
    }
}

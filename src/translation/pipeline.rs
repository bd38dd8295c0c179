/*!
 * Pipeline orchestration.
 *
 * Composes chunking, request building, batched dispatch and decoding into
 * one column-level operation: chunk the rows, build one request per batch,
 * send them with bounded concurrency, decode every response and flatten the
 * results back into a single ordered column.
 *
 * The whole run is fail-fast: the first error at any stage aborts the call
 * and propagates unchanged, so a caller never sees a partially translated
 * column.
 */

use log::{debug, info};
use std::sync::Arc;

use super::chunker::Chunker;
use super::decoder::{self, UsageReport};
use super::request::RequestBuilder;
use crate::app_config::Config;
use crate::client::{ServiceClient, TranslationApi};
use crate::errors::PipelineError;
use crate::store::Row;

/// End-to-end translator for one column of rows
#[derive(Debug, Clone)]
pub struct ColumnTranslator {
    chunker: Chunker,
    builder: RequestBuilder,
    client: ServiceClient,
}

impl ColumnTranslator {
    /// Create a translator from its parts
    pub fn new(chunker: Chunker, builder: RequestBuilder, client: ServiceClient) -> Self {
        Self {
            chunker,
            builder,
            client,
        }
    }

    /// Create a translator from the application config and a transport
    pub fn from_config(config: &Config, api: Arc<dyn TranslationApi>) -> Self {
        Self {
            chunker: Chunker::new(config.max_items_per_request, config.max_chars_per_request),
            builder: RequestBuilder::new(&config.source_language, &config.target_language),
            client: ServiceClient::new(api, config.concurrent_requests),
        }
    }

    /// Translate an ordered column of rows.
    ///
    /// The result has exactly the same length and order as the input; the
    /// row at position i is the translation of the input row at position i.
    pub async fn translate_column(
        &self,
        rows: &[Row],
        source_lang: Option<&str>,
        target_lang: Option<&str>,
    ) -> Result<Vec<Row>, PipelineError> {
        self.translate_column_with_progress(rows, source_lang, target_lang, |_, _| {})
            .await
    }

    /// Translate a column, reporting `(completed, total)` batches as they
    /// finish. Completion order feeds the callback; the output order still
    /// mirrors the input.
    pub async fn translate_column_with_progress(
        &self,
        rows: &[Row],
        source_lang: Option<&str>,
        target_lang: Option<&str>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<Row>, PipelineError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let batches = self.chunker.chunk(rows)?;
        info!(
            "translating {} rows in {} batches",
            rows.len(),
            batches.len()
        );

        let mut requests = Vec::with_capacity(batches.len());
        for batch in &batches {
            requests.push(self.builder.build(batch, source_lang, target_lang)?);
        }

        let responses = self
            .client
            .send_with_progress(&requests, progress_callback)
            .await?;

        // Responses arrive in request order; flattening in that order
        // reproduces the original row order.
        let mut translated = Vec::with_capacity(rows.len());
        for (batch_index, response) in responses.iter().enumerate() {
            let decoded = decoder::decode(response)?;
            debug!(
                "batch {} decoded into {} rows",
                batch_index + 1,
                decoded.len()
            );
            translated.extend(decoded);
        }

        if translated.len() != rows.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: rows.len(),
                actual: translated.len(),
            });
        }

        Ok(translated)
    }

    /// Query the usage and quota of the credential behind the client
    pub async fn usage(&self) -> Result<UsageReport, PipelineError> {
        let request = self.builder.usage();
        let response = self.client.send1(&request).await?;
        Ok(decoder::decode_usage(&response)?)
    }
}

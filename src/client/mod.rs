/*!
 * Service client implementations for the translation API.
 *
 * This module defines the transport seam of the pipeline:
 * - `TranslationApi`: trait implemented by concrete transports
 * - `deepl`: reqwest-based client for the DeepL HTTP API
 * - `mock`: behavior-driven test double
 *
 * `ServiceClient` sits on top of a transport and adds bounded-concurrency
 * dispatch of independent requests, with responses correlated back to their
 * originating request by index rather than by arrival order.
 */

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::debug;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

use crate::errors::ClientError;
use crate::translation::request::TranslationRequest;

pub mod deepl;
pub mod mock;

pub use self::deepl::DeepLApi;
pub use self::mock::{MockApi, MockBehavior};

/// A raw service response that already passed the transport-level checks
/// (status 200, JSON content type). Decoding the body is the decoder's job.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code, always in the 200 range for a returned response
    pub status: u16,
    /// Content-Type header value
    pub content_type: String,
    /// Response body text
    pub body: String,
}

impl RawResponse {
    /// Convenience constructor for a JSON response body
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body: body.into(),
        }
    }
}

/// Transport trait implemented by every translation API client.
///
/// A single call executes one request and either returns the raw response or
/// one of the transport-level errors. Implementations never retry; policy
/// belongs to the caller.
#[async_trait]
pub trait TranslationApi: Send + Sync + Debug {
    /// Execute one request against the service
    async fn execute(&self, request: &TranslationRequest) -> Result<RawResponse, ClientError>;
}

/// Client facade adding batched dispatch on top of a transport
#[derive(Debug, Clone)]
pub struct ServiceClient {
    /// The underlying transport
    api: Arc<dyn TranslationApi>,
    /// Maximum number of requests in flight at once
    max_concurrent_requests: usize,
}

impl ServiceClient {
    /// Create a client over the given transport
    pub fn new(api: Arc<dyn TranslationApi>, max_concurrent_requests: usize) -> Self {
        Self {
            api,
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    /// Execute a single request, used for non-batch calls such as usage
    /// queries
    pub async fn send1(&self, request: &TranslationRequest) -> Result<RawResponse, ClientError> {
        self.api.execute(request).await
    }

    /// Execute many independent requests with bounded concurrency.
    ///
    /// Responses come back in request order regardless of completion order.
    /// The first failing request fails the whole call.
    pub async fn send(
        &self,
        requests: &[TranslationRequest],
    ) -> Result<Vec<RawResponse>, ClientError> {
        self.send_with_progress(requests, |_, _| {}).await
    }

    /// Same as `send`, reporting `(completed, total)` after every finished
    /// request
    pub async fn send_with_progress(
        &self,
        requests: &[TranslationRequest],
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<RawResponse>, ClientError> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_requests));
        let total = requests.len();
        let completed = Arc::new(AtomicUsize::new(0));

        let results = stream::iter(requests.iter().enumerate())
            .map(|(index, request)| {
                let api = self.api.clone();
                let semaphore = semaphore.clone();
                let completed = completed.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    let _permit = semaphore.acquire().await.expect("semaphore closed");
                    debug!("dispatching request {} of {}", index + 1, total);
                    let result = api.execute(request).await;

                    let current = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total);

                    (index, result)
                }
            })
            .buffer_unordered(self.max_concurrent_requests)
            .collect::<Vec<_>>()
            .await;

        // Re-correlate by request index, completion order is meaningless
        let mut sorted = results;
        sorted.sort_by_key(|(index, _)| *index);

        let mut responses = Vec::with_capacity(total);
        for (_, result) in sorted {
            responses.push(result?);
        }

        Ok(responses)
    }
}

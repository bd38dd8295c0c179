/*!
 * Error types for the coltra pipeline.
 *
 * This module contains custom error types for each stage of the translation
 * pipeline, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised while splitting a column into batches
#[derive(Error, Debug)]
pub enum ChunkError {
    /// A single row is larger than the per-request character limit.
    /// Rows are never split or truncated, so this is unrecoverable.
    #[error("row {row_index} has {char_count} characters, limit per request is {limit}")]
    OversizeRow {
        /// Zero-based index of the offending row in the input column
        row_index: usize,
        /// Character count of the row
        char_count: usize,
        /// Configured per-request character limit
        limit: usize,
    },
}

/// Errors raised while building a translation request from a batch
#[derive(Error, Debug)]
pub enum RequestError {
    /// Batch contains no rows
    #[error("cannot build a translation request from an empty batch")]
    EmptyBatch,

    /// Batch holds more texts than one request may carry
    #[error("batch has {len} items, at most {limit} texts can be sent in one request")]
    BatchTooLarge {
        /// Number of items in the batch
        len: usize,
        /// Configured per-request item limit
        limit: usize,
    },
}

/// Errors raised by the service client while executing requests
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or invalid credential
    #[error("authentication error: {0}")]
    Auth(String),

    /// The service answered with a non-200 status
    #[error("service responded with status {status_code}: {body}")]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body as returned by the service
        body: String,
    },

    /// The service answered with something other than JSON
    #[error("invalid content-type in response: {0}")]
    ContentType(String),

    /// Network-level failure before any response was received
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors raised while decoding a raw service response
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body did not parse as the expected translation payload
    #[error("malformed response body: {0}")]
    InvalidBody(String),

    /// The service responded but translated nothing, usually a quota signal
    #[error("service returned an empty translation list")]
    EmptyTranslation,
}

/// Umbrella error for a full column translation run.
///
/// Every component-level error propagates here unchanged; nothing is retried
/// or downgraded to a warning.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from the chunker
    #[error("chunking error: {0}")]
    Chunk(#[from] ChunkError),

    /// Error from the request builder
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// Error from the service client
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Error from the response decoder
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Output shape does not mirror the input column
    #[error("translated column has {actual} rows, expected {expected}")]
    ShapeMismatch {
        /// Row count of the input column
        expected: usize,
        /// Row count actually reassembled
        actual: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file or store operation
    #[error("store error: {0}")]
    Store(String),

    /// Error from the translation pipeline
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Store(error.to_string())
    }
}

/*!
 * Column translation pipeline.
 *
 * This module contains the core chunk/build/dispatch/decode/reassemble
 * pipeline. It is split into several submodules:
 *
 * - `chunker`: Splitting an ordered column into size-bounded batches
 * - `request`: Building wire requests from batches
 * - `decoder`: Parsing raw responses back into rows
 * - `pipeline`: The orchestrator composing all of the above
 */

// Re-export main types for easier usage
pub use self::chunker::{Batch, Chunker};
pub use self::decoder::{UsageReport, decode, decode_usage};
pub use self::pipeline::ColumnTranslator;
pub use self::request::{RequestBuilder, TranslationRequest};

// Submodules
pub mod chunker;
pub mod decoder;
pub mod pipeline;
pub mod request;

/// Maximum number of texts one request may carry
pub const MAX_TEXTS_PER_REQUEST: usize = 50;

/// Maximum total character count of all texts in one request
pub const MAX_CHARS_PER_REQUEST: usize = 30_000;

/*!
 * Response decoding.
 *
 * Parses raw service responses back into ordered rows. The service contract
 * guarantees translations come back in request order, so decoding only
 * validates shape and non-emptiness and re-wraps each text as a single-cell
 * row for direct write-back.
 */

use serde::Deserialize;

use crate::client::RawResponse;
use crate::errors::DecodeError;
use crate::store::Row;

/// One translated item as returned by the service
#[derive(Debug, Deserialize)]
struct TranslatedText {
    /// The translated text
    text: String,
    /// Detected source language, reported by the service but unused by the
    /// pipeline
    #[serde(default, rename = "detected_source_language")]
    _detected_source_language: Option<String>,
}

/// Body shape of a translation response
#[derive(Debug, Deserialize)]
struct TranslationBody {
    translations: Vec<TranslatedText>,
}

/// Usage and quota numbers of the account behind the credential
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsageReport {
    /// Characters translated in the current period
    pub character_count: u64,
    /// Character allowance of the current period
    pub character_limit: u64,
}

/// Decode a raw response into ordered single-cell rows.
///
/// An empty translation list means the service accepted the request but
/// translated nothing, typically a quota signal. That case is distinguished
/// from transport failures so callers can surface it verbatim.
pub fn decode(raw: &RawResponse) -> Result<Vec<Row>, DecodeError> {
    let body: TranslationBody =
        serde_json::from_str(&raw.body).map_err(|e| DecodeError::InvalidBody(e.to_string()))?;

    if body.translations.is_empty() {
        return Err(DecodeError::EmptyTranslation);
    }

    Ok(body
        .translations
        .into_iter()
        .map(|item| Row::single(item.text))
        .collect())
}

/// Decode a usage-query response
pub fn decode_usage(raw: &RawResponse) -> Result<UsageReport, DecodeError> {
    serde_json::from_str(&raw.body).map_err(|e| DecodeError::InvalidBody(e.to_string()))
}

/*!
 * Tests for response decoding
 */

use coltra::translation::{decode, decode_usage};
use coltra::{DecodeError, RawResponse, Row};

#[test]
fn test_decode_withEmptyTranslationList_shouldFailWithEmptyTranslation() {
    let raw = RawResponse::json(r#"{"translations":[]}"#);
    assert!(matches!(decode(&raw), Err(DecodeError::EmptyTranslation)));
}

#[test]
fn test_decode_withBonjour_shouldReturnSingleRow() {
    let raw = RawResponse::json(r#"{"translations":[{"text":"Bonjour"}]}"#);
    assert_eq!(decode(&raw).unwrap(), vec![Row::single("Bonjour")]);
}

#[test]
fn test_decode_withDetectedSourceLanguage_shouldIgnoreIt() {
    let raw = RawResponse::json(
        r#"{"translations":[{"detected_source_language":"EN","text":"Bonjour"}]}"#,
    );
    assert_eq!(decode(&raw).unwrap(), vec![Row::single("Bonjour")]);
}

#[test]
fn test_decode_withManyTranslations_shouldKeepServiceOrder() {
    let raw = RawResponse::json(
        r#"{"translations":[{"text":"premier"},{"text":"deuxième"},{"text":"troisième"}]}"#,
    );
    let rows = decode(&raw).unwrap();
    assert_eq!(
        rows,
        vec![
            Row::single("premier"),
            Row::single("deuxième"),
            Row::single("troisième"),
        ]
    );
}

#[test]
fn test_decode_withGarbageBody_shouldFailWithInvalidBody() {
    let raw = RawResponse::json("not json at all");
    assert!(matches!(decode(&raw), Err(DecodeError::InvalidBody(_))));
}

#[test]
fn test_decode_shouldWrapEachTextAsSingleCellRow() {
    let raw = RawResponse::json(r#"{"translations":[{"text":"chat"},{"text":"chien"}]}"#);
    for row in decode(&raw).unwrap() {
        assert_eq!(row.cells.len(), 1);
    }
}

#[test]
fn test_decode_usage_withQuotaBody_shouldReturnBothNumbers() {
    let raw = RawResponse::json(r#"{"character_count":180118,"character_limit":1250000}"#);
    let report = decode_usage(&raw).unwrap();
    assert_eq!(report.character_count, 180_118);
    assert_eq!(report.character_limit, 1_250_000);
}

#[test]
fn test_decode_usage_withMissingField_shouldFail() {
    let raw = RawResponse::json(r#"{"character_count":1}"#);
    assert!(decode_usage(&raw).is_err());
}

/*!
 * Tests for translation request building
 */

use coltra::{Batch, Chunker, RequestBuilder, RequestError};

use crate::common::rows;

fn builder() -> RequestBuilder {
    RequestBuilder::new("DE", "FR")
}

fn single_batch(texts: &[&str]) -> coltra::Batch {
    let batches = Chunker::default().chunk(&rows(texts)).unwrap();
    assert_eq!(batches.len(), 1);
    batches.into_iter().next().unwrap()
}

#[test]
fn test_build_withHelloAndNoLanguages_shouldUseConfiguredDefaults() {
    let request = builder().build(&single_batch(&["Hello"]), None, None).unwrap();

    assert!(request.body.contains("source_lang=DE"));
    assert!(request.body.contains("target_lang=FR"));
    assert!(request.body.contains("text=Hello"));
}

#[test]
fn test_build_withFiftyTexts_shouldSucceedAtTheLimit() {
    let request = builder()
        .build(&single_batch(&vec!["t"; 50]), None, None)
        .unwrap();
    assert_eq!(request.text_count, 50);
}

#[test]
fn test_build_withReservedCharacters_shouldEncodeThem() {
    let request = builder()
        .build(&single_batch(&["Mörder & Söhne?"]), None, None)
        .unwrap();

    assert!(!request.body.contains('?'));
    assert!(!request.body.contains("& "));
    assert!(request.body.contains("text=M%C3%B6rder"));
}

#[test]
fn test_build_withEmptyBatch_shouldFailWithEmptyBatch() {
    let batch = Batch::from_rows(Vec::new());
    let result = builder().build(&batch, None, None);
    assert!(matches!(result, Err(RequestError::EmptyBatch)));
}

#[test]
fn test_build_withHandBuiltOversizeBatch_shouldFailWithBatchTooLarge() {
    // the chunker would never produce this, the builder re-checks anyway
    let batch = Batch::from_rows(rows(&vec!["t"; 51]));
    let result = builder().build(&batch, None, None);
    assert!(matches!(
        result,
        Err(RequestError::BatchTooLarge { len: 51, limit: 50 })
    ));
}

#[test]
fn test_build_withExplicitLanguagePair_shouldCarryIt() {
    let request = builder()
        .build(&single_batch(&["Hello"]), Some("EN"), Some("PL"))
        .unwrap();

    assert!(request.body.contains("source_lang=EN"));
    assert!(request.body.contains("target_lang=PL"));
}

/*!
 * Tests for column chunking
 */

use coltra::{Batch, ChunkError, Chunker, RequestBuilder, Row};

use crate::common::rows;

#[test]
fn test_chunk_with120Rows_shouldYieldThreeBatches() {
    let column = rows(&vec!["x"; 120]);
    let batches = Chunker::default().chunk(&column).unwrap();

    let sizes: Vec<usize> = batches.iter().map(Batch::len).collect();
    assert_eq!(sizes, vec![50, 50, 20]);
}

#[test]
fn test_chunk_withOversizeFirstRow_shouldFailBeforeAnyBatchIsProduced() {
    let mut column = vec![Row::single("a".repeat(31_000))];
    column.extend(rows(&["small", "rows"]));

    let result = Chunker::default().chunk(&column);
    assert!(matches!(result, Err(ChunkError::OversizeRow { row_index: 0, .. })));
}

#[test]
fn test_chunk_withTenLargeRows_shouldSplitOnCharCapWithoutSplittingRows() {
    let text = "a".repeat(3_500);
    let column = rows(&vec![text.as_str(); 10]);

    let batches = Chunker::default().chunk(&column).unwrap();
    assert_eq!(batches.len(), 2);

    let total_rows: usize = batches.iter().map(Batch::len).sum();
    assert_eq!(total_rows, 10);
    for batch in &batches {
        assert!(batch.char_count() <= 30_000);
        for row in batch.rows() {
            assert_eq!(row.char_count(), 3_500);
        }
    }
}

#[test]
fn test_chunk_withEmptyColumn_shouldReturnNoBatchesAndNoError() {
    let batches = Chunker::default().chunk(&[]).unwrap();
    assert!(batches.is_empty());
}

#[test]
fn test_chunk_withMixedRowSizes_shouldKeepBatchesMaximal() {
    // 49 tiny rows then one 29k row: the big row cannot join the first batch
    let mut column = rows(&vec!["tiny"; 49]);
    column.push(Row::single("b".repeat(29_990)));

    let batches = Chunker::default().chunk(&column).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 49);
    assert_eq!(batches[1].len(), 1);
}

#[test]
fn test_chunk_withTwoCellRows_shouldProduceBatchesTheBuilderAccepts() {
    // 50 rows of 2 cells flatten to 100 texts, twice the per-request cap
    let column: Vec<Row> = (0..50)
        .map(|i| Row::new(vec![format!("left {}", i), format!("right {}", i)]))
        .collect();

    let batches = Chunker::default().chunk(&column).unwrap();
    assert_eq!(batches.len(), 2);

    let builder = RequestBuilder::new("DE", "FR");
    for batch in &batches {
        let request = builder.build(batch, None, None).unwrap();
        assert!(request.text_count <= 50);
    }
}

#[test]
fn test_chunk_calledTwice_shouldProduceIdenticalBoundaries() {
    let column = rows(&vec!["some text"; 137]);
    let chunker = Chunker::default();
    assert_eq!(chunker.chunk(&column).unwrap(), chunker.chunk(&column).unwrap());
}

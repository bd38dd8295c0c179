/*!
 * Tests for tabular store implementations
 */

use coltra::store::column_index;
use coltra::{ColumnRange, CsvStore, MemoryStore, Row, TabularStore};

use crate::common::{create_temp_dir, create_test_csv, create_test_file};

#[tokio::test]
async fn test_csv_store_readColumn_shouldReturnDataRowsInOrder() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_csv(&dir.path().to_path_buf(), "input.csv").unwrap();
    let store = CsvStore::new(path);

    let rows = store.read_column(&ColumnRange::new(1)).await.unwrap();
    assert_eq!(rows, vec![Row::single("Hello"), Row::single("World")]);
}

#[tokio::test]
async fn test_csv_store_roundTrip_shouldOnlyTouchTargetColumn() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_csv(&dir.path().to_path_buf(), "input.csv").unwrap();
    let store = CsvStore::new(&path);
    let range = ColumnRange::new(1);

    store
        .write_column(&range, &[Row::single("Bonjour"), Row::single("Monde")])
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "id,text,notes\n1,Bonjour,first\n2,Monde,second\n");
}

#[tokio::test]
async fn test_csv_store_readColumn_withStartRow_shouldSkipRows() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_csv(&dir.path().to_path_buf(), "input.csv").unwrap();
    let store = CsvStore::new(path);

    let rows = store
        .read_column(&ColumnRange::starting_at(1, 1))
        .await
        .unwrap();
    assert_eq!(rows, vec![Row::single("World")]);
}

#[tokio::test]
async fn test_csv_store_writeColumn_withWrongRowCount_shouldNotModifyFile() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_csv(&dir.path().to_path_buf(), "input.csv").unwrap();
    let before = std::fs::read_to_string(&path).unwrap();
    let store = CsvStore::new(&path);

    let result = store
        .write_column(&ColumnRange::new(1), &[Row::single("only one")])
        .await;
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn test_csv_store_readColumn_withRaggedRecord_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &dir.path().to_path_buf(),
        "ragged.csv",
        "a,b\n1,x\n2\n",
    )
    .unwrap();
    let store = CsvStore::new(path);

    assert!(store.read_column(&ColumnRange::new(1)).await.is_err());
}

#[tokio::test]
async fn test_memory_store_roundTrip_shouldMirrorCsvBehavior() {
    let store = MemoryStore::with_grid(vec![
        vec!["1".to_string(), "Hello".to_string()],
        vec!["2".to_string(), "World".to_string()],
    ]);
    let range = ColumnRange::new(1);

    let rows = store.read_column(&range).await.unwrap();
    store.write_column(&range, &rows).await.unwrap();
    assert_eq!(store.snapshot()[0][1], "Hello");
}

#[test]
fn test_column_index_shouldMatchSpreadsheetLetters() {
    assert_eq!(column_index("A").unwrap(), 0);
    assert_eq!(column_index("Q").unwrap(), 16);
    assert_eq!(column_index("AA").unwrap(), 26);
    assert!(column_index("1").is_err());
}

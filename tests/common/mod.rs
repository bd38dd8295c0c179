/*!
 * Common test utilities for the coltra test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use coltra::{Row, Chunker, ColumnTranslator, MockApi, RequestBuilder, ServiceClient, TranslationApi};
use std::sync::Arc;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample CSV file for testing
pub fn create_test_csv(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "id,text,notes\n1,Hello,first\n2,World,second\n";
    create_test_file(dir, filename, content)
}

/// Build single-cell rows from plain texts
pub fn rows(texts: &[&str]) -> Vec<Row> {
    texts.iter().map(|text| Row::single(*text)).collect()
}

/// Small German-to-French dictionary used by mock transports in tests
pub fn dictionary_translator(text: &str) -> String {
    match text {
        "Hello" => "Bonjour",
        "World" => "Monde",
        "cat" => "chat",
        "dog" => "chien",
        _ => text,
    }
    .to_string()
}

/// Build a translator with default limits over the given mock transport
pub fn translator_over(api: MockApi) -> ColumnTranslator {
    translator_with_concurrency(api, 4)
}

/// Build a translator with default limits and a custom concurrency cap
pub fn translator_with_concurrency(api: MockApi, max_concurrent: usize) -> ColumnTranslator {
    let api: Arc<dyn TranslationApi> = Arc::new(api);
    ColumnTranslator::new(
        Chunker::default(),
        RequestBuilder::new("DE", "FR"),
        ServiceClient::new(api, max_concurrent),
    )
}

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::sync::Arc;

use crate::app_config::Config;
use crate::client::DeepLApi;
use crate::store::{Column, ColumnRange, TabularStore, column_index};
use crate::translation::{ColumnTranslator, UsageReport};

// @module: Application controller for column translation

/// Main application controller driving store reads, translation and
/// write-back for every configured column
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the translator over the real DeepL transport
    fn build_translator(&self) -> ColumnTranslator {
        let api = Arc::new(DeepLApi::new(
            self.config.resolved_api_key(),
            self.config.endpoint.clone(),
            self.config.timeout_secs,
        ));
        ColumnTranslator::from_config(&self.config, api)
    }

    /// Translate every configured column of the store and write the results
    /// back.
    ///
    /// All columns are read and translated first; only when every one of
    /// them succeeded does any write happen. A failure in any column leaves
    /// the store exactly as it was.
    pub async fn run(&self, store: &dyn TabularStore) -> Result<()> {
        let translator = self.build_translator();
        self.run_with_translator(store, &translator).await
    }

    /// Same as `run`, with an injected translator (used by tests to swap in
    /// a mock transport)
    pub async fn run_with_translator(
        &self,
        store: &dyn TabularStore,
        translator: &ColumnTranslator,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        let mut ranges = Vec::with_capacity(self.config.columns.len());
        for letter in &self.config.columns {
            let index = column_index(letter)?;
            ranges.push((letter.clone(), ColumnRange::starting_at(index, self.config.start_row)));
        }

        // Translate everything before writing anything back
        let mut translated: Vec<(ColumnRange, Column)> = Vec::with_capacity(ranges.len());
        for (letter, range) in &ranges {
            let rows = store
                .read_column(range)
                .await
                .with_context(|| format!("failed to read column {}", letter))?;

            if rows.is_empty() {
                warn!("column {} has no data rows, skipping", letter);
                continue;
            }

            info!("translating column {} ({} rows)", letter, rows.len());
            let progress_bar = self.create_progress_bar(letter);
            let pb = progress_bar.clone();

            let output = translator
                .translate_column_with_progress(&rows, None, None, move |done, total| {
                    pb.set_length(total as u64);
                    pb.set_position(done as u64);
                })
                .await
                .map_err(|e| anyhow!("column {}: {}", letter, e))?;

            progress_bar.finish_and_clear();
            translated.push((range.clone(), output));
        }

        for (range, rows) in &translated {
            store
                .write_column(range, rows)
                .await
                .with_context(|| format!("failed to write column {}", range.column))?;
        }

        info!(
            "translated {} columns in {:.1}s",
            translated.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Query usage and quota of the configured credential
    pub async fn usage(&self) -> Result<UsageReport> {
        let translator = self.build_translator();
        let report = translator.usage().await?;
        Ok(report)
    }

    fn create_progress_bar(&self, column: &str) -> ProgressBar {
        let progress_bar = ProgressBar::new(0);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message(format!("column {}", column));
        progress_bar
    }
}

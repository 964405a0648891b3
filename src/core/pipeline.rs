use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::core::counter::FaceCounter;
use crate::core::{ConfigProvider, ImageEntry, ImageRecord, Pipeline, Storage, TableResult};
use crate::utils::error::{FaceCountError, Result};

/// Batch aggregator: enumerates a directory, counts faces per entry,
/// and serializes the summary table to CSV.
pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    counter: FaceCounter,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C, counter: FaceCounter) -> Self {
        Self {
            storage,
            config,
            counter,
        }
    }
}

fn mtime_epoch_seconds(path: &Path) -> Result<i64> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified).timestamp())
}

/// Serialize the summary table: header `,titles,cnts,time`, then one
/// row per record with a 0-based index in the leading column.
fn write_csv(records: &[ImageRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["", "titles", "cnts", "time"])?;
    for (index, record) in records.iter().enumerate() {
        writer.write_record(&[
            index.to_string(),
            record.display_name.clone(),
            record.face_count.to_string(),
            record.last_modified.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| FaceCountError::IoError(e.into_error()))
}

impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    /// Enumerate all entries of the input directory, non-recursive and
    /// unfiltered, preserving enumeration order.
    fn extract(&self) -> Result<Vec<ImageEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(self.config.images_dir())? {
            let entry = entry?;
            let display_name = entry.file_name().to_string_lossy().into_owned();
            entries.push(ImageEntry {
                path: entry.path(),
                display_name,
            });
        }

        tracing::debug!(
            "Enumerated {} entries in {}",
            entries.len(),
            self.config.images_dir()
        );
        Ok(entries)
    }

    fn transform(&self, entries: Vec<ImageEntry>) -> Result<TableResult> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for entry in entries {
            let face_count = match self.counter.count_faces(&entry.path) {
                Ok(count) => count,
                Err(e @ FaceCountError::DecodeError { .. }) if self.config.skip_unreadable() => {
                    tracing::warn!("Skipping unreadable entry '{}': {}", entry.display_name, e);
                    skipped.push(entry.display_name);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let last_modified = mtime_epoch_seconds(&entry.path)?;
            tracing::debug!("{}: {} face(s)", entry.display_name, face_count);

            records.push(ImageRecord {
                file_path: entry.path,
                display_name: entry.display_name,
                face_count,
                last_modified,
            });
        }

        let csv_output = write_csv(&records)?;
        Ok(TableResult {
            records,
            csv_output,
            skipped,
        })
    }

    fn load(&self, table: TableResult) -> Result<String> {
        let filename = self.config.output_filename();

        tracing::debug!(
            "Writing CSV summary ({} bytes, {} rows) to storage",
            table.csv_output.len(),
            table.records.len()
        );
        self.storage.write_file(filename, &table.csv_output)?;

        Ok(format!("{}/{}", self.config.output_path(), filename))
    }
}

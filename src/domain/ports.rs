use crate::domain::model::{FaceBounds, ImageEntry, TableResult};
use crate::utils::error::Result;

/// Pluggable face detection backend.
///
/// Implement this trait to swap in a different detection engine
/// (ONNX, dlib, etc.) without touching the batch pipeline.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in a row-major grayscale buffer of `width` × `height` bytes.
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds>;
}

pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn images_dir(&self) -> &str;
    fn model_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    /// When true, unreadable files are skipped instead of aborting the run.
    fn skip_unreadable(&self) -> bool;
}

/// The three phases of a batch run. Synchronous and single-threaded:
/// each file is fully processed before the next is started.
pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<ImageEntry>>;
    fn transform(&self, entries: Vec<ImageEntry>) -> Result<TableResult>;
    fn load(&self, table: TableResult) -> Result<String>;
}

use std::path::PathBuf;

/// A directory entry queued for detection, in enumeration order.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub path: PathBuf,
    /// Bare filename, used as the `titles` column of the summary.
    pub display_name: String,
}

/// One finished row of the summary table. Immutable after creation.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub file_path: PathBuf,
    pub display_name: String,
    pub face_count: usize,
    /// File mtime in epoch seconds.
    pub last_modified: i64,
}

/// Output of the transform phase: the ordered rows, their CSV
/// serialization, and the names of any entries skipped under the
/// skip-unreadable policy.
#[derive(Debug, Clone)]
pub struct TableResult {
    pub records: Vec<ImageRecord>,
    pub csv_output: Vec<u8>,
    pub skipped: Vec<String>,
}

/// Bounding box of a detected face within an image.
#[derive(Debug, Clone)]
pub struct FaceBounds {
    /// X coordinate of the top-left corner (pixels).
    pub x: f64,
    /// Y coordinate of the top-left corner (pixels).
    pub y: f64,
    /// Width of the bounding box (pixels).
    pub width: f64,
    /// Height of the bounding box (pixels).
    pub height: f64,
    /// Detection confidence score.
    pub confidence: f64,
}

use std::path::Path;

use crate::domain::ports::FaceDetector;
use crate::utils::error::{FaceCountError, Result};

/// Counts faces in image files through a pluggable detection backend.
///
/// Owns the decode step: any unreadable input (missing path, corrupt
/// file, non-image bytes) surfaces as `DecodeError`. Zero detected
/// faces is a normal result, never an error.
pub struct FaceCounter {
    detector: Box<dyn FaceDetector>,
}

impl FaceCounter {
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Self { detector }
    }

    /// Decode `path`, convert to a single-channel grayscale buffer, and
    /// return the number of detected face regions.
    pub fn count_faces(&self, path: &Path) -> Result<usize> {
        let decoded = image::open(path).map_err(|e| FaceCountError::DecodeError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let gray = decoded.to_luma8();
        let (width, height) = gray.dimensions();
        let faces = self.detector.detect(gray.as_raw(), width, height);

        Ok(faces.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FaceBounds;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct FixedDetector {
        count: usize,
    }

    impl FaceDetector for FixedDetector {
        fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Vec<FaceBounds> {
            (0..self.count)
                .map(|i| FaceBounds {
                    x: i as f64 * 30.0,
                    y: 10.0,
                    width: 24.0,
                    height: 24.0,
                    confidence: 4.0,
                })
                .collect()
        }
    }

    struct RecordingDetector {
        seen: Mutex<Option<(usize, u32, u32)>>,
    }

    impl FaceDetector for RecordingDetector {
        fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds> {
            *self.seen.lock().unwrap() = Some((gray.len(), width, height));
            vec![]
        }
    }

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        image::RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn counts_detected_regions() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "faces.png", 64, 48);

        let counter = FaceCounter::new(Box::new(FixedDetector { count: 2 }));
        assert_eq!(counter.count_faces(&path).unwrap(), 2);
    }

    #[test]
    fn zero_faces_is_ok_not_error() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "blank.png", 32, 32);

        let counter = FaceCounter::new(Box::new(FixedDetector { count: 0 }));
        assert_eq!(counter.count_faces(&path).unwrap(), 0);
    }

    #[test]
    fn passes_grayscale_buffer_with_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "dims.png", 40, 30);

        struct ArcDetector(std::sync::Arc<RecordingDetector>);
        impl FaceDetector for ArcDetector {
            fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds> {
                self.0.detect(gray, width, height)
            }
        }

        let shared = std::sync::Arc::new(RecordingDetector {
            seen: Mutex::new(None),
        });
        let counter = FaceCounter::new(Box::new(ArcDetector(shared.clone())));
        counter.count_faces(&path).unwrap();

        let seen = shared.seen.lock().unwrap().unwrap();
        assert_eq!(seen, (40 * 30, 40, 30));
    }

    #[test]
    fn missing_path_is_decode_error() {
        let counter = FaceCounter::new(Box::new(FixedDetector { count: 1 }));
        let err = counter
            .count_faces(Path::new("/nonexistent/face.png"))
            .unwrap_err();
        assert!(matches!(err, FaceCountError::DecodeError { .. }));
    }

    #[test]
    fn non_image_bytes_are_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let counter = FaceCounter::new(Box::new(FixedDetector { count: 1 }));
        let err = counter.count_faces(&path).unwrap_err();
        assert!(matches!(err, FaceCountError::DecodeError { .. }));
    }
}

use std::fs;
use std::io::Cursor;

use crate::domain::model::FaceBounds;
use crate::domain::ports::FaceDetector;
use crate::utils::error::{FaceCountError, Result};

/// Tuning knobs for the SeetaFace multi-scale sliding-window search.
#[derive(Debug, Clone)]
pub struct DetectorSettings {
    pub min_face_size: u32,
    pub score_thresh: f64,
    pub pyramid_scale_factor: f32,
    pub slide_window_step: (u32, u32),
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            min_face_size: 20,
            score_thresh: 2.0,
            // SeetaFace shrinks per pyramid level; 0.83 ≈ a 1.2x scale step
            pyramid_scale_factor: 0.83,
            slide_window_step: (4, 4),
        }
    }
}

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model file is read once at construction and shared read-only
/// across calls; each `detect` builds a per-call detector over a clone
/// of the model, which keeps the trait object usable behind `&self`.
pub struct RustfaceDetector {
    model: rustface::Model,
    settings: DetectorSettings,
}

impl std::fmt::Debug for RustfaceDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustfaceDetector")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl RustfaceDetector {
    /// Load the SeetaFace model from `model_path`.
    pub fn from_file(model_path: &str, settings: DetectorSettings) -> Result<Self> {
        let model_data = fs::read(model_path).map_err(|e| FaceCountError::ModelLoadError {
            path: model_path.to_string(),
            message: e.to_string(),
        })?;

        let model = rustface::read_model(Cursor::new(model_data)).map_err(|e| {
            FaceCountError::ModelLoadError {
                path: model_path.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { model, settings })
    }

    pub fn settings(&self) -> &DetectorSettings {
        &self.settings
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.settings.min_face_size);
        detector.set_score_thresh(self.settings.score_thresh);
        detector.set_pyramid_scale_factor(self.settings.pyramid_scale_factor);
        detector.set_slide_window_step(
            self.settings.slide_window_step.0,
            self.settings.slide_window_step.1,
        );

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBounds {
                    x: bbox.x() as f64,
                    y: bbox.y() as f64,
                    width: bbox.width() as f64,
                    height: bbox.height() as f64,
                    confidence: face.score(),
                }
            })
            .collect()
    }
}

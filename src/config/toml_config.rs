use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::adapters::rustface_detector::DetectorSettings;
use crate::config::DEFAULT_OUTPUT_FILENAME;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FaceCountError, Result};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub detector: DetectorConfig,
    pub load: LoadConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub images_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub model_path: String,
    pub min_face_size: Option<u32>,
    pub score_thresh: Option<f64>,
    pub pyramid_scale_factor: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub skip_unreadable: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FaceCountError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FaceCountError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Detector tuning from the `[detector]` table, with defaults for
    /// anything unset.
    pub fn detector_settings(&self) -> DetectorSettings {
        let defaults = DetectorSettings::default();
        DetectorSettings {
            min_face_size: self.detector.min_face_size.unwrap_or(defaults.min_face_size),
            score_thresh: self.detector.score_thresh.unwrap_or(defaults.score_thresh),
            pyramid_scale_factor: self
                .detector
                .pyramid_scale_factor
                .unwrap_or(defaults.pyramid_scale_factor),
            slide_window_step: defaults.slide_window_step,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("source.images_dir", &self.source.images_dir)?;
        validation::validate_path("detector.model_path", &self.detector.model_path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(size) = self.detector.min_face_size {
            validation::validate_positive_number("detector.min_face_size", size as usize, 1)?;
        }

        if let Some(scale) = self.detector.pyramid_scale_factor {
            validation::validate_range("detector.pyramid_scale_factor", scale, 0.01, 0.99)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn images_dir(&self) -> &str {
        &self.source.images_dir
    }

    fn model_path(&self) -> &str {
        &self.detector.model_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_filename(&self) -> &str {
        self.load.filename.as_deref().unwrap_or(DEFAULT_OUTPUT_FILENAME)
    }

    fn skip_unreadable(&self) -> bool {
        self.error_handling
            .as_ref()
            .and_then(|e| e.skip_unreadable)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

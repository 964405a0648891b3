use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaceCountError {
    #[error("Failed to decode image '{path}': {message}")]
    DecodeError { path: String, message: String },

    #[error("Failed to load detection model '{path}': {message}")]
    ModelLoadError { path: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputData,
    Model,
    Filesystem,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input data; rerunning with a different policy may help.
    Medium,
    /// Processing failed; output was not produced.
    High,
    /// Environment or setup problem; nothing was processed.
    Critical,
}

impl FaceCountError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FaceCountError::DecodeError { .. } => ErrorCategory::InputData,
            FaceCountError::ModelLoadError { .. } => ErrorCategory::Model,
            FaceCountError::IoError(_) => ErrorCategory::Filesystem,
            FaceCountError::CsvError(_) | FaceCountError::ProcessingError { .. } => {
                ErrorCategory::Output
            }
            FaceCountError::ConfigValidationError { .. }
            | FaceCountError::InvalidConfigValueError { .. }
            | FaceCountError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FaceCountError::DecodeError { .. } => ErrorSeverity::Medium,
            FaceCountError::CsvError(_) | FaceCountError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            FaceCountError::ConfigValidationError { .. }
            | FaceCountError::InvalidConfigValueError { .. }
            | FaceCountError::MissingConfigError { .. } => ErrorSeverity::High,
            FaceCountError::ModelLoadError { .. } | FaceCountError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FaceCountError::DecodeError { .. } => {
                "Remove non-image files from the input directory, or rerun with --skip-unreadable"
                    .to_string()
            }
            FaceCountError::ModelLoadError { .. } => {
                "Check that --model-path points to a valid SeetaFace model file".to_string()
            }
            FaceCountError::IoError(_) => {
                "Check that the input directory and output path exist and are accessible"
                    .to_string()
            }
            FaceCountError::CsvError(_) | FaceCountError::ProcessingError { .. } => {
                "Inspect the log output for the failing record".to_string()
            }
            FaceCountError::ConfigValidationError { .. }
            | FaceCountError::InvalidConfigValueError { .. }
            | FaceCountError::MissingConfigError { .. } => {
                "Fix the reported configuration field and rerun".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FaceCountError::DecodeError { path, .. } => {
                format!("Could not read '{}' as an image", path)
            }
            FaceCountError::ModelLoadError { path, .. } => {
                format!("Could not load the face detection model from '{}'", path)
            }
            FaceCountError::IoError(e) => format!("Filesystem problem: {}", e),
            FaceCountError::CsvError(e) => format!("Could not build the CSV summary: {}", e),
            FaceCountError::ProcessingError { message } => message.clone(),
            FaceCountError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            FaceCountError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid configuration value for {} ('{}'): {}", field, value, reason)
            }
            FaceCountError::MissingConfigError { field } => {
                format!("Missing configuration field: {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FaceCountError>;

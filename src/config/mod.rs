pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Output filename used by the reference batch, kept as the default.
pub const DEFAULT_OUTPUT_FILENAME: &str = "test_final output.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "facecount")]
#[command(about = "Count detected faces per image in a directory and write a CSV summary")]
pub struct CliConfig {
    /// Directory of images to process (non-recursive, no extension filtering)
    #[arg(long)]
    pub images_dir: String,

    /// Path to the SeetaFace frontal-face detection model
    #[arg(long, default_value = "seeta_fd_frontal_v1.0.bin")]
    pub model_path: String,

    /// Directory the CSV summary is written to
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Name of the CSV summary file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output_filename: String,

    /// Skip files that cannot be decoded instead of aborting the run
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn images_dir(&self) -> &str {
        &self.images_dir
    }

    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn skip_unreadable(&self) -> bool {
        self.skip_unreadable
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("images_dir", &self.images_dir)?;
        validation::validate_path("model_path", &self.model_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("output_filename", &self.output_filename)?;
        Ok(())
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::local_storage::LocalStorage;
pub use adapters::rustface_detector::{DetectorSettings, RustfaceDetector};
pub use config::CliConfig;
pub use core::counter::FaceCounter;
pub use core::engine::BatchEngine;
pub use core::pipeline::BatchPipeline;
pub use utils::error::{FaceCountError, Result};

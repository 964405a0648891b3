pub mod counter;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{FaceBounds, ImageEntry, ImageRecord, TableResult};
pub use crate::domain::ports::{ConfigProvider, FaceDetector, Pipeline, Storage};
pub use crate::utils::error::Result;

// Adapters layer: concrete implementations for external systems
// (detection engine, output storage).

pub mod local_storage;
pub mod rustface_detector;

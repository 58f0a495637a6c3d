//! Data module - CSV loading and feature normalization

mod loader;
mod processor;
pub mod schema;

pub use loader::{ensure_file, LoaderError, SampleTable};
pub use processor::{FeatureNormalizer, ProcessorError};

//! Tabular dataset preprocessing for LibSVM-style classifiers
//!
//! Converts the Abalone and Census Income datasets from comma-delimited
//! text into the libsvm sparse feature-vector format. All preprocessing
//! parameters (fill values, category codes, scaling statistics) are fit on
//! the training split and applied unchanged to the test split.

pub mod core;
pub mod data;
pub mod pipeline;
pub mod preprocess;

// Re-export main types for convenience
pub use crate::core::{ColumnKind, PrepError, Result, Schema, Table, Value};
pub use crate::data::{RawRows, ReadOptions};
pub use crate::pipeline::PipelineOutput;
pub use crate::preprocess::{Imputer, IndexEncoder, OneHotEncoder, StandardScaler, UnknownPolicy};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

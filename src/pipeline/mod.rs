//! Dataset-specific conversion pipelines
//!
//! Each pipeline reads a train and a test split, fits its preprocessing
//! stages on the training split only, applies them to both, and returns
//! numeric feature matrices ready for LibSVM serialization.

pub mod abalone;
pub mod income;

use crate::core::{PrepError, Result};
use log::info;

/// Converted train and test splits
///
/// `test_y` is empty when the test file carries no label column.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub train_x: Vec<Vec<f64>>,
    pub train_y: Vec<String>,
    pub test_x: Vec<Vec<f64>>,
    pub test_y: Vec<String>,
}

impl PipelineOutput {
    /// Verify feature/label row-count invariants and log the shapes
    ///
    /// A violation here means a pipeline stage dropped or duplicated rows,
    /// so it fails the run rather than just logging.
    pub fn check_shapes(&self) -> Result<()> {
        if let Some(first) = self.train_x.first() {
            info!("First training sample: {:?}", first);
        }
        info!(
            "Training x shape: {} x {}",
            self.train_x.len(),
            self.train_x.first().map_or(0, |row| row.len())
        );
        info!("Training y shape: {}", self.train_y.len());
        info!(
            "Testing x shape: {} x {}",
            self.test_x.len(),
            self.test_x.first().map_or(0, |row| row.len())
        );
        if !self.test_y.is_empty() {
            info!("Testing y shape: {}", self.test_y.len());
        }

        if self.train_x.len() != self.train_y.len() {
            return Err(PrepError::ShapeMismatch {
                expected: self.train_x.len(),
                actual: self.train_y.len(),
            });
        }
        if !self.test_y.is_empty() && self.test_x.len() != self.test_y.len() {
            return Err(PrepError::ShapeMismatch {
                expected: self.test_x.len(),
                actual: self.test_y.len(),
            });
        }

        Ok(())
    }
}

//! Standard-score normalization
//!
//! Per-column mean and population standard deviation are learned from the
//! training matrix and applied unchanged to both splits.

use crate::core::{PrepError, Result};

/// Fitted per-column standardization parameters
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Compute per-column mean and population standard deviation
    pub fn fit(matrix: &[Vec<f64>]) -> Result<Self> {
        let n_cols = match matrix.first() {
            Some(row) => row.len(),
            None => return Err(PrepError::EmptyDataset),
        };

        let mut mean = vec![0.0; n_cols];
        for row in matrix {
            if row.len() != n_cols {
                return Err(PrepError::ShapeMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            for (j, &x) in row.iter().enumerate() {
                mean[j] += x;
            }
        }
        let n = matrix.len() as f64;
        for m in mean.iter_mut() {
            *m /= n;
        }

        let mut var = vec![0.0; n_cols];
        for row in matrix {
            for (j, &x) in row.iter().enumerate() {
                let d = x - mean[j];
                var[j] += d * d;
            }
        }
        let std = var.into_iter().map(|v| (v / n).sqrt()).collect();

        Ok(Self { mean, std })
    }

    /// Apply `(x - mean) / std` per column
    ///
    /// A column whose training standard deviation is zero carries no
    /// information; it maps to 0.0 for every row instead of dividing by
    /// zero.
    pub fn transform(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let mut out = Vec::with_capacity(matrix.len());

        for row in matrix {
            if row.len() != self.mean.len() {
                return Err(PrepError::ShapeMismatch {
                    expected: self.mean.len(),
                    actual: row.len(),
                });
            }

            let scaled = row
                .iter()
                .enumerate()
                .map(|(j, &x)| {
                    if self.std[j] == 0.0 {
                        0.0
                    } else {
                        (x - self.mean[j]) / self.std[j]
                    }
                })
                .collect();
            out.push(scaled);
        }

        Ok(out)
    }
}

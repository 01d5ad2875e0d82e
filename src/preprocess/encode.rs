//! Categorical encoding
//!
//! Two composable stages fit on the training split only:
//!
//! - [`IndexEncoder`] maps each distinct category value to a dense integer
//!   code, assigned in first-seen order.
//! - [`OneHotEncoder`] expands code rows into a fixed-width 0/1 vector with
//!   one slot per distinct training-time column/code pair.
//!
//! The pipelines compose them index-first, so the one-hot stage always
//! operates on a column shape fixed by training. Unknown values at
//! transform time are rejected by the index stage under
//! [`UnknownPolicy::Reject`], or routed through a reserved out-of-vocabulary
//! code under [`UnknownPolicy::OutOfVocab`], which the one-hot stage then
//! maps to an all-zero block for that column.

use crate::core::{PrepError, Result};
use std::collections::{BTreeSet, HashMap};

/// What to do when a transform-time category was never seen in training
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Fail with `UnknownCategory`
    Reject,
    /// Map to the code one past the column's vocabulary
    OutOfVocab,
}

/// Per-column category-to-code mapping
#[derive(Debug, Clone)]
pub struct IndexEncoder {
    index: Vec<HashMap<String, usize>>,
}

impl IndexEncoder {
    /// Assign dense codes per column, in first-seen order
    pub fn fit(rows: &[Vec<String>]) -> Result<Self> {
        let n_cols = match rows.first() {
            Some(row) => row.len(),
            None => return Err(PrepError::EmptyDataset),
        };

        let mut index: Vec<HashMap<String, usize>> = vec![HashMap::new(); n_cols];
        for row in rows {
            if row.len() != n_cols {
                return Err(PrepError::ShapeMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            for (j, value) in row.iter().enumerate() {
                let next = index[j].len();
                index[j].entry(value.clone()).or_insert(next);
            }
        }

        Ok(Self { index })
    }

    /// Map category rows through the fitted per-column codes
    pub fn transform(
        &self,
        rows: &[Vec<String>],
        policy: UnknownPolicy,
    ) -> Result<Vec<Vec<usize>>> {
        let mut out = Vec::with_capacity(rows.len());

        for row in rows {
            if row.len() != self.index.len() {
                return Err(PrepError::ShapeMismatch {
                    expected: self.index.len(),
                    actual: row.len(),
                });
            }

            let mut codes = Vec::with_capacity(row.len());
            for (j, value) in row.iter().enumerate() {
                match self.index[j].get(value) {
                    Some(&code) => codes.push(code),
                    None => match policy {
                        UnknownPolicy::Reject => {
                            return Err(PrepError::UnknownCategory {
                                column: j,
                                value: value.clone(),
                            });
                        }
                        UnknownPolicy::OutOfVocab => codes.push(self.index[j].len()),
                    },
                }
            }
            out.push(codes);
        }

        Ok(out)
    }

    /// Number of encoded columns
    pub fn n_cols(&self) -> usize {
        self.index.len()
    }

    /// Number of distinct training values in a column
    ///
    /// # Panics
    /// Panics if `j` is out of range
    pub fn cardinality(&self, j: usize) -> usize {
        self.index[j].len()
    }
}

/// Fixed-width one-hot expansion of code rows
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    slots: Vec<HashMap<usize, usize>>,
    width: usize,
}

impl OneHotEncoder {
    /// Allocate one output slot per distinct column/code pair
    ///
    /// Slots are laid out column by column, codes ascending within a
    /// column, so the layout depends only on the training data.
    pub fn fit(code_rows: &[Vec<usize>]) -> Result<Self> {
        let n_cols = match code_rows.first() {
            Some(row) => row.len(),
            None => return Err(PrepError::EmptyDataset),
        };

        let mut seen: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n_cols];
        for row in code_rows {
            if row.len() != n_cols {
                return Err(PrepError::ShapeMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            for (j, &code) in row.iter().enumerate() {
                seen[j].insert(code);
            }
        }

        let mut slots = Vec::with_capacity(n_cols);
        let mut width = 0;
        for codes in seen {
            let mut column_slots = HashMap::new();
            for code in codes {
                column_slots.insert(code, width);
                width += 1;
            }
            slots.push(column_slots);
        }

        Ok(Self { slots, width })
    }

    /// Expand code rows into 0/1 vectors of the fitted width
    ///
    /// A code without a slot contributes nothing, leaving that column's
    /// slots all zero. This is the designed unknown-category path, never
    /// an error.
    pub fn transform(&self, code_rows: &[Vec<usize>]) -> Result<Vec<Vec<f64>>> {
        let mut out = Vec::with_capacity(code_rows.len());

        for row in code_rows {
            if row.len() != self.slots.len() {
                return Err(PrepError::ShapeMismatch {
                    expected: self.slots.len(),
                    actual: row.len(),
                });
            }

            let mut expanded = vec![0.0; self.width];
            for (j, code) in row.iter().enumerate() {
                if let Some(&slot) = self.slots[j].get(code) {
                    expanded[slot] = 1.0;
                }
            }
            out.push(expanded);
        }

        Ok(out)
    }

    /// Total number of output slots
    pub fn width(&self) -> usize {
        self.width
    }
}

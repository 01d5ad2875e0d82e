//! Core type definitions for tabular preprocessing

use crate::core::{PrepError, Result};

/// A single table cell after schema casting
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric field
    Num(f64),
    /// Categorical field, kept as a trimmed string
    Text(String),
    /// Field that matched the dataset's missing-value sentinel
    Missing,
}

impl Value {
    /// Returns true for the missing-value marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric payload, if any
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(x) => Some(*x),
            _ => None,
        }
    }

    /// Text payload, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Declared type of a column, fixed per dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Real-valued measurement column
    Numeric,
    /// Discrete label column
    Categorical,
}

/// Per-dataset column declaration plus the missing-value convention
///
/// Replaces opportunistic per-field type guessing: every column's type is
/// declared once, and a failed numeric cast is a parse error instead of a
/// silent fallback to string.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnKind>,
    missing_sentinel: Option<String>,
}

impl Schema {
    /// Create a schema from an ordered column declaration
    pub fn new(columns: Vec<ColumnKind>) -> Self {
        Self {
            columns,
            missing_sentinel: None,
        }
    }

    /// Declare the sentinel string that marks a missing field (e.g. `?`)
    pub fn with_missing_sentinel(mut self, sentinel: &str) -> Self {
        self.missing_sentinel = Some(sentinel.to_string());
        self
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema declares no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cast raw string rows into a typed table
    ///
    /// Every row must have exactly as many fields as the schema declares.
    /// A field equal to the missing sentinel becomes `Value::Missing`
    /// regardless of the column kind; otherwise numeric columns must parse
    /// as `f64` and categorical columns are kept as strings.
    pub fn cast(&self, rows: &[Vec<String>]) -> Result<Table> {
        let mut out = Vec::with_capacity(rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(PrepError::ShapeMismatch {
                    expected: self.columns.len(),
                    actual: row.len(),
                });
            }

            let mut cast_row = Vec::with_capacity(row.len());
            for (field, kind) in row.iter().zip(self.columns.iter()) {
                if self.missing_sentinel.as_deref() == Some(field.as_str()) {
                    cast_row.push(Value::Missing);
                    continue;
                }

                match kind {
                    ColumnKind::Numeric => {
                        let x = field.parse::<f64>().map_err(|_| {
                            PrepError::Parse(format!(
                                "row {}: invalid numeric value: {}",
                                row_idx + 1,
                                field
                            ))
                        })?;
                        cast_row.push(Value::Num(x));
                    }
                    ColumnKind::Categorical => {
                        cast_row.push(Value::Text(field.trim().to_string()));
                    }
                }
            }
            out.push(cast_row);
        }

        Table::new(out)
    }
}

/// Rectangular table of typed values
///
/// Every row holds exactly `n_cols` values; the constructor rejects ragged
/// input. Row order is the file order and is preserved by every transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Value>>,
    n_cols: usize,
}

impl Table {
    /// Build a table from rows, validating rectangularity
    pub fn new(rows: Vec<Vec<Value>>) -> Result<Self> {
        let n_cols = match rows.first() {
            Some(row) => row.len(),
            None => return Err(PrepError::EmptyDataset),
        };

        for row in &rows {
            if row.len() != n_cols {
                return Err(PrepError::ShapeMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { rows, n_cols })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// All rows in file order
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Single row by index
    ///
    /// # Panics
    /// Panics if `i >= n_rows()`
    pub fn row(&self, i: usize) -> &[Value] {
        &self.rows[i]
    }

    /// Iterate over one column, top to bottom
    ///
    /// # Panics
    /// Panics if `j >= n_cols()`
    pub fn column(&self, j: usize) -> impl Iterator<Item = &Value> {
        assert!(j < self.n_cols, "column index out of range");
        self.rows.iter().map(move |row| &row[j])
    }

    /// Project the table onto a subset of columns, preserving row order
    ///
    /// # Panics
    /// Panics if any index is out of range
    pub fn select(&self, indices: &[usize]) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&j| row[j].clone()).collect())
            .collect();

        Table {
            rows,
            n_cols: indices.len(),
        }
    }
}

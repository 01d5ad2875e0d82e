//! Comma-delimited row reader
//!
//! Reads a dataset file into raw string rows, optionally skipping a header
//! line and splitting the last column off as the label. Typing of the
//! fields is deferred to [`Schema::cast`](crate::core::Schema::cast).

use crate::core::{PrepError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader flags, fixed per dataset file
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Skip the first line of the file
    pub skip_header: bool,
    /// Split the last field of every row off as the label
    pub with_label: bool,
}

/// Raw string rows with their labels in file order
///
/// `labels` is empty when the file was read without a label column;
/// otherwise it is parallel to `rows`.
#[derive(Debug, Clone)]
pub struct RawRows {
    pub rows: Vec<Vec<String>>,
    pub labels: Vec<String>,
}

impl RawRows {
    /// Read a comma-delimited file
    pub fn from_file<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<Self> {
        let file = File::open(path).map_err(PrepError::Io)?;
        Self::from_reader(BufReader::new(file), options)
    }

    /// Read comma-delimited records from any buffered reader
    ///
    /// Empty lines are skipped. All records must have the same field count;
    /// the first record fixes it.
    pub fn from_reader<R: BufRead>(reader: R, options: ReadOptions) -> Result<Self> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut labels = Vec::new();
        let mut width: Option<usize> = None;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(PrepError::Io)?;
            let line = line.trim();

            if options.skip_header && line_num == 0 {
                continue;
            }
            if line.is_empty() {
                continue;
            }

            let mut fields: Vec<String> =
                line.split(',').map(|f| f.trim().to_string()).collect();

            match width {
                None => {
                    if options.with_label && fields.len() < 2 {
                        return Err(PrepError::Parse(format!(
                            "line {}: expected at least one feature and a label",
                            line_num + 1
                        )));
                    }
                    width = Some(fields.len());
                }
                Some(w) if fields.len() != w => {
                    return Err(PrepError::Parse(format!(
                        "line {}: expected {} fields, got {}",
                        line_num + 1,
                        w,
                        fields.len()
                    )));
                }
                Some(_) => {}
            }

            if options.with_label {
                let label = fields.pop().unwrap_or_default();
                labels.push(label);
            }
            rows.push(fields);
        }

        if rows.is_empty() {
            return Err(PrepError::EmptyDataset);
        }

        Ok(RawRows { rows, labels })
    }

    /// Number of records read
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

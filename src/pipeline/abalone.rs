//! Abalone dataset pipeline
//!
//! The first column is the sex marker (M, F, or I); the remaining seven
//! columns are physical measurements and the label is the ring count. The
//! marker column is replaced by three trailing indicator columns in fixed
//! M, F, I order. No imputation or normalization is applied.

use crate::core::{ColumnKind, PrepError, Result, Schema, Table};
use crate::data::{RawRows, ReadOptions};
use crate::pipeline::PipelineOutput;
use log::info;
use std::path::Path;

/// Known sex marker values, in indicator-column order
const SEX_CATEGORIES: [&str; 3] = ["M", "F", "I"];

/// Number of numeric measurement columns following the marker
const N_MEASUREMENTS: usize = 7;

/// Column declaration for the abalone feature columns
pub fn schema() -> Schema {
    let mut columns = vec![ColumnKind::Categorical];
    columns.extend(std::iter::repeat(ColumnKind::Numeric).take(N_MEASUREMENTS));
    Schema::new(columns)
}

/// Expand both splits: numeric passthrough plus trailing sex indicators
///
/// The indicator layout is fixed by `SEX_CATEGORIES`, not by the data, so
/// train and test always agree on column meaning. A marker outside the
/// known set yields three zero indicators.
pub fn preprocess(train: &Table, test: &Table) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    Ok((expand(train)?, expand(test)?))
}

fn expand(table: &Table) -> Result<Vec<Vec<f64>>> {
    let mut out = Vec::with_capacity(table.n_rows());

    for row in table.rows() {
        let marker = row[0].as_text().ok_or_else(|| {
            PrepError::Parse("abalone sex marker column is not categorical".to_string())
        })?;

        let mut features = Vec::with_capacity(N_MEASUREMENTS + SEX_CATEGORIES.len());
        for value in &row[1..] {
            let x = value.as_num().ok_or_else(|| {
                PrepError::Parse("abalone measurement column is not numeric".to_string())
            })?;
            features.push(x);
        }
        for category in SEX_CATEGORIES {
            features.push(if marker == category { 1.0 } else { 0.0 });
        }
        out.push(features);
    }

    Ok(out)
}

/// Read, preprocess, and shape-check the abalone train/test files
pub fn run<P: AsRef<Path>>(train_path: P, test_path: P) -> Result<PipelineOutput> {
    info!("Reading the Abalone dataset");

    let options = ReadOptions {
        skip_header: false,
        with_label: true,
    };
    let train_raw = RawRows::from_file(train_path, options)?;
    let test_raw = RawRows::from_file(test_path, options)?;

    let schema = schema();
    let train = schema.cast(&train_raw.rows)?;
    let test = schema.cast(&test_raw.rows)?;
    let (train_x, test_x) = preprocess(&train, &test)?;

    let output = PipelineOutput {
        train_x,
        train_y: train_raw.labels,
        test_x,
        test_y: test_raw.labels,
    };
    output.check_shapes()?;

    Ok(output)
}

//! Census income dataset pipeline
//!
//! Fourteen mixed feature columns with `?` as the missing-value sentinel.
//! Categorical columns are imputed with their training mode, index-encoded,
//! then one-hot-encoded; continuous columns are imputed with their training
//! mean. The one-hot block and the continuous block are concatenated
//! (categorical first) and the whole matrix is standardized with training
//! statistics. The test file carries no label column.

use crate::core::{ColumnKind, PrepError, Result, Schema, Table};
use crate::data::{RawRows, ReadOptions};
use crate::pipeline::PipelineOutput;
use crate::preprocess::{Imputer, IndexEncoder, OneHotEncoder, StandardScaler, UnknownPolicy};
use log::info;
use std::path::Path;

/// Number of feature columns in the raw files
const N_COLUMNS: usize = 14;

/// Columns holding discrete category values
const CATEGORICAL_COLUMNS: [usize; 8] = [1, 3, 5, 6, 7, 8, 9, 13];

/// Columns holding continuous measurements
///
/// Column 4 (education-num) is dropped entirely; it is a numeric recoding
/// of the education column (3) and carries no extra information.
const CONTINUOUS_COLUMNS: [usize; 5] = [0, 2, 10, 11, 12];

/// Field marking a missing value in the raw files
const MISSING_SENTINEL: &str = "?";

/// Column declaration for the income feature columns
pub fn schema() -> Schema {
    let columns = (0..N_COLUMNS)
        .map(|j| {
            if CATEGORICAL_COLUMNS.contains(&j) {
                ColumnKind::Categorical
            } else {
                ColumnKind::Numeric
            }
        })
        .collect();

    Schema::new(columns).with_missing_sentinel(MISSING_SENTINEL)
}

/// Impute, encode, concatenate, and standardize both splits
///
/// All parameters are fit on the training table. Test rows with category
/// values unseen in training pass through the out-of-vocabulary code and
/// land on an all-zero one-hot block for that column.
pub fn preprocess(train: &Table, test: &Table) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    let imputer = Imputer::fit(train)?;
    let train = imputer.transform(train)?;
    let test = imputer.transform(test)?;

    let train_cat = categorical_block(&train)?;
    let test_cat = categorical_block(&test)?;

    let indexer = IndexEncoder::fit(&train_cat)?;
    let train_codes = indexer.transform(&train_cat, UnknownPolicy::Reject)?;
    let test_codes = indexer.transform(&test_cat, UnknownPolicy::OutOfVocab)?;

    let one_hot = OneHotEncoder::fit(&train_codes)?;
    let train_one_hot = one_hot.transform(&train_codes)?;
    let test_one_hot = one_hot.transform(&test_codes)?;

    let train_x = concat(train_one_hot, continuous_block(&train)?);
    let test_x = concat(test_one_hot, continuous_block(&test)?);

    let scaler = StandardScaler::fit(&train_x)?;
    Ok((scaler.transform(&train_x)?, scaler.transform(&test_x)?))
}

fn categorical_block(table: &Table) -> Result<Vec<Vec<String>>> {
    table
        .select(&CATEGORICAL_COLUMNS)
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| {
                    v.as_text().map(|s| s.to_string()).ok_or_else(|| {
                        PrepError::Parse(
                            "income categorical column is not categorical".to_string(),
                        )
                    })
                })
                .collect()
        })
        .collect()
}

fn continuous_block(table: &Table) -> Result<Vec<Vec<f64>>> {
    table
        .select(&CONTINUOUS_COLUMNS)
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| {
                    v.as_num().ok_or_else(|| {
                        PrepError::Parse("income continuous column is not numeric".to_string())
                    })
                })
                .collect()
        })
        .collect()
}

/// Column-wise concatenation, categorical block first
fn concat(mut left: Vec<Vec<f64>>, right: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    for (row, extra) in left.iter_mut().zip(right) {
        row.extend(extra);
    }
    left
}

/// Read, preprocess, and shape-check the income train/test files
pub fn run<P: AsRef<Path>>(train_path: P, test_path: P) -> Result<PipelineOutput> {
    info!("Reading the Income dataset");

    let train_raw = RawRows::from_file(
        train_path,
        ReadOptions {
            skip_header: false,
            with_label: true,
        },
    )?;
    let test_raw = RawRows::from_file(
        test_path,
        ReadOptions {
            skip_header: false,
            with_label: false,
        },
    )?;

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

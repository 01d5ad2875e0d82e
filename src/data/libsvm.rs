//! LibSVM format writer
//!
//! Serializes a feature matrix to the libsvm text format:
//! label index:value index:value ...
//!
//! Example:
//! 15 1:0.455 2:0.365 3:0.095
//!
//! Indices are 1-based and every column is written, zero-valued columns
//! included; sparsity is a property of the syntax here, not of the output.

use crate::core::{PrepError, Result};
use std::fmt::Display;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write rows in libsvm format to any writer
///
/// The leading token of each line is the row's label, or the literal `0`
/// when no label vector is supplied. Values are rendered through their
/// `Display` implementation, so `f64` rows use Rust's shortest
/// round-trip decimal form.
pub fn write<W: Write, V: Display>(
    writer: &mut W,
    rows: &[Vec<V>],
    labels: Option<&[String]>,
) -> Result<()> {
    if let Some(labels) = labels {
        if labels.len() != rows.len() {
            return Err(PrepError::ShapeMismatch {
                expected: rows.len(),
                actual: labels.len(),
            });
        }
    }

    for (i, row) in rows.iter().enumerate() {
        match labels {
            Some(labels) => write!(writer, "{}", labels[i]).map_err(PrepError::Io)?,
            None => write!(writer, "0").map_err(PrepError::Io)?,
        }

        for (j, value) in row.iter().enumerate() {
            write!(writer, " {}:{}", j + 1, value).map_err(PrepError::Io)?;
        }
        writeln!(writer).map_err(PrepError::Io)?;
    }

    Ok(())
}

/// Write rows in libsvm format to a file, atomically
///
/// The output is staged in a temporary file in the destination directory
/// and moved into place only after every row has been written, so a failed
/// run never leaves a truncated output file behind.
pub fn write_file<P: AsRef<Path>, V: Display>(
    path: P,
    rows: &[Vec<V>],
    labels: Option<&[String]>,
) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(PrepError::Io)?;
    let mut writer = BufWriter::new(tmp);
    write(&mut writer, rows, labels)?;

    let tmp = writer
        .into_inner()
        .map_err(|e| PrepError::Io(e.into_error()))?;
    tmp.persist(path).map_err(|e| PrepError::Io(e.error))?;

    Ok(())
}

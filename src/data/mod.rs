//! Reading raw dataset rows and writing the LibSVM output format

pub mod csv;
pub mod libsvm;

pub use self::csv::{RawRows, ReadOptions};

//! Core types and errors for dataset preprocessing

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;

//! Error types for rpngrid core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or writing a grid.
///
/// Problems inside cell expressions are not errors at this level; they end
/// up as the error marker in the output.
#[derive(Error, Debug)]
pub enum RpngridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to read {path}: file too large ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid delimiter {0:?}: must be a single non-whitespace character")]
    InvalidDelimiter(String),
}

pub type Result<T> = std::result::Result<T, RpngridError>;

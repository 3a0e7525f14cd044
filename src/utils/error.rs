//! Error handling for table generation
//!
//! This module provides a unified error type and result type for the
//! description-loading and rendering pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

/// Table generation error type
#[derive(Debug, Clone)]
pub enum TableError {
    /// Configuration error - the conversion description is malformed
    Configuration { message: String },
    /// IO error (description, CSV or output file)
    Io { message: String },
    /// Structural error - a CSV record is shorter than the declared columns
    Structure {
        column: usize,
        row: usize,
        path: PathBuf,
    },
    /// Conversion error - a numerical field could not be parsed
    Conversion {
        value: String,
        column: usize,
        row: usize,
        path: PathBuf,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Configuration { message } => {
                write!(f, "Configuration error: {}", message)
            }
            TableError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            TableError::Structure { column, row, path } => {
                write!(
                    f,
                    "Column {} doesn't exist on row {} in {}",
                    column,
                    row,
                    path.display()
                )
            }
            TableError::Conversion {
                value,
                column,
                row,
                path,
            } => {
                write!(
                    f,
                    "Offending value '{}' in column {} on row {} in {}",
                    value,
                    column,
                    row,
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for table generation operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn config(message: impl Into<String>) -> Self {
        TableError::Configuration {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        TableError::Io {
            message: message.into(),
        }
    }

    pub fn structure(column: usize, row: usize, path: &Path) -> Self {
        TableError::Structure {
            column,
            row,
            path: path.to_path_buf(),
        }
    }

    pub fn conversion(value: impl Into<String>, column: usize, row: usize, path: &Path) -> Self {
        TableError::Conversion {
            value: value.into(),
            column,
            row,
            path: path.to_path_buf(),
        }
    }
}

use std::io;
use thiserror::Error;

use mutseq_core::SequenceError;

/// Error type for mutseq-io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Opening a file or parsing a FASTA header failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Malformed CSV/TSV record.
    #[error("Malformed mutation table: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the mutation table header.
    #[error("Column '{column}' not found in mutation table {path} (available: {available})")]
    MissingColumn {
        column: String,
        path: String,
        available: String,
    },

    /// Failed to create parent directories for file.
    #[error("Failed to create parent directories for file")]
    ParentDirectoryCreation,
}

/// Result type alias for mutseq-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

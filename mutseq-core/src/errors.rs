use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("FASTA header has no sequence identifier: {0}")]
    EmptyIdentifier(String),

    #[error("Sequence data found before the first FASTA header in: {0}")]
    MissingHeader(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DnaMassError {
    #[error("Input sequence file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid DNA sequence: unexpected symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Mass is undefined for a strand with no bases.
    #[error("Cannot weigh an empty sequence: no bases were read")]
    EmptySequence,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DnaMassError>;

//! Error types for implicant computation

use super::Minterm;
use std::fmt;
use std::io;

/// Errors raised while building terms or reducing a minterm list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// A minterm does not fit in the given number of variables
    MintermOutOfRange {
        /// The offending minterm
        minterm: Minterm,
        /// Number of variables (the valid range is `0..2^num_vars`)
        num_vars: usize,
    },
    /// A term string contains something other than `0`, `1` or `-`
    InvalidTermSymbol {
        /// The invalid symbol
        symbol: char,
        /// Its position in the term string
        position: usize,
    },
    /// A term's width does not match the number of variables
    WidthMismatch {
        /// Width of the term
        width: usize,
        /// Number of variables
        num_vars: usize,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::MintermOutOfRange { minterm, num_vars } => write!(
                f,
                "Minterm {} out of range for {} variable(s)",
                minterm, num_vars
            ),
            CoverError::InvalidTermSymbol { symbol, position } => write!(
                f,
                "Invalid term symbol '{}' at position {}. Expected 0, 1 or - (don't care).",
                symbol, position
            ),
            CoverError::WidthMismatch { width, num_vars } => write!(
                f,
                "Term of width {} does not match {} variable(s)",
                width, num_vars
            ),
        }
    }
}

impl std::error::Error for CoverError {}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

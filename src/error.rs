//! Error types for the analysis pipeline
//!
//! Each stage has its own error type; [`LogicError`] aggregates them so the
//! whole pipeline can be driven with `?`.

use crate::cover::CoverError;
use crate::expression::{EvalError, ParseBoolExprError, VariableError};
use std::fmt;
use std::io;

/// The main error type of the crate
///
/// Every variant is fatal for the run that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// The input is not a well-formed expression
    Parse(ParseBoolExprError),
    /// A variable name is not a single lowercase letter
    Variable(VariableError),
    /// Evaluation failed (unassigned variable or too many variables)
    Eval(EvalError),
    /// The minterm list could not be reduced
    Cover(CoverError),
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Parse(err) => write!(f, "{}", err),
            LogicError::Variable(err) => write!(f, "{}", err),
            LogicError::Eval(err) => write!(f, "{}", err),
            LogicError::Cover(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Parse(err) => Some(err),
            LogicError::Variable(err) => Some(err),
            LogicError::Eval(err) => Some(err),
            LogicError::Cover(err) => Some(err),
        }
    }
}

impl From<ParseBoolExprError> for LogicError {
    fn from(err: ParseBoolExprError) -> Self {
        LogicError::Parse(err)
    }
}

impl From<VariableError> for LogicError {
    fn from(err: VariableError) -> Self {
        LogicError::Variable(err)
    }
}

impl From<EvalError> for LogicError {
    fn from(err: EvalError) -> Self {
        LogicError::Eval(err)
    }
}

impl From<CoverError> for LogicError {
    fn from(err: CoverError) -> Self {
        LogicError::Cover(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Parse(_) => io::Error::new(io::ErrorKind::InvalidData, err),
            _ => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}

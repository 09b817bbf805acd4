//! Error types for boolean expression parsing, variable discovery and evaluation

use super::parser::MAX_NESTING;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Syntax errors raised by the recursive-descent parser
///
/// Positions are zero-based character indices into the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// A factor was expected but a different character was found
    UnexpectedCharacter {
        /// The offending character
        found: char,
        /// Where it occurred
        position: usize,
    },
    /// The input ended where a factor was expected
    UnexpectedEnd {
        /// Length of the input (the position just past its end)
        position: usize,
    },
    /// A parenthesised subexpression was not closed
    MissingClosingParen {
        /// What was found instead of `)`, `None` at end of input
        found: Option<char>,
        /// Where the `)` was expected
        position: usize,
    },
    /// A complete expression was parsed but input remains
    TrailingInput {
        /// First unconsumed character
        found: char,
        /// Where it occurred
        position: usize,
    },
    /// Operator chains or parentheses nest deeper than the parser allows
    NestingTooDeep {
        /// Where the limit was reached
        position: usize,
    },
}

impl ExpressionParseError {
    /// Position of the offending character in the input
    pub fn position(&self) -> usize {
        match self {
            ExpressionParseError::UnexpectedCharacter { position, .. }
            | ExpressionParseError::UnexpectedEnd { position }
            | ExpressionParseError::MissingClosingParen { position, .. }
            | ExpressionParseError::TrailingInput { position, .. }
            | ExpressionParseError::NestingTooDeep { position } => *position,
        }
    }
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::UnexpectedCharacter { found, position } => write!(
                f,
                "Expected a variable, a literal or a subexpression at position {} -- got '{}'",
                position, found
            ),
            ExpressionParseError::UnexpectedEnd { position } => write!(
                f,
                "Expected a variable, a literal or a subexpression at position {} -- got end of input",
                position
            ),
            ExpressionParseError::MissingClosingParen { found, position } => match found {
                Some(ch) => write!(
                    f,
                    "Expected a \")\" after the expression at position {} -- got '{}'",
                    position, ch
                ),
                None => write!(
                    f,
                    "Expected a \")\" after the expression at position {} -- got end of input",
                    position
                ),
            },
            ExpressionParseError::TrailingInput { found, position } => write!(
                f,
                "Unexpected trailing input '{}' at position {}",
                found, position
            ),
            ExpressionParseError::NestingTooDeep { position } => write!(
                f,
                "Expression nests too deeply at position {} (at most {} levels)",
                position, MAX_NESTING
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when parsing a boolean expression
///
/// This error type is returned by `BoolExpr::parse()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoolExprError {
    /// Syntax error together with the input that caused it
    Syntax {
        /// The underlying parse error
        error: ExpressionParseError,
        /// The original input string that failed to parse
        input: Arc<str>,
    },
}

impl ParseBoolExprError {
    /// The underlying syntax error
    pub fn error(&self) -> &ExpressionParseError {
        match self {
            ParseBoolExprError::Syntax { error, .. } => error,
        }
    }
}

impl fmt::Display for ParseBoolExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoolExprError::Syntax { error, input } => {
                write!(f, "Failed to parse boolean expression: {}. Input: {:?}", error, input)
            }
        }
    }
}

impl std::error::Error for ParseBoolExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoolExprError::Syntax { error, .. } => Some(error),
        }
    }
}

impl From<ParseBoolExprError> for io::Error {
    fn from(err: ParseBoolExprError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while collecting the variables of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// A variable name is not a single lowercase ASCII letter
    IllegalIdentifier {
        /// The offending name
        name: char,
        /// Where it occurs in the input
        position: usize,
    },
}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableError::IllegalIdentifier { name, position } => write!(
                f,
                "Illegal identifier '{}' at position {}: variable names must be a single lowercase letter",
                name, position
            ),
        }
    }
}

impl std::error::Error for VariableError {}

impl From<VariableError> for io::Error {
    fn from(err: VariableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors raised by the evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no value for a variable of the expression
    UnassignedVariable {
        /// The variable without a value
        name: char,
    },
    /// More variables than a truth table can enumerate
    TooManyVariables {
        /// Number of variables requested
        count: usize,
        /// The supported maximum
        max: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnassignedVariable { name } => {
                write!(f, "Variable '{}' has no value in the assignment", name)
            }
            EvalError::TooManyVariables { count, max } => write!(
                f,
                "Cannot enumerate {} variables (at most {} are supported)",
                count, max
            ),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

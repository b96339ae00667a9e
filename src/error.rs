//! Error types for truth-table generation and minimization
//!
//! Parse errors live with the parser in [`crate::expression::ParseError`];
//! this module covers everything downstream of a successful parse, plus the
//! catch-all [`Error`] used by callers that drive the whole pipeline.

use crate::expression::ParseError;
use std::fmt;

/// Errors raised by the postfix stack machine while generating a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operator popped an empty stack.
    InsufficientOperands {
        /// Symbol of the operator that failed.
        operator: &'static str,
    },
    /// A variable token did not appear in the supplied variable list.
    UnknownVariable {
        /// The unresolved variable.
        variable: char,
    },
    /// After evaluating every token, the stack did not hold exactly one value.
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InsufficientOperands { operator } => {
                write!(f, "Not enough operands for operator '{}'", operator)
            }
            EvalError::UnknownVariable { variable } => {
                write!(f, "Variable '{}' is not bound in this table", variable)
            }
            EvalError::MalformedExpression { remaining } => write!(
                f,
                "Malformed expression: {} value(s) left on the evaluation stack",
                remaining
            ),
        }
    }
}

impl std::error::Error for EvalError {}

/// Errors raised by a reducer.
///
/// Minimization over a valid truth table is otherwise infallible; internal
/// inconsistencies degrade to best-effort partial expressions instead of
/// surfacing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// The Karnaugh grid layout is only canonical up to a fixed variable
    /// count; larger requests are declined rather than grouped incorrectly.
    TooManyVariables {
        /// Requested variable count.
        variables: usize,
        /// Largest supported count.
        limit: usize,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::TooManyVariables { variables, limit } => write!(
                f,
                "Too many variables for this method: {} (supports up to {})",
                variables, limit
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

/// Top-level error for callers running the full parse/generate/minimize
/// pipeline.
#[derive(Debug)]
pub enum Error {
    /// Expression validation or parsing failed.
    Parse(ParseError),
    /// Truth-table evaluation failed.
    Eval(EvalError),
    /// A reducer declined the request.
    Minimize(MinimizeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Eval(e) => write!(f, "{}", e),
            Error::Minimize(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
            Error::Minimize(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

impl From<MinimizeError> for Error {
    fn from(err: MinimizeError) -> Self {
        Error::Minimize(err)
    }
}

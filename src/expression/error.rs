//! Error types for expression parsing

use std::fmt;

/// Errors detected while validating and parsing an expression string.
///
/// All variants are detected before any truth table is generated or any
/// minimization runs; a failed parse produces no partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty (or whitespace only).
    EmptyExpression,
    /// A character outside the supported set was found after whitespace
    /// stripping. A lone `-` not followed by `>` is reported here too.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character position in the whitespace-stripped input.
        position: usize,
    },
    /// Parenthesis balance went negative or did not return to zero.
    UnbalancedParentheses,
    /// The operator stack emptied while looking for `(` during conversion.
    ///
    /// Guarded against explicitly; cannot normally occur after the balance
    /// check has passed.
    MismatchedParenthesis,
    /// Structurally invalid operator placement: an expression starting or
    /// ending with a binary operator, empty `()`, doubled binary operators,
    /// or a dangling negation.
    MismatchedOperatorPlacement {
        /// Human-readable reason.
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyExpression => write!(f, "Expression is empty"),
            ParseError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid character {:?} at position {}. Expected a-e, 0, 1, \
                 parentheses, or one of !, &, |, ->, ~",
                character, position
            ),
            ParseError::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in expression")
            }
            ParseError::MismatchedParenthesis => {
                write!(f, "Closing parenthesis without a matching opening one")
            }
            ParseError::MismatchedOperatorPlacement { reason } => {
                write!(f, "Invalid operator placement: {}", reason)
            }
        }
    }
}

impl std::error::Error for ParseError {}

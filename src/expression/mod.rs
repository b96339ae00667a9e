//! Propositional expression parsing
//!
//! This module turns a raw expression string over the variables `a`-`e` into
//! a validated postfix (Reverse Polish) program plus the sorted list of
//! variables it mentions. Parsing is a pure function of the input text.
//!
//! # Supported syntax
//!
//! - Variables: `a`, `b`, `c`, `d`, `e`
//! - Constants: `0`, `1`
//! - Operators: `!` (NOT), `&` (AND), `|` (OR), `->` (implication),
//!   `~` (equivalence)
//! - Parentheses for grouping; whitespace is ignored
//!
//! Operator precedence, high to low: `!` > `&` > `|` > `->` = `~`.
//! Binary operators are left-associative; `!` is a right-associative prefix.
//!
//! # Examples
//!
//! ```
//! use quine_logic::expression::parse;
//!
//! let parsed = parse("(a -> b) & c").unwrap();
//! assert_eq!(parsed.variables(), &['a', 'b', 'c']);
//! ```

mod error;
mod lexer;
mod parser;

pub use error::ParseError;

use std::fmt;

/// The fixed, ordered variable alphabet.
///
/// The set of variables used by an expression is exactly those appearing in
/// it, sorted in this order; the first variable present is the most
/// significant bit of the truth-table row index.
pub const ALPHABET: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// A binary connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `&`
    And,
    /// `|`
    Or,
    /// `->`
    Implies,
    /// `~`, logical equivalence (biconditional)
    Equiv,
}

impl BinOp {
    /// Binding strength; `!` sits above all of these at 4.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinOp::And => 3,
            BinOp::Or => 2,
            BinOp::Implies | BinOp::Equiv => 1,
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Implies => "->",
            BinOp::Equiv => "~",
        }
    }
}

/// A lexical token of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A variable from [`ALPHABET`].
    Var(char),
    /// A constant `0` or `1`.
    Const(bool),
    /// Prefix negation `!`.
    Not,
    /// A binary connective.
    Bin(BinOp),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(v) => write!(f, "{}", v),
            Token::Const(c) => write!(f, "{}", if *c { "1" } else { "0" }),
            Token::Not => write!(f, "!"),
            Token::Bin(op) => write!(f, "{}", op.symbol()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// An expression compiled to Reverse Polish order.
///
/// Produced once per expression by [`parse`] and evaluated once per
/// truth-table row by [`Postfix::evaluate`].
///
/// [`Postfix::evaluate`]: Postfix::evaluate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix {
    pub(crate) tokens: Vec<Token>,
}

impl Postfix {
    /// The tokens in evaluation order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// A successfully parsed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    cleaned: String,
    variables: Vec<char>,
    postfix: Postfix,
}

impl ParsedExpression {
    /// The input with all whitespace removed.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Distinct variables appearing in the expression, sorted ascending.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The compiled postfix program.
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }
}

/// Parse and validate an expression string.
///
/// Validation covers, in order: non-emptiness, the character set,
/// parenthesis balance, and operator placement. Any failure aborts before
/// conversion; the caller must re-supply a corrected expression.
///
/// # Examples
///
/// ```
/// use quine_logic::expression::{parse, ParseError};
///
/// assert!(parse("a & b | !c").is_ok());
/// assert!(matches!(parse("a x b"), Err(ParseError::InvalidCharacter { .. })));
/// assert!(matches!(parse("(a & b"), Err(ParseError::UnbalancedParentheses)));
/// ```
pub fn parse(input: &str) -> Result<ParsedExpression, ParseError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens = lexer::tokenize(&cleaned)?;
    parser::check_parentheses(&tokens)?;
    parser::check_operator_placement(&tokens)?;

    let postfix = parser::to_postfix(&tokens)?;

    let mut variables: Vec<char> = ALPHABET
        .iter()
        .copied()
        .filter(|v| tokens.contains(&Token::Var(*v)))
        .collect();
    variables.sort_unstable();

    Ok(ParsedExpression {
        cleaned,
        variables,
        postfix,
    })
}

//! Boolean function minimization
//!
//! Parse a propositional expression over the variables `a`-`e`, generate
//! its truth table, emit the perfect normal forms, and reduce them with a
//! choice of three methods: Quine-McCluskey, Karnaugh map grouping, or
//! exhaustive pairwise gluing (the calculation method).
//!
//! # Example
//!
//! ```
//! use quine_logic::{parse, Form, Method, TruthTable};
//!
//! let parsed = parse("(a -> b) & c").unwrap();
//! let table = TruthTable::from_expression(&parsed).unwrap();
//! assert_eq!(table.minterm_indices(), &[1, 3, 7]);
//!
//! let reduced = table.minimize(Method::QuineMcCluskey, Form::Sdnf).unwrap();
//! assert_eq!(reduced.expression, "(!a & c) | (b & c)");
//! ```
//!
//! The target-set entry points skip parsing entirely:
//!
//! ```
//! use quine_logic::minimize_sdnf_quine;
//!
//! let reduced = minimize_sdnf_quine(&[0, 1], 2).unwrap();
//! assert_eq!(reduced.expression, "!a");
//! ```

pub mod canonical;
pub mod cover;
pub mod error;
pub mod expression;
pub mod minimize;
pub mod table;

pub use cover::{Form, Implicant};
pub use error::{Error, EvalError, MinimizeError};
pub use expression::{parse, BinOp, ParseError, ParsedExpression, Postfix, Token, ALPHABET};
pub use minimize::{reducer_for, Method, Minimization, Reducer, Stage, StageLog};
pub use table::{Row, TruthTable};

fn minimize_targets(
    targets: &[usize],
    num_vars: usize,
    method: Method,
    form: Form,
) -> Result<Minimization, MinimizeError> {
    if num_vars > ALPHABET.len() {
        return Err(MinimizeError::TooManyVariables {
            variables: num_vars,
            limit: ALPHABET.len(),
        });
    }
    let variables = &ALPHABET[..num_vars];
    let targets = targets.iter().copied().collect();
    reducer_for(method).reduce(&targets, variables, form)
}

/// Quine-McCluskey over a minterm index set, variables `a..`.
pub fn minimize_sdnf_quine(
    minterms: &[usize],
    num_vars: usize,
) -> Result<Minimization, MinimizeError> {
    minimize_targets(minterms, num_vars, Method::QuineMcCluskey, Form::Sdnf)
}

/// Quine-McCluskey over a maxterm index set, variables `a..`.
pub fn minimize_sknf_quine(
    maxterms: &[usize],
    num_vars: usize,
) -> Result<Minimization, MinimizeError> {
    minimize_targets(maxterms, num_vars, Method::QuineMcCluskey, Form::Sknf)
}

/// Karnaugh map grouping over a minterm index set, variables `a..`.
pub fn minimize_sdnf_karnaugh(
    minterms: &[usize],
    num_vars: usize,
) -> Result<Minimization, MinimizeError> {
    minimize_targets(minterms, num_vars, Method::Karnaugh, Form::Sdnf)
}

/// Karnaugh map grouping over a maxterm index set, variables `a..`.
pub fn minimize_sknf_karnaugh(
    maxterms: &[usize],
    num_vars: usize,
) -> Result<Minimization, MinimizeError> {
    minimize_targets(maxterms, num_vars, Method::Karnaugh, Form::Sknf)
}

/// The calculation method over a minterm index set, variables `a..`.
pub fn minimize_sdnf_calc(
    minterms: &[usize],
    num_vars: usize,
) -> Result<Minimization, MinimizeError> {
    minimize_targets(minterms, num_vars, Method::Calculation, Form::Sdnf)
}

/// The calculation method over a maxterm index set, variables `a..`.
pub fn minimize_sknf_calc(
    maxterms: &[usize],
    num_vars: usize,
) -> Result<Minimization, MinimizeError> {
    minimize_targets(maxterms, num_vars, Method::Calculation, Form::Sknf)
}

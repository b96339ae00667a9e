//! Truth-table generation
//!
//! Enumerates every assignment of the expression's variables in the
//! canonical row order (row index `i` assigns bit `n-1-k` of `i` to the
//! k-th variable, so the first variable is the most significant bit) and
//! evaluates the postfix program for each row with a small stack machine.
//!
//! The generated [`TruthTable`] owns the row results and the derived
//! minterm/maxterm index sets; each minimization request builds its own
//! terms from those sets and never mutates the table.

use crate::error::{EvalError, MinimizeError};
use crate::expression::{BinOp, ParsedExpression, Postfix, Token};
use crate::minimize::{reducer_for, Form, Method, Minimization};
use log::trace;
use std::collections::BTreeSet;

/// A single truth-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Variable values in sorted-variable order.
    pub assignment: Vec<bool>,
    /// The expression's value under this assignment.
    pub result: bool,
}

/// A complete truth table with derived minterm/maxterm index sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<Row>,
    minterms: Vec<usize>,
    maxterms: Vec<usize>,
}

impl Postfix {
    /// Evaluate the program under one assignment.
    ///
    /// `variables` gives the lookup order for `assignment`; a variable token
    /// absent from it fails with [`EvalError::UnknownVariable`]. Empty-stack
    /// pops and a final stack size other than one are reported as errors,
    /// never panics.
    pub fn evaluate(&self, variables: &[char], assignment: &[bool]) -> Result<bool, EvalError> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.tokens.len());

        for token in &self.tokens {
            match token {
                Token::Var(v) => {
                    let pos = variables
                        .iter()
                        .position(|x| x == v)
                        .ok_or(EvalError::UnknownVariable { variable: *v })?;
                    stack.push(assignment[pos]);
                }
                Token::Const(c) => stack.push(*c),
                Token::Not => {
                    let operand = stack
                        .pop()
                        .ok_or(EvalError::InsufficientOperands { operator: "!" })?;
                    stack.push(!operand);
                }
                Token::Bin(op) => {
                    // Right operand is popped first.
                    let right = stack.pop().ok_or(EvalError::InsufficientOperands {
                        operator: op.symbol(),
                    })?;
                    let left = stack.pop().ok_or(EvalError::InsufficientOperands {
                        operator: op.symbol(),
                    })?;
                    let value = match op {
                        BinOp::And => left && right,
                        BinOp::Or => left || right,
                        BinOp::Implies => !left || right,
                        BinOp::Equiv => left == right,
                    };
                    stack.push(value);
                }
                Token::LParen | Token::RParen => {
                    // Parentheses never survive shunting-yard conversion.
                    return Err(EvalError::MalformedExpression {
                        remaining: stack.len(),
                    });
                }
            }
        }

        if stack.len() != 1 {
            return Err(EvalError::MalformedExpression {
                remaining: stack.len(),
            });
        }
        Ok(stack[0])
    }
}

impl TruthTable {
    /// Enumerate all `2^n` rows and evaluate the postfix program for each.
    ///
    /// A zero-variable program (a bare constant) yields a single-row table
    /// with no variable columns.
    pub fn generate(variables: &[char], postfix: &Postfix) -> Result<TruthTable, EvalError> {
        let n = variables.len();
        let total = 1usize << n;

        let mut rows = Vec::with_capacity(total);
        let mut minterms = Vec::new();
        let mut maxterms = Vec::new();

        for index in 0..total {
            let assignment: Vec<bool> =
                (0..n).map(|k| ((index >> (n - 1 - k)) & 1) == 1).collect();
            let result = postfix.evaluate(variables, &assignment)?;
            trace!("row {index}: {assignment:?} -> {result}");
            if result {
                minterms.push(index);
            } else {
                maxterms.push(index);
            }
            rows.push(Row { assignment, result });
        }

        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
            minterms,
            maxterms,
        })
    }

    /// Convenience wrapper over [`TruthTable::generate`].
    pub fn from_expression(parsed: &ParsedExpression) -> Result<TruthTable, EvalError> {
        Self::generate(parsed.variables(), parsed.postfix())
    }

    /// Variables in sorted order (first = most significant index bit).
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// All rows in canonical index order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total row count, `2^n`.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row indices where the function is true, ascending.
    pub fn minterm_indices(&self) -> &[usize] {
        &self.minterms
    }

    /// Row indices where the function is false, ascending.
    pub fn maxterm_indices(&self) -> &[usize] {
        &self.maxterms
    }

    /// The result column read MSB-first as an integer (the function's
    /// index form).
    pub fn index_form(&self) -> u64 {
        let bits = self.rows.len();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.result)
            .fold(0u64, |acc, (i, _)| acc | 1 << (bits - 1 - i))
    }

    /// Run one reducer over this table's minterms (SDNF) or maxterms (SKNF).
    pub fn minimize(&self, method: Method, form: Form) -> Result<Minimization, MinimizeError> {
        let targets: BTreeSet<usize> = match form {
            Form::Sdnf => self.minterms.iter().copied().collect(),
            Form::Sknf => self.maxterms.iter().copied().collect(),
        };
        reducer_for(method).reduce(&targets, &self.variables, form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::parse;

    fn table(input: &str) -> TruthTable {
        let parsed = parse(input).unwrap();
        TruthTable::from_expression(&parsed).unwrap()
    }

    #[test]
    fn and_has_single_minterm() {
        let t = table("a & b");
        assert_eq!(t.num_rows(), 4);
        assert_eq!(t.minterm_indices(), &[3]);
        assert_eq!(t.maxterm_indices(), &[0, 1, 2]);
    }

    #[test]
    fn first_variable_is_most_significant_bit() {
        // Index 5 of (a, b, c) is a=1, b=0, c=1.
        let t = table("a & !b & c");
        assert_eq!(t.minterm_indices(), &[5]);
    }

    #[test]
    fn implication_row_semantics() {
        // (a -> b) & c is false at a=1, b=0, c=1 (index 5).
        let t = table("(a -> b) & c");
        assert_eq!(t.num_rows(), 8);
        assert!(!t.rows()[5].result);
        assert!(t.rows()[1].result); // a=0, b=0, c=1
    }

    #[test]
    fn equivalence_semantics() {
        let t = table("a ~ b");
        assert_eq!(t.minterm_indices(), &[0, 3]);
    }

    #[test]
    fn complementarity_holds() {
        let t = table("a | b -> c & !d");
        let mut all: Vec<usize> = t
            .minterm_indices()
            .iter()
            .chain(t.maxterm_indices())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..t.num_rows()).collect::<Vec<_>>());
    }

    #[test]
    fn bare_constant_gives_single_row() {
        let t = table("1");
        assert!(t.variables().is_empty());
        assert_eq!(t.num_rows(), 1);
        assert_eq!(t.minterm_indices(), &[0]);
        assert!(t.maxterm_indices().is_empty());
    }

    #[test]
    fn index_form_reads_result_column_msb_first() {
        // a & b over 4 rows: results 0001 -> index form 1.
        assert_eq!(table("a & b").index_form(), 1);
        // a | b: 0111 -> 7.
        assert_eq!(table("a | b").index_form(), 7);
    }

    #[test]
    fn adjacent_operands_fail_as_malformed() {
        // "a b" passes placement checks but leaves two stack values.
        let postfix = Postfix {
            tokens: vec![Token::Var('a'), Token::Var('b')],
        };
        let err = TruthTable::generate(&['a', 'b'], &postfix).unwrap_err();
        assert_eq!(err, EvalError::MalformedExpression { remaining: 2 });
    }

    #[test]
    fn operator_without_operands_fails() {
        let postfix = Postfix {
            tokens: vec![Token::Not],
        };
        let err = TruthTable::generate(&[], &postfix).unwrap_err();
        assert_eq!(err, EvalError::InsufficientOperands { operator: "!" });
    }

    #[test]
    fn unknown_variable_is_reported() {
        let postfix = Postfix {
            tokens: vec![Token::Var('e')],
        };
        let err = TruthTable::generate(&['a'], &postfix).unwrap_err();
        assert_eq!(err, EvalError::UnknownVariable { variable: 'e' });
    }
}

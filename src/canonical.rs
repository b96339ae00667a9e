//! Canonical normal forms
//!
//! The perfect (canonical) forms list one full-width term per table row:
//! SDNF has one conjunction per minterm, SKNF one disjunction per maxterm.
//! No reduction happens here; these are the starting points the reducers
//! improve on.

use crate::cover::{render_terms, Form, Implicant};

/// Perfect disjunctive normal form over the minterm indices.
///
/// An empty minterm set yields the constant `0`.
pub fn sdnf(variables: &[char], minterms: &[usize]) -> String {
    canonical(variables, minterms, Form::Sdnf)
}

/// Perfect conjunctive normal form over the maxterm indices.
///
/// An empty maxterm set yields the constant `1`.
pub fn sknf(variables: &[char], maxterms: &[usize]) -> String {
    canonical(variables, maxterms, Form::Sknf)
}

fn canonical(variables: &[char], indices: &[usize], form: Form) -> String {
    let width = variables.len();
    let terms: Vec<Implicant> = indices
        .iter()
        .map(|&index| Implicant::from_index(index, width))
        .collect();
    render_terms(&terms, variables, form)
}

//! Calculation-method reduction
//!
//! A flat variant of prime-implicant gluing: every pair in the current
//! term list is tried each round, with no popcount bucketing, and every
//! term ever produced stays eligible for the final coverage selection.
//! Slower than Quine-McCluskey but each round is easy to follow in the
//! stage log.

use super::{coverage_row, select_cover, Form, Implicant, Minimization, Reducer, Stage, StageLog};
use crate::cover::render_terms;
use crate::error::MinimizeError;
use log::debug;
use std::collections::{BTreeSet, HashSet};

fn describe(term: &Implicant) -> String {
    let indices: Vec<String> = term.covered().iter().map(usize::to_string).collect();
    format!("{} -> {{{}}}", term.pattern_string(), indices.join(", "))
}

/// Exhaustive pairwise gluing.
pub struct Calculation;

impl Reducer for Calculation {
    fn name(&self) -> &'static str {
        "Calculation"
    }

    fn reduce(
        &self,
        targets: &BTreeSet<usize>,
        variables: &[char],
        form: Form,
    ) -> Result<Minimization, MinimizeError> {
        let width = variables.len();
        let total = 1usize << width;
        let targets: BTreeSet<usize> = targets.iter().copied().filter(|t| *t < total).collect();

        if targets.is_empty() {
            return Ok(Minimization::constant(form.empty_constant()));
        }
        if targets.len() == total {
            return Ok(Minimization::constant(form.full_constant()));
        }

        let mut stages = StageLog::new();
        let mut terms: Vec<Implicant> = targets
            .iter()
            .map(|&t| Implicant::from_index(t, width))
            .collect();
        let mut all_terms = terms.clone();
        stages.push(Stage::new(
            "Initial terms",
            terms.iter().map(describe).collect(),
        ));

        let mut round = 1;
        loop {
            let mut glued: Vec<Implicant> = Vec::new();
            let mut used: HashSet<usize> = HashSet::new();
            for i in 0..terms.len() {
                for j in (i + 1)..terms.len() {
                    let Some(merged) = terms[i].combine(&terms[j]) else {
                        continue;
                    };
                    used.insert(i);
                    used.insert(j);
                    match glued.iter_mut().find(|m| m.pattern() == merged.pattern()) {
                        Some(existing) => existing.absorb_covered(&merged),
                        None => glued.push(merged),
                    }
                }
            }
            if glued.is_empty() {
                break;
            }

            debug!("gluing round {round}: {} new term(s)", glued.len());
            stages.push(Stage::new(
                format!("Gluing round {round}"),
                glued.iter().map(describe).collect(),
            ));

            let mut next: Vec<Implicant> = terms
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !used.contains(i))
                .map(|(_, term)| term)
                .collect();
            for term in &glued {
                if !all_terms.iter().any(|t| t.pattern() == term.pattern()) {
                    all_terms.push(term.clone());
                }
            }
            next.extend(glued);
            terms = next;
            round += 1;
        }

        stages.push(Stage::new(
            "Coverage table",
            all_terms
                .iter()
                .map(|t| coverage_row(t, &targets))
                .collect(),
        ));

        let selected = select_cover(&all_terms, &targets);
        let chosen: Vec<Implicant> = selected.iter().map(|&i| all_terms[i].clone()).collect();
        stages.push(Stage::new(
            "Selected terms",
            chosen.iter().map(describe).collect(),
        ));

        Ok(Minimization {
            expression: render_terms(&chosen, variables, form),
            stages,
        })
    }
}

//! Quine-McCluskey reduction
//!
//! Terms are bucketed by popcount so gluing only ever compares adjacent
//! buckets; terms that survive a whole round unglued are prime implicants.
//! A coverage table over the primes then drives essential and greedy
//! selection.

use super::{coverage_row, select_cover, Form, Implicant, Minimization, Reducer, Stage, StageLog};
use crate::cover::render_terms;
use crate::error::MinimizeError;
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashSet};

fn describe(term: &Implicant) -> String {
    let indices: Vec<String> = term.covered().iter().map(usize::to_string).collect();
    format!("{} -> {{{}}}", term.pattern_string(), indices.join(", "))
}

/// The tabular prime-implicant method.
pub struct QuineMcCluskey;

impl Reducer for QuineMcCluskey {
    fn name(&self) -> &'static str {
        "Quine-McCluskey"
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
        let mut current: Vec<Implicant> = targets
            .iter()
            .map(|&t| Implicant::from_index(t, width))
            .collect();
        stages.push(Stage::new(
            "Initial terms",
            current.iter().map(describe).collect(),
        ));

        let mut primes: Vec<Implicant> = Vec::new();
        let mut round = 1;
        loop {
            let mut groups: BTreeMap<u32, Vec<Implicant>> = BTreeMap::new();
            for term in current {
                groups.entry(term.ones()).or_default().push(term);
            }

            let mut merged: Vec<Implicant> = Vec::new();
            let mut used: HashSet<String> = HashSet::new();
            for (&ones, group) in &groups {
                let Some(next) = groups.get(&(ones + 1)) else {
                    continue;
                };
                for a in group {
                    for b in next {
                        let Some(glued) = a.combine(b) else {
                            continue;
                        };
                        used.insert(a.pattern_string());
                        used.insert(b.pattern_string());
                        match merged.iter_mut().find(|m| m.pattern() == glued.pattern()) {
                            Some(existing) => existing.absorb_covered(&glued),
                            None => merged.push(glued),
                        }
                    }
                }
            }

            // Whatever failed to glue this round is prime.
            for group in groups.values() {
                for term in group {
                    if !used.contains(&term.pattern_string())
                        && !primes.iter().any(|p| p.pattern() == term.pattern())
                    {
                        primes.push(term.clone());
                    }
                }
            }

            if merged.is_empty() {
                break;
            }
            debug!("gluing round {round}: {} merged term(s)", merged.len());
            stages.push(Stage::new(
                format!("Gluing round {round}"),
                merged.iter().map(describe).collect(),
            ));
            current = merged;
            round += 1;
        }

        stages.push(Stage::new(
            "Prime implicants",
            primes.iter().map(describe).collect(),
        ));
        stages.push(Stage::new(
            "Coverage table",
            primes.iter().map(|p| coverage_row(p, &targets)).collect(),
        ));

        let selected = select_cover(&primes, &targets);
        let chosen: Vec<Implicant> = selected.iter().map(|&i| primes[i].clone()).collect();
        stages.push(Stage::new(
            "Selected implicants",
            chosen.iter().map(describe).collect(),
        ));

        Ok(Minimization {
            expression: render_terms(&chosen, variables, form),
            stages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(targets: &[usize], variables: &[char], form: Form) -> Minimization {
        let targets: BTreeSet<usize> = targets.iter().copied().collect();
        QuineMcCluskey.reduce(&targets, variables, form).unwrap()
    }

    #[test]
    fn single_minterm_stays_concrete() {
        let result = reduce(&[3], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "(a & b)");
    }

    #[test]
    fn empty_target_set_is_a_constant_with_no_stages() {
        let result = reduce(&[], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "0");
        assert!(result.stages.is_empty());

        let result = reduce(&[], &['a', 'b'], Form::Sknf);
        assert_eq!(result.expression, "1");
    }

    #[test]
    fn full_target_set_is_a_constant() {
        let result = reduce(&[0, 1, 2, 3], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "1");
        assert!(result.stages.is_empty());
    }

    #[test]
    fn classic_three_variable_example() {
        // Minterms 0,1,2,5,6,7 reduce to three two-literal products.
        let result = reduce(&[0, 1, 2, 5, 6, 7], &['a', 'b', 'c'], Form::Sdnf);
        assert_eq!(result.expression, "(!a & !b) | (b & !c) | (a & c)");
    }

    #[test]
    fn sknf_polarity_is_inverted() {
        // Maxterms of a & b are 0,1,2; their primes 0- and -0 render as the
        // bare positive variables in product-of-sums polarity.
        let result = reduce(&[0, 1, 2], &['a', 'b'], Form::Sknf);
        assert_eq!(result.expression, "a & b");
    }

    #[test]
    fn stages_trace_the_reduction() {
        let result = reduce(&[0, 1], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "!a");
        let titles: Vec<&str> = result
            .stages
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Initial terms",
                "Gluing round 1",
                "Prime implicants",
                "Coverage table",
                "Selected implicants"
            ]
        );
        assert_eq!(result.stages[1].items, vec!["0- -> {0, 1}"]);
    }

    #[test]
    fn out_of_range_targets_are_ignored() {
        let result = reduce(&[3, 9], &['a', 'b'], Form::Sdnf);
        assert_eq!(result.expression, "(a & b)");
    }
}

//! Minimization strategies
//!
//! Three reducers produce a minimal normal form from a target index set:
//!
//! * [`QuineMcCluskey`]: popcount-grouped gluing to prime implicants,
//!   then coverage-table selection.
//! * [`KarnaughMap`]: a Gray-coded grid searched for the largest valid
//!   rectangular blocks (up to five variables).
//! * [`Calculation`]: flat pairwise gluing over the whole term list with
//!   selection over every term produced along the way.
//!
//! All three share the [`Implicant`] term type and emit a [`Minimization`]
//! carrying the final expression plus a human-readable stage log, so a
//! caller can show its work the same way regardless of method.

use crate::error::MinimizeError;
use std::collections::BTreeSet;

pub use crate::cover::{Form, Implicant};

mod calc;
mod karnaugh;
mod quine;

pub use calc::Calculation;
pub use karnaugh::KarnaughMap;
pub use quine::QuineMcCluskey;

/// Which reducer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Flat pairwise gluing ("calculation" method).
    Calculation,
    /// Quine-McCluskey with a coverage table.
    QuineMcCluskey,
    /// Karnaugh map grouping.
    Karnaugh,
}

/// One titled step of a reduction, with its rendered items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// What happened in this step.
    pub description: String,
    /// Rendered lines (terms, table rows, grid rows).
    pub items: Vec<String>,
}

impl Stage {
    pub fn new(description: impl Into<String>, items: Vec<String>) -> Self {
        Stage {
            description: description.into(),
            items,
        }
    }
}

/// The ordered trace of a reduction.
pub type StageLog = Vec<Stage>;

/// A finished reduction: the minimized expression and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimization {
    /// The minimized expression, re-parseable by [`crate::expression::parse`].
    pub expression: String,
    /// The steps taken, empty for degenerate constant results.
    pub stages: StageLog,
}

impl Minimization {
    /// A constant result with no stages.
    pub(crate) fn constant(text: &str) -> Self {
        Minimization {
            expression: text.to_string(),
            stages: Vec::new(),
        }
    }
}

/// A minimization strategy over a set of target row indices.
///
/// `targets` holds minterm indices for [`Form::Sdnf`] and maxterm indices
/// for [`Form::Sknf`]; the algorithm is identical either way, only the
/// rendering polarity differs.
pub trait Reducer {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Reduce the target set to a minimal expression over `variables`.
    fn reduce(
        &self,
        targets: &BTreeSet<usize>,
        variables: &[char],
        form: Form,
    ) -> Result<Minimization, MinimizeError>;
}

static CALCULATION: Calculation = Calculation;
static QUINE_MCCLUSKEY: QuineMcCluskey = QuineMcCluskey;
static KARNAUGH_MAP: KarnaughMap = KarnaughMap;

/// Look up the reducer for a method.
pub fn reducer_for(method: Method) -> &'static dyn Reducer {
    match method {
        Method::Calculation => &CALCULATION,
        Method::QuineMcCluskey => &QUINE_MCCLUSKEY,
        Method::Karnaugh => &KARNAUGH_MAP,
    }
}

/// Pick a covering subset of `terms` for `targets`.
///
/// Targets covered by exactly one term force that term in (the essential
/// pass); the rest are covered greedily by whichever term covers the most
/// still-uncovered targets. Ties prefer the term with fewer literals, then
/// the earliest term. Returns indices into `terms` in ascending order. A
/// target no term covers is skipped, leaving a best-effort partial cover
/// rather than looping.
pub(crate) fn select_cover(terms: &[Implicant], targets: &BTreeSet<usize>) -> Vec<usize> {
    let mut selected: BTreeSet<usize> = BTreeSet::new();
    let mut remaining: BTreeSet<usize> = targets.clone();

    for &target in targets {
        let coverers: Vec<usize> = terms
            .iter()
            .enumerate()
            .filter(|(_, term)| term.covers(target))
            .map(|(i, _)| i)
            .collect();
        if let [only] = coverers[..] {
            selected.insert(only);
        }
    }
    for &i in &selected {
        remaining.retain(|t| !terms[i].covers(*t));
    }

    while !remaining.is_empty() {
        let mut best: Option<(usize, usize)> = None;
        for (i, term) in terms.iter().enumerate() {
            if selected.contains(&i) {
                continue;
            }
            let gain = remaining.iter().filter(|t| term.covers(**t)).count();
            if gain == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((prev, prev_gain)) => {
                    gain > prev_gain
                        || (gain == prev_gain
                            && term.literal_count() < terms[prev].literal_count())
                }
            };
            if better {
                best = Some((i, gain));
            }
        }
        match best {
            Some((i, _)) => {
                remaining.retain(|t| !terms[i].covers(*t));
                selected.insert(i);
            }
            None => break,
        }
    }

    selected.into_iter().collect()
}

/// Render one coverage-table row for the stage log.
pub(crate) fn coverage_row(term: &Implicant, targets: &BTreeSet<usize>) -> String {
    let marks: Vec<String> = targets
        .iter()
        .map(|t| {
            if term.covers(*t) {
                format!("{t}:X")
            } else {
                format!("{t}:.")
            }
        })
        .collect();
    format!("{}  {}", term.pattern_string(), marks.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(bits: &str) -> Implicant {
        let pattern = bits
            .chars()
            .map(|c| match c {
                '1' => Some(true),
                '0' => Some(false),
                _ => None,
            })
            .collect();
        Implicant::new(pattern, BTreeSet::new())
    }

    #[test]
    fn essential_terms_are_forced() {
        // Only "1-" covers 2; "01" and "1-" together cover everything.
        let terms = vec![term("01"), term("1-"), term("-1")];
        let targets: BTreeSet<usize> = [1, 2, 3].into_iter().collect();
        assert_eq!(select_cover(&terms, &targets), vec![0, 1]);
    }

    #[test]
    fn greedy_prefers_larger_gain() {
        let terms = vec![term("000"), term("0--")];
        let targets: BTreeSet<usize> = [0, 1, 2].into_iter().collect();
        assert_eq!(select_cover(&terms, &targets), vec![1]);
    }

    #[test]
    fn ties_go_to_the_earliest_term() {
        let terms = vec![term("0-"), term("-0")];
        let targets: BTreeSet<usize> = [0].into_iter().collect();
        assert_eq!(select_cover(&terms, &targets), vec![0]);
    }

    #[test]
    fn uncoverable_targets_are_skipped() {
        let terms = vec![term("00")];
        let targets: BTreeSet<usize> = [0, 3].into_iter().collect();
        assert_eq!(select_cover(&terms, &targets), vec![0]);
    }

    #[test]
    fn coverage_row_marks_covered_targets() {
        let targets: BTreeSet<usize> = [0, 1, 3].into_iter().collect();
        let row = coverage_row(&term("0-"), &targets);
        assert_eq!(row, "0-  0:X 1:X 3:.");
    }
}
